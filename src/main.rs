use colored::Colorize;

fn main() {
    if let Err(e) = lessonbook::run() {
        let err = anyhow::Error::from(e);
        eprintln!("{} {:#}", "error:".bright_red().bold(), err);
        std::process::exit(1);
    }
}
