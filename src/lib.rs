//! lessonbook: a C# and TypeScript/React training curriculum, compiled in.
//!
//! The crate is a content store. Section modules under [`content`] hold the
//! curriculum as `'static` literals; [`core::catalog`] composes them into two
//! ordered tracks and provides 1-based, bounds-checked lookups.
//!
//! # Examples
//!
//! ```
//! use lessonbook::{get_lesson, get_section};
//!
//! let section = get_section(1).unwrap();
//! assert_eq!(section.title, "C# Fundamentals");
//!
//! let lesson = get_lesson(1, 2).unwrap();
//! assert_eq!(lesson.title, "Control Flow");
//!
//! let err = get_section(9).unwrap_err();
//! assert_eq!(err.to_string(), "Section 9 does not exist. Valid range: 1-8");
//! ```
//!
//! # Crate Structure
//!
//! - [`content`]: Curriculum section literals and the shortlist track
//! - [`core`]: Model, lookups, rendering, search, fingerprints and lint
//! - [`cli`]: The `lessonbook` command-line surface

pub mod cli;
pub mod content;
pub mod core;

pub use crate::content::{
    CSHARP_ASYNC_WEB, CSHARP_COLLECTIONS, CSHARP_FUNDAMENTALS, CSHARP_OOP, FULL_STACK_INTEGRATION,
    REACT_TYPESCRIPT, TYPESCRIPT_ADVANCED_TYPES, TYPESCRIPT_FUNDAMENTALS,
};
pub use crate::core::catalog::{
    CURRICULUM, SHORTLIST_CURRICULUM, Track, get_lesson, get_section, get_shortlist_section,
};
pub use crate::core::error::LessonbookError;
pub use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

use crate::cli::{Cli, Command};
use crate::core::config::{self, OutputFormat, ReaderConfig};
use crate::core::{catalog, envelope, fragment, render, search, validate};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};

pub fn run() -> Result<(), LessonbookError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let mut cfg = config::load_config(&current_dir)?;
    if let Some(track) = cli.track {
        cfg.track = track;
    }
    if let Some(format) = cli.format {
        cfg.format = format;
    }
    if cli.no_color {
        cfg.color = false;
    }
    if !cfg.color {
        colored::control::set_override(false);
    }
    let mut out = io::stdout().lock();
    let result = dispatch(cli.command, &cfg, &mut out).and_then(|()| Ok(out.flush()?));
    ignore_broken_pipe(result)
}

/// A reader that closes stdout early (`lessonbook search C# | head -3`) ends
/// the run quietly.
fn ignore_broken_pipe(result: Result<(), LessonbookError>) -> Result<(), LessonbookError> {
    match result {
        Err(LessonbookError::IoError(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn print_json(
    out: &mut impl Write,
    cmd: &str,
    status: &str,
    payload: serde_json::Value,
) -> Result<(), LessonbookError> {
    let env = envelope::command_envelope(cmd, status, payload);
    writeln!(out, "{}", serde_json::to_string_pretty(&env)?)?;
    Ok(())
}

fn dispatch(
    command: Command,
    cfg: &ReaderConfig,
    out: &mut impl Write,
) -> Result<(), LessonbookError> {
    let track = cfg.track;
    let markdown = cfg.format == OutputFormat::Markdown;

    match command {
        Command::Version => {
            writeln!(out, "v{}", env!("CARGO_PKG_VERSION"))?;
        }
        Command::Sections => {
            let sections = track.sections();
            if cfg.format == OutputFormat::Json {
                let list: Vec<_> = sections
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        serde_json::json!({
                            "section": i + 1,
                            "title": s.title,
                            "lessons": s.lesson_count(),
                            "challenge": s.challenge.is_some(),
                        })
                    })
                    .collect();
                return print_json(
                    out,
                    "sections",
                    "ok",
                    serde_json::json!({ "track": track, "sections": list }),
                );
            }
            writeln!(out, "{} ({} sections)", format!("{} track", track).bold(), sections.len())?;
            for (i, s) in sections.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}. {} {} - {}",
                    i + 1,
                    s.title.bright_cyan(),
                    format!("({} lessons)", s.lesson_count()).dimmed(),
                    render::compact_line(s.description, 70)
                )?;
            }
        }
        Command::Section { section } => {
            let s = catalog::get_track_section(track, section)?;
            match cfg.format {
                OutputFormat::Json => {
                    return print_json(
                        out,
                        "section",
                        "ok",
                        serde_json::json!({ "track": track, "index": section, "section": s }),
                    );
                }
                _ => writeln!(out, "{}", render::section_outline(s, markdown))?,
            }
        }
        Command::Lesson { section, lesson } => {
            let l = catalog::get_track_lesson(track, section, lesson)?;
            match cfg.format {
                OutputFormat::Json => {
                    return print_json(
                        out,
                        "lesson",
                        "ok",
                        serde_json::json!({ "track": track, "section": section, "index": lesson, "lesson": l }),
                    );
                }
                OutputFormat::Markdown => writeln!(out, "{}", render::lesson_markdown(l))?,
                OutputFormat::Text => writeln!(out, "{}", render::lesson_text(l))?,
            }
        }
        Command::Challenge { section } => {
            let s = catalog::get_track_section(track, section)?;
            let challenge = catalog::get_challenge(track, section)?.ok_or_else(|| {
                LessonbookError::NotFound(format!("Section {} ({}) has no challenge", section, s.title))
            })?;
            match cfg.format {
                OutputFormat::Json => {
                    return print_json(
                        out,
                        "challenge",
                        "ok",
                        serde_json::json!({ "track": track, "section": section, "challenge": challenge }),
                    );
                }
                _ => writeln!(out, "{}", render::challenge_text(s, challenge, markdown))?,
            }
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let index = search::SearchIndex::build(track);
            let hits = index.search(&query);
            if cfg.format == OutputFormat::Json {
                return print_json(
                    out,
                    "search",
                    "ok",
                    serde_json::json!({ "track": track, "query": query, "hits": hits }),
                );
            }
            if hits.is_empty() {
                writeln!(out, "{} No matches for {:?} in the {} track", "ℹ".bright_yellow(), query, track)?;
                return Ok(());
            }
            for hit in &hits {
                writeln!(out, "{:<8} {}", hit.address().bright_cyan(), hit.title)?;
            }
            writeln!(out, "{}", format!("{} match(es)", hits.len()).dimmed())?;
        }
        Command::Fragment { section, lesson } => {
            let f = fragment::get_fragment(track, section, lesson, cfg.excerpt_chars)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&f)?)?;
        }
        Command::Export => {
            let sections: Vec<&Section> = track.sections().to_vec();
            writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "track": track, "sections": sections }))?
            )?;
        }
        Command::Stats => {
            let all = [catalog::stats(Track::Full), catalog::stats(Track::Shortlist)];
            if cfg.format == OutputFormat::Json {
                return print_json(out, "stats", "ok", serde_json::json!({ "tracks": all }));
            }
            for s in &all {
                writeln!(
                    out,
                    "{:<10} sections={} lessons={} subsections={} code_examples={} exercises={} challenges={}",
                    s.track, s.sections, s.lessons, s.subsections, s.code_examples, s.exercises, s.challenges
                )?;
            }
        }
        Command::Validate => {
            let json = cfg.format == OutputFormat::Json;
            if !json {
                writeln!(out, "validate: running")?;
            }
            let report = validate::run_validation();
            if json {
                let status = if report.passed() { "ok" } else { "fail" };
                print_json(out, "validate", status, serde_json::to_value(&report)?)?;
            } else {
                for failure in &report.failures {
                    writeln!(out, "  {} {}", "✗".bright_red(), failure)?;
                }
                writeln!(
                    out,
                    "validate: {} passed, {} failed",
                    report.pass_count.to_string().bright_green(),
                    report.fail_count.to_string().bright_red()
                )?;
            }
            if !report.passed() {
                return Err(LessonbookError::ValidationError(format!(
                    "{} content gate(s) failed",
                    report.fail_count
                )));
            }
            if !json {
                writeln!(out, "{} content is valid", "✓".bright_green())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_stdout_ends_quietly() {
        let cfg = ReaderConfig::default();
        let result = dispatch(Command::Sections, &cfg, &mut ClosedPipe);
        assert!(matches!(&result, Err(LessonbookError::IoError(e)) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(ignore_broken_pipe(result).is_ok());
    }

    #[test]
    fn test_other_errors_still_surface() {
        let err = ignore_broken_pipe(Err(LessonbookError::NotFound("x".into())));
        assert!(matches!(err, Err(LessonbookError::NotFound(_))));
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(ignore_broken_pipe(Err(LessonbookError::IoError(denied))).is_err());
    }

    #[test]
    fn test_dispatch_writes_to_given_writer() {
        let cfg = ReaderConfig {
            format: OutputFormat::Markdown,
            ..ReaderConfig::default()
        };
        let mut buf = Vec::new();
        dispatch(Command::Lesson { section: 1, lesson: 2 }, &cfg, &mut buf).expect("lesson");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("# Control Flow"));
    }

    #[test]
    fn test_challenge_arm_reports_missing_challenge() {
        let cfg = ReaderConfig {
            track: Track::Shortlist,
            ..ReaderConfig::default()
        };
        let mut buf = Vec::new();
        let err = dispatch(Command::Challenge { section: 1 }, &cfg, &mut buf).unwrap_err();
        assert!(err.to_string().contains("has no challenge"));
        assert!(buf.is_empty());
    }
}
