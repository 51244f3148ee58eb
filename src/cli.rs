//! CLI struct definitions for the lessonbook command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::core::catalog::Track;
use crate::core::config::OutputFormat;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "lessonbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read the C# and TypeScript/React curriculum from the terminal"
)]
pub struct Cli {
    /// Curriculum track (overrides `track` in lessonbook.toml).
    #[clap(long, short, value_enum, global = true)]
    pub track: Option<Track>,
    /// Output format (overrides `format` in lessonbook.toml).
    #[clap(long, short, value_enum, global = true)]
    pub format: Option<OutputFormat>,
    /// Disable colored output.
    #[clap(long, global = true)]
    pub no_color: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the numbered sections of a track.
    Sections,
    /// Show the lesson outline of one section.
    Section {
        /// 1-based section number.
        #[clap(allow_negative_numbers = true)]
        section: i64,
    },
    /// Show one lesson in full.
    Lesson {
        /// 1-based section number.
        #[clap(allow_negative_numbers = true)]
        section: i64,
        /// 1-based lesson number within the section.
        #[clap(allow_negative_numbers = true)]
        lesson: i64,
    },
    /// Show the closing challenge of a section.
    Challenge {
        /// 1-based section number.
        #[clap(allow_negative_numbers = true)]
        section: i64,
    },
    /// Search titles and explanations; every word must match.
    Search {
        /// Words to look for, case-insensitive.
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print the content fingerprint of a lesson as JSON.
    Fragment {
        /// 1-based section number.
        #[clap(allow_negative_numbers = true)]
        section: i64,
        /// 1-based lesson number within the section.
        #[clap(allow_negative_numbers = true)]
        lesson: i64,
    },
    /// Dump a whole track as JSON.
    Export,
    /// Print content counts for both tracks.
    Stats,
    /// Lint the compiled-in content.
    Validate,
    /// Print the version.
    Version,
}
