//! Clap definitions for the `studynote` binary.
//!
//! # Responsibility
//! - Declare global flags and subcommands.
//! - Map clap value enums onto core request enums.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use studynote_core::{Difficulty, StudyMode};

#[derive(Parser)]
#[command(name = "studynote", version)]
#[command(about = "Generate, tag and keep templated study notes", long_about = None)]
pub struct Cli {
    /// SQLite file holding saved notes
    #[arg(long, global = true, env = "STUDYNOTE_DB", default_value = "studynote.sqlite3")]
    pub db: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "STUDYNOTE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "STUDYNOTE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Override the tag cap of the active policy
    #[arg(long, global = true)]
    pub tag_cap: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Single-topic note with a study-mode body")]
    Single {
        #[arg(long)]
        name: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
        /// Education level, e.g. "Grade 11"
        #[arg(long)]
        level: String,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        #[arg(long, value_enum, default_value_t = ModeArg::Short)]
        mode: ModeArg,
        /// Store the generated note in the database
        #[arg(long)]
        save: bool,
    },

    #[command(about = "Multi-topic outline with six fixed sections")]
    Outline {
        #[arg(long)]
        subject: String,
        /// Topics separated by comma, semicolon or newline
        #[arg(long)]
        topics: String,
        #[arg(long, default_value = "High School")]
        level: String,
        #[arg(long, default_value = "Bulleted")]
        style: String,
        #[arg(long, default_value = "Concise")]
        tone: String,
        /// Render the body as HTML instead of plain text
        #[arg(long)]
        html: bool,
        /// Derive tags by word-splitting the body instead of from metadata
        #[arg(long)]
        body_tags: bool,
        /// Store the generated note in the database
        #[arg(long)]
        save: bool,
    },

    #[command(about = "Print tags derived from text")]
    Tags {
        text: String,
        #[arg(short = 'n', long, default_value = "8")]
        cap: usize,
    },

    #[command(about = "List saved notes, pinned first")]
    List,

    #[command(about = "Print binary and core library versions")]
    Version,

    #[command(about = "Find notes by title, body text or tag")]
    Search { query: String },

    #[command(about = "Toggle the pinned flag of a note")]
    Pin { id: String },

    #[command(about = "Delete a note")]
    Delete { id: String },

    #[command(about = "Write all notes as a JSON array")]
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    #[command(about = "Upsert notes from a JSON array file")]
    Import { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Short,
    Detailed,
    Exam,
}

impl From<ModeArg> for StudyMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Short => StudyMode::Short,
            ModeArg::Detailed => StudyMode::Detailed,
            ModeArg::Exam => StudyMode::Exam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn version_subcommand_parses() {
        let cli = Cli::try_parse_from(["studynote", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn tag_cap_is_global() {
        let cli = Cli::try_parse_from(["studynote", "list", "--tag-cap", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.tag_cap, Some(3));
    }
}
