use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Startup flags. Everything else happens inside the session.
#[derive(Parser, Debug)]
#[command(name = "notez", bin_name = "notez", version = get_version())]
#[command(about = "An interactive note keeper for the terminal", long_about = None)]
pub struct Cli {
    /// Load this notes file before the first prompt
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Error on out-of-range positions instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Debug-level logging (goes to the log file, never the screen)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input, parsed in multicall mode so the first word is
/// the command itself.
#[derive(Parser, Debug)]
#[command(name = "notez", multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

impl ShellLine {
    /// Parse a raw input line into a session command.
    pub fn from_line(line: &str) -> Result<ShellCommand, clap::Error> {
        let words = line.split_whitespace();
        ShellLine::try_parse_from(words).map(|parsed| parsed.command)
    }
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add a note (prompts for name and content)
    #[command(alias = "a")]
    Add,

    /// Rewrite the note at a position (blank input keeps a field)
    #[command(alias = "e")]
    Edit {
        /// Position as shown in the list
        position: usize,
    },

    /// Show one note in full
    #[command(alias = "v")]
    View {
        /// Position as shown in the list
        position: usize,
    },

    /// Delete the note at a position
    #[command(alias = "rm")]
    Delete {
        /// Position as shown in the list
        position: usize,
    },

    /// Show all notes and clear the search filter
    #[command(alias = "ls")]
    List,

    /// Filter the list by a term; with no term, clear the filter
    #[command(alias = "s")]
    Search {
        /// Words to match against names and contents
        term: Vec<String>,
    },

    /// Write all notes to a file
    Save {
        /// Target file (falls back to the default_file config key)
        path: Option<PathBuf>,
    },

    /// Replace all notes with a file's contents
    Load {
        /// Source file (falls back to the default_file config key)
        path: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (strict_indexes, default_file)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },

    /// Leave the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}
