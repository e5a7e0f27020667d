use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Student record manager backed by a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (holds config.json and, by default, the records file)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Records file, overriding the configured one for this run
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a")]
    Add {
        id: String,
        name: String,
        /// Computing or Business
        programme: String,
        /// Date of birth (YYYY-MM-DD)
        dob: String,
        gpa: String,
    },

    /// Show a student by ID
    #[command(alias = "s")]
    Search { id: String },

    /// Delete a student by ID
    #[command(alias = "rm")]
    Delete { id: String },

    /// Update fields of a student; omitted fields keep their value
    #[command(alias = "u")]
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        programme: Option<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        gpa: Option<String>,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Show or change configuration
    Config {
        /// Config key (data-file, programme-policy)
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from([
            "roster", "add", "1001", "Alice", "Computing", "2000-01-01", "3.5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { id, gpa, .. }) => {
                assert_eq!(id, "1001");
                assert_eq!(gpa, "3.5");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_update_flags_and_globals() {
        let cli = Cli::try_parse_from([
            "roster", "-vv", "update", "1001", "--gpa", "3.9", "--file", "x.txt",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("x.txt")));
        match cli.command {
            Some(Commands::Update { name, gpa, .. }) => {
                assert_eq!(name, None);
                assert_eq!(gpa.as_deref(), Some("3.9"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
