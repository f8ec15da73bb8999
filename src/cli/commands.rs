//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diario")]
#[command(about = "Terminal note journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding entries and config.toml
    /// (default: $DIARIO_ROOT, then the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the storage directory with a default config.toml
    Init,

    /// Show all entries (default when no command is given)
    List,

    /// Add an entry at the end of the list
    Add {
        /// Entry title (may be empty)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry description (may be empty)
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Delete the entry with the given id
    Delete {
        /// Id shown in brackets by `diario list`
        id: String,
    },

    /// Interactive session: list, add and delete entries until `quit`
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["diario"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.root, None);
    }

    #[test]
    fn test_add_defaults_to_empty_fields() {
        let cli = Cli::try_parse_from(["diario", "add"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                title: String::new(),
                description: String::new()
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["diario", "delete", "42", "--root", "/tmp/j", "-vv"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Delete {
                id: "42".to_string()
            })
        );
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/j")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["diario", "delete"]).is_err());
    }
}
