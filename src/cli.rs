//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// Sapling: grammar and spelling edits from the command line
#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Fetch suggested edits for a piece of text
    Edits {
        /// Text to check, or `-` to read it from stdin
        #[arg(value_name = "TEXT")]
        text: String,

        /// Session id grouping related requests (generated when omitted)
        #[arg(short, long)]
        session_id: Option<String>,
    },

    /// Mark an edit suggestion as helpful
    Accept {
        /// Id of the edit returned by `edits`
        edit_id: String,

        session_id: Option<String>,
    },

    /// Ask the service not to recommend an edit again
    Reject {
        /// Id of the edit returned by `edits`
        edit_id: String,

        session_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edits() {
        let cli = Cli::try_parse_from(["sapling", "edits", "Lets get started!"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Edits {
                text: "Lets get started!".into(),
                session_id: None,
            }
        );
    }

    #[test]
    fn test_parse_accept_with_session() {
        let cli = Cli::try_parse_from(["sapling", "accept", "edit-1", "doc-7"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Accept {
                edit_id: "edit-1".into(),
                session_id: Some("doc-7".into()),
            }
        );
    }

    #[test]
    fn test_parse_reject_without_session() {
        let cli = Cli::try_parse_from(["sapling", "reject", "edit-1"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Reject {
                edit_id: "edit-1".into(),
                session_id: None,
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        assert!(Cli::try_parse_from(["sapling"]).is_err());
        assert!(Cli::try_parse_from(["sapling", "accept"]).is_err());
    }
}
