//! CLI command definitions

use clap::{Parser, Subcommand};
use resolver_domain::Participant;
use std::path::PathBuf;

/// CLI arguments for relationship-resolver
#[derive(Parser, Debug)]
#[command(name = "relationship-resolver")]
#[command(author, version, about = "Two statements, one shared code, one AI-mediated summary")]
#[command(long_about = r#"
Relationship Resolver lets two participants each write down their side of a
disagreement under a shared session code, then asks a summarization service
for a neutral summary of both.

Typical flow:
1. One participant runs `new` and shares the printed code
2. The other participant runs `join <CODE>`
3. Each participant submits a statement
4. Either participant runs `summarize`

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./resolver.toml     Project-level config
3. ~/.config/relationship-resolver/config.toml   Global config

Example:
  relationship-resolver new
  relationship-resolver submit -p 1 "I feel like my plans always come second"
  relationship-resolver submit -p 2 "I feel like I never get a say in the plans"
  relationship-resolver summarize
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Keep all data in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Session commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a new session code and make it current
    New,

    /// Join an existing session by its code
    Join {
        /// Code shared by the other participant
        code: String,
    },

    /// Print the current session code
    Code,

    /// Submit a statement for a participant
    Submit {
        /// Participant submitting (1 or 2)
        #[arg(short, long, value_name = "1|2")]
        participant: Participant,

        /// The statement
        text: String,
    },

    /// List the statements recorded for the current session
    Show,

    /// Ask the summarization service for a summary of both statements
    Summarize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let cli = Cli::parse_from([
            "relationship-resolver",
            "submit",
            "-p",
            "2",
            "I feel dismissed",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Submit {
                participant: Participant::Two,
                text: "I feel dismissed".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_participant() {
        let result = Cli::try_parse_from(["relationship-resolver", "submit", "-p", "3", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["relationship-resolver", "summarize", "-vv", "--ephemeral"]);
        assert_eq!(cli.command, Some(Command::Summarize));
        assert_eq!(cli.verbose, 2);
        assert!(cli.ephemeral);
    }

    #[test]
    fn test_parse_join() {
        let cli = Cli::parse_from(["relationship-resolver", "join", "Xy7pQ2"]);
        assert_eq!(
            cli.command,
            Some(Command::Join {
                code: "Xy7pQ2".to_string()
            })
        );
    }
}
