//! Command-line interface for crosszeros.

use clap::{Parser, Subcommand};

/// CrossZeros - N-in-a-row board game for the console
#[derive(Parser, Debug)]
#[command(name = "crosszeros")]
#[command(about = "Play crosses-and-noughts on boards of any size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu
    Menu,

    /// Start a classic 3x3 two-player game straight away
    Classic,

    /// Start a game with custom rules straight away
    Custom {
        /// Board width in cells
        #[arg(long, default_value = "3")]
        width: u8,

        /// Board height in cells
        #[arg(long, default_value = "3")]
        height: u8,

        /// Marks in a row needed to win
        #[arg(long, default_value = "3")]
        line: u8,

        /// Invalid moves tolerated per player, -1 for unlimited
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        errors: i16,

        /// Number of players
        #[arg(long, default_value = "2")]
        players: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_opens_the_menu() {
        let cli = Cli::parse_from(["crosszeros"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_custom_accepts_unlimited_errors() {
        let cli = Cli::parse_from(["crosszeros", "custom", "--errors", "-1", "--width", "5"]);
        match cli.command {
            Some(Command::Custom { width, errors, .. }) => {
                assert_eq!(width, 5);
                assert_eq!(errors, -1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
