use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solace", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to <config dir>/solace/config.toml)
    #[arg(short, long, env = "SOLACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start an interactive check-in session (the default)
    Chat,
    /// Print a random journaling prompt
    Prompt {
        #[arg(long)]
        json: bool,
    },
    /// Print the recommendation for a mood
    Recommend {
        mood: String,
        #[arg(long)]
        json: bool,
    },
    /// List resources for a topic (stress, anxiety, general)
    Resources {
        topic: String,
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    /// Resolve the tracing filter: flags win over the configured level.
    pub fn log_filter(&self, configured: &str) -> String {
        if self.quiet {
            return "error".to_string();
        }
        match self.verbose {
            0 => configured.to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
