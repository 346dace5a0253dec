pub mod dispatch;
pub mod sample;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// `questionnaire` - fill a config struct from an interactive terminal form.
#[derive(Parser, Debug)]
#[command(name = "questionnaire")]
#[command(version)]
#[command(about = "Turn a config struct into an interactive terminal form.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for every marked field of the sample service config and print the result
    Ask {
        /// Form options file (default: platform config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format for the filled config
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Show the prompts that would be asked, without starting a session
    Plan {
        /// Print the plan as TOML or JSON instead of a styled list
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}
