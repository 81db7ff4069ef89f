use crate::domain::model::EnhanceMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "prompt-enhancer")]
#[command(about = "Rewrites rough prompts into optimized ones via the Gemini API")]
pub struct Cli {
    #[arg(long, default_value = "./.prompt-enhancer", help = "Directory holding the local store")]
    pub data_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enhance a prompt and print the result
    Enhance {
        /// Prompt text; read from stdin when omitted
        prompt: Option<String>,

        /// Enhancement mode; defaults to the last mode used
        #[arg(long, value_enum)]
        mode: Option<EnhanceMode>,
    },

    /// Validate an API key against the service and save it
    SetKey {
        /// The API key to validate and store
        key: String,
    },

    /// Report whether an API key is configured
    Status,

    /// Show or change the persisted theme preference
    Theme {
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
