use std::path::PathBuf;

use clap::Parser;
use listener_config::Config;

/// Report the ARPAbet pronunciations known for each word
#[derive(Parser, Debug, Clone)]
#[command(name = "listener-dictionary-cache")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// JSON profile to read instead of LISTENER_* environment variables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Primary dictionary file (overrides the configured one)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Custom dictionary merged into a freshly built cache
    #[arg(long)]
    pub custom_dictionary: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Words to look up
    #[arg(required = true, value_name = "WORDS")]
    pub words: Vec<String>,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Configured settings with command line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary.dictionary_file = dictionary.clone();
        }
        if let Some(custom) = &self.custom_dictionary {
            config.dictionary.custom_dictionary_file = Some(custom.clone());
        }

        Ok(config)
    }
}
