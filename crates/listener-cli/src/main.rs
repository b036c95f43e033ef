use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use listener_dictionary::DictionaryCache;
use tracing_subscriber::EnvFilter;

pub mod args;

use self::args::Args;

fn main() {
    dotenvy::dotenv().ok();

    // Exits with usage when no words are given
    let args = Args::parse();
    init_tracing(args.log_level());

    let stdout = io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        tracing::debug!("run failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr so the dump on stdout stays machine readable
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

/// Look up `args.words` and pretty-print the word -> pronunciations mapping
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let config = args
        .resolve_config()
        .context("Failed to load configuration")?;

    let mut cache = DictionaryCache::new(config.dictionary);
    let storage = cache.resolve_storage_path();
    let results = cache
        .lookup(&args.words)
        .with_context(|| format!("Dictionary lookup failed ({})", storage.display()))?;

    serde_json::to_writer_pretty(&mut *out, &results)?;
    writeln!(out)?;

    cache.close()?;
    Ok(())
}
