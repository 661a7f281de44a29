//! Chatview replay
//!
//! Feeds newline-delimited `{type, payload}` actions through a chat store and
//! prints the resulting message list and the requests the client would send.
//! Actions are read from stdin when no file is given.

use anyhow::Context;
use chatview::replay::replay;
use chatview::settings::Settings;
use chatview::store::ChatStore;
use clap::Parser;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatview-replay")]
#[command(about = "Replay chat actions and print the resulting view", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Viewer user id, overrides the settings file
    #[arg(long)]
    viewer: Option<String>,

    /// Newline-delimited actions; stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(viewer) = cli.viewer {
        settings.viewer = viewer;
    }

    chatview::init(&settings.log_filter);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut store = ChatStore::new(settings);
    let mut stdout = io::stdout().lock();
    let dropped = replay(&mut store, reader, &mut stdout).context("Replay failed")?;

    if dropped > 0 {
        eprintln!("{} malformed action(s) skipped", dropped);
    }

    Ok(())
}
