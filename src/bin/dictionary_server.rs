//! Sanaruutu dictionary service
//!
//! Loads the word list once and answers `GET /validate-word/{word}`.

use anyhow::Context;
use clap::Parser;
use log::info;
use sanaruutu::game::WordRepository;
use sanaruutu::logging;
use sanaruutu::network::{self, DEFAULT_PORT};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// Word validation service for Sanaruutu.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Tab-separated word list with a `Hakusana` column
    #[arg(long, default_value = "finnish_words.csv")]
    words: PathBuf,

    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_stderr();

    let file = File::open(&args.words)
        .with_context(|| format!("failed to open {}", args.words.display()))?;
    let repo = WordRepository::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load {}", args.words.display()))?;
    info!("loaded {} words from {}", repo.len(), args.words.display());

    network::serve(SocketAddr::new(args.bind, args.port), Arc::new(repo)).await?;
    Ok(())
}
