//! Trix runner (default binary).
//!
//! Reads a piece stream, lets the configured agent place every piece, writes
//! the replay log and prints the final board.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use trix::core::{pieces, write_replay, Environment};
use trix::engine;
use trix::types::{AgentKind, Configuration};

#[derive(Debug, Parser)]
#[command(name = "trix", about = "Place a stream of falling blocks and log the placements")]
struct Cli {
    #[arg(short = 'c', long = "config", help = "JSON configuration file to read defaults from")]
    config_file: Option<PathBuf>,

    #[arg(short = 'w', long, help = "Board width in columns")]
    width: Option<usize>,

    #[arg(short = 'b', long, help = "Number of pieces that can be held back")]
    buffer: Option<usize>,

    #[arg(short = 'a', long, value_parser = parse_agent, help = "Agent to run (default, search)")]
    agent: Option<AgentKind>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(help = "File to read the piece stream from")]
    input_file: PathBuf,

    #[arg(help = "File to write the replay to")]
    output_file: PathBuf,
}

fn parse_agent(value: &str) -> Result<AgentKind, String> {
    AgentKind::from_str(value).ok_or_else(|| format!("unknown agent `{value}`"))
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Configuration file first, then command-line overrides
fn configuration(cli: &Cli) -> Result<Configuration> {
    let mut config = match &cli.config_file {
        Some(path) => Configuration::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(buffer) = cli.buffer {
        config.buffer = buffer;
    }
    if let Some(agent) = cli.agent {
        config.agent = agent;
    }
    config.input_file = Some(cli.input_file.clone());
    config.output_file = Some(cli.output_file.clone());
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level_for(cli.verbose)))
        .init();

    let config = Arc::new(configuration(&cli)?);

    let text = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("reading pieces from {}", cli.input_file.display()))?;
    let stream = pieces::parse_pieces(&text);
    info!(
        pieces = stream.len(),
        width = config.width,
        buffer = config.buffer,
        agent = config.agent.as_str(),
        "starting run"
    );

    let agent = engine::for_kind(config.agent, &config);
    let mut environment = Environment::new(Arc::clone(&config), stream);
    agent.run(&mut environment)?;

    let file = File::create(&cli.output_file)
        .with_context(|| format!("creating replay {}", cli.output_file.display()))?;
    write_replay(BufWriter::new(file), environment.history())
        .with_context(|| format!("writing replay {}", cli.output_file.display()))?;

    println!("{}", environment.board());
    Ok(())
}
