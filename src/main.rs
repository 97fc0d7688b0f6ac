// Solace - Supportive wellness chat service
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read};

use solace::config::{load_config, Config};
use solace::crisis::CrisisDetector;
use solace::pipeline::Pipeline;
use solace::server::{ChatServer, ServerConfig};
use solace::tone::ToneLexicon;
use solace::transcript::TranscriptLogger;

#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "Supportive wellness chat service", version)]
struct Args {
    /// Run mode
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the HTTP chat server
    Serve {
        /// Bind address (default: from config, then 127.0.0.1:8000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Process a single message and print the reply
    Query {
        /// Message text
        message: String,
    },
    /// Print the configured crisis keywords
    Keywords,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Parse command-line arguments
    let args = Args::parse();

    // Dispatch based on command
    match args.command {
        Some(Command::Serve { bind }) => {
            return run_serve(bind).await;
        }
        Some(Command::Query { message }) => {
            return run_query(&message);
        }
        Some(Command::Keywords) => {
            return run_keywords();
        }
        None => {
            // Fall through (check for piped input first)
        }
    }

    // Piped input mode: read a single message from stdin
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read from stdin")?;

        let message = input.trim();
        if message.is_empty() {
            anyhow::bail!("No message provided on stdin");
        }

        return run_query(message);
    }

    // No subcommand, no piped input: print usage
    use clap::CommandFactory;
    Args::command().print_help()?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Build the pipeline from configuration
///
/// Keyword tables come from the configured JSON files when present, otherwise
/// the built-in defaults.
fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let detector = match &config.crisis_keywords_path {
        Some(path) => CrisisDetector::load_from_file(path)?,
        None => CrisisDetector::default(),
    };

    let lexicon = match &config.tone_lexicon_path {
        Some(path) => ToneLexicon::load_from_file(path)?,
        None => ToneLexicon::default(),
    };

    Ok(Pipeline::new(detector, lexicon))
}

async fn run_serve(bind: Option<String>) -> Result<()> {
    let config = load_config()?;
    let pipeline = build_pipeline(&config)?;
    let transcript = TranscriptLogger::new(&config.transcript_dir)?;

    let server_config = ServerConfig {
        bind_address: bind.unwrap_or_else(|| config.bind_address.clone()),
    };

    let server = ChatServer::new(pipeline, transcript, server_config);
    server.serve().await
}

fn run_query(message: &str) -> Result<()> {
    let config = load_config()?;
    let pipeline = build_pipeline(&config)?;

    let reply = pipeline.process(message.trim());
    println!("{}", reply.text);
    if reply.is_crisis {
        eprintln!("(crisis protocol triggered)");
    }

    Ok(())
}

fn run_keywords() -> Result<()> {
    let config = load_config()?;
    let pipeline = build_pipeline(&config)?;

    for phrase in pipeline.detector().phrases() {
        println!("{}", phrase);
    }

    Ok(())
}
