//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the
//! appropriate commands.

pub mod ask;
pub mod chat;
pub mod history_list;

use std::error::Error;

use clap::{Parser, Subcommand};

use crate::cli::ask::run_ask;
use crate::cli::chat::run_chat;
use crate::cli::history_list::list_history;
use crate::core::config::Config;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "A terminal chat client with sandboxed code previews")]
#[command(
    long_about = "Vitrine is a terminal chat client that proxies prompts to a chat backend \
and renders every AI reply into a standalone, sandbox-ready preview document \
(fenced code blocks get a per-language treatment: HTML renders, JavaScript \
runs with console output captured, Python is shown highlighted).\n\n\
Running with no subcommand starts an interactive chat session.\n\n\
Configuration:\n\
  vitrine set backend-url http://localhost:5000\n\
  vitrine set preview-dir ~/previews\n\
  vitrine set capture-timeout 5\n\
  vitrine set language en-US\n\n\
Logging:\n\
  Set RUST_LOG for diagnostics (e.g. RUST_LOG=vitrine=debug); use -l/--log\n\
  to write a transcript of the conversation to a file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides the configured value)
    #[arg(short = 'b', long, global = true, value_name = "URL")]
    pub backend: Option<String>,

    /// Write a conversation transcript to the given file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a single prompt and print the reply and preview location
    Ask {
        /// The prompt to send
        prompt: Vec<String>,
    },
    /// List stored chat history
    History,
    /// Set a configuration value (or print all values when none is given)
    Set {
        key: Option<String>,
        value: Option<String>,
    },
    /// Reset a configuration value to its default
    Unset { key: String },
}

pub async fn run_cli() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Ask { prompt }) => run_ask(prompt, args.backend).await,
        Some(Commands::History) => list_history(args.backend).await,
        Some(Commands::Set { key, value }) => handle_set(key, value),
        Some(Commands::Unset { key }) => handle_unset(&key),
        None => run_chat(args.backend, args.log).await,
    }
}

fn handle_set(key: Option<String>, value: Option<String>) -> Result<(), Box<dyn Error>> {
    let Some(key) = key else {
        Config::load()?.print_all();
        return Ok(());
    };
    let Some(value) = value else {
        Config::load()?.print_all();
        return Ok(());
    };

    let mut config = Config::load()?;
    match key.as_str() {
        "backend-url" => {
            config.backend_url = Some(value.clone());
            config.save()?;
            println!("✅ Set backend-url to: {value}");
        }
        "preview-dir" => {
            config.preview_dir = Some(value.clone().into());
            config.save()?;
            println!("✅ Set preview-dir to: {value}");
        }
        "capture-timeout" => match value.parse::<u64>() {
            Ok(secs) => {
                config.capture_timeout_secs = Some(secs);
                config.save()?;
                println!("✅ Set capture-timeout to: {secs}s");
            }
            Err(_) => {
                eprintln!("⚠️  capture-timeout expects a whole number of seconds");
                eprintln!("Example: vitrine set capture-timeout 5");
                std::process::exit(1);
            }
        },
        "language" => {
            config.language = Some(value.clone());
            config.save()?;
            println!("✅ Set language to: {value}");
        }
        _ => {
            eprintln!("❌ Unknown config key: {key}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn handle_unset(key: &str) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;
    match key {
        "backend-url" => config.backend_url = None,
        "preview-dir" => config.preview_dir = None,
        "capture-timeout" => config.capture_timeout_secs = None,
        "language" => config.language = None,
        _ => {
            eprintln!("❌ Unknown config key: {key}");
            std::process::exit(1);
        }
    }
    config.save()?;
    println!("✅ Unset {key}");
    Ok(())
}
