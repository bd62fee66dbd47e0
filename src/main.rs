//! Packing Checklist MCP Server - Main Entry Point
//!
//! The actual implementation is in the `packing_checklist` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use packing_checklist::config::DEFAULT_STORAGE_KEY;
use packing_checklist::{ChecklistConfig, ChecklistServerHandler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Packing checklist served over the Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the storage file (TOML, created on first save)
    file: PathBuf,

    /// Key of the slot holding the checklist
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Remember the selected category across restarts
    #[arg(long)]
    persist_active_category: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ChecklistConfig {
        storage_key: args.storage_key,
        persist_active_category: args.persist_active_category,
    };
    let handler = ChecklistServerHandler::new(&args.file, config)?;
    serve_stdio(handler).await?;
    Ok(())
}
