//! Address Book - Main entry point
//!
//! Runs the scripted demonstration by default, or the command assistant over
//! stdin/stdout when `ADDRESS_BOOK_MODE=assistant`.

use address_book::{demo, Assistant, Config, Directory, RunMode};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout carries program output)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = Directory::new();

    match config.mode {
        RunMode::Demo => {
            info!("Running demonstration");
            for line in demo::run(&mut book)? {
                println!("{}", line);
            }
        }
        RunMode::Assistant => {
            info!("Starting assistant session");
            let mut assistant = Assistant::new(book);
            address_book::assistant::run_session(
                &mut assistant,
                io::stdin().lock(),
                io::stdout().lock(),
                &config.prompt,
            )?;
            info!(contacts = assistant.book().len(), "Assistant session ended");
        }
    }

    Ok(())
}
