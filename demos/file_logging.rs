//! File logging example
//!
//! Demonstrates the append-per-call file writer together with the console
//! mirror.
//!
//! Run with: cargo run --example file_logging

use rust_text_logger::prelude::*;
use rust_text_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Text Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .destination("application.log")
        .item_delimiter(" | ")
        .formatter(TextFormatter::new().with_timestamp_format(TimestampFormat::Iso8601))
        .writer(FileWriter::new().with_lock(true))
        .listener(ConsoleMirror::new().into_listener())
        .build();

    // Start from a fresh file
    logger.delete();

    println!("1. Logging to both console and file:");
    info!(logger, "Application started")?;
    info!(logger, "Configuration loaded", "12 keys")?;
    warning!(logger, "Using default settings for some options")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(logger, "Processing item", i, "of", 5)?;
        if i == 3 {
            warning!(logger, "Item took longer than expected", i)?;
        }
    }
    logger.divider()?;
    info!(logger, "All operations completed")?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");
    println!(
        "Lines written: {}, failed: {}",
        logger.metrics().lines_written(),
        logger.metrics().write_failures()
    );

    Ok(())
}
