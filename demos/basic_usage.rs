//! Basic usage example
//!
//! Run with: cargo run --example basic_usage

use rust_text_logger::prelude::*;
use rust_text_logger::{error, info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Text Logger - Basic Usage Example ===\n");

    let path = std::env::temp_dir().join("basic_usage.log");
    let logger = Logger::new(&path);
    logger.delete();

    // Echo every written line to the terminal
    logger.subscribe(Arc::new(|line: &str| println!("  | {}", line)));

    println!("1. Logging at every level:");
    info!(logger, "Application started")?;
    warning!(logger, "Cache miss ratio", 0.42)?;
    error!(logger, "Count", 5, "items")?;
    logger.critical(["Shutting down"])?;

    println!("\n2. Raising the threshold to Warning:");
    logger.set_threshold(LogLevel::Warning);
    info!(logger, "This entry is filtered")?;
    warning!(logger, "This one is written")?;

    println!("\n3. Formatted entries and dividers:");
    logger.divider()?;
    logger.warning_formatted("{0} of {1} retries used", &[LogItem::from(3), LogItem::from(5)])?;
    logger.divider_with('=')?;

    println!("\n=== Example completed successfully! ===");
    println!("Log written to {}", path.display());

    Ok(())
}
