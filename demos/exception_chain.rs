//! Error cause chain example
//!
//! Shows how a logged error is followed by one line per cause.
//!
//! Run with: cargo run --example exception_chain

use rust_text_logger::error;
use rust_text_logger::prelude::*;
use std::fmt;

#[derive(Debug)]
struct LoadError {
    source: std::io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load user profile")
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn main() -> Result<()> {
    println!("=== Rust Text Logger - Cause Chain Example ===\n");

    let path = std::env::temp_dir().join("exception_chain.log");
    let logger = Logger::new(&path);
    logger.delete();
    logger.subscribe(std::sync::Arc::new(|line: &str| println!("{}", line)));

    println!("1. Hand-built chain:");
    let err = CapturedError::new("app::RequestError", "request failed")
        .with_cause(CapturedError::new("app::db::QueryError", "query timed out"))
        .with_cause(CapturedError::new("std::io::Error", "connection reset"));
    error!(logger, "GET /users", err)?;

    println!("\n2. Captured std::error::Error with qualified names:");
    logger.set_use_qualified_type_name(true);
    let err = LoadError {
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "profile.json"),
    };
    error!(logger, CapturedError::capture(&err))?;

    println!("\n3. Chain expansion disabled:");
    logger.set_expand_chain(false);
    error!(logger, CapturedError::capture(&err))?;

    println!("\nLog written to {}", path.display());
    Ok(())
}
