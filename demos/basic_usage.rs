//! Basic logger usage example
//!
//! Demonstrates console logging at every level and how the threshold hides
//! levels that sort above it.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, log_data, warn};

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // Everything goes to the console when no paths are configured
    let logger = Logger::new(LoggerConfig::new(LogLevel::All))?;

    println!("1. Logging at different levels:");
    logger.error("This is an error message");
    logger.debug("This is a debug message");
    logger.warn("This is a warning message");
    logger.info("This is an info message");

    println!("\n2. Logging with structured data:");
    logger.warn_with_data(
        "Warning",
        LogData::new()
            .with_field("data", "Data details here")
            .with_field("code", 123),
    );
    info!(logger, data: log_data! { "user" => "alice" }, "User {} logged in", "alice");

    println!("\n3. Threshold set to WARN - info won't show:");
    let logger = Logger::new(LoggerConfig::new(LogLevel::Warn))?;
    logger.error("Error message (visible)");
    logger.debug("Debug message (visible, DEBUG sorts below WARN)");
    warn!(logger, "Warning message (visible)");
    logger.info("Info message (hidden)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
