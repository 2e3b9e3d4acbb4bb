//! File logging example
//!
//! Demonstrates per-channel files next to the console streams. Error and
//! warning records share `error.log`, debug and info records share `rec.log`.
//!
//! Run with: cargo run --example file_logging

use rust_leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - File Logging Example ===\n");

    let logger = Logger::new(
        LoggerConfig::new(LogLevel::All)
            .with_path(Channel::Error, "error.log")
            .with_path(Channel::Warn, "error.log")
            .with_path(Channel::Debug, "rec.log")
            .with_path(Channel::Info, "rec.log"),
    )?;

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    logger.error_with_data(
        "Failed to load optional plugin",
        LogData::new().with_field("plugin", "metrics").with_field("retry", false),
    );

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info_with_data("Processing item", LogData::new().with_field("item", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'error.log' and 'rec.log' for the JSON records");

    Ok(())
}
