//! Access logging example
//!
//! Shows the middleware side of access logging: wrap a handler, time it, and
//! hand the response metadata to the logger. The logger is injected into the
//! middleware rather than reached through a global.
//!
//! Run with: cargo run --example access_logging

use rust_leveled_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

struct Request {
    method: &'static str,
    url: &'static str,
    protocol: &'static str,
    user_agent: &'static str,
    peer: &'static str,
}

/// Wraps a handler and records one access record per request
struct AccessMiddleware<H> {
    logger: Arc<Logger>,
    handler: H,
}

impl<H: Fn(&Request) -> u16> AccessMiddleware<H> {
    fn serve(&self, request: &Request) -> u16 {
        let timer = self.logger.start_request();
        let status = (self.handler)(request);

        timer.finish(
            &self.logger,
            &ResponseMeta::new(request.method, request.url, request.protocol)
                .with_status(status)
                .with_user_agent(request.user_agent)
                .with_client_addr(request.peer),
        );
        status
    }
}

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Access Logging Example ===\n");

    let logger = Arc::new(Logger::new(
        LoggerConfig::new(LogLevel::All).with_path(Channel::Access, "access.log"),
    )?);

    let handler_logger = Arc::clone(&logger);
    let middleware = AccessMiddleware {
        logger: Arc::clone(&logger),
        handler: move |request: &Request| {
            thread::sleep(Duration::from_millis(3));
            if request.url == "/ping" {
                200
            } else {
                handler_logger.warn(format!("No route for {}", request.url));
                404
            }
        },
    };

    for url in ["/ping", "/missing", "/ping"] {
        middleware.serve(&Request {
            method: "GET",
            url,
            protocol: "HTTP/1.1",
            user_agent: "demo-client/1.0",
            peer: "127.0.0.1",
        });
    }

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'access.log' for the JSON access records");

    Ok(())
}
