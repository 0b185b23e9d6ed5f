//! # Example: logger
//!
//! Demonstrates the leveled dispatcher used as a tiny logger.
//!
//! Shows how to:
//! - Register closures per [`Level`] and publish messages to them.
//! - Attach the built-in [`ConsoleWriter`] and [`TracingWriter`] sinks.
//! - Handle a failing handler under both [`FailurePolicy`] variants.
//!
//! ## Flow
//! ```text
//! register(level, closure) ──► Dispatcher ──► publish(msg, level)
//!                                                 ├─► closure 1
//!                                                 ├─► closure 2
//!                                                 └─► ...
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example logger
//! ```

use std::cell::Cell;
use std::rc::Rc;

use blockfold::{
    install_console, Config, ConsoleWriter, DispatchError, Dispatcher, FailurePolicy,
    HandlerError, Level, TracingWriter,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DispatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Plain closures, one per level.
    let mut logger = Dispatcher::new();
    logger.register(Level::Info, |message| println!("Info: {message}"));
    logger.register(Level::Warning, |message| println!("Warning: {message}"));
    logger.register(Level::Error, |message| println!("Error: {message}"));

    logger.publish("info message", Level::Info)?;
    logger.publish("warning message", Level::Warning)?;
    logger.publish("error message", Level::Error)?;

    // Captured state: count every error published.
    let errors = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&errors);
    logger.register(Level::Error, move |_| counter.set(counter.get() + 1));
    logger.publish("second error", Level::Error)?;
    logger.publish("third error", Level::Error)?;
    println!("errors seen by counter: {}", errors.get());

    // Built-in sinks.
    let mut sinks = Dispatcher::builder()
        .with_handler(Level::Warning, TracingWriter::new(Level::Warning))
        .with_handler(Level::Error, ConsoleWriter::stdout(Level::Error))
        .build();
    install_console(&mut sinks);
    sinks.publish("routed to tracing and stdout", Level::Warning)?;
    println!("{sinks:?}");

    // Failure handling.
    for policy in [FailurePolicy::Propagate, FailurePolicy::Continue] {
        let cfg = Config::default().with_failure_policy(policy);
        let mut strict = Dispatcher::with_config(cfg);
        strict.register_fallible(Level::Info, |m| {
            if m.len() > 8 {
                Err(HandlerError::rejected(format!("{} bytes is too long", m.len())))
            } else {
                Ok(())
            }
        });
        strict.register(Level::Info, move |m| {
            println!("[{policy:?}] second handler saw: {m}")
        });

        if let Err(err) = strict.publish("a rather long message", Level::Info) {
            println!("[{policy:?}] {} ({})", err, err.as_label());
        }
    }

    Ok(())
}
