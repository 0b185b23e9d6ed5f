//! # Built-in handlers
//!
//! Small, self-contained [`Handler`](crate::Handler) implementations for demos
//! and applications that only need to see messages somewhere.
//!
//! - [`ConsoleWriter`]: prints `"<Level>: <message>"` lines (stdout by default).
//! - [`TracingWriter`]: forwards messages to the `tracing` facade.

mod console;
mod trace;

pub use console::{install_console, ConsoleWriter};
pub use trace::{install_tracing, TracingWriter};
