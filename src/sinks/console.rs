//! # ConsoleWriter: prefixed line printer
//!
//! A minimal handler that writes every message it receives as one line,
//! prefixed with the title of the level it was registered for.
//!
//! ## Example output
//! ```text
//! Info: info message
//! Warning: warning message
//! Error: error message
//! ```

use std::cell::RefCell;
use std::io::{self, Write};

use crate::dispatch::{Dispatcher, Handler, HandlerResult, Level};

/// Line writer handler; stdout unless constructed with another writer.
pub struct ConsoleWriter<W: Write = io::Stdout> {
    level: Level,
    out: RefCell<W>,
}

impl ConsoleWriter<io::Stdout> {
    /// Writer for `level` printing to stdout.
    #[must_use]
    pub fn stdout(level: Level) -> Self {
        Self::new(level, io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    /// Writer for `level` printing to `out`.
    pub fn new(level: Level, out: W) -> Self {
        Self {
            level,
            out: RefCell::new(out),
        }
    }

    /// Level used for the line prefix.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Consumes the handler and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + 'static> Handler for ConsoleWriter<W> {
    fn handle(&self, message: &str) -> HandlerResult {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}: {}", self.level.title(), message)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "ConsoleWriter"
    }
}

/// Registers one stdout [`ConsoleWriter`] per level.
pub fn install_console(dispatcher: &mut Dispatcher) {
    for level in Level::ALL {
        dispatcher.register_handler(level, ConsoleWriter::stdout(level));
    }
}
