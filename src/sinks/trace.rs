//! # TracingWriter: bridge into `tracing`
//!
//! Re-emits every message as a `tracing` event whose level matches the level
//! the handler was registered for (`Info` → `INFO`, `Warning` → `WARN`,
//! `Error` → `ERROR`). Output format and filtering are left to whatever
//! subscriber the application installed.

use crate::dispatch::{Dispatcher, Handler, HandlerResult, Level};

/// Handler forwarding messages to the `tracing` facade.
#[derive(Debug, Clone, Copy)]
pub struct TracingWriter {
    level: Level,
}

impl TracingWriter {
    /// Construct a new [`TracingWriter`] for `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Handler for TracingWriter {
    fn handle(&self, message: &str) -> HandlerResult {
        match self.level {
            Level::Info => tracing::info!(target: "blockfold::sink", "{message}"),
            Level::Warning => tracing::warn!(target: "blockfold::sink", "{message}"),
            Level::Error => tracing::error!(target: "blockfold::sink", "{message}"),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "TracingWriter"
    }
}

/// Registers one [`TracingWriter`] per level.
pub fn install_tracing(dispatcher: &mut Dispatcher) {
    for level in Level::ALL {
        dispatcher.register_handler(level, TracingWriter::new(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;

    #[test]
    fn test_forwarding_never_fails() {
        let mut d = Dispatcher::new();
        install_tracing(&mut d);

        for level in Level::ALL {
            assert!(d.publish("forwarded", level).is_ok());
        }
        assert_eq!(
            d.handler_names(Level::Warning).collect::<Vec<_>>(),
            vec!["TracingWriter"]
        );
    }

    #[test]
    fn test_levels_map_to_tracing_levels() {
        let mut d = Dispatcher::new();
        install_tracing(&mut d);

        let (_, events) = capture(|| {
            for level in Level::ALL {
                d.publish("forwarded", level).unwrap();
            }
        });
        let forwarded: Vec<_> = events
            .into_iter()
            .filter(|(_, target)| target == "blockfold::sink")
            .collect();

        assert_eq!(
            forwarded,
            vec![
                (tracing::Level::INFO, "blockfold::sink".to_string()),
                (tracing::Level::WARN, "blockfold::sink".to_string()),
                (tracing::Level::ERROR, "blockfold::sink".to_string()),
            ]
        );
    }
}
