use crate::dispatch::config::Config;
use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::handler::{Handler, HandlerResult};
use crate::dispatch::handler_fn::{infallible, HandlerFn};
use crate::dispatch::level::Level;

/// Builder for assembling a [`Dispatcher`] with its handlers in one expression.
///
/// Registrations are applied in the order they were chained.
///
/// ## Example
/// ```rust
/// use blockfold::{Dispatcher, Level};
///
/// let logger = Dispatcher::builder()
///     .on(Level::Info, |m| println!("Info: {m}"))
///     .on(Level::Warning, |m| println!("Warning: {m}"))
///     .on(Level::Error, |m| println!("Error: {m}"))
///     .build();
///
/// assert_eq!(logger.len(), 3);
/// ```
pub struct DispatcherBuilder {
    cfg: Config,
    pending: Vec<(Level, Box<dyn Handler>)>,
}

impl DispatcherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            pending: Vec::new(),
        }
    }

    /// Replaces the configuration the dispatcher is built with.
    pub fn with_config(mut self, cfg: Config) -> Self {
        self.cfg = cfg;
        self
    }

    /// Queues an infallible callback for `level`.
    pub fn on<F>(mut self, level: Level, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.pending.push((level, Box::new(infallible(callback))));
        self
    }

    /// Queues a fallible callback for `level`.
    pub fn on_fallible<F>(mut self, level: Level, callback: F) -> Self
    where
        F: Fn(&str) -> HandlerResult + 'static,
    {
        self.pending
            .push((level, Box::new(HandlerFn::anonymous(callback))));
        self
    }

    /// Queues an arbitrary handler for `level`.
    pub fn with_handler<H: Handler>(mut self, level: Level, handler: H) -> Self {
        self.pending.push((level, Box::new(handler)));
        self
    }

    /// Builds the dispatcher, registering queued handlers in chain order.
    pub fn build(self) -> Dispatcher {
        let mut dispatcher = Dispatcher::with_config(self.cfg);
        for (level, handler) in self.pending {
            dispatcher.push(level, handler);
        }
        dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::config::FailurePolicy;
    use crate::error::HandlerError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_build_preserves_chain_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));

        let d = Dispatcher::builder()
            .on(Level::Info, move |m| a.borrow_mut().push(format!("a:{m}")))
            .on(Level::Info, move |m| b.borrow_mut().push(format!("b:{m}")))
            .build();

        d.publish("hi", Level::Info).unwrap();
        assert_eq!(*log.borrow(), vec!["a:hi", "b:hi"]);
    }

    #[test]
    fn test_config_is_applied() {
        let d = Dispatcher::builder()
            .with_config(
                Config::default().with_failure_policy(FailurePolicy::Continue),
            )
            .on_fallible(Level::Error, |_m| Err(HandlerError::rejected("x")))
            .with_handler(Level::Error, HandlerFn::new("ok", |_m: &str| Ok(())))
            .build();

        assert_eq!(d.config().on_failure, FailurePolicy::Continue);
        assert!(d.publish("m", Level::Error).is_err());
        assert_eq!(d.handler_count(Level::Error), 2);
    }
}
