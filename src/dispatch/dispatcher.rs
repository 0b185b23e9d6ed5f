//! # Dispatcher: leveled, ordered, synchronous fan-out
//!
//! [`Dispatcher`] keeps one ordered handler list per [`Level`] and, on
//! `publish`, calls every handler of the target level with the message.
//!
//! ## What it guarantees
//! - Registration order is invocation order (per level FIFO).
//! - Every handler of the level runs exactly once per publish, on the calling
//!   thread, before `publish` returns.
//! - A level with no handlers is a silent no-op.
//! - Handlers of other levels are never touched.
//!
//! ## What it does **not** guarantee
//! - No deduplication: the same callback registered twice runs twice.
//! - No isolation: a handler error is returned to the publisher and a panic
//!   unwinds through `publish`.
//!
//! ## Diagram
//! ```text
//!    publish(msg, Level::Warning)
//!        │
//!        ▼
//!   table[Info]     [h1, h2]         (untouched)
//!   table[Warning]  [h3, h4, h5] ──► h3(msg) ─► h4(msg) ─► h5(msg)
//!   table[Error]    []               (untouched)
//! ```
//!
//! `register` takes `&mut self` while `publish` takes `&self`, so a handler
//! list can never be mutated while a publish iterates it.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::dispatch::builder::DispatcherBuilder;
use crate::dispatch::config::{Config, FailurePolicy};
use crate::dispatch::handler::{Handler, HandlerResult};
use crate::dispatch::handler_fn::{infallible, HandlerFn};
use crate::dispatch::level::Level;
use crate::error::DispatchError;

/// Registry of per-level handlers.
///
/// ## Example
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use blockfold::{Dispatcher, Level};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut logger = Dispatcher::new();
///
/// let sink = Rc::clone(&seen);
/// logger.register(Level::Info, move |message| {
///     sink.borrow_mut().push(format!("Info: {message}"));
/// });
///
/// logger.publish("info message", Level::Info)?;
/// logger.publish("nobody listens", Level::Error)?;
///
/// assert_eq!(*seen.borrow(), vec!["Info: info message"]);
/// # Ok::<(), blockfold::DispatchError>(())
/// ```
pub struct Dispatcher {
    table: [Vec<Box<dyn Handler>>; Level::COUNT],
    cfg: Config,
}

impl Dispatcher {
    /// Creates an empty dispatcher with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty dispatcher with the given configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        let reserve = cfg.preallocation();
        let table = std::array::from_fn(|_| match reserve {
            Some(n) => Vec::with_capacity(n),
            None => Vec::new(),
        });
        Self { table, cfg }
    }

    /// Returns a builder for chained registration.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new(Config::default())
    }

    /// Appends an infallible callback for `level`.
    pub fn register<F>(&mut self, level: Level, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.push(level, Box::new(infallible(callback)));
    }

    /// Appends a callback that may fail; its error is propagated by `publish`.
    pub fn register_fallible<F>(&mut self, level: Level, callback: F)
    where
        F: Fn(&str) -> HandlerResult + 'static,
    {
        self.push(level, Box::new(HandlerFn::anonymous(callback)));
    }

    /// Appends an arbitrary [`Handler`] (named, shared via `Rc`/`Arc`, ...).
    pub fn register_handler<H: Handler>(&mut self, level: Level, handler: H) {
        self.push(level, Box::new(handler));
    }

    pub(crate) fn push(&mut self, level: Level, handler: Box<dyn Handler>) {
        let slot = &mut self.table[level.index()];
        debug!(
            level = %level,
            handler = handler.name(),
            position = slot.len(),
            "handler registered"
        );
        slot.push(handler);
    }

    /// Publishes `message` to every handler registered for `level`, in order.
    ///
    /// Returns `Ok(())` when the level has no handlers. On handler failure the
    /// error is returned according to [`Config::on_failure`].
    pub fn publish(&self, message: &str, level: Level) -> Result<(), DispatchError> {
        let handlers = &self.table[level.index()];
        if handlers.is_empty() {
            trace!(level = %level, "no handlers; publish skipped");
            return Ok(());
        }
        trace!(level = %level, handlers = handlers.len(), "publishing");

        let mut first_failure = None;
        for (position, handler) in handlers.iter().enumerate() {
            let Err(source) = handler.handle(message) else {
                continue;
            };
            let err = DispatchError::Handler {
                level,
                position,
                handler: handler.name().to_string(),
                source,
            };
            match self.cfg.on_failure {
                FailurePolicy::Propagate => return Err(err),
                FailurePolicy::Continue => {
                    warn!(label = err.as_label(), "{}", err.as_message());
                    first_failure.get_or_insert(err);
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Number of handlers registered for `level`.
    #[must_use]
    pub fn handler_count(&self, level: Level) -> usize {
        self.table[level.index()].len()
    }

    /// Names of the handlers registered for `level`, in invocation order.
    pub fn handler_names(&self, level: Level) -> impl Iterator<Item = &str> + '_ {
        self.table[level.index()].iter().map(|h| h.name())
    }

    /// Total number of handlers across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.iter().map(Vec::len).sum()
    }

    /// True if no handler is registered at any level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Vec::is_empty)
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Dispatcher");
        for level in Level::ALL {
            s.field(level.as_str(), &self.handler_count(level));
        }
        s.field("on_failure", &self.cfg.on_failure).finish()
    }
}
