//! # Core handler trait
//!
//! `Handler` is the extension point for plugging behavior into a
//! [`Dispatcher`](crate::Dispatcher). Closures are adapted through
//! [`HandlerFn`](crate::HandlerFn); named or shared handlers implement the
//! trait directly.
//!
//! ## Contract
//! - `handle` runs on the publishing thread, before `publish` returns.
//! - An `Err` is propagated to the publisher (see
//!   [`FailurePolicy`](crate::FailurePolicy)); a panic unwinds through
//!   `publish` untouched.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use blockfold::{Dispatcher, Handler, HandlerResult, Level};
//!
//! struct Counter(Cell<usize>);
//!
//! impl Handler for Counter {
//!     fn handle(&self, _message: &str) -> HandlerResult {
//!         self.0.set(self.0.get() + 1);
//!         Ok(())
//!     }
//!     fn name(&self) -> &str { "counter" }
//! }
//!
//! let counter = Rc::new(Counter(Cell::new(0)));
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_handler(Level::Error, Rc::clone(&counter));
//! dispatcher.publish("disk full", Level::Error).unwrap();
//! assert_eq!(counter.0.get(), 1);
//! ```

use std::rc::Rc;
use std::sync::Arc;

use crate::error::HandlerError;

/// Outcome of handling one message.
pub type HandlerResult = Result<(), HandlerError>;

/// Contract for message handlers.
pub trait Handler: 'static {
    /// Handle a single published message.
    fn handle(&self, message: &str) -> HandlerResult;

    /// Human-readable name (for logs and errors).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<H: Handler + ?Sized> Handler for Rc<H> {
    fn handle(&self, message: &str) -> HandlerResult {
        (**self).handle(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, message: &str) -> HandlerResult {
        (**self).handle(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, message: &str) -> HandlerResult {
        (**self).handle(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
