//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&str) -> HandlerResult` and gives it a
//! name. The closure is called once per matching publish; captured state that
//! must change between calls goes behind `Cell`/`RefCell` explicitly.
//!
//! ## Example
//! ```rust
//! use blockfold::{Handler, HandlerError, HandlerFn};
//!
//! let strict = HandlerFn::new("strict", |message: &str| {
//!     if message.is_empty() {
//!         return Err(HandlerError::rejected("empty message"));
//!     }
//!     Ok(())
//! });
//!
//! assert_eq!(strict.name(), "strict");
//! assert!(strict.handle("ok").is_ok());
//! assert!(strict.handle("").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::dispatch::handler::{Handler, HandlerResult};

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F>
where
    F: Fn(&str) -> HandlerResult + 'static,
{
    /// Creates a named handler from a fallible closure.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates a handler named after the closure's type.
    pub fn anonymous(f: F) -> Self {
        Self::new(std::any::type_name::<F>(), f)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&str) -> HandlerResult + 'static, // Fn, not FnMut
{
    fn handle(&self, message: &str) -> HandlerResult {
        (self.f)(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Adapts an infallible callback into a [`Handler`] that always succeeds.
pub(crate) fn infallible<F>(callback: F) -> impl Handler
where
    F: Fn(&str) + 'static,
{
    HandlerFn::new(std::any::type_name::<F>(), move |message: &str| {
        callback(message);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_named_handler_reports_name() {
        let h = HandlerFn::new("audit", |_m: &str| Ok(()));
        assert_eq!(h.name(), "audit");
        assert_eq!(format!("{h:?}"), "HandlerFn { name: \"audit\" }");
    }

    #[test]
    fn test_anonymous_handler_uses_type_name() {
        let h = HandlerFn::anonymous(|_m: &str| Ok(()));
        assert!(h.name().contains("closure"));
    }

    #[test]
    fn test_error_is_returned_unchanged() {
        let h = HandlerFn::new("no", |m: &str| Err(HandlerError::rejected(m)));
        match h.handle("bad input") {
            Err(HandlerError::Rejected { reason }) => assert_eq!(reason, "bad input"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_infallible_adapter_forwards_message() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let h = infallible(move |m: &str| sink.borrow_mut().push(m.to_string()));

        assert!(h.handle("first").is_ok());
        assert!(h.handle("second").is_ok());
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }
}
