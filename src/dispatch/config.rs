//! # Dispatcher configuration.
//!
//! Provides [`Config`], the settings a [`Dispatcher`](crate::Dispatcher) is
//! created with, and [`FailurePolicy`], which decides what `publish` does
//! after a handler returns an error.
//!
//! ## Sentinel values
//! - `handler_capacity = 0` → per-level lists allocate lazily on first registration

/// What `publish` does when a handler fails.
///
/// Either way the error reaches the caller of `publish`; the policies only
/// differ in whether later handlers still run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing handler and return its error (default).
    #[default]
    Propagate,
    /// Run every handler, then return the first error observed.
    Continue,
}

/// Settings for a [`Dispatcher`](crate::Dispatcher).
///
/// ## Field semantics
/// - `handler_capacity`: handlers preallocated per level (`0` = lazy)
/// - `on_failure`: behavior after a handler error
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Number of handler slots reserved up front for every level.
    pub handler_capacity: usize,

    /// Failure handling during `publish`.
    pub on_failure: FailurePolicy,
}

impl Config {
    /// Returns the per-level preallocation as an `Option`.
    ///
    /// - `None` → allocate on first registration
    /// - `Some(n)` → reserve `n` slots per level
    #[inline]
    pub fn preallocation(&self) -> Option<usize> {
        if self.handler_capacity == 0 {
            None
        } else {
            Some(self.handler_capacity)
        }
    }

    /// Returns a copy with the given failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Returns a copy with the given per-level capacity.
    pub fn with_handler_capacity(mut self, capacity: usize) -> Self {
        self.handler_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_propagates_and_allocates_lazily() {
        let cfg = Config::default();
        assert_eq!(cfg.on_failure, FailurePolicy::Propagate);
        assert_eq!(cfg.preallocation(), None);
    }

    #[test]
    fn test_preallocation_sentinel() {
        let cfg = Config::default().with_handler_capacity(4);
        assert_eq!(cfg.preallocation(), Some(4));
    }
}
