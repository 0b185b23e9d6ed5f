//! Leveled callback dispatch.
//!
//! This module groups the **registry** that maps a [`Level`] to its ordered
//! handlers and the **handler** abstractions it stores.
//!
//! ## Contents
//! - [`Level`] closed set of dispatch keys
//! - [`Handler`], [`HandlerFn`] handler contract and closure adapter
//! - [`Dispatcher`], [`DispatcherBuilder`] registry and publish entry point
//! - [`Config`], [`FailurePolicy`] dispatcher settings
//!
//! ## Quick wiring
//! ```text
//! register(level, f) ──► HandlerFn ──► table[level.index()].push(..)
//! publish(msg, level) ──► table[level.index()] ──► h1(msg) ─► h2(msg) ─► ...
//!                                                   └─ Err ─► FailurePolicy
//! ```

mod builder;
mod config;
mod dispatcher;
mod handler;
mod handler_fn;
mod level;

pub use builder::DispatcherBuilder;
pub use config::{Config, FailurePolicy};
pub use dispatcher::Dispatcher;
pub use handler::{Handler, HandlerResult};
pub use handler_fn::HandlerFn;
pub use level::Level;
