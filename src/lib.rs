//! # blockfold
//!
//! **blockfold** bundles two small, independent building blocks:
//!
//! - a **declarative fragment builder** that folds an ordered list of typed
//!   fragments into one aggregate (a concatenated string, or a merged map);
//! - a **leveled dispatcher** that maps a severity [`Level`] to an ordered list
//!   of handlers and calls them synchronously on publish.
//!
//! ## Architecture
//! ### Fragment builder
//! ```text
//!     build_string!("Hello, ", "Mastering ", "Rust!")
//!     build_json!(map!{..}, [("k", v)], MapFragment::new(..))
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────────────────┐
//!   │  Block<B>                                           │
//!   │  - add/push: Into<B::Component> (expression adapt.) │
//!   │  - keeps listing order                              │
//!   └──────────────────────────┬──────────────────────────┘
//!                              ▼ result()
//!   ┌─────────────────────────────────────────────────────┐
//!   │  B::build_block(Vec<Component>)                     │
//!   │  - StringBuilder: concat, no separator              │
//!   │  - JsonBuilder:   left-to-right, last write wins    │
//!   └─────────────────────────────────────────────────────┘
//! ```
//!
//! ### Dispatcher
//! ```text
//!   register(Level::Info, f1) ─┐
//!   register(Level::Info, f2) ─┼─► table[Info]    = [f1, f2]
//!   register(Level::Error, f3) ┘   table[Warning] = []
//!                                  table[Error]   = [f3]
//!
//!   publish("msg", Level::Info) ──► f1("msg") ─► f2("msg") ─► Ok(())
//!                                        └─ Err ─► DispatchError (per FailurePolicy)
//! ```
//!
//! ## Features
//! | Area           | Description                                              | Key types / traits                          |
//! |----------------|----------------------------------------------------------|---------------------------------------------|
//! | **Builders**   | Fold listed fragments into a string or a map.            | [`ResultBuilder`], [`Block`], [`JsonBuilder`] |
//! | **Values**     | Tagged union for map values, JSON interop.               | [`Value`], [`Map`]                          |
//! | **Dispatch**   | Ordered per-level handlers, synchronous publish.         | [`Dispatcher`], [`Handler`], [`HandlerFn`]  |
//! | **Sinks**      | Ready-made handlers for stdout and `tracing`.            | [`ConsoleWriter`], [`TracingWriter`]        |
//! | **Errors**     | Typed errors for handlers, dispatch and values.          | [`DispatchError`], [`HandlerError`]         |
//! | **Configuration** | Preallocation and failure policy.                     | [`Config`], [`FailurePolicy`]               |
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use blockfold::{build_json, build_string, map, Dispatcher, Level, Value};
//!
//! let greeting = build_string!("Hello, ", "Mastering ", "Rust!");
//! assert_eq!(greeting, "Hello, Mastering Rust!");
//!
//! let person = build_json!(map! {
//!     "name" => "Jon",
//!     "age" => 30,
//!     "address" => map! { "city" => "Boston", "zipcode" => "10001" },
//! });
//! assert_eq!(person["name"], Value::from("Jon"));
//!
//! let lines = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&lines);
//! let mut logger = Dispatcher::new();
//! logger.register(Level::Warning, move |m| sink.borrow_mut().push(format!("Warning: {m}")));
//!
//! logger.publish("disk almost full", Level::Warning)?;
//! logger.publish("ignored", Level::Info)?;
//! assert_eq!(*lines.borrow(), vec!["Warning: disk almost full"]);
//! # Ok::<(), blockfold::DispatchError>(())
//! ```
mod builder;
mod dispatch;
mod error;
mod sinks;
#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use builder::{
    build_json, build_string, build_with, Block, JsonBuilder, Map, MapFragment, ResultBuilder,
    StringBuilder, Value,
};
pub use dispatch::{
    Config, Dispatcher, DispatcherBuilder, FailurePolicy, Handler, HandlerFn, HandlerResult,
    Level,
};
pub use error::{DispatchError, HandlerError, ParseLevelError, ValueError};
pub use sinks::{install_console, install_tracing, ConsoleWriter, TracingWriter};
