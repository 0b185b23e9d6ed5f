//! Declarative fragment builders.
//!
//! This module groups the **fold contract** ([`ResultBuilder`]), the caller
//! side accumulator ([`Block`]) and the two concrete reductions.
//!
//! ## Contents
//! - [`ResultBuilder`], [`Block`], [`build_with`] generic block folding
//! - [`StringBuilder`], [`build_string`] ordered concatenation
//! - [`JsonBuilder`], [`MapFragment`], [`build_json`] last-write-wins map merge
//! - [`Value`], [`Map`] values carried by map fragments
//!
//! ## Quick reference
//! | Builder           | Component     | Output   | Empty block |
//! |-------------------|---------------|----------|-------------|
//! | [`StringBuilder`] | `String`      | `String` | `""`        |
//! | [`JsonBuilder`]   | `MapFragment` | `Map`    | `{}`        |

mod block;
mod json;
mod macros;
mod string;
mod value;

pub use block::{build_with, Block, ResultBuilder};
pub use json::{build_json, JsonBuilder, MapFragment};
pub use string::{build_string, StringBuilder};
pub use value::{Map, Value};
