use crate::builder::block::{build_with, Block, ResultBuilder};

/// Concatenates text fragments in order, without a separator.
///
/// Accepts anything convertible into `String` (`&str`, `String`, `char`,
/// `Cow<str>`). An empty block yields `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringBuilder;

impl ResultBuilder for StringBuilder {
    type Component = String;
    type Output = String;

    fn build_block(components: Vec<String>) -> String {
        components.concat()
    }
}

/// Builds a string from the fragments listed by `f`.
///
/// ## Example
/// ```rust
/// let text = blockfold::build_string(|b| {
///     b.push("Hello, ");
///     b.push("Mastering ");
///     b.push("Rust!");
/// });
/// assert_eq!(text, "Hello, Mastering Rust!");
/// ```
pub fn build_string(f: impl FnOnce(&mut Block<StringBuilder>)) -> String {
    build_with(f)
}
