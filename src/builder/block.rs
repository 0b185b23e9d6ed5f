//! # Result builders and the block accumulator.
//!
//! A [`ResultBuilder`] names a component type and the rule that folds an
//! ordered list of components into one output. A [`Block`] collects the
//! components a caller lists and hands them to the builder at the end, which
//! keeps "what fragments exist" apart from "how they combine".
//!
//! ## Flow
//! ```text
//! caller lists fragments          builder decides how they combine
//! ──────────────────────          ────────────────────────────────
//! block.add(x1)  ─┐
//! block.add(x2)  ─┼─► Into<Component> ─► Vec<Component> ─► B::build_block ─► Output
//! block.add(xN)  ─┘   (expression adaptation)
//! ```

use std::fmt;

/// Reduction rule over an ordered sequence of components.
pub trait ResultBuilder {
    /// One folded unit.
    type Component;
    /// Aggregate produced by a whole block.
    type Output;

    /// Folds `components`, in order, into a fresh output.
    fn build_block(components: Vec<Self::Component>) -> Self::Output;

    /// Adapts every item into a component, then folds them.
    ///
    /// ## Example
    /// ```rust
    /// use blockfold::{ResultBuilder, StringBuilder};
    ///
    /// assert_eq!(StringBuilder::build(["A", "B", "C"]), "ABC");
    /// assert_eq!(StringBuilder::build(Vec::<String>::new()), "");
    /// ```
    fn build<I>(block: I) -> Self::Output
    where
        I: IntoIterator,
        I::Item: Into<Self::Component>,
    {
        Self::build_block(block.into_iter().map(Into::into).collect())
    }
}

/// Ordered accumulator of components for builder `B`.
pub struct Block<B: ResultBuilder> {
    components: Vec<B::Component>,
}

impl<B: ResultBuilder> Block<B> {
    /// Creates an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Creates an empty block with room for `capacity` components.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            components: Vec::with_capacity(capacity),
        }
    }

    /// Appends a component, returning the block for chaining.
    #[must_use]
    pub fn add(mut self, component: impl Into<B::Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Appends a component in place.
    pub fn push(&mut self, component: impl Into<B::Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    /// Number of components listed so far.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True if nothing has been listed yet.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Folds the listed components into the builder's output.
    pub fn result(self) -> B::Output {
        B::build_block(self.components)
    }
}

impl<B: ResultBuilder> Default for Block<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ResultBuilder> fmt::Debug for Block<B>
where
    B::Component: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("components", &self.components)
            .finish()
    }
}

impl<B, T> Extend<T> for Block<B>
where
    B: ResultBuilder,
    T: Into<B::Component>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.components.extend(iter.into_iter().map(Into::into));
    }
}

impl<B, T> FromIterator<T> for Block<B>
where
    B: ResultBuilder,
    T: Into<B::Component>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut block = Self::new();
        block.extend(iter);
        block
    }
}

/// Runs a caller-supplied block closure and folds what it listed.
///
/// ## Example
/// ```rust
/// use blockfold::{build_with, StringBuilder};
///
/// let greeting = build_with::<StringBuilder>(|b| {
///     b.push("Hello, ").push("Mastering ").push("Rust!");
/// });
/// assert_eq!(greeting, "Hello, Mastering Rust!");
/// ```
pub fn build_with<B: ResultBuilder>(f: impl FnOnce(&mut Block<B>)) -> B::Output {
    let mut block = Block::new();
    f(&mut block);
    block.result()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums integers; exercises the trait without string/map specifics.
    struct Sum;

    impl ResultBuilder for Sum {
        type Component = i64;
        type Output = i64;

        fn build_block(components: Vec<i64>) -> i64 {
            components.into_iter().sum()
        }
    }

    #[test]
    fn test_build_adapts_items() {
        assert_eq!(Sum::build([1i32, 2, 3]), 6);
        assert_eq!(Sum::build(Vec::<i64>::new()), 0);
    }

    #[test]
    fn test_block_chaining_and_push() {
        let mut block = Block::<Sum>::new().add(1i64).add(2u8);
        block.push(10i64).push(20i64);
        assert_eq!(block.len(), 4);
        assert_eq!(block.result(), 33);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut block: Block<Sum> = (1i64..=3).collect();
        block.extend([4i64, 5]);
        assert_eq!(
            format!("{block:?}"),
            "Block { components: [1, 2, 3, 4, 5] }"
        );
        assert_eq!(block.result(), 15);
    }

    #[test]
    fn test_build_with_empty_closure() {
        let total = build_with::<Sum>(|_| {});
        assert_eq!(total, 0);
        assert!(Block::<Sum>::default().is_empty());
    }
}
