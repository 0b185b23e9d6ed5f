//! # Map-mode builder
//!
//! [`JsonBuilder`] merges map fragments left to right. When two fragments
//! share a key the later one wins; the key keeps the position where it first
//! appeared. Values are never merged recursively: a nested [`Map`] is replaced
//! as a whole like any other leaf.
//!
//! ## Example
//! ```rust
//! use blockfold::{build_json, map};
//!
//! let json = build_json(|b| {
//!     b.push(map! { "a" => 1, "b" => 2 });
//!     b.push(map! { "b" => 3, "c" => 4 });
//! });
//!
//! assert_eq!(json, map! { "a" => 1, "b" => 3, "c" => 4 });
//! assert_eq!(json.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
//! ```

use crate::builder::block::{build_with, Block, ResultBuilder};
use crate::builder::value::{Map, Value};

/// One map fragment, the component type of [`JsonBuilder`].
///
/// Plain maps and `(key, value)` pair lists convert into a fragment
/// implicitly, so they can be listed directly in a block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapFragment {
    entries: Map,
}

impl MapFragment {
    /// Wraps an existing map.
    pub fn new(entries: Map) -> Self {
        Self { entries }
    }

    /// Writes every entry into `json`, overwriting same-named keys.
    pub fn merge_into(self, json: &mut Map) {
        for (key, value) in self.entries {
            json.insert(key, value);
        }
    }

    /// Borrows the entries.
    pub fn as_map(&self) -> &Map {
        &self.entries
    }

    /// Unwraps the entries.
    pub fn into_map(self) -> Map {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the fragment carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map> for MapFragment {
    fn from(entries: Map) -> Self {
        Self::new(entries)
    }
}

impl<K, V> From<Vec<(K, V)>> for MapFragment
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MapFragment
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Merges map fragments with last-write-wins semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBuilder;

impl ResultBuilder for JsonBuilder {
    type Component = MapFragment;
    type Output = Map;

    fn build_block(components: Vec<MapFragment>) -> Map {
        let mut json = Map::with_capacity(components.iter().map(MapFragment::len).sum());
        for component in components {
            component.merge_into(&mut json);
        }
        json
    }
}

/// Builds a map from the fragments listed by `f`.
pub fn build_json(f: impl FnOnce(&mut Block<JsonBuilder>)) -> Map {
    build_with(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;

    #[test]
    fn test_overlapping_keys_last_write_wins() {
        let json = JsonBuilder::build([
            map! { "a" => 1, "b" => 2 },
            map! { "b" => 3, "c" => 4 },
        ]);
        assert_eq!(json, map! { "a" => 1, "b" => 3, "c" => 4 });
    }

    #[test]
    fn test_overlapping_keys_depend_on_order() {
        let first = map! { "k" => "first" };
        let second = map! { "k" => "second" };

        let forward = JsonBuilder::build([first.clone(), second.clone()]);
        let backward = JsonBuilder::build([second, first]);

        assert_eq!(forward.get("k"), Some(&Value::from("second")));
        assert_eq!(backward.get("k"), Some(&Value::from("first")));
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_disjoint_keys_are_order_independent() {
        let left = map! { "a" => 1 };
        let right = map! { "b" => 2 };

        let forward = JsonBuilder::build([left.clone(), right.clone()]);
        let backward = JsonBuilder::build([right, left]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_block_is_empty_map() {
        assert!(build_json(|_| {}).is_empty());
        assert!(JsonBuilder::build(Vec::<Map>::new()).is_empty());
    }

    #[test]
    fn test_plain_maps_and_fragments_mix() {
        let json = Block::<JsonBuilder>::new()
            .add(map! { "name" => "Jon" })
            .add(MapFragment::new(map! { "age" => 30 }))
            .add([("city", "Boston")])
            .add(vec![("age", 31)])
            .result();

        assert_eq!(
            json,
            map! { "name" => "Jon", "age" => 31, "city" => "Boston" }
        );
    }

    #[test]
    fn test_nested_maps_are_replaced_not_merged() {
        let json = build_json(|b| {
            b.push(map! {
                "address" => map! { "city" => "Boston", "zipcode" => "10001" },
            });
            b.push(map! { "address" => map! { "city" => "Denver" } });
        });

        let address = json.get("address").and_then(Value::as_map);
        assert_eq!(address, Some(&map! { "city" => "Denver" }));
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let json = JsonBuilder::build([map! { "x" => 1, "y" => 2 }, map! { "x" => 9 }]);
        assert_eq!(json.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(json["x"], Value::Int(9));
    }

    #[test]
    fn test_fragment_accessors() {
        let fragment = MapFragment::from([("a", true)]);
        assert_eq!(fragment.len(), 1);
        assert!(!fragment.is_empty());
        assert_eq!(fragment.as_map().get("a"), Some(&Value::Bool(true)));
        assert_eq!(fragment.into_map().len(), 1);
    }
}
