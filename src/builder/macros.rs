//! Inline declarative syntax for the builders.

/// Builds a [`Map`](crate::Map) literal; keys go through `String::from`,
/// values through `Value::from`.
///
/// ```rust
/// use blockfold::{map, Value};
///
/// let m = map! { "name" => "Jon", "age" => 30 };
/// assert_eq!(m["age"], Value::Int(30));
/// assert!(map! {}.is_empty());
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}

/// Concatenates the listed text fragments with [`StringBuilder`](crate::StringBuilder).
///
/// ```rust
/// use blockfold::build_string;
///
/// let results = build_string!("Hello, ", "Mastering ", "Rust!");
/// assert_eq!(results, "Hello, Mastering Rust!");
/// assert_eq!(build_string!(), "");
/// ```
#[macro_export]
macro_rules! build_string {
    ($($fragment:expr),* $(,)?) => {
        $crate::Block::<$crate::StringBuilder>::new()
            $(.add($fragment))*
            .result()
    };
}

/// Merges the listed map fragments with [`JsonBuilder`](crate::JsonBuilder).
///
/// Each fragment may be a `Map`, a `MapFragment` or a `(key, value)` pair list.
///
/// ```rust
/// use blockfold::{build_json, map};
///
/// let json = build_json!(
///     map! { "name" => "Jon", "age" => 30 },
///     [("age", 31)],
/// );
/// assert_eq!(json, map! { "name" => "Jon", "age" => 31 });
/// ```
#[macro_export]
macro_rules! build_json {
    ($($fragment:expr),* $(,)?) => {
        $crate::Block::<$crate::JsonBuilder>::new()
            $(.add($fragment))*
            .result()
    };
}
