//! # Example: builders
//!
//! Demonstrates the declarative fragment builders.
//!
//! Shows how to:
//! - Concatenate text fragments with `build_string!` and [`build_string`].
//! - Merge map fragments with `build_json!` (last write wins).
//! - Encode the merged map as JSON.
//!
//! ## Run
//! ```bash
//! cargo run --example builders
//! ```

use blockfold::{
    build_json, build_string, map, Block, JsonBuilder, MapFragment, ResultBuilder, Value,
    ValueError,
};

fn main() -> Result<(), ValueError> {
    let results = build_string!("Hello, ", "Mastering ", "Rust!");
    println!("{results}");

    let guests = ["Jon", "Heidi", "Kailey", "Kai"];
    let welcome = build_string(|b| {
        for (i, guest) in guests.iter().enumerate() {
            if i > 0 {
                b.push(", ");
            }
            b.push("Welcome ").push(*guest);
        }
    });
    println!("{welcome}");

    let json = build_json!(map! {
        "name" => "Jon",
        "age" => 30,
        "address" => map! {
            "city" => "Boston",
            "zipcode" => "10001",
        },
    });
    println!("{}", Value::from(json.clone()).to_json_string_pretty()?);

    // Later fragments overwrite earlier keys; nested maps are replaced whole.
    let relocated = map! { "address" => map! { "city" => "Denver" } };
    let updated = Block::<JsonBuilder>::new()
        .add(json)
        .add([("age", 31)])
        .add(MapFragment::new(relocated))
        .result();
    println!("{}", Value::from(updated));

    let merged = JsonBuilder::build([
        map! { "a" => 1, "b" => 2 },
        map! { "b" => 3, "c" => 4 },
    ]);
    println!("{}", Value::from(merged));

    Ok(())
}
