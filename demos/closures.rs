//! # Example: closures
//!
//! Closures passed to, returned from, and captured by plain functions; the
//! warm-up for how [`Dispatcher`] stores its handlers.
//!
//! ## Run
//! ```bash
//! cargo run --example closures
//! ```

use blockfold::{Dispatcher, DispatchError, Level};

fn greet(handler: impl Fn(&str)) {
    handler("Luna");
}

fn repeat(times: usize, handler: impl Fn()) {
    for _ in 0..times {
        handler();
    }
}

fn analyze_temperatures(analysis: impl FnOnce(&[i32])) {
    let temperatures = [72, 74, 76, 68, 70, 72, 66];
    analysis(&temperatures);
}

fn main() -> Result<(), DispatchError> {
    let hello = |name: &str| println!("Hello {name}");
    hello("John");
    greet(hello);

    repeat(3, || println!("Hello from a closure"));

    let add = |first: i32, second: i32| first + second;
    println!("{}", add(5, 5));

    let welcome: Vec<String> = ["Jon", "Heidi", "Kailey", "Kai"]
        .iter()
        .map(|guest| format!("Welcome {guest}"))
        .collect();
    println!("{welcome:?}");

    let threshold = 71;
    analyze_temperatures(|temps| {
        let above = temps.iter().filter(|&&t| t > threshold).count();
        println!("Number of days above threshold: {above}");
    });

    // Same closures, now stored and invoked by a dispatcher.
    let mut logger = Dispatcher::new();
    logger.register(Level::Info, hello);
    logger.register(Level::Info, move |m| {
        println!("{m} (threshold is {threshold})");
    });
    logger.publish("Maple", Level::Info)?;

    Ok(())
}
