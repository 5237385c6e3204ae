//! Working with decoded JSON objects.
//!
//! Run with: cargo run --example objects

use std::error::Error;
use variant_json::{from_str, to_string, variant, Variant};

fn main() -> Result<(), Box<dyn Error>> {
    let value = from_str(r#"{"host": "localhost", "port": 8080, "debug": true}"#)?;

    // Objects are flattened into a Symbol: [key0, value0, key1, value1, ...]
    if let Some(entries) = value.as_entries() {
        println!("Flattened entries: {}", entries.len());
    }

    // A keyed view keeps the source order
    if let Some(map) = value.to_map() {
        for (key, field) in map.iter() {
            println!("  {} => {}", key, field);
        }
        if let Some(port) = map.get("port").and_then(Variant::as_f64) {
            println!("Port: {}", port);
        }
    }

    // Encoding a Symbol writes only its name
    println!("Re-encoded object: {}", to_string(&value));

    let built = variant!({ "host": "localhost", "port": 8080, "debug": true });
    assert_eq!(built, value);
    println!("✓ variant! matches the decoder");

    Ok(())
}
