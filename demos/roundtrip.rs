//! Decoding JSON into a Variant and encoding it back.
//!
//! Run with: cargo run --example roundtrip

use std::error::Error;
use variant_json::{describe, from_str, to_string};

fn main() -> Result<(), Box<dyn Error>> {
    let json = r#"["define", "square", [1.50, 2, 3]]"#;

    let value = from_str(json)?;
    println!("Decoded:\n{}\n", describe(&value));

    // Numbers come back in canonical form
    let encoded = to_string(&value);
    println!("Encoded:\n{}\n", encoded);

    assert_eq!(from_str(&encoded)?, value);
    println!("✓ Round-trip successful");

    Ok(())
}
