//! Basic encoding and decoding.
//!
//! Run with: cargo run --example simple

use hashrle::{decode, encode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "WWWWWWWWWWWWBWWWWWWWWWWWWBBBWWWWWWWWWWWWWWWWWWWWWWWWB";

    let encoded = encode(text);
    println!("Original ({} chars):\n{}\n", text.len(), text);
    println!("Encoded ({} chars):\n{}\n", encoded.len(), encoded);

    let decoded = decode(&encoded)?;
    assert_eq!(decoded, text);
    println!("✓ Round-trip successful");

    Ok(())
}
