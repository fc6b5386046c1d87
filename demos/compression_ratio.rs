//! Comparing compression ratios across kinds of text.
//!
//! Run with: cargo run --example compression_ratio

use hashrle::{encode, CompressionReport, Mode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let samples = [
        ("long runs", "a".repeat(200) + &"b".repeat(300)),
        ("prose", "The quick brown fox jumps over the lazy dog.".to_string()),
        ("digits", "1122334455667788990011223344".to_string()),
        ("markers", "#".repeat(40)),
    ];

    for (name, text) in &samples {
        let encoded = encode(text);
        let report = CompressionReport::new(Mode::Encode, text.len(), encoded.len());
        println!(
            "{:<10} {:>4} -> {:>4} bytes, ratio {:.2}",
            name, report.original_len, report.new_len, report.ratio()
        );
    }

    let encoded = encode(&"x".repeat(64));
    let report = CompressionReport::new(Mode::Encode, 64, encoded.len());
    println!("\nJSON report:\n{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
