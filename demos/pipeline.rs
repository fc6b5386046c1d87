//! Inspecting each pipeline stage and the escape cases it applies.
//!
//! Run with: cargo run --example pipeline

use hashrle::{decode_tokens, decompose, encode_runs, scan, EscapeCase};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "111aa##########bbbbbbbbbbbb";

    let runs = decompose(text);
    let tokens = encode_runs(&runs);

    println!("{:<12} {:<10} cases", "run", "token");
    let mut after_digit = false;
    for (run, token) in runs.iter().zip(&tokens) {
        let cases: Vec<EscapeCase> = EscapeCase::classify(run, after_digit).collect();
        println!(
            "{:<12} {:<10} {:?}",
            format!("{}x{:?}", run.count, run.character),
            token.to_string(),
            cases
        );
        after_digit = run.is_digit();
    }

    let encoded: String = tokens.iter().map(ToString::to_string).collect();
    println!("\nEncoded: {}", encoded);

    let scanned = scan(&encoded)?;
    assert_eq!(scanned, tokens);
    assert_eq!(decode_tokens(&scanned)?, runs);
    println!("✓ Scanner recovered every token");

    Ok(())
}
