//! Tightening the codec with CodecOptions.
//!
//! Run with: cargo run --example custom_options

use hashrle::{decode_with_options, encode_with_options, CodecOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Defaults: any character, a final newline added by an editor is ignored
    let lenient = CodecOptions::new();
    println!("Lenient decode: {:?}", decode_with_options("3a2b\n", &lenient)?);

    // Strict: ASCII only, no bare trailing newline
    let strict = CodecOptions::strict();
    match decode_with_options("3a2b\n", &strict) {
        Ok(text) => println!("Strict decode: {:?}", text),
        Err(err) => println!("Strict decode rejected: {}", err),
    }
    match encode_with_options("café", &strict) {
        Ok(text) => println!("Strict encode: {:?}", text),
        Err(err) => println!("Strict encode rejected: {}", err),
    }

    // Output limit guards against tiny inputs that expand enormously
    let limited = CodecOptions::new().with_max_decoded_len(1_000);
    match decode_with_options("#999999999x", &limited) {
        Ok(text) => println!("Limited decode: {} chars", text.len()),
        Err(err) => println!("Limited decode rejected: {}", err),
    }

    Ok(())
}
