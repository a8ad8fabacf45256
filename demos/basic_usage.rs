// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_text::prelude::*;
use numeric_text::utils::init_logging;

fn main() {
    if let Err(e) = init_logging(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", e);
    }

    println!("=== Numeric Text Example ===\n");

    // Parse user input
    println!("Parsing...");
    for input in ["3.14", "  42 apples", "-1.5e-3", "Infinity", "1e400", "NaN", "abc"] {
        println!("  parse({:?}) = {:?}", input, parse(input));
    }

    // Format a value in every notation
    let value = 1234.5678;
    println!("\nFormatting {}...", to_default_string(value));
    for digits in [0u32, 2, 6] {
        println!(
            "  fixed({}) = {:?}, exponential({}) = {:?}",
            digits,
            format(FormatKind::Fixed, digits, value),
            digits,
            format(FormatKind::Exponential, digits, value),
        );
    }
    for digits in [1u32, 4, 10] {
        println!(
            "  precision({}) = {:?}",
            digits,
            value.to_precision(digits)
        );
    }

    // Rejected requests
    println!("\nErrors...");
    match format(FormatKind::Fixed, 101, value) {
        Ok(text) => println!("  unexpected: {}", text),
        Err(e) => println!("  {}", e),
    }

    let strict = match create_codec(CodecConfig::finite_only()) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        }
    };
    println!("  strict parse(\"1e400\") = {:?}", strict.parse("1e400"));
    match strict.format(FormatKind::Precision, 3, NAN) {
        Ok(text) => println!("  unexpected: {}", text),
        Err(e) => println!("  {}", e),
    }

    // Constants
    println!("\nConstants...");
    for (name, constant) in [
        ("EPSILON", EPSILON),
        ("MIN_VALUE", MIN_VALUE),
        ("MAX_VALUE", MAX_VALUE),
        ("MIN_SUBNORMAL", MIN_SUBNORMAL),
    ] {
        println!("  {} = {}", name, to_default_string(constant));
    }

    println!("\n=== Example Complete ===");
}
