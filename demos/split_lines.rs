//! Splitting import lines into fields
//!
//! Run with: cargo run --example split_lines

use loadstream::{extract_field, IndexedLine, LineSplitter, TokenizerConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TokenizerConfig::new().null_sentinel("NULL");

    // Field by field, flagging the last column
    println!("=== extract_field ===");
    let mut line = IndexedLine::new(r#"42,"Smith, J",a\,b,NULL,notes, with commas"#);
    for index in 0..5 {
        let is_last = index == 4;
        match extract_field(&mut line, &config, is_last)? {
            Some(field) if field.is_null() => println!("  [{}] <null>", index),
            Some(field) => println!("  [{}] {:?}", index, field.to_string()),
            None => println!("  [{}] <line ended>", index),
        }
    }

    // Whole lines with a known column count
    println!("\n=== LineSplitter ===");
    let splitter = LineSplitter::new(config)?;
    let lines = [
        "1,Alice,\"New York, NY\"",
        "2,null,San Francisco, CA",
        "3",
    ];

    for (row, result) in splitter.split_lines(lines, 3).enumerate() {
        match result {
            Ok(fields) => {
                let values: Vec<Option<&str>> = fields.iter().map(|f| f.as_str()).collect();
                println!("  row {}: {:?}", row, values);
            }
            Err(e) => println!("  row {}: skipped ({})", row, e),
        }
    }

    Ok(())
}
