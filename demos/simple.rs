//! Basic form-data encoding and decoding.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_formdata::{from_form_data, to_form_data};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Signup {
    name: String,
    email: String,
    hobbies: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let signup = Signup {
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        hobbies: vec!["reading".to_string(), "hiking".to_string()],
    };

    // Encode to flat form-data entries
    let form = to_form_data(&signup)?;
    println!("Flat entries:");
    for (key, value) in form.iter() {
        println!("  {} = {:?}", key, value);
    }

    // Decode back into a nested value
    let decoded = from_form_data(&form);
    println!("\nDecoded structure:\n{:#?}", decoded);

    Ok(())
}
