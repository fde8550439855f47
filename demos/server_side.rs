//! Reconstructing a nested structure from submitted flat fields: the
//! server-side half of a bracket-notation form submission.
//!
//! Run with: cargo run --example server_side

use serde_formdata::from_entries;

fn main() {
    // What a multipart parser hands you: flat keys in submission order.
    let submitted = [
        ("user[name]", "Alice"),
        ("user[address][street]", "11 Tom Road"),
        ("user[address][city]", "NYC"),
        ("user[address][zip]", "10001"),
        ("age", "30"),
        ("preferences[colors][0]", "red"),
        ("preferences[colors][1]", "blue"),
        ("preferences[notifications]", "true"),
    ];

    let nested = from_entries(submitted);
    println!("Reconstructed:\n{:#?}", nested);
}
