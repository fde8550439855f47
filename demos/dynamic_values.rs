//! Building values with the form! macro and encoding them.
//!
//! Run with: cargo run --example dynamic_values

use serde_formdata::{append_value, form, FormData};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Structure not known at compile time? Build a dynamic value.
    let order = form!({
        "customer": {"name": "Bob", "vip": true},
        "items": [
            {"sku": "WIDGET-001", "qty": 2},
            {"sku": "GADGET-002", "qty": 1}
        ],
        "note": null,
        "gift_codes": []
    });

    let mut formd = FormData::new();
    append_value(&order, &mut formd, None)?;

    println!("Flat entries (note the omitted null and the [] sentinel):");
    for (key, value) in formd.iter() {
        println!("  {} = {:?}", key, value);
    }

    Ok(())
}
