//! # serde_formdata
//!
//! Bidirectional transformation between nested, dynamically-typed values and
//! the flat, ordered key-value entries of an HTML `multipart/form-data`
//! submission, using bracket-notation key paths (`user[address][city]`,
//! `tags[0]`, `items[]`).
//!
//! ## The two directions
//!
//! - **Encode** walks a nested value depth-first and appends one flat entry
//!   per leaf, rendering the accumulated path in bracket notation. Nulls are
//!   omitted entirely, empty containers leave a single sentinel entry, and
//!   binary payloads pass through without string conversion.
//! - **Decode** parses each flat key back into a path and merges every entry
//!   into a single nested result, inferring whether each container is an
//!   array or an object purely from key-path syntax. Decoding is total: it
//!   never fails, resolving conflicting or malformed input into a
//!   best-effort structure.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: encode any `#[derive(Serialize)]` type directly;
//!   build dynamic values with [`to_value`] or the [`form!`] macro
//! - **Order Preserving**: objects keep insertion order ([`FormMap`]) and the
//!   flat container keeps append order, so output is deterministic and array
//!   elements decode back in position
//! - **Binary Aware**: file/blob payloads ride through the flat container
//!   untouched
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_formdata = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Encoding a struct
//!
//! ```rust
//! use serde::Serialize;
//! use serde_formdata::to_form_data;
//!
//! #[derive(Serialize)]
//! struct Signup {
//!     name: String,
//!     age: u32,
//!     hobbies: Vec<String>,
//! }
//!
//! let signup = Signup {
//!     name: "Alice".to_string(),
//!     age: 30,
//!     hobbies: vec!["reading".to_string(), "hiking".to_string()],
//! };
//!
//! let form = to_form_data(&signup).unwrap();
//! let keys: Vec<_> = form.keys().collect();
//! assert_eq!(keys, vec!["name", "age", "hobbies[0]", "hobbies[1]"]);
//! ```
//!
//! ### Decoding flat entries
//!
//! ```rust
//! use serde_formdata::{form, from_entries};
//!
//! let decoded = from_entries([
//!     ("user[name]", "Alice"),
//!     ("user[address][city]", "NYC"),
//!     ("preferences[colors][0]", "red"),
//!     ("preferences[colors][1]", "blue"),
//! ]);
//!
//! assert_eq!(
//!     decoded,
//!     form!({
//!         "user": {"name": "Alice", "address": {"city": "NYC"}},
//!         "preferences": {"colors": ["red", "blue"]}
//!     })
//! );
//! ```
//!
//! ## Semantics worth knowing
//!
//! - Encoding a bare leaf with no key fails with [`Error::EmptyKey`]; every
//!   other encode succeeds, and decode never fails at all.
//! - All encoded leaves become strings (dates render RFC 3339, numbers keep
//!   the host spellings `Infinity`/`-Infinity`/`NaN`); only binary payloads
//!   survive a round trip with their type intact.
//! - When two entries disagree about the shape of the same path, the last
//!   entry wins and earlier contents at that path are discarded.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - encode a derived struct and decode it back
//! - **`dynamic_values.rs`** - build values with the form! macro
//! - **`server_side.rs`** - reconstruct a nested structure from submitted
//!   flat fields
//!
//! Run any of them with: `cargo run --example <name>`

pub mod decode;
pub mod encode;
pub mod error;
pub mod form;
pub mod key;
pub mod macros;
pub mod map;
pub mod value;

pub use decode::{from_entries, from_form_data, merge_entry};
pub use encode::{append_value, ValueSerializer};
pub use error::{Error, Result};
pub use form::{FormData, FormValue};
pub use key::{KeyPath, Segment};
pub use map::FormMap;
pub use value::{Number, Value};

use serde::Serialize;

/// Encodes any `T: Serialize` into a fresh [`FormData`] container.
///
/// The value is first converted into a dynamic [`Value`] tree, then walked
/// depth-first into flat entries. On error nothing is returned; there are
/// no partial results.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::to_form_data;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let form = to_form_data(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(form.get("x").and_then(|v| v.as_text()), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyKey`] if `value` is a bare leaf (string, number,
/// boolean, date, binary), since a leaf needs an accumulated key to be
/// appended under. Returns an error if the value cannot be converted (see
/// [`to_value`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_form_data<T>(value: &T) -> Result<FormData>
where
    T: ?Sized + Serialize,
{
    let mut form = FormData::new();
    append_to_form_data(value, &mut form, None)?;
    Ok(form)
}

/// Encodes any `T: Serialize` into flat entries appended to a caller-supplied
/// container, optionally under a key-path prefix.
///
/// Existing entries in `form` are left untouched; duplicate keys are
/// permitted and preserved in order.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{append_to_form_data, FormData};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Address { city: String }
///
/// let mut form = FormData::new();
/// form.append("name", "Alice");
///
/// let address = Address { city: "NYC".to_string() };
/// append_to_form_data(&address, &mut form, Some("user[address]")).unwrap();
///
/// let keys: Vec<_> = form.keys().collect();
/// assert_eq!(keys, vec!["name", "user[address][city]"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyKey`] for a bare leaf with no prefix, or an error
/// if the value cannot be converted (see [`to_value`]).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn append_to_form_data<T>(value: &T, form: &mut FormData, key: Option<&str>) -> Result<()>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    append_value(&value, form, key)
}

/// Converts any `T: Serialize` into a dynamic [`Value`].
///
/// Useful for working with form data when the structure isn't known at
/// compile time. `None` and unit become [`Value::Null`], byte slices become
/// [`Value::Bytes`].
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error for shapes the dynamic model does not represent
/// (non-string map keys, enum variants carrying data).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn sample_user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_encode_struct_to_entries() {
        let form = to_form_data(&sample_user()).unwrap();

        let entries: Vec<_> = form
            .iter()
            .map(|(k, v)| (k.to_string(), v.as_text().unwrap().to_string()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("id".to_string(), "123".to_string()),
                ("name".to_string(), "Alice".to_string()),
                ("active".to_string(), "true".to_string()),
                ("tags[0]".to_string(), "admin".to_string()),
                ("tags[1]".to_string(), "user".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_then_decode_recovers_structure() {
        let form = to_form_data(&sample_user()).unwrap();
        let decoded = from_form_data(&form);

        assert_eq!(
            decoded,
            form!({
                "id": "123",
                "name": "Alice",
                "active": "true",
                "tags": ["admin", "user"]
            })
        );
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&sample_user()).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("id"), Some(&Value::Number(Number::Integer(123))));
        assert_eq!(obj.get("active"), Some(&Value::Bool(true)));
        assert!(obj.get("tags").unwrap().is_array());
    }

    #[test]
    fn test_option_none_is_omitted() {
        #[derive(Serialize)]
        struct Partial {
            x: Option<i32>,
            y: Option<i32>,
            z: i32,
        }

        let form = to_form_data(&Partial {
            x: None,
            y: None,
            z: 1,
        })
        .unwrap();

        let keys: Vec<_> = form.keys().collect();
        assert_eq!(keys, vec!["z"]);
    }

    #[test]
    fn test_bare_leaf_fails_with_empty_key() {
        assert!(matches!(to_form_data("just a string"), Err(Error::EmptyKey)));
        assert!(matches!(to_form_data(&42), Err(Error::EmptyKey)));
    }

    #[test]
    fn test_decode_is_pure_and_idempotent() {
        let entries = [("a[b]", "1"), ("a[c][0]", "2")];
        assert_eq!(from_entries(entries), from_entries(entries));
    }
}
