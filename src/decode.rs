//! Flat → nested decoding.
//!
//! The decoder consumes flat `(key, value)` entries, parses each key into a
//! [`KeyPath`], and merges every entry into a single result tree, one entry
//! at a time, in the order the entries arrive. Container shape (sequence or
//! mapping) is inferred purely from key-path syntax: a child is assumed to
//! be a sequence when the segment after it is the append marker or all
//! digits, and a mapping otherwise.
//!
//! Decoding is total: malformed keys, shape conflicts, and out-of-range
//! indices never raise; they resolve into a best-effort structure. When a
//! later entry's shape evidence contradicts an earlier one at the same path,
//! the last entry wins and the prior contents at that path are discarded.
//!
//! ## Usage
//!
//! ```rust
//! use serde_formdata::{form, from_entries};
//!
//! let decoded = from_entries([
//!     ("user[name]", "Alice"),
//!     ("user[address][street]", "11 Tom Road"),
//!     ("age", "30"),
//!     ("preferences[colors][0]", "red"),
//!     ("preferences[colors][1]", "blue"),
//! ]);
//!
//! assert_eq!(
//!     decoded,
//!     form!({
//!         "user": {"name": "Alice", "address": {"street": "11 Tom Road"}},
//!         "age": "30",
//!         "preferences": {"colors": ["red", "blue"]}
//!     })
//! );
//! ```

use crate::key::{KeyPath, Segment};
use crate::{FormData, FormMap, FormValue, Value};

/// Decodes a [`FormData`] container into a nested value.
///
/// Entries are merged in insertion order. The result is always a container,
/// never a bare leaf: a mapping, or a sequence when a root-level append
/// marker rehomed the root. Decoding an empty container yields an empty
/// mapping.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{from_form_data, FormData};
///
/// let mut form = FormData::new();
/// form.append("tags[0]", "a");
/// form.append("tags[1]", "b");
///
/// let decoded = from_form_data(&form);
/// let tags = decoded.as_object().unwrap().get("tags").unwrap();
/// assert_eq!(tags.as_array().unwrap().len(), 2);
/// ```
#[must_use]
pub fn from_form_data(form: &FormData) -> Value {
    from_entries(form.iter().map(|(k, v)| (k, v.clone())))
}

/// Decodes an iterable of flat `(key, value)` entries into a nested value.
///
/// Accepts anything that yields string-ish keys and text or binary payloads;
/// entries are processed in the iterator's order, which is what recovers
/// array element ordering from well-formed input. Never fails.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{form, from_entries};
///
/// let decoded = from_entries([("a[b]", "1"), ("a[c]", "2")]);
/// assert_eq!(decoded, form!({"a": {"b": "1", "c": "2"}}));
/// ```
#[must_use]
pub fn from_entries<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<FormValue>,
{
    let mut root = Value::Object(FormMap::new());
    for (key, value) in entries {
        let path = KeyPath::parse(key.as_ref());
        let leaf = Value::from(value.into());
        merge_entry(&mut root, &path, leaf);
    }
    root
}

/// Merges one flat entry into the tree under construction.
///
/// The root is an explicit mutable cell: a shape conflict can force any
/// container, including the root itself, to be replaced wholesale, and
/// taking `&mut Value` guarantees the caller observes the replacement rather
/// than a stale earlier container.
///
/// An empty path (a key of nothing but stray brackets) drops the entry. A
/// final append marker whose payload is the empty string is the
/// empty-sequence sentinel: it ensures the sequence exists without appending
/// to it.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::{form, merge_entry, KeyPath, Value};
///
/// let mut root = Value::Object(Default::default());
/// merge_entry(&mut root, &KeyPath::parse("user[name]"), Value::from("Alice"));
/// assert_eq!(root, form!({"user": {"name": "Alice"}}));
/// ```
pub fn merge_entry(root: &mut Value, path: &KeyPath, leaf: Value) {
    let segments = path.segments();
    if segments.is_empty() {
        return;
    }
    let last = segments.len() - 1;
    let mut cursor: &mut Value = root;

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Append => {
                // Force sequence shape in place, discarding prior contents.
                // The cursor borrows the parent's slot (or the root cell), so
                // the replacement is visible without parent bookkeeping.
                if !cursor.is_array() {
                    *cursor = Value::Array(Vec::new());
                }
                if i == last {
                    if let Value::Array(items) = cursor {
                        if !is_empty_sequence_sentinel(&leaf) {
                            items.push(leaf);
                        }
                    }
                    return;
                }
                // A non-final append marker never descends; the walk
                // continues from the same container.
            }
            Segment::Named(name) => {
                if i == last {
                    assign_leaf(cursor, name, leaf);
                    return;
                }
                let assume_sequence = segments
                    .get(i + 1)
                    .is_some_and(|next| next.is_append() || next.is_index());
                cursor = match descend(cursor, name, assume_sequence) {
                    Some(child) => child,
                    None => return,
                };
            }
        }
    }
}

/// Steps into the child at `name`, creating it with the shape the lookahead
/// decided when it is missing or currently a leaf. An existing container is
/// descended into as-is even when the lookahead disagrees. Returns `None`
/// when the entry cannot be placed (a non-numeric name addressed into a
/// sequence).
fn descend<'a>(
    cursor: &'a mut Value,
    name: &str,
    assume_sequence: bool,
) -> Option<&'a mut Value> {
    match cursor {
        Value::Object(map) => {
            let needs_fresh = match map.get(name) {
                Some(child) => !is_container(child),
                None => true,
            };
            if needs_fresh {
                map.insert(name.to_string(), fresh_container(assume_sequence));
            }
            map.get_mut(name)
        }
        Value::Array(items) => {
            let index: usize = name.parse().ok()?;
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            if !is_container(&items[index]) {
                items[index] = fresh_container(assume_sequence);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}

/// Places a leaf at a named slot. On a sequence the name must parse as an
/// index; holes below it are padded with `Null`, and a non-numeric name
/// drops the entry.
fn assign_leaf(cursor: &mut Value, name: &str, leaf: Value) {
    match cursor {
        Value::Object(map) => {
            map.insert(name.to_string(), leaf);
        }
        Value::Array(items) => {
            if let Ok(index) = name.parse::<usize>() {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = leaf;
            }
        }
        _ => {}
    }
}

fn fresh_container(sequence: bool) -> Value {
    if sequence {
        Value::Array(Vec::new())
    } else {
        Value::Object(FormMap::new())
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// The encoder represents an empty sequence as a single `key[]` entry with
/// an empty text payload; a final append marker carrying that payload
/// re-creates the empty sequence instead of appending an empty string.
fn is_empty_sequence_sentinel(leaf: &Value) -> bool {
    matches!(leaf, Value::String(s) if s.is_empty())
}
