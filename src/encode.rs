//! Nested → flat encoding.
//!
//! The encoder walks a [`Value`] tree depth-first and appends one flat entry
//! per leaf, with the accumulated bracket-notation key path as the entry key.
//! Nulls vanish, empty containers leave a single sentinel entry, and binary
//! leaves pass through without string conversion.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_formdata::to_form_data;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Profile {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let profile = Profile {
//!     name: "Alice".to_string(),
//!     tags: vec!["admin".to_string()],
//! };
//!
//! let form = to_form_data(&profile).unwrap();
//! let keys: Vec<_> = form.keys().collect();
//! assert_eq!(keys, vec!["name", "tags[0]"]);
//! ```
//!
//! ## Appending under a prefix
//!
//! [`append_value`] is the raw contract: it takes the value, the target
//! container, and an optional key-path prefix, and appends entries for the
//! whole subtree:
//!
//! ```rust
//! use serde_formdata::{append_value, form, FormData};
//!
//! let mut form_data = FormData::new();
//! let value = form!({"city": "NYC"});
//! append_value(&value, &mut form_data, Some("user[address]")).unwrap();
//!
//! assert_eq!(form_data.keys().collect::<Vec<_>>(), vec!["user[address][city]"]);
//! ```

use crate::key::{KeyPath, Segment};
use crate::{Error, FormData, FormMap, FormValue, Number, Result, Value};
use serde::{ser, Serialize};

/// Encodes `value` into flat entries appended to `form`, under an optional
/// key-path prefix.
///
/// With no prefix, the value must be a container: a bare leaf has no key to
/// be appended under and fails with [`Error::EmptyKey`]. A null produces no
/// entries at any depth, and an empty object with no prefix degenerates to a
/// no-op.
///
/// # Errors
///
/// Returns [`Error::EmptyKey`] when a leaf is reached with no accumulated
/// key path.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn append_value(value: &Value, form: &mut FormData, key: Option<&str>) -> Result<()> {
    let mut path = match key {
        Some(key) => KeyPath::parse(key),
        None => KeyPath::new(),
    };
    encode_value(value, form, &mut path)
}

/// Depth-first, pre-order walk. `path` is the accumulated key; an empty path
/// means no key has been accumulated yet (only possible at the root).
pub(crate) fn encode_value(
    value: &Value,
    form: &mut FormData,
    path: &mut KeyPath,
) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            if items.is_empty() {
                form.append(path.child_append().to_string(), "");
                Ok(())
            } else {
                for (index, item) in items.iter().enumerate() {
                    path.push(Segment::Named(index.to_string()));
                    let result = encode_value(item, form, path);
                    path.pop();
                    result?;
                }
                Ok(())
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                // The sentinel sits at the current path itself; with no
                // accumulated path there is nothing to key it under.
                if !path.is_empty() {
                    form.append(path.to_string(), "");
                }
                Ok(())
            } else {
                for (name, child) in map.iter() {
                    path.push(Segment::named(name));
                    let result = encode_value(child, form, path);
                    path.pop();
                    result?;
                }
                Ok(())
            }
        }
        leaf => {
            if path.is_empty() {
                return Err(Error::EmptyKey);
            }
            form.append(path.to_string(), leaf_payload(leaf));
            Ok(())
        }
    }
}

/// Binary leaves pass through; every other leaf takes its canonical string
/// form.
fn leaf_payload(leaf: &Value) -> FormValue {
    match leaf {
        Value::Bytes(bytes) => FormValue::Bytes(bytes.clone()),
        other => FormValue::Text(other.to_string()),
    }
}

/// Serializer that converts any `T: Serialize` into a [`Value`] tree.
///
/// This is what [`crate::to_value`] runs; [`crate::to_form_data`] composes it
/// with the flat walk. `None` and unit become [`Value::Null`], byte slices
/// become [`Value::Bytes`], and map keys must be strings.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: FormMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: FormMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
