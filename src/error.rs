//! Error types for form-data encoding.
//!
//! Encoding is the only fallible direction: a leaf value can only be appended
//! under an accumulated key, so encoding a bare leaf at the root fails with
//! [`Error::EmptyKey`]. Decoding never fails: malformed keys, shape
//! conflicts, and out-of-range indices all resolve into a best-effort
//! structure instead of an error.
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::{to_form_data, Error};
//!
//! // A bare string has no key to be appended under.
//! let result = to_form_data("just a string");
//! assert!(matches!(result, Err(Error::EmptyKey)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding form data.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A leaf value was reached with no accumulated key path. This happens
    /// when the value handed to the encoder is itself a bare leaf rather
    /// than an object or array.
    #[error("form data key cannot be empty")]
    EmptyKey,

    /// Unsupported type for conversion into a dynamic value
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through the serde error traits
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for shapes [`crate::to_value`]
    /// cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
