//! Bracket-notation key paths.
//!
//! A flat entry key like `user[tags][]` is the rendering of an ordered list
//! of segments: `user`, `tags`, and the append marker. This module provides
//! [`Segment`] and [`KeyPath`] together with the two halves of the grammar:
//! parsing a key string into a path and rendering a path back into a key
//! string.
//!
//! The grammar has two token kinds only:
//!
//! ```text
//! key            := segment (bracketSegment)*
//! segment        := [^\[\]]+
//! bracketSegment := "[" [^\[\]]* "]"      ; empty content => append marker
//! ```
//!
//! A segment that happens to be all digits (`"0"`) stays a named segment;
//! whether it addresses an array index is decided by the decoder from
//! context, never by reclassifying the token.
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::{KeyPath, Segment};
//!
//! let path = KeyPath::parse("user[tags][]");
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::named("user"),
//!         Segment::named("tags"),
//!         Segment::Append,
//!     ]
//! );
//! assert_eq!(path.to_string(), "user[tags][]");
//! ```

use std::fmt;

/// One step of a key path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A name token: a mapping key, or, when all digits, a candidate
    /// sequence index.
    Named(String),
    /// The empty-bracket marker `[]`: "next free position of a sequence".
    Append,
}

impl Segment {
    /// Creates a named segment.
    pub fn named(name: impl Into<String>) -> Self {
        Segment::Named(name.into())
    }

    /// Returns `true` if this is the append marker.
    #[inline]
    #[must_use]
    pub const fn is_append(&self) -> bool {
        matches!(self, Segment::Append)
    }

    /// Returns `true` if this is a named segment whose text is entirely
    /// ASCII digits, the syntactic evidence the decoder uses to assume a
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::Segment;
    ///
    /// assert!(Segment::named("0").is_index());
    /// assert!(Segment::named("42").is_index());
    /// assert!(!Segment::named("4two").is_index());
    /// assert!(!Segment::named("").is_index());
    /// assert!(!Segment::Append.is_index());
    /// ```
    #[must_use]
    pub fn is_index(&self) -> bool {
        match self {
            Segment::Named(name) => {
                !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
            }
            Segment::Append => false,
        }
    }
}

/// An ordered list of [`Segment`]s parsed from, or rendered into, a
/// bracket-notation key string.
///
/// # Examples
///
/// ```rust
/// use serde_formdata::KeyPath;
///
/// let mut path = KeyPath::parse("user");
/// path = path.child("tags").child_index(0);
/// assert_eq!(path.to_string(), "user[tags][0]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Creates an empty path, the "no accumulated key" state the encoder
    /// starts from at the root.
    #[must_use]
    pub fn new() -> Self {
        KeyPath {
            segments: Vec::new(),
        }
    }

    /// Parses a flat key string into a path.
    ///
    /// The literal empty string parses to the single degenerate segment
    /// `Named("")`, not to an empty path. Otherwise the string is scanned
    /// left to right: maximal runs of non-bracket characters become named
    /// segments, each literal `[]` pair becomes the append marker, and any
    /// other bracket acts as a separator. Parsing never fails; a key of
    /// nothing but separators yields an empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::{KeyPath, Segment};
    ///
    /// assert_eq!(
    ///     KeyPath::parse("a[b][0][]").segments(),
    ///     &[
    ///         Segment::named("a"),
    ///         Segment::named("b"),
    ///         Segment::named("0"),
    ///         Segment::Append,
    ///     ]
    /// );
    /// assert_eq!(KeyPath::parse("").segments(), &[Segment::named("")]);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Self {
        if key.is_empty() {
            return KeyPath {
                segments: vec![Segment::Named(String::new())],
            };
        }

        let bytes = key.as_bytes();
        let mut segments = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'[' if bytes.get(i + 1) == Some(&b']') => {
                    segments.push(Segment::Append);
                    i += 2;
                }
                b'[' | b']' => {
                    i += 1;
                }
                _ => {
                    let start = i;
                    while i < bytes.len() && bytes[i] != b'[' && bytes[i] != b']' {
                        i += 1;
                    }
                    segments.push(Segment::Named(key[start..i].to_string()));
                }
            }
        }
        KeyPath { segments }
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Removes the last segment, if any.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Returns a new path extended with a named segment.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Named(name.into()));
        KeyPath { segments }
    }

    /// Returns a new path extended with a numeric index segment.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    /// Returns a new path extended with the append marker.
    #[must_use]
    pub fn child_append(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Append);
        KeyPath { segments }
    }

    /// The segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for KeyPath {
    fn from(segments: Vec<Segment>) -> Self {
        KeyPath { segments }
    }
}

impl FromIterator<Segment> for KeyPath {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        KeyPath {
            segments: iter.into_iter().collect(),
        }
    }
}

/// Renders the path as a flat key string: the first named segment renders
/// bare, later named segments render bracketed, and the append marker
/// renders `[]` in any position.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Named(name) if i == 0 => f.write_str(name)?,
                Segment::Named(name) => write!(f, "[{}]", name)?,
                Segment::Append => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}
