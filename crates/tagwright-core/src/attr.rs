//! Attribute value type and name validation.

use crate::node::Node;
use crate::{Error, Result};

/// A single key/value or key-only HTML attribute.
///
/// The key is validated at construction; the value is escaped only when
/// rendered. Values are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: String,
    value: Option<String>,
}

impl Attribute {
    /// Create a key/value attribute.
    ///
    /// Fails with [`Error::InvalidAttrName`] when `key` is empty or contains
    /// a character outside ASCII letters, digits, `_`, `.`, `-`, `:`.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if !is_valid_attr_name(&key) {
            return Err(Error::InvalidAttrName(key));
        }
        Ok(Self {
            key,
            value: Some(value.into()),
        })
    }

    /// Create a key-only (boolean) attribute, e.g. `required`.
    ///
    /// Same name-validity contract as [`Attribute::new`].
    pub fn flag(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if !is_valid_attr_name(&key) {
            return Err(Error::InvalidAttrName(key));
        }
        Ok(Self { key, value: None })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value; `None` for the key-only form.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Build a key/value attribute node.
///
/// # Panics
///
/// Panics when `key` violates the attribute-name grammar. Use
/// [`Attribute::new`] for names that are not known at compile time.
pub fn attr(key: impl Into<String>, value: impl Into<String>) -> Node {
    match Attribute::new(key, value) {
        Ok(attribute) => Node::Attr(attribute),
        Err(err) => panic!("{err}"),
    }
}

/// Build a key-only (boolean) attribute node, rendered as the bare key.
///
/// # Panics
///
/// Panics when `key` violates the attribute-name grammar. Use
/// [`Attribute::flag`] for names that are not known at compile time.
pub fn flag(key: impl Into<String>) -> Node {
    match Attribute::flag(key) {
        Ok(attribute) => Node::Attr(attribute),
        Err(err) => panic!("{err}"),
    }
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | ':'))
}
