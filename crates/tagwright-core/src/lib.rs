//! tagwright-core - typed HTML node model and rendering engine
//!
//! This crate provides the building blocks for assembling well-formed,
//! escaped HTML from plain function calls. Construction is pure and
//! allocation-only; rendering is a single depth-first pass that writes
//! escaped bytes to a caller-supplied sink.
//!
//! # Architecture
//!
//! ```text
//! tag()/attr()/text() ──▶ ┌───────────┐
//!                         │           │
//!                         │ Node tree │ ──render──▶ io::Write sink
//! Component::node() ─────▶│           │
//!                         └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagwright_core::{attr, tag, text};
//!
//! let greeting = tag("p", [attr("class", "intro"), text("Hello, World!")]);
//!
//! let html = greeting.to_html().unwrap();
//! assert_eq!(html, r#"<p class="intro">Hello, World!</p>"#);
//! ```

mod attr;
mod classes;
mod escape;
mod node;
mod render;

pub use attr::{attr, flag, Attribute};
pub use classes::merge_classes;
pub use escape::escape;
pub use node::{
    class_map, classes, document, fragment, raw, tag, text, void_tag, Component, Element, Node,
    VoidElement,
};
pub use render::render;

/// Error type for tagwright operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute name falls outside the allowed grammar
    /// (ASCII letters, digits, `_`, `.`, `-`, `:`).
    #[error("invalid attribute name: {0:?}")]
    InvalidAttrName(String),

    /// A tag name falls outside the allowed grammar
    /// (ASCII letters, digits, `-`, `_`).
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// A value was offered where it satisfies neither placement role.
    #[error("value is neither attribute- nor element-capable here: {0}")]
    InvalidNodeType(String),

    /// A non-class value was offered into class-merge position.
    #[error("cannot merge {0} into a class attribute")]
    UnsupportedClassMerge(String),

    /// The output sink reported a failure.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
