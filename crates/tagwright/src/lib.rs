//! # tagwright
//!
//! A compositional builder for producing well-formed, escaped HTML from
//! typed, immutable building blocks, without a templating mini-language.
//!
//! Element builders assemble an immutable in-memory tree; rendering is a
//! single depth-first pass writing escaped bytes to any `io::Write` sink.
//! Attributes and children mix freely in one list and are partitioned by
//! placement role; all class-bearing values on an element merge into a
//! single deduplicated `class` attribute.
//!
//! ## Example
//!
//! ```rust
//! use tagwright::attrs::{class, href};
//! use tagwright::tags::{a, body, document, h1, html, li, ul};
//! use tagwright::text;
//!
//! let page = document([html([body([
//!     h1([text("Links")]),
//!     ul([
//!         class("links"),
//!         li([a([href("https://example.com"), text("Example")])]),
//!     ]),
//! ])])]);
//!
//! let rendered = page.to_html().unwrap();
//! assert!(rendered.starts_with("<!DOCTYPE html>"));
//! assert!(rendered.contains(r#"<ul class="links">"#));
//! ```
//!
//! ## Custom composites
//!
//! Any type implementing [`Component`] can be dropped into a builder list;
//! it resolves to its canonical node on entry:
//!
//! ```rust
//! use tagwright::tags::{body, button};
//! use tagwright::{attr, text, Component, Node};
//!
//! struct SubmitButton {
//!     label: String,
//! }
//!
//! impl Component for SubmitButton {
//!     fn node(&self) -> Node {
//!         button([attr("type", "submit"), text(&self.label)])
//!     }
//! }
//!
//! let form_footer = body([SubmitButton { label: "Save".into() }.into()]);
//! assert_eq!(
//!     form_footer.to_html().unwrap(),
//!     r#"<body><button type="submit">Save</button></body>"#
//! );
//! ```

pub mod attrs;
pub mod tags;

#[cfg(feature = "codegen")]
pub mod codegen;

pub use tagwright_core::{
    attr, class_map, classes, document, flag, fragment, merge_classes, raw, render, tag, text,
    void_tag, Attribute, Component, Element, Error, Node, Result, VoidElement,
};
