//! The polymorphic markup node and the element builders.
//!
//! Every constructible value is a [`Node`] variant, tagged explicitly with
//! the placement roles it satisfies: attribute position, child position, or
//! (for fragments) spliced into whichever list it lands in. All values are
//! immutable; "modification" always returns a new value.

use indexmap::IndexMap;

use crate::attr::Attribute;
use crate::{Error, Result};

/// A markup node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Container element with attributes and children; closing tag required.
    Element(Element),
    /// Void element with attributes only, terminated with ` />`.
    Void(VoidElement),
    /// Text leaf, HTML-escaped at render time.
    Text(String),
    /// Unescaped text, written byte-for-byte. Caller must pre-sanitize.
    Raw(String),
    /// A single key/value or key-only attribute.
    Attr(Attribute),
    /// Whitespace-separated class tokens, deduplicated on render.
    Classes(String),
    /// Class tokens with an enabled flag each; render keeps the `true` ones,
    /// first-insertion order.
    ClassMap(IndexMap<String, bool>),
    /// An ordered group of nodes, spliced into the surrounding list.
    Fragment(Vec<Node>),
    /// `<!DOCTYPE html>` preamble followed by top-level children.
    Document(Vec<Node>),
    /// Renders one of two branches, chosen by a boolean captured at
    /// construction time.
    Either {
        cond: bool,
        then: Box<Node>,
        otherwise: Box<Node>,
    },
    /// Renders nothing and introduces no separator.
    Empty,
}

/// A user-defined composite that resolves to a canonical [`Node`].
///
/// This is the single resolution entry point for values that start out
/// untyped; the blanket `From` impl converts a component the moment it
/// enters a builder list.
///
/// ```rust
/// use tagwright_core::{attr, tag, text, Component, Node};
///
/// struct Badge(&'static str);
///
/// impl Component for Badge {
///     fn node(&self) -> Node {
///         tag("span", [attr("class", "badge"), text(self.0)])
///     }
/// }
///
/// let card = tag("div", [Badge("new").into()]);
/// assert_eq!(card.to_html().unwrap(), r#"<div><span class="badge">new</span></div>"#);
/// ```
pub trait Component {
    fn node(&self) -> Node;
}

impl<C: Component> From<C> for Node {
    fn from(component: C) -> Self {
        component.node()
    }
}

impl Node {
    /// Whether this node can be placed where an attribute is expected.
    pub fn is_attribute_capable(&self) -> bool {
        matches!(self, Node::Attr(_) | Node::Classes(_) | Node::ClassMap(_))
    }

    /// Whether this node can be placed where a child element is expected.
    pub fn is_element_capable(&self) -> bool {
        matches!(
            self,
            Node::Element(_)
                | Node::Void(_)
                | Node::Text(_)
                | Node::Raw(_)
                | Node::Document(_)
                | Node::Either { .. }
        )
    }

    /// Short human-readable variant name, used in error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Element(_) => "an element",
            Node::Void(_) => "a void element",
            Node::Text(_) => "a text node",
            Node::Raw(_) => "a raw node",
            Node::Attr(_) => "an attribute",
            Node::Classes(_) => "a class list",
            Node::ClassMap(_) => "a class map",
            Node::Fragment(_) => "a fragment",
            Node::Document(_) => "a document",
            Node::Either { .. } => "a conditional",
            Node::Empty => "an empty node",
        }
    }

    /// A conditional node: renders `then` when `cond` is true, otherwise the
    /// branch attached with [`Node::otherwise`] (nothing when absent).
    ///
    /// The condition and both branches are fixed at construction; only the
    /// branch *choice* happens at render time.
    pub fn when(cond: bool, then: Node) -> Node {
        Node::Either {
            cond,
            then: Box::new(then),
            otherwise: Box::new(Node::Empty),
        }
    }

    /// Attach the else-branch of a conditional built with [`Node::when`].
    ///
    /// # Panics
    ///
    /// Panics when called on anything other than a conditional node.
    pub fn otherwise(self, els: Node) -> Node {
        match self {
            Node::Either { cond, then, .. } => Node::Either {
                cond,
                then,
                otherwise: Box::new(els),
            },
            other => panic!("otherwise() called on {}, not a conditional", other.kind()),
        }
    }

    /// Append further attribute- and/or child-capable values, returning a
    /// new node. The receiver is consumed; clone it first to keep both.
    ///
    /// # Panics
    ///
    /// Panics when the node is not an element, fragment or document, or when
    /// an element-capable value is appended to a void element.
    pub fn with(self, items: impl IntoIterator<Item = Node>) -> Node {
        match self {
            Node::Element(element) => Node::Element(element.extend(items)),
            Node::Void(element) => match element.extend(items) {
                Ok(extended) => Node::Void(extended),
                Err(err) => panic!("{err}"),
            },
            Node::Fragment(mut members) => {
                flatten_into(items, &mut members);
                Node::Fragment(members)
            }
            Node::Document(mut children) => {
                append_children(items, &mut children);
                Node::Document(children)
            }
            other => panic!("cannot append to {}", other.kind()),
        }
    }
}

/// A named container element: attributes plus an ordered child list.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    pub(crate) attrs: Vec<Node>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Fails with [`Error::InvalidTagName`] unless `tag` is non-empty ASCII
    /// alphanumerics plus `-`/`_`.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if !is_valid_tag_name(&tag) {
            return Err(Error::InvalidTagName(tag));
        }
        Ok(Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Partition `items` by placement role and append them, keeping the
    /// original relative order within each partition. Fragments are spliced
    /// first; empty nodes are dropped.
    pub fn extend(mut self, items: impl IntoIterator<Item = Node>) -> Self {
        let mut flat = Vec::new();
        flatten_into(items, &mut flat);
        for node in flat {
            if matches!(node, Node::Empty) {
                continue;
            }
            if node.is_attribute_capable() {
                self.attrs.push(node);
            } else {
                self.children.push(node);
            }
        }
        self
    }
}

/// A named void (self-closing) element: attributes only, never children.
#[derive(Debug, Clone, PartialEq)]
pub struct VoidElement {
    tag: String,
    pub(crate) attrs: Vec<Node>,
}

impl VoidElement {
    /// Same tag-name contract as [`Element::new`].
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if !is_valid_tag_name(&tag) {
            return Err(Error::InvalidTagName(tag));
        }
        Ok(Self {
            tag,
            attrs: Vec::new(),
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Append attribute-capable values. Fails with [`Error::InvalidNodeType`]
    /// when offered an element-capable value; void elements carry no children.
    pub fn extend(mut self, items: impl IntoIterator<Item = Node>) -> Result<Self> {
        let mut flat = Vec::new();
        flatten_into(items, &mut flat);
        for node in flat {
            if matches!(node, Node::Empty) {
                continue;
            }
            if !node.is_attribute_capable() {
                return Err(Error::InvalidNodeType(format!(
                    "{} offered to void element <{}>",
                    node.kind(),
                    self.tag
                )));
            }
            self.attrs.push(node);
        }
        Ok(self)
    }
}

/// Splice fragments recursively, preserving member order.
fn flatten_into(items: impl IntoIterator<Item = Node>, out: &mut Vec<Node>) {
    for item in items {
        match item {
            Node::Fragment(members) => flatten_into(members, out),
            other => out.push(other),
        }
    }
}

fn append_children(items: impl IntoIterator<Item = Node>, out: &mut Vec<Node>) {
    let mut flat = Vec::new();
    flatten_into(items, &mut flat);
    for node in flat {
        if matches!(node, Node::Empty) {
            continue;
        }
        if !node.is_element_capable() {
            panic!(
                "{}",
                Error::InvalidNodeType(format!("{} offered as a top-level node", node.kind()))
            );
        }
        out.push(node);
    }
}

fn is_valid_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Build a container element from mixed attribute- and child-capable values.
///
/// # Panics
///
/// Panics when `name` violates the tag-name grammar. Use [`Element::new`]
/// for names that are not known at compile time.
pub fn tag(name: &str, items: impl IntoIterator<Item = Node>) -> Node {
    match Element::new(name) {
        Ok(element) => Node::Element(element.extend(items)),
        Err(err) => panic!("{err}"),
    }
}

/// Build a void (self-closing) element from attribute-capable values.
///
/// # Panics
///
/// Panics when `name` is invalid or when an element-capable value is passed.
/// Use [`VoidElement::new`] and [`VoidElement::extend`] for the fallible form.
pub fn void_tag(name: &str, items: impl IntoIterator<Item = Node>) -> Node {
    let element = match VoidElement::new(name) {
        Ok(element) => element,
        Err(err) => panic!("{err}"),
    };
    match element.extend(items) {
        Ok(extended) => Node::Void(extended),
        Err(err) => panic!("{err}"),
    }
}

/// A text leaf, HTML-escaped at render time.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Unescaped text, written byte-for-byte.
pub fn raw(content: impl Into<String>) -> Node {
    Node::Raw(content.into())
}

/// A whitespace-separated class list, deduplicated on render with
/// first-occurrence order preserved.
pub fn classes(list: impl Into<String>) -> Node {
    Node::Classes(list.into())
}

/// A class-token map; render includes exactly the tokens mapped `true`.
pub fn class_map<K: Into<String>>(entries: impl IntoIterator<Item = (K, bool)>) -> Node {
    Node::ClassMap(
        entries
            .into_iter()
            .map(|(token, enabled)| (token.into(), enabled))
            .collect(),
    )
}

/// An ordered group of nodes, spliced wherever a single node is expected.
pub fn fragment(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(items.into_iter().collect())
}

/// The document root: `<!DOCTYPE html>` followed by each child in order.
///
/// # Panics
///
/// Panics when a non-element-capable value is passed as a top-level node.
pub fn document(items: impl IntoIterator<Item = Node>) -> Node {
    let mut children = Vec::new();
    append_children(items, &mut children);
    Node::Document(children)
}
