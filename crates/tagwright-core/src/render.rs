//! The rendering engine.
//!
//! A single synchronous, depth-first, order-preserving traversal that writes
//! escaped bytes to the caller-supplied sink. The only fallible operation is
//! the sink write; a failure propagates immediately and no further bytes are
//! written. Rendering never mutates the tree, so the same tree may be
//! rendered concurrently from multiple threads.

use std::io::Write;

use crate::attr::Attribute;
use crate::classes::merge_classes;
use crate::escape::write_escaped;
use crate::node::{Element, Node, VoidElement};
use crate::Result;

/// Render `node` to `w`.
pub fn render(node: &Node, w: &mut dyn Write) -> Result<()> {
    match node {
        Node::Element(element) => render_element(element, w),
        Node::Void(element) => render_void(element, w),
        Node::Text(content) => Ok(write_escaped(w, content)?),
        Node::Raw(content) => Ok(w.write_all(content.as_bytes())?),
        Node::Attr(attribute) => render_attribute(attribute, w),
        Node::Classes(_) | Node::ClassMap(_) => {
            let tokens = merge_classes([node])?;
            render_class(&tokens, w)
        }
        Node::Fragment(members) => render_fragment(members, w),
        Node::Document(children) => {
            w.write_all(b"<!DOCTYPE html>")?;
            for child in children {
                render(child, w)?;
            }
            Ok(())
        }
        Node::Either {
            cond,
            then,
            otherwise,
        } => render(if *cond { then } else { otherwise }, w),
        Node::Empty => Ok(()),
    }
}

impl Node {
    /// Render this node to the given sink.
    pub fn render(&self, w: &mut dyn Write) -> Result<()> {
        render(self, w)
    }

    /// Render this node to an in-memory string.
    pub fn to_html(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        render(self, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap_or_default())
    }
}

fn render_attribute(attribute: &Attribute, w: &mut dyn Write) -> Result<()> {
    write_escaped(w, attribute.key())?;
    if let Some(value) = attribute.value() {
        w.write_all(b"=\"")?;
        write_escaped(w, value)?;
        w.write_all(b"\"")?;
    }
    Ok(())
}

fn render_class(tokens: &str, w: &mut dyn Write) -> Result<()> {
    w.write_all(b"class=\"")?;
    write_escaped(w, tokens)?;
    w.write_all(b"\"")?;
    Ok(())
}

/// Write the attribute list: non-class attributes in original order, each
/// preceded by a single space, then the merged `class` attribute last.
fn render_attrs(attrs: &[Node], w: &mut dyn Write) -> Result<()> {
    let mut class_bucket = Vec::new();
    for node in attrs {
        match node {
            Node::Classes(_) | Node::ClassMap(_) => class_bucket.push(node),
            Node::Attr(attribute) if attribute.key() == "class" => class_bucket.push(node),
            Node::Attr(attribute) => {
                w.write_all(b" ")?;
                render_attribute(attribute, w)?;
            }
            // construction only routes attribute-capable nodes here
            other => {
                w.write_all(b" ")?;
                render(other, w)?;
            }
        }
    }
    if !class_bucket.is_empty() {
        let tokens = merge_classes(class_bucket.into_iter())?;
        w.write_all(b" ")?;
        render_class(&tokens, w)?;
    }
    Ok(())
}

fn render_element(element: &Element, w: &mut dyn Write) -> Result<()> {
    w.write_all(b"<")?;
    w.write_all(element.tag_name().as_bytes())?;
    render_attrs(&element.attrs, w)?;
    w.write_all(b">")?;
    for child in &element.children {
        render(child, w)?;
    }
    w.write_all(b"</")?;
    w.write_all(element.tag_name().as_bytes())?;
    w.write_all(b">")?;
    Ok(())
}

fn render_void(element: &VoidElement, w: &mut dyn Write) -> Result<()> {
    w.write_all(b"<")?;
    w.write_all(element.tag_name().as_bytes())?;
    render_attrs(&element.attrs, w)?;
    w.write_all(b" />")?;
    Ok(())
}

/// Fragment members render back to back; a single space separates two
/// consecutive attribute-capable members so a standalone attribute group
/// stays well-formed.
fn render_fragment(members: &[Node], w: &mut dyn Write) -> Result<()> {
    let mut previous_was_attr = false;
    for member in members {
        if matches!(member, Node::Empty) {
            continue;
        }
        let is_attr = member.is_attribute_capable();
        if previous_was_attr && is_attr {
            w.write_all(b" ")?;
        }
        render(member, w)?;
        previous_was_attr = is_attr;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{attr, flag};
    use crate::node::{class_map, classes, document, fragment, raw, tag, text, void_tag};
    use crate::Error;

    fn html(node: &Node) -> String {
        node.to_html().unwrap()
    }

    #[test]
    fn test_empty_container() {
        assert_eq!(html(&tag("foo", [])), "<foo></foo>");
    }

    #[test]
    fn test_container_with_attributes_and_child() {
        let node = tag(
            "foo",
            [attr("k1", "v1"), attr("k2", "v2"), tag("bar", [])],
        );
        assert_eq!(html(&node), r#"<foo k1="v1" k2="v2"><bar></bar></foo>"#);
    }

    #[test]
    fn test_interleaved_attributes_and_children() {
        let node = tag("foo", [text("a"), attr("k", "v"), text("b")]);
        assert_eq!(html(&node), r#"<foo k="v">ab</foo>"#);
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(html(&void_tag("single", [])), "<single />");
        assert_eq!(
            html(&void_tag("single", [attr("key", "value")])),
            r#"<single key="value" />"#
        );
    }

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        assert_eq!(html(&tag("p", [text("a < b & c")])), "<p>a &lt; b &amp; c</p>");
        assert_eq!(html(&tag("p", [raw("<em>hi</em>")])), "<p><em>hi</em></p>");
    }

    #[test]
    fn test_flag_renders_bare() {
        assert_eq!(
            html(&void_tag("input", [attr("type", "text"), flag("required")])),
            r#"<input type="text" required />"#
        );
    }

    #[test]
    fn test_class_values_merge_into_one_attribute() {
        let node = tag(
            "div",
            [
                attr("id", "x"),
                classes("foo bar"),
                attr("class", "baz foo"),
                class_map([("qux", true), ("bar", false)]),
            ],
        );
        assert_eq!(html(&node), r#"<div id="x" class="foo baz qux"></div>"#);
    }

    #[test]
    fn test_standalone_class_values() {
        assert_eq!(html(&classes("foo bar foo")), r#"class="foo bar""#);
        assert_eq!(html(&classes("")), r#"class="""#);
        assert_eq!(
            html(&class_map([("a", true), ("b", false)])),
            r#"class="a""#
        );
    }

    #[test]
    fn test_conditional_branches() {
        let node = Node::when(true, text("a")).otherwise(text("b"));
        assert_eq!(html(&node), "a");

        let node = Node::when(false, text("a")).otherwise(text("b"));
        assert_eq!(html(&node), "b");

        let node = Node::when(false, text("a"));
        assert_eq!(html(&node), "");
    }

    #[test]
    fn test_fragment_spacing() {
        let attrs = fragment([attr("id", "x"), classes("a")]);
        assert_eq!(html(&attrs), r#"id="x" class="a""#);

        let children = fragment([text("a"), text("b")]);
        assert_eq!(html(&children), "ab");
    }

    #[test]
    fn test_full_document() {
        let root = document([tag(
            "html",
            [
                tag("head", [
                    tag("title", [text("Hello, World!")]),
                    tag("style", [text("body { background-color: #f0f0f0; }")]),
                ]),
                tag("body", [
                    tag("h1", [text("Hello, World!")]),
                    tag("p", [attr("style", "color: red;"), text("This is a paragraph.")]),
                ]),
            ],
        )]);
        let expected = "<!DOCTYPE html><html><head><title>Hello, World!</title>\
            <style>body { background-color: #f0f0f0; }</style></head>\
            <body><h1>Hello, World!</h1>\
            <p style=\"color: red;\">This is a paragraph.</p></body></html>";
        assert_eq!(html(&root), expected);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let node = tag("ul", [classes("c b a"), tag("li", [text("one")])]);
        let first = html(&node);
        let second = html(&node);
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let node = tag("p", [text("hi")]);
        let result = node.render(&mut FailingSink);
        assert!(matches!(result, Err(Error::Write(_))));
    }
}
