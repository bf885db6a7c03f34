//! The markup-to-code generator.
//!
//! Parses an existing HTML fragment with scraper and emits Rust source text
//! that, if compiled, calls exclusively into the construction API: elements
//! become nested `tag`/`void_tag` calls, attributes become `attr` calls and
//! text nodes become `text` calls. The walk is ordinary recursive descent
//! over the externally-parsed tree; whitespace-only text and comments are
//! dropped.

use scraper::{ElementRef, Html, Node as DomNode};

use crate::tags::is_void;

/// Generate construction code for an HTML fragment.
///
/// ```rust
/// let code = tagwright::codegen::generate(r#"<p class="lead">Hi</p>"#);
/// assert!(code.contains(r#"tag("p", ["#));
/// assert!(code.contains(r#"attr("class", "lead"),"#));
/// ```
pub fn generate(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut items = String::new();
    for child in document.root_element().children() {
        match child.value() {
            DomNode::Text(content) => {
                let value: &str = &content.text;
                if !value.trim().is_empty() {
                    push_line(&mut items, 1, &format!("text({}),", quote(value)));
                }
            }
            DomNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(&mut items, element, 1);
                }
            }
            _ => {}
        }
    }
    if items.is_empty() {
        "fragment([])".to_string()
    } else {
        format!("fragment([\n{items}])")
    }
}

fn write_element(out: &mut String, element: ElementRef, depth: usize) {
    let name = element.value().name();
    let builder = if is_void(name) { "void_tag" } else { "tag" };

    let mut items = String::new();
    for (key, value) in element.value().attrs() {
        push_line(
            &mut items,
            depth + 1,
            &format!("attr({}, {}),", quote(key), quote(value)),
        );
    }
    if !is_void(name) {
        for child in element.children() {
            match child.value() {
                DomNode::Text(content) => {
                    let value: &str = &content.text;
                    if !value.trim().is_empty() {
                        push_line(&mut items, depth + 1, &format!("text({}),", quote(value)));
                    }
                }
                DomNode::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        write_element(&mut items, child_element, depth + 1);
                    }
                }
                _ => {}
            }
        }
    }

    let pad = "    ".repeat(depth);
    if items.is_empty() {
        out.push_str(&format!("{pad}{builder}({}, []),\n", quote(name)));
    } else {
        out.push_str(&format!(
            "{pad}{builder}({}, [\n{items}{pad}]),\n",
            quote(name)
        ));
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str("    ");
    }
    out.push_str(line);
    out.push('\n');
}

/// Quote `s` as a Rust string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(generate(""), "fragment([])");
        assert_eq!(generate("   \n  "), "fragment([])");
    }

    #[test]
    fn test_bare_text() {
        assert_eq!(generate("hello"), "fragment([\n    text(\"hello\"),\n])");
    }

    #[test]
    fn test_element_with_attribute_and_text() {
        let code = generate(r#"<div class="x">Hi there</div>"#);
        let expected = "fragment([\n\
                        \x20   tag(\"div\", [\n\
                        \x20       attr(\"class\", \"x\"),\n\
                        \x20       text(\"Hi there\"),\n\
                        \x20   ]),\n\
                        ])";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_nested_elements() {
        let code = generate("<ul><li>One</li><li>Two</li></ul>");
        let expected = "fragment([\n\
                        \x20   tag(\"ul\", [\n\
                        \x20       tag(\"li\", [\n\
                        \x20           text(\"One\"),\n\
                        \x20       ]),\n\
                        \x20       tag(\"li\", [\n\
                        \x20           text(\"Two\"),\n\
                        \x20       ]),\n\
                        \x20   ]),\n\
                        ])";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_void_element() {
        let code = generate(r#"<img src="x.png">"#);
        let expected = "fragment([\n\
                        \x20   void_tag(\"img\", [\n\
                        \x20       attr(\"src\", \"x.png\"),\n\
                        \x20   ]),\n\
                        ])";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_quotes_are_escaped_in_literals() {
        let code = generate(r#"<p title='say "hi"'>x</p>"#);
        assert!(code.contains(r#"attr("title", "say \"hi\""),"#));
    }

    #[test]
    fn test_comments_are_dropped() {
        let code = generate("<!-- note --><p>x</p>");
        assert!(!code.contains("note"));
        assert!(code.contains("tag(\"p\""));
    }
}
