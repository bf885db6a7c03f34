//! The common-attribute catalog.
//!
//! One builder per common HTML attribute; key-only (boolean) attributes take
//! no argument. Names that would collide with an element builder carry an
//! `_attr` suffix (`form_attr`, `style_attr`, `title_attr`, `label_attr`,
//! `cite_attr`, `data_attr`), matching how the generic fallbacks are meant
//! to be mixed with the `tags` module under glob imports.

use tagwright_core::{attr, flag, Node};

pub use tagwright_core::{class_map, classes};

macro_rules! value_attrs {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $name(value: impl Into<String>) -> Node {
                attr($key, value)
            }
        )*
    };
}

macro_rules! flag_attrs {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            pub fn $name() -> Node {
                flag($key)
            }
        )*
    };
}

value_attrs! {
    accept => "accept",
    accesskey => "accesskey",
    action => "action",
    alt => "alt",
    autocomplete => "autocomplete",
    autofocus => "autofocus",
    charset => "charset",
    cite_attr => "cite",
    class => "class",
    colspan => "colspan",
    content => "content",
    contenteditable => "contenteditable",
    coords => "coords",
    crossorigin => "crossorigin",
    datetime => "datetime",
    default => "default",
    dir => "dir",
    download => "download",
    draggable => "draggable",
    enctype => "enctype",
    for_ => "for",
    form_attr => "form",
    formaction => "formaction",
    formenctype => "formenctype",
    formmethod => "formmethod",
    formnovalidate => "formnovalidate",
    formtarget => "formtarget",
    headers => "headers",
    height => "height",
    hidden => "hidden",
    high => "high",
    href => "href",
    hreflang => "hreflang",
    http_equiv => "http-equiv",
    id => "id",
    integrity => "integrity",
    kind => "kind",
    label_attr => "label",
    lang => "lang",
    list => "list",
    low => "low",
    max => "max",
    maxlength => "maxlength",
    media => "media",
    method => "method",
    min => "min",
    minlength => "minlength",
    multiple => "multiple",
    name => "name",
    onabort => "onabort",
    onblur => "onblur",
    onchange => "onchange",
    onclick => "onclick",
    onerror => "onerror",
    onfocus => "onfocus",
    onkeydown => "onkeydown",
    onkeypress => "onkeypress",
    onkeyup => "onkeyup",
    onload => "onload",
    onmousedown => "onmousedown",
    onmouseout => "onmouseout",
    onmouseover => "onmouseover",
    onmouseup => "onmouseup",
    onreset => "onreset",
    onresize => "onresize",
    onscroll => "onscroll",
    onselect => "onselect",
    onsubmit => "onsubmit",
    onunload => "onunload",
    optimum => "optimum",
    pattern => "pattern",
    ping => "ping",
    placeholder => "placeholder",
    referrerpolicy => "referrerpolicy",
    rel => "rel",
    role => "role",
    rowspan => "rowspan",
    scope => "scope",
    shape => "shape",
    size => "size",
    sizes => "sizes",
    spellcheck => "spellcheck",
    src => "src",
    srclang => "srclang",
    srcset => "srcset",
    step => "step",
    style_attr => "style",
    tabindex => "tabindex",
    target => "target",
    title_attr => "title",
    translate => "translate",
    type_ => "type",
    usemap => "usemap",
    value => "value",
    width => "width",
}

flag_attrs! {
    checked => "checked",
    disabled => "disabled",
    novalidate => "novalidate",
    readonly => "readonly",
    required => "required",
}

/// A `data-*` attribute: `data_attr("count", "3")` renders `data-count="3"`.
pub fn data_attr(name: &str, value: impl Into<String>) -> Node {
    attr(format!("data-{name}"), value)
}

/// An `aria-*` attribute: `aria("label", "Close")` renders `aria-label="Close"`.
pub fn aria(name: &str, value: impl Into<String>) -> Node {
    attr(format!("aria-{name}"), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwright_core::{tag, void_tag};

    #[test]
    fn test_value_attribute_builders() {
        let node = tag("a", [href("https://example.com"), id("home")]);
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="https://example.com" id="home"></a>"#
        );
    }

    #[test]
    fn test_flag_attribute_builders() {
        let node = void_tag("input", [type_("checkbox"), checked()]);
        assert_eq!(node.to_html().unwrap(), r#"<input type="checkbox" checked />"#);
    }

    #[test]
    fn test_prefixed_builders() {
        let node = tag("span", [data_attr("count", "3"), aria("label", "Close")]);
        assert_eq!(
            node.to_html().unwrap(),
            r#"<span data-count="3" aria-label="Close"></span>"#
        );
    }
}
