//! The HTML5 element catalog.
//!
//! One builder per HTML5 element, container or void per HTML5 semantics.
//! Pure enumeration over [`tag`]/[`void_tag`]; all logic lives in the core.

use tagwright_core::{tag, void_tag, Node};

pub use tagwright_core::document;

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check if a tag name denotes a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

macro_rules! container_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            pub fn $name(items: impl IntoIterator<Item = Node>) -> Node {
                tag($tag, items)
            }
        )*
    };
}

macro_rules! void_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            pub fn $name(items: impl IntoIterator<Item = Node>) -> Node {
                void_tag($tag, items)
            }
        )*
    };
}

container_tags! {
    a => "a",
    abbr => "abbr",
    address => "address",
    article => "article",
    aside => "aside",
    audio => "audio",
    b => "b",
    bdi => "bdi",
    bdo => "bdo",
    blockquote => "blockquote",
    body => "body",
    button => "button",
    canvas => "canvas",
    caption => "caption",
    cite => "cite",
    code => "code",
    colgroup => "colgroup",
    data => "data",
    datalist => "datalist",
    dd => "dd",
    del => "del",
    details => "details",
    dfn => "dfn",
    dialog => "dialog",
    div => "div",
    dl => "dl",
    dt => "dt",
    em => "em",
    fieldset => "fieldset",
    figcaption => "figcaption",
    figure => "figure",
    footer => "footer",
    form => "form",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    head => "head",
    header => "header",
    html => "html",
    i => "i",
    iframe => "iframe",
    ins => "ins",
    kbd => "kbd",
    label => "label",
    legend => "legend",
    li => "li",
    main => "main",
    map => "map",
    mark => "mark",
    meter => "meter",
    nav => "nav",
    noscript => "noscript",
    object => "object",
    ol => "ol",
    optgroup => "optgroup",
    option => "option",
    output => "output",
    p => "p",
    picture => "picture",
    pre => "pre",
    progress => "progress",
    q => "q",
    rp => "rp",
    rt => "rt",
    ruby => "ruby",
    s => "s",
    samp => "samp",
    script => "script",
    section => "section",
    select => "select",
    slot => "slot",
    small => "small",
    span => "span",
    strong => "strong",
    style => "style",
    sub => "sub",
    summary => "summary",
    sup => "sup",
    table => "table",
    tbody => "tbody",
    td => "td",
    template => "template",
    textarea => "textarea",
    tfoot => "tfoot",
    th => "th",
    thead => "thead",
    time => "time",
    title => "title",
    tr => "tr",
    u => "u",
    ul => "ul",
    var => "var",
    video => "video",
}

void_tags! {
    area => "area",
    base => "base",
    br => "br",
    col => "col",
    embed => "embed",
    hr => "hr",
    img => "img",
    input => "input",
    link => "link",
    meta => "meta",
    param => "param",
    source => "source",
    track => "track",
    wbr => "wbr",
}
