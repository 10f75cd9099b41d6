//! HTML tag names and the tag categories tree construction cares about

pub const HTML: &str = "html";
pub const TABLE: &str = "table";
pub const CAPTION: &str = "caption";
pub const THEAD: &str = "thead";
pub const TBODY: &str = "tbody";
pub const TFOOT: &str = "tfoot";
pub const TR: &str = "tr";
pub const TEMPLATE: &str = "template";

/// The "special" category of the HTML tree construction algorithm
const SPECIAL: &[&str] = &[
    "address", "applet", "area", "article", "aside", "base", "basefont", "bgsound",
    "blockquote", "body", "br", "button", "caption", "center", "col", "colgroup", "dd",
    "details", "dir", "div", "dl", "dt", "embed", "fieldset", "figcaption", "figure",
    "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head",
    "header", "hgroup", "hr", "html", "iframe", "img", "input", "keygen", "li", "link",
    "listing", "main", "marquee", "menu", "meta", "nav", "noembed", "noframes", "noscript",
    "object", "ol", "p", "param", "plaintext", "pre", "script", "search", "section",
    "select", "source", "style", "summary", "table", "tbody", "td", "template", "textarea",
    "tfoot", "th", "thead", "title", "tr", "track", "ul", "wbr", "xmp",
];

/// Check if a (lowercase) tag name is in the special category
pub fn is_special(tag: &str) -> bool {
    SPECIAL.contains(&tag)
}

/// Elements that stop "clear the stack back to a table body context"
pub fn is_table_section_scope(tag: &str) -> bool {
    matches!(tag, TBODY | THEAD | TFOOT | TEMPLATE | HTML)
}

/// thead, tbody or tfoot
pub fn is_table_section(tag: &str) -> bool {
    matches!(tag, THEAD | TBODY | TFOOT)
}
