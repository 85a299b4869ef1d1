//! Allowlist sanitizer for icon definitions from outside the crate.
//!
//! Raw markup is parsed as XML and rebuilt from scratch: only the drawing
//! elements in [`ALLOWED_ELEMENTS`] and the presentation attributes in
//! [`ALLOWED_ATTRIBUTES`] survive, so whatever is stored is exactly what was
//! checked. Anything else (scripts in any namespace, links, styles, text,
//! references to other documents) rejects the whole definition.
//!
//! ```
//! use brandmark_renderer::icon::sanitize::sanitize_markup;
//!
//! let clean = sanitize_markup(r#"<path d="M2 12h20" stroke-width="2"/>"#).unwrap();
//! assert_eq!(clean, r#"<path d="M2 12h20" stroke-width="2"/>"#);
//!
//! assert!(sanitize_markup(r#"<a href="&#106;avascript:alert(1)"><path d="M0 0"/></a>"#).is_err());
//! ```

use roxmltree::{Document, Node};
use thiserror::Error;

use super::{IconDefinition, IconPath};
use crate::geometry::escape_attr;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const ALLOWED_ELEMENTS: [&str; 9] = [
    "svg", "g", "path", "circle", "rect", "line", "polyline", "polygon", "ellipse",
];

pub const ALLOWED_ATTRIBUTES: [&str; 30] = [
    "viewBox",
    "width",
    "height",
    "fill",
    "fill-rule",
    "fill-opacity",
    "clip-rule",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "opacity",
    "transform",
    "d",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "points",
];

/// Value fragments that load or run something when they appear anywhere.
const FORBIDDEN_VALUES: [&str; 4] = ["url(", "javascript:", "vbscript:", "data:"];

/// Why a piece of markup was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("markup is not well-formed XML: {0}")]
    Malformed(String),

    #[error("element `{0}` is not allowed")]
    Element(String),

    #[error("attribute `{0}` is not allowed")]
    Attribute(String),

    #[error("attribute `{0}` references external content")]
    Reference(String),
}

/// Parses `raw` and rebuilds it from allowed elements and attributes.
///
/// `raw` is either a complete `<svg>` document or the inner markup of one.
/// The result is the rebuilt inner markup, without a wrapper and without
/// text or comments.
pub fn sanitize_markup(raw: &str) -> Result<String, MarkupError> {
    let raw = raw.trim();
    let wrapped;
    let source = if raw.starts_with("<svg") || raw.starts_with("<?xml") {
        raw
    } else {
        wrapped = format!(r#"<svg xmlns="{SVG_NS}">{raw}</svg>"#);
        wrapped.as_str()
    };

    let doc = Document::parse(source).map_err(|e| MarkupError::Malformed(e.to_string()))?;
    // The wrapper is dropped, so only its name matters.
    let root = doc.root_element();
    check_tag(root)?;

    let mut out = String::new();
    for child in root.children().filter(Node::is_element) {
        write_element(child, &mut out)?;
    }
    Ok(out)
}

/// Returns true if [`sanitize_markup`] accepts `raw`.
pub fn is_safe_markup(raw: &str) -> bool {
    sanitize_markup(raw).is_ok()
}

/// Checks a whole definition, returning it with its raw markup rebuilt.
pub fn sanitize_definition(def: IconDefinition) -> Result<IconDefinition, MarkupError> {
    for path in &def.paths {
        check_path(path)?;
    }
    check_value("viewBox", &def.view_box)?;
    let raw = def.raw.as_deref().map(sanitize_markup).transpose()?;
    Ok(IconDefinition { raw, ..def })
}

fn check_path(path: &IconPath) -> Result<(), MarkupError> {
    check_value("d", &path.d)?;
    let paints = [("fill", &path.fill), ("stroke", &path.stroke), ("fill-rule", &path.fill_rule)];
    for (name, value) in paints {
        if let Some(value) = value {
            check_value(name, value)?;
        }
    }
    Ok(())
}

fn check_tag(node: Node<'_, '_>) -> Result<(), MarkupError> {
    let tag = node.tag_name();
    let in_svg = matches!(tag.namespace(), None | Some(SVG_NS));
    if !in_svg || !ALLOWED_ELEMENTS.contains(&tag.name()) {
        return Err(MarkupError::Element(tag.name().to_string()));
    }
    Ok(())
}

fn check_element(node: Node<'_, '_>) -> Result<(), MarkupError> {
    check_tag(node)?;
    for attr in node.attributes() {
        if attr.namespace().is_some() || !ALLOWED_ATTRIBUTES.contains(&attr.name()) {
            return Err(MarkupError::Attribute(attr.name().to_string()));
        }
        check_value(attr.name(), attr.value())?;
    }
    Ok(())
}

/// Rejects values that reference or execute something.
///
/// Entities are already decoded by the parser; embedded whitespace and
/// case are ignored the way URL parsers ignore them.
fn check_value(name: &str, value: &str) -> Result<(), MarkupError> {
    let folded: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    if FORBIDDEN_VALUES.iter().any(|needle| folded.contains(needle)) {
        return Err(MarkupError::Reference(name.to_string()));
    }
    Ok(())
}

fn write_element(node: Node<'_, '_>, out: &mut String) -> Result<(), MarkupError> {
    check_element(node)?;
    let name = node.tag_name().name();
    out.push('<');
    out.push_str(name);
    for attr in node.attributes() {
        out.push_str(&format!(r#" {}="{}""#, attr.name(), escape_attr(attr.value())));
    }

    let mut children = node.children().filter(Node::is_element).peekable();
    if children.peek().is_none() {
        out.push_str("/>");
        return Ok(());
    }
    out.push('>');
    for child in children {
        write_element(child, out)?;
    }
    out.push_str(&format!("</{name}>"));
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(raw: &str) -> MarkupError {
        sanitize_markup(raw).unwrap_err()
    }

    #[test]
    fn drawing_markup_is_rebuilt_verbatim() {
        let raw = r#"<g transform="rotate(45 12 12)"><path d="M0 0L24 24"/><circle cx="1" cy="1" r="1"/></g>"#;
        assert_eq!(sanitize_markup(raw).unwrap(), raw);
        assert!(is_safe_markup(r#"<polygon points="1,2 3,4"/>"#));
    }

    #[test]
    fn wrapper_text_and_comments_are_dropped() {
        let raw = r#"<svg xmlns="http://www.w3.org/2000/svg" class="lucide" width="24"><!-- x --><path d="M1 1"/>text</svg>"#;
        assert_eq!(sanitize_markup(raw).unwrap(), r#"<path d="M1 1"/>"#);
    }

    #[test]
    fn scripts_are_rejected_in_any_namespace() {
        assert_eq!(rejected("<script>alert(1)</script>"), MarkupError::Element("script".into()));
        assert_eq!(
            rejected(r#"<g xmlns:s="http://www.w3.org/2000/svg"><s:script>alert(1)</s:script></g>"#),
            MarkupError::Element("script".into())
        );
        assert_eq!(
            rejected(r#"<h:path xmlns:h="http://www.w3.org/1999/xhtml" d="M0 0"/>"#),
            MarkupError::Element("path".into())
        );
    }

    #[test]
    fn unknown_elements_are_rejected() {
        for raw in [
            "<foreignObject/>",
            "<image/>",
            "<text>hi</text>",
            r##"<a href="#x"><path d="M0 0"/></a>"##,
            r##"<use href="#p"/>"##,
        ] {
            assert!(matches!(rejected(raw), MarkupError::Element(_)), "{raw}");
        }
    }

    #[test]
    fn entity_encoded_schemes_are_rejected() {
        assert!(!is_safe_markup(r#"<a href="&#106;avascript:alert(1)"><path d="M0 0"/></a>"#));
        assert_eq!(
            rejected(r#"<path d="M0 0" fill="&#117;rl(https://evil.example/p)"/>"#),
            MarkupError::Reference("fill".into())
        );
        assert_eq!(
            rejected(r#"<path d="M0 0" stroke="U R L (#x)"/>"#),
            MarkupError::Reference("stroke".into())
        );
    }

    #[test]
    fn styles_handlers_and_external_links_are_rejected() {
        assert_eq!(
            rejected(r#"<path d="M0 0" style="fill:url(https://evil.example/x.svg#p)"/>"#),
            MarkupError::Attribute("style".into())
        );
        assert_eq!(
            rejected(r#"<g onclick = "x()"/>"#),
            MarkupError::Attribute("onclick".into())
        );
        assert!(!is_safe_markup(r#"<use href="https://evil.example/sprite.svg#icon"/>"#));
        assert!(matches!(
            rejected(
                r#"<g xmlns:xlink="http://www.w3.org/1999/xlink" xlink:href="https://evil.example/"/>"#
            ),
            MarkupError::Attribute(_)
        ));
    }

    #[test]
    fn comment_tricks_never_reach_output() {
        // HTML closes `<!-->` at once; XML reads it as one comment.
        let raw = r#"<!--><script>alert(1)</script>--><path d="M0 0"/>"#;
        assert_eq!(sanitize_markup(raw).unwrap(), r#"<path d="M0 0"/>"#);
    }

    #[test]
    fn malformed_and_dtd_markup_is_rejected() {
        assert!(matches!(rejected("<g><path></g>"), MarkupError::Malformed(_)));
        let dtd = r#"<!DOCTYPE svg [<!ENTITY x "y">]><svg xmlns="http://www.w3.org/2000/svg"/>"#;
        assert!(!is_safe_markup(dtd));
    }

    #[test]
    fn path_paints_are_checked() {
        let mut path = IconPath::filled("M0 0h1v1z");
        let def = IconDefinition::from_paths("0 0 24 24", vec![path.clone()]);
        assert_eq!(sanitize_definition(def.clone()).unwrap(), def);

        path.fill = Some("url(https://evil.example/p)".into());
        let def = IconDefinition::from_paths("0 0 24 24", vec![path]);
        assert_eq!(sanitize_definition(def), Err(MarkupError::Reference("fill".into())));
    }

    #[test]
    fn definitions_store_rebuilt_markup() {
        let def = IconDefinition::from_raw("0 0 24 24", "<svg><!-- c --><path d='M1 1'/></svg>");
        let clean = sanitize_definition(def).unwrap();
        assert_eq!(clean.raw.as_deref(), Some(r#"<path d="M1 1"/>"#));
    }
}
