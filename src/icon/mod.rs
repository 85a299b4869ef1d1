//! Icon and shape resolution.
//!
//! [`resolve`] turns an icon id into renderable markup. Resolution is
//! total: an empty id, an unknown namespace or a definition with nothing
//! to draw all yield [`RenderableContent::Empty`] instead of an error, so a
//! live editor never shows a broken state mid-edit.
//!
//! Icon ids come in three forms:
//! - `""`: no icon; the background still renders.
//! - `shape:<kind>`: a procedural [`ShapeKind`]. Unknown kinds fall back to
//!   a rounded square.
//! - `<namespace>:<key>`: a definition looked up in an [`IconCatalog`].

pub mod builtin;
pub mod catalog;
pub mod sanitize;
pub mod shapes;

pub use catalog::{
    ExternalIconSet, FileIconSource, IconCatalog, IconSet, IconSource, StaticIconSource,
};
pub use sanitize::{is_safe_markup, sanitize_definition, sanitize_markup, MarkupError};
pub use shapes::{ShapeKind, ShapeParams};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{escape_attr, fmt};

/// Sentinel paint value replaced by the brand's primary color.
pub const CURRENT_COLOR: &str = "currentColor";

/// Native width assumed when a viewBox cannot be parsed.
const DEFAULT_VIEWBOX_WIDTH: f64 = 24.0;

/// Stroke width of outline icons, in the icon's own units.
const OUTLINE_STROKE_WIDTH: f64 = 2.0;

// ============================================================================
// IconDefinition
// ============================================================================

/// One path of a path-based icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconPath {
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_rule: Option<String>,
}

impl IconPath {
    /// A path filled with the brand color.
    pub fn filled(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            fill: Some(CURRENT_COLOR.to_string()),
            stroke: None,
            stroke_width: None,
            fill_rule: None,
        }
    }

    /// A path stroked with the brand color.
    pub fn stroked(d: impl Into<String>, width: f64) -> Self {
        Self {
            d: d.into(),
            fill: None,
            stroke: Some(CURRENT_COLOR.to_string()),
            stroke_width: Some(width),
            fill_rule: None,
        }
    }
}

/// A vector icon: either explicit paths or pre-extracted inner markup.
///
/// Path icons may be filled; raw icons always render as outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    #[serde(default = "default_view_box")]
    pub view_box: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<IconPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

fn default_view_box() -> String {
    "0 0 24 24".to_string()
}

impl IconDefinition {
    /// Creates a path-based definition.
    pub fn from_paths(view_box: impl Into<String>, paths: Vec<IconPath>) -> Self {
        Self {
            view_box: view_box.into(),
            paths,
            raw: None,
        }
    }

    /// Creates a definition from inner SVG markup.
    pub fn from_raw(view_box: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            view_box: view_box.into(),
            paths: Vec::new(),
            raw: Some(raw.into()),
        }
    }

    /// Width component of the viewBox, or 24 when it is unusable.
    pub fn view_box_width(&self) -> f64 {
        self.view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .nth(2)
            .and_then(|w| w.parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_VIEWBOX_WIDTH)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Markup produced by [`resolve`], tagged by how it was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderableContent {
    /// Nothing to draw.
    Empty,
    /// A procedural shape, already offset by the padding.
    Shape(String),
    /// Path icon scaled into the padded box.
    Paths(String),
    /// Raw icon drawn as a non-scaling outline.
    Outline(String),
}

impl RenderableContent {
    /// The markup, empty for [`RenderableContent::Empty`].
    pub fn markup(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Shape(m) | Self::Paths(m) | Self::Outline(m) => m,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Geometry and paint used while resolving an icon.
#[derive(Debug, Clone, Copy)]
pub struct ResolveParams<'a> {
    /// Side of the square canvas.
    pub size: f64,
    /// Inset on every side of the canvas.
    pub padding: f64,
    pub color: &'a str,
    pub corner_radius: f64,
    pub stroke: f64,
}

impl ResolveParams<'_> {
    fn inner_size(&self) -> f64 {
        (self.size - self.padding * 2.0).max(0.0)
    }
}

/// Resolves `icon_id` against `catalog`. Never fails.
pub fn resolve(
    catalog: &IconCatalog,
    icon_id: &str,
    params: &ResolveParams<'_>,
) -> RenderableContent {
    let id = icon_id.trim();
    if id.is_empty() {
        return RenderableContent::Empty;
    }

    if let Some(kind) = id.strip_prefix("shape:") {
        let shape = ShapeKind::parse(kind).unwrap_or_else(|| {
            debug!("unknown shape `{kind}`, using rounded-square");
            ShapeKind::RoundedSquare
        });
        let markup = shape.render(&ShapeParams {
            size: params.inner_size(),
            color: params.color,
            corner_radius: if shape.uses_corner_radius() {
                params.corner_radius
            } else {
                0.0
            },
            stroke: params.stroke,
        });
        let offset = fmt(params.padding);
        return RenderableContent::Shape(format!(
            r#"<g transform="translate({offset}, {offset})">{markup}</g>"#
        ));
    }

    match catalog.get(id) {
        Some(def) => render_definition(def, params),
        None => {
            debug!("icon `{id}` not found in catalog");
            RenderableContent::Empty
        }
    }
}

/// Renders a definition into the padded box described by `params`.
pub fn render_definition(def: &IconDefinition, params: &ResolveParams<'_>) -> RenderableContent {
    let inner = params.inner_size();
    if inner <= 0.0 {
        return RenderableContent::Empty;
    }
    let factor = inner / def.view_box_width();
    let shift = fmt(params.padding / factor);
    let transform = format!("scale({}) translate({shift}, {shift})", fmt_scale(factor));

    if !def.paths.is_empty() {
        let paths: String = def.paths.iter().map(|p| render_path(p, params.color)).collect();
        return RenderableContent::Paths(format!(r#"<g transform="{transform}">{paths}</g>"#));
    }

    match def.raw.as_deref().map(strip_svg_wrapper) {
        Some(inner) if !inner.is_empty() => RenderableContent::Outline(format!(
            r#"<g transform="{transform}" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke">{inner}</g>"#,
            color = escape_attr(params.color),
            width = fmt(OUTLINE_STROKE_WIDTH),
        )),
        _ => RenderableContent::Empty,
    }
}

/// Scale factors keep more precision than coordinates.
fn fmt_scale(factor: f64) -> String {
    let rounded = (factor * 1_000_000.0).round() / 1_000_000.0;
    rounded.to_string()
}

fn paint(value: &str, color: &str) -> String {
    if value == CURRENT_COLOR {
        escape_attr(color)
    } else {
        escape_attr(value)
    }
}

fn render_path(path: &IconPath, color: &str) -> String {
    let mut out = format!(r#"<path d="{}""#, escape_attr(&path.d));
    match &path.fill {
        Some(fill) => out.push_str(&format!(r#" fill="{}""#, paint(fill, color))),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &path.stroke {
        out.push_str(&format!(r#" stroke="{}""#, paint(stroke, color)));
    }
    if let Some(width) = path.stroke_width {
        out.push_str(&format!(r#" stroke-width="{}""#, fmt(width)));
    }
    if let Some(rule) = &path.fill_rule {
        out.push_str(&format!(r#" fill-rule="{}""#, escape_attr(rule)));
    }
    out.push_str("/>");
    out
}

// ============================================================================
// Raw Markup
// ============================================================================

/// Removes an outer `<svg ...>` / `</svg>` wrapper if one is present.
pub fn strip_svg_wrapper(raw: &str) -> &str {
    let mut body = raw.trim();
    if body.to_ascii_lowercase().starts_with("<svg")
        && let Some(end) = body.find('>')
    {
        body = &body[end + 1..];
    }
    let trimmed = body.trim_end();
    if trimmed.to_ascii_lowercase().ends_with("</svg>") {
        body = &trimmed[..trimmed.len() - "</svg>".len()];
    }
    body.trim()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ResolveParams<'static> {
        ResolveParams {
            size: 256.0,
            padding: 16.0,
            color: "#6C5CE7",
            corner_radius: 16.0,
            stroke: 0.0,
        }
    }

    #[test]
    fn empty_id_is_empty() {
        let catalog = IconCatalog::new();
        assert_eq!(resolve(&catalog, "", &params()), RenderableContent::Empty);
        assert_eq!(resolve(&catalog, "   ", &params()), RenderableContent::Empty);
    }

    #[test]
    fn resolve_is_total() {
        let catalog = IconCatalog::new();
        let inputs = [
            "unknown:thing",
            ":",
            "shape:",
            "lucide:",
            "no-namespace",
            "shape:circle:extra",
            "\u{0}\u{ffff}",
            "<svg>",
        ];
        for id in inputs {
            let _ = resolve(&catalog, id, &params());
        }
        assert!(resolve(&catalog, "unknown:thing", &params()).is_empty());
    }

    #[test]
    fn shapes_are_offset_by_padding() {
        let catalog = IconCatalog::new();
        let content = resolve(&catalog, "shape:circle", &params());
        let RenderableContent::Shape(markup) = content else {
            panic!("expected shape");
        };
        assert!(markup.starts_with(r#"<g transform="translate(16, 16)">"#));
        assert!(markup.contains(r#"<circle cx="112" cy="112" r="112""#));
    }

    #[test]
    fn unknown_shape_falls_back_to_rounded_square() {
        let catalog = IconCatalog::new();
        let markup = resolve(&catalog, "shape:hexagon", &params());
        assert!(markup.markup().contains(r#"rx="16""#));
    }

    #[test]
    fn corner_radius_only_for_rounded_square() {
        let catalog = IconCatalog::new();
        let capsule = resolve(&catalog, "shape:capsule", &params());
        // Capsule radius comes from its height, not the spec knob.
        assert!(capsule.markup().contains(r#"rx="39.2""#));
    }

    #[test]
    fn path_icons_substitute_current_color() {
        let catalog = IconCatalog::new();
        let content = resolve(&catalog, "lucide:bolt", &params());
        let RenderableContent::Paths(markup) = content else {
            panic!("expected paths");
        };
        assert!(markup.contains(r##"fill="#6C5CE7""##));
        assert!(!markup.contains(CURRENT_COLOR));
        // (256 - 32) / 24 and 16 / factor
        assert!(markup.starts_with(r#"<g transform="scale(9.333333) translate(1.714, 1.714)">"#));
    }

    #[test]
    fn stroked_paths_get_no_fill() {
        let catalog = IconCatalog::new();
        let markup = resolve(&catalog, "lucide:sparkles", &params());
        assert!(markup.markup().contains(r##"fill="none" stroke="#6C5CE7" stroke-width="2""##));
    }

    #[test]
    fn raw_icons_render_as_outline() {
        let def = IconDefinition::from_raw(
            "0 0 24 24",
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M1 1h4"/></svg>"#,
        );
        let content = render_definition(&def, &params());
        let RenderableContent::Outline(markup) = content else {
            panic!("expected outline");
        };
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r##"stroke="#6C5CE7""##));
        assert!(markup.contains(r#"vector-effect="non-scaling-stroke""#));
        assert!(markup.contains(r#"<path d="M1 1h4"/>"#));
        assert!(!markup.contains("<svg"));
    }

    #[test]
    fn definition_without_content_is_empty() {
        let def = IconDefinition::from_paths("0 0 24 24", Vec::new());
        assert!(render_definition(&def, &params()).is_empty());

        let blank = IconDefinition::from_raw("0 0 24 24", "<svg></svg>");
        assert!(render_definition(&blank, &params()).is_empty());
    }

    #[test]
    fn padding_consuming_canvas_is_empty() {
        let def = IconDefinition::from_paths("0 0 24 24", vec![IconPath::filled("M0 0h1")]);
        let tight = ResolveParams {
            size: 20.0,
            padding: 10.0,
            ..params()
        };
        assert!(render_definition(&def, &tight).is_empty());
    }

    #[test]
    fn view_box_width_falls_back() {
        let mut def = IconDefinition::from_paths("0 0 48 48", Vec::new());
        assert_eq!(def.view_box_width(), 48.0);
        def.view_box = "0,0,32,32".into();
        assert_eq!(def.view_box_width(), 32.0);
        def.view_box = "garbage".into();
        assert_eq!(def.view_box_width(), 24.0);
        def.view_box = "0 0 -5 10".into();
        assert_eq!(def.view_box_width(), 24.0);
    }

    #[test]
    fn strip_wrapper_variants() {
        assert_eq!(strip_svg_wrapper("<path d=\"M0 0\"/>"), "<path d=\"M0 0\"/>");
        assert_eq!(strip_svg_wrapper("<SVG width=\"24\"><g/></SVG>\n"), "<g/>");
        // only an outer wrapper is removed
        assert_eq!(
            strip_svg_wrapper("<g><svg><path/></svg></g>"),
            "<g><svg><path/></svg></g>"
        );
    }

    #[test]
    fn definition_json_matches_subset_format() {
        let def: IconDefinition =
            serde_json::from_str(r#"{"viewBox":"0 0 24 24","paths":[{"d":"M0 0","strokeWidth":1.5}]}"#)
                .unwrap();
        assert_eq!(def.paths[0].stroke_width, Some(1.5));
        assert!(def.raw.is_none());
    }
}
