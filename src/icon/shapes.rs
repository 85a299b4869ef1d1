//! Procedural primitive shapes.
//!
//! Each generator draws inside a `size × size` box with its origin at the
//! top-left corner. A positive stroke draws a white outline inset by the
//! stroke width so it is not clipped by the box.

use crate::geometry::{escape_attr, fmt};

/// The primitive shapes addressable as `shape:<kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    RoundedSquare,
    Circle,
    Capsule,
}

impl ShapeKind {
    /// Every shape, in picker order.
    pub const ALL: [ShapeKind; 3] = [Self::RoundedSquare, Self::Circle, Self::Capsule];

    /// Parses the `<kind>` part of a `shape:<kind>` id.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "rounded-square" => Some(Self::RoundedSquare),
            "circle" => Some(Self::Circle),
            "capsule" => Some(Self::Capsule),
            _ => None,
        }
    }

    /// The full icon id of this shape.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::RoundedSquare => "shape:rounded-square",
            Self::Circle => "shape:circle",
            Self::Capsule => "shape:capsule",
        }
    }

    /// Whether the spec's corner radius applies to this shape.
    pub fn uses_corner_radius(self) -> bool {
        matches!(self, Self::RoundedSquare)
    }

    /// Renders the shape.
    pub fn render(self, params: &ShapeParams<'_>) -> String {
        match self {
            Self::RoundedSquare => rounded_square(params),
            Self::Circle => circle(params),
            Self::Capsule => capsule(params),
        }
    }
}

/// Inputs shared by every shape generator.
#[derive(Debug, Clone, Copy)]
pub struct ShapeParams<'a> {
    /// Side of the square box in pixels.
    pub size: f64,
    pub color: &'a str,
    pub corner_radius: f64,
    pub stroke: f64,
}

impl ShapeParams<'_> {
    fn inset(&self) -> f64 {
        self.stroke.max(0.0)
    }

    fn stroke_attrs(&self) -> String {
        if self.stroke > 0.0 {
            format!(r#" stroke="white" stroke-width="{}""#, fmt(self.stroke))
        } else {
            String::new()
        }
    }
}

/// A square with rounded corners filling the box.
pub fn rounded_square(params: &ShapeParams<'_>) -> String {
    let pad = params.inset();
    let side = (params.size - pad * 2.0).max(0.0);
    let r = params.corner_radius.max(0.0).min(params.size.max(0.0) / 2.0);
    format!(
        r#"<g><rect x="{x}" y="{x}" width="{s}" height="{s}" rx="{r}" ry="{r}" fill="{fill}"{stroke}/></g>"#,
        x = fmt(pad),
        s = fmt(side),
        r = fmt(r),
        fill = escape_attr(params.color),
        stroke = params.stroke_attrs(),
    )
}

/// A circle inscribed in the box.
pub fn circle(params: &ShapeParams<'_>) -> String {
    let pad = params.inset();
    let center = params.size.max(0.0) / 2.0;
    let r = (center - pad).max(0.0);
    format!(
        r#"<g><circle cx="{c}" cy="{c}" r="{r}" fill="{fill}"{stroke}/></g>"#,
        c = fmt(center),
        r = fmt(r),
        fill = escape_attr(params.color),
        stroke = params.stroke_attrs(),
    )
}

/// A horizontal pill, 75% of the box wide and 35% tall.
pub fn capsule(params: &ShapeParams<'_>) -> String {
    let pad = params.inset();
    let size = params.size.max(0.0);
    let width = size * 0.75;
    let height = size * 0.35;
    let x = (size - width) / 2.0 + pad;
    let y = (size - height) / 2.0 + pad;
    let r = height / 2.0;
    format!(
        r#"<g><rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="{fill}"{stroke}/></g>"#,
        x = fmt(x),
        y = fmt(y),
        w = fmt((width - pad * 2.0).max(0.0)),
        h = fmt((height - pad * 2.0).max(0.0)),
        r = fmt(r),
        fill = escape_attr(params.color),
        stroke = params.stroke_attrs(),
    )
}
