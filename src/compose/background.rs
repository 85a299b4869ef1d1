//! Background fills.

use log::debug;
use uuid::Uuid;

use crate::geometry::{escape_attr, fmt};
use crate::spec::BackgroundSpec;

/// A `grad_` id with a random 8-hex-digit suffix.
///
/// Unique enough that two marks inlined in one document do not share a
/// gradient definition.
pub fn gradient_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("grad_{}", &suffix[..8])
}

/// A rect covering the canvas in one color.
pub fn solid_rect(color: &str, width: f64, height: f64) -> String {
    format!(
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        fmt(width),
        fmt(height),
        escape_attr(color)
    )
}

/// Renders `background` over a `width × height` canvas.
///
/// A gradient without stops degrades to a solid rect of `fallback`.
pub fn render_background(
    background: &BackgroundSpec,
    fallback: &str,
    width: f64,
    height: f64,
) -> String {
    match background {
        BackgroundSpec::Solid { color } => solid_rect(color, width, height),
        BackgroundSpec::LinearGradient { stops, .. } if stops.is_empty() => {
            debug!("gradient has no stops, using solid {fallback}");
            solid_rect(fallback, width, height)
        }
        BackgroundSpec::LinearGradient { angle, stops } => {
            let id = gradient_id();
            let stops: String = stops
                .iter()
                .map(|stop| {
                    format!(
                        r#"<stop offset="{}%" stop-color="{}"/>"#,
                        fmt((stop.at * 100.0).round()),
                        escape_attr(&stop.color)
                    )
                })
                .collect();
            format!(
                r#"<defs><linearGradient id="{id}" gradientTransform="rotate({angle})">{stops}</linearGradient></defs><rect width="{w}" height="{h}" fill="url(#{id})"/>"#,
                angle = fmt(*angle),
                w = fmt(width),
                h = fmt(height),
            )
        }
    }
}
