//! Two rounded strips rotated by the slant.

use super::LegacyParams;
use crate::geometry::{clamp, clamp_radius, fmt, gap_to_pixels, weight_to_bar_width};

const STRIP_HEIGHT: f64 = 40.0;
const CENTER: f64 = 128.0;

pub fn render(params: &LegacyParams, color: &str) -> String {
    let bar = weight_to_bar_width(params.weight);
    let radius = fmt(clamp_radius(params.radius));
    let gap = gap_to_pixels(params.gap);
    let slant = clamp(params.slant, -20.0, 20.0);

    let length = bar + 20.0;
    let x = CENTER - length / 2.0;
    let y1 = CENTER - STRIP_HEIGHT / 2.0 - gap / 2.0;
    let y2 = CENTER + STRIP_HEIGHT / 2.0 + gap / 2.0;

    format!(
        concat!(
            r#"<g transform="rotate({slant} {c} {c})">"#,
            r#"<rect x="{x1}" y="{y1}" width="{w1}" height="{h}" rx="{r}" ry="{r}" fill="{color}"/>"#,
            r#"<rect x="{x2}" y="{y2}" width="{w2}" height="{h}" rx="{r}" ry="{r}" fill="{color}" opacity="0.75"/>"#,
            "</g>"
        ),
        slant = fmt(slant),
        c = fmt(CENTER),
        x1 = fmt(x),
        y1 = fmt(y1),
        w1 = fmt(length),
        x2 = fmt(x + gap),
        y2 = fmt(y2),
        w2 = fmt(length * 0.8),
        h = fmt(STRIP_HEIGHT),
        r = radius,
        color = color,
    )
}
