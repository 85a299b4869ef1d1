//! One strong rounded bar with a smaller offset bar below it.

use super::LegacyParams;
use crate::geometry::{clamp_radius, fmt, gap_to_pixels, weight_to_bar_width};

const MAIN_HEIGHT: f64 = 120.0;
const SECONDARY_HEIGHT: f64 = 60.0;

pub fn render(params: &LegacyParams, color: &str) -> String {
    let bar = weight_to_bar_width(params.weight);
    let radius = fmt(clamp_radius(params.radius));
    let gap = gap_to_pixels(params.gap);

    let main_x = (256.0 - bar) / 2.0;
    let main_y = (256.0 - MAIN_HEIGHT) / 2.0;
    let secondary_width = (bar * 0.6).max(16.0);
    let secondary_x = main_x + bar * 0.3;
    let secondary_y = main_y + MAIN_HEIGHT + gap;

    format!(
        concat!(
            r#"<rect x="{mx}" y="{my}" width="{mw}" height="{mh}" rx="{r}" ry="{r}" fill="{c}"/>"#,
            r#"<rect x="{sx}" y="{sy}" width="{sw}" height="{sh}" rx="{r}" ry="{r}" fill="{c}" opacity="0.7"/>"#,
        ),
        mx = fmt(main_x),
        my = fmt(main_y),
        mw = fmt(bar),
        mh = fmt(MAIN_HEIGHT),
        sx = fmt(secondary_x),
        sy = fmt(secondary_y),
        sw = fmt(secondary_width),
        sh = fmt(SECONDARY_HEIGHT),
        r = radius,
        c = color,
    )
}
