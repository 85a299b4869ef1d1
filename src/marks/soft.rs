//! Extra-rounded bars with a small accent dot above.

use super::LegacyParams;
use crate::geometry::{clamp, clamp_radius, fmt, gap_to_pixels, weight_to_bar_width};

const MAIN_HEIGHT: f64 = 100.0;
const SECONDARY_HEIGHT: f64 = 80.0;
const ACCENT_SIZE: f64 = 24.0;

pub fn render(params: &LegacyParams, color: &str) -> String {
    let bar = weight_to_bar_width(params.weight);
    let radius = clamp(clamp_radius(params.radius) + 8.0, 8.0, 32.0);
    let gap = gap_to_pixels(params.gap);

    let main_x = (256.0 - bar) / 2.0;
    let main_y = (256.0 - MAIN_HEIGHT) / 2.0 - gap * 0.5;
    let secondary_width = (bar * 0.7).max(20.0);
    let secondary_x = main_x - bar * 0.2;
    let secondary_y = main_y + MAIN_HEIGHT + gap * 1.5;
    let accent_x = main_x + bar / 2.0 + bar * 0.4;
    let accent_y = main_y - gap - ACCENT_SIZE / 2.0;

    format!(
        concat!(
            r#"<rect x="{mx}" y="{my}" width="{mw}" height="{mh}" rx="{r}" ry="{r}" fill="{c}"/>"#,
            r#"<rect x="{sx}" y="{sy}" width="{sw}" height="{sh}" rx="{sr}" ry="{sr}" fill="{c}" opacity="0.65"/>"#,
            r#"<circle cx="{ax}" cy="{ay}" r="{ar}" fill="{c}" opacity="0.4"/>"#,
        ),
        mx = fmt(main_x),
        my = fmt(main_y),
        mw = fmt(bar),
        mh = fmt(MAIN_HEIGHT),
        r = fmt(radius),
        sx = fmt(secondary_x),
        sy = fmt(secondary_y),
        sw = fmt(secondary_width),
        sh = fmt(SECONDARY_HEIGHT),
        sr = fmt(radius * 0.8),
        ax = fmt(accent_x),
        ay = fmt(accent_y),
        ar = fmt(ACCENT_SIZE / 2.0),
        c = color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_softened() {
        let params = LegacyParams {
            radius: 0.0,
            ..LegacyParams::default()
        };
        assert!(render(&params, "#000").contains(r#"rx="8" ry="8""#));

        let params = LegacyParams {
            radius: 24.0,
            ..LegacyParams::default()
        };
        let svg = render(&params, "#000");
        assert!(svg.contains(r#"rx="32" ry="32""#));
        assert!(svg.contains(r#"rx="25.6""#));
    }
}
