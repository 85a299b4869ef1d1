//! Two vertical bars with diagonal cuts on opposite corners.

use super::LegacyParams;
use crate::geometry::{fmt, gap_to_pixels, slant_to_cut_size, weight_to_bar_width};

const BAR_HEIGHT: f64 = 140.0;

fn points(corners: &[(f64, f64)]) -> String {
    corners
        .iter()
        .map(|(x, y)| format!("{},{}", fmt(*x), fmt(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(params: &LegacyParams, color: &str) -> String {
    let bar = weight_to_bar_width(params.weight);
    let gap = gap_to_pixels(params.gap);
    let cut = slant_to_cut_size(params.slant);

    let start = (256.0 - (bar * 2.0 + gap)) / 2.0;
    let x1 = start;
    let x2 = start + bar + gap;
    let top = (256.0 - BAR_HEIGHT) / 2.0;
    let bottom = top + BAR_HEIGHT;

    // First bar is cut top-right, second bottom-left.
    let first = points(&[
        (x1, top),
        (x1 + bar - cut, top),
        (x1 + bar, top + cut),
        (x1 + bar, bottom),
        (x1, bottom),
    ]);
    let second = points(&[
        (x2, top),
        (x2 + bar, top),
        (x2 + bar, bottom),
        (x2 + cut, bottom),
        (x2, bottom - cut),
    ]);

    format!(
        r#"<polygon points="{first}" fill="{color}"/><polygon points="{second}" fill="{color}" opacity="0.85"/>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_centered() {
        let params = LegacyParams {
            weight: 0.2,
            slant: 0.0,
            radius: 0.0,
            gap: 0.0,
        };
        let svg = render(&params, "#000");
        // 36px bars, no gap: 92..128 and 128..164
        assert!(svg.contains(r#"points="92,58 104,58 128,82 128,198 92,198""#));
        assert!(svg.contains(r#"points="128,58 164,58 164,198 152,198 128,174""#));
    }
}
