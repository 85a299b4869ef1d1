//! Numeric helpers shared by every mark generator.
//!
//! All formulas here are calibrated against a 256×256 canvas and are part
//! of the rendering contract: changing one changes the output of every
//! consumer.

/// Average glyph advance in em for the supported sans fonts.
///
/// Used by [`estimate_text_width`]; there are no real font metrics.
pub const AVERAGE_EM_WIDTH: f64 = 0.56;

/// Clamps `value` into `[min, max]`.
///
/// Total: never panics. `NaN` maps to `min` and reversed bounds are
/// treated as the interval they describe.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Converts a normalized weight into a bar width in pixels.
pub fn weight_to_bar_width(weight: f64) -> f64 {
    clamp((weight * 180.0).round(), 24.0, 200.0)
}

/// Converts a relative gap into pixels.
pub fn gap_to_pixels(gap: f64) -> f64 {
    gap * 40.0
}

/// Size of the diagonal cut of angular marks for a given slant.
pub fn slant_to_cut_size(slant: f64) -> f64 {
    24.0 + slant.abs() * 2.0
}

/// Clamps a corner radius to the range legacy marks support.
pub fn clamp_radius(radius: f64) -> f64 {
    clamp(radius, 0.0, 24.0)
}

/// Estimates the rendered width of `text` in pixels.
///
/// This is an approximation based on [`AVERAGE_EM_WIDTH`], not a measured
/// value. Letter spacing is added between glyphs.
pub fn estimate_text_width(text: &str, font_px: f64, letter_spacing: f64) -> f64 {
    let glyphs = text.chars().count();
    if glyphs == 0 {
        return 0.0;
    }
    let spacing = letter_spacing * (glyphs - 1) as f64;
    (glyphs as f64 * font_px * AVERAGE_EM_WIDTH + spacing).max(0.0)
}

/// Formats a number for an SVG attribute.
///
/// Rounds to three decimals and never prints `-0`.
pub fn fmt(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escapes text content for embedding between XML tags.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a value for a double-quoted XML attribute.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_value() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_is_total() {
        assert_eq!(clamp(f64::NAN, -45.0, 45.0), -45.0);
        assert_eq!(clamp(f64::INFINITY, 0.0, 8.0), 8.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 8.0), 0.0);
        assert_eq!(clamp(20.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let samples = [-1e9, -46.0, -45.0, 0.0, 3.25, 45.0, 1e9, f64::NAN];
        for x in samples {
            let once = clamp(x, -45.0, 45.0);
            assert_eq!(clamp(once, -45.0, 45.0), once);
        }
    }

    #[test]
    fn bar_width_formula() {
        assert_eq!(weight_to_bar_width(0.12), 24.0);
        assert_eq!(weight_to_bar_width(0.5), 90.0);
        assert_eq!(weight_to_bar_width(2.0), 200.0);
    }

    #[test]
    fn legacy_unit_conversions() {
        assert_eq!(gap_to_pixels(0.2), 8.0);
        assert_eq!(slant_to_cut_size(-10.0), 44.0);
        assert_eq!(clamp_radius(30.0), 24.0);
    }

    #[test]
    fn text_width_heuristic() {
        assert_eq!(estimate_text_width("", 100.0, 4.0), 0.0);
        assert!((estimate_text_width("Acme", 100.0, 0.0) - 224.0).abs() < 1e-9);
        assert!((estimate_text_width("Acme", 100.0, 2.0) - 230.0).abs() < 1e-9);
    }

    #[test]
    fn fmt_trims_noise() {
        assert_eq!(fmt(128.0), "128");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(12.5), "12.5");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_text("A & <B>"), "A &amp; &lt;B&gt;");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
