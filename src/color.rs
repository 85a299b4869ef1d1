//! Hex color parsing and luminance helpers.

use palette::Srgb;

/// Parses `#rgb` or `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(color: &str) -> Option<Srgb<u8>> {
    let trimmed = color.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    digits.parse::<Srgb<u8>>().ok()
}

/// Returns true if `color` is a hex color this crate can render.
pub fn is_hex_color(color: &str) -> bool {
    parse_hex(color).is_some()
}

/// Formats a color as uppercase `#RRGGBB`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Perceived brightness in `0.0..=1.0` using Rec. 709 weights on the
/// encoded channels.
pub fn luminance(color: &str) -> Option<f32> {
    let rgb = parse_hex(color)?;
    let r = rgb.red as f32;
    let g = rgb.green as f32;
    let b = rgb.blue as f32;
    Some((0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0)
}

/// Stroke color of the keyline drawn around light square frames.
pub const KEYLINE_COLOR: &str = "#D1D5DB";

/// Very light frame backgrounds need a thin keyline so a light mark does
/// not dissolve into the page.
pub fn needs_keyline(background: &str) -> bool {
    luminance(background).is_some_and(|l| l > 0.86)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let red = parse_hex("#FF0000").unwrap();
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));

        let white = parse_hex("fff").unwrap();
        assert_eq!((white.red, white.green, white.blue), (255, 255, 255));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(parse_hex("red").is_none());
        assert!(parse_hex("#12345").is_none());
        assert!(parse_hex("#GGGGGG").is_none());
        assert!(parse_hex("").is_none());
    }

    #[test]
    fn formats_uppercase() {
        assert_eq!(to_hex(parse_hex("#0a0b0c").unwrap()), "#0A0B0C");
    }

    #[test]
    fn keyline_only_for_light_backgrounds() {
        assert!(needs_keyline("#FFFFFF"));
        assert!(!needs_keyline("#000000"));
        assert!(!needs_keyline("#6C5CE7"));
        assert!(!needs_keyline("not-a-color"));
    }
}
