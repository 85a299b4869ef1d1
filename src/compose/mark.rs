//! Square marks: icon, shape or monogram over the background.

use super::background::render_background;
use super::{sanitize_size, Artwork, RenderOptions};
use crate::color::KEYLINE_COLOR;
use crate::geometry::{escape_attr, escape_text, fmt};
use crate::icon::{resolve, IconCatalog, ResolveParams};
use crate::spec::BrandSpec;

/// Wraps `inner` in the centered rotate transform shared by icons and
/// monograms.
fn content_group(inner: &str, size: f64, rotate: f64) -> String {
    let c = fmt(size / 2.0);
    format!(
        r#"<g transform="translate({c}, {c}) scale(1) rotate({r}) translate(-{c}, -{c})">{inner}</g>"#,
        r = fmt(rotate),
    )
}

fn background(spec: &BrandSpec, size: f64, opts: &RenderOptions) -> String {
    if opts.include_background {
        render_background(&spec.background, &spec.colors.background, size, size)
    } else {
        String::new()
    }
}

/// A 1px outline inset by half a pixel so it stays inside the canvas.
fn keyline(size: f64) -> String {
    format!(
        r#"<rect x="0.5" y="0.5" width="{s}" height="{s}" fill="none" stroke="{KEYLINE_COLOR}" stroke-width="1"/>"#,
        s = fmt(size - 1.0),
    )
}

fn artwork(size: f64, mut body: String, opts: &RenderOptions) -> Artwork {
    if opts.keyline {
        body.push_str(&keyline(size));
    }
    Artwork {
        width: size,
        height: size,
        body,
        fluid: opts.fluid,
        fit: opts.fit,
    }
}

/// Composes the standalone mark.
///
/// An empty or unresolvable icon id yields the background alone.
pub fn compose_mark(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> Artwork {
    let spec = spec.clamped();
    let size = sanitize_size(size);
    let params = &spec.params;

    let content = resolve(
        catalog,
        &spec.icon_id,
        &ResolveParams {
            size,
            padding: params.padding,
            color: &spec.colors.primary,
            corner_radius: params.corner_radius,
            stroke: params.stroke,
        },
    );

    let mut body = background(&spec, size, opts);
    if !content.is_empty() {
        body.push_str(&content_group(content.markup(), size, params.rotate));
    }
    artwork(size, body, opts)
}

pub fn render_mark(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> String {
    compose_mark(spec, size, catalog, opts).to_svg()
}

/// Composes a single-letter mark from the spec's effective initial.
///
/// The glyph is half the canvas tall, centered, in the primary color, and
/// rotated like an icon would be.
pub fn compose_monogram(spec: &BrandSpec, size: f64, opts: &RenderOptions) -> Artwork {
    let spec = spec.clamped();
    let size = sanitize_size(size);
    let c = fmt(size / 2.0);

    let glyph = format!(
        r#"<text x="{c}" y="{c}" font-family="{font}" font-size="{px}" font-weight="700" fill="{fill}" text-anchor="middle" dominant-baseline="central">{initial}</text>"#,
        font = spec.font.css_stack(),
        px = fmt((size * 0.5).round()),
        fill = escape_attr(&spec.colors.primary),
        initial = escape_text(&spec.effective_initial()),
    );

    let mut body = background(&spec, size, opts);
    body.push_str(&content_group(&glyph, size, spec.params.rotate));
    artwork(size, body, opts)
}

pub fn render_monogram(spec: &BrandSpec, size: f64, opts: &RenderOptions) -> String {
    compose_monogram(spec, size, opts).to_svg()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{BackgroundSpec, GradientStop};

    fn catalog() -> IconCatalog {
        IconCatalog::new()
    }

    #[test]
    fn mark_root_attributes() {
        let spec = BrandSpec::named("Acme").with_icon("shape:circle");
        let svg = render_mark(&spec, 256.0, &catalog(), &RenderOptions::default());
        assert!(svg.starts_with(
            r#"<svg width="256" height="256" viewBox="0 0 256 256" preserveAspectRatio="xMidYMid meet" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn icon_group_is_rotated_about_center() {
        let mut spec = BrandSpec::named("Acme").with_icon("shape:rounded-square");
        spec.params.rotate = 30.0;
        let svg = render_mark(&spec, 200.0, &catalog(), &RenderOptions::default());
        assert!(svg.contains(
            r#"<g transform="translate(100, 100) scale(1) rotate(30) translate(-100, -100)">"#
        ));
    }

    #[test]
    fn unresolvable_icon_renders_background_only() {
        let spec = BrandSpec::named("Acme").with_icon("nowhere:nothing");
        let art = compose_mark(&spec, 256.0, &catalog(), &RenderOptions::default());
        assert_eq!(art.body, r##"<rect width="256" height="256" fill="#000000"/>"##);
    }

    #[test]
    fn keyline_outlines_square_marks() {
        let spec = BrandSpec::named("Acme").with_icon("shape:circle");
        let plain = compose_mark(&spec, 256.0, &catalog(), &RenderOptions::default());
        assert!(!plain.body.contains(KEYLINE_COLOR));

        let opts = RenderOptions::default().with_keyline();
        let mark = compose_mark(&spec, 256.0, &catalog(), &opts);
        assert!(mark.body.ends_with(
            r##"<rect x="0.5" y="0.5" width="255" height="255" fill="none" stroke="#D1D5DB" stroke-width="1"/>"##
        ));
        let monogram = compose_monogram(&spec, 64.0, &opts);
        assert!(monogram.body.contains(r#"width="63" height="63" fill="none""#));
    }

    #[test]
    fn background_can_be_suppressed() {
        let spec = BrandSpec::named("Acme").with_icon("shape:circle");
        let opts = RenderOptions::default().without_background();
        let art = compose_mark(&spec, 256.0, &catalog(), &opts);
        assert!(!art.body.contains("<rect"));
        assert!(art.body.contains("<circle"));
    }

    #[test]
    fn mark_clamps_input() {
        let mut spec = BrandSpec::named("Acme").with_icon("shape:circle");
        spec.params.rotate = 400.0;
        spec.params.padding = 1000.0;
        let svg = render_mark(&spec, 256.0, &catalog(), &RenderOptions::default());
        assert!(svg.contains("rotate(45)"));
        // padding capped at 40
        assert!(svg.contains(r#"translate(40, 40)"#));
    }

    #[test]
    fn gradient_mark_defines_gradient_once() {
        let spec = BrandSpec::named("Acme").with_background(BackgroundSpec::linear(
            90.0,
            vec![GradientStop::new("#FF0000", 0.0), GradientStop::new("#0000FF", 1.0)],
        ));
        let svg = render_mark(&spec, 256.0, &catalog(), &RenderOptions::default());
        assert_eq!(svg.matches("<linearGradient").count(), 1);
    }

    #[test]
    fn monogram_uses_initial_and_primary() {
        let mut spec = BrandSpec::named("acme");
        spec.colors.primary = "#6C5CE7".into();
        let svg = render_monogram(&spec, 256.0, &RenderOptions::default());
        assert!(svg.contains(r#"font-size="128""#));
        assert!(svg.contains(r##"fill="#6C5CE7""##));
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.contains(">A</text>"));
    }

    #[test]
    fn monogram_escapes_glyph() {
        let mut spec = BrandSpec::named("Acme");
        spec.initial = "<".into();
        let svg = render_monogram(&spec, 64.0, &RenderOptions::default());
        assert!(svg.contains(">&lt;</text>"));
    }
}
