//! Lockups: mark and name composed in one of the layout templates.
//!
//! Text width comes from [`estimate_text_width`], an average-glyph
//! approximation; there are no font metrics, so real text may run a few
//! pixels long or short.
//!
//! All lockup layouts are derived from two sizes:
//!
//! | Quantity    | Formula                  |
//! |-------------|--------------------------|
//! | mark size   | `round(size × 1.18)`     |
//! | font size   | `round(mark size / 3)`   |
//!
//! The left lockup renders its mark at the larger mark size; stacked and
//! badge layouts use the nominal size.

use super::background::solid_rect;
use super::mark::compose_mark;
use super::{sanitize_size, Artwork, RenderOptions};
use crate::geometry::{escape_attr, escape_text, estimate_text_width, fmt};
use crate::icon::IconCatalog;
use crate::spec::{BrandSpec, Template};

const MARK_BIAS: f64 = 1.18;

// text-only
const TEXT_PAD_X: f64 = 64.0;
const TEXT_PAD_Y: f64 = 48.0;

// left-lockup
const LEFT_PAD: f64 = 8.0;
const LEFT_GAP: f64 = 16.0;
const OPTICAL_SHIFT: f64 = 8.0;
const RIGHT_PAD: f64 = 56.0;

// stacked
const STACK_SIDE_PAD: f64 = 48.0;
const STACK_GAP: f64 = 64.0;
const STACK_BOTTOM_PAD: f64 = 32.0;

// badge
const BADGE_PAD: f64 = 24.0;
const PILL_HEIGHT: f64 = 56.0;
const PILL_INSET: f64 = 28.0;
const PILL_FILL: &str = "#F3F4F6";
const PILL_TEXT: &str = "#111827";
const PILL_FONT_SIZE: f64 = 24.0;

/// The composition a spec resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No icon: the name alone, centered.
    TextOnly,
    /// The mark alone, for `mark-only` or when there is no name to set.
    Mark,
    Left,
    Stacked,
    Badge,
}

/// Picks the layout for an already clamped spec.
pub fn layout_for(spec: &BrandSpec) -> Layout {
    if !spec.has_icon() {
        return Layout::TextOnly;
    }
    if spec.name.trim().is_empty() {
        return Layout::Mark;
    }
    match spec.hero_style {
        Template::MarkOnly => Layout::Mark,
        Template::LeftLockup => Layout::Left,
        Template::Stacked => Layout::Stacked,
        Template::Badge => Layout::Badge,
    }
}

/// Typography shared by every text element of a lockup.
struct Typography<'a> {
    spec: &'a BrandSpec,
    font_size: f64,
}

impl Typography<'_> {
    fn width(&self, text: &str) -> f64 {
        estimate_text_width(text, self.font_size, self.spec.params.letter_spacing)
    }

    fn spacing_attr(&self) -> String {
        let spacing = self.spec.params.letter_spacing;
        if spacing != 0.0 {
            format!(r#" letter-spacing="{}""#, fmt(spacing))
        } else {
            String::new()
        }
    }

    /// A `<text>` element. `anchor` is `None` for start-aligned text.
    fn text(&self, x: f64, y: f64, fill: &str, anchor: Option<&str>, content: &str) -> String {
        let anchor = anchor
            .map(|a| format!(r#" text-anchor="{a}""#))
            .unwrap_or_default();
        format!(
            r#"<text x="{x}" y="{y}" font-family="{font}" font-size="{px}" font-weight="600" fill="{fill}"{spacing} dominant-baseline="middle"{anchor}>{content}</text>"#,
            x = fmt(x),
            y = fmt(y),
            font = self.spec.font.css_stack(),
            px = fmt(self.font_size),
            fill = escape_attr(fill),
            spacing = self.spacing_attr(),
            content = escape_text(content),
        )
    }
}

/// Composes the lockup for `spec.hero_style`.
pub fn compose_lockup(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> Artwork {
    let spec = spec.clamped();
    let size = sanitize_size(size);
    let mark_size = (size * MARK_BIAS).round();
    let font_size = (mark_size / 3.0).round();
    let name = spec.name.trim();
    let ty = Typography {
        spec: &spec,
        font_size,
    };

    let (width, height, content) = match layout_for(&spec) {
        Layout::Mark => return compose_mark(&spec, size, catalog, opts),
        Layout::TextOnly => {
            let width = ty.width(name) + TEXT_PAD_X * 2.0;
            let height = font_size + TEXT_PAD_Y * 2.0;
            let text = if name.is_empty() {
                String::new()
            } else {
                ty.text(width / 2.0, height / 2.0, &spec.colors.text, Some("middle"), name)
            };
            (width, height, text)
        }
        Layout::Left => {
            let width = LEFT_PAD + mark_size + LEFT_GAP + ty.width(name) + RIGHT_PAD;
            let mark = nested_mark(&spec, mark_size, LEFT_PAD, catalog, opts);
            let text = ty.text(
                LEFT_PAD + mark_size + LEFT_GAP - OPTICAL_SHIFT,
                mark_size / 2.0,
                &spec.colors.text,
                None,
                name,
            );
            (width, mark_size, mark + &text)
        }
        Layout::Stacked => {
            let width = size + STACK_SIDE_PAD * 2.0;
            let height = size + STACK_GAP + font_size + STACK_BOTTOM_PAD;
            let mark = nested_mark(&spec, size, STACK_SIDE_PAD, catalog, opts);
            let baseline = size + STACK_GAP;
            let text = ty.text(width / 2.0, baseline, &spec.colors.text, Some("middle"), name);
            (width, height, mark + &text)
        }
        Layout::Badge => {
            let label = Typography {
                spec: &spec,
                font_size: PILL_FONT_SIZE,
            };
            let pill_x = BADGE_PAD + size + BADGE_PAD;
            let pill_width = size.max(label.width(name) + PILL_INSET * 2.0);
            let width = pill_x + pill_width + BADGE_PAD;
            let mark = nested_mark(&spec, size, BADGE_PAD, catalog, opts);
            let pill = format!(
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" fill="{PILL_FILL}"/>"#,
                x = fmt(pill_x),
                y = fmt(size / 2.0 - PILL_HEIGHT / 2.0),
                w = fmt(pill_width),
                h = fmt(PILL_HEIGHT),
                r = fmt(PILL_HEIGHT / 2.0),
            );
            let text = label.text(pill_x + PILL_INSET, size / 2.0, PILL_TEXT, None, name);
            (width, size, mark + &pill + &text)
        }
    };

    let mut body = String::new();
    if opts.include_background {
        body.push_str(&solid_rect(
            spec.background.flat_color(&spec.colors.background),
            width,
            height,
        ));
    }
    body.push_str(&content);

    Artwork {
        width,
        height,
        body,
        fluid: true,
        fit: opts.fit,
    }
}

/// The mark at `size`, shifted right by `x`.
fn nested_mark(
    spec: &BrandSpec,
    size: f64,
    x: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> String {
    let opts = RenderOptions {
        keyline: false,
        ..*opts
    };
    let mark = compose_mark(spec, size, catalog, &opts);
    format!(r#"<g transform="translate({}, 0)">{}</g>"#, fmt(x), mark.to_group())
}

pub fn render_lockup(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> String {
    compose_lockup(spec, size, catalog, opts).to_svg()
}

/// Renders the name alone, whatever icon the spec selects.
pub fn render_wordmark(spec: &BrandSpec, size: f64, opts: &RenderOptions) -> String {
    let text_only = BrandSpec {
        icon_id: String::new(),
        ..spec.clone()
    };
    // Text-only lockups never consult the catalog.
    compose_lockup(&text_only, size, &IconCatalog::new(), opts).to_svg()
}

// ============================================================================
// Tests
// ============================================================================
