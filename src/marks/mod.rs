//! The legacy style family.
//!
//! Before icon-based composition, a brand mark was one of four abstract
//! bar compositions driven by four numeric knobs. These marks are still
//! used for the variant grid and for specs stored in the older format.
//!
//! Every mark is drawn on a fixed 256×256 canvas:
//!
//! | Style     | Elements                                     |
//! |-----------|----------------------------------------------|
//! | `minimal` | main rounded bar + smaller offset bar        |
//! | `angular` | two bars with diagonal polygon cuts          |
//! | `ribbon`  | two rotated rounded strips                   |
//! | `soft`    | two extra-rounded bars + accent dot          |
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::marks::{render_legacy, LegacySpec, MarkStyle};
//!
//! let spec = LegacySpec {
//!     name: "Acme".to_string(),
//!     style: MarkStyle::Angular,
//!     ..LegacySpec::default()
//! };
//! let result = render_legacy(&spec);
//! assert!(result.mark.contains("<polygon"));
//! assert!(result.lockup.contains(">Acme</text>"));
//! ```

pub mod angular;
pub mod minimal;
pub mod ribbon;
pub mod soft;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{clamp, escape_attr, escape_text};
use crate::spec::FontFamily;

/// Side of the legacy mark canvas.
pub const MARK_SIZE: f64 = 256.0;

const LOCKUP_WIDTH: f64 = 1024.0;
const LOCKUP_PLACEHOLDER: &str = "Brand Name";

// ============================================================================
// Types
// ============================================================================

/// Abstract mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum MarkStyle {
    #[default]
    Minimal,
    Angular,
    Ribbon,
    Soft,
}

impl MarkStyle {
    pub const ALL: [MarkStyle; 4] = [Self::Minimal, Self::Angular, Self::Ribbon, Self::Soft];
}

/// Light or dark lockup theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#FFFFFF",
            Self::Dark => "#0B0F1A",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Light => "#111827",
            Self::Dark => "#FFFFFF",
        }
    }
}

/// Numeric knobs of a legacy mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LegacyParams {
    /// 0.08–0.20, drives bar width.
    pub weight: f64,
    /// -20–20 degrees.
    pub slant: f64,
    /// 0–24 px.
    pub radius: f64,
    /// 0–0.40, relative spacing.
    pub gap: f64,
}

impl Default for LegacyParams {
    fn default() -> Self {
        Self {
            weight: 0.12,
            slant: 0.0,
            radius: 8.0,
            gap: 0.20,
        }
    }
}

impl LegacyParams {
    pub fn clamped(&self) -> Self {
        Self {
            weight: clamp(self.weight, 0.08, 0.20),
            slant: clamp(self.slant, -20.0, 20.0),
            radius: clamp(self.radius, 0.0, 24.0),
            gap: clamp(self.gap, 0.0, 0.40),
        }
    }
}

/// Brand description in the legacy format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LegacySpec {
    pub version: u32,
    pub name: String,
    pub initial: String,
    pub style: MarkStyle,
    /// Fill of every mark element.
    pub color: String,
    pub font: FontFamily,
    pub theme: Theme,
    pub params: LegacyParams,
}

impl Default for LegacySpec {
    fn default() -> Self {
        Self {
            version: 1,
            name: String::new(),
            initial: String::new(),
            style: MarkStyle::default(),
            color: "#6C5CE7".to_string(),
            font: FontFamily::default(),
            theme: Theme::default(),
            params: LegacyParams::default(),
        }
    }
}

impl LegacySpec {
    /// Returns a copy with params inside their ranges.
    pub fn clamped(&self) -> Self {
        Self {
            params: self.params.clamped(),
            ..self.clone()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Mark and lockup of a legacy spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub mark: String,
    pub lockup: String,
}

// ============================================================================
// Rendering
// ============================================================================

/// Body elements of the mark, in 256×256 canvas coordinates.
fn mark_body(spec: &LegacySpec) -> String {
    let color = escape_attr(&spec.color);
    match spec.style {
        MarkStyle::Minimal => minimal::render(&spec.params, &color),
        MarkStyle::Angular => angular::render(&spec.params, &color),
        MarkStyle::Ribbon => ribbon::render(&spec.params, &color),
        MarkStyle::Soft => soft::render(&spec.params, &color),
    }
}

/// Renders the standalone 256×256 mark.
pub fn render_legacy_mark(spec: &LegacySpec) -> String {
    format!(
        r#"<svg width="256" height="256" viewBox="0 0 256 256" xmlns="http://www.w3.org/2000/svg">{}</svg>"#,
        mark_body(spec)
    )
}

/// Renders the 1024×256 horizontal lockup: mark on the left, name at
/// (320, 160) in the theme's text color.
pub fn lockup_horizontal(spec: &LegacySpec) -> String {
    let name = if spec.name.trim().is_empty() {
        LOCKUP_PLACEHOLDER
    } else {
        spec.name.trim()
    };
    format!(
        concat!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<g transform="translate(24, 0)"><g>{mark}</g></g>"#,
            r#"<text x="320" y="160" font-family="{font}" font-size="48" font-weight="600" fill="{fill}" dominant-baseline="middle">{name}</text>"#,
            "</svg>"
        ),
        w = LOCKUP_WIDTH,
        h = MARK_SIZE,
        mark = mark_body(spec),
        font = spec.font.css_stack(),
        fill = spec.theme.text(),
        name = escape_text(name),
    )
}

/// Renders mark and lockup of a clamped copy of `spec`.
pub fn render_legacy(spec: &LegacySpec) -> RenderResult {
    let spec = spec.clamped();
    debug!("rendering legacy {:?} mark", spec.style);
    RenderResult {
        mark: render_legacy_mark(&spec),
        lockup: lockup_horizontal(&spec),
    }
}

// ============================================================================
// Helpers
// ============================================================================

const WEIGHTS: [f64; 7] = [0.08, 0.10, 0.12, 0.14, 0.16, 0.18, 0.20];
const SLANTS: [f64; 7] = [-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0];
const RADII: [f64; 7] = [0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0];
const GAPS: [f64; 8] = [0.0, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40];

/// Builds `count` deterministic variations of `base` for the variant grid.
///
/// Only params change; name, style, color, font and theme are kept.
pub fn build_variants(base: &LegacySpec, count: usize) -> Vec<LegacySpec> {
    let base = base.clamped();
    (0..count)
        .map(|i| {
            let params = LegacyParams {
                weight: WEIGHTS[i % WEIGHTS.len()],
                slant: SLANTS[(i + 2) % SLANTS.len()],
                radius: RADII[(i + 4) % RADII.len()],
                gap: GAPS[(i + 6) % GAPS.len()],
            };
            LegacySpec {
                params: params.clamped(),
                ..base.clone()
            }
        })
        .collect()
}

/// Default size of the variant grid.
pub const VARIANT_COUNT: usize = 12;

/// Lowercase, ASCII-alphanumeric slug with single dashes.
pub fn create_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// First character of `name`, uppercased; `"B"` for an empty name.
pub fn initial_from_name(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "B".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
