//! The brand specification: the single input of every render call.
//!
//! A [`BrandSpec`] is a plain value that serializes to camelCase JSON so it
//! can travel between a web frontend, query parameters and this crate.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::{BrandSpec, Template};
//!
//! let spec = BrandSpec::from_json(r#"{
//!     "name": "Acme",
//!     "heroStyle": "stacked",
//!     "iconId": "shape:circle",
//!     "params": { "rotate": 90 }
//! }"#).unwrap();
//!
//! assert_eq!(spec.hero_style, Template::Stacked);
//! // Out-of-range knobs are clamped before rendering.
//! assert_eq!(spec.clamped().params.rotate, 45.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::color;
use crate::geometry::clamp;

// ============================================================================
// Enums
// ============================================================================

/// Composition layout of a lockup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Template {
    /// The mark alone.
    MarkOnly,
    /// Mark on the left, name on the right.
    #[default]
    LeftLockup,
    /// Mark on top, name centered below.
    Stacked,
    /// Mark followed by a pill-shaped label.
    Badge,
}

/// Brand typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum FontFamily {
    #[default]
    Inter,
    Sora,
    Manrope,
    Outfit,
}

impl FontFamily {
    /// CSS `font-family` value with system fallbacks.
    pub fn css_stack(self) -> &'static str {
        match self {
            Self::Inter => "Inter, system-ui, sans-serif",
            Self::Sora => "Sora, system-ui, sans-serif",
            Self::Manrope => "Manrope, system-ui, sans-serif",
            Self::Outfit => "Outfit, system-ui, sans-serif",
        }
    }

    /// The bare family name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Sora => "Sora",
            Self::Manrope => "Manrope",
            Self::Outfit => "Outfit",
        }
    }
}

// ============================================================================
// Colors & Background
// ============================================================================

/// The three brand colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BrandColors {
    /// Fill of icons, shapes and monograms.
    pub primary: String,
    /// Fallback solid background.
    pub background: String,
    /// Wordmark fill.
    pub text: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#FFF7ED".to_string(),
            background: "#000000".to_string(),
            text: "#FFF7ED".to_string(),
        }
    }
}

/// One color stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GradientStop {
    pub color: String,
    /// Position along the gradient, `0.0..=1.0`.
    pub at: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, at: f64) -> Self {
        Self {
            color: color.into(),
            at,
        }
    }
}

/// Canvas background of a mark.
///
/// Serializes with a `type` tag:
///
/// ```json
/// { "type": "solid", "color": "#000000" }
/// { "type": "linear-gradient", "angle": 45, "stops": [{ "color": "#FF6B6B", "at": 0 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum BackgroundSpec {
    Solid {
        color: String,
    },
    LinearGradient {
        /// Rotation in degrees.
        angle: f64,
        stops: Vec<GradientStop>,
    },
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self::Solid {
            color: "#000000".to_string(),
        }
    }
}

impl BackgroundSpec {
    /// Creates a solid background.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid {
            color: color.into(),
        }
    }

    /// Creates a linear gradient background.
    pub fn linear(angle: f64, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient { angle, stops }
    }

    /// The flat color used where a gradient cannot be drawn, such as the
    /// canvas of a lockup.
    pub fn flat_color<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Solid { color } => color,
            Self::LinearGradient { .. } => fallback,
        }
    }
}

/// Curated gradient backgrounds offered by the editor.
pub fn gradient_presets() -> Vec<BackgroundSpec> {
    let preset = |angle: f64, from: &str, to: &str| {
        BackgroundSpec::linear(
            angle,
            vec![GradientStop::new(from, 0.0), GradientStop::new(to, 1.0)],
        )
    };
    vec![
        preset(45.0, "#FF6B6B", "#4ECDC4"),
        preset(135.0, "#667eea", "#764ba2"),
        preset(45.0, "#f093fb", "#f5576c"),
        preset(90.0, "#4facfe", "#00f2fe"),
        preset(45.0, "#43e97b", "#38f9d7"),
        preset(135.0, "#fa709a", "#fee140"),
        preset(90.0, "#a8edea", "#fed6e3"),
        preset(45.0, "#000000", "#434343"),
    ]
}

// ============================================================================
// Params
// ============================================================================

/// Visual effects toggles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Effect {
    /// Carried for compatibility; the renderer draws no shadow.
    #[serde(default)]
    pub shadow: bool,
}

/// Numeric knobs of a spec. Ranges are enforced by [`Params::clamped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Params {
    /// 0.5–1.5, legacy.
    pub scale: f64,
    /// 0.6–1.6, advisory.
    pub icon_scale: f64,
    /// 0.6–1.6, advisory.
    pub text_scale: f64,
    /// -2–6 px.
    pub letter_spacing: f64,
    /// -45–45 degrees.
    pub rotate: f64,
    /// 0–8 px.
    pub stroke: f64,
    /// 0–64 px, shapes only.
    pub corner_radius: f64,
    /// 0–40 px.
    pub padding: f64,
    /// 0–48 px, advisory: lockups use a fixed gap.
    pub lockup_gap: f64,
    pub effect: Effect,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scale: 0.8,
            icon_scale: 1.0,
            text_scale: 1.0,
            letter_spacing: 0.0,
            rotate: 0.0,
            stroke: 0.0,
            corner_radius: 16.0,
            padding: 16.0,
            lockup_gap: 12.0,
            effect: Effect::default(),
        }
    }
}

impl Params {
    /// Returns a copy with every knob inside its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            scale: clamp(self.scale, 0.5, 1.5),
            icon_scale: clamp(self.icon_scale, 0.6, 1.6),
            text_scale: clamp(self.text_scale, 0.6, 1.6),
            letter_spacing: clamp(self.letter_spacing, -2.0, 6.0),
            rotate: clamp(self.rotate, -45.0, 45.0),
            stroke: clamp(self.stroke, 0.0, 8.0),
            corner_radius: clamp(self.corner_radius, 0.0, 64.0),
            padding: clamp(self.padding, 0.0, 40.0),
            lockup_gap: clamp(self.lockup_gap, 0.0, 48.0),
            effect: self.effect,
        }
    }
}

// ============================================================================
// BrandSpec
// ============================================================================

/// Declarative description of a brand identity.
///
/// # JSON Format
///
/// ```json
/// {
///   "version": 2,
///   "name": "Acme",
///   "initial": "A",
///   "heroStyle": "left-lockup",
///   "iconId": "lucide:sparkles",
///   "colors": { "primary": "#FFF7ED", "background": "#000000", "text": "#FFF7ED" },
///   "background": { "type": "solid", "color": "#000000" },
///   "font": "Inter",
///   "params": { "rotate": 0, "padding": 16, "cornerRadius": 16 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BrandSpec {
    pub version: u32,
    pub name: String,
    /// Explicit monogram glyph. Derived from `name` when empty.
    pub initial: String,
    #[serde(alias = "template")]
    pub hero_style: Template,
    /// Empty, `shape:<kind>` or `<namespace>:<key>`.
    pub icon_id: String,
    pub colors: BrandColors,
    pub background: BackgroundSpec,
    pub font: FontFamily,
    pub params: Params,
}

impl Default for BrandSpec {
    fn default() -> Self {
        Self {
            version: 2,
            name: String::new(),
            initial: String::new(),
            hero_style: Template::default(),
            icon_id: String::new(),
            colors: BrandColors::default(),
            background: BackgroundSpec::default(),
            font: FontFamily::default(),
            params: Params::default(),
        }
    }
}

impl BrandSpec {
    /// Creates the default spec with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the icon id.
    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = icon_id.into();
        self
    }

    /// Sets the hero style.
    pub fn with_template(mut self, template: Template) -> Self {
        self.hero_style = template;
        self
    }

    /// Sets the background.
    pub fn with_background(mut self, background: BackgroundSpec) -> Self {
        self.background = background;
        self
    }

    /// Returns true if an icon or shape is selected.
    pub fn has_icon(&self) -> bool {
        !self.icon_id.trim().is_empty()
    }

    /// The glyph used by monograms.
    ///
    /// Uses the first character of `initial`, else of `name`, uppercased;
    /// `"B"` when both are empty.
    pub fn effective_initial(&self) -> String {
        let source = if self.initial.trim().is_empty() {
            self.name.trim()
        } else {
            self.initial.trim()
        };
        match source.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "B".to_string(),
        }
    }

    /// Returns a copy that is safe to render.
    ///
    /// Numeric params are clamped, gradient stops are clamped to `0..=1`
    /// and ordered, the gradient angle is normalized into `[0, 360)`, and
    /// colors that are not hex are replaced by the defaults of their slot.
    pub fn clamped(&self) -> Self {
        let defaults = BrandColors::default();
        let sanitize = |value: &str, fallback: &str| {
            if color::is_hex_color(value) {
                value.trim().to_string()
            } else {
                fallback.to_string()
            }
        };
        let colors = BrandColors {
            primary: sanitize(&self.colors.primary, &defaults.primary),
            background: sanitize(&self.colors.background, &defaults.background),
            text: sanitize(&self.colors.text, &defaults.text),
        };

        let background = match &self.background {
            BackgroundSpec::Solid { color } => BackgroundSpec::Solid {
                color: sanitize(color, &colors.background),
            },
            BackgroundSpec::LinearGradient { angle, stops } => {
                let mut stops: Vec<GradientStop> = stops
                    .iter()
                    .map(|s| GradientStop {
                        color: sanitize(&s.color, &colors.background),
                        at: clamp(s.at, 0.0, 1.0),
                    })
                    .collect();
                stops.sort_by(|a, b| a.at.total_cmp(&b.at));
                let angle = if angle.is_finite() {
                    angle.rem_euclid(360.0)
                } else {
                    0.0
                };
                BackgroundSpec::LinearGradient { angle, stops }
            }
        };

        Self {
            version: self.version,
            name: self.name.clone(),
            initial: self.initial.clone(),
            hero_style: self.hero_style,
            icon_id: self.icon_id.trim().to_string(),
            colors,
            background,
            font: self.font,
            params: self.params.clamped(),
        }
    }

    /// The color-swapped variant used for dark/light alternates.
    ///
    /// `background` and `text` trade places, the background becomes solid
    /// in the former text color, and `primary` is unchanged.
    pub fn inverse(&self) -> Self {
        Self {
            colors: BrandColors {
                primary: self.colors.primary.clone(),
                background: self.colors.text.clone(),
                text: self.colors.background.clone(),
            },
            background: BackgroundSpec::solid(self.colors.text.clone()),
            ..self.clone()
        }
    }

    /// Serializes the spec to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the spec to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a spec from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
