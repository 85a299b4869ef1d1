//! The composition engine.
//!
//! Turns a [`BrandSpec`](crate::BrandSpec) into self-contained SVG. Every
//! entry point comes in two forms: `compose_*` returns a structured
//! [`Artwork`] whose canvas size is known to the caller, and `render_*`
//! serializes it straight to a string.
//!
//! Presentation concerns that call sites used to patch into finished
//! markup (responsive sizing, crop policy, dropping the background) are
//! [`RenderOptions`] threaded through composition instead.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::compose::{render_mark, Fit, RenderOptions};
//! use brandmark_renderer::{BrandSpec, IconCatalog};
//!
//! let spec = BrandSpec::named("Acme").with_icon("shape:circle");
//! let catalog = IconCatalog::new();
//!
//! let svg = render_mark(&spec, 256.0, &catalog, &RenderOptions::default());
//! assert!(svg.contains(r#"viewBox="0 0 256 256""#));
//!
//! let cover = RenderOptions::default().with_fit(Fit::Slice).fluid();
//! let svg = render_mark(&spec, 256.0, &catalog, &cover);
//! assert!(svg.contains(r#"width="100%""#));
//! assert!(svg.contains(r#"preserveAspectRatio="xMidYMid slice""#));
//! ```

pub mod background;
pub mod lockup;
pub mod mark;

pub use lockup::{compose_lockup, layout_for, render_lockup, render_wordmark, Layout};
pub use mark::{compose_mark, compose_monogram, render_mark, render_monogram};

use crate::geometry::fmt;

/// Canvas side used when a caller passes an unusable size.
pub const DEFAULT_SIZE: f64 = 256.0;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Replaces non-finite or non-positive sizes with [`DEFAULT_SIZE`].
pub(crate) fn sanitize_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        DEFAULT_SIZE
    }
}

// ============================================================================
// RenderOptions
// ============================================================================

/// How artwork fills a frame whose aspect ratio differs from its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fit {
    /// Letterbox: the whole artwork stays visible.
    #[default]
    Meet,
    /// Cover: the frame is filled and the overflow cropped.
    Slice,
}

impl Fit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meet => "meet",
            Self::Slice => "slice",
        }
    }
}

/// Render-time presentation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub fit: Fit,
    /// Draw background rects and gradients. Off when compositing onto a
    /// frame that provides its own color.
    pub include_background: bool,
    /// Emit `width="100%" height="100%"` on marks. Lockups are always fluid.
    pub fluid: bool,
    /// Outline square marks with a 1px keyline.
    pub keyline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fit: Fit::Meet,
            include_background: true,
            fluid: false,
            keyline: false,
        }
    }
}

impl RenderOptions {
    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn without_background(mut self) -> Self {
        self.include_background = false;
        self
    }

    pub fn fluid(mut self) -> Self {
        self.fluid = true;
        self
    }

    pub fn with_keyline(mut self) -> Self {
        self.keyline = true;
        self
    }
}

// ============================================================================
// Artwork
// ============================================================================

/// A composed canvas, not yet serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub width: f64,
    pub height: f64,
    /// Inner markup in canvas coordinates.
    pub body: String,
    pub fluid: bool,
    pub fit: Fit,
}

impl Artwork {
    /// The `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt(self.width), fmt(self.height))
    }

    /// Serializes to a standalone `<svg>` document.
    pub fn to_svg(&self) -> String {
        let (width, height) = if self.fluid {
            ("100%".to_string(), "100%".to_string())
        } else {
            (fmt(self.width), fmt(self.height))
        };
        format!(
            r#"<svg width="{width}" height="{height}" viewBox="{vb}" preserveAspectRatio="xMidYMid {fit}" xmlns="{SVG_NS}">{body}</svg>"#,
            vb = self.view_box(),
            fit = self.fit.as_str(),
            body = self.body,
        )
    }

    /// The body as a group, for nesting inside another canvas.
    pub fn to_group(&self) -> String {
        format!("<g>{}</g>", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(fluid: bool) -> Artwork {
        Artwork {
            width: 302.0,
            height: 120.5,
            body: "<rect/>".to_string(),
            fluid,
            fit: Fit::Meet,
        }
    }

    #[test]
    fn fixed_artwork_uses_pixel_size() {
        let svg = artwork(false).to_svg();
        assert!(svg.starts_with(r#"<svg width="302" height="120.5" viewBox="0 0 302 120.5""#));
        assert!(svg.ends_with("<rect/></svg>"));
    }

    #[test]
    fn fluid_artwork_keeps_view_box() {
        let svg = artwork(true).to_svg();
        assert!(svg.contains(r#"width="100%" height="100%" viewBox="0 0 302 120.5""#));
    }

    #[test]
    fn options_builders() {
        let opts = RenderOptions::default().with_fit(Fit::Slice).without_background();
        assert_eq!(opts.fit, Fit::Slice);
        assert!(!opts.include_background);
        assert!(!opts.fluid);
    }

    #[test]
    fn bad_sizes_fall_back() {
        assert_eq!(sanitize_size(64.0), 64.0);
        assert_eq!(sanitize_size(0.0), DEFAULT_SIZE);
        assert_eq!(sanitize_size(f64::NAN), DEFAULT_SIZE);
        assert_eq!(sanitize_size(-3.0), DEFAULT_SIZE);
    }
}
