//! Asset bundles: every variant a brand needs, rendered from one spec.
//!
//! [`generate_all_assets`] produces the icon (or monogram), the wordmark
//! and the three lockups. [`generate_brand_kit`] adds the inverse set used
//! for dark/light alternates. [`BrandKitGenerator`] memoizes the last kit
//! so an editor can call it on every change.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::{generate_all_assets, BrandSpec, IconCatalog, RenderOptions};
//!
//! let spec = BrandSpec::named("Acme");
//! let bundle = generate_all_assets(&spec, 256.0, &IconCatalog::new(), &RenderOptions::default());
//!
//! // No icon selected: the monogram stands in for it.
//! assert!(bundle.icon.is_none());
//! assert!(bundle.monogram.as_deref().unwrap().contains(">A</text>"));
//! ```

use log::debug;

use crate::compose::{render_lockup, render_mark, render_monogram, render_wordmark, RenderOptions};
use crate::context::AssetKind;
use crate::icon::IconCatalog;
use crate::spec::{BrandSpec, Template};

// ============================================================================
// AssetBundle
// ============================================================================

/// The three lockup layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockups {
    pub left: String,
    pub stacked: String,
    pub badge: String,
}

/// Every asset of one color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    /// The mark, when an icon or shape is selected.
    pub icon: Option<String>,
    pub wordmark: String,
    /// Single-letter mark, when no icon is selected.
    pub monogram: Option<String>,
    pub lockups: Lockups,
}

impl AssetBundle {
    /// The markup of one asset, if the bundle has it.
    pub fn get(&self, kind: AssetKind) -> Option<&str> {
        match kind {
            AssetKind::Icon => self.icon.as_deref(),
            AssetKind::Monogram => self.monogram.as_deref(),
            AssetKind::Wordmark => Some(&self.wordmark),
            AssetKind::LockupLeft => Some(&self.lockups.left),
            AssetKind::LockupStacked => Some(&self.lockups.stacked),
            AssetKind::LockupBadge => Some(&self.lockups.badge),
        }
    }

    /// The mark to use wherever a square asset is needed.
    pub fn mark(&self) -> &str {
        self.icon
            .as_deref()
            .or(self.monogram.as_deref())
            .unwrap_or(&self.wordmark)
    }
}

/// A bundle and its color-swapped counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandKit {
    pub primary: AssetBundle,
    /// Rendered from [`BrandSpec::inverse`].
    pub inverse: AssetBundle,
}

/// The four files of a quick export: left lockup and mark, each in both
/// color schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    pub lockup: String,
    pub mark_only: String,
    pub inverse_lockup: String,
    pub inverse_mark_only: String,
}

// ============================================================================
// Generation
// ============================================================================

/// Renders a single asset of `spec`.
pub fn render_asset(
    spec: &BrandSpec,
    kind: AssetKind,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> String {
    let lockup = |template: Template| {
        render_lockup(&spec.clone().with_template(template), size, catalog, opts)
    };
    match kind {
        AssetKind::Icon => render_mark(spec, size, catalog, opts),
        AssetKind::Monogram => render_monogram(spec, size, opts),
        AssetKind::Wordmark => render_wordmark(spec, size, opts),
        AssetKind::LockupLeft => lockup(Template::LeftLockup),
        AssetKind::LockupStacked => lockup(Template::Stacked),
        AssetKind::LockupBadge => lockup(Template::Badge),
    }
}

/// Renders every asset of `spec`.
///
/// The icon is produced iff an icon id is set; otherwise the monogram is.
pub fn generate_all_assets(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> AssetBundle {
    let spec = spec.clamped();
    let render = |kind| render_asset(&spec, kind, size, catalog, opts);
    let has_icon = spec.has_icon();

    AssetBundle {
        icon: has_icon.then(|| render(AssetKind::Icon)),
        wordmark: render(AssetKind::Wordmark),
        monogram: (!has_icon).then(|| render(AssetKind::Monogram)),
        lockups: Lockups {
            left: render(AssetKind::LockupLeft),
            stacked: render(AssetKind::LockupStacked),
            badge: render(AssetKind::LockupBadge),
        },
    }
}

/// Renders the primary and inverse bundles.
pub fn generate_brand_kit(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    opts: &RenderOptions,
) -> BrandKit {
    let spec = spec.clamped();
    BrandKit {
        primary: generate_all_assets(&spec, size, catalog, opts),
        inverse: generate_all_assets(&spec.inverse(), size, catalog, opts),
    }
}

/// Renders the quick-export formats at `size`.
pub fn render_formats(spec: &BrandSpec, size: f64, catalog: &IconCatalog) -> Formats {
    let spec = spec.clamped();
    let inverse = spec.inverse();
    let opts = RenderOptions::default();
    Formats {
        lockup: render_asset(&spec, AssetKind::LockupLeft, size, catalog, &opts),
        mark_only: render_mark(&spec, size, catalog, &opts),
        inverse_lockup: render_asset(&inverse, AssetKind::LockupLeft, size, catalog, &opts),
        inverse_mark_only: render_mark(&inverse, size, catalog, &opts),
    }
}

// ============================================================================
// BrandKitGenerator
// ============================================================================

/// Inputs the cached kit was rendered from.
#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    spec: BrandSpec,
    size_bits: u64,
    options: RenderOptions,
}

/// Memoizing kit generator.
///
/// Holds the catalog and the last kit it rendered. A call with the same
/// spec, size and options returns the cached kit; anything else renders
/// afresh. Replacing the catalog bumps the version and drops the cache.
#[derive(Debug, Default)]
pub struct BrandKitGenerator {
    catalog: IconCatalog,
    version: u64,
    cache: Option<(CacheKey, BrandKit)>,
}

impl BrandKitGenerator {
    pub fn new(catalog: IconCatalog) -> Self {
        Self {
            catalog,
            version: 0,
            cache: None,
        }
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Replaces the catalog and invalidates the cache.
    pub fn set_catalog(&mut self, catalog: IconCatalog) {
        self.catalog = catalog;
        self.invalidate();
    }

    /// Increments on every invalidation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drops the cached kit.
    pub fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.cache = None;
    }

    /// Returns true if a kit is cached.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Returns the kit for `spec`, rendering only if the inputs changed.
    pub fn generate(&mut self, spec: &BrandSpec, size: f64, options: RenderOptions) -> &BrandKit {
        // NaN never equals itself, so the key holds the clamped spec
        let spec = spec.clamped();
        let key = CacheKey {
            spec: spec.clone(),
            size_bits: size.to_bits(),
            options,
        };
        if self.cache.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.cache = None;
        }
        let catalog = &self.catalog;
        let (_, kit) = self.cache.get_or_insert_with(|| {
            debug!("rendering brand kit for `{}`", spec.name);
            let kit = generate_brand_kit(&spec, size, catalog, &options);
            (key, kit)
        });
        kit
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconDefinition;
    use crate::spec::{BackgroundSpec, BrandColors, GradientStop};

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn icon_xor_monogram() {
        let catalog = IconCatalog::new();

        let spec = BrandSpec::named("Acme").with_icon("shape:circle");
        let with_icon = generate_all_assets(&spec, 256.0, &catalog, &opts());
        assert!(with_icon.icon.is_some());
        assert!(with_icon.monogram.is_none());

        let without = generate_all_assets(&BrandSpec::named("Acme"), 256.0, &catalog, &opts());
        assert!(without.icon.is_none());
        assert!(without.monogram.is_some());
        assert_eq!(without.mark(), without.monogram.as_deref().unwrap());
    }

    #[test]
    fn wordmark_is_text_only() {
        let catalog = IconCatalog::new();
        let spec = BrandSpec::named("Acme").with_icon("shape:circle");
        let bundle = generate_all_assets(&spec, 256.0, &catalog, &opts());
        assert!(!bundle.wordmark.contains("<circle"));
        assert!(bundle.wordmark.contains(">Acme</text>"));
        assert!(bundle.lockups.left.contains("<circle"));
        assert!(bundle.lockups.badge.contains("#F3F4F6"));
    }

    #[test]
    fn lockups_ignore_hero_style() {
        let catalog = IconCatalog::new();
        let spec = BrandSpec::named("Acme")
            .with_icon("shape:circle")
            .with_template(Template::MarkOnly);
        let bundle = generate_all_assets(&spec, 256.0, &catalog, &opts());
        assert!(bundle.lockups.left.contains("<text"));
        assert!(bundle.lockups.stacked.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn kit_inverse_swaps_colors() {
        let catalog = IconCatalog::new();
        let mut spec = BrandSpec::named("Acme").with_icon("shape:circle");
        spec.colors = BrandColors {
            primary: "#6C5CE7".into(),
            background: "#0B0F1A".into(),
            text: "#FAFAFA".into(),
        };
        let kit = generate_brand_kit(&spec, 256.0, &catalog, &opts());
        let inverse_mark = kit.inverse.icon.as_deref().unwrap();
        assert!(inverse_mark.contains(r##"<rect width="256" height="256" fill="#FAFAFA"/>"##));
        assert!(inverse_mark.contains(r##"fill="#6C5CE7""##));
        assert!(kit.inverse.wordmark.contains(r##"fill="#0B0F1A" dominant-baseline"##));
    }

    #[test]
    fn formats_cover_both_schemes() {
        let catalog = IconCatalog::new();
        let spec = BrandSpec::named("Acme").with_icon("shape:capsule");
        let formats = render_formats(&spec, 256.0, &catalog);
        assert!(formats.lockup.contains(r#"width="100%""#));
        assert!(formats.mark_only.contains(r#"width="256""#));
        assert!(formats.inverse_mark_only.contains(r##"fill="#FFF7ED"/>"##));
    }

    #[test]
    fn generator_memoizes() {
        let mut generator = BrandKitGenerator::new(IconCatalog::new());
        let spec = BrandSpec::named("Acme").with_icon("shape:circle");

        let first = generator.generate(&spec, 256.0, opts()).clone();
        assert!(generator.is_cached());
        let second = generator.generate(&spec, 256.0, opts()).clone();
        assert_eq!(first, second);

        let other = generator.generate(&spec, 128.0, opts()).clone();
        assert_ne!(first, other);
    }

    #[test]
    fn generator_hits_cache_for_nan_params() {
        let mut generator = BrandKitGenerator::new(IconCatalog::new());
        let mut spec = BrandSpec::named("Acme")
            .with_icon("shape:circle")
            .with_background(BackgroundSpec::linear(
                135.0,
                vec![GradientStop::new("#111827", 0.0), GradientStop::new("#6C5CE7", 1.0)],
            ));
        spec.params.rotate = f64::NAN;

        // Gradient ids are fresh per render, so equal kits mean a cache hit.
        let first = generator.generate(&spec, 256.0, opts()).clone();
        let second = generator.generate(&spec, 256.0, opts()).clone();
        assert_eq!(first, second);
        assert!(first.primary.icon.as_deref().unwrap().contains("grad_"));
    }

    #[test]
    fn set_catalog_invalidates() {
        let mut generator = BrandKitGenerator::new(IconCatalog::new());
        let spec = BrandSpec::named("Acme").with_icon("custom:logo");

        let before = generator.generate(&spec, 256.0, opts()).clone();
        assert!(!before.primary.icon.as_deref().unwrap().contains("<path"));

        let mut catalog = IconCatalog::new();
        catalog
            .register(
                "custom:logo",
                IconDefinition::from_raw("0 0 24 24", r#"<path d="M2 2h20"/>"#),
            )
            .unwrap();
        let version = generator.version();
        generator.set_catalog(catalog);
        assert!(!generator.is_cached());
        assert_eq!(generator.version(), version + 1);

        let after = generator.generate(&spec, 256.0, opts());
        assert!(after.primary.icon.as_deref().unwrap().contains("<path"));
    }
}
