//! Picking the right asset for where it will be shown.
//!
//! Each [`AssetContext`] has a preference order over the assets of a
//! bundle:
//!
//! | Context          | Preference                               |
//! |------------------|------------------------------------------|
//! | `favicon`        | icon → monogram → wordmark               |
//! | `app-icon`       | icon → monogram → wordmark               |
//! | `social-avatar`  | icon → monogram                          |
//! | `website-header` | left lockup, or wordmark without an icon |
//! | `business-card`  | left lockup                              |
//! | `hero-preview`   | the asset matching the hero style        |
//! | `export`         | the whole bundle                         |
//!
//! [`Presentation`] carries the matching crop policy so callers never
//! rewrite markup after the fact.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bundle::{render_asset, AssetBundle};
use crate::color::needs_keyline;
use crate::compose::{Fit, RenderOptions};
use crate::icon::IconCatalog;
use crate::spec::{BrandSpec, Template};

// ============================================================================
// Types
// ============================================================================

/// A named consumption scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AssetContext {
    Favicon,
    AppIcon,
    SocialAvatar,
    WebsiteHeader,
    BusinessCard,
    HeroPreview,
    Export,
}

impl AssetContext {
    pub const ALL: [AssetContext; 7] = [
        Self::Favicon,
        Self::AppIcon,
        Self::SocialAvatar,
        Self::WebsiteHeader,
        Self::BusinessCard,
        Self::HeroPreview,
        Self::Export,
    ];

    /// The asset this context shows, given what is available.
    ///
    /// `None` for [`AssetContext::Export`], which takes the whole bundle.
    pub fn preferred_kind(
        self,
        assets: &impl AssetAvailability,
        hero: Option<Template>,
    ) -> Option<AssetKind> {
        let first_available = |order: &[AssetKind]| order.iter().copied().find(|k| assets.has(*k));
        match self {
            Self::Favicon | Self::AppIcon => {
                first_available(&[AssetKind::Icon, AssetKind::Monogram, AssetKind::Wordmark])
            }
            Self::SocialAvatar => {
                first_available(&[AssetKind::Icon, AssetKind::Monogram]).or_else(|| {
                    debug!("social avatar has neither icon nor monogram, using wordmark");
                    Some(AssetKind::Wordmark)
                })
            }
            Self::WebsiteHeader => Some(if assets.has(AssetKind::Icon) {
                AssetKind::LockupLeft
            } else {
                AssetKind::Wordmark
            }),
            Self::BusinessCard => Some(AssetKind::LockupLeft),
            Self::HeroPreview => {
                let kind = AssetKind::for_template(hero.unwrap_or_default());
                if assets.has(kind) {
                    Some(kind)
                } else {
                    first_available(&[AssetKind::Monogram, AssetKind::Wordmark])
                }
            }
            Self::Export => None,
        }
    }
}

/// One asset of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Icon,
    Monogram,
    Wordmark,
    LockupLeft,
    LockupStacked,
    LockupBadge,
}

impl AssetKind {
    /// The asset that previews a hero style.
    pub fn for_template(template: Template) -> Self {
        match template {
            Template::MarkOnly => Self::Icon,
            Template::LeftLockup => Self::LockupLeft,
            Template::Stacked => Self::LockupStacked,
            Template::Badge => Self::LockupBadge,
        }
    }
}

/// Something that knows which assets exist.
///
/// Implemented by [`AssetBundle`] and by [`BrandSpec`], so the selection
/// policy can run before anything is rendered.
pub trait AssetAvailability {
    fn has(&self, kind: AssetKind) -> bool;
}

impl AssetAvailability for AssetBundle {
    fn has(&self, kind: AssetKind) -> bool {
        self.get(kind).is_some()
    }
}

impl AssetAvailability for BrandSpec {
    fn has(&self, kind: AssetKind) -> bool {
        match kind {
            AssetKind::Icon => self.has_icon(),
            AssetKind::Monogram => !self.has_icon(),
            _ => true,
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Result of [`select_for_context`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Svg(&'a str),
    Bundle(&'a AssetBundle),
}

impl<'a> Selection<'a> {
    /// The selected markup, `None` for a whole bundle.
    pub fn svg(&self) -> Option<&'a str> {
        match *self {
            Self::Svg(svg) => Some(svg),
            Self::Bundle(_) => None,
        }
    }
}

/// Picks the asset of `bundle` that `context` should show.
///
/// `hero` only matters for [`AssetContext::HeroPreview`] and defaults to
/// the left lockup.
pub fn select_for_context(
    bundle: &AssetBundle,
    context: AssetContext,
    hero: Option<Template>,
) -> Selection<'_> {
    if context == AssetContext::Export {
        return Selection::Bundle(bundle);
    }
    let svg = context
        .preferred_kind(bundle, hero)
        .and_then(|kind| bundle.get(kind))
        .unwrap_or(&bundle.wordmark);
    Selection::Svg(svg)
}

// ============================================================================
// Presentation
// ============================================================================

/// How a context frames its asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub fit: Fit,
    pub fluid: bool,
    pub include_background: bool,
    /// The frame is light enough that it needs a thin outline to stay
    /// visible on white pages. Square marks draw it in
    /// [`KEYLINE_COLOR`](crate::color::KEYLINE_COLOR).
    pub keyline: bool,
}

impl Presentation {
    pub fn for_context(context: AssetContext, spec: &BrandSpec) -> Self {
        let square = matches!(
            context,
            AssetContext::Favicon | AssetContext::AppIcon | AssetContext::SocialAvatar
        );
        let frame = spec.background.flat_color(&spec.colors.background);
        Self {
            fit: if context == AssetContext::AppIcon {
                Fit::Slice
            } else {
                Fit::Meet
            },
            fluid: true,
            include_background: true,
            keyline: square && needs_keyline(frame),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fit: self.fit,
            include_background: self.include_background,
            fluid: self.fluid,
            keyline: self.keyline,
        }
    }
}

/// Renders the asset `context` shows for `spec`, framed for that context.
///
/// Only the selected asset is composed. Returns `None` for
/// [`AssetContext::Export`].
pub fn render_for_context(
    spec: &BrandSpec,
    size: f64,
    catalog: &IconCatalog,
    context: AssetContext,
    include_background: bool,
) -> Option<String> {
    let kind = context.preferred_kind(spec, Some(spec.hero_style))?;
    let presentation = Presentation::for_context(context, spec);
    let opts = RenderOptions {
        include_background,
        // without its own frame the mark sits on the caller's
        keyline: presentation.keyline && include_background,
        ..presentation.render_options()
    };
    Some(render_asset(spec, kind, size, catalog, &opts))
}

// ============================================================================
// Tests
// ============================================================================
