//! brandmark-renderer: procedural SVG brand identities
//!
//! This crate turns a declarative [`BrandSpec`] into self-contained SVG
//! markup: a mark, a wordmark, a monogram and three lockup layouts, plus
//! color-swapped variants and context-specific renders for favicons, app
//! icons, social avatars, headers and exports.
//!
//! Rendering is pure and total. Out-of-range parameters are clamped, and
//! unknown icons or empty gradients degrade to something drawable instead
//! of failing, so the renderers can run on every keystroke of an editor.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::{
//!     generate_all_assets, select_for_context, AssetContext, BrandSpec, IconCatalog,
//!     RenderOptions, Template,
//! };
//!
//! let spec = BrandSpec::named("Acme")
//!     .with_icon("shape:rounded-square")
//!     .with_template(Template::Stacked);
//!
//! let catalog = IconCatalog::new();
//! let bundle = generate_all_assets(&spec, 256.0, &catalog, &RenderOptions::default());
//!
//! let favicon = select_for_context(&bundle, AssetContext::Favicon, None);
//! assert_eq!(favicon.svg(), bundle.icon.as_deref());
//! ```
//!
//! # Icons
//!
//! Icons are looked up in an [`IconCatalog`] passed to every call. Besides
//! the curated built-ins, a catalog can carry icons registered at runtime
//! and a snapshot of an externally loaded set:
//!
//! ```
//! use brandmark_renderer::{IconCatalog, IconDefinition};
//!
//! let mut catalog = IconCatalog::new();
//! catalog
//!     .register("custom:wave", IconDefinition::from_raw("0 0 24 24", r#"<path d="M2 12c4-4 8 4 12 0"/>"#))
//!     .unwrap();
//!
//! // Markup that could run script is refused.
//! let bad = IconDefinition::from_raw("0 0 24 24", "<script>alert(1)</script>");
//! assert!(catalog.register("custom:bad", bad).is_err());
//! ```

pub mod bundle;
pub mod color;
pub mod compose;
pub mod context;
pub mod error;
pub mod export;
pub mod geometry;
pub mod icon;
pub mod marks;
pub mod raster;
pub mod spec;

pub use bundle::{
    generate_all_assets, generate_brand_kit, render_asset, render_formats, AssetBundle, BrandKit,
    BrandKitGenerator, Formats, Lockups,
};
pub use compose::{
    compose_lockup, compose_mark, render_lockup, render_mark, render_monogram, render_wordmark,
    Artwork, Fit, RenderOptions,
};
pub use context::{
    render_for_context, select_for_context, AssetContext, AssetKind, Presentation, Selection,
};
pub use error::{BrandError, Result};
pub use export::{
    plan_exports, render_exports, ExportFile, ExportFormat, ExportItem, ExportRequest,
    ExportTarget,
};
pub use icon::{
    resolve, ExternalIconSet, FileIconSource, IconCatalog, IconDefinition, IconPath, IconSet,
    IconSource, RenderableContent, ResolveParams, ShapeKind, StaticIconSource,
};
pub use raster::{Rasterizer, ResvgRasterizer};
pub use spec::{
    gradient_presets, BackgroundSpec, BrandColors, BrandSpec, Effect, FontFamily, GradientStop,
    Params, Template,
};
