//! The downloadable brand kit: which files it contains and how each one is
//! produced.
//!
//! [`plan_exports`] lists every file for a request without rendering
//! anything, so a UI can show the contents up front. [`render_exports`]
//! then produces the bytes. Packaging them into an archive is left to the
//! caller.
//!
//! ```text
//! logo/    logo-mark.svg, logo-horizontal.svg (+ -inverse), PNG scales
//! web/     favicons, apple-touch-icon.png, favicon.ico, site.webmanifest, og-image.png
//! ios/     icon-20.png … icon-1024.png
//! android/ icon-<px>-<density>.png, maskable-icon-512.png
//! tokens/  brand.json, tailwind.brand.config.snippet.js
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::bundle::render_asset;
use crate::compose::{compose_lockup, render_monogram, RenderOptions};
use crate::context::AssetKind;
use crate::error::Result;
use crate::geometry::{escape_attr, fmt};
use crate::icon::IconCatalog;
use crate::marks::create_slug;
use crate::raster::{encode_png, render_ico, Rasterizer};
use crate::spec::{BrandSpec, Template};

/// Nominal size every exported asset is composed at before scaling.
const BASE_SIZE: f64 = 256.0;

const OG_WIDTH: f64 = 1200.0;
const OG_HEIGHT: f64 = 630.0;
/// Box the lockup is fitted into on the OG image.
const OG_LOCKUP_BOX: (f64, f64) = (1024.0, 256.0);

const FAVICON_SIZES: [u32; 5] = [16, 32, 48, 192, 512];
const ICO_SIZES: [u32; 3] = [16, 32, 48];
const APPLE_TOUCH_SIZE: u32 = 180;
const IOS_SIZES: [(&str, u32); 7] = [
    ("20", 20),
    ("29", 29),
    ("40", 40),
    ("60", 60),
    ("76", 76),
    ("83_5", 84),
    ("1024", 1024),
];
const ANDROID_SIZES: [(u32, &str); 5] = [
    (48, "mdpi"),
    (72, "hdpi"),
    (96, "xhdpi"),
    (144, "xxhdpi"),
    (192, "xxxhdpi"),
];
const MASKABLE_SIZE: u32 = 512;

// ============================================================================
// Request
// ============================================================================

/// A platform the kit should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportTarget {
    Web,
    Ios,
    Android,
    Og,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 4] = [Self::Web, Self::Ios, Self::Android, Self::Og];
}

/// File format of the logo files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [Self::Svg, Self::Png];
}

/// What to include in a kit. Both lists default to everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ExportRequest {
    pub targets: Vec<ExportTarget>,
    pub formats: Vec<ExportFormat>,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            targets: ExportTarget::ALL.to_vec(),
            formats: ExportFormat::ALL.to_vec(),
        }
    }
}

impl ExportRequest {
    fn has_target(&self, target: ExportTarget) -> bool {
        self.targets.contains(&target)
    }

    fn has_format(&self, format: ExportFormat) -> bool {
        self.formats.contains(&format)
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Artwork an exported file is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportArtwork {
    /// The square mark: icon, or monogram without one.
    Mark,
    /// The left lockup.
    Lockup,
    InverseMark,
    InverseLockup,
    /// The lockup centered on a 1200×630 social card.
    OgImage,
}

/// How one file's bytes are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportContent {
    Svg(ExportArtwork),
    Png { artwork: ExportArtwork, width: u32 },
    Ico { sizes: Vec<u32> },
    WebManifest,
    BrandTokens,
    TailwindSnippet,
}

/// One planned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    /// Path inside the kit, `/`-separated.
    pub path: String,
    pub content: ExportContent,
}

impl ExportItem {
    fn new(path: impl Into<String>, content: ExportContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    fn png(path: impl Into<String>, artwork: ExportArtwork, width: u32) -> Self {
        Self::new(path, ExportContent::Png { artwork, width })
    }
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Lists every file of the kit, in archive order.
pub fn plan_exports(request: &ExportRequest) -> Vec<ExportItem> {
    use ExportArtwork::*;
    let mut items = Vec::new();

    if request.has_format(ExportFormat::Svg) {
        items.push(ExportItem::new("logo/logo-mark.svg", ExportContent::Svg(Mark)));
        items.push(ExportItem::new("logo/logo-horizontal.svg", ExportContent::Svg(Lockup)));
        items.push(ExportItem::new("logo/logo-mark-inverse.svg", ExportContent::Svg(InverseMark)));
        items.push(ExportItem::new(
            "logo/logo-horizontal-inverse.svg",
            ExportContent::Svg(InverseLockup),
        ));
    }

    if request.has_format(ExportFormat::Png) {
        items.push(ExportItem::png("logo/logo-mark-256.png", Mark, 256));
        items.push(ExportItem::png("logo/logo-mark-512.png", Mark, 512));
        items.push(ExportItem::png("logo/logo-horizontal-1200.png", Lockup, 1200));
    }

    if request.has_target(ExportTarget::Web) {
        for size in FAVICON_SIZES {
            items.push(ExportItem::png(format!("web/favicon-{size}.png"), Mark, size));
        }
        items.push(ExportItem::png("web/apple-touch-icon.png", Mark, APPLE_TOUCH_SIZE));
        items.push(ExportItem::new(
            "web/favicon.ico",
            ExportContent::Ico {
                sizes: ICO_SIZES.to_vec(),
            },
        ));
        items.push(ExportItem::new("web/site.webmanifest", ExportContent::WebManifest));
    }

    if request.has_target(ExportTarget::Ios) {
        for (label, size) in IOS_SIZES {
            items.push(ExportItem::png(format!("ios/icon-{label}.png"), Mark, size));
        }
    }

    if request.has_target(ExportTarget::Android) {
        for (size, density) in ANDROID_SIZES {
            items.push(ExportItem::png(format!("android/icon-{size}-{density}.png"), Mark, size));
        }
        items.push(ExportItem::png("android/maskable-icon-512.png", Mark, MASKABLE_SIZE));
    }

    if request.has_target(ExportTarget::Og) {
        items.push(ExportItem::png("web/og-image.png", OgImage, OG_WIDTH as u32));
    }

    items.push(ExportItem::new("tokens/brand.json", ExportContent::BrandTokens));
    items.push(ExportItem::new(
        "tokens/tailwind.brand.config.snippet.js",
        ExportContent::TailwindSnippet,
    ));
    items
}

/// Suggested archive file name, e.g. `acme-brandkit.zip`.
pub fn archive_name(spec: &BrandSpec) -> String {
    let slug = create_slug(&spec.name);
    if slug.is_empty() {
        "brandkit.zip".to_string()
    } else {
        format!("{slug}-brandkit.zip")
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// The square mark used for icons: the icon, or the monogram without one.
fn square_mark(spec: &BrandSpec, catalog: &IconCatalog, opts: &RenderOptions) -> String {
    if spec.has_icon() {
        render_asset(spec, AssetKind::Icon, BASE_SIZE, catalog, opts)
    } else {
        render_monogram(spec, BASE_SIZE, opts)
    }
}

fn render_artwork(spec: &BrandSpec, catalog: &IconCatalog, artwork: ExportArtwork) -> String {
    let opts = RenderOptions::default();
    match artwork {
        ExportArtwork::Mark => square_mark(spec, catalog, &opts),
        ExportArtwork::Lockup => {
            render_asset(spec, AssetKind::LockupLeft, BASE_SIZE, catalog, &opts)
        }
        ExportArtwork::InverseMark => square_mark(&spec.inverse(), catalog, &opts),
        ExportArtwork::InverseLockup => {
            render_asset(&spec.inverse(), AssetKind::LockupLeft, BASE_SIZE, catalog, &opts)
        }
        ExportArtwork::OgImage => og_image_svg(spec, catalog),
    }
}

/// Renders every planned file.
///
/// Artwork is composed once per kind and reused across sizes; rasterizer
/// and encoder failures abort the export.
pub fn render_exports(
    spec: &BrandSpec,
    catalog: &IconCatalog,
    rasterizer: &dyn Rasterizer,
    request: &ExportRequest,
) -> Result<Vec<ExportFile>> {
    let spec = spec.clamped();
    let mut svgs: Vec<(ExportArtwork, String)> = Vec::new();
    let mut svg_for = |artwork: ExportArtwork| -> String {
        if let Some((_, svg)) = svgs.iter().find(|(a, _)| *a == artwork) {
            return svg.clone();
        }
        let svg = render_artwork(&spec, catalog, artwork);
        svgs.push((artwork, svg.clone()));
        svg
    };

    let plan = plan_exports(request);
    let mut files = Vec::with_capacity(plan.len());
    for item in plan {
        debug!("exporting {}", item.path);
        let bytes = match &item.content {
            ExportContent::Svg(artwork) => svg_for(*artwork).into_bytes(),
            ExportContent::Png { artwork, width } => {
                encode_png(&rasterizer.rasterize(&svg_for(*artwork), *width)?)?
            }
            ExportContent::Ico { sizes } => {
                render_ico(rasterizer, &svg_for(ExportArtwork::Mark), sizes)?
            }
            ExportContent::WebManifest => web_manifest(&spec)?.into_bytes(),
            ExportContent::BrandTokens => brand_tokens(&spec)?.into_bytes(),
            ExportContent::TailwindSnippet => tailwind_snippet(&spec).into_bytes(),
        };
        files.push(ExportFile {
            path: item.path,
            bytes,
        });
    }
    Ok(files)
}

// ============================================================================
// Text Artifacts
// ============================================================================

fn display_name(spec: &BrandSpec) -> &str {
    let name = spec.name.trim();
    if name.is_empty() { "Brand" } else { name }
}

/// The PWA `site.webmanifest`.
pub fn web_manifest(spec: &BrandSpec) -> Result<String> {
    let name = display_name(spec);
    let manifest = json!({
        "name": name,
        "short_name": name,
        "description": format!("{name} brand assets"),
        "start_url": "/",
        "display": "standalone",
        "theme_color": spec.colors.primary,
        "background_color": spec.colors.background,
        "icons": [
            { "src": "favicon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "favicon-512.png", "sizes": "512x512", "type": "image/png" },
            {
                "src": "favicon-512.png",
                "sizes": "512x512",
                "type": "image/png",
                "purpose": "maskable"
            }
        ]
    });
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Design tokens for the brand as JSON.
pub fn brand_tokens(spec: &BrandSpec) -> Result<String> {
    let tokens = json!({
        "version": spec.version,
        "name": spec.name,
        "initial": spec.effective_initial(),
        "color": {
            "primary": spec.colors.primary,
            "background": spec.colors.background,
            "text": spec.colors.text,
        },
        "background": spec.background,
        "font": spec.font,
        "iconId": spec.icon_id,
        "params": spec.params,
    });
    Ok(serde_json::to_string_pretty(&tokens)?)
}

/// A `theme.extend` snippet for `tailwind.config.js`.
pub fn tailwind_snippet(spec: &BrandSpec) -> String {
    format!(
        r#"// Brand-specific Tailwind CSS configuration
// Add this to your tailwind.config.js theme.extend section

module.exports = {{
  theme: {{
    extend: {{
      colors: {{
        brand: {{
          primary: '{primary}',
          background: '{background}',
          text: '{text}'
        }}
      }},
      fontFamily: {{
        brand: ['{font}', 'system-ui', 'sans-serif']
      }}
    }}
  }}
}};
"#,
        primary = spec.colors.primary,
        background = spec.colors.background,
        text = spec.colors.text,
        font = spec.font.name(),
    )
}

/// A 1200×630 social card with the left lockup fitted into a 1024×256 box
/// at its center.
pub fn og_image_svg(spec: &BrandSpec, catalog: &IconCatalog) -> String {
    let spec = spec.clone().with_template(Template::LeftLockup);
    let lockup = compose_lockup(&spec, BASE_SIZE, catalog, &RenderOptions::default());
    let (box_w, box_h) = OG_LOCKUP_BOX;
    let scale = (box_w / lockup.width).min(box_h / lockup.height);
    let x = (OG_WIDTH - lockup.width * scale) / 2.0;
    let y = (OG_HEIGHT - lockup.height * scale) / 2.0;
    format!(
        concat!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
            r#"<g transform="translate({x}, {y}) scale({s})">{body}</g>"#,
            "</svg>"
        ),
        w = fmt(OG_WIDTH),
        h = fmt(OG_HEIGHT),
        bg = escape_attr(spec.background.flat_color(&spec.colors.background)),
        x = fmt(x),
        y = fmt(y),
        s = fmt(scale),
        body = lockup.body,
    )
}

// ============================================================================
// Tests
// ============================================================================
