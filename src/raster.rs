//! Rasterization of rendered SVG through resvg, plus PNG and ICO encoding.
//!
//! The composition engine only produces markup. Anything that needs pixels
//! goes through a [`Rasterizer`], so callers can swap in their own backend
//! (a browser canvas, a headless service) without touching the renderers.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::raster::{encode_png, Rasterizer, ResvgRasterizer};
//!
//! let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="#FF0000"/></svg>"##;
//! let image = ResvgRasterizer::new().rasterize(svg, 32).unwrap();
//! assert_eq!(image.dimensions(), (32, 32));
//!
//! let png = encode_png(&image).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

use std::io::Cursor;
use std::sync::Arc;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageFormat, Rgba, RgbaImage};
use log::debug;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{BrandError, Result};

// ============================================================================
// Rasterizer
// ============================================================================

/// Turns SVG markup into pixels.
///
/// Implementations must be deterministic and preserve the aspect ratio
/// given by the document's own viewBox.
pub trait Rasterizer {
    /// Renders `svg` scaled to `width` pixels wide.
    fn rasterize(&self, svg: &str, width: u32) -> Result<RgbaImage>;
}

/// The default rasterizer, backed by resvg.
///
/// Without system fonts `<text>` elements are skipped, which is fine for
/// marks but drops the name from lockups; use
/// [`ResvgRasterizer::with_system_fonts`] when rendering text.
pub struct ResvgRasterizer {
    options: Options<'static>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Loads the fonts installed on the host.
    pub fn with_system_fonts() -> Self {
        let mut options = Options::default();
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        debug!("loaded {} system font faces", options.fontdb.len());
        Self { options }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &str, width: u32) -> Result<RgbaImage> {
        let tree = Tree::from_str(svg, &self.options)?;

        let size = tree.size();
        let scale = width as f32 / size.width();
        let height = (size.height() * scale).ceil().max(1.0) as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or(BrandError::Pixmap { width, height })?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        Ok(pixmap_to_rgba_image(&pixmap))
    }
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        *out = Rgba([r, g, b, a]);
    }
    img
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encodes an image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes several square images into one multi-resolution ICO file.
pub fn encode_ico(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let frames = images
        .iter()
        .map(|img| {
            IcoFrame::as_png(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes).encode_images(&frames)?;
    Ok(bytes)
}

/// Rasterizes `svg` at each size and packs the results into an ICO file.
pub fn render_ico(rasterizer: &dyn Rasterizer, svg: &str, sizes: &[u32]) -> Result<Vec<u8>> {
    let images = sizes
        .iter()
        .map(|&size| rasterizer.rasterize(svg, size))
        .collect::<Result<Vec<_>>>()?;
    encode_ico(&images)
}

// ============================================================================
// Tests
// ============================================================================
