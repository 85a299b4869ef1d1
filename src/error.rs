//! Error type for the fallible edges of the crate.
//!
//! Rendering itself never fails: unknown icons, empty gradients and
//! out-of-range parameters degrade silently. Only parsing input, reading
//! icon sets, registering markup and rasterizing can return an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::icon::MarkupError;

/// Errors returned by I/O, parsing and rasterization entry points.
#[derive(Debug, Error)]
pub enum BrandError {
    /// A brand spec or icon set was not valid JSON for its schema.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An icon definition failed the markup allowlist.
    #[error("icon `{id}` contains unsafe markup: {source}")]
    UnsafeMarkup {
        id: String,
        #[source]
        source: MarkupError,
    },

    /// An icon source could not produce its data.
    #[error("icon source unavailable: {0}")]
    SourceUnavailable(String),

    /// The rasterizer could not parse the SVG it was handed.
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// The requested raster size could not be allocated.
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    /// PNG or ICO encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, BrandError>;
