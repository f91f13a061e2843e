//! Asset Loading
//!
//! Load an image from disk and scale it to a fixed size, or substitute a
//! solid-color placeholder when the file does not exist.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

/// RGBA color, 8 bits per channel.
pub type Color = [u8; 4];

/// Errors from asset loading.
///
/// A missing file is not an error; it yields a placeholder.
#[derive(Debug, Error)]
pub enum AssetError {
    /// File exists but could not be decoded
    #[error("failed to decode {path}: {source}")]
    Decode {
        /// Offending file
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// Requested size has no area
    #[error("invalid image size {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Where a loaded image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Decoded from this file
    File(PathBuf),
    /// Solid-color fill
    Placeholder,
}

/// An RGBA image of the requested size.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Pixel data
    pub image: RgbaImage,
    /// Origin of the pixels
    pub source: AssetSource,
}

impl LoadedImage {
    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True if this is a placeholder fill.
    pub fn is_placeholder(&self) -> bool {
        self.source == AssetSource::Placeholder
    }
}

/// Solid-color image of the given size.
pub fn placeholder(size: (u32, u32), color: Color) -> RgbaImage {
    RgbaImage::from_pixel(size.0, size.1, Rgba(color))
}

/// Load `path` scaled to `size`, or a `color` placeholder if it is missing.
pub fn load_or_placeholder(
    path: &Path,
    size: (u32, u32),
    color: Color,
) -> Result<LoadedImage, AssetError> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidSize { width, height });
    }

    if !path.exists() {
        debug!("{} not found, using {}x{} placeholder", path.display(), width, height);
        return Ok(LoadedImage {
            image: placeholder(size, color),
            source: AssetSource::Placeholder,
        });
    }

    let decoded = image::open(path)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();

    let image = if decoded.dimensions() == size {
        decoded
    } else {
        imageops::resize(&decoded, width, height, FilterType::Triangle)
    };

    info!("Loaded {} scaled to {}x{}", path.display(), width, height);

    Ok(LoadedImage {
        image,
        source: AssetSource::File(path.to_path_buf()),
    })
}
