//! Product image files kept next to the database.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

pub const DEFAULT_IMAGE_DIR: &str = "product_images";
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Every stored image is scaled to exactly this canvas.
pub const IMAGE_WIDTH: u32 = 300;
pub const IMAGE_HEIGHT: u32 = 200;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image type '{0}', expected png, jpg, jpeg, bmp or gif")]
    UnsupportedType(String),
    #[error("Image file {0} does not exist")]
    Missing(PathBuf),
    #[error("Article '{0}' cannot be used as an image file name")]
    InvalidName(String),
    #[error("Could not read image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Failed to store image: {0}")]
    Io(#[from] io::Error),
}

/// A source image already decoded and scaled, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    image: DynamicImage,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Checks the extension and that the file exists.
    pub fn check(&self, source: &Path) -> Result<(), ImageError> {
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImageError::UnsupportedType(ext));
        }
        if !source.is_file() {
            return Err(ImageError::Missing(source.to_path_buf()));
        }
        Ok(())
    }

    /// Decodes `source` and scales it to the fixed canvas. Touches nothing on disk.
    pub fn prepare(&self, source: &Path) -> Result<PreparedImage, ImageError> {
        self.check(source)?;
        let image = image::open(source)?;
        Ok(PreparedImage {
            image: image.resize_exact(IMAGE_WIDTH, IMAGE_HEIGHT, FilterType::Triangle),
        })
    }

    /// Where the image of `article` lives: `product_{article}.png`, `product_new.png` for a blank article.
    pub fn target_path(&self, article: &str) -> Result<PathBuf, ImageError> {
        let stem = match article.trim() {
            "" => "new",
            a if is_safe_stem(a) => a,
            a => return Err(ImageError::InvalidName(a.to_string())),
        };
        Ok(self.dir.join(format!("product_{stem}.png")))
    }

    /// Writes a prepared image to `target`, replacing any existing file.
    pub fn write(&self, prepared: &PreparedImage, target: &Path) -> Result<(), ImageError> {
        fs::create_dir_all(&self.dir)?;
        prepared.image.save_with_format(target, ImageFormat::Png)?;
        log::info!("stored image {}", target.display());
        Ok(())
    }

    /// Best-effort removal of a previously stored image.
    pub fn remove(&self, stored: &str) {
        if let Err(e) = fs::remove_file(stored) {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("could not remove image {stored}: {e}");
            }
        }
    }
}

/// Letters, digits, `-`, `_` and single dots; never a path.
pub fn is_safe_stem(stem: &str) -> bool {
    !stem.contains("..")
        && stem
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
