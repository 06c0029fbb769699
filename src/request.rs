use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MealError, Result};

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted image extensions and their MIME types.
const IMAGE_TYPES: [(&str, &str); 4] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

/// A validated meal photo on disk.
///
/// Only its presence matters to analysis; the pixels are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    path: PathBuf,
    mime_type: &'static str,
    size: u64,
}

impl ImageRef {
    /// Validate type (by extension) and size of an image file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let mime_type = IMAGE_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| *mime)
            .ok_or_else(|| MealError::UnsupportedImageType(path.display().to_string()))?;

        let size = fs::metadata(path)?.len();
        if size > MAX_IMAGE_BYTES {
            return Err(MealError::ImageTooLarge {
                size,
                max: MAX_IMAGE_BYTES,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            mime_type,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// What the user submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRequest {
    text: String,
    image: Option<ImageRef>,
}

impl MealRequest {
    /// Build a request; needs non-blank text or an image.
    pub fn new(text: impl Into<String>, image: Option<ImageRef>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() && image.is_none() {
            return Err(MealError::EmptyRequest);
        }
        Ok(Self { text, image })
    }

    /// Query handed to the analyzer.
    pub fn query(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_image(suffix: &str, bytes: usize) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        file
    }

    #[test]
    fn test_accepts_supported_types() {
        let png = temp_image(".png", 16);
        let image = ImageRef::from_path(png.path()).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.size(), 16);

        let jpg = temp_image(".JPG", 16);
        assert_eq!(ImageRef::from_path(jpg.path()).unwrap().mime_type(), "image/jpeg");
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let gif = temp_image(".gif", 16);
        let err = ImageRef::from_path(gif.path()).unwrap_err();
        assert!(matches!(err, MealError::UnsupportedImageType(_)));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let big = temp_image(".webp", MAX_IMAGE_BYTES as usize + 1);
        let err = ImageRef::from_path(big.path()).unwrap_err();
        assert!(matches!(
            err,
            MealError::ImageTooLarge { size, max } if size == MAX_IMAGE_BYTES + 1 && max == MAX_IMAGE_BYTES
        ));
    }

    #[test]
    fn test_accepts_image_at_limit() {
        let exact = temp_image(".jpeg", MAX_IMAGE_BYTES as usize);
        assert!(ImageRef::from_path(exact.path()).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ImageRef::from_path("/nonexistent/meal.png").unwrap_err();
        assert!(matches!(err, MealError::Io(_)));
    }

    #[test]
    fn test_request_needs_text_or_image() {
        assert!(matches!(
            MealRequest::new("   ", None),
            Err(MealError::EmptyRequest)
        ));

        let request = MealRequest::new("dosa", None).unwrap();
        assert_eq!(request.query(), "dosa");
        assert!(request.image().is_none());
    }

    #[test]
    fn test_image_only_request() {
        let png = temp_image(".png", 8);
        let image = ImageRef::from_path(png.path()).unwrap();
        let request = MealRequest::new("", Some(image)).unwrap();
        assert_eq!(request.query(), "");
        assert!(request.image().is_some());
    }
}
