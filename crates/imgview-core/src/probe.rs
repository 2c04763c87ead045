use std::path::Path;

use crate::error::Result;
use crate::geometry::Size;

/// Read an image file's natural size without decoding its pixels.
pub fn natural_size(path: &Path) -> Result<Size> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(Size::new(width as f32, height as f32))
}

/// Resolve an image source to a local path. `file://` URLs are stripped;
/// anything else with a scheme is not a local file.
pub fn local_path(src: &str) -> Option<&Path> {
    if let Some(rest) = src.strip_prefix("file://") {
        return Some(Path::new(rest));
    }
    if src.contains("://") || src.starts_with("data:") {
        return None;
    }
    Some(Path::new(src))
}
