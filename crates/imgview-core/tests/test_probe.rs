use std::path::Path;

use image::{Rgb, RgbImage};

use imgview_core::geometry::Size;
use imgview_core::probe::{local_path, natural_size};

#[test]
fn test_natural_size_reads_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.png");
    RgbImage::from_pixel(40, 20, Rgb([10, 20, 30])).save(&path).unwrap();
    assert_eq!(natural_size(&path).unwrap(), Size::new(40.0, 20.0));
}

#[test]
fn test_natural_size_missing_file_errors() {
    assert!(natural_size(Path::new("/nonexistent/none.png")).is_err());
}

#[test]
fn test_local_path_resolution() {
    assert_eq!(local_path("photos/a.png"), Some(Path::new("photos/a.png")));
    assert_eq!(local_path("file:///tmp/a.png"), Some(Path::new("/tmp/a.png")));
    assert_eq!(local_path("https://example.com/a.png"), None);
    assert_eq!(local_path("data:image/png;base64,AAAA"), None);
}
