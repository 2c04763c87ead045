/// Convert a decoded image to an egui ColorImage (8-bit RGBA).
pub fn dynamic_to_color_image(image: &image::DynamicImage) -> egui::ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Parse a backdrop color such as `#202020` or `#000000c0`.
pub fn parse_color(s: &str) -> Option<egui::Color32> {
    egui::Color32::from_hex(s.trim()).ok()
}
