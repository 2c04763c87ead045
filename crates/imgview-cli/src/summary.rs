use std::path::Path;

use console::Style;
use imgview_core::ViewerConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    enabled: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            enabled: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    fn toggle(&self, on: bool) -> String {
        if on {
            self.enabled.apply_to("on").to_string()
        } else {
            self.disabled.apply_to("off").to_string()
        }
    }
}

pub fn print_config_summary(path: &Path, config: &ViewerConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Viewer Config"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("File"), s.path.apply_to(path.display()));

    if config.is_gallery() {
        println!(
            "  {:<14}{} images, starting at {}",
            s.label.apply_to("Gallery"),
            s.value.apply_to(config.data.len()),
            s.value.apply_to(config.index)
        );
        for src in &config.data {
            println!("  {:<14}{}", "", s.path.apply_to(src));
        }
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.path.apply_to(config.source_at(0))
        );
    }

    println!(
        "  {:<14}{} .. {}",
        s.label.apply_to("Scale"),
        s.value.apply_to(config.min_scale),
        s.value.apply_to(config.max_scale)
    );
    println!("  {:<14}{}", s.label.apply_to("Zoom"), s.toggle(config.show_scale));
    println!("  {:<14}{}", s.label.apply_to("Rotate"), s.toggle(config.show_rotate));
    println!("  {:<14}{}", s.label.apply_to("Download"), s.toggle(config.show_download));
    println!("  {:<14}{}", s.label.apply_to("Close icon"), s.toggle(config.show_close));
    println!("  {:<14}{}", s.label.apply_to("Mask close"), s.toggle(config.mask_close));

    if let Some(ref parent) = config.parent {
        println!("  {:<14}{}", s.label.apply_to("Parent"), s.value.apply_to(parent));
    }
    if let Some(ref color) = config.bg_color {
        println!("  {:<14}{}", s.label.apply_to("Background"), s.value.apply_to(color));
    }
    println!();
}
