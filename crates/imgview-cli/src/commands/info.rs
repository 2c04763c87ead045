use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use imgview_core::fit::{fit_image, Viewport};
use imgview_core::geometry::Size;
use imgview_core::probe::natural_size;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Client width used to compute the fitted size
    #[arg(long, default_value_t = 1920.0)]
    pub client_width: f32,

    /// Client height used to compute the fitted size
    #[arg(long, default_value_t = 1080.0)]
    pub client_height: f32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let path_style = Style::new().underlined();

    let viewport = Viewport::from_client(Size::new(args.client_width, args.client_height));
    println!(
        "{:<13}{}x{}",
        label.apply_to("Viewport:"),
        viewport.width,
        viewport.height
    );

    for file in &args.files {
        let natural = natural_size(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        println!();
        println!("{:<13}{}", label.apply_to("File:"), path_style.apply_to(file.display()));
        println!(
            "{:<13}{}",
            label.apply_to("Dimensions:"),
            value.apply_to(format!("{}x{}", natural.width, natural.height))
        );
        match fit_image(natural, viewport) {
            Some(fit) => {
                let shown = fit.displayed(natural);
                println!(
                    "{:<13}{}",
                    label.apply_to("Fitted:"),
                    value.apply_to(format!("{:.0}x{:.0}", shown.width, shown.height))
                );
            }
            None => println!("{:<13}-", label.apply_to("Fitted:")),
        }
    }

    Ok(())
}
