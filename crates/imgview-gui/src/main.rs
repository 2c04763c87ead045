mod app;
mod convert;
mod messages;
mod panels;
mod surface;
mod worker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use imgview_core::geometry::Size;
use imgview_core::ViewerConfig;

const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

#[derive(Parser)]
#[command(name = "imgview-gui", about = "Preview images with zoom, rotation and pan")]
#[command(version)]
struct Args {
    /// Images to preview; more than one enables previous/next navigation
    images: Vec<String>,

    /// Initial image index
    #[arg(short, long, allow_negative_numbers = true)]
    index: Option<i64>,

    /// Viewer config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Close when the backdrop is clicked
    #[arg(long)]
    mask_close: bool,

    /// Show the download button
    #[arg(long)]
    download: bool,

    /// Backdrop color, e.g. "#202020"
    #[arg(long)]
    bg_color: Option<String>,
}

/// Merge command-line arguments over the config file (or defaults).
fn build_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    match args.images.as_slice() {
        [] => {}
        [single] => {
            config.src = Some(single.clone());
            config.data.clear();
        }
        many => config.data = many.to_vec(),
    }
    if let Some(index) = args.index {
        config.index = index;
    }
    config.mask_close |= args.mask_close;
    config.show_download |= args.download;
    if args.bg_color.is_some() {
        config.bg_color = args.bg_color.clone();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([640.0, 480.0])
            .with_title("imgview"),
        ..Default::default()
    };
    let client = Size::new(WINDOW_SIZE[0], WINDOW_SIZE[1]);

    eframe::run_native(
        "imgview",
        options,
        Box::new(move |cc| Ok(Box::new(app::ImgviewApp::new(&cc.egui_ctx, config, client)?))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
