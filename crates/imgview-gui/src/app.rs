use std::collections::HashMap;
use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use imgview_core::geometry::Size;
use imgview_core::overlay::DownloadLink;
use imgview_core::probe::local_path;
use imgview_core::{Viewer, ViewerConfig, ViewerEvent};

use crate::messages::LoadResult;
use crate::panels::{self, OverlayOutput};
use crate::surface::EguiSurface;
use crate::worker::{self, WorkerLoader};

pub struct ImgviewApp {
    viewer: Viewer<EguiSurface, WorkerLoader>,
    result_rx: mpsc::Receiver<LoadResult>,
    /// Texture of the image currently shown, keyed by source.
    textures: HashMap<String, egui::TextureHandle>,
}

impl ImgviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig, client: Size) -> imgview_core::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let loader = worker::spawn_loader(result_tx, ctx.clone());
        let viewer = Viewer::open(config, EguiSurface::new(client), loader)?;

        Ok(Self {
            viewer,
            result_rx,
            textures: HashMap::new(),
        })
    }

    /// Drain all pending results from the loader thread.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoadResult::Loaded { ticket, src, image } => {
                    let natural = Size::new(image.size[0] as f32, image.size[1] as f32);
                    let texture = ctx.load_texture(&src, image, egui::TextureOptions::LINEAR);
                    self.textures.clear();
                    self.textures.insert(src, texture);
                    self.viewer
                        .handle(ViewerEvent::ImageLoaded { ticket, natural });
                }
                LoadResult::Failed {
                    ticket,
                    src,
                    message,
                } => {
                    tracing::warn!(%src, "image load failed: {message}");
                    self.viewer.handle(ViewerEvent::ImageFailed { ticket });
                }
            }
        }
    }
}

impl eframe::App for ImgviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let client = ctx.screen_rect().size();
        self.viewer
            .surface_mut()
            .set_client_size(Size::new(client.x, client.y));

        let output = match self.viewer.surface().top() {
            Some(mounted) => panels::overlay::show(ctx, &mounted.overlay, &self.textures),
            None => OverlayOutput::default(),
        };
        for event in output.events {
            self.viewer.handle(event);
        }
        if let Some(link) = output.download {
            if let Err(err) = save_download(&link) {
                tracing::error!("{err:#}");
            }
        }

        if !self.viewer.is_open() {
            tracing::debug!(
                scroll_locked = self.viewer.surface().is_scroll_locked(),
                "overlay closed, exiting"
            );
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Copy the linked image to a location picked in a save dialog.
fn save_download(link: &DownloadLink) -> Result<()> {
    let source = local_path(&link.href)
        .ok_or_else(|| anyhow!("Cannot download {}: not a local file", link.href))?;
    let Some(dest) = rfd::FileDialog::new()
        .set_file_name(&link.filename)
        .save_file()
    else {
        return Ok(());
    };
    std::fs::copy(source, &dest)
        .with_context(|| format!("Failed to save {}", dest.display()))?;
    tracing::info!(dest = %dest.display(), "image saved");
    Ok(())
}
