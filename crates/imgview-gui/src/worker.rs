use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use imgview_core::probe::local_path;
use imgview_core::surface::{ImageLoader, LoadTicket};

use crate::convert::dynamic_to_color_image;
use crate::messages::{LoadRequest, LoadResult};

/// [`ImageLoader`] that hands requests to the loader thread.
pub struct WorkerLoader {
    cmd_tx: mpsc::Sender<LoadRequest>,
}

impl ImageLoader for WorkerLoader {
    fn request(&mut self, ticket: LoadTicket, src: &str) {
        let request = LoadRequest {
            ticket,
            src: src.to_string(),
        };
        if self.cmd_tx.send(request).is_err() {
            tracing::warn!(src, "loader thread is gone, image will not load");
        }
    }
}

/// Spawn the loader thread. Returns the loader handle for the viewer.
pub fn spawn_loader(result_tx: mpsc::Sender<LoadResult>, ctx: egui::Context) -> WorkerLoader {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoadRequest>();

    std::thread::Builder::new()
        .name("imgview-loader".into())
        .spawn(move || {
            loader_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn loader thread");

    WorkerLoader { cmd_tx }
}

fn loader_loop(
    cmd_rx: mpsc::Receiver<LoadRequest>,
    result_tx: mpsc::Sender<LoadResult>,
    ctx: egui::Context,
) {
    while let Ok(LoadRequest { ticket, src }) = cmd_rx.recv() {
        let result = match decode(&src) {
            Ok(image) => LoadResult::Loaded { ticket, src, image },
            Err(err) => LoadResult::Failed {
                ticket,
                src,
                message: format!("{err:#}"),
            },
        };
        if result_tx.send(result).is_err() {
            break;
        }
        ctx.request_repaint();
    }
}

fn decode(src: &str) -> Result<egui::ColorImage> {
    let path = local_path(src).ok_or_else(|| anyhow!("not a local file: {src}"))?;
    let image = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok(dynamic_to_color_image(&image))
}
