use std::collections::HashMap;

use egui::{Color32, CursorIcon, Id, Rect, Sense, Vec2};
use imgview_core::consts::PLACEHOLDER_WIDTH;
use imgview_core::fit::FitSize;
use imgview_core::geometry::Point;
use imgview_core::overlay::{ClickTarget, DisplaySize, ImageSource, ImageView, Overlay};
use imgview_core::session::Cursor;
use imgview_core::ViewerEvent;

use super::controls::{show_close_icon, show_control_bar};
use super::OverlayOutput;
use crate::convert::parse_color;

const DEFAULT_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 200);

/// Draw `overlay` and collect the viewer events produced by user input.
pub fn show(
    ctx: &egui::Context,
    overlay: &Overlay,
    textures: &HashMap<String, egui::TextureHandle>,
) -> OverlayOutput {
    let mut out = OverlayOutput::default();
    let backdrop = overlay
        .background
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(DEFAULT_BACKDROP);

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(backdrop))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            // Allocated first so every later widget sits above it: a click only
            // reaches the backdrop when nothing else is under the pointer.
            let backdrop_response = ui.interact(rect, Id::new("imgview-backdrop"), Sense::click());
            let image_clicked = show_image(ui, rect, &overlay.image, textures, &mut out);
            if backdrop_response.clicked() && !image_clicked {
                out.events.push(ViewerEvent::Click(ClickTarget::Backdrop));
            }
        });

    show_control_bar(ctx, overlay, &mut out);
    if overlay.show_close {
        show_close_icon(ctx, &mut out);
    }

    if ctx.input(|i| i.pointer.any_released()) {
        out.events.push(ViewerEvent::PointerUp);
    }
    out
}

fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Unscaled on-screen size of the image for its display state.
fn base_size(size: DisplaySize, texture_size: Vec2) -> Vec2 {
    let follow_ratio = |width: f32| Vec2::new(width, width * texture_size.y / texture_size.x);
    match size {
        DisplaySize::Placeholder { width } => follow_ratio(width),
        DisplaySize::Fitted(FitSize::FullWidth { width }) => follow_ratio(width),
        DisplaySize::Fitted(FitSize::Exact(size)) => Vec2::new(size.width, size.height),
    }
}

/// Paint the image (or the loading spinner) and map pointer input to events.
/// Returns whether the image itself was clicked.
fn show_image(
    ui: &mut egui::Ui,
    rect: Rect,
    image: &ImageView,
    textures: &HashMap<String, egui::TextureHandle>,
    out: &mut OverlayOutput,
) -> bool {
    let texture = match &image.source {
        ImageSource::Loaded(src) => textures.get(src),
        ImageSource::Placeholder => None,
    };
    let Some(texture) = texture else {
        let width = match image.size {
            DisplaySize::Placeholder { width } => width,
            DisplaySize::Fitted(_) => PLACEHOLDER_WIDTH,
        };
        let spinner_rect = Rect::from_center_size(rect.center(), Vec2::splat(width));
        ui.put(spinner_rect, egui::Spinner::new().size(width * 0.5));
        return false;
    };

    let transform = image.transform;
    let scaled = base_size(image.size, texture.size_vec2()) * transform.scale;
    let center = rect.center() + Vec2::new(image.position.x, image.position.y);
    let paint_rect = Rect::from_center_size(center, scaled);

    egui::Image::new((texture.id(), scaled))
        .rotate(transform.rotation_radians(), Vec2::splat(0.5))
        .paint_at(ui, paint_rect);

    let hit_size = if transform.is_quarter_turned() {
        Vec2::new(scaled.y, scaled.x)
    } else {
        scaled
    };
    let hit_rect = Rect::from_center_size(center, hit_size);
    let response = ui.interact(hit_rect, Id::new("imgview-image"), Sense::click_and_drag());

    if response.drag_started() {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            out.events.push(ViewerEvent::PointerDown(to_point(pos)));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            out.events.push(ViewerEvent::PointerMove(to_point(pos)));
        }
    }
    if image.cursor == Cursor::Move && (response.hovered() || response.dragged()) {
        let icon = if response.dragged() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Move
        };
        ui.ctx().set_cursor_icon(icon);
    }

    if response.clicked() {
        out.events.push(ViewerEvent::Click(ClickTarget::Image));
        return true;
    }
    false
}
