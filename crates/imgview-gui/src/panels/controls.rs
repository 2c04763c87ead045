use egui::{Align2, CursorIcon, Id, RichText};
use imgview_core::overlay::{ClickTarget, ControlButton, Overlay};
use imgview_core::ViewerEvent;

use super::OverlayOutput;

const BUTTON_TEXT_SIZE: f32 = 18.0;

/// Control bar at the top of the window: zoom, rotation, download and navigation.
pub fn show_control_bar(ctx: &egui::Context, overlay: &Overlay, out: &mut OverlayOutput) {
    egui::Area::new(Id::new("imgview-controls"))
        .anchor(Align2::CENTER_TOP, [0.0, 12.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for control in &overlay.controls {
                    control_button(ui, control, out);
                }

                if let Some(link) = &overlay.download {
                    let response = ui
                        .button(RichText::new("\u{2b07}").size(BUTTON_TEXT_SIZE))
                        .on_hover_text(format!("Download {}", link.filename));
                    if response.clicked() {
                        out.download = Some(link.clone());
                    }
                }

                if let Some(nav) = &overlay.navigation {
                    ui.separator();
                    control_button(ui, &nav.previous, out);
                    control_button(ui, &nav.next, out);
                }
            });
        });
}

/// Close icon in the top-right corner.
pub fn show_close_icon(ctx: &egui::Context, out: &mut OverlayOutput) {
    egui::Area::new(Id::new("imgview-close"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 12.0])
        .show(ctx, |ui| {
            let response = ui
                .button(RichText::new("\u{d7}").size(24.0))
                .on_hover_text("Close");
            if response.clicked() {
                out.events.push(ViewerEvent::Click(ClickTarget::CloseIcon));
            }
        });
}

// Disabled buttons stay clickable; they are only drawn dimmed.
fn control_button(ui: &mut egui::Ui, control: &ControlButton, out: &mut OverlayOutput) {
    let mut text = RichText::new(control.id.label()).size(BUTTON_TEXT_SIZE);
    if control.disabled {
        text = text.weak();
    }
    let cursor = if control.disabled {
        CursorIcon::NotAllowed
    } else {
        CursorIcon::PointingHand
    };
    let response = ui
        .add(egui::Button::new(text))
        .on_hover_cursor(cursor)
        .on_hover_text(control.id.title());
    if response.clicked() {
        out.events
            .push(ViewerEvent::Click(ClickTarget::Control(control.id)));
    }
}
