pub mod controls;
pub mod overlay;

use imgview_core::overlay::DownloadLink;
use imgview_core::ViewerEvent;

/// What the user did with the overlay during one frame.
#[derive(Default)]
pub struct OverlayOutput {
    pub events: Vec<ViewerEvent>,
    pub download: Option<DownloadLink>,
}
