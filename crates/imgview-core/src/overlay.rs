use crate::config::ViewerConfig;
use crate::consts::{
    NARROW_VIEW_WIDTH_PERCENT, OVERLAY_MARKER, PLACEHOLDER_WIDTH, WIDE_CLIENT_THRESHOLD,
};
use crate::fit::FitSize;
use crate::geometry::{Point, Size};
use crate::session::{Cursor, Session, Transform};

/// Clickable controls of the overlay.
///
/// `RotateLeft` adds +90 degrees, which turns the image clockwise on a
/// y-down surface; `RotateRight` turns it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    ZoomIn,
    ZoomReset,
    ZoomOut,
    RotateLeft,
    RotateRight,
    Previous,
    Next,
}

impl ControlId {
    pub fn label(&self) -> &'static str {
        match self {
            ControlId::ZoomIn => "+",
            ControlId::ZoomReset => "1",
            ControlId::ZoomOut => "-",
            ControlId::RotateLeft => "\u{21bb}",
            ControlId::RotateRight => "\u{21ba}",
            ControlId::Previous => "<",
            ControlId::Next => ">",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ControlId::ZoomIn => "Zoom in",
            ControlId::ZoomReset => "Actual size",
            ControlId::ZoomOut => "Zoom out",
            ControlId::RotateLeft => "Rotate clockwise",
            ControlId::RotateRight => "Rotate counter-clockwise",
            ControlId::Previous => "Previous image",
            ControlId::Next => "Next image",
        }
    }
}

/// Where a click landed, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay root itself, not any of its descendants.
    Backdrop,
    CloseIcon,
    Control(ControlId),
    Image,
    /// Any other descendant of the overlay.
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlButton {
    pub id: ControlId,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub previous: ControlButton,
    pub next: ControlButton,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    Placeholder,
    Loaded(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplaySize {
    /// Placeholder sizing before the image is fitted.
    Placeholder { width: f32 },
    Fitted(FitSize),
}

/// The image display surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    pub source: ImageSource,
    pub size: DisplaySize,
    pub transform: Transform,
    pub position: Point,
    pub cursor: Cursor,
}

/// Renderable description of one overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub marker: &'static str,
    pub background: Option<String>,
    /// View width as a percentage of the client, on narrow clients.
    pub view_width_percent: Option<u8>,
    pub controls: Vec<ControlButton>,
    pub download: Option<DownloadLink>,
    pub navigation: Option<Navigation>,
    pub image: ImageView,
    pub show_close: bool,
}

impl Overlay {
    pub fn control(&self, id: ControlId) -> Option<&ControlButton> {
        self.controls.iter().find(|c| c.id == id).or_else(|| {
            self.navigation.as_ref().and_then(|nav| match id {
                ControlId::Previous => Some(&nav.previous),
                ControlId::Next => Some(&nav.next),
                _ => None,
            })
        })
    }
}

/// Last `/`-separated segment of a source, used as the download filename.
pub fn download_filename(src: &str) -> String {
    src.rsplit('/').next().unwrap_or(src).to_string()
}

/// Build the overlay for the session's current image.
pub fn build_overlay(config: &ViewerConfig, session: &Session, src: &str, client: Size) -> Overlay {
    let mut controls = Vec::new();
    if config.show_scale {
        controls.extend([ControlId::ZoomIn, ControlId::ZoomReset, ControlId::ZoomOut]);
    }
    if config.show_rotate {
        controls.extend([ControlId::RotateLeft, ControlId::RotateRight]);
    }
    let controls = controls
        .into_iter()
        .map(|id| ControlButton { id, disabled: false })
        .collect();

    let download = config.show_download.then(|| DownloadLink {
        href: config
            .download_format
            .apply(src, session.current_index()),
        filename: download_filename(src),
    });

    let navigation = config.is_gallery().then(|| Navigation {
        previous: ControlButton {
            id: ControlId::Previous,
            disabled: session.is_first(),
        },
        next: ControlButton {
            id: ControlId::Next,
            disabled: session.is_last(),
        },
    });

    let view_width_percent =
        (client.width <= WIDE_CLIENT_THRESHOLD).then_some(NARROW_VIEW_WIDTH_PERCENT);

    Overlay {
        marker: OVERLAY_MARKER,
        background: config.bg_color.clone(),
        view_width_percent,
        controls,
        download,
        navigation,
        image: ImageView {
            source: ImageSource::Placeholder,
            size: DisplaySize::Placeholder {
                width: PLACEHOLDER_WIDTH,
            },
            transform: session.transform(),
            position: Point::ZERO,
            cursor: session.cursor(),
        },
        show_close: config.show_close,
    }
}
