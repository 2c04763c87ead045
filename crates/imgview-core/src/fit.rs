//! Aspect-ratio-preserving fit of an image into the available viewport.

use crate::consts::{
    NARROW_VIEWPORT_FRACTION, VIEWPORT_MARGIN, WIDE_CLIENT_THRESHOLD, WIDE_VIEWPORT_FRACTION,
};
use crate::geometry::Size;

/// Area available to the image inside the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Derive the viewport from the host's client area. Wide clients give the
    /// image 60% of their width, narrow ones 80%, both minus the margin.
    pub fn from_client(client: Size) -> Self {
        let fraction = if client.width > WIDE_CLIENT_THRESHOLD {
            WIDE_VIEWPORT_FRACTION
        } else {
            NARROW_VIEWPORT_FRACTION
        };
        Self {
            width: (client.width * fraction - VIEWPORT_MARGIN).trunc().max(0.0),
            height: (client.height - VIEWPORT_MARGIN).max(0.0),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Result of fitting an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitSize {
    /// Landscape or square: fill the viewport width, height follows the ratio.
    FullWidth { width: f32 },
    /// Portrait: explicit pixel size.
    Exact(Size),
}

impl FitSize {
    /// Final pixel size on screen.
    pub fn displayed(&self, natural: Size) -> Size {
        match *self {
            FitSize::FullWidth { width } => {
                let height = natural
                    .aspect_ratio()
                    .map_or(0.0, |ratio| width / ratio);
                Size::new(width, height)
            }
            FitSize::Exact(size) => size,
        }
    }
}

/// Fit an image of `natural` size into `viewport`. Returns `None` when the
/// natural size is unavailable, in which case the placeholder stays up.
pub fn fit_image(natural: Size, viewport: Viewport) -> Option<FitSize> {
    let ratio = natural.aspect_ratio()?;
    if ratio >= 1.0 {
        return Some(FitSize::FullWidth {
            width: viewport.width,
        });
    }

    let mut width = (viewport.width * ratio).trunc();
    let mut height = (width * natural.height / natural.width).trunc();
    if height > viewport.height {
        let shrink = viewport.height / height;
        width = (width * shrink).trunc();
        height = viewport.height;
    }
    Some(FitSize::Exact(Size::new(width, height)))
}
