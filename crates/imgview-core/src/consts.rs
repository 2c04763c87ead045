/// Scale increment applied by one zoom-in or zoom-out click.
pub const ZOOM_STEP: f32 = 0.35;

/// Rotation applied by one rotate click, in degrees.
pub const ROTATION_STEP_DEGREES: i32 = 90;

/// Default upper zoom bound.
pub const DEFAULT_MAX_SCALE: f32 = 3.0;

/// Default lower zoom bound.
pub const DEFAULT_MIN_SCALE: f32 = 0.5;

/// Client widths above this are treated as wide screens when sizing the viewport.
pub const WIDE_CLIENT_THRESHOLD: f32 = 1200.0;

/// Fraction of the client width available to the image on wide screens.
pub const WIDE_VIEWPORT_FRACTION: f32 = 0.6;

/// Fraction of the client width available to the image on narrow screens.
pub const NARROW_VIEWPORT_FRACTION: f32 = 0.8;

/// Pixels reserved around the image on both axes (controls and padding).
pub const VIEWPORT_MARGIN: f32 = 100.0;

/// Width of the overlay view on narrow screens, as a percentage of the client.
pub const NARROW_VIEW_WIDTH_PERCENT: u8 = 80;

/// Display width of the loading placeholder before the real image is fitted.
pub const PLACEHOLDER_WIDTH: f32 = 100.0;

/// Marker carried by every overlay, used to find stale overlays under a mount point.
pub const OVERLAY_MARKER: &str = "imgview-box";
