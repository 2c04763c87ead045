use thiserror::Error;

use crate::surface::OverlayId;

#[derive(Error, Debug)]
pub enum ImgviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImgviewError>;

/// Failures reported by a host surface while mounting or mutating an overlay.
///
/// The viewer never propagates these: they are logged and the operation is
/// treated as best-effort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Overlay {0:?} is not attached to the surface")]
    Detached(OverlayId),

    #[error("Mount point not found: {0}")]
    MountPointMissing(String),

    #[error("Access to host surface denied: {0}")]
    AccessDenied(String),

    #[error("Surface backend error: {0}")]
    Backend(String),
}
