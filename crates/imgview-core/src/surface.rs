//! Host capabilities the viewer is driven through.
//!
//! A host surface owns the visual tree the overlay lives in (a document body,
//! an embedding frame's body, a named element, or a native window). The
//! viewer only talks to it through [`HostSurface`], so tests can substitute a
//! recording fake.

use crate::error::SurfaceError;
use crate::geometry::{Point, Size};
use crate::overlay::{DisplaySize, Overlay};
use crate::session::{Cursor, Transform};

/// Handle to an overlay mounted on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Where an overlay is mounted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MountPoint {
    /// The surface's own body.
    Body,
    /// The body of the parent frame that hosts an equivalent viewer.
    TopBody,
    /// A named element chosen by configuration.
    Element(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Auto,
    Hidden,
}

/// Incremental change to a mounted overlay's image.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceUpdate {
    Transform(Transform),
    Position(Point),
    Cursor(Cursor),
    ImageSize(DisplaySize),
    Source(String),
}

pub trait HostSurface {
    /// Size of the visible client area.
    fn client_size(&self) -> Size;

    /// Whether this surface is nested in a parent frame that exposes its own
    /// viewer. Access restrictions are reported as errors.
    fn parent_hosts_viewer(&self) -> Result<bool, SurfaceError>;

    fn mount(&mut self, at: &MountPoint, overlay: Overlay) -> Result<OverlayId, SurfaceError>;

    fn remove(&mut self, at: &MountPoint, id: OverlayId) -> Result<(), SurfaceError>;

    /// Remove every overlay under `at` carrying `marker`. Returns how many
    /// were removed.
    fn remove_marked(&mut self, at: &MountPoint, marker: &str) -> Result<usize, SurfaceError>;

    fn set_overflow(&mut self, at: &MountPoint, overflow: Overflow) -> Result<(), SurfaceError>;

    fn update(&mut self, id: OverlayId, update: SurfaceUpdate) -> Result<(), SurfaceError>;
}

/// Identifies one image load request. Completions carrying a ticket other
/// than the latest one are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Starts asynchronous image loads. The host reports completion back to the
/// viewer as a [`crate::viewer::ViewerEvent`].
pub trait ImageLoader {
    fn request(&mut self, ticket: LoadTicket, src: &str);
}
