use std::collections::HashMap;

use imgview_core::error::SurfaceError;
use imgview_core::geometry::Size;
use imgview_core::overlay::{ImageSource, Overlay};
use imgview_core::surface::{HostSurface, MountPoint, Overflow, OverlayId, SurfaceUpdate};

/// An overlay mounted on the window.
pub struct MountedOverlay {
    pub at: MountPoint,
    pub id: OverlayId,
    pub overlay: Overlay,
}

/// Host surface backed by the native window. Every mount point renders into
/// the same window; the last mounted overlay is drawn on top.
pub struct EguiSurface {
    client: Size,
    mounted: Vec<MountedOverlay>,
    overflow: HashMap<MountPoint, Overflow>,
    next_id: u64,
}

impl EguiSurface {
    pub fn new(client: Size) -> Self {
        Self {
            client,
            mounted: Vec::new(),
            overflow: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn set_client_size(&mut self, client: Size) {
        self.client = client;
    }

    /// The overlay drawn on top, if any.
    pub fn top(&self) -> Option<&MountedOverlay> {
        self.mounted.last()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.overflow.values().any(|o| *o == Overflow::Hidden)
    }
}

impl HostSurface for EguiSurface {
    fn client_size(&self) -> Size {
        self.client
    }

    fn parent_hosts_viewer(&self) -> Result<bool, SurfaceError> {
        // A native window is never nested inside another viewer.
        Ok(false)
    }

    fn mount(&mut self, at: &MountPoint, overlay: Overlay) -> Result<OverlayId, SurfaceError> {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.mounted.push(MountedOverlay {
            at: at.clone(),
            id,
            overlay,
        });
        Ok(id)
    }

    fn remove(&mut self, at: &MountPoint, id: OverlayId) -> Result<(), SurfaceError> {
        let pos = self
            .mounted
            .iter()
            .position(|m| m.id == id && &m.at == at)
            .ok_or(SurfaceError::Detached(id))?;
        self.mounted.remove(pos);
        Ok(())
    }

    fn remove_marked(&mut self, at: &MountPoint, marker: &str) -> Result<usize, SurfaceError> {
        let before = self.mounted.len();
        self.mounted
            .retain(|m| !(&m.at == at && m.overlay.marker == marker));
        Ok(before - self.mounted.len())
    }

    fn set_overflow(&mut self, at: &MountPoint, overflow: Overflow) -> Result<(), SurfaceError> {
        self.overflow.insert(at.clone(), overflow);
        Ok(())
    }

    fn update(&mut self, id: OverlayId, update: SurfaceUpdate) -> Result<(), SurfaceError> {
        let image = &mut self
            .mounted
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(SurfaceError::Detached(id))?
            .overlay
            .image;
        match update {
            SurfaceUpdate::Transform(t) => image.transform = t,
            SurfaceUpdate::Position(p) => image.position = p,
            SurfaceUpdate::Cursor(c) => image.cursor = c,
            SurfaceUpdate::ImageSize(s) => image.size = s,
            SurfaceUpdate::Source(src) => image.source = ImageSource::Loaded(src),
        }
        Ok(())
    }
}
