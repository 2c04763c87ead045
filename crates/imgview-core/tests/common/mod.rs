#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use imgview_core::consts::OVERLAY_MARKER;
use imgview_core::error::SurfaceError;
use imgview_core::geometry::Size;
use imgview_core::overlay::{ImageSource, Overlay};
use imgview_core::surface::{
    HostSurface, ImageLoader, LoadTicket, MountPoint, Overflow, OverlayId, SurfaceUpdate,
};
use imgview_core::{Viewer, ViewerConfig};

/// In-memory host surface that records every mutation.
#[derive(Default)]
pub struct FakeSurface {
    pub client: Size,
    /// `Some(true)` = nested under a viewer-hosting parent, `None` = parent access denied.
    pub parent_hosts: Option<bool>,
    pub mounted: Vec<(MountPoint, OverlayId, Overlay)>,
    pub overflow: HashMap<MountPoint, Overflow>,
    pub updates: Vec<(OverlayId, SurfaceUpdate)>,
    pub fail_mount: bool,
    pub fail_remove: bool,
    pub fail_update: bool,
    next_id: u64,
}

impl FakeSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            client: Size::new(width, height),
            parent_hosts: Some(false),
            ..Self::default()
        }
    }

    /// Put a foreign overlay under `at`, as another viewer would have.
    pub fn preload(&mut self, at: MountPoint, overlay: Overlay) -> OverlayId {
        self.mount(&at, overlay).expect("preload mount")
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.mounted
            .iter()
            .find(|(_, oid, _)| *oid == id)
            .map(|(_, _, overlay)| overlay)
    }

    pub fn count_at(&self, at: &MountPoint) -> usize {
        self.mounted.iter().filter(|(mp, _, _)| mp == at).count()
    }
}

impl HostSurface for FakeSurface {
    fn client_size(&self) -> Size {
        self.client
    }

    fn parent_hosts_viewer(&self) -> Result<bool, SurfaceError> {
        self.parent_hosts
            .ok_or_else(|| SurfaceError::AccessDenied("cross-origin parent".into()))
    }

    fn mount(&mut self, at: &MountPoint, overlay: Overlay) -> Result<OverlayId, SurfaceError> {
        if self.fail_mount {
            return Err(SurfaceError::Backend("mount refused".into()));
        }
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.mounted.push((at.clone(), id, overlay));
        Ok(id)
    }

    fn remove(&mut self, at: &MountPoint, id: OverlayId) -> Result<(), SurfaceError> {
        if self.fail_remove {
            return Err(SurfaceError::Detached(id));
        }
        let before = self.mounted.len();
        self.mounted.retain(|(mp, oid, _)| !(mp == at && *oid == id));
        if self.mounted.len() == before {
            return Err(SurfaceError::Detached(id));
        }
        Ok(())
    }

    fn remove_marked(&mut self, at: &MountPoint, marker: &str) -> Result<usize, SurfaceError> {
        let before = self.mounted.len();
        self.mounted
            .retain(|(mp, _, overlay)| !(mp == at && overlay.marker == marker));
        Ok(before - self.mounted.len())
    }

    fn set_overflow(&mut self, at: &MountPoint, overflow: Overflow) -> Result<(), SurfaceError> {
        self.overflow.insert(at.clone(), overflow);
        Ok(())
    }

    fn update(&mut self, id: OverlayId, update: SurfaceUpdate) -> Result<(), SurfaceError> {
        if self.fail_update {
            return Err(SurfaceError::Backend("update refused".into()));
        }
        let overlay = self
            .mounted
            .iter_mut()
            .find(|(_, oid, _)| *oid == id)
            .map(|(_, _, overlay)| overlay)
            .ok_or(SurfaceError::Detached(id))?;
        match &update {
            SurfaceUpdate::Transform(t) => overlay.image.transform = *t,
            SurfaceUpdate::Position(p) => overlay.image.position = *p,
            SurfaceUpdate::Cursor(c) => overlay.image.cursor = *c,
            SurfaceUpdate::ImageSize(s) => overlay.image.size = *s,
            SurfaceUpdate::Source(src) => overlay.image.source = ImageSource::Loaded(src.clone()),
        }
        self.updates.push((id, update));
        Ok(())
    }
}

/// A surface shared between several viewers, as one page shared by two widgets.
#[derive(Clone, Default)]
pub struct SharedSurface(pub Rc<RefCell<FakeSurface>>);

impl HostSurface for SharedSurface {
    fn client_size(&self) -> Size {
        self.0.borrow().client_size()
    }

    fn parent_hosts_viewer(&self) -> Result<bool, SurfaceError> {
        self.0.borrow().parent_hosts_viewer()
    }

    fn mount(&mut self, at: &MountPoint, overlay: Overlay) -> Result<OverlayId, SurfaceError> {
        self.0.borrow_mut().mount(at, overlay)
    }

    fn remove(&mut self, at: &MountPoint, id: OverlayId) -> Result<(), SurfaceError> {
        self.0.borrow_mut().remove(at, id)
    }

    fn remove_marked(&mut self, at: &MountPoint, marker: &str) -> Result<usize, SurfaceError> {
        self.0.borrow_mut().remove_marked(at, marker)
    }

    fn set_overflow(&mut self, at: &MountPoint, overflow: Overflow) -> Result<(), SurfaceError> {
        self.0.borrow_mut().set_overflow(at, overflow)
    }

    fn update(&mut self, id: OverlayId, update: SurfaceUpdate) -> Result<(), SurfaceError> {
        self.0.borrow_mut().update(id, update)
    }
}

/// Loader that only records requests; tests complete them by hand.
#[derive(Default)]
pub struct FakeLoader {
    pub requests: Vec<(LoadTicket, String)>,
}

impl FakeLoader {
    pub fn last_ticket(&self) -> LoadTicket {
        self.requests.last().expect("no load requested").0
    }
}

impl ImageLoader for FakeLoader {
    fn request(&mut self, ticket: LoadTicket, src: &str) {
        self.requests.push((ticket, src.to_string()));
    }
}

pub type TestViewer = Viewer<FakeSurface, FakeLoader>;

/// Open a viewer on a 1000x800 client.
pub fn open_viewer(config: ViewerConfig) -> TestViewer {
    Viewer::open(config, FakeSurface::new(1000.0, 800.0), FakeLoader::default())
        .expect("open viewer")
}

/// Complete the pending load with a landscape image.
pub fn finish_load(viewer: &mut TestViewer) {
    finish_load_with(viewer, Size::new(1600.0, 1000.0));
}

pub fn finish_load_with(viewer: &mut TestViewer, natural: Size) {
    let ticket = viewer.loader().last_ticket();
    viewer.handle(imgview_core::ViewerEvent::ImageLoaded { ticket, natural });
}

/// The overlay currently owned by the viewer, as the surface sees it.
pub fn current_overlay(viewer: &TestViewer) -> &Overlay {
    let id = viewer.overlay_id().expect("viewer has no overlay");
    viewer.surface().overlay(id).expect("overlay not mounted")
}

pub fn marker() -> &'static str {
    OVERLAY_MARKER
}
