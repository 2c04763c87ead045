//! Viewer lifecycle and interaction handling.
//!
//! A [`Viewer`] owns one [`Session`] and at most one mounted overlay. It is
//! driven entirely by [`ViewerEvent`]s delivered by the host: clicks and
//! pointer input from the bound controls, and load completions from the
//! [`ImageLoader`].

use tracing::{debug, trace, warn};

use crate::config::ViewerConfig;
use crate::consts::OVERLAY_MARKER;
use crate::drag::ClampBounds;
use crate::error::Result;
use crate::fit::{fit_image, Viewport};
use crate::geometry::{Point, Size};
use crate::overlay::{build_overlay, ClickTarget, ControlId, DisplaySize};
use crate::session::{RotateDirection, Session};
use crate::surface::{
    HostSurface, ImageLoader, LoadTicket, MountPoint, Overflow, OverlayId, SurfaceUpdate,
};

/// Input delivered to a viewer by its host.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    Click(ClickTarget),
    /// Pointer pressed over the image.
    PointerDown(Point),
    PointerMove(Point),
    /// Pointer released anywhere on the host.
    PointerUp,
    ImageLoaded { ticket: LoadTicket, natural: Size },
    ImageFailed { ticket: LoadTicket },
}

pub struct Viewer<S, L> {
    config: ViewerConfig,
    surface: S,
    loader: L,
    session: Session,
    src: String,
    mount_point: MountPoint,
    overlay: Option<OverlayId>,
    scroll_locked: bool,
    viewport: Viewport,
    /// On-screen size of the fitted image; `None` until the current load completes.
    displayed: Option<Size>,
    handlers_bound: bool,
    pending: Option<LoadTicket>,
    next_ticket: u64,
}

impl<S: HostSurface, L: ImageLoader> Viewer<S, L> {
    /// Validate `config`, pick the mount point and build the first overlay.
    ///
    /// Fails only on invalid configuration, before touching the surface.
    pub fn open(config: ViewerConfig, surface: S, loader: L) -> Result<Self> {
        config.validate()?;

        let embedded = match surface.parent_hosts_viewer() {
            Ok(embedded) => embedded,
            Err(err) => {
                debug!(%err, "parent frame not accessible, mounting locally");
                false
            }
        };
        let mount_point = match &config.parent {
            Some(name) => MountPoint::Element(name.clone()),
            None if embedded => MountPoint::TopBody,
            None => MountPoint::Body,
        };

        let session = Session::new(&config);
        let src = config.source_at(session.current_index()).to_string();

        let mut viewer = Self {
            config,
            surface,
            loader,
            session,
            src,
            mount_point,
            overlay: None,
            scroll_locked: false,
            viewport: Viewport::default(),
            displayed: None,
            handlers_bound: false,
            pending: None,
            next_ticket: 0,
        };
        viewer.build();
        Ok(viewer)
    }

    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Click(target) => self.on_click(target),
            ViewerEvent::PointerDown(at) => self.on_pointer_down(at),
            ViewerEvent::PointerMove(at) => self.on_pointer_move(at),
            ViewerEvent::PointerUp => self.session.drag.end(),
            ViewerEvent::ImageLoaded { ticket, natural } => self.on_image_loaded(ticket, natural),
            ViewerEvent::ImageFailed { ticket } => {
                debug!(?ticket, src = %self.src, "image failed to load, keeping placeholder");
                if self.pending == Some(ticket) {
                    self.pending = None;
                }
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn overlay_id(&self) -> Option<OverlayId> {
        self.overlay
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn current_src(&self) -> &str {
        &self.src
    }

    pub fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn displayed_size(&self) -> Option<Size> {
        self.displayed
    }

    /// Whether the interaction handlers are live (the current image is fitted).
    pub fn handlers_bound(&self) -> bool {
        self.handlers_bound
    }

    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.pending
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    fn build(&mut self) {
        self.handlers_bound = false;
        self.displayed = None;
        self.remove_previous();

        let client = self.surface.client_size();
        self.viewport = Viewport::from_client(client);
        let overlay = build_overlay(&self.config, &self.session, &self.src, client);

        match self.surface.mount(&self.mount_point, overlay) {
            Ok(id) => self.overlay = Some(id),
            Err(err) => {
                warn!(%err, mount = ?self.mount_point, "failed to mount overlay");
                self.overlay = None;
                self.release_scroll();
                return;
            }
        }

        if self.config.parent.is_none() {
            match self.surface.set_overflow(&self.mount_point, Overflow::Hidden) {
                Ok(()) => self.scroll_locked = true,
                Err(err) => warn!(%err, "failed to lock host scroll"),
            }
        }

        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        debug!(
            index = self.session.current_index(),
            src = %self.src,
            ?ticket,
            "overlay built, loading image"
        );
        self.loader.request(ticket, &self.src);
    }

    fn remove_previous(&mut self) {
        if self.config.parent.is_some() {
            match self.surface.remove_marked(&self.mount_point, OVERLAY_MARKER) {
                Ok(removed) if removed > 0 => debug!(removed, "removed stale overlays"),
                Ok(_) => {}
                Err(err) => warn!(%err, "failed to clear mount point"),
            }
            self.overlay = None;
        } else if let Some(id) = self.overlay.take() {
            if let Err(err) = self.surface.remove(&self.mount_point, id) {
                warn!(%err, "failed to remove previous overlay");
            }
        }
    }

    fn close(&mut self) {
        let Some(id) = self.overlay.take() else {
            return;
        };
        if let Err(err) = self.surface.remove(&self.mount_point, id) {
            warn!(%err, "failed to remove overlay");
        }
        self.release_scroll();
        self.handlers_bound = false;
        self.pending = None;
        self.session.drag.end();
        debug!("viewer closed");
    }

    fn release_scroll(&mut self) {
        if !self.scroll_locked {
            return;
        }
        if let Err(err) = self.surface.set_overflow(&self.mount_point, Overflow::Auto) {
            warn!(%err, "failed to restore host scroll");
        }
        self.scroll_locked = false;
    }

    fn on_image_loaded(&mut self, ticket: LoadTicket, natural: Size) {
        if self.overlay.is_none() || self.pending != Some(ticket) {
            debug!(?ticket, "ignoring stale image load");
            return;
        }
        self.pending = None;

        let Some(fit) = fit_image(natural, self.viewport) else {
            debug!(?natural, "natural size unavailable, keeping placeholder");
            return;
        };
        self.displayed = Some(fit.displayed(natural));
        self.push(SurfaceUpdate::ImageSize(DisplaySize::Fitted(fit)));
        self.push(SurfaceUpdate::Source(self.src.clone()));
        self.handlers_bound = true;
        trace!(?fit, "image fitted, handlers bound");
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    fn on_click(&mut self, target: ClickTarget) {
        if self.overlay.is_none() {
            return;
        }
        match target {
            ClickTarget::CloseIcon if self.config.show_close => self.close(),
            ClickTarget::Backdrop if self.config.mask_close => self.close(),
            ClickTarget::Control(id) if !self.control_rendered(id) => {
                trace!(?id, "control not rendered");
            }
            ClickTarget::Control(id) if self.handlers_bound => self.on_control(id),
            ClickTarget::Control(id) => trace!(?id, "image still loading, ignoring control"),
            _ => {}
        }
    }

    fn control_rendered(&self, id: ControlId) -> bool {
        match id {
            ControlId::ZoomIn | ControlId::ZoomReset | ControlId::ZoomOut => self.config.show_scale,
            ControlId::RotateLeft | ControlId::RotateRight => self.config.show_rotate,
            ControlId::Previous | ControlId::Next => self.config.is_gallery(),
        }
    }

    fn on_control(&mut self, id: ControlId) {
        match id {
            ControlId::ZoomIn => {
                self.session.zoom_in();
            }
            ControlId::ZoomOut => {
                self.session.zoom_out();
                self.push(SurfaceUpdate::Position(Point::ZERO));
            }
            ControlId::ZoomReset => {
                self.session.reset_transform();
                self.push(SurfaceUpdate::Position(Point::ZERO));
            }
            ControlId::RotateLeft => {
                self.session.rotate(RotateDirection::Left);
                self.push(SurfaceUpdate::Position(Point::ZERO));
            }
            ControlId::RotateRight => {
                self.session.rotate(RotateDirection::Right);
                self.push(SurfaceUpdate::Position(Point::ZERO));
            }
            ControlId::Previous => return self.navigate(-1),
            ControlId::Next => return self.navigate(1),
        }
        self.push(SurfaceUpdate::Transform(self.session.transform()));
        self.push(SurfaceUpdate::Cursor(self.session.cursor()));
    }

    fn navigate(&mut self, delta: i64) {
        let current = self.session.current_index();
        let target = self.session.clamp_index(current as i64 + delta);
        if target == current {
            trace!(current, "already at the end of the set");
            return;
        }
        self.session = self.session.rebuilt(target);
        self.src = self.config.source_at(target).to_string();
        self.build();
    }

    fn on_pointer_down(&mut self, at: Point) {
        if !self.handlers_bound {
            return;
        }
        let Some(displayed) = self.displayed else {
            return;
        };
        // The client may have been resized since the overlay was built.
        self.viewport = Viewport::from_client(self.surface.client_size());
        let transform = self.session.transform();
        // A quarter turn swaps the on-screen extent of the image.
        let extent = if transform.is_quarter_turned() {
            Size::new(displayed.height, displayed.width)
        } else {
            displayed
        };
        let bounds = ClampBounds::compute(extent, transform.scale, self.viewport.size());
        let offset = self.session.pan_offset();
        self.session.drag.begin(at, offset, bounds);
        trace!(?at, ?bounds, "drag started");
    }

    fn on_pointer_move(&mut self, at: Point) {
        let current = self.session.pan_offset();
        let Some(offset) = self
            .session
            .drag
            .offset_for(at, self.session.scale(), current)
        else {
            return;
        };
        if offset != current {
            self.session.set_pan_offset(offset);
            self.push(SurfaceUpdate::Position(offset));
        }
    }

    fn push(&mut self, update: SurfaceUpdate) {
        let Some(id) = self.overlay else {
            return;
        };
        if let Err(err) = self.surface.update(id, update) {
            warn!(%err, "overlay update failed");
        }
    }
}
