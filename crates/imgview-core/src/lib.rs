pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod overlay;
pub mod probe;
pub mod session;
pub mod surface;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{ImgviewError, Result, SurfaceError};
pub use viewer::{Viewer, ViewerEvent};
