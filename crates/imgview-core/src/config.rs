use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};
use crate::error::{ImgviewError, Result};

/// Maps an image source and its index to the URL used by the download link.
#[derive(Clone)]
pub struct DownloadFormat(Arc<dyn Fn(&str, usize) -> String + Send + Sync>);

impl DownloadFormat {
    pub fn new(f: impl Fn(&str, usize) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn apply(&self, src: &str, index: usize) -> String {
        (self.0)(src, index)
    }
}

impl Default for DownloadFormat {
    fn default() -> Self {
        Self::new(|src, _| src.to_string())
    }
}

impl fmt::Debug for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DownloadFormat(..)")
    }
}

/// Viewer configuration. Every field is optional in TOML and falls back to
/// its default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Image sources for gallery mode. Empty means single-image mode.
    pub data: Vec<String>,
    /// Initial position within `data`. Out-of-range values are clamped.
    pub index: i64,
    /// Single-image source, used when `data` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub max_scale: f32,
    pub min_scale: f32,
    /// Clicking the backdrop itself closes the overlay.
    pub mask_close: bool,
    pub show_download: bool,
    pub show_rotate: bool,
    pub show_close: bool,
    pub show_scale: bool,
    #[serde(skip)]
    pub download_format: DownloadFormat,
    /// Named mount point used instead of the document body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Backdrop color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            index: 0,
            src: None,
            max_scale: DEFAULT_MAX_SCALE,
            min_scale: DEFAULT_MIN_SCALE,
            mask_close: false,
            show_download: false,
            show_rotate: true,
            show_close: true,
            show_scale: true,
            download_format: DownloadFormat::default(),
            parent: None,
            bg_color: None,
        }
    }
}

impl ViewerConfig {
    /// Gallery configuration starting at `index`.
    pub fn gallery<S: Into<String>>(data: impl IntoIterator<Item = S>, index: i64) -> Self {
        Self {
            data: data.into_iter().map(Into::into).collect(),
            index,
            ..Self::default()
        }
    }

    /// Single-image configuration.
    pub fn single(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    pub fn with_download_format(
        mut self,
        f: impl Fn(&str, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.download_format = DownloadFormat::new(f);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(s)?;
        Self::from_value(toml::Value::Table(table))
    }

    /// Build a configuration from an already parsed value. Anything other
    /// than a table is rejected.
    pub fn from_value(value: toml::Value) -> Result<Self> {
        if !value.is_table() {
            return Err(ImgviewError::InvalidConfig(format!(
                "expected a configuration table, got {}",
                value.type_str()
            )));
        }
        let config: ViewerConfig = value.try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the viewer relies on: scale bounds that contain 1
    /// and at least one image source.
    pub fn validate(&self) -> Result<()> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() {
            return Err(ImgviewError::InvalidConfig(
                "scale bounds must be finite".into(),
            ));
        }
        if self.min_scale <= 0.0 {
            return Err(ImgviewError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > 1.0 || self.max_scale < 1.0 {
            return Err(ImgviewError::InvalidConfig(format!(
                "scale bounds [{}, {}] must contain 1.0",
                self.min_scale, self.max_scale
            )));
        }
        let has_src = self.src.as_deref().is_some_and(|s| !s.is_empty());
        if self.data.is_empty() && !has_src {
            return Err(ImgviewError::InvalidConfig(
                "no image source: set `data` or `src`".into(),
            ));
        }
        Ok(())
    }

    pub fn is_gallery(&self) -> bool {
        !self.data.is_empty()
    }

    /// Number of addressable images (1 in single-image mode).
    pub fn image_count(&self) -> usize {
        self.data.len().max(1)
    }

    /// Source shown at `index`. In single-image mode this is always `src`.
    pub fn source_at(&self, index: usize) -> &str {
        match self.data.get(index) {
            Some(src) => src,
            None if self.data.is_empty() => self.src.as_deref().unwrap_or_default(),
            None => self.data.last().map(String::as_str).unwrap_or_default(),
        }
    }
}
