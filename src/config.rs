//! Settings for generation, display and printing, loaded from TOML.

use crate::encoder::ErrorCorrection;
use crate::error::{QrPrintError, Result};
use crate::page::PageGeometry;
use crate::raster::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings. Every field has a default, so an empty file is valid.
///
/// ```toml
/// pixel_size = 300
/// error_correction = "medium"
/// quiet_zone = 4
/// foreground = [0, 0, 0]
/// background = [255, 255, 255]
/// terminal_columns = 64
///
/// [page]
/// width = 595
/// height = 842
/// imageable_x = 36
/// imageable_y = 36
/// imageable_width = 523
/// imageable_height = 770
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width and height of the rendered raster in pixels.
    pub pixel_size: u32,
    pub error_correction: ErrorCorrection,
    /// Light border around the symbol, in modules.
    pub quiet_zone: usize,
    pub foreground: [u8; 3],
    pub background: [u8; 3],
    /// Width of the terminal preview in characters.
    pub terminal_columns: u32,
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            pixel_size: 300,
            error_correction: ErrorCorrection::Low,
            quiet_zone: 4,
            foreground: palette.foreground,
            background: palette.background,
            terminal_columns: 64,
            page: PageConfig::default(),
        }
    }
}

/// Page size and imageable area in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width: f64,
    pub height: f64,
    pub imageable_x: f64,
    pub imageable_y: f64,
    pub imageable_width: f64,
    pub imageable_height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        let letter = PageGeometry::LETTER;
        Self {
            width: letter.page_width,
            height: letter.page_height,
            imageable_x: letter.x,
            imageable_y: letter.y,
            imageable_width: letter.width,
            imageable_height: letter.height,
        }
    }
}

impl PageConfig {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            page_width: self.width,
            page_height: self.height,
            x: self.imageable_x,
            y: self.imageable_y,
            width: self.imageable_width,
            height: self.imageable_height,
        }
    }
}

impl Config {
    /// Largest accepted raster side in pixels.
    pub const MAX_PIXEL_SIZE: u32 = 4096;

    /// Largest accepted quiet zone in modules.
    pub const MAX_QUIET_ZONE: usize = 64;

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            foreground: self.foreground,
            background: self.background,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pixel_size == 0 {
            return Err(QrPrintError::ConfigError {
                message: "pixel_size must be greater than 0".to_string(),
            });
        }
        if self.pixel_size > Self::MAX_PIXEL_SIZE {
            return Err(QrPrintError::ConfigError {
                message: format!("pixel_size must be at most {}", Self::MAX_PIXEL_SIZE),
            });
        }
        if self.quiet_zone > Self::MAX_QUIET_ZONE {
            return Err(QrPrintError::ConfigError {
                message: format!("quiet_zone must be at most {}", Self::MAX_QUIET_ZONE),
            });
        }
        if self.terminal_columns == 0 {
            return Err(QrPrintError::ConfigError {
                message: "terminal_columns must be greater than 0".to_string(),
            });
        }
        if self.foreground == self.background {
            return Err(QrPrintError::ConfigError {
                message: "foreground and background colors must differ".to_string(),
            });
        }
        if !self.page.geometry().is_valid() {
            return Err(QrPrintError::ConfigError {
                message: format!(
                    "page sides must be finite and at most {} points, \
                     with a non-empty imageable area inside the page",
                    PageGeometry::MAX_PAGE_SIDE
                ),
            });
        }
        Ok(())
    }
}
