//! # qrprint
//!
//! Turn an HTTPS address into a QR code, preview it and put it on paper.
//!
//! `qrprint` validates the address, hands it to a QR encoder (the [`qrcode`]
//! crate) for the module matrix, rasterizes the matrix into a fixed-size
//! two-color image and places that image on a single print page at the
//! printer's imageable origin.
//!
//! ## Features
//!
//! - Accept only `https://` addresses, with a descriptive rejection.
//! - Four error correction levels: Low, Medium, Quartile, High.
//! - Render at any pixel size; leftover pixels go to the last row and column.
//! - Custom foreground/background colors and quiet zone width.
//! - Literal, unscaled page placement with a one-page print job.
//! - Terminal preview with Unicode half blocks.
//!
//! ## Example
//!
//! ```rust
//! use qrprint::app::{PrintOutcome, QrApp};
//! use qrprint::config::Config;
//! use qrprint::printer::RasterPageDevice;
//!
//! let config = Config::default();
//! let mut device = RasterPageDevice::new(config.page.geometry());
//! let mut app = QrApp::new(config);
//!
//! app.generate("https://example.com").unwrap();
//! let outcome = app.print(&mut device).unwrap();
//! assert_eq!(outcome, PrintOutcome::Printed { pages: 1 });
//! assert_eq!(device.pages().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`validator`]: Input validation.
//! - [`encoder`]: Module matrix and the encoder seam.
//! - [`raster`]: Matrix to pixel rendering.
//! - [`page`]: Page placement and the one-page sequence.
//! - [`printer`]: Print service boundary and an in-memory page device.
//! - [`artifact`]: Holder for the generated image.
//! - [`app`]: Generate and print orchestration.
//! - [`config`]: TOML settings.
//! - [`helper`]: Terminal display.

pub mod app;
pub mod artifact;
pub mod config;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod logger;
pub mod page;
pub mod printer;
pub mod raster;
pub mod validator;

pub use app::{PrintOutcome, QrApp};
pub use config::Config;
pub use encoder::{ErrorCorrection, ModuleMatrix, QrEncoder, SymbolEncoder};
pub use error::{QrPrintError, Result};
pub use page::{place_for_page, DrawInstruction, PageGeometry, PagePlacement, PageSequence};
pub use raster::{render, Palette, RasterImage};
pub use validator::{validate, ValidationResult};
