//! Sequencing of the generate and print actions.

use crate::artifact::ArtifactHolder;
use crate::config::Config;
use crate::encoder::{QrEncoder, SymbolEncoder};
use crate::error::Result;
use crate::page::PageSequence;
use crate::printer::PrintDevice;
use crate::raster::{render, RasterImage};
use crate::validator::validate;

/// How a print request ended, when it did not fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrintOutcome {
    Printed { pages: usize },
    Cancelled,
}

/// Owns the settings, the encoder and the generated symbol.
///
/// # Example
///
/// ```
/// use qrprint::app::{PrintOutcome, QrApp};
/// use qrprint::config::Config;
/// use qrprint::printer::RasterPageDevice;
///
/// let config = Config::default();
/// let mut device = RasterPageDevice::new(config.page.geometry());
/// let mut app = QrApp::new(config);
///
/// let image = app.generate("https://example.com").unwrap();
/// assert_eq!(image.dimensions(), (300, 300));
/// assert_eq!(app.print(&mut device).unwrap(), PrintOutcome::Printed { pages: 1 });
/// ```
#[derive(Debug)]
pub struct QrApp<E = QrEncoder> {
    encoder: E,
    config: Config,
    artifact: ArtifactHolder,
}

impl QrApp<QrEncoder> {
    pub fn new(config: Config) -> Self {
        Self::with_encoder(QrEncoder, config)
    }
}

impl<E: SymbolEncoder> QrApp<E> {
    pub fn with_encoder(encoder: E, config: Config) -> Self {
        Self {
            encoder,
            config,
            artifact: ArtifactHolder::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The most recently generated symbol.
    pub fn image(&self) -> Option<&RasterImage> {
        self.artifact.get()
    }

    /// Validates `raw`, encodes it and renders the symbol, replacing the held image.
    ///
    /// The matrix is padded with `quiet_zone` light modules before rendering,
    /// so the raster is divided into `N + 2 * quiet_zone` cells per side. With
    /// the default settings a version 1 symbol (N = 21) renders as 29 cells.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the text is not an HTTPS address, `EncodingFailure`
    /// if the encoder refuses it. On error the previously held image is kept.
    pub fn generate(&mut self, raw: &str) -> Result<&RasterImage> {
        let text = validate(raw).into_result()?;
        let matrix = self
            .encoder
            .encode(&text, self.config.error_correction)?
            .with_quiet_zone(self.config.quiet_zone)?;
        let image = render(&matrix, self.config.pixel_size, self.config.palette());
        tracing::info!(
            modules = matrix.side(),
            pixel_size = self.config.pixel_size,
            "QR code generated"
        );
        Ok(self.artifact.store(image))
    }

    /// Prints the held symbol on `device`.
    ///
    /// Asks for pages starting at index 0 until the job runs out, which
    /// happens after exactly one page.
    ///
    /// # Errors
    ///
    /// `NothingToPrint` if no symbol has been generated; the dialog is not
    /// shown in that case. Device errors are passed through.
    pub fn print(&self, device: &mut dyn PrintDevice) -> Result<PrintOutcome> {
        let mut pages = PageSequence::new(self.artifact.get())?;
        if !device.confirm()? {
            tracing::warn!("print dialog cancelled");
            return Ok(PrintOutcome::Cancelled);
        }

        let mut printed = 0;
        loop {
            let index = pages.position();
            let geometry = device.page_geometry(index);
            let Some(instruction) = pages.next_page(&geometry) else {
                break;
            };
            device.draw(index, &instruction)?;
            printed += 1;
        }
        device.finish()?;

        tracing::info!(pages = printed, "QR code printed");
        Ok(PrintOutcome::Printed { pages: printed })
    }
}
