//! The print service boundary and an in-memory page device.

use crate::error::{QrPrintError, Result};
use crate::page::{DrawInstruction, PageGeometry};
use image::{imageops, Rgb, RgbImage};

/// A print service that is asked for pages one index at a time.
pub trait PrintDevice {
    /// Shows the print dialog. `Ok(false)` means the user cancelled.
    fn confirm(&mut self) -> Result<bool>;

    /// Imageable area for the page at `page_index`.
    fn page_geometry(&self, page_index: usize) -> PageGeometry;

    /// Marks one page.
    fn draw(&mut self, page_index: usize, instruction: &DrawInstruction<'_>) -> Result<()>;

    /// Ends the job after the last page.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Prints onto page-sized rasters held in memory, one device unit per pixel.
///
/// Nothing is written to disk. Images that run past the page edge are
/// clipped, as a physical printer would.
#[derive(Debug)]
pub struct RasterPageDevice {
    geometry: PageGeometry,
    auto_confirm: bool,
    pages: Vec<RgbImage>,
    finished: bool,
}

impl RasterPageDevice {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            auto_confirm: true,
            pages: Vec::new(),
            finished: false,
        }
    }

    /// Sets the answer the print dialog gives.
    pub fn with_auto_confirm(mut self, confirm: bool) -> Self {
        self.auto_confirm = confirm;
        self
    }

    /// Pages marked so far.
    pub fn pages(&self) -> &[RgbImage] {
        &self.pages
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn blank_page(&self) -> RgbImage {
        // Float to int casts saturate; NaN and infinity end up within the cap.
        let side = |points: f64| points.ceil().min(PageGeometry::MAX_PAGE_SIDE) as u32;
        RgbImage::from_pixel(
            side(self.geometry.page_width),
            side(self.geometry.page_height),
            Rgb([255, 255, 255]),
        )
    }
}

impl PrintDevice for RasterPageDevice {
    fn confirm(&mut self) -> Result<bool> {
        self.pages.clear();
        self.finished = false;
        Ok(self.auto_confirm)
    }

    fn page_geometry(&self, _page_index: usize) -> PageGeometry {
        self.geometry
    }

    fn draw(&mut self, page_index: usize, instruction: &DrawInstruction<'_>) -> Result<()> {
        if page_index > self.pages.len() {
            return Err(QrPrintError::PrintDeviceFailure {
                message: format!("page {} requested before page {}", page_index, self.pages.len()),
            });
        }
        if page_index == self.pages.len() {
            let page = self.blank_page();
            self.pages.push(page);
        }
        let page = &mut self.pages[page_index];
        imageops::overlay(
            page,
            instruction.image.buffer(),
            instruction.x.round() as i64,
            instruction.y.round() as i64,
        );
        tracing::debug!(page_index, x = instruction.x, y = instruction.y, "page drawn");
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        tracing::debug!(pages = self.pages.len(), "print job finished");
        Ok(())
    }
}
