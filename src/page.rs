//! Placement of a rendered symbol on a print page.
//!
//! A print job holds exactly one symbol, so only page 0 ever exists. The
//! image is placed literally: anchored at the imageable origin, at its native
//! pixel size, never scaled to fit.

use crate::error::{QrPrintError, Result};
use crate::raster::RasterImage;

/// Where content may be drawn on a physical page, in device units (points).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PageGeometry {
    /// Full page width.
    pub page_width: f64,
    /// Full page height.
    pub page_height: f64,
    /// Left edge of the imageable area.
    pub x: f64,
    /// Top edge of the imageable area.
    pub y: f64,
    /// Imageable width.
    pub width: f64,
    /// Imageable height.
    pub height: f64,
}

impl PageGeometry {
    /// Largest page side accepted, 200 inches at 72 points per inch.
    pub const MAX_PAGE_SIDE: f64 = 14_400.0;

    /// US Letter at 72 points per inch with one inch margins.
    pub const LETTER: PageGeometry = PageGeometry {
        page_width: 612.0,
        page_height: 792.0,
        x: 72.0,
        y: 72.0,
        width: 468.0,
        height: 648.0,
    };

    /// Whether every value is finite, the page is at most
    /// [`MAX_PAGE_SIDE`](Self::MAX_PAGE_SIDE) on a side, and the imageable
    /// area is non-empty and lies on the page.
    pub fn is_valid(&self) -> bool {
        let values = [self.page_width, self.page_height, self.x, self.y, self.width, self.height];
        values.iter().all(|v| v.is_finite())
            && self.page_width <= Self::MAX_PAGE_SIDE
            && self.page_height <= Self::MAX_PAGE_SIDE
            && self.width > 0.0
            && self.height > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= self.page_width
            && self.y + self.height <= self.page_height
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Draw `image` with its top-left corner at (`x`, `y`), `width` x `height` units.
#[derive(Clone, Copy, Debug)]
pub struct DrawInstruction<'a> {
    pub image: &'a RasterImage,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawInstruction<'_> {
    /// Whether the drawn rectangle leaves the imageable area of `geometry`.
    pub fn overflows(&self, geometry: &PageGeometry) -> bool {
        self.x < geometry.x
            || self.y < geometry.y
            || self.x + self.width > geometry.x + geometry.width
            || self.y + self.height > geometry.y + geometry.height
    }
}

/// Answer to "what goes on page N?".
#[derive(Clone, Copy, Debug)]
pub enum PagePlacement<'a> {
    Draw(DrawInstruction<'a>),
    NoSuchPage,
}

impl<'a> PagePlacement<'a> {
    pub fn instruction(self) -> Option<DrawInstruction<'a>> {
        match self {
            Self::Draw(instruction) => Some(instruction),
            Self::NoSuchPage => None,
        }
    }
}

/// Computes what to draw on page `page_index`.
///
/// Page 0 gets `image` at the imageable origin at native size; every later
/// index is [`PagePlacement::NoSuchPage`].
///
/// # Errors
///
/// Returns `NothingToPrint` when page 0 is requested but no image exists.
pub fn place_for_page<'a>(
    image: Option<&'a RasterImage>,
    geometry: &PageGeometry,
    page_index: usize,
) -> Result<PagePlacement<'a>> {
    if page_index > 0 {
        return Ok(PagePlacement::NoSuchPage);
    }
    let image = image.ok_or(QrPrintError::NothingToPrint)?;

    let instruction = DrawInstruction {
        image,
        x: geometry.x,
        y: geometry.y,
        width: f64::from(image.width()),
        height: f64::from(image.height()),
    };
    if instruction.overflows(geometry) {
        tracing::warn!(
            width = instruction.width,
            height = instruction.height,
            area_width = geometry.width,
            area_height = geometry.height,
            "image is larger than the imageable area and will be clipped"
        );
    }
    tracing::debug!(x = instruction.x, y = instruction.y, "page 0 placed");
    Ok(PagePlacement::Draw(instruction))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PageState {
    /// Page 0 has not been handed out yet.
    HasPage,
    Exhausted,
}

/// The pages of a print job: one, then nothing.
///
/// ```
/// use qrprint::encoder::ModuleMatrix;
/// use qrprint::page::{PageGeometry, PageSequence};
/// use qrprint::raster::{render, Palette};
///
/// let matrix = ModuleMatrix::from_fn(21, |x, _| x % 2 == 0).unwrap();
/// let image = render(&matrix, 300, Palette::default());
/// let mut pages = PageSequence::new(Some(&image)).unwrap();
/// assert!(pages.next_page(&PageGeometry::LETTER).is_some());
/// assert!(pages.next_page(&PageGeometry::LETTER).is_none());
/// ```
#[derive(Debug)]
pub struct PageSequence<'a> {
    image: &'a RasterImage,
    state: PageState,
}

impl<'a> PageSequence<'a> {
    /// # Errors
    ///
    /// Returns `NothingToPrint` when `image` is absent.
    pub fn new(image: Option<&'a RasterImage>) -> Result<Self> {
        let image = image.ok_or(QrPrintError::NothingToPrint)?;
        Ok(Self { image, state: PageState::HasPage })
    }

    /// Index of the page the next call to [`next_page`](Self::next_page) asks about.
    pub fn position(&self) -> usize {
        match self.state {
            PageState::HasPage => 0,
            PageState::Exhausted => 1,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == PageState::Exhausted
    }

    /// Returns the instruction for the current page, or `None` once the job
    /// has no more pages.
    pub fn next_page(&mut self, geometry: &PageGeometry) -> Option<DrawInstruction<'a>> {
        let index = self.position();
        self.state = PageState::Exhausted;
        // The image is present, so placement cannot fail.
        place_for_page(Some(self.image), geometry, index)
            .ok()
            .and_then(PagePlacement::instruction)
    }
}
