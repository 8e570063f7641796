//! Rasterization of a module matrix into a fixed-size pixel image.

use crate::encoder::ModuleMatrix;
use image::{Rgb, RgbImage};
use std::ops::Range;

/// The two colors a raster is drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Color of dark modules.
    pub foreground: [u8; 3],
    /// Color of light modules.
    pub background: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: [0, 0, 0],
            background: [255, 255, 255],
        }
    }
}

/// A square pixel buffer holding a rendered symbol.
///
/// Every pixel is either the palette's foreground or its background.
#[derive(Clone, PartialEq, Debug)]
pub struct RasterImage {
    buffer: RgbImage,
    palette: Palette,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Whether the pixel at (`x`, `y`) has the foreground color.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.buffer.get_pixel(x, y).0 == self.palette.foreground
    }

    /// The underlying `image` buffer, for display and printing.
    pub fn buffer(&self) -> &RgbImage {
        &self.buffer
    }
}

/// How an N x N matrix is laid onto a `pixel_size` square.
///
/// Cells are `pixel_size / N` pixels wide. The last row and column also take
/// the `pixel_size % N` leftover pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellGrid {
    cells: u32,
    pixel_size: u32,
}

impl CellGrid {
    /// # Panics
    ///
    /// Panics if either argument is zero.
    pub fn new(cells: u32, pixel_size: u32) -> Self {
        assert!(cells > 0, "matrix side must be positive");
        assert!(pixel_size > 0, "pixel size must be positive");
        Self { cells, pixel_size }
    }

    /// Nominal cell size; zero when the raster is smaller than the matrix.
    pub fn cell_size(&self) -> u32 {
        self.pixel_size / self.cells
    }

    /// Pixels the last row and column take on top of `cell_size`.
    pub fn remainder(&self) -> u32 {
        self.pixel_size % self.cells
    }

    /// Pixel range covered by cell `index` along one axis.
    ///
    /// Only meaningful when `cell_size() > 0`.
    pub fn span(&self, index: u32) -> Range<u32> {
        let cell = self.cell_size();
        let start = index * cell;
        if index + 1 == self.cells {
            start..self.pixel_size
        } else {
            start..start + cell
        }
    }

    /// The cell a pixel coordinate falls into.
    ///
    /// Down-samples by nearest neighbour when cells are smaller than a pixel.
    pub fn cell_of(&self, pixel: u32) -> u32 {
        let cell = self.cell_size();
        if cell == 0 {
            ((pixel as u64 * self.cells as u64) / self.pixel_size as u64) as u32
        } else {
            (pixel / cell).min(self.cells - 1)
        }
    }
}

/// Renders `matrix` into a `pixel_size` x `pixel_size` image.
///
/// Each module becomes a uniform block of foreground (dark) or background
/// (light) pixels, laid out by [`CellGrid`]. The output only depends on the
/// arguments.
///
/// # Panics
///
/// Panics if `pixel_size` is zero.
///
/// # Example
///
/// ```
/// use qrprint::encoder::ModuleMatrix;
/// use qrprint::raster::{render, Palette};
///
/// let matrix = ModuleMatrix::from_fn(21, |x, y| (x + y) % 2 == 0).unwrap();
/// let image = render(&matrix, 300, Palette::default());
/// assert_eq!(image.dimensions(), (300, 300));
/// ```
pub fn render(matrix: &ModuleMatrix, pixel_size: u32, palette: Palette) -> RasterImage {
    let grid = CellGrid::new(matrix.side() as u32, pixel_size);
    let fg = Rgb(palette.foreground);
    let bg = Rgb(palette.background);

    let buffer = RgbImage::from_fn(pixel_size, pixel_size, |x, y| {
        let mx = grid.cell_of(x) as usize;
        let my = grid.cell_of(y) as usize;
        if matrix.get(mx, my) { fg } else { bg }
    });

    tracing::debug!(
        side = matrix.side(),
        pixel_size,
        cell_size = grid.cell_size(),
        remainder = grid.remainder(),
        "matrix rasterized"
    );
    RasterImage { buffer, palette }
}
