use crate::raster::RasterImage;
use std::io::{self, BufRead};

/*---- Terminal display ----*/

// Returns the image as Unicode half-block art, at most `columns` characters
// wide. Each character samples one column and two rows of the downscaled
// image, so the symbol keeps its square shape in a typical terminal font.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_terminal_string(image: &RasterImage, columns: u32) -> String {
    assert!(columns > 0, "Columns must be positive");
    let (width, height) = image.dimensions();
    let step = width.div_ceil(columns).max(1);
    let sample = |x: u32, y: u32| {
        image.is_foreground((x + step / 2).min(width - 1), (y + step / 2).min(height - 1))
    };

    let mut result = String::new();
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let top = sample(x, y);
            let bottom = y + step < height && sample(x, y + step);
            result.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
            x += step;
        }
        result.push('\n');
        y += 2 * step;
    }
    result
}

/// Prints the given image to the console.
pub fn print_raster(image: &RasterImage, columns: u32) {
    print!("{}", to_terminal_string(image, columns));
    println!();
}

/*---- Terminal input ----*/

/// Reads one line from `reader`, replacing invalid UTF-8 with U+FFFD so a bad
/// line is rejected by validation instead of ending the session.
///
/// Returns `Ok(None)` at end of input. `buf` is reused between calls.
pub fn read_line_lossy<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
