use qrprint::app::{PrintOutcome, QrApp};
use qrprint::config::Config;
use qrprint::encoder::{ErrorCorrection, ModuleMatrix, SymbolEncoder};
use qrprint::error::{QrPrintError, Result};
use qrprint::page::{place_for_page, PageGeometry, PagePlacement};
use qrprint::printer::RasterPageDevice;
use qrprint::raster::{render, CellGrid, Palette};
use qrprint::validator::{validate, ValidationResult};
use std::cell::Cell;

/// Always produces a version 1 sized symbol (21 x 21) with only the
/// bottom-right module dark.
struct Version1Encoder {
    calls: Cell<usize>,
}

impl SymbolEncoder for Version1Encoder {
    fn encode(&self, _text: &str, _ecc: ErrorCorrection) -> Result<ModuleMatrix> {
        self.calls.set(self.calls.get() + 1);
        ModuleMatrix::from_fn(21, |x, y| x == 20 && y == 20)
    }
}

fn version1_app() -> QrApp<Version1Encoder> {
    let config = Config { quiet_zone: 0, ..Config::default() };
    QrApp::with_encoder(Version1Encoder { calls: Cell::new(0) }, config)
}

#[test]
fn test_https_address_renders_300_square_with_remainder_in_last_cell() {
    assert_eq!(
        validate("https://example.com"),
        ValidationResult::Accepted("https://example.com".to_string())
    );

    let mut app = version1_app();
    let image = app.generate("https://example.com").unwrap();
    assert_eq!(image.dimensions(), (300, 300));

    let grid = CellGrid::new(21, 300);
    assert_eq!(grid.cell_size(), 14);
    assert_eq!(grid.remainder(), 6);
    // The last cell spans 14 + 6 pixels in both directions.
    assert!(!image.is_foreground(279, 299));
    assert!(!image.is_foreground(299, 279));
    for p in 280..300 {
        assert!(image.is_foreground(p, p));
        assert!(image.is_foreground(280, p));
        assert!(image.is_foreground(p, 280));
    }
}

#[test]
fn test_address_without_scheme_is_rejected_before_encoding() {
    let mut app = version1_app();
    match app.generate("example.com") {
        Err(err @ QrPrintError::InvalidInput { .. }) => {
            assert_eq!(err.to_string(), "Invalid input: must be an HTTPS address");
            assert_eq!(err.title(), "Invalid Input");
        }
        other => panic!("unexpected {:?}", other.map(|i| i.dimensions())),
    }
    assert!(app.image().is_none());
}

#[test]
fn test_print_before_generation_reports_nothing_to_print() {
    let app = version1_app();
    let mut device = RasterPageDevice::new(PageGeometry::LETTER);
    let err = app.print(&mut device).unwrap_err();
    assert!(matches!(err, QrPrintError::NothingToPrint));
    assert!(err.user_message().contains("Please generate one first"));
    assert!(device.pages().is_empty());
}

#[test]
fn test_real_encoder_prints_one_page_at_imageable_origin() {
    let config = Config::default();
    let geometry = config.page.geometry();
    let mut device = RasterPageDevice::new(geometry);
    let mut app = QrApp::new(config);

    let image = app.generate("  https://example.com/some/path  ").unwrap().clone();
    assert_eq!(app.print(&mut device).unwrap(), PrintOutcome::Printed { pages: 1 });
    assert!(device.is_finished());
    assert_eq!(device.pages().len(), 1);

    let page = &device.pages()[0];
    for y in 0..image.height() {
        for x in 0..image.width() {
            let want = image.buffer().get_pixel(x, y);
            assert_eq!(page.get_pixel(72 + x, 72 + y), want);
        }
    }
    // Outside the image the page stays blank.
    assert_eq!(page.get_pixel(71, 71).0, [255, 255, 255]);
    assert_eq!(page.get_pixel(372, 372).0, [255, 255, 255]);

    // Printing again yields a fresh single page.
    assert_eq!(app.print(&mut device).unwrap(), PrintOutcome::Printed { pages: 1 });
    assert_eq!(device.pages().len(), 1);
}

#[test]
fn test_cancelled_print_draws_nothing() {
    let mut app = QrApp::new(Config::default());
    app.generate("https://example.com").unwrap();
    let mut device = RasterPageDevice::new(PageGeometry::LETTER).with_auto_confirm(false);
    assert_eq!(app.print(&mut device).unwrap(), PrintOutcome::Cancelled);
    assert!(device.pages().is_empty());
    assert!(app.image().is_some());
}

#[test]
fn test_regeneration_replaces_image() {
    let config = Config { error_correction: ErrorCorrection::High, ..Config::default() };
    let mut app = QrApp::new(config);
    let first = app.generate("https://example.com/a").unwrap().clone();
    let second = app.generate("https://example.com/b").unwrap().clone();
    assert_ne!(first, second);
    assert_eq!(app.image(), Some(&second));
}

#[test]
fn test_placement_contract() {
    let matrix = ModuleMatrix::from_fn(25, |x, y| (x * y) % 3 == 0).unwrap();
    let image = render(&matrix, 300, Palette::default());
    let geometry = PageGeometry::LETTER;

    assert!(matches!(place_for_page(Some(&image), &geometry, 0), Ok(PagePlacement::Draw(_))));
    assert!(matches!(place_for_page(Some(&image), &geometry, 1), Ok(PagePlacement::NoSuchPage)));
    assert!(matches!(place_for_page(None, &geometry, 0), Err(QrPrintError::NothingToPrint)));
}
