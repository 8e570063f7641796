//! The seam between this crate and the QR symbol encoder.
//!
//! Turning text into modules (segment modes, Reed-Solomon codewords, masking,
//! format and version information) is delegated to the [`qrcode`] crate. This
//! module only owns the boolean [`ModuleMatrix`] that the rest of the crate
//! works with, and the [`SymbolEncoder`] trait that produces one.

use crate::error::{QrPrintError, Result};
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

/// A square grid of dark (`true`) and light (`false`) modules.
///
/// The side length is chosen by the encoder and is always at least 1. Every
/// cell is defined and the matrix never changes after construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleMatrix {
    side: usize,
    /// Row-major, `side * side` entries.
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from row-major modules.
    ///
    /// # Errors
    ///
    /// Returns `EncodingFailure` if `side` is zero or `modules` does not hold
    /// exactly `side * side` entries.
    pub fn new(side: usize, modules: Vec<bool>) -> Result<Self> {
        if side == 0 {
            return Err(QrPrintError::EncodingFailure {
                message: "module matrix must have a positive side length".to_string(),
            });
        }
        let count = cell_count(side)?;
        if modules.len() != count {
            return Err(QrPrintError::EncodingFailure {
                message: format!(
                    "expected {} modules for side {}, got {}",
                    count,
                    side,
                    modules.len()
                ),
            });
        }
        Ok(Self { side, modules })
    }

    /// Builds a matrix by asking `f(x, y)` for every module.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        let mut modules = Vec::with_capacity(cell_count(side)?);
        for y in 0..side {
            for x in 0..side {
                modules.push(f(x, y));
            }
        }
        Self::new(side, modules)
    }

    /// Width and height in modules.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the module at column `x`, row `y`. Coordinates outside the
    /// grid read as light, the same as a quiet zone.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.modules[y * self.side + x]
    }

    /// Returns a copy surrounded by `border` light modules on every side.
    ///
    /// # Errors
    ///
    /// Returns `EncodingFailure` if the padded side length overflows.
    pub fn with_quiet_zone(&self, border: usize) -> Result<Self> {
        if border == 0 {
            return Ok(self.clone());
        }
        let side = border
            .checked_mul(2)
            .and_then(|b| b.checked_add(self.side))
            .ok_or_else(|| too_large(border))?;
        let mut modules = vec![false; cell_count(side)?];
        for y in 0..self.side {
            let src = &self.modules[y * self.side..(y + 1) * self.side];
            let start = (y + border) * side + border;
            modules[start..start + self.side].copy_from_slice(src);
        }
        Ok(Self { side, modules })
    }
}

fn cell_count(side: usize) -> Result<usize> {
    side.checked_mul(side).ok_or_else(|| too_large(side))
}

fn too_large(size: usize) -> QrPrintError {
    QrPrintError::EncodingFailure {
        message: format!("module matrix size {} is too large", size),
    }
}

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[derive(Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// Tolerates ~7% erroneous codewords.
    #[default]
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl ErrorCorrection {
    fn ec_level(self) -> EcLevel {
        use ErrorCorrection::*;
        match self {
            Low => EcLevel::L,
            Medium => EcLevel::M,
            Quartile => EcLevel::Q,
            High => EcLevel::H,
        }
    }
}

/// Anything that can turn validated text into a module matrix.
pub trait SymbolEncoder {
    /// Encodes `text` at the given error correction level.
    ///
    /// # Errors
    ///
    /// Returns `EncodingFailure` when the payload cannot be represented.
    fn encode(&self, text: &str, ecc: ErrorCorrection) -> Result<ModuleMatrix>;
}

/// QR Code Model 2 encoder backed by the `qrcode` crate.
///
/// The version is the smallest one that fits the payload, so the matrix side
/// is `4 * version + 17` (21 to 177). No quiet zone is included.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrEncoder;

impl SymbolEncoder for QrEncoder {
    fn encode(&self, text: &str, ecc: ErrorCorrection) -> Result<ModuleMatrix> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecc.ec_level())
            .map_err(|e| QrPrintError::EncodingFailure { message: e.to_string() })?;
        let side = code.width();
        tracing::debug!(version = ?code.version(), side, ?ecc, "symbol encoded");
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        ModuleMatrix::new(side, modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_and_ragged() {
        assert!(ModuleMatrix::new(0, vec![]).is_err());
        assert!(ModuleMatrix::new(2, vec![true; 3]).is_err());
        assert!(ModuleMatrix::new(2, vec![true; 4]).is_ok());
    }

    #[test]
    fn test_get_is_row_major() {
        let m = ModuleMatrix::new(2, vec![true, false, false, false]).unwrap();
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(!m.get(0, 1));
        assert!(!m.get(5, 5));
    }

    #[test]
    fn test_quiet_zone_pads_with_light_modules() {
        let m = ModuleMatrix::from_fn(3, |_, _| true).unwrap();
        let padded = m.with_quiet_zone(2).unwrap();
        assert_eq!(padded.side(), 7);
        assert!(!padded.get(1, 1));
        assert!(padded.get(2, 2));
        assert!(padded.get(4, 4));
        assert!(!padded.get(5, 4));
        assert_eq!(m.with_quiet_zone(0).unwrap(), m);
    }

    #[test]
    fn test_quiet_zone_overflow_is_an_error() {
        let m = ModuleMatrix::from_fn(21, |_, _| true).unwrap();
        for border in [4_294_967_296, usize::MAX / 2, usize::MAX] {
            assert!(matches!(
                m.with_quiet_zone(border),
                Err(QrPrintError::EncodingFailure { .. })
            ));
        }
    }

    #[test]
    fn test_qr_encoder_side_matches_version_formula() {
        let m = QrEncoder.encode("https://example.com", ErrorCorrection::Low).unwrap();
        assert!(m.side() >= 21 && m.side() <= 177);
        assert_eq!((m.side() - 17) % 4, 0);
        // Finder pattern corner is dark.
        assert!(m.get(0, 0));
        assert!(m.get(m.side() - 1, 0));
        assert!(m.get(0, m.side() - 1));
    }

    #[test]
    fn test_qr_encoder_is_deterministic() {
        let a = QrEncoder.encode("https://example.com/a", ErrorCorrection::High).unwrap();
        let b = QrEncoder.encode("https://example.com/a", ErrorCorrection::High).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_qr_encoder_rejects_oversize_payload() {
        let text = format!("https://{}", "a".repeat(4000));
        match QrEncoder.encode(&text, ErrorCorrection::High) {
            Err(QrPrintError::EncodingFailure { message }) => assert!(!message.is_empty()),
            other => panic!("unexpected {:?}", other.map(|m| m.side())),
        }
    }

    #[test]
    fn test_ecc_names_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            ecc: ErrorCorrection,
        }
        let w: Wrapper = toml::from_str("ecc = \"quartile\"").unwrap();
        assert_eq!(w.ecc, ErrorCorrection::Quartile);
    }
}
