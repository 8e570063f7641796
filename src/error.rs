//! Error types shared by every stage of the generate/print flow.

use thiserror::Error;

/// Everything that can go wrong between a user submitting text and a page
/// coming out of the printer.
///
/// None of these is fatal. The shell reports them with [`QrPrintError::title`]
/// and [`QrPrintError::user_message`] and keeps running.
#[derive(Error, Debug)]
pub enum QrPrintError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Encoding failed: {message}")]
    EncodingFailure { message: String },

    #[error("Nothing to print: no QR code has been generated yet")]
    NothingToPrint,

    #[error("Print device failure: {message}")]
    PrintDeviceFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl QrPrintError {
    /// Short heading for the message box (or terminal line) that reports the error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Invalid Input",
            Self::EncodingFailure { .. } => "Error",
            Self::NothingToPrint | Self::PrintDeviceFailure { .. } => "Print Error",
            Self::ConfigError { .. } | Self::IoError(_) | Self::TomlError(_) => {
                "Configuration Error"
            }
        }
    }

    /// The sentence shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => "Please enter a valid HTTPS address.".to_string(),
            Self::EncodingFailure { message } => format!("Error generating QR Code: {}", message),
            Self::NothingToPrint => "No QR Code to print. Please generate one first.".to_string(),
            Self::PrintDeviceFailure { message } => format!("Error during printing: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QrPrintError>;
