use serde_json::{json, Value};
use thiserror::Error;

use freshness_lens::EstimateError;

/// Why `POST /upload` did not produce an estimate.
///
/// The display string is what the client sees in `{"error": ...}`.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("File type not allowed")]
    DisallowedType,

    #[error("File too large")]
    TooLarge,

    /// Reading the request or writing the file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The file was stored but could not be analyzed.
    #[error("{source}")]
    Estimate {
        source: EstimateError,
        image_path: String,
    },
}

impl UploadError {
    pub fn status(&self) -> u16 {
        match self {
            UploadError::MissingFilePart
            | UploadError::NoSelectedFile
            | UploadError::DisallowedType => 400,
            UploadError::TooLarge => 413,
            UploadError::Io(_) => 500,
            UploadError::Estimate { .. } => 422,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            UploadError::Estimate { image_path, .. } => {
                json!({ "error": self.to_string(), "image_path": image_path })
            }
            _ => json!({ "error": self.to_string() }),
        }
    }
}
