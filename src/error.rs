use thiserror::Error;

/// Failure of a freshness estimate.
///
/// The only failure kind is an image that cannot be decoded. Unreadable files
/// and images without pixels are reported the same way.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Could not read the image: {0}")]
    Decode(String),
}

impl From<image::ImageError> for EstimateError {
    fn from(e: image::ImageError) -> Self {
        EstimateError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for EstimateError {
    fn from(e: std::io::Error) -> Self {
        EstimateError::Decode(e.to_string())
    }
}
