pub mod color;
pub mod error;
pub mod freshness;
pub mod upload;

// Convenience re-exports
pub use color::{ColorStatistics, Hsv};
pub use error::EstimateError;
pub use freshness::{Clock, EstimationResult, Estimator, FixedClock, FreshnessTier, ShelfLife, SystemClock};
pub use upload::UploadConfig;
