pub mod hsv;
pub mod stats;

pub use hsv::Hsv;
pub use stats::ColorStatistics;
