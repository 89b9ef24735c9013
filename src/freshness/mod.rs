pub mod clock;
pub mod estimator;
pub mod tier;

pub use clock::{Clock, FixedClock, SystemClock};
pub use estimator::{EstimationResult, Estimator};
pub use tier::{FreshnessTier, ShelfLife};
