use std::fmt;
use serde::{Serialize, Serializer};

/// Scores strictly above these break into the next-fresher tier.
pub const VERY_FRESH_THRESHOLD: f64 = 160.0;
pub const FRESH_THRESHOLD: f64 = 120.0;
pub const MODERATE_THRESHOLD: f64 = 80.0;

/// Discrete freshness bucket, ordered from least to most fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FreshnessTier {
    NotFresh,
    Moderate,
    Fresh,
    VeryFresh,
}

impl FreshnessTier {
    /// Classifies a score; first matching threshold wins, comparisons are strict.
    pub fn classify(score: f64) -> FreshnessTier {
        if score > VERY_FRESH_THRESHOLD {
            FreshnessTier::VeryFresh
        } else if score > FRESH_THRESHOLD {
            FreshnessTier::Fresh
        } else if score > MODERATE_THRESHOLD {
            FreshnessTier::Moderate
        } else {
            FreshnessTier::NotFresh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FreshnessTier::VeryFresh => "Very Fresh",
            FreshnessTier::Fresh     => "Fresh",
            FreshnessTier::Moderate  => "Moderate",
            FreshnessTier::NotFresh  => "Not Fresh",
        }
    }

    pub fn shelf_life(self) -> ShelfLife {
        match self {
            FreshnessTier::VeryFresh => ShelfLife::Days { min: 7, max: 10 },
            FreshnessTier::Fresh     => ShelfLife::Days { min: 4, max: 6 },
            FreshnessTier::Moderate  => ShelfLife::Days { min: 2, max: 3 },
            FreshnessTier::NotFresh  => ShelfLife::ConsumeImmediately,
        }
    }
}

impl fmt::Display for FreshnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FreshnessTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Remaining edible duration for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfLife {
    /// Keeps for `min` to `max` days.
    Days { min: u32, max: u32 },
    ConsumeImmediately,
}

impl ShelfLife {
    /// Days from today until the expiration date: the lower end of the range,
    /// or zero when the produce should be eaten now.
    pub fn expiration_offset_days(self) -> u32 {
        match self {
            ShelfLife::Days { min, .. }   => min,
            ShelfLife::ConsumeImmediately => 0,
        }
    }
}

impl fmt::Display for ShelfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelfLife::Days { min, max }  => write!(f, "{}-{} days", min, max),
            ShelfLife::ConsumeImmediately => f.write_str("Consume immediately"),
        }
    }
}

impl Serialize for ShelfLife {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
