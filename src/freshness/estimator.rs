use std::path::Path;

use chrono::{Days, NaiveDate};
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use tracing::debug;

use crate::color::ColorStatistics;
use crate::error::EstimateError;
use crate::freshness::clock::{Clock, SystemClock};
use crate::freshness::tier::{FreshnessTier, ShelfLife};

/// Outcome of one freshness estimate.
///
/// Field names match the JSON returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    #[serde(rename = "freshness")]
    pub tier: FreshnessTier,
    /// Average of saturation and brightness, rounded to 2 decimals.
    pub score: f64,
    pub shelf_life: ShelfLife,
    pub expiration_date: NaiveDate,
    /// Mean HSV saturation, rounded to 2 decimals.
    #[serde(rename = "color_saturation")]
    pub saturation: f64,
    /// Mean HSV value, rounded to 2 decimals.
    pub brightness: f64,
}

/// Maps the color statistics of a produce photo to a freshness tier,
/// shelf life and expiration date.
///
/// Stateless apart from the clock; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Estimator<C: Clock = SystemClock> {
    clock: C,
}

impl Estimator<SystemClock> {
    pub fn new() -> Self {
        Estimator { clock: SystemClock }
    }
}

impl<C: Clock> Estimator<C> {
    pub fn with_clock(clock: C) -> Self {
        Estimator { clock }
    }

    /// Reads and decodes a stored image file, then estimates it.
    pub fn estimate_path(&self, path: &Path) -> Result<EstimationResult, EstimateError> {
        let bytes = std::fs::read(path)?;
        self.estimate_bytes(&bytes)
    }

    /// Decodes PNG/JPEG bytes, then estimates them.
    pub fn estimate_bytes(&self, bytes: &[u8]) -> Result<EstimationResult, EstimateError> {
        let img = image::load_from_memory(bytes)?;
        self.estimate_image(&img)
    }

    /// Alpha is dropped and grayscale expanded before the color statistics.
    pub fn estimate_image(&self, img: &DynamicImage) -> Result<EstimationResult, EstimateError> {
        self.estimate_rgb(&img.to_rgb8())
    }

    pub fn estimate_rgb(&self, img: &RgbImage) -> Result<EstimationResult, EstimateError> {
        let stats = ColorStatistics::from_rgb(img)
            .ok_or_else(|| EstimateError::Decode("image contains no pixels".into()))?;
        let score = stats.score();
        let tier = FreshnessTier::classify(score);
        let shelf_life = tier.shelf_life();

        debug!(
            width = img.width(),
            height = img.height(),
            saturation = stats.mean_saturation,
            brightness = stats.mean_value,
            score,
            tier = tier.label(),
            "estimated freshness"
        );

        Ok(EstimationResult {
            tier,
            score: round2(score),
            shelf_life,
            expiration_date: expiration_date(self.clock.today(), shelf_life),
            saturation: round2(stats.mean_saturation),
            brightness: round2(stats.mean_value),
        })
    }
}

fn expiration_date(today: NaiveDate, shelf_life: ShelfLife) -> NaiveDate {
    let offset = Days::new(shelf_life.expiration_offset_days() as u64);
    today.checked_add_days(offset).unwrap_or(NaiveDate::MAX)
}

/// Two decimals, ties to even.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
