use image::RgbImage;

use crate::color::hsv::Hsv;

/// Mean HSV saturation and value over every pixel of an image.
///
/// Both fields lie in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStatistics {
    pub mean_saturation: f64,
    pub mean_value: f64,
}

impl ColorStatistics {
    /// Averages saturation and value across all pixels, unweighted.
    ///
    /// Returns `None` for an image with no pixels.
    pub fn from_rgb(img: &RgbImage) -> Option<ColorStatistics> {
        let pixel_count = img.width() as u64 * img.height() as u64;
        if pixel_count == 0 {
            return None;
        }

        let (sat_sum, val_sum) = img.pixels().fold((0u64, 0u64), |(s, v), px| {
            let hsv = Hsv::from(*px);
            (s + hsv.saturation as u64, v + hsv.value as u64)
        });

        Some(ColorStatistics {
            mean_saturation: sat_sum as f64 / pixel_count as f64,
            mean_value: val_sum as f64 / pixel_count as f64,
        })
    }

    /// The freshness score: the average of the two means.
    pub fn score(&self) -> f64 {
        (self.mean_saturation + self.mean_value) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn uniform_image_has_its_pixel_statistics() {
        let img = RgbImage::from_pixel(4, 3, Rgb([200, 150, 50]));
        let stats = ColorStatistics::from_rgb(&img).unwrap();
        assert_eq!(stats.mean_saturation, 191.0);
        assert_eq!(stats.mean_value, 200.0);
        assert_eq!(stats.score(), 195.5);
    }

    #[test]
    fn means_are_unweighted_over_all_pixels() {
        // left half pure red (S 255, V 255), right half black (S 0, V 0)
        let img = RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 0]) }
        });
        let stats = ColorStatistics::from_rgb(&img).unwrap();
        assert_eq!(stats.mean_saturation, 127.5);
        assert_eq!(stats.mean_value, 127.5);
    }

    #[test]
    fn empty_image_has_no_statistics() {
        let img = RgbImage::new(0, 0);
        assert!(ColorStatistics::from_rgb(&img).is_none());
    }
}
