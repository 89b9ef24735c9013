use image::Rgb;

const SAT_SHIFT: u32 = 12;

/// One pixel in the 8-bit HSV encoding used by most vision libraries.
///
/// - `hue`: degrees halved so it fits a byte, in `[0, 180)`
/// - `saturation`: `255 * (max - min) / max` in 12-bit fixed point, the same
///   integer arithmetic OpenCV uses for 8-bit images; 0 for black
/// - `value`: the largest of the three channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Hsv {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = (max - min) as f64;

        if max == 0 {
            return Hsv { hue: 0, saturation: 0, value: 0 };
        }

        let saturation = fixed_point_saturation(max - min, max);

        let hue = if chroma == 0.0 {
            0
        } else {
            let (r, g, b) = (r as f64, g as f64, b as f64);
            let mut degrees = if max as f64 == r {
                60.0 * (g - b) / chroma
            } else if max as f64 == g {
                120.0 + 60.0 * (b - r) / chroma
            } else {
                240.0 + 60.0 * (r - g) / chroma
            };
            if degrees < 0.0 {
                degrees += 360.0;
            }
            // 359.x degrees rounds up to 180, which is the same angle as 0.
            ((degrees / 2.0).round() as u16 % 180) as u8
        };

        Hsv { hue, saturation, value: max }
    }
}

/// `chroma * round((255 << 12) / value)`, rounded back down by 12 bits.
///
/// Differs from exact rounding by one for a few (value, chroma) pairs,
/// e.g. value 22, chroma 11 gives 127 rather than 128.
fn fixed_point_saturation(chroma: u8, value: u8) -> u8 {
    let reciprocal = ((255u32 << SAT_SHIFT) as f64 / value as f64).round() as u32;
    let s = (chroma as u32 * reciprocal + (1 << (SAT_SHIFT - 1))) >> SAT_SHIFT;
    s.min(255) as u8
}

impl From<Rgb<u8>> for Hsv {
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Hsv::from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_are_fully_saturated() {
        assert_eq!(Hsv::from_rgb(255, 0, 0), Hsv { hue: 0, saturation: 255, value: 255 });
        assert_eq!(Hsv::from_rgb(0, 255, 0), Hsv { hue: 60, saturation: 255, value: 255 });
        assert_eq!(Hsv::from_rgb(0, 0, 255), Hsv { hue: 120, saturation: 255, value: 255 });
    }

    #[test]
    fn grays_have_no_saturation() {
        assert_eq!(Hsv::from_rgb(0, 0, 0), Hsv { hue: 0, saturation: 0, value: 0 });
        assert_eq!(Hsv::from_rgb(128, 128, 128), Hsv { hue: 0, saturation: 0, value: 128 });
        assert_eq!(Hsv::from_rgb(255, 255, 255), Hsv { hue: 0, saturation: 0, value: 255 });
    }

    #[test]
    fn saturation_uses_fixed_point_reciprocal() {
        // exact rounding would give 128 (127.5)
        assert_eq!(Hsv::from_rgb(22, 11, 11).saturation, 127);
        // 255 * 1 / 255
        assert_eq!(Hsv::from_rgb(255, 255, 254).saturation, 1);
    }

    #[test]
    fn saturation_is_rounded_ratio_of_chroma_to_value() {
        // chroma 150 over value 200 → 191.25
        let hsv = Hsv::from_rgb(200, 150, 50);
        assert_eq!(hsv.saturation, 191);
        assert_eq!(hsv.value, 200);
        // 40 degrees, halved
        assert_eq!(hsv.hue, 20);
    }

    #[test]
    fn channel_order_does_not_change_saturation_or_value() {
        let a = Hsv::from_rgb(10, 90, 220);
        let b = Hsv::from_rgb(220, 90, 10);
        assert_eq!(a.saturation, b.saturation);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn hue_just_below_full_turn_wraps_to_zero() {
        // 255,0,1 sits at ~359.8 degrees
        assert_eq!(Hsv::from_rgb(255, 0, 1).hue, 0);
    }
}
