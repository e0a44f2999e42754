use serde::{Deserialize, Serialize};

/// Linear RGB color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color(pub [f32; 3]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0]);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        let r = ((value >> 16) & 0xff) as f32 / 255.0;
        let g = ((value >> 8) & 0xff) as f32 / 255.0;
        let b = (value & 0xff) as f32 / 255.0;
        Self([r, g, b])
    }

    pub fn hsv(h: f32, s: f32, v: f32) -> Self {
        Self(hsv_to_rgb(h, s, v))
    }

    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }

    /// Linear blend towards `other`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let [r0, g0, b0] = self.0;
        let [r1, g1, b1] = other.0;
        Color([r0 + (r1 - r0) * t, g0 + (g1 - g0) * t, b0 + (b1 - b0) * t])
    }

    pub fn scale(self, k: f32) -> Color {
        Color(self.0.map(|c| c * k))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::hex(value)
    }
}

impl From<[f32; 3]> for Color {
    fn from(value: [f32; 3]) -> Self {
        Color(value)
    }
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h.rem_euclid(1.0) * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Hue stepped by the golden ratio, so consecutive seeds land far apart.
pub fn golden_hue(seed: u32) -> f32 {
    (seed as f32 * 0.618033988749895) % 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_white() {
        let rgb = hsv_to_rgb(0.0, 0.0, 1.0);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!((rgb[1] - 1.0).abs() < 0.01);
        assert!((rgb[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hsv_to_rgb_black() {
        let rgb = hsv_to_rgb(0.0, 1.0, 0.0);
        assert!(rgb[0].abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hex_round_trips_through_bytes() {
        assert_eq!(Color::hex(0x2d5016).to_hex(), 0x2d5016);
        assert_eq!(Color::WHITE.to_hex(), 0xffffff);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::hex(0x000000);
        let b = Color::hex(0xffffff);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_golden_hue_in_unit_range() {
        for seed in 0..64 {
            let h = golden_hue(seed);
            assert!((0.0..1.0).contains(&h));
        }
    }
}
