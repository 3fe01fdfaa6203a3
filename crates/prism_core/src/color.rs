//! 8-bit RGB colors.

use bytemuck::{Pod, Zeroable};
use prism_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Range every emitted channel is clamped to.
const CHANNEL: Interval = Interval::new(0.0, 255.0);

/// An RGB color with integer channels in [0, 255].
///
/// Shading arithmetic runs on `f32` channel values (see [`Rgb::to_vec3`]) and
/// is converted back exactly once with [`Rgb::from_channels`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Default color for rays that leave the scene.
    pub const DARK_GRAY: Rgb = Rgb::new(169, 169, 169);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert floating point channel values (0-255 scale) to a color.
    ///
    /// Each channel is clamped to [0, 255] and truncated toward zero.
    pub fn from_channels(channels: Vec3) -> Self {
        Self {
            r: CHANNEL.clamp(channels.x) as u8,
            g: CHANNEL.clamp(channels.y) as u8,
            b: CHANNEL.clamp(channels.z) as u8,
        }
    }

    /// Channel values as floats on the 0-255 scale.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_clamps() {
        let c = Rgb::from_channels(Vec3::new(-20.0, 300.0, 1e9));
        assert_eq!(c, Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_from_channels_truncates() {
        let c = Rgb::from_channels(Vec3::new(10.9, 254.99, 0.5));
        assert_eq!(c, Rgb::new(10, 254, 0));
    }

    #[test]
    fn test_round_trip_through_floats() {
        let c = Rgb::new(12, 200, 255);
        assert_eq!(Rgb::from_channels(c.to_vec3()), c);
    }

    #[test]
    fn test_pod_layout() {
        let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
    }
}
