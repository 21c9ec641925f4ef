//! ARGB colors used to style clickable links.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Builds an opaque color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(0xFF00_0000 | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color is light, judged by its Rec. 709 luma.
    pub fn is_light(self) -> bool {
        let luma = 0.21 * f64::from(self.red())
            + 0.72 * f64::from(self.green())
            + 0.07 * f64::from(self.blue());
        luma > 128.0
    }

    /// Layers `overlay` at the given opacity (0 to 1) over `primary` and returns the opaque result.
    ///
    /// Pre-blending avoids relying on alpha compositing when the color is applied.
    pub fn calculate_opacity_transform(opacity: f64, overlay: Color, primary: Color) -> Color {
        let blend = |primary: u8, overlay: u8| -> u8 {
            ((1.0 - opacity) * f64::from(primary) + opacity * f64::from(overlay)) as u8
        };

        Color::rgb(
            blend(primary.red(), overlay.red()),
            blend(primary.green(), overlay.green()),
            blend(primary.blue(), overlay.blue()),
        )
    }
}

impl FromStr for Color {
    type Err = Box<dyn std::error::Error + Send + Sync>;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid color '{}': not a hex value", s).into());
        }

        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| format!("Invalid color '{}': {}", s, e))?;

        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            len => Err(format!(
                "Invalid color '{}': expected 6 or 8 hex digits, got {}",
                s, len
            )
            .into()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::BLACK.is_light());
        assert!(!Color::rgb(0, 0, 0xFF).is_light());
        assert!(Color::rgb(0, 0xFF, 0).is_light());
        // Alpha does not take part
        assert!(Color(0x00FF_FFFF).is_light());
    }

    #[test]
    fn test_channels() {
        let color = Color(0x801B_95E0);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x1B);
        assert_eq!(color.green(), 0x95);
        assert_eq!(color.blue(), 0xE0);
        assert_eq!(Color::rgb(0x1B, 0x95, 0xE0), Color(0xFF1B_95E0));
    }

    #[test]
    fn test_calculate_opacity_transform() {
        // Fully transparent overlay keeps the primary color
        assert_eq!(
            Color::calculate_opacity_transform(0.0, Color::BLACK, Color::WHITE),
            Color::WHITE
        );
        // Fully opaque overlay replaces it
        assert_eq!(
            Color::calculate_opacity_transform(1.0, Color::BLACK, Color::WHITE),
            Color::BLACK
        );
        // 0.5 * 255 truncates to 127
        assert_eq!(
            Color::calculate_opacity_transform(0.5, Color::BLACK, Color::WHITE),
            Color::rgb(127, 127, 127)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("#1DA1F2".parse::<Color>().unwrap(), Color(0xFF1D_A1F2));
        assert_eq!("801da1f2".parse::<Color>().unwrap(), Color(0x801D_A1F2));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color(0xFF1D_A1F2).to_string(), "#FF1DA1F2");
    }
}
