use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{PenResult, ThicknessError};

/// Line width in pixels, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Thickness(u8);

impl Thickness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(value: i64) -> PenResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ThicknessError::OutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Width handed to the painter
    pub fn width(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Thickness {
    type Err = ThicknessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| ThicknessError::NotANumber(input.to_owned()))?;
        Self::new(value)
    }
}

impl TryFrom<u8> for Thickness {
    type Error = ThicknessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Thickness> for u8 {
    fn from(thickness: Thickness) -> Self {
        thickness.0
    }
}

/// Color and thickness applied whenever a surface is rendered.
///
/// Owned by the session; components receive it by reference at render time,
/// so a change affects every segment drawn afterwards on both windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenState {
    pub color: Color32,
    pub thickness: Thickness,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            thickness: Thickness::default(),
        }
    }
}

impl PenState {
    pub fn new(color: Color32, thickness: Thickness) -> Self {
        Self { color, thickness }
    }

    /// Replace the color. Alpha is dropped, the pen only paints opaque RGB.
    pub fn set_color(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_array();
        self.color = Color32::from_rgb(r, g, b);
    }

    /// Parse and apply a thickness typed by the user; on error nothing changes.
    pub fn apply_thickness_input(&mut self, input: &str) -> PenResult<Thickness> {
        let thickness = input.parse::<Thickness>()?;
        self.thickness = thickness;
        Ok(thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pen() {
        let pen = PenState::default();
        assert_eq!(pen.color, Color32::BLACK);
        assert_eq!(pen.thickness.get(), 10);
    }

    #[test]
    fn test_thickness_bounds() {
        assert_eq!("1".parse::<Thickness>().unwrap().get(), 1);
        assert_eq!("20".parse::<Thickness>().unwrap().get(), 20);
        assert_eq!(" 7 ".parse::<Thickness>().unwrap().get(), 7);
        assert_eq!("0".parse::<Thickness>(), Err(ThicknessError::OutOfRange(0)));
        assert_eq!("21".parse::<Thickness>(), Err(ThicknessError::OutOfRange(21)));
        assert_eq!("-3".parse::<Thickness>(), Err(ThicknessError::OutOfRange(-3)));
        assert!(matches!("abc".parse::<Thickness>(), Err(ThicknessError::NotANumber(_))));
        assert!(matches!("".parse::<Thickness>(), Err(ThicknessError::NotANumber(_))));
        assert!(matches!("2.5".parse::<Thickness>(), Err(ThicknessError::NotANumber(_))));
    }

    #[test]
    fn test_rejected_input_leaves_pen_unchanged() {
        let mut pen = PenState::default();
        assert!(pen.apply_thickness_input("15").is_ok());
        assert_eq!(pen.thickness.get(), 15);

        for input in ["0", "21", "abc"] {
            assert!(pen.apply_thickness_input(input).is_err());
            assert_eq!(pen.thickness.get(), 15);
        }
    }

    #[test]
    fn test_error_message_names_range() {
        let err = "99".parse::<Thickness>().unwrap_err();
        assert!(err.to_string().contains("1 to 20"));
        let err = "abc".parse::<Thickness>().unwrap_err();
        assert!(err.to_string().contains("1 to 20"));
    }

    #[test]
    fn test_set_color_drops_alpha() {
        let mut pen = PenState::default();
        pen.set_color(Color32::from_rgba_unmultiplied(200, 10, 10, 128));
        assert!(pen.color.is_opaque());
    }
}
