use derive_more::{Deref, From, Into};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_RING_THICKNESS: f64 = 80.0;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Invalid ring color '{input}': {source}")]
    Hex {
        input: String,
        #[source]
        source: palette::rgb::FromHexError,
    },
}

/// Fill color of the ring, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct RingColor(Srgb<u8>);

impl RingColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Normalized `(r, g, b)` for drawing backends.
    pub fn components(&self) -> (f64, f64, f64) {
        self.0.into_format::<f64>().into_components()
    }
}

impl Default for RingColor {
    fn default() -> Self {
        Self::new(41, 128, 185)
    }
}

impl FromStr for RingColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|source| ColorError::Hex {
                input: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for RingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Appearance of the ring. Changing either field through the engine's setters
/// schedules a relayout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub ring_color: RingColor,
    pub ring_thickness: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            ring_color: RingColor::default(),
            ring_thickness: DEFAULT_RING_THICKNESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_color_parsing() {
        let cases = vec![
            ("\"#2980b9\"", RingColor::new(41, 128, 185)),
            ("\"2980B9\"", RingColor::new(41, 128, 185)),
            ("\"#fff\"", RingColor::new(255, 255, 255)),
        ];

        for (json, expected) in cases {
            let deserialized: RingColor = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_ring_color_rejects_garbage() {
        assert!("#12345g".parse::<RingColor>().is_err());
        assert!(serde_json::from_str::<RingColor>("\"blue\"").is_err());
    }

    #[test]
    fn test_ring_color_display_round_trips() {
        let color = RingColor::new(1, 2, 255);
        assert_eq!(color.to_string(), "#0102ff");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#0102ff\"");
    }

    #[test]
    fn test_menu_config_defaults_fill_missing_fields() {
        let cfg: MenuConfig = serde_json::from_str(r#"{"ring_thickness": 40.0}"#).unwrap();
        assert_eq!(cfg.ring_color, RingColor::default());
        assert_eq!(cfg.ring_thickness, 40.0);
    }
}
