//! Exterior surface specifications.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::enum_key;
use super::quantity::{Count, Measure};

/// Siding material. Anything unrecognized is kept as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Siding {
    Vinyl,
    Wood,
    Stucco,
    Brick,
    Metal,
    FiberCement,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for Siding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match enum_key(deserializer)?.as_str() {
            "vinyl" => Self::Vinyl,
            "wood" => Self::Wood,
            "stucco" => Self::Stucco,
            "brick" => Self::Brick,
            "metal" => Self::Metal,
            "fibercement" => Self::FiberCement,
            _ => Self::Unknown,
        })
    }
}

/// Building height in stories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Stories {
    #[default]
    One,
    Two,
    Three,
    Unknown,
}

impl Stories {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Stories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let key = match &value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };

        Ok(match key.as_str() {
            "1" => Self::One,
            "2" => Self::Two,
            "3" => Self::Three,
            _ => Self::Unknown,
        })
    }
}

impl Serialize for Stories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One exterior surface to paint, with its optional add-ons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExteriorSpec {
    #[serde(default)]
    pub siding: Siding,
    #[serde(default)]
    pub sqft: Measure,
    #[serde(default)]
    pub stories: Stories,
    #[serde(default)]
    pub trim_lft: Measure,
    #[serde(default)]
    pub doors: Count,
    #[serde(default)]
    pub shutters: Count,
    #[serde(default)]
    pub window_frames: Count,
    #[serde(default)]
    pub gutter_lft: Measure,
    #[serde(default)]
    pub deck_sqft: Measure,
}
