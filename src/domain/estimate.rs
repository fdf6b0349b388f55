//! Estimate request and result types for `POST /calculate-estimate`.

use serde::{Deserialize, Deserializer, Serialize};

use super::enum_key;
use super::exterior::{ExteriorSpec, Siding, Stories};
use super::rooms::RoomSpec;

/// Which spec lists are priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Interior,
    Exterior,
    Both,
    Unknown,
}

impl<'de> Deserialize<'de> for ProjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match enum_key(deserializer)?.as_str() {
            "interior" => Self::Interior,
            "exterior" => Self::Exterior,
            "both" => Self::Both,
            _ => Self::Unknown,
        })
    }
}

impl ProjectType {
    pub fn includes_interior(&self) -> bool {
        matches!(self, Self::Interior | Self::Both)
    }

    pub fn includes_exterior(&self) -> bool {
        matches!(self, Self::Exterior | Self::Both)
    }
}

/// Surface readiness; scales prep labor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepCondition {
    Good,
    Fair,
    Poor,
    Unknown,
}

impl<'de> Deserialize<'de> for PrepCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match enum_key(deserializer)?.as_str() {
            "good" => Self::Good,
            "fair" => Self::Fair,
            "poor" => Self::Poor,
            _ => Self::Unknown,
        })
    }
}

/// Paint product tier; selects material cost per gallon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintQuality {
    Good,
    Better,
    Best,
    Unknown,
}

impl<'de> Deserialize<'de> for PaintQuality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match enum_key(deserializer)?.as_str() {
            "good" => Self::Good,
            "better" => Self::Better,
            "best" => Self::Best,
            _ => Self::Unknown,
        })
    }
}

/// Request DTO for the estimate evaluator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default)]
    pub rooms: Vec<RoomSpec>,
    #[serde(default)]
    pub exterior_items: Vec<ExteriorSpec>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub selected_prep: Option<PrepCondition>,
    #[serde(default)]
    pub selected_paint_quality: Option<PaintQuality>,
}

impl EstimateRequest {
    /// Names of fields holding values that were not recognized.
    pub fn unrecognized_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();

        if self.project_type == Some(ProjectType::Unknown) {
            fields.push("projectType".to_string());
        }
        if self.selected_prep == Some(PrepCondition::Unknown) {
            fields.push("selectedPrep".to_string());
        }
        if self.selected_paint_quality == Some(PaintQuality::Unknown) {
            fields.push("selectedPaintQuality".to_string());
        }
        for (i, item) in self.exterior_items.iter().enumerate() {
            if item.siding == Siding::Unknown {
                fields.push(format!("exteriorItems[{}].siding", i));
            }
            if item.stories == Stories::Unknown {
                fields.push(format!("exteriorItems[{}].stories", i));
            }
        }

        fields
    }
}

/// Displayed price range, whole dollars in multiples of the rounding increment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub low: i64,
    pub high: i64,
}

impl EstimateResult {
    /// The "nothing to price yet" result.
    pub const NOT_READY: Self = Self { low: 0, high: 0 };
}
