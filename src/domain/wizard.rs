//! Wizard session DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EstimateResult, ExteriorSpec, PaintQuality, PrepCondition, ProjectType, RoomSpec};
use crate::wizard::{EstimateStatus, WizardSession, WizardStep};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalCodeRequest {
    pub postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeRequest {
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepRequest {
    pub selected_prep: PrepCondition,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintQualityRequest {
    pub selected_paint_quality: PaintQuality,
}

/// Response DTO for a wizard session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub step: WizardStep,
    pub postal_code: Option<String>,
    pub project_type: Option<ProjectType>,
    pub rooms: Vec<RoomSpec>,
    pub exterior_items: Vec<ExteriorSpec>,
    pub selected_prep: Option<PrepCondition>,
    pub selected_paint_quality: Option<PaintQuality>,
    pub estimate: EstimateResult,
    pub estimate_status: EstimateStatus,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WizardSession> for SessionResponse {
    fn from(s: &WizardSession) -> Self {
        Self {
            id: s.id,
            step: s.step,
            postal_code: s.postal_code.clone(),
            project_type: s.project_type,
            rooms: s.rooms.clone(),
            exterior_items: s.exterior_items.clone(),
            selected_prep: s.prep,
            selected_paint_quality: s.paint_quality,
            estimate: s.estimate,
            estimate_status: s.status,
            revision: s.revision,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
