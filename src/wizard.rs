//! Estimator wizard state machine
//!
//! `PostalGate → ProjectTypeSelect → BuildSpecs → PrepAndQuality → Result`.
//! Moving forward is gated on the current step's input; moving back never
//! is. Once the session reaches `BuildSpecs`, every input change bumps the
//! revision and hands out a `RecalcTicket`. Only the ticket for the latest
//! revision may update the displayed estimate, so a slow response for an
//! older input set can never overwrite a newer one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    EstimateRequest, EstimateResult, ExteriorSpec, PaintQuality, PrepCondition, ProjectType,
    RoomSpec, Siding, Stories,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PostalGate,
    ProjectTypeSelect,
    BuildSpecs,
    PrepAndQuality,
    Result,
}

impl WizardStep {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PostalGate => Some(Self::ProjectTypeSelect),
            Self::ProjectTypeSelect => Some(Self::BuildSpecs),
            Self::BuildSpecs => Some(Self::PrepAndQuality),
            Self::PrepAndQuality => Some(Self::Result),
            Self::Result => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::PostalGate => None,
            Self::ProjectTypeSelect => Some(Self::PostalGate),
            Self::BuildSpecs => Some(Self::ProjectTypeSelect),
            Self::PrepAndQuality => Some(Self::BuildSpecs),
            Self::Result => Some(Self::PrepAndQuality),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Postal code must be 5 digits")]
    InvalidPostalCode,

    #[error("Postal code {0} is outside our service area")]
    OutsideServiceArea(String),

    #[error("Enter a postal code first")]
    PostalCodeRequired,

    #[error("Select a project type first")]
    ProjectTypeRequired,

    #[error("Add at least one space or surface")]
    NoSpecs,

    #[error("Select both a prep condition and a paint quality")]
    SelectionsRequired,

    #[error("Unrecognized {0}")]
    UnrecognizedSelection(&'static str),

    #[error("Length and width must be greater than zero")]
    InvalidRoomDimensions,

    #[error("Square footage must be greater than zero")]
    InvalidExteriorArea,

    #[error("No {kind} at index {index}")]
    IndexOutOfRange { kind: &'static str, index: usize },

    #[error("Not available at the {0:?} step")]
    WrongStep(WizardStep),

    #[error("Already at the last step")]
    AtLastStep,
}

/// Postal codes the business serves. Empty means every well-formed code.
#[derive(Debug, Clone, Default)]
pub struct ServiceArea {
    postal_codes: HashSet<String>,
}

impl ServiceArea {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            postal_codes: codes
                .into_iter()
                .filter_map(|c| normalize_postal_code(c.as_ref()))
                .collect(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.postal_codes.is_empty()
    }

    /// Normalize and check a postal code, returning the 5-digit form.
    pub fn check(&self, code: &str) -> Result<String, WizardError> {
        let code = normalize_postal_code(code).ok_or(WizardError::InvalidPostalCode)?;
        if self.is_unrestricted() || self.postal_codes.contains(&code) {
            Ok(code)
        } else {
            Err(WizardError::OutsideServiceArea(code))
        }
    }
}

/// Accepts `12345` and `12345-6789`; returns the first five digits.
fn normalize_postal_code(code: &str) -> Option<String> {
    let code = code.trim();
    let (base, ext) = match code.split_once('-') {
        Some((base, ext)) => (base, Some(ext)),
        None => (code, None),
    };

    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(base, 5) || ext.is_some_and(|e| !digits(e, 4)) {
        return None;
    }
    Some(base.to_string())
}

/// Permission to publish an estimate for one revision of a session's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecalcTicket {
    pub session_id: Uuid,
    pub revision: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    /// Input is incomplete; the estimate is `{0, 0}`
    NotReady,
    Calculating,
    Ready,
    /// The last calculation failed; the estimate is the last good one
    Failed,
}

#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: Uuid,
    pub step: WizardStep,
    /// Furthest step the session has advanced to
    pub reached: WizardStep,
    pub postal_code: Option<String>,
    pub project_type: Option<ProjectType>,
    pub rooms: Vec<RoomSpec>,
    pub exterior_items: Vec<ExteriorSpec>,
    pub prep: Option<PrepCondition>,
    pub paint_quality: Option<PaintQuality>,
    pub estimate: EstimateResult,
    pub status: EstimateStatus,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WizardSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            step: WizardStep::PostalGate,
            reached: WizardStep::PostalGate,
            postal_code: None,
            project_type: None,
            rooms: Vec::new(),
            exterior_items: Vec::new(),
            prep: None,
            paint_quality: None,
            estimate: EstimateResult::NOT_READY,
            status: EstimateStatus::NotReady,
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move one step forward if the current step's input is complete.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;

        match self.step {
            WizardStep::PostalGate if self.postal_code.is_none() => {
                return Err(WizardError::PostalCodeRequired)
            }
            WizardStep::ProjectTypeSelect if self.project_type.is_none() => {
                return Err(WizardError::ProjectTypeRequired)
            }
            WizardStep::BuildSpecs if !self.has_specs() => return Err(WizardError::NoSpecs),
            WizardStep::PrepAndQuality if self.prep.is_none() || self.paint_quality.is_none() => {
                return Err(WizardError::SelectionsRequired)
            }
            _ => {}
        }

        self.step = next;
        self.reached = self.reached.max(next);
        self.updated_at = Utc::now();
        Ok(next)
    }

    /// Move one step back. A no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.updated_at = Utc::now();
        }
        self.step
    }

    /// Discard all input and return to the first step.
    ///
    /// The revision keeps counting so tickets issued before the reset go stale.
    pub fn reset(&mut self) {
        let fresh = Self::new();
        let revision = self.revision + 1;
        *self = Self {
            id: self.id,
            revision,
            created_at: self.created_at,
            ..fresh
        };
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn submit_postal_code(
        &mut self,
        code: &str,
        area: &ServiceArea,
    ) -> Result<(), WizardError> {
        self.require_step(WizardStep::PostalGate, true)?;
        let code = area.check(code)?;
        self.postal_code = Some(code);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn select_project_type(
        &mut self,
        project_type: ProjectType,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::ProjectTypeSelect, false)?;
        if project_type == ProjectType::Unknown {
            return Err(WizardError::UnrecognizedSelection("project type"));
        }
        self.project_type = Some(project_type);
        Ok(self.input_changed())
    }

    pub fn add_room(&mut self, room: RoomSpec) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        validate_room(&room)?;
        self.rooms.push(room);
        Ok(self.input_changed())
    }

    /// Replace the room at `index` with a re-submitted record.
    pub fn replace_room(
        &mut self,
        index: usize,
        room: RoomSpec,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        validate_room(&room)?;
        let slot = self
            .rooms
            .get_mut(index)
            .ok_or(WizardError::IndexOutOfRange { kind: "room", index })?;
        *slot = room;
        Ok(self.input_changed())
    }

    pub fn remove_room(&mut self, index: usize) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        if index >= self.rooms.len() {
            return Err(WizardError::IndexOutOfRange { kind: "room", index });
        }
        self.rooms.remove(index);
        Ok(self.input_changed())
    }

    pub fn add_exterior_item(
        &mut self,
        item: ExteriorSpec,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        validate_exterior(&item)?;
        self.exterior_items.push(item);
        Ok(self.input_changed())
    }

    pub fn replace_exterior_item(
        &mut self,
        index: usize,
        item: ExteriorSpec,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        validate_exterior(&item)?;
        let slot = self
            .exterior_items
            .get_mut(index)
            .ok_or(WizardError::IndexOutOfRange {
                kind: "exterior item",
                index,
            })?;
        *slot = item;
        Ok(self.input_changed())
    }

    pub fn remove_exterior_item(
        &mut self,
        index: usize,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::BuildSpecs, false)?;
        if index >= self.exterior_items.len() {
            return Err(WizardError::IndexOutOfRange {
                kind: "exterior item",
                index,
            });
        }
        self.exterior_items.remove(index);
        Ok(self.input_changed())
    }

    pub fn select_prep(
        &mut self,
        prep: PrepCondition,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::PrepAndQuality, false)?;
        if prep == PrepCondition::Unknown {
            return Err(WizardError::UnrecognizedSelection("prep condition"));
        }
        self.prep = Some(prep);
        Ok(self.input_changed())
    }

    pub fn select_paint_quality(
        &mut self,
        quality: PaintQuality,
    ) -> Result<Option<RecalcTicket>, WizardError> {
        self.require_step(WizardStep::PrepAndQuality, false)?;
        if quality == PaintQuality::Unknown {
            return Err(WizardError::UnrecognizedSelection("paint quality"));
        }
        self.paint_quality = Some(quality);
        Ok(self.input_changed())
    }

    // =========================================================================
    // Estimate
    // =========================================================================

    /// Snapshot of the current input in evaluator form.
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            rooms: self.rooms.clone(),
            exterior_items: self.exterior_items.clone(),
            project_type: self.project_type,
            selected_prep: self.prep,
            selected_paint_quality: self.paint_quality,
        }
    }

    pub fn is_current(&self, ticket: &RecalcTicket) -> bool {
        ticket.session_id == self.id && ticket.revision == self.revision
    }

    /// Publish a result. Returns false, changing nothing, for a stale ticket.
    pub fn apply_estimate(&mut self, ticket: &RecalcTicket, result: EstimateResult) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.estimate = result;
        self.status = EstimateStatus::Ready;
        true
    }

    /// Record a failed calculation, keeping the last good estimate.
    pub fn fail_estimate(&mut self, ticket: &RecalcTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = EstimateStatus::Failed;
        true
    }

    /// True once every input an estimate needs is present.
    pub fn is_complete(&self) -> bool {
        self.project_type.is_some()
            && self.prep.is_some()
            && self.paint_quality.is_some()
            && self.has_specs()
    }

    /// At least one spec the selected project type will price.
    pub fn has_specs(&self) -> bool {
        match self.project_type {
            Some(ProjectType::Interior) => !self.rooms.is_empty(),
            Some(ProjectType::Exterior) => !self.exterior_items.is_empty(),
            Some(ProjectType::Both) => !self.rooms.is_empty() || !self.exterior_items.is_empty(),
            Some(ProjectType::Unknown) | None => false,
        }
    }

    fn require_step(&self, step: WizardStep, exact: bool) -> Result<(), WizardError> {
        let allowed = if exact {
            self.step == step
        } else {
            self.step >= step
        };
        if allowed {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.step))
        }
    }

    fn input_changed(&mut self) -> Option<RecalcTicket> {
        self.updated_at = Utc::now();
        if self.reached < WizardStep::BuildSpecs {
            return None;
        }

        self.revision += 1;
        if !self.is_complete() {
            self.estimate = EstimateResult::NOT_READY;
            self.status = EstimateStatus::NotReady;
            return None;
        }

        self.status = EstimateStatus::Calculating;
        Some(RecalcTicket {
            session_id: self.id,
            revision: self.revision,
        })
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_room(room: &RoomSpec) -> Result<(), WizardError> {
    let basics = room.basics();
    if basics.length.is_zero() || basics.width.is_zero() {
        return Err(WizardError::InvalidRoomDimensions);
    }
    Ok(())
}

pub fn validate_exterior(item: &ExteriorSpec) -> Result<(), WizardError> {
    if item.sqft.is_zero() {
        return Err(WizardError::InvalidExteriorArea);
    }
    Ok(())
}

/// Reject siding or story values that would otherwise price at the neutral multiplier.
pub fn check_recognized_exterior(item: &ExteriorSpec) -> Result<(), WizardError> {
    if item.siding == Siding::Unknown {
        return Err(WizardError::UnrecognizedSelection("siding"));
    }
    if item.stories == Stories::Unknown {
        return Err(WizardError::UnrecognizedSelection("stories"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Measure, RoomBasics};

    fn room(length: u32, width: u32) -> RoomSpec {
        RoomSpec::Bedroom(RoomBasics {
            length: Measure::from(length),
            width: Measure::from(width),
            paint_walls: true,
            ..Default::default()
        })
    }

    fn session_at_build_specs(project_type: ProjectType) -> WizardSession {
        let mut session = WizardSession::new();
        session
            .submit_postal_code("30301", &ServiceArea::default())
            .unwrap();
        session.advance().unwrap();
        session.select_project_type(project_type).unwrap();
        session.advance().unwrap();
        session
    }

    #[test]
    fn test_postal_gate_blocks_until_code_submitted() {
        let mut session = WizardSession::new();
        assert_eq!(session.advance(), Err(WizardError::PostalCodeRequired));

        session
            .submit_postal_code("30301-1234", &ServiceArea::default())
            .unwrap();
        assert_eq!(session.postal_code.as_deref(), Some("30301"));
        assert_eq!(session.advance(), Ok(WizardStep::ProjectTypeSelect));
    }

    #[test]
    fn test_postal_code_validation() {
        let area = ServiceArea::from_codes(["30301", "30302"]);
        assert_eq!(area.check(" 30302 "), Ok("30302".to_string()));
        assert_eq!(area.check("3030"), Err(WizardError::InvalidPostalCode));
        assert_eq!(area.check("30301-12"), Err(WizardError::InvalidPostalCode));
        assert_eq!(area.check("abcde"), Err(WizardError::InvalidPostalCode));
        assert_eq!(
            area.check("90210"),
            Err(WizardError::OutsideServiceArea("90210".to_string()))
        );
    }

    #[test]
    fn test_forward_gates() {
        let mut session = WizardSession::new();
        session
            .submit_postal_code("30301", &ServiceArea::default())
            .unwrap();
        session.advance().unwrap();
        assert_eq!(session.advance(), Err(WizardError::ProjectTypeRequired));

        session.select_project_type(ProjectType::Interior).unwrap();
        session.advance().unwrap();
        assert_eq!(session.advance(), Err(WizardError::NoSpecs));

        session.add_room(room(10, 10)).unwrap();
        assert_eq!(session.advance(), Ok(WizardStep::PrepAndQuality));
        assert_eq!(session.advance(), Err(WizardError::SelectionsRequired));

        session.select_prep(PrepCondition::Good).unwrap();
        assert_eq!(session.advance(), Err(WizardError::SelectionsRequired));
        session.select_paint_quality(PaintQuality::Better).unwrap();
        assert_eq!(session.advance(), Ok(WizardStep::Result));
        assert_eq!(session.advance(), Err(WizardError::AtLastStep));
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        assert_eq!(session.back(), WizardStep::ProjectTypeSelect);
        assert_eq!(session.back(), WizardStep::PostalGate);
        assert_eq!(session.back(), WizardStep::PostalGate);
    }

    #[test]
    fn test_exterior_only_needs_exterior_specs() {
        let mut session = session_at_build_specs(ProjectType::Exterior);
        session.add_room(room(10, 10)).unwrap();
        assert_eq!(session.advance(), Err(WizardError::NoSpecs));

        session
            .add_exterior_item(ExteriorSpec {
                siding: Siding::Vinyl,
                sqft: Measure::from(800),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.advance(), Ok(WizardStep::PrepAndQuality));
    }

    #[test]
    fn test_rejects_degenerate_specs() {
        let mut session = session_at_build_specs(ProjectType::Both);
        assert_eq!(
            session.add_room(room(0, 10)),
            Err(WizardError::InvalidRoomDimensions)
        );
        assert_eq!(
            session.add_exterior_item(ExteriorSpec::default()),
            Err(WizardError::InvalidExteriorArea)
        );
        assert!(session.rooms.is_empty());
        assert!(session.exterior_items.is_empty());
    }

    #[test]
    fn test_specs_locked_before_build_step() {
        let mut session = WizardSession::new();
        assert_eq!(
            session.add_room(room(10, 10)),
            Err(WizardError::WrongStep(WizardStep::PostalGate))
        );
    }

    #[test]
    fn test_replace_and_remove_by_index() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        session.add_room(room(10, 10)).unwrap();
        session.add_room(room(12, 12)).unwrap();

        session.replace_room(0, room(20, 20)).unwrap();
        assert_eq!(session.rooms[0], room(20, 20));

        session.remove_room(1).unwrap();
        assert_eq!(session.rooms.len(), 1);

        assert_eq!(
            session.remove_room(5),
            Err(WizardError::IndexOutOfRange { kind: "room", index: 5 })
        );
    }

    #[test]
    fn test_incomplete_input_yields_no_ticket() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        let ticket = session.add_room(room(10, 10)).unwrap();
        assert!(ticket.is_none());
        assert_eq!(session.estimate, EstimateResult::NOT_READY);
        assert_eq!(session.status, EstimateStatus::NotReady);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        session.add_room(room(10, 10)).unwrap();
        session.advance().unwrap();
        session.select_prep(PrepCondition::Good).unwrap();

        let first = session
            .select_paint_quality(PaintQuality::Good)
            .unwrap()
            .unwrap();
        let second = session.add_room(room(12, 12)).unwrap().unwrap();
        assert!(second.revision > first.revision);
        assert_eq!(session.status, EstimateStatus::Calculating);

        let newer = EstimateResult { low: 1100, high: 1400 };
        assert!(session.apply_estimate(&second, newer));
        assert!(!session.apply_estimate(&first, EstimateResult { low: 550, high: 700 }));
        assert_eq!(session.estimate, newer);
        assert_eq!(session.status, EstimateStatus::Ready);
    }

    #[test]
    fn test_failure_keeps_last_good_estimate() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        session.add_room(room(10, 10)).unwrap();
        session.advance().unwrap();
        session.select_prep(PrepCondition::Fair).unwrap();
        let ticket = session
            .select_paint_quality(PaintQuality::Good)
            .unwrap()
            .unwrap();
        let good = EstimateResult { low: 600, high: 750 };
        session.apply_estimate(&ticket, good);

        let ticket = session.select_prep(PrepCondition::Poor).unwrap().unwrap();
        assert!(session.fail_estimate(&ticket));
        assert_eq!(session.estimate, good);
        assert_eq!(session.status, EstimateStatus::Failed);
    }

    #[test]
    fn test_reset_invalidates_outstanding_tickets() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        session.add_room(room(10, 10)).unwrap();
        session.advance().unwrap();
        session.select_prep(PrepCondition::Good).unwrap();
        let ticket = session
            .select_paint_quality(PaintQuality::Good)
            .unwrap()
            .unwrap();
        let id = session.id;

        session.reset();
        assert_eq!(session.id, id);
        assert_eq!(session.step, WizardStep::PostalGate);
        assert!(session.rooms.is_empty());
        assert!(!session.apply_estimate(&ticket, EstimateResult { low: 1, high: 2 }));
        assert_eq!(session.estimate, EstimateResult::NOT_READY);
    }

    #[test]
    fn test_unknown_selections_rejected() {
        let mut session = WizardSession::new();
        session
            .submit_postal_code("30301", &ServiceArea::default())
            .unwrap();
        session.advance().unwrap();
        assert_eq!(
            session.select_project_type(ProjectType::Unknown),
            Err(WizardError::UnrecognizedSelection("project type"))
        );
    }

    #[test]
    fn test_changes_after_going_back_still_recalculate() {
        let mut session = session_at_build_specs(ProjectType::Interior);
        session.add_room(room(10, 10)).unwrap();
        session.advance().unwrap();
        session.select_prep(PrepCondition::Good).unwrap();
        let ticket = session
            .select_paint_quality(PaintQuality::Good)
            .unwrap()
            .unwrap();
        session.advance().unwrap();
        assert!(session.apply_estimate(&ticket, EstimateResult { low: 550, high: 700 }));

        assert_eq!(session.back(), WizardStep::PrepAndQuality);
        assert_eq!(session.back(), WizardStep::BuildSpecs);
        assert_eq!(session.back(), WizardStep::ProjectTypeSelect);
        assert_eq!(session.reached, WizardStep::Result);

        let revision = session.revision;
        let next = session.select_project_type(ProjectType::Exterior).unwrap();
        assert!(next.is_none());
        assert!(session.revision > revision);
        assert!(!session.is_current(&ticket));
        assert_eq!(session.estimate, EstimateResult::NOT_READY);
        assert_eq!(session.status, EstimateStatus::NotReady);
    }

    #[test]
    fn test_project_type_before_build_step_issues_no_ticket() {
        let mut session = WizardSession::new();
        session
            .submit_postal_code("30301", &ServiceArea::default())
            .unwrap();
        session.advance().unwrap();

        assert_eq!(session.select_project_type(ProjectType::Both), Ok(None));
        assert_eq!(session.revision, 0);
        assert_eq!(session.reached, WizardStep::ProjectTypeSelect);
    }

    #[test]
    fn test_check_recognized_exterior() {
        let item = ExteriorSpec {
            siding: Siding::Wood,
            sqft: Measure::from(900),
            ..Default::default()
        };
        assert_eq!(check_recognized_exterior(&item), Ok(()));

        let adobe = ExteriorSpec {
            siding: Siding::Unknown,
            ..item.clone()
        };
        assert_eq!(
            check_recognized_exterior(&adobe),
            Err(WizardError::UnrecognizedSelection("siding"))
        );

        let tower = ExteriorSpec {
            stories: Stories::Unknown,
            ..item
        };
        assert_eq!(
            check_recognized_exterior(&tower),
            Err(WizardError::UnrecognizedSelection("stories"))
        );
    }
}
