//! Wizard session routes
//!
//! Server-side state for the estimator wizard. Every input change that makes
//! the session priceable schedules a debounced recalculation; clients poll
//! `GET /sessions/:id` for the estimate.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::domain::wizard::{
    PaintQualityRequest, PostalCodeRequest, PrepRequest, ProjectTypeRequest, SessionResponse,
};
use crate::domain::{ExteriorSpec, RoomSpec};
use crate::error::{ApiError, ApiResult};
use crate::wizard::{check_recognized_exterior, RecalcTicket, WizardError, WizardSession};

type SessionJson = Json<DataResponse<SessionResponse>>;

fn session_not_found() -> ApiError {
    ApiError::not_found("Session not found")
}

/// Apply an input change and schedule a recalculation if it produced a ticket.
fn change_input<F>(state: &AppState, id: Uuid, f: F) -> ApiResult<SessionJson>
where
    F: FnOnce(&mut WizardSession) -> Result<Option<RecalcTicket>, WizardError>,
{
    let (ticket, response) = state
        .sessions
        .update(id, |session| {
            let ticket = f(session)?;
            Ok::<_, WizardError>((ticket, SessionResponse::from(&*session)))
        })
        .ok_or_else(session_not_found)??;

    if let Some(ticket) = ticket {
        tracing::debug!(session_id = %id, revision = ticket.revision, "Recalculation scheduled");
        state.recalculator.schedule(ticket);
    }

    Ok(Json(DataResponse::new(response)))
}

/// POST /sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Created<DataResponse<SessionResponse>> {
    let session = state.sessions.create();
    tracing::info!(session_id = %session.id, "Wizard session started");
    Created(DataResponse::new(SessionResponse::from(&session)))
}

/// GET /sessions/:session_id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionJson> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(session_not_found)?;
    Ok(Json(DataResponse::new(SessionResponse::from(&session))))
}

/// DELETE /sessions/:session_id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    if !state.sessions.remove(session_id) {
        return Err(session_not_found());
    }
    Ok(NoContent)
}

/// POST /sessions/:session_id/reset
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| {
        s.reset();
        Ok(None)
    })
}

/// POST /sessions/:session_id/postal-code
pub async fn submit_postal_code(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PostalCodeRequest>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| {
        s.submit_postal_code(&req.postal_code, &state.service_area)?;
        Ok(None)
    })
}

/// PUT /sessions/:session_id/project-type
pub async fn select_project_type(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<ProjectTypeRequest>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| s.select_project_type(req.project_type))
}

/// POST /sessions/:session_id/rooms
pub async fn add_room(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(room): Json<RoomSpec>,
) -> ApiResult<SessionJson> {
    tracing::info!(session_id = %session_id, room = room.label(), "Adding room");
    change_input(&state, session_id, |s| s.add_room(room))
}

/// PUT /sessions/:session_id/rooms/:index
pub async fn replace_room(
    State(state): State<Arc<AppState>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
    Json(room): Json<RoomSpec>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| s.replace_room(index, room))
}

/// DELETE /sessions/:session_id/rooms/:index
pub async fn remove_room(
    State(state): State<Arc<AppState>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| s.remove_room(index))
}

/// POST /sessions/:session_id/exterior-items
pub async fn add_exterior_item(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(item): Json<ExteriorSpec>,
) -> ApiResult<SessionJson> {
    if state.settings.strict_enums {
        check_recognized_exterior(&item)?;
    }
    change_input(&state, session_id, |s| s.add_exterior_item(item))
}

/// PUT /sessions/:session_id/exterior-items/:index
pub async fn replace_exterior_item(
    State(state): State<Arc<AppState>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
    Json(item): Json<ExteriorSpec>,
) -> ApiResult<SessionJson> {
    if state.settings.strict_enums {
        check_recognized_exterior(&item)?;
    }
    change_input(&state, session_id, |s| s.replace_exterior_item(index, item))
}

/// DELETE /sessions/:session_id/exterior-items/:index
pub async fn remove_exterior_item(
    State(state): State<Arc<AppState>>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| s.remove_exterior_item(index))
}

/// PUT /sessions/:session_id/prep
pub async fn select_prep(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PrepRequest>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| s.select_prep(req.selected_prep))
}

/// PUT /sessions/:session_id/paint-quality
pub async fn select_paint_quality(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<PaintQualityRequest>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| {
        s.select_paint_quality(req.selected_paint_quality)
    })
}

/// POST /sessions/:session_id/advance
pub async fn advance(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| {
        s.advance()?;
        Ok(None)
    })
}

/// POST /sessions/:session_id/back
pub async fn back(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionJson> {
    change_input(&state, session_id, |s| {
        s.back();
        Ok(None)
    })
}
