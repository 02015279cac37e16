//! Notes Demo HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::application::{CreateNote, DeleteNote, GetNote, ListNotes, Note, UpdateNote};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ValidatedJson, ValidatedPath};
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct NoteParams {
    pub id: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<NoteResponse>>> {
    let notes = state.list_notes_handler.handle(ListNotes);
    Json(ApiResponse::success(
        notes.into_iter().map(Into::into).collect(),
        "Notes retrieved successfully",
    ))
}

/// GET /notes/:id
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<NoteParams>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.get_note_handler.handle(GetNote { id: params.id })?;
    Ok(Json(ApiResponse::success(
        note.into(),
        "Note retrieved successfully",
    )))
}

/// POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<NoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NoteResponse>>), ApiError> {
    let note = state.create_note_handler.handle(CreateNote {
        content: req.content,
    })?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(note.into(), "Note created successfully")),
    ))
}

/// PUT /notes/:id
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<NoteParams>,
    ValidatedJson(req): ValidatedJson<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.update_note_handler.handle(UpdateNote {
        id: params.id,
        content: req.content,
    })?;
    Ok(Json(ApiResponse::success(
        note.into(),
        "Note updated successfully",
    )))
}

/// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    ValidatedPath(params): ValidatedPath<NoteParams>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .delete_note_handler
        .handle(DeleteNote { id: params.id })?;
    Ok(Json(ApiResponse::ok("Note deleted successfully")))
}
