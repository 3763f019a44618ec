//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository for storage operations.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dto::{self, HealthResponse, SuccessResponse};
use super::error::AppError;
use super::state::AppState;
use crate::model::{StudentId, StudentRecord};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Unwrap an extracted JSON body, mapping malformed payloads to the
/// invalid-data response instead of axum's plain-text rejection.
fn json_payload(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejecting malformed request body");
            Err(AppError::invalid_data())
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the document
/// store is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1.0".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Student CRUD
// =============================================================================

/// GET /api/v1.0/students
///
/// List all students as a JSON array of records.
pub async fn list_students(State(state): State<AppState>) -> HandlerResult<Vec<StudentRecord>> {
    let students = state.repository.list_students().await?;
    Ok(Json(students))
}

/// GET /api/v1.0/students/{id}
///
/// Fetch a single student by identifier.
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<StudentRecord> {
    let id = StudentId::new(id);
    let student = state
        .repository
        .find_student(&id)
        .await?
        .ok_or_else(AppError::student_not_found)?;

    Ok(Json(student))
}

/// POST /api/v1.0/students/add
///
/// Insert one or more students. The body is a JSON array of objects; a
/// single-element array uses the one-document insert path.
pub async fn add_students(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse>), AppError> {
    let body = json_payload(payload)?;
    let mut batch = dto::student_batch(body).ok_or_else(AppError::invalid_data)?;

    let message = if batch.len() == 1 {
        let fields = batch.remove(0);
        state.repository.insert_student(fields).await?;
        "Student added successfully"
    } else {
        state.repository.insert_students(batch).await?;
        "Students added successfully"
    };

    Ok((StatusCode::CREATED, Json(SuccessResponse::new(message))))
}

/// PUT /api/v1.0/students/update/{id}
///
/// Merge the body fields into one student record.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<SuccessResponse> {
    let body = json_payload(payload)?;
    let fields = dto::partial_student(body).ok_or_else(AppError::invalid_data)?;

    let id = StudentId::new(id);
    if state.repository.update_student(&id, fields).await? {
        Ok(Json(SuccessResponse::new("Student updated successfully")))
    } else {
        Err(AppError::student_not_found())
    }
}

/// DELETE /api/v1.0/students/delete/{id}
///
/// Remove one student record.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<SuccessResponse> {
    let id = StudentId::new(id);
    if state.repository.delete_student(&id).await? {
        Ok(Json(SuccessResponse::new("Student deleted successfully")))
    } else {
        Err(AppError::student_not_found())
    }
}

/// PUT /api/v1.0/students/update-all
///
/// Merge the body fields into every student record.
pub async fn update_all_students(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<SuccessResponse> {
    let body = json_payload(payload)?;
    let fields = dto::partial_student(body).ok_or_else(AppError::invalid_data)?;

    let updated = state.repository.update_all_students(fields).await?;
    tracing::debug!(updated, "applied update to all students");

    Ok(Json(SuccessResponse::new(
        "All students updated successfully",
    )))
}
