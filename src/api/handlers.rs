//! HTTP request handlers for the salary ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::SalaryRecord;
use crate::preview::LivePreview;

use super::request::{
    CreateSalaryRequest, ListSalariesQuery, PreviewRequest, ReplaceAdvanceRequest,
};
use super::response::{ApiError, ApiErrorResponse, SalaryListResponse, SalaryRecordView};
use super::state::AppState;

type ApiResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/salaries", post(create_handler).get(list_handler))
        .route("/salaries/preview", post(preview_handler))
        .route("/salaries/:id", get(get_handler).delete(delete_handler))
        .route("/salaries/:id/advance", put(replace_advance_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /salaries.
///
/// Checks the submitted fields, runs the calculation and saves the record.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSalaryRequest>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create salary request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let start_time = Instant::now();
    let now = Utc::now();
    let saved = request
        .into_new_record(now.date_naive())
        .and_then(|new| SalaryRecord::create(new, now).map_err(ApiErrorResponse::from))
        .and_then(|record| state.store().create(record).map_err(ApiErrorResponse::from))
        .inspect_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                code = %err.error.code,
                field = ?err.error.field,
                "Salary record rejected"
            );
        })?;

    info!(
        correlation_id = %correlation_id,
        record_id = %saved.id(),
        employee_id = %saved.employee_id(),
        payment_status = %saved.payment_status(),
        duration_us = start_time.elapsed().as_micros(),
        "Salary record created"
    );

    let view = SalaryRecordView::new(saved, &state.config().display.currency_symbol);
    Ok((StatusCode::CREATED, Json(view)).into_response())
}

/// Handler for GET /salaries.
///
/// Lists stored records. Derived fields are returned as stored.
async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListSalariesQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Invalid list query");
        ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", rejection.body_text()))
    })?;

    let filter = query.into_filter(&state.config().listing)?;
    let page = state.store().find(&filter)?;

    info!(
        total = page.total,
        returned = page.records.len(),
        "Listed salary records"
    );

    let symbol = &state.config().display.currency_symbol;
    let body = SalaryListResponse {
        records: page
            .records
            .into_iter()
            .map(|record| SalaryRecordView::new(record, symbol))
            .collect(),
        total: page.total,
        limit: filter.limit.unwrap_or(page.total),
        skip: filter.skip,
    };
    Ok(Json(body).into_response())
}

/// Handler for GET /salaries/{id}.
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult {
    let id = record_id(id)?;
    let record = state
        .store()
        .find_by_id(id)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(SalaryRecordView::new(record, &state.config().display.currency_symbol)).into_response())
}

/// Handler for PUT /salaries/{id}/advance.
///
/// Replaces the advance; the store re-derives the record before saving.
async fn replace_advance_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ReplaceAdvanceRequest>, JsonRejection>,
) -> ApiResult {
    let correlation_id = Uuid::new_v4();
    let id = record_id(id)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let advance = request.advance()?;
    let updated = state
        .store()
        .replace_advance(id, advance)
        .map_err(ApiErrorResponse::from)
        .inspect_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                record_id = %id,
                code = %err.error.code,
                "Advance replacement rejected"
            );
        })?;

    info!(
        correlation_id = %correlation_id,
        record_id = %id,
        payment_status = %updated.payment_status(),
        "Advance replaced"
    );

    Ok(Json(SalaryRecordView::new(updated, &state.config().display.currency_symbol)).into_response())
}

/// Handler for DELETE /salaries/{id}.
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult {
    let id = record_id(id)?;
    if !state.store().delete_by_id(id)? {
        return Err(not_found(id));
    }

    info!(record_id = %id, "Salary record deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for POST /salaries/preview.
///
/// Always answers 200; invalid input is reported through the status label.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> ApiResult {
    let request = payload.map(|Json(req)| req).unwrap_or_default();
    let preview = LivePreview::evaluate(
        &request.total_text(),
        &request.advance_text(),
        &state.config().display.currency_symbol,
    );
    Ok(Json(preview).into_response())
}

fn record_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiErrorResponse> {
    id.map(|Path(id)| id).map_err(|rejection| {
        ApiErrorResponse::bad_request(ApiError::invalid_field(
            "id",
            format!("Invalid record id: {}", rejection.body_text()),
        ))
    })
}

fn not_found(id: Uuid) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::NOT_FOUND,
        error: ApiError::new("RECORD_NOT_FOUND", format!("Salary record not found: {}", id)),
    }
}

fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("VALIDATION_ERROR", body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
