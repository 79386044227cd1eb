//! Request handlers.
//!
//! Handlers only translate between HTTP and the [`StrindexApi`] facade:
//! extract, lock, dispatch, serialize.
//!
//! [`StrindexApi`]: crate::api::StrindexApi

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::filter::{FilterParams, FilterSpec};
use crate::server::error::{RestError, RestResult};
use crate::server::state::AppState;
use crate::store::DataStore;

/// `POST /strings` with body `{"value": "..."}`.
///
/// - `201 Created` - the stored record
/// - `400 Bad Request` - body is not a JSON object with a `value` field
/// - `409 Conflict` - a string with the same identity exists
/// - `422 Unprocessable Entity` - `value` is not a string
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let Json(body) = body.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        RestError::BadRequest("Invalid request body".to_string())
    })?;

    let value = match body.get("value") {
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            return Err(RestError::UnprocessableEntity(
                "value must be a string".to_string(),
            ))
        }
        None => return Err(RestError::BadRequest("Invalid request body".to_string())),
    };

    let result = state.api().write().await.create_string(value)?;
    let record = result
        .affected_records
        .into_iter()
        .next()
        .ok_or_else(|| RestError::Internal("create returned no record".to_string()))?;

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// `GET /strings/{value}`.
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    value: Result<Path<String>, PathRejection>,
) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let Path(value) = value.map_err(path_error)?;
    debug!(value = %value, "Processing read request");

    let result = state.api().read().await.get_string(&value)?;
    match result.listed_records.into_iter().next() {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Err(RestError::NotFound("String not found.".to_string())),
    }
}

/// `DELETE /strings/{value}`.
///
/// - `204 No Content` - deleted
/// - `404 Not Found` - no such string
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    value: Result<Path<String>, PathRejection>,
) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let Path(value) = value.map_err(path_error)?;
    debug!(value = %value, "Processing delete request");

    state.api().write().await.delete_string(&value)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `GET /strings` with optional structured filter parameters.
///
/// Responds with `{"data", "count", "filters_applied"}`.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let Query(params) = params.map_err(query_error)?;
    let filter = FilterSpec::try_from(params)?;
    let result = state.api().read().await.filter_strings(filter)?;
    let count = result.listed_records.len();

    let body = json!({
        "data": result.listed_records,
        "count": count,
        "filters_applied": result.applied_filter.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// `GET /strings/filter-by-natural-language?query=...`.
///
/// Responds with `{"data", "count", "interpreted_query": {"original",
/// "parsed_filters"}}`.
pub async fn natural_language_handler<S>(
    State(state): State<AppState<S>>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let Query(params) = params.map_err(query_error)?;
    let query = params.query.unwrap_or_default();
    let result = state
        .api()
        .read()
        .await
        .query_strings(&query)
        .inspect_err(|e| warn!(query = %query, error = %e, "Natural-language query rejected"))?;
    let count = result.listed_records.len();

    let body = json!({
        "data": result.listed_records,
        "count": count,
        "interpreted_query": {
            "original": query,
            "parsed_filters": result.applied_filter.unwrap_or_default(),
        },
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// `GET /health`.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DataStore + Send + Sync + 'static,
{
    let records = state.api().read().await.record_count();

    let body = json!({
        "status": "healthy",
        "records": records,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

fn query_error(rejection: QueryRejection) -> RestError {
    debug!(error = %rejection, "Rejected query string");
    RestError::BadRequest(rejection.body_text())
}

fn path_error(rejection: PathRejection) -> RestError {
    debug!(error = %rejection, "Rejected path");
    RestError::BadRequest(rejection.body_text())
}
