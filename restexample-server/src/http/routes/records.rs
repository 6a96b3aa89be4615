//! Record endpoints
//!
//! | Method | Path            | Success                  |
//! |--------|-----------------|--------------------------|
//! | GET    | /records        | 200, array of records    |
//! | POST   | /records        | 200, `{"id": "<id>"}`    |
//! | GET    | /records/{id}   | 200, record              |
//! | PUT    | /records/{id}   | 200, empty               |
//! | DELETE | /records/{id}   | 200, empty               |

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{RecordBody, RecordIdPath};
use crate::http::response::JsonResponse;
use crate::http::server::AppState;
use crate::models::{Created, Record};

/// GET /records - list all records
async fn list_records(
    State(state): State<AppState>,
) -> Result<JsonResponse<Vec<Record>>, ApiError> {
    let records = state.store().list().await?;
    Ok(JsonResponse(records))
}

/// GET /records/{id} - get a single record
async fn get_record(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
) -> Result<JsonResponse<Record>, ApiError> {
    let record = state.store().get(id).await?;
    Ok(JsonResponse(record))
}

/// POST /records - create a record, storage picks the id
async fn create_record(
    State(state): State<AppState>,
    RecordBody(payload): RecordBody,
) -> Result<JsonResponse<Created>, ApiError> {
    let id = state.store().create(payload).await?;
    tracing::debug!(id, "record created");
    Ok(JsonResponse(Created::from(id)))
}

/// PUT /records/{id} - overwrite name and type
async fn replace_record(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
    RecordBody(payload): RecordBody,
) -> Result<StatusCode, ApiError> {
    state.store().replace(id, payload).await?;
    Ok(StatusCode::OK)
}

/// DELETE /records/{id} - remove a record
async fn delete_record(
    State(state): State<AppState>,
    RecordIdPath(id): RecordIdPath,
) -> Result<StatusCode, ApiError> {
    state.store().delete(id).await?;
    Ok(StatusCode::OK)
}

/// Record routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(replace_record).delete(delete_record),
        )
}
