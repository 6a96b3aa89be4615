//! Custom Axum extractors
//!
//! Both reject with a bodiless 400 before any storage access.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{RecordId, RecordPayload, ValidationError};

/// Extract and validate a record id from path
pub struct RecordIdPath(pub RecordId);

impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::InvalidId {
                    value: e.body_text(),
                })
            })?;

        Ok(Self(RecordId::parse(&raw)?))
    }
}

/// Record payload decoded from the body regardless of the request content type
///
/// `curl -d` labels JSON bodies as form data; those still decode here.
pub struct RecordBody(pub RecordPayload);

impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: e.body_text(),
            })
        })?;

        Ok(Self(RecordPayload::from_slice(&body)?))
    }
}
