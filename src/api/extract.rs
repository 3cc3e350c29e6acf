use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use super::ApiError;

/// Request body parsed as untyped JSON.
///
/// Field-level checks are left to the store's schemas, so this extractor only
/// rejects bodies that are not JSON at all. An empty body reads as `{}`. The
/// `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::warn!("Malformed JSON body: {}", e);
            ApiError::BadRequest(e.to_string())
        })
    }
}
