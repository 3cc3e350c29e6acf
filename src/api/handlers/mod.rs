use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, JsonBody};
use crate::models::*;
use crate::store::{parse_id, validate_update, PlanetStore, StoreError};

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Planets
// ============================================================

pub async fn list_planets(State(store): State<PlanetStore>) -> Json<Vec<Planet>> {
    Json(store.list())
}

pub async fn get_planet(
    State(store): State<PlanetStore>,
    Path(id): Path<String>,
) -> Result<Json<Planet>, ApiError> {
    let id = parse_id(&id).ok_or(StoreError::NotFound)?;
    Ok(Json(store.get_by_id(id)?))
}

pub async fn create_planet(
    State(store): State<PlanetStore>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<PlanetMessageResponse>), ApiError> {
    let planet = store.create(&body)?;
    Ok((
        StatusCode::CREATED,
        Json(PlanetMessageResponse {
            msg: PLANET_CREATED.to_string(),
            planet,
        }),
    ))
}

pub async fn update_planet(
    State(store): State<PlanetStore>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<PlanetMessageResponse>, ApiError> {
    let planet = match parse_id(&id) {
        Some(id) => store.update(id, &body)?,
        None => {
            // The payload is still checked first so a bad body wins over a bad id.
            validate_update(&body)?;
            return Err(StoreError::NotFound.into());
        }
    };

    Ok(Json(PlanetMessageResponse {
        msg: PLANET_UPDATED.to_string(),
        planet,
    }))
}

pub async fn delete_planet(
    State(store): State<PlanetStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id).ok_or(StoreError::NotFound)?;
    store.delete(id)?;
    Ok(Json(MessageResponse::new(PLANET_DELETED)))
}
