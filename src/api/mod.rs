mod error;
mod extract;
mod handlers;

pub use error::ApiError;
pub use extract::JsonBody;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::PlanetStore;

pub fn create_router(store: PlanetStore) -> Router {
    let api = Router::new()
        .route(
            "/planets",
            get(handlers::list_planets).post(handlers::create_planet),
        )
        .route(
            "/planets/{id}",
            get(handlers::get_planet)
                .put(handlers::update_planet)
                .delete(handlers::delete_planet),
        );

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(store)
}
