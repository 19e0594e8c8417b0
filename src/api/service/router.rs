use axum::routing::get;

use super::endpoints::*;
use super::State;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/api/reverse", get(reverse_geocode))
        .route("/api/geocode", get(geocode))
        .route("/api/predict", get(predict))
        .with_state(state)
}
