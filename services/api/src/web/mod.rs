pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::web::middleware::{identify, require_user};
use crate::web::rest::*;
use crate::web::state::AppState;

/// Builds every API route. CORS and the Swagger UI are added by the binary.
pub fn router(app_state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/words", get(list_words_handler))
        .route("/words/today", get(today_handler))
        .route("/words/shuffle", get(shuffle_handler))
        .route("/words/{word}/quiz", get(quiz_handler))
        .route(
            "/reactions/{word}",
            get(get_reactions_handler).post(react_handler),
        )
        .route("/history", get(history_handler))
        .route("/history/today", post(record_today_handler))
        .route("/activity", post(activity_handler))
        .route("/feedback", post(feedback_handler));

    let signed_in_routes = Router::new()
        .route(
            "/preferences",
            get(get_preferences_handler).put(put_preferences_handler),
        )
        .route_layer(axum_middleware::from_fn(require_user));

    Router::new()
        .merge(public_routes)
        .merge(signed_in_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            identify,
        ))
        .with_state(app_state)
}
