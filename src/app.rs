use std::any::Any;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Routes for the hotel reservation IVR.
pub fn hotel_router(state: Arc<AppState>) -> Router {
    let voice = state.config.tts_voice.clone();

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/answer", post(handlers::webhook::answer))
        .route("/handle-inquiry", post(handlers::webhook::handle_inquiry))
        .route("/handle-room-type", post(handlers::webhook::handle_room_type))
        .route("/handle-booking", post(handlers::webhook::handle_booking))
        .route("/confirm-booking", post(handlers::webhook::confirm_booking))
        .with_state(state)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| handlers::panic_response(Some(&voice), panic),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Routes for the one-sentence greeter line, deployed on its own.
pub fn greeter_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/voice", post(handlers::voice::voice))
        .layer(CatchPanicLayer::custom(
            |panic: Box<dyn Any + Send + 'static>| handlers::panic_response(None, panic),
        ))
        .layer(TraceLayer::new_for_http())
}
