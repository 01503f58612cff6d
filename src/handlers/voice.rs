use axum::response::Response;

use crate::services::twiml::{Say, VoiceResponse};

use super::twiml_response;

const GREETING: &str = "Hello! This is your bot speaking. How can I help you today?";

/// Single-turn greeter: ignores the webhook body and never gathers.
pub async fn voice() -> Response {
    tracing::info!("incoming call on greeter line");
    let twiml = VoiceResponse::new().say(Say {
        voice: None,
        text: GREETING.to_string(),
    });
    twiml_response(&twiml)
}
