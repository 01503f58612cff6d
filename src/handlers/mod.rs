pub mod health;
pub mod voice;
pub mod webhook;

use std::any::Any;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::services::twiml::{Say, VoiceResponse};

pub fn twiml_response(twiml: &VoiceResponse) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], twiml.render()).into_response()
}

/// Response for a handler that panicked: the caller hears the generic
/// unexpected-error prompt and the call ends.
pub fn panic_response(voice: Option<&str>, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");

    let error = AppError::Unhandled(detail);
    let twiml = VoiceResponse::new().say(Say {
        voice: voice.map(str::to_string),
        text: error.caller_prompt().to_string(),
    });
    twiml_response(&twiml)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_panic_response_with_voice() {
        let response = panic_response(Some("Polly.Amy-Neural"), Box::new("boom"));
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
        let body = body_text(response).await;
        assert!(body.contains(
            r#"<Say voice="Polly.Amy-Neural">Sorry, we encountered an unexpected error. Please try again later.</Say>"#
        ));
        assert!(!body.contains("<Gather"));
        assert!(!body.contains("boom"));
    }

    #[tokio::test]
    async fn test_panic_response_without_voice() {
        let response = panic_response(None, Box::new(String::from("greeter failed")));
        let body = body_text(response).await;
        assert!(body.contains(
            "<Response><Say>Sorry, we encountered an unexpected error. Please try again later.</Say></Response>"
        ));
    }
}
