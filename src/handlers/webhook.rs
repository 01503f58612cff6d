use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{DialogueResponse, Stage};
use crate::services::dialogue;
use crate::services::twiml::VoiceResponse;
use crate::state::AppState;

use super::twiml_response;

/// The subset of a Twilio voice webhook this service reads.
#[derive(Debug, Default, Deserialize)]
pub struct VoiceWebhookForm {
    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "SpeechResult")]
    pub speech_result: Option<String>,
}

pub async fn answer(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!(stage = Stage::Greeting.as_str(), "incoming call");
    let response = dialogue::respond(&state, Stage::Greeting, "").await;
    render(&state, &response)
}

pub async fn handle_inquiry(
    State(state): State<Arc<AppState>>,
    form: Result<Form<VoiceWebhookForm>, FormRejection>,
) -> Response {
    handle_turn(&state, Stage::Inquiry, form).await
}

pub async fn handle_room_type(
    State(state): State<Arc<AppState>>,
    form: Result<Form<VoiceWebhookForm>, FormRejection>,
) -> Response {
    handle_turn(&state, Stage::RoomTypeOrBooking, form).await
}

pub async fn handle_booking(
    State(state): State<Arc<AppState>>,
    form: Result<Form<VoiceWebhookForm>, FormRejection>,
) -> Response {
    handle_turn(&state, Stage::BookingMatch, form).await
}

pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    form: Result<Form<VoiceWebhookForm>, FormRejection>,
) -> Response {
    handle_turn(&state, Stage::Confirmation, form).await
}

async fn handle_turn(
    state: &AppState,
    stage: Stage,
    form: Result<Form<VoiceWebhookForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        // Bodies that are not form-encoded are skipped, not failed: the turn
        // carries on with no speech.
        Err(FormRejection::InvalidFormContentType(rejection)) => {
            tracing::warn!(stage = stage.as_str(), %rejection, "webhook body is not form-encoded");
            VoiceWebhookForm::default()
        }
        Err(rejection) => {
            let error = AppError::Unhandled(format!("unreadable webhook body: {rejection}"));
            return render(state, &dialogue::failure(stage, &error));
        }
    };

    let utterance = form.speech_result.as_deref().unwrap_or("");
    tracing::info!(
        stage = stage.as_str(),
        call_sid = form.call_sid.as_deref().unwrap_or("-"),
        from = form.from.as_deref().unwrap_or("-"),
        utterance,
        "incoming speech"
    );

    let response = dialogue::respond(state, stage, utterance).await;
    render(state, &response)
}

fn render(state: &AppState, response: &DialogueResponse) -> Response {
    twiml_response(&VoiceResponse::from_dialogue(
        response,
        &state.config.tts_voice,
        &state.config.speech_language,
    ))
}
