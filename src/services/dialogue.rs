use crate::errors::AppError;
use crate::models::{DialogueResponse, Intent, RoomTypePrice, Stage};
use crate::services::intent::{
    classify_confirmation, classify_inquiry, classify_room_type_follow_up, matches_room_type,
};
use crate::state::AppState;

const MENU_OPTIONS: &str =
    "You can ask about room availability, prices, or make a reservation. What would you like to know?";

/// Run one turn of the call flow.
///
/// Never fails: a turn that errors is logged and answered with a fixed apology
/// that ends the call. Nothing carries over to the next turn.
pub async fn respond(state: &AppState, stage: Stage, utterance: &str) -> DialogueResponse {
    let result = match stage {
        Stage::Greeting => Ok(greeting()),
        Stage::Inquiry => inquiry(state, classify_inquiry(utterance)).await,
        Stage::RoomTypeOrBooking => {
            inquiry_follow_up(state, classify_room_type_follow_up(utterance)).await
        }
        Stage::BookingMatch => booking_match(state, utterance).await,
        Stage::Confirmation => Ok(confirmation(state, classify_confirmation(utterance))),
    };

    match result {
        Ok(response) => {
            tracing::info!(
                stage = stage.as_str(),
                next = response.next_stage().map(|s| s.as_str()).unwrap_or("end"),
                "dialogue turn complete"
            );
            response
        }
        Err(e) => failure(stage, &e),
    }
}

/// Answer for a turn that failed: the caller hears a fixed apology, the
/// operator gets the details.
pub fn failure(stage: Stage, error: &AppError) -> DialogueResponse {
    tracing::error!(stage = stage.as_str(), error = %error, "dialogue turn failed");
    DialogueResponse::new(error.caller_prompt(), stage.next(Intent::Failure))
}

fn greeting() -> DialogueResponse {
    let prompt = format!("Welcome to our Hotel Reservation System. {MENU_OPTIONS}");
    DialogueResponse::new(prompt, Stage::Greeting.next(Intent::CallStarted))
}

async fn inquiry(state: &AppState, intent: Intent) -> Result<DialogueResponse, AppError> {
    inquiry_at(state, Stage::Inquiry, intent).await
}

async fn inquiry_follow_up(state: &AppState, intent: Intent) -> Result<DialogueResponse, AppError> {
    if intent == Intent::Affirm {
        let prices = state.catalog.list_room_type_prices().await?;
        return Ok(DialogueResponse::new(
            price_listing(&prices),
            Stage::RoomTypeOrBooking.next(intent),
        ));
    }
    inquiry_at(state, Stage::RoomTypeOrBooking, intent).await
}

async fn inquiry_at(
    state: &AppState,
    stage: Stage,
    intent: Intent,
) -> Result<DialogueResponse, AppError> {
    let prompt = match intent {
        Intent::Availability => {
            let available = state.catalog.list_available_rooms().await?;
            format!(
                "We have {} rooms available. Would you like to hear about specific room types and their prices?",
                available.len()
            )
        }
        Intent::Prices => {
            let prices = state.catalog.list_room_type_prices().await?;
            price_listing(&prices)
        }
        Intent::Book => {
            "I can help you with a reservation. What type of room would you like to book?"
                .to_string()
        }
        _ => format!("I'm sorry, I didn't quite catch that. {MENU_OPTIONS}"),
    };

    Ok(DialogueResponse::new(prompt, stage.next(intent)))
}

async fn booking_match(state: &AppState, query: &str) -> Result<DialogueResponse, AppError> {
    let available = state.catalog.list_available_rooms().await?;

    // First match in file order, not cheapest or best.
    let found = available
        .iter()
        .find(|room| matches_room_type(&room.room_type, query));

    let (intent, prompt) = match found {
        Some(room) => (
            Intent::RoomFound,
            format!(
                "I found a {} room with a {} view for ${:.2} per night. Would you like to proceed with the booking?",
                room.room_type, room.view_type, room.price_per_night
            ),
        ),
        None => (
            Intent::NoRoomFound,
            "I'm sorry, I couldn't find an available room of that type. Would you like to hear about other room types we have available?"
                .to_string(),
        ),
    };

    tracing::debug!(query, intent = intent.as_str(), "room type lookup");
    Ok(DialogueResponse::new(prompt, Stage::BookingMatch.next(intent)))
}

fn confirmation(state: &AppState, intent: Intent) -> DialogueResponse {
    let next = Stage::Confirmation.next(intent);
    match intent {
        Intent::Affirm => DialogueResponse::new(
            "Great! To complete your booking, I'll transfer you to our reservation desk to collect your information and payment details. Please stay on the line.",
            next,
        )
        .with_dial(state.config.reservation_desk_number.clone()),
        _ => DialogueResponse::new(
            "No problem. Would you like to hear about other room options?",
            next,
        ),
    }
}

fn price_listing(prices: &[RoomTypePrice]) -> String {
    let mut listing = String::from("Here are our room types and prices per night: ");
    for price in prices {
        listing.push_str(&format!(
            "{} for ${:.2}. ",
            price.room_type, price.price_per_night
        ));
    }
    listing.push_str("Would you like to make a reservation?");
    listing
}
