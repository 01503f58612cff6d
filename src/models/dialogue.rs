use super::Intent;

/// A point in the call flow. The provider carries it between turns as the
/// gather `action` URL, so each stage owns exactly one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Greeting,
    Inquiry,
    RoomTypeOrBooking,
    BookingMatch,
    Confirmation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Greeting => "greeting",
            Stage::Inquiry => "inquiry",
            Stage::RoomTypeOrBooking => "room_type_or_booking",
            Stage::BookingMatch => "booking_match",
            Stage::Confirmation => "confirmation",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Stage::Greeting => "/answer",
            Stage::Inquiry => "/handle-inquiry",
            Stage::RoomTypeOrBooking => "/handle-room-type",
            Stage::BookingMatch => "/handle-booking",
            Stage::Confirmation => "/confirm-booking",
        }
    }

    /// Transition table for the call flow.
    pub fn next(self, intent: Intent) -> Next {
        match (self, intent) {
            (_, Intent::Failure) => Next::Hangup,

            (Stage::Greeting, _) => Next::Gather(Stage::Inquiry),

            (Stage::Inquiry | Stage::RoomTypeOrBooking, Intent::Availability) => {
                Next::Gather(Stage::RoomTypeOrBooking)
            }
            (Stage::Inquiry | Stage::RoomTypeOrBooking, Intent::Prices | Intent::Book) => {
                Next::Gather(Stage::BookingMatch)
            }
            // "yes" to "would you like to hear room types and prices?"
            (Stage::RoomTypeOrBooking, Intent::Affirm) => Next::Gather(Stage::BookingMatch),

            (Stage::BookingMatch, Intent::RoomFound) => Next::Gather(Stage::Confirmation),
            (Stage::BookingMatch, _) => Next::Gather(Stage::BookingMatch),

            (Stage::Confirmation, Intent::Affirm) => Next::Hangup,

            // Unrecognized input anywhere else starts over at the inquiry menu
            (_, _) => Next::Gather(Stage::Inquiry),
        }
    }
}

/// What the provider should do once the prompt has been spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Collect speech and post it to the stage's endpoint.
    Gather(Stage),
    /// Stop collecting input; the dialogue is over.
    Hangup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueResponse {
    pub prompt: String,
    pub next: Next,
    /// Number to dial after the prompt, when the call is handed to a person.
    pub dial: Option<String>,
}

impl DialogueResponse {
    pub fn new(prompt: impl Into<String>, next: Next) -> Self {
        Self {
            prompt: prompt.into(),
            next,
            dial: None,
        }
    }

    pub fn gather(prompt: impl Into<String>, stage: Stage) -> Self {
        Self::new(prompt, Next::Gather(stage))
    }

    pub fn hangup(prompt: impl Into<String>) -> Self {
        Self::new(prompt, Next::Hangup)
    }

    pub fn with_dial(mut self, number: Option<String>) -> Self {
        self.dial = number;
        self
    }

    pub fn next_stage(&self) -> Option<Stage> {
        match self.next {
            Next::Gather(stage) => Some(stage),
            Next::Hangup => None,
        }
    }
}
