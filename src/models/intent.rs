/// What a caller's utterance (or the lack of one) means at a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CallStarted,
    Availability,
    Prices,
    Book,
    Unrecognized,
    Affirm,
    Decline,
    RoomFound,
    NoRoomFound,
    Failure,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CallStarted => "call_started",
            Intent::Availability => "availability",
            Intent::Prices => "prices",
            Intent::Book => "book",
            Intent::Unrecognized => "unrecognized",
            Intent::Affirm => "affirm",
            Intent::Decline => "decline",
            Intent::RoomFound => "room_found",
            Intent::NoRoomFound => "no_room_found",
            Intent::Failure => "failure",
        }
    }
}
