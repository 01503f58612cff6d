use serde::Deserialize;

/// One row of the room inventory file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Room {
    pub room_type: String,
    pub status: RoomStatus,
    pub price_per_night: f64,
    pub view_type: String,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "String")]
pub enum RoomStatus {
    Available,
    Other(String),
}

impl RoomStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Other(s) => s.as_str(),
        }
    }
}

// Exact match only: "Available" or "available " in the file is not available.
impl From<String> for RoomStatus {
    fn from(s: String) -> Self {
        if s == "available" {
            RoomStatus::Available
        } else {
            RoomStatus::Other(s)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypePrice {
    pub room_type: String,
    pub price_per_night: f64,
}
