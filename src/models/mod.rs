pub mod dialogue;
pub mod intent;
pub mod room;

pub use dialogue::{DialogueResponse, Next, Stage};
pub use intent::Intent;
pub use room::{Room, RoomStatus, RoomTypePrice};
