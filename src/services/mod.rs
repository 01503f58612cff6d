pub mod catalog;
pub mod dialogue;
pub mod intent;
pub mod telephony;
pub mod twiml;
