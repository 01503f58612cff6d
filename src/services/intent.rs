use crate::models::Intent;

const AVAILABILITY_KEYWORDS: &[&str] = &["available", "vacancy"];
const PRICE_KEYWORDS: &[&str] = &["price", "cost"];
const BOOKING_KEYWORDS: &[&str] = &["book", "reserve"];
const CONFIRM_KEYWORDS: &[&str] = &["yes", "confirm"];
const HEAR_MORE_KEYWORDS: &[&str] = &["yes", "sure"];

fn contains_any(utterance: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| utterance.contains(k))
}

/// Classify an utterance at the inquiry menu.
///
/// Rules are checked in order and the first hit wins, so "is anything available
/// and what's the price" is an availability question.
pub fn classify_inquiry(utterance: &str) -> Intent {
    let utterance = utterance.to_lowercase();

    if contains_any(&utterance, AVAILABILITY_KEYWORDS) {
        Intent::Availability
    } else if contains_any(&utterance, PRICE_KEYWORDS) {
        Intent::Prices
    } else if contains_any(&utterance, BOOKING_KEYWORDS) {
        Intent::Book
    } else {
        Intent::Unrecognized
    }
}

/// Classify the answer to "would you like to hear about specific room types?".
/// Anything but a yes is treated as a fresh inquiry.
pub fn classify_room_type_follow_up(utterance: &str) -> Intent {
    if contains_any(&utterance.to_lowercase(), HEAR_MORE_KEYWORDS) {
        Intent::Affirm
    } else {
        classify_inquiry(utterance)
    }
}

pub fn classify_confirmation(utterance: &str) -> Intent {
    if contains_any(&utterance.to_lowercase(), CONFIRM_KEYWORDS) {
        Intent::Affirm
    } else {
        Intent::Decline
    }
}

/// Case-insensitive substring match of a spoken room-type query against a
/// catalog room type. An empty query matches every type.
pub fn matches_room_type(room_type: &str, query: &str) -> bool {
    room_type.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_keywords() {
        assert_eq!(classify_inquiry("What rooms are AVAILABLE"), Intent::Availability);
        assert_eq!(classify_inquiry("any vacancy tonight?"), Intent::Availability);
        assert_eq!(classify_inquiry("what's the price"), Intent::Prices);
        assert_eq!(classify_inquiry("how much does it cost"), Intent::Prices);
        assert_eq!(classify_inquiry("I want to book a room"), Intent::Book);
        assert_eq!(classify_inquiry("Reserve please"), Intent::Book);
        assert_eq!(classify_inquiry("hello there"), Intent::Unrecognized);
        assert_eq!(classify_inquiry(""), Intent::Unrecognized);
    }

    #[test]
    fn test_inquiry_precedence() {
        assert_eq!(
            classify_inquiry("what's the price of available rooms"),
            Intent::Availability
        );
        assert_eq!(
            classify_inquiry("I'd like to book, what's the price"),
            Intent::Prices
        );
        // substring containment, not word matching
        assert_eq!(classify_inquiry("my booking"), Intent::Book);
    }

    #[test]
    fn test_room_type_follow_up() {
        assert_eq!(classify_room_type_follow_up("Yes please"), Intent::Affirm);
        assert_eq!(classify_room_type_follow_up("sure"), Intent::Affirm);
        assert_eq!(classify_room_type_follow_up("just book it"), Intent::Book);
        assert_eq!(classify_room_type_follow_up("no thanks"), Intent::Unrecognized);
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(classify_confirmation("yes please"), Intent::Affirm);
        assert_eq!(classify_confirmation("I CONFIRM"), Intent::Affirm);
        assert_eq!(classify_confirmation("no"), Intent::Decline);
        assert_eq!(classify_confirmation(""), Intent::Decline);
    }

    #[test]
    fn test_matches_room_type() {
        assert!(matches_room_type("Deluxe Suite", "deluxe"));
        assert!(matches_room_type("Deluxe Suite", "SUITE"));
        assert!(matches_room_type("Deluxe Suite", ""));
        assert!(!matches_room_type("Deluxe Suite", "penthouse"));
    }
}
