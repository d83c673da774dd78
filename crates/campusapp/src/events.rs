//! # Mutation Events
//!
//! Every successful mutation yields one [`Event`], which the server layer
//! broadcasts to all connected listeners after persistence completes.
//! Delivery is fire-and-forget: at-most-once, no acknowledgment, no replay
//! for listeners that connect later.
//!
//! The wire form is `{"event": "<name>", "data": {...}}`, with event names
//! and payload keys unchanged from the portal's original notification
//! channel so existing clients keep working.

use serde::Serialize;

use crate::model::AttendanceStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    AttendanceUpdated {
        id: u32,
        status: AttendanceStatus,
    },
    BookBorrowed {
        id: u32,
    },
    BookReturned {
        id: u32,
    },
    OrderCreated {
        #[serde(rename = "itemId")]
        item_id: u32,
        user: String,
    },
    SecurityAlert {
        #[serde(rename = "type")]
        kind: String,
        location: String,
        status: String,
    },
    BookingCreated {
        #[serde(rename = "roomId")]
        room_id: u32,
        user: String,
        date: String,
        time: String,
    },
}

impl Event {
    /// The broadcast channel name for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AttendanceUpdated { .. } => "attendance_updated",
            Event::BookBorrowed { .. } => "book_borrowed",
            Event::BookReturned { .. } => "book_returned",
            Event::OrderCreated { .. } => "order_created",
            Event::SecurityAlert { .. } => "security_alert",
            Event::BookingCreated { .. } => "booking_created",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_form() {
        let event = Event::BookBorrowed { id: 1 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "book_borrowed");
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_order_event_keeps_camel_case_item_id() {
        let event = Event::OrderCreated {
            item_id: 2,
            user: "guest".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["data"]["itemId"], 2);
    }

    #[test]
    fn test_names_match_serialized_tags() {
        let events = [
            Event::AttendanceUpdated {
                id: 1,
                status: AttendanceStatus::Present,
            },
            Event::BookBorrowed { id: 1 },
            Event::BookReturned { id: 1 },
            Event::OrderCreated {
                item_id: 1,
                user: "guest".into(),
            },
            Event::SecurityAlert {
                kind: "Fire".into(),
                location: "Lab".into(),
                status: "Active".into(),
            },
            Event::BookingCreated {
                room_id: 1,
                user: "guest".into(),
                date: "2026-09-01".into(),
                time: "10:00".into(),
            },
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["event"], event.name());
        }
    }
}
