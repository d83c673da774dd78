//! Room booking: static room catalog, append-only booking log, and the
//! server-side slot conflict check.
//!
//! The uniqueness rule — at most one booking per (room, date, time) — is
//! enforced here rather than trusted to clients, and the server holds a
//! single lock across each mutation, so two concurrent requests for the
//! same slot cannot both pass the check.

use crate::error::{CampusError, Result};
use crate::events::Event;
use crate::model::{Booking, Room};
use crate::store::{CampusStore, StorageBackend};

pub fn rooms<B: StorageBackend>(store: &CampusStore<B>) -> Vec<Room> {
    store.snapshot().rooms.clone()
}

pub fn bookings<B: StorageBackend>(store: &CampusStore<B>) -> Vec<Booking> {
    store.snapshot().bookings.clone()
}

/// Append a booking unless the (room, date, time) slot is already taken.
/// A missing user falls back to `guest`.
pub fn create_booking<B: StorageBackend>(
    store: &mut CampusStore<B>,
    room_id: u32,
    user: Option<String>,
    date: String,
    time: String,
) -> Result<Event> {
    let taken = store
        .snapshot()
        .bookings
        .iter()
        .any(|b| b.room_id == room_id && b.date == date && b.time == time);
    if taken {
        return Err(CampusError::SlotTaken {
            room_id,
            date,
            time,
        });
    }

    let user = user.unwrap_or_else(|| super::cafeteria::GUEST_USER.to_string());
    let booking = Booking {
        id: uuid::Uuid::new_v4(),
        room_id,
        user: user.clone(),
        date: date.clone(),
        time: time.clone(),
    };

    store.mutate(|data| data.bookings.push(booking))?;

    Ok(Event::BookingCreated {
        room_id,
        user,
        date,
        time,
    })
}
