//! # API Facade
//!
//! A thin facade over the rules layer: the single entry point for every
//! portal operation, regardless of the surface calling it (HTTP today,
//! anything else tomorrow).
//!
//! The facade dispatches to the rule functions and returns structured
//! types. It carries no business logic of its own, performs no I/O beyond
//! what the store does, and knows nothing about HTTP.
//!
//! ## Generic Over StorageBackend
//!
//! `CampusApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `CampusApi<FsBackend>`
//! - Testing: `CampusApi<MemBackend>`
//!
//! This lets callers exercise the full operation surface without touching
//! the filesystem.

use crate::error::Result;
use crate::events::Event;
use crate::model::{
    AttendanceStats, AttendanceStatus, Book, Booking, MenuItem, Order, Room, RosterEntry,
    SecurityAlert,
};
use crate::rules;
use crate::store::{CampusStore, StorageBackend};

pub struct CampusApi<B: StorageBackend> {
    store: CampusStore<B>,
}

impl<B: StorageBackend> CampusApi<B> {
    /// Open the store on `backend`, seeding starter data on first boot.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: CampusStore::open(backend)?,
        })
    }

    // --- Attendance ---

    pub fn roster(&self) -> Vec<RosterEntry> {
        rules::attendance::roster(&self.store)
    }

    pub fn attendance_stats(&self) -> AttendanceStats {
        rules::attendance::today_stats(&self.store)
    }

    pub fn set_attendance(&mut self, student_id: u32, status: AttendanceStatus) -> Result<Event> {
        rules::attendance::set_attendance(&mut self.store, student_id, status)
    }

    // --- Library ---

    pub fn books(&self) -> Vec<Book> {
        rules::library::list_books(&self.store)
    }

    pub fn borrow_book(&mut self, id: u32) -> Result<Event> {
        rules::library::borrow_book(&mut self.store, id)
    }

    pub fn return_book(&mut self, id: u32) -> Result<Event> {
        rules::library::return_book(&mut self.store, id)
    }

    // --- Cafeteria ---

    pub fn menu(&self) -> Vec<MenuItem> {
        rules::cafeteria::menu(&self.store)
    }

    pub fn create_order(&mut self, item_id: u32, user: Option<String>) -> Result<Event> {
        rules::cafeteria::create_order(&mut self.store, item_id, user)
    }

    pub fn orders_for_user(&self, user: &str) -> Vec<Order> {
        rules::cafeteria::orders_for_user(&self.store, user)
    }

    // --- Security ---

    pub fn alerts(&self) -> Vec<SecurityAlert> {
        rules::security::alerts(&self.store)
    }

    pub fn add_alert(
        &mut self,
        kind: String,
        location: String,
        status: Option<String>,
    ) -> Result<Event> {
        rules::security::add_alert(&mut self.store, kind, location, status)
    }

    pub fn trigger_emergency(&mut self) -> Result<Event> {
        rules::security::trigger_emergency(&mut self.store)
    }

    // --- Rooms & bookings ---

    pub fn rooms(&self) -> Vec<Room> {
        rules::booking::rooms(&self.store)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        rules::booking::bookings(&self.store)
    }

    pub fn create_booking(
        &mut self,
        room_id: u32,
        user: Option<String>,
        date: String,
        time: String,
    ) -> Result<Event> {
        rules::booking::create_booking(&mut self.store, room_id, user, date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;
    use crate::store::mem_backend::MemBackend;

    fn make_api() -> CampusApi<MemBackend> {
        CampusApi::open(MemBackend::new()).unwrap()
    }

    #[test]
    fn test_facade_round_trip() {
        let mut api = make_api();

        assert_eq!(api.roster().len(), 5);
        assert_eq!(api.books().len(), 3);
        assert_eq!(api.menu().len(), 3);
        assert_eq!(api.rooms().len(), 4);

        api.set_attendance(3, AttendanceStatus::Absent).unwrap();
        let stats = api.attendance_stats();
        assert_eq!(stats.present + stats.absent, 5);

        api.borrow_book(1).unwrap();
        assert!(matches!(
            api.borrow_book(1),
            Err(CampusError::BookNotAvailable(1))
        ));

        api.create_order(2, None).unwrap();
        assert_eq!(api.orders_for_user("guest").len(), 1);

        api.create_booking(1, None, "2026-09-01".into(), "10:00".into())
            .unwrap();
        assert_eq!(api.bookings().len(), 1);
    }
}
