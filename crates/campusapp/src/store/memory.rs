use super::doc_store::CampusStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = CampusStore<MemBackend>;

impl InMemoryStore {
    pub fn new() -> Self {
        CampusStore::open(MemBackend::new()).expect("in-memory open cannot fail")
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookStatus, Booking, SecurityAlert};
    use uuid::Uuid;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_available_book(mut self, id: u32, title: &str) -> Self {
            self.store
                .mutate(|data| {
                    data.books.push(Book {
                        id,
                        title: title.to_string(),
                        author: "Test Author".to_string(),
                        status: BookStatus::Available,
                    });
                })
                .unwrap();
            self
        }

        pub fn with_booking(mut self, room_id: u32, date: &str, time: &str) -> Self {
            self.store
                .mutate(|data| {
                    data.bookings.push(Booking {
                        id: Uuid::new_v4(),
                        room_id,
                        user: "guest".to_string(),
                        date: date.to_string(),
                        time: time.to_string(),
                    });
                })
                .unwrap();
            self
        }

        pub fn with_alert(mut self, kind: &str, location: &str) -> Self {
            self.store
                .mutate(|data| {
                    data.security_alerts.push(SecurityAlert {
                        id: Uuid::new_v4(),
                        kind: kind.to_string(),
                        location: location.to_string(),
                        time: "9:00 AM".to_string(),
                        status: "Active".to_string(),
                    });
                })
                .unwrap();
            self
        }
    }
}
