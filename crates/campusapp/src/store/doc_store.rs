use super::backend::StorageBackend;
use crate::clock;
use crate::error::Result;
use crate::model::{
    AttendanceRecord, AttendanceStatus, Book, BookStatus, MenuItem, Room, SecurityAlert, Snapshot,
    Student,
};

/// The in-memory mirror of the persisted document.
///
/// All reads go against the mirror; every mutation goes through
/// [`CampusStore::mutate`], which persists the full document before the
/// mutation is considered successful.
pub struct CampusStore<B: StorageBackend> {
    backend: B,
    data: Snapshot,
}

impl<B: StorageBackend> CampusStore<B> {
    /// Load (or initialize) the document and seed any empty collection.
    pub fn open(backend: B) -> Result<Self> {
        let mut data = backend.load()?.unwrap_or_default();
        if seed_if_empty(&mut data) {
            backend.save(&data)?;
        }
        Ok(Self { backend, data })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    /// Apply a mutation to the document and persist it.
    ///
    /// The mutation runs against a working copy that replaces the mirror
    /// only after the write succeeds, so a failed save is observationally
    /// a no-op: the mirror and the persisted document never disagree.
    /// Rules that must not mutate on refusal check their preconditions
    /// before calling this.
    pub(crate) fn mutate<T>(&mut self, f: impl FnOnce(&mut Snapshot) -> T) -> Result<T> {
        let mut next = self.data.clone();
        let out = f(&mut next);
        self.backend.save(&next)?;
        self.data = next;
        Ok(out)
    }
}

/// Populate starter rows for any collection that is empty. Returns true if
/// anything was seeded and the document needs a write.
fn seed_if_empty(data: &mut Snapshot) -> bool {
    let mut seeded = false;

    if data.students.is_empty() {
        data.students = vec![
            student(1, "Asish Kumar Sahani"),
            student(2, "Sibani Swain"),
            student(3, "Renuka Swain"),
            student(4, "Asish Ranjan Sahu"),
            student(5, "Ankita Mahapatra"),
        ];
        let today = clock::today();
        data.attendance = vec![
            AttendanceRecord::new(1, today.clone(), AttendanceStatus::Present),
            AttendanceRecord::new(2, today.clone(), AttendanceStatus::Absent),
            AttendanceRecord::new(3, today.clone(), AttendanceStatus::Present),
            AttendanceRecord::new(4, today.clone(), AttendanceStatus::Present),
            AttendanceRecord::new(5, today, AttendanceStatus::Absent),
        ];
        seeded = true;
    }

    if data.books.is_empty() {
        data.books = vec![
            book(1, "Introduction to Computer Science", "John Smith", BookStatus::Available),
            book(2, "Advanced Mathematics", "Sarah Johnson", BookStatus::Borrowed),
            book(3, "Modern Physics", "Michael Brown", BookStatus::Available),
        ];
        seeded = true;
    }

    if data.menu_items.is_empty() {
        data.menu_items = vec![
            menu_item(1, "Breakfast Combo", 50, "Eggs, toast, and coffee", "Breakfast"),
            menu_item(2, "Chicken Sandwich", 70, "Grilled chicken with fresh veggies", "Lunch"),
            menu_item(3, "Vegetarian Pizza", 100, "Fresh vegetables and cheese", "Lunch"),
        ];
        seeded = true;
    }

    if data.security_alerts.is_empty() {
        data.security_alerts = vec![
            alert("Gate Access", "Main Gate", "10:30 AM", "Resolved"),
            alert("Motion Detected", "Library", "11:45 AM", "Active"),
        ];
        seeded = true;
    }

    if data.rooms.is_empty() {
        data.rooms = vec![
            room(1, "Conference Hall A", 100, "Projector, Sound System"),
            room(2, "Seminar Room", 30, "Whiteboard, TV"),
            room(3, "Computer Lab 1", 50, "50 PCs, Internet"),
            room(4, "Meeting Room", 10, "Round Table"),
        ];
        seeded = true;
    }

    seeded
}

fn student(id: u32, name: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
    }
}

fn book(id: u32, title: &str, author: &str, status: BookStatus) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        status,
    }
}

fn menu_item(id: u32, name: &str, price: u32, description: &str, category: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn alert(kind: &str, location: &str, time: &str, status: &str) -> SecurityAlert {
    SecurityAlert {
        id: uuid::Uuid::new_v4(),
        kind: kind.to_string(),
        location: location.to_string(),
        time: time.to_string(),
        status: status.to_string(),
    }
}

fn room(id: u32, name: &str, capacity: u32, features: &str) -> Room {
    Room {
        id,
        name: name.to_string(),
        capacity,
        features: features.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::booking;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> CampusStore<MemBackend> {
        CampusStore::open(MemBackend::new()).unwrap()
    }

    #[test]
    fn test_open_seeds_empty_document() {
        let store = make_store();
        let snap = store.snapshot();
        assert_eq!(snap.students.len(), 5);
        assert_eq!(snap.attendance.len(), 5);
        assert_eq!(snap.books.len(), 3);
        assert_eq!(snap.menu_items.len(), 3);
        assert_eq!(snap.security_alerts.len(), 2);
        assert_eq!(snap.rooms.len(), 4);
        assert!(snap.orders.is_empty());
        assert!(snap.bookings.is_empty());
    }

    #[test]
    fn test_seed_persists_to_backend() {
        let store = make_store();
        let persisted = store.backend.load().unwrap().unwrap();
        assert_eq!(persisted.students.len(), 5);
        assert_eq!(persisted.rooms.len(), 4);
    }

    #[test]
    fn test_reopen_does_not_reseed() {
        let backend = MemBackend::new();
        let mut store = CampusStore::open(backend).unwrap();
        store
            .mutate(|data| {
                data.books.remove(2);
            })
            .unwrap();
        assert_eq!(store.snapshot().books.len(), 2);

        // Simulate a restart on the same backend
        let store = CampusStore { data: store.backend.load().unwrap().unwrap(), backend: store.backend };
        assert_eq!(store.snapshot().books.len(), 2);
    }

    #[test]
    fn test_seed_respects_existing_collections() {
        let mut data = Snapshot {
            students: vec![student(9, "Existing")],
            ..Default::default()
        };
        let seeded = seed_if_empty(&mut data);
        assert!(seeded); // other collections were still empty
        assert_eq!(data.students.len(), 1);
        assert_eq!(data.students[0].name, "Existing");
        // Students carried their attendance seed, which is skipped together
        assert!(data.attendance.is_empty());
        assert_eq!(data.books.len(), 3);
    }

    #[test]
    fn test_mutate_propagates_write_error() {
        let mut store = make_store();
        store.backend.set_simulate_write_error(true);
        let result = store.mutate(|data| data.orders.len());
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_save_leaves_mirror_unchanged() {
        let mut store = make_store();
        store.backend.set_simulate_write_error(true);

        let result = booking::create_booking(
            &mut store,
            1,
            None,
            "2026-09-01".to_string(),
            "10:00".to_string(),
        );
        assert!(result.is_err());

        // Neither the mirror nor the document picked up the booking
        assert!(store.snapshot().bookings.is_empty());
        assert!(store.backend.load().unwrap().unwrap().bookings.is_empty());
    }

    #[test]
    fn test_failed_save_does_not_block_retry() {
        let mut store = make_store();
        store.backend.set_simulate_write_error(true);
        assert!(booking::create_booking(
            &mut store,
            1,
            None,
            "2026-09-01".to_string(),
            "10:00".to_string(),
        )
        .is_err());

        // The slot must not read as taken after the failed write
        store.backend.set_simulate_write_error(false);
        booking::create_booking(
            &mut store,
            1,
            None,
            "2026-09-01".to_string(),
            "10:00".to_string(),
        )
        .unwrap();
        assert_eq!(store.snapshot().bookings.len(), 1);
    }

    #[test]
    fn test_seeded_attendance_is_for_today() {
        let store = make_store();
        let today = clock::today();
        assert!(store
            .snapshot()
            .attendance
            .iter()
            .all(|record| record.date == today));
    }
}
