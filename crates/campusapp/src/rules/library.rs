//! Library: a two-state machine per book. `available -> borrowed` via
//! [`borrow_book`], and the symmetric `borrowed -> available` via
//! [`return_book`]. Refusals leave the book untouched.

use crate::error::{CampusError, Result};
use crate::events::Event;
use crate::model::{Book, BookStatus};
use crate::store::{CampusStore, StorageBackend};

pub fn list_books<B: StorageBackend>(store: &CampusStore<B>) -> Vec<Book> {
    store.snapshot().books.clone()
}

pub fn borrow_book<B: StorageBackend>(store: &mut CampusStore<B>, id: u32) -> Result<Event> {
    transition(store, id, BookStatus::Available, BookStatus::Borrowed)?;
    Ok(Event::BookBorrowed { id })
}

pub fn return_book<B: StorageBackend>(store: &mut CampusStore<B>, id: u32) -> Result<Event> {
    transition(store, id, BookStatus::Borrowed, BookStatus::Available)?;
    Ok(Event::BookReturned { id })
}

fn transition<B: StorageBackend>(
    store: &mut CampusStore<B>,
    id: u32,
    from: BookStatus,
    to: BookStatus,
) -> Result<()> {
    // Precondition checks before mutate: a refusal must not touch the store
    let book = store
        .snapshot()
        .books
        .iter()
        .find(|b| b.id == id)
        .ok_or(CampusError::BookNotFound(id))?;

    if book.status != from {
        return Err(match from {
            BookStatus::Available => CampusError::BookNotAvailable(id),
            BookStatus::Borrowed => CampusError::BookNotBorrowed(id),
        });
    }

    store.mutate(|data| {
        if let Some(book) = data.books.iter_mut().find(|b| b.id == id) {
            book.status = to;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn book_status(store: &InMemoryStore, id: u32) -> BookStatus {
        store
            .snapshot()
            .books
            .iter()
            .find(|b| b.id == id)
            .unwrap()
            .status
    }

    #[test]
    fn test_borrow_available_book() {
        let mut store = InMemoryStore::new();
        let event = borrow_book(&mut store, 1).unwrap();
        assert_eq!(event, Event::BookBorrowed { id: 1 });
        assert_eq!(book_status(&store, 1), BookStatus::Borrowed);
    }

    #[test]
    fn test_borrow_twice_fails_without_mutation() {
        let mut store = InMemoryStore::new();
        borrow_book(&mut store, 1).unwrap();

        match borrow_book(&mut store, 1) {
            Err(CampusError::BookNotAvailable(1)) => {}
            other => panic!("Expected BookNotAvailable, got {:?}", other),
        }
        assert_eq!(book_status(&store, 1), BookStatus::Borrowed);
    }

    #[test]
    fn test_borrow_unknown_id_fails() {
        let mut store = InMemoryStore::new();
        let before = store.snapshot().books.clone();

        match borrow_book(&mut store, 999) {
            Err(CampusError::BookNotFound(999)) => {}
            other => panic!("Expected BookNotFound, got {:?}", other),
        }

        // State unchanged
        let after = store.snapshot().books.clone();
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.status, b.status);
        }
    }

    #[test]
    fn test_return_borrowed_book() {
        let mut store = InMemoryStore::new();
        // Seeded book 2 starts out borrowed
        let event = return_book(&mut store, 2).unwrap();
        assert_eq!(event, Event::BookReturned { id: 2 });
        assert_eq!(book_status(&store, 2), BookStatus::Available);
    }

    #[test]
    fn test_return_available_book_fails() {
        let mut store = InMemoryStore::new();
        match return_book(&mut store, 1) {
            Err(CampusError::BookNotBorrowed(1)) => {}
            other => panic!("Expected BookNotBorrowed, got {:?}", other),
        }
        assert_eq!(book_status(&store, 1), BookStatus::Available);
    }

    #[test]
    fn test_borrow_book_added_after_seeding() {
        let fixture = StoreFixture::new().with_available_book(42, "Compiler Construction");
        let mut store = fixture.store;

        borrow_book(&mut store, 42).unwrap();
        assert_eq!(book_status(&store, 42), BookStatus::Borrowed);
    }

    #[test]
    fn test_borrow_return_round_trip() {
        let mut store = InMemoryStore::new();
        borrow_book(&mut store, 3).unwrap();
        return_book(&mut store, 3).unwrap();
        borrow_book(&mut store, 3).unwrap();
        assert_eq!(book_status(&store, 3), BookStatus::Borrowed);
    }
}
