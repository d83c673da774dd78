use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Book not found: {0}")]
    BookNotFound(u32),

    #[error("Book {0} is not available")]
    BookNotAvailable(u32),

    #[error("Book {0} is not borrowed")]
    BookNotBorrowed(u32),

    #[error("Room {room_id} is already booked for {date} {time}")]
    SlotTaken {
        room_id: u32,
        date: String,
        time: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CampusError>;
