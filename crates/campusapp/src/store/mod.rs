//! # Storage Layer
//!
//! The portal's "database" is a single JSON document keyed by collection
//! name, mirrored in memory and rewritten wholesale on every mutation.
//! This module splits that into two pieces:
//!
//! 1. [`backend::StorageBackend`] — raw document I/O (the "how"). Knows
//!    nothing about collections or rules; it loads and saves one
//!    [`Snapshot`](crate::model::Snapshot).
//! 2. [`doc_store::CampusStore`] — the in-memory mirror (the "what").
//!    Owns the current snapshot, seeds empty collections on first boot,
//!    and persists synchronously after every mutation.
//!
//! ## Persistence Model
//!
//! Every write serializes the full document and replaces the backing file.
//! That is O(document size) per mutation with no batching, which is fine
//! at this data volume. The filesystem backend writes to a temp file and
//! renames, so a crash mid-write never leaves a truncated document.
//!
//! ## Seeding
//!
//! On open, any collection that is empty gets its starter rows: the
//! five-student roster with today's attendance, three books, three menu
//! items, two alerts, and four bookable rooms. Collections that already
//! hold data are left untouched, so re-opening an existing document never
//! duplicates seed rows.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, writes `data.json`.
//! - [`memory::InMemoryStore`]: for testing rules without filesystem I/O.

pub mod backend;
pub mod doc_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;
pub use doc_store::CampusStore;
