//! # Domain Rules
//!
//! The portal's business logic: a small set of functions operating over
//! the store's collections, one submodule per subsystem.
//!
//! ## Contract
//!
//! - Reads never mutate and never touch the backend.
//! - Mutations check their preconditions first, then apply and persist in
//!   one [`mutate`](crate::store::CampusStore::mutate) call. A refused
//!   operation leaves both the mirror and the document untouched.
//! - Every successful mutation returns the [`Event`](crate::events::Event)
//!   the server should broadcast. Broadcasting happens strictly after the
//!   rule returns, so listeners never see an event for a write that
//!   failed.
//!
//! ## What Rules Do NOT Do
//!
//! - No HTTP status codes, no request parsing: callers map
//!   [`CampusError`](crate::error::CampusError) variants to their own
//!   surface.
//! - No locking: callers that allow concurrent access must serialize
//!   mutations themselves (the server holds one lock across each
//!   read-modify-write).
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Tests use
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) and exercise the
//! state transitions and refusal paths directly.

pub mod attendance;
pub mod booking;
pub mod cafeteria;
pub mod library;
pub mod security;
