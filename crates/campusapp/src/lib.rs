//! Campus portal domain library.
//!
//! Everything the server needs short of HTTP: the persisted data model,
//! the JSON document store with pluggable backends, the domain rules, and
//! the typed mutation events the server broadcasts.
//!
//! Layering, outermost first:
//!
//! - [`api`] — the facade surfaces call into
//! - [`rules`] — the business logic, per subsystem
//! - [`store`] — snapshot mirror + storage backends
//! - [`model`] / [`events`] — plain data

pub mod api;
pub mod clock;
pub mod error;
pub mod events;
pub mod model;
pub mod rules;
pub mod store;

pub use api::CampusApi;
pub use error::{CampusError, Result};
pub use events::Event;
