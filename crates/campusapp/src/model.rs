//! # Domain Model: Collections and Records
//!
//! Flat records grouped into named collections, mirroring the shape the
//! portal persists to disk. There is no foreign-key enforcement: an
//! [`Order`] may reference a menu item id that was never seeded, and an
//! [`AttendanceRecord`] holds a bare `student_id`. The intended invariants
//! (one attendance record per student per day, one booking per room slot)
//! live in the rules layer, not here.
//!
//! ## Wire Shape
//!
//! Field names match the persisted JSON document and the HTTP payloads:
//! `snake_case` throughout, except `roomId` on bookings and the `type`
//! field on alerts, which keep their historical spellings.
//!
//! ## Identifiers
//!
//! Static catalogs (students, books, menu, rooms) use small integer ids
//! assigned at seed time. Generated records use UUIDv4; the collision
//! probability is treated as zero and not handled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: u32,
    /// ISO calendar day, `YYYY-MM-DD`, server-local.
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(student_id: u32, date: String, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            date,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub item_id: u32,
    pub user: String,
    /// Wall-clock time the order was placed, e.g. `10:30 AM`.
    pub time: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub time: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub capacity: u32,
    pub features: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "roomId")]
    pub room_id: u32,
    pub user: String,
    pub date: String,
    pub time: String,
}

/// A student joined with their attendance status for today.
///
/// Students with no record for the current day read as `present`.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub present: usize,
    pub absent: usize,
}

/// The entire persisted document: one JSON object keyed by collection name.
///
/// Every field defaults to an empty list so a partially written or older
/// `data.json` still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub security_alerts: Vec<SecurityAlert>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}
