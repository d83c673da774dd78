//! Attendance: roster with today's status, daily stats, and the
//! upsert-by-day mutation.

use crate::clock;
use crate::error::Result;
use crate::events::Event;
use crate::model::{AttendanceRecord, AttendanceStats, AttendanceStatus, RosterEntry};
use crate::store::{CampusStore, StorageBackend};

/// Students joined with their attendance record for today.
/// A student with no record for the current day reads as present.
pub fn roster<B: StorageBackend>(store: &CampusStore<B>) -> Vec<RosterEntry> {
    let today = clock::today();
    let data = store.snapshot();
    data.students
        .iter()
        .map(|student| {
            let status = data
                .attendance
                .iter()
                .find(|record| record.student_id == student.id && record.date == today)
                .map(|record| record.status)
                .unwrap_or(AttendanceStatus::Present);
            RosterEntry {
                id: student.id,
                name: student.name.clone(),
                status,
            }
        })
        .collect()
}

/// Present/absent counts over today's records only.
pub fn today_stats<B: StorageBackend>(store: &CampusStore<B>) -> AttendanceStats {
    let today = clock::today();
    let rows = store
        .snapshot()
        .attendance
        .iter()
        .filter(|record| record.date == today);

    let mut stats = AttendanceStats {
        present: 0,
        absent: 0,
    };
    for record in rows {
        match record.status {
            AttendanceStatus::Present => stats.present += 1,
            AttendanceStatus::Absent => stats.absent += 1,
        }
    }
    stats
}

/// Upsert-by-day: overwrite today's record for the student if one exists,
/// otherwise append a new one. Sequential calls can never produce a second
/// record for the same (student, day).
pub fn set_attendance<B: StorageBackend>(
    store: &mut CampusStore<B>,
    student_id: u32,
    status: AttendanceStatus,
) -> Result<Event> {
    set_attendance_on(store, student_id, clock::today(), status)
}

fn set_attendance_on<B: StorageBackend>(
    store: &mut CampusStore<B>,
    student_id: u32,
    date: String,
    status: AttendanceStatus,
) -> Result<Event> {
    store.mutate(|data| {
        match data
            .attendance
            .iter_mut()
            .find(|record| record.student_id == student_id && record.date == date)
        {
            Some(existing) => existing.status = status,
            None => data
                .attendance
                .push(AttendanceRecord::new(student_id, date, status)),
        }
    })?;

    Ok(Event::AttendanceUpdated {
        id: student_id,
        status,
    })
}
