//! Security: an append-only alert log, read newest first. There is no
//! resolution transition; `status` is set once at append time.

use crate::clock;
use crate::error::Result;
use crate::events::Event;
use crate::model::SecurityAlert;
use crate::store::{CampusStore, StorageBackend};

const STATUS_ACTIVE: &str = "Active";
const EMERGENCY_KIND: &str = "Emergency";
const EMERGENCY_LOCATION: &str = "Campus";

/// The full alert log in reverse-insertion order (most recent first).
pub fn alerts<B: StorageBackend>(store: &CampusStore<B>) -> Vec<SecurityAlert> {
    let mut alerts = store.snapshot().security_alerts.clone();
    alerts.reverse();
    alerts
}

/// Append an alert. `status` defaults to `Active` when not supplied.
pub fn add_alert<B: StorageBackend>(
    store: &mut CampusStore<B>,
    kind: String,
    location: String,
    status: Option<String>,
) -> Result<Event> {
    let status = status.unwrap_or_else(|| STATUS_ACTIVE.to_string());
    let alert = SecurityAlert {
        id: uuid::Uuid::new_v4(),
        kind: kind.clone(),
        location: location.clone(),
        time: clock::wall_time(),
        status: status.clone(),
    };

    store.mutate(|data| data.security_alerts.push(alert))?;

    Ok(Event::SecurityAlert {
        kind,
        location,
        status,
    })
}

/// The panic button: a fixed campus-wide alert.
pub fn trigger_emergency<B: StorageBackend>(store: &mut CampusStore<B>) -> Result<Event> {
    add_alert(
        store,
        EMERGENCY_KIND.to_string(),
        EMERGENCY_LOCATION.to_string(),
        Some(STATUS_ACTIVE.to_string()),
    )
}
