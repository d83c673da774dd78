use std::sync::Arc;

use campusapp::api::CampusApi;
use campusapp::events::Event;
use campusapp::store::fs_backend::FsBackend;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

/// How many events a slow listener may fall behind before it starts
/// dropping them. Delivery is best-effort either way.
const EVENT_BUFFER: usize = 64;

pub struct AppState {
    /// Single lock around the store: every read-modify-write runs under
    /// it, so two requests can never both observe a stale snapshot.
    pub api: Mutex<CampusApi<FsBackend>>,
    pub events: broadcast::Sender<Event>,
}

impl AppState {
    pub fn new(api: CampusApi<FsBackend>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Arc::new(Self {
            api: Mutex::new(api),
            events,
        })
    }

    /// Fan an event out to all connected listeners. Called only after the
    /// mutation persisted; a send with no listeners is not an error.
    pub fn broadcast(&self, event: Event) {
        debug!(event = event.name(), "broadcasting");
        let _ = self.events.send(event);
    }
}
