use crate::error::Result;
use crate::model::Snapshot;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`CampusStore`](super::doc_store::CampusStore) handles the "what"
/// (seeding, collection access, persist-on-mutate).
pub trait StorageBackend {
    /// Load the persisted document.
    /// Returns `Ok(None)` if nothing has been written yet (first boot).
    /// Returns `Err` only on actual I/O or parse failures.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replace the persisted document with `snapshot`.
    /// MUST be atomic (e.g. write to tmp then rename) so a crash mid-write
    /// never leaves a partial document behind.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
