use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use crate::store::DataStore;

pub fn position_of(records: &[StudentRecord], id: &str) -> Result<usize> {
    records
        .iter()
        .position(|r| r.student_id == id)
        .ok_or_else(|| RosterError::NotFound(id.to_string()))
}

/// Write the whole collection after a mutation.
///
/// An IO failure here means the in-memory change already happened, so it is
/// reported as [`RosterError::Unsaved`] rather than a plain IO error.
pub fn persist<S: DataStore>(store: &mut S, records: &[StudentRecord]) -> Result<()> {
    store.save_records(records).map_err(|err| match err {
        RosterError::Io(source) => {
            tracing::warn!("Records changed in memory but were not saved: {}", source);
            RosterError::Unsaved(source)
        }
        other => other,
    })
}

/// Blank input means "keep the current value".
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
