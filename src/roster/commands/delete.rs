use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::DataStore;

use super::helpers::{persist, position_of};

/// Remove the first record with `id` and persist the rest.
pub fn run<S: DataStore>(
    records: &mut Vec<StudentRecord>,
    store: &mut S,
    id: &str,
) -> Result<CmdResult> {
    let idx = position_of(records, id)?;
    let removed = records.remove(idx);
    persist(store, records)?;

    tracing::info!("Deleted student {}", removed.student_id);
    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success("Student deleted successfully.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::InMemoryStore;

    fn records() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new("1", "A", "Computing", "2000-01-01", 1.0),
            StudentRecord::new("2", "B", "Business", "2000-01-01", 2.0),
            StudentRecord::new("3", "C", "Business", "2000-01-01", 3.0),
        ]
    }

    #[test]
    fn removes_and_persists() {
        let mut store = InMemoryStore::new();
        let mut records = records();
        let result = run(&mut records, &mut store, "2").unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(store.saved(), &records[..]);
        assert_eq!(result.affected_records[0].name, "B");
    }

    #[test]
    fn only_first_match_is_removed() {
        let mut store = InMemoryStore::new();
        let mut records = records();
        records.push(StudentRecord::new("2", "Dup", "Business", "2000-01-01", 2.0));

        run(&mut records, &mut store, "2").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].name, "Dup");
    }

    #[test]
    fn unknown_id_leaves_collection_alone() {
        let mut store = InMemoryStore::new();
        let mut records = records();
        let err = run(&mut records, &mut store, "9").unwrap_err();

        assert!(matches!(err, RosterError::NotFound(_)));
        assert_eq!(records.len(), 3);
        assert_eq!(store.save_count(), 0);
    }
}
