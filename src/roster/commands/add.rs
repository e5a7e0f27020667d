use crate::commands::{CmdMessage, CmdResult, StudentInput};
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use crate::store::DataStore;
use crate::validate::{is_duplicate, validate_gpa, validate_id, validate_programme};

use super::helpers::persist;

/// Validate `input` and append it. Checks run id, uniqueness, programme, gpa
/// and stop at the first failure; nothing is appended unless all pass.
pub fn run<S: DataStore>(
    records: &mut Vec<StudentRecord>,
    store: &mut S,
    input: &StudentInput,
) -> Result<CmdResult> {
    validate_id(&input.student_id)?;
    if is_duplicate(records, &input.student_id) {
        return Err(RosterError::DuplicateId(input.student_id.clone()));
    }
    let programme = validate_programme(input.programme.trim())?;
    let gpa = validate_gpa(&input.gpa)?;

    let record = StudentRecord::new(
        input.student_id.as_str(),
        input.name.as_str(),
        programme.as_str(),
        input.date_of_birth.as_str(),
        gpa,
    );
    records.push(record.clone());
    persist(store, records)?;

    tracing::info!("Added student {}", record.student_id);
    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("Student added successfully.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Programme;
    use crate::store::memory::InMemoryStore;

    fn alice() -> StudentInput {
        StudentInput::new("1001", "Alice", "Computing", "2000-01-01", "3.5")
    }

    #[test]
    fn appends_and_persists() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        let result = run(&mut records, &mut store, &alice()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(store.saved(), &records[..]);
        assert_eq!(result.affected_records[0].student_id, "1001");
        assert_eq!(result.messages[0].content, "Student added successfully.");
    }

    #[test]
    fn trims_programme_but_keeps_other_fields_verbatim() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        let input = StudentInput::new("0042", " Bob ", "  Business ", "not-a-date", "2");
        run(&mut records, &mut store, &input).unwrap();

        let record = &records[0];
        assert_eq!(record.student_id, "0042");
        assert_eq!(record.name, " Bob ");
        assert_eq!(record.programme, "Business");
        assert_eq!(record.date_of_birth, "not-a-date");
        assert_eq!(record.gpa, 2.0);
        assert_eq!(record.category(), Programme::Business);
    }

    #[test]
    fn rejects_invalid_id_first() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        // Every field is bad; the id is reported
        let input = StudentInput::new("A1", "X", "Arts", "", "9");
        let err = run(&mut records, &mut store, &input).unwrap_err();

        assert!(matches!(err, RosterError::InvalidId(_)));
        assert!(records.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rejects_duplicate_before_programme() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        run(&mut records, &mut store, &alice()).unwrap();

        let input = StudentInput::new("1001", "Other", "Arts", "2000-01-01", "9");
        let err = run(&mut records, &mut store, &input).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(id) if id == "1001"));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_programme_before_gpa() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        let input = StudentInput::new("5", "X", "Arts", "2000-01-01", "9");
        let err = run(&mut records, &mut store, &input).unwrap_err();
        assert!(matches!(err, RosterError::InvalidProgramme(_)));
    }

    #[test]
    fn rejects_out_of_range_gpa() {
        let mut store = InMemoryStore::new();
        let mut records = Vec::new();
        for gpa in ["4.5", "-1", "abc", ""] {
            let input = StudentInput::new("5", "X", "Business", "2000-01-01", gpa);
            let err = run(&mut records, &mut store, &input).unwrap_err();
            assert!(matches!(err, RosterError::InvalidGpa(_)));
        }
        assert!(records.is_empty());
    }

    #[test]
    fn save_failure_keeps_record_in_memory() {
        let mut store = InMemoryStore::new();
        store.fail_saves(true);
        let mut records = Vec::new();

        let err = run(&mut records, &mut store, &alice()).unwrap_err();
        assert!(matches!(err, RosterError::Unsaved(_)));
        assert_eq!(records.len(), 1);
        assert!(store.saved().is_empty());
    }
}
