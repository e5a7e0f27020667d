use crate::commands::{CmdMessage, CmdResult, RecordUpdate};
use crate::config::ProgrammePolicy;
use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::DataStore;
use crate::validate::{validate_gpa, validate_programme};

use super::helpers::{persist, position_of, provided};

/// Apply `update` to the record with `id`.
///
/// Everything that can fail is checked before the record is touched, so a
/// rejected update changes nothing. Under [`ProgrammePolicy::Lenient`] the
/// programme text is stored as given.
pub fn run<S: DataStore>(
    records: &mut [StudentRecord],
    store: &mut S,
    id: &str,
    update: &RecordUpdate,
    policy: ProgrammePolicy,
) -> Result<CmdResult> {
    let idx = position_of(records, id)?;

    let gpa = provided(&update.gpa).map(validate_gpa).transpose()?;
    let programme = provided(&update.programme);
    if let (ProgrammePolicy::Strict, Some(programme)) = (policy, programme) {
        validate_programme(programme)?;
    }

    let record = &mut records[idx];
    if let Some(name) = provided(&update.name) {
        record.name = name.to_string();
    }
    if let Some(programme) = programme {
        record.programme = programme.to_string();
    }
    if let Some(dob) = provided(&update.date_of_birth) {
        record.date_of_birth = dob.to_string();
    }
    if let Some(gpa) = gpa {
        record.gpa = gpa;
    }
    let updated = record.clone();

    persist(store, records)?;

    tracing::info!("Updated student {}", updated.student_id);
    Ok(CmdResult::default()
        .with_affected_records(vec![updated])
        .with_message(CmdMessage::success("Student updated successfully.")))
}
