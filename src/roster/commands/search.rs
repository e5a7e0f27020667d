use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StudentRecord;

use super::helpers::position_of;

pub fn run(records: &[StudentRecord], id: &str) -> Result<CmdResult> {
    let idx = position_of(records, id)?;
    Ok(CmdResult::default().with_listed_records(vec![records[idx].clone()]))
}
