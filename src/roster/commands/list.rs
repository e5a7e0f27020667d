use crate::commands::{CmdMessage, CmdResult};
use crate::model::StudentRecord;

pub const EMPTY_MESSAGE: &str = "No students found in the system.";

pub fn run(records: &[StudentRecord]) -> CmdResult {
    if records.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(EMPTY_MESSAGE));
    }
    CmdResult::default().with_listed_records(records.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_reports_no_records() {
        let result = run(&[]);
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, EMPTY_MESSAGE);
    }

    #[test]
    fn lists_in_collection_order() {
        let records = vec![
            StudentRecord::new("2", "B", "Business", "2000-01-01", 2.0),
            StudentRecord::new("1", "A", "Computing", "2000-01-01", 1.0),
        ];
        let result = run(&records);
        assert!(result.messages.is_empty());
        assert_eq!(
            result.display_lines(),
            vec![
                "Business Student - ID: 2, Name: B, Programme: Business, DOB: 2000-01-01, CGPA: 2.0",
                "Computing Student - ID: 1, Name: A, Programme: Computing, DOB: 2000-01-01, CGPA: 1.0",
            ]
        );
    }
}
