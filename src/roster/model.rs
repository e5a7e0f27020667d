use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Programme {
    Computing,
    Business,
}

impl Programme {
    pub const ALL: [Programme; 2] = [Programme::Computing, Programme::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            Programme::Computing => "Computing",
            Programme::Business => "Business",
        }
    }

    /// Category for a stored programme string. Only an exact "Computing" maps to
    /// Computing; everything else lands in Business.
    pub fn from_label(label: &str) -> Self {
        if label == Programme::Computing.as_str() {
            Programme::Computing
        } else {
            Programme::Business
        }
    }

    /// Strict lookup, `None` for anything outside the enumerated set.
    pub fn parse_exact(label: &str) -> Option<Self> {
        Programme::ALL.into_iter().find(|p| p.as_str() == label)
    }
}

impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub programme: String,
    pub date_of_birth: String,
    pub gpa: f64,
    // Fixed at construction; updating `programme` later does not move the record
    // to another category.
    category: Programme,
}

impl StudentRecord {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        programme: impl Into<String>,
        date_of_birth: impl Into<String>,
        gpa: f64,
    ) -> Self {
        let programme = programme.into();
        let category = Programme::from_label(&programme);
        Self {
            student_id: student_id.into(),
            name: name.into(),
            programme,
            date_of_birth: date_of_birth.into(),
            gpa,
            category,
        }
    }

    pub fn category(&self) -> Programme {
        self.category
    }

    pub fn display(&self) -> String {
        format!(
            "{} Student - ID: {}, Name: {}, Programme: {}, DOB: {}, CGPA: {}",
            self.category,
            self.student_id,
            self.name,
            self.programme,
            self.date_of_birth,
            format_gpa(self.gpa)
        )
    }
}

/// Natural decimal text for a grade average: integral values keep a trailing
/// `.0` (`3.0`), everything else uses the shortest round-trip form (`3.25`).
pub fn format_gpa(gpa: f64) -> String {
    if gpa.is_finite() && gpa.fract() == 0.0 && gpa.abs() < 1e16 {
        format!("{:.1}", gpa)
    } else {
        gpa.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_computing_label() {
        let record = StudentRecord::new("1001", "Alice", "Computing", "2000-01-01", 3.5);
        assert_eq!(
            record.display(),
            "Computing Student - ID: 1001, Name: Alice, Programme: Computing, DOB: 2000-01-01, CGPA: 3.5"
        );
    }

    #[test]
    fn unknown_programme_is_business_category() {
        let record = StudentRecord::new("7", "Bob", "Law", "1999-12-31", 2.0);
        assert_eq!(record.category(), Programme::Business);
        assert!(record.display().starts_with("Business Student - ID: 7"));
        assert!(record.display().contains("Programme: Law"));
    }

    #[test]
    fn category_survives_programme_change() {
        let mut record = StudentRecord::new("7", "Bob", "Computing", "1999-12-31", 2.0);
        record.programme = "Business".to_string();
        assert_eq!(record.category(), Programme::Computing);
        assert!(record.display().starts_with("Computing Student"));
    }

    #[test]
    fn leading_zeros_are_kept() {
        let record = StudentRecord::new("0042", "Eve", "Business", "2001-02-03", 1.0);
        assert!(record.display().contains("ID: 0042"));
    }

    #[test]
    fn gpa_formatting() {
        assert_eq!(format_gpa(3.5), "3.5");
        assert_eq!(format_gpa(4.0), "4.0");
        assert_eq!(format_gpa(0.0), "0.0");
        assert_eq!(format_gpa(3.25), "3.25");
        assert_eq!(format_gpa(5.5), "5.5");
    }

    #[test]
    fn parse_exact_is_case_sensitive() {
        assert_eq!(Programme::parse_exact("Business"), Some(Programme::Business));
        assert_eq!(Programme::parse_exact("business"), None);
        assert_eq!(Programme::parse_exact(" Computing"), None);
    }
}
