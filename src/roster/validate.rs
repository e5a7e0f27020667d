//! Field checks applied before anything touches the collection.
//!
//! Each check is a pure function: it either returns the parsed value or the
//! [`RosterError`] naming the violated constraint.

use crate::error::{Result, RosterError};
use crate::model::{Programme, StudentRecord};
use std::ops::RangeInclusive;

pub const GPA_RANGE: RangeInclusive<f64> = 0.0..=4.0;

pub fn validate_id(text: &str) -> Result<()> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::InvalidId(text.to_string()));
    }
    Ok(())
}

pub fn validate_gpa(text: &str) -> Result<f64> {
    let gpa: f64 = text
        .trim()
        .parse()
        .map_err(|_| RosterError::InvalidGpa(text.to_string()))?;
    if !GPA_RANGE.contains(&gpa) {
        return Err(RosterError::InvalidGpa(text.to_string()));
    }
    Ok(gpa)
}

pub fn validate_programme(text: &str) -> Result<Programme> {
    Programme::parse_exact(text).ok_or_else(|| RosterError::InvalidProgramme(text.to_string()))
}

pub fn is_duplicate(records: &[StudentRecord], id: &str) -> bool {
    records.iter().any(|r| r.student_id == id)
}
