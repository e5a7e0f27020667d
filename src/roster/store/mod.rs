//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the record collection.
//! The collection itself lives in memory (see [`crate::api::RosterApi`]); a
//! store only knows how to read the whole collection once and to overwrite it
//! after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a flat comma-delimited file,
//!   one record per line, `id,name,programme,dob,gpa`, no header and no
//!   escaping.
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//!   It can be told to fail saves so the divergence path is testable.

use crate::error::Result;
use crate::model::StudentRecord;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read every record, in file order
    fn load_records(&self) -> Result<Vec<StudentRecord>>;

    /// Overwrite the persisted collection with `records`
    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()>;
}
