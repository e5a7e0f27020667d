//! # API Facade
//!
//! [`RosterApi`] is the record store: it owns the in-memory collection and the
//! [`DataStore`] that persists it, and it is the single entry point for every
//! UI (the interactive menu and the scriptable subcommands both go through
//! it).
//!
//! The facade only dispatches. Validation and mutation logic live in
//! `commands/*.rs`, which operate on the collection and the store passed in.
//!
//! ## Failure reporting
//!
//! Every operation returns `Result<CmdResult>`. Rejections (`InvalidId`,
//! `DuplicateId`, `InvalidProgramme`, `InvalidGpa`, `NotFound`) leave the
//! collection untouched. A failed save after a successful in-memory change
//! comes back as `Unsaved`: the collection keeps the change, the file does
//! not, and the two stay diverged until the next successful save.

use crate::commands::{self, CmdResult, RecordUpdate, StudentInput};
use crate::config::ProgrammePolicy;
use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::DataStore;

pub struct RosterApi<S: DataStore> {
    store: S,
    records: Vec<StudentRecord>,
    policy: ProgrammePolicy,
}

impl<S: DataStore> RosterApi<S> {
    /// Load the collection from `store` once; all later reads come from memory.
    pub fn open(store: S, policy: ProgrammePolicy) -> Result<Self> {
        let records = store.load_records()?;
        Ok(Self {
            store,
            records,
            policy,
        })
    }

    pub fn add(
        &mut self,
        student_id: &str,
        name: &str,
        programme: &str,
        date_of_birth: &str,
        gpa: &str,
    ) -> Result<CmdResult> {
        let input = StudentInput::new(student_id, name, programme, date_of_birth, gpa);
        commands::add::run(&mut self.records, &mut self.store, &input)
    }

    pub fn add_input(&mut self, input: &StudentInput) -> Result<CmdResult> {
        commands::add::run(&mut self.records, &mut self.store, input)
    }

    pub fn search(&self, student_id: &str) -> Result<CmdResult> {
        commands::search::run(&self.records, student_id)
    }

    pub fn delete(&mut self, student_id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.records, &mut self.store, student_id)
    }

    pub fn update(&mut self, student_id: &str, update: &RecordUpdate) -> Result<CmdResult> {
        commands::update::run(
            &mut self.records,
            &mut self.store,
            student_id,
            update,
            self.policy,
        )
    }

    pub fn list_all(&self) -> CmdResult {
        commands::list::run(&self.records)
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn policy(&self) -> ProgrammePolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
