use super::DataStore;
use crate::error::Result;
use crate::model::StudentRecord;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<StudentRecord>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an IO error
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The collection as of the last successful save
    pub fn saved(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_records(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()> {
        if self.fail_saves {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store").into());
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::RosterApi;
    use crate::config::ProgrammePolicy;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_record(mut self, id: &str, name: &str, programme: &str, gpa: f64) -> Self {
            self.store
                .records
                .push(StudentRecord::new(id, name, programme, "2000-01-01", gpa));
            self
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let programme = if i % 2 == 0 { "Computing" } else { "Business" };
                self.store.records.push(StudentRecord::new(
                    format!("{}", 1001 + i),
                    format!("Student {}", i + 1),
                    programme,
                    "2000-01-01",
                    3.0,
                ));
            }
            self
        }

        pub fn api(self) -> RosterApi<InMemoryStore> {
            self.api_with_policy(ProgrammePolicy::Lenient)
        }

        pub fn api_with_policy(self, policy: ProgrammePolicy) -> RosterApi<InMemoryStore> {
            RosterApi::open(self.store, policy).expect("in-memory load cannot fail")
        }
    }
}
