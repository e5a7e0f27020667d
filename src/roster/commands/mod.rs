use crate::model::StudentRecord;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command
    pub affected_records: Vec<StudentRecord>,
    /// Records to show, in collection order
    pub listed_records: Vec<StudentRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// `display()` text of every listed record
    pub fn display_lines(&self) -> Vec<String> {
        self.listed_records.iter().map(|r| r.display()).collect()
    }
}

/// Raw field text for a new record, as read from the user.
#[derive(Debug, Clone, Default)]
pub struct StudentInput {
    pub student_id: String,
    pub name: String,
    pub programme: String,
    pub date_of_birth: String,
    pub gpa: String,
}

impl StudentInput {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        programme: impl Into<String>,
        date_of_birth: impl Into<String>,
        gpa: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            programme: programme.into(),
            date_of_birth: date_of_birth.into(),
            gpa: gpa.into(),
        }
    }
}

/// Field changes for an existing record. `None` or an empty string keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub programme: Option<String>,
    pub date_of_birth: Option<String>,
    pub gpa: Option<String>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn programme(mut self, programme: impl Into<String>) -> Self {
        self.programme = Some(programme.into());
        self
    }

    pub fn date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = Some(dob.into());
        self
    }

    pub fn gpa(mut self, gpa: impl Into<String>) -> Self {
        self.gpa = Some(gpa.into());
        self
    }
}
