use super::DataStore;
use crate::config::ProgrammePolicy;
use crate::error::{Result, RosterError};
use crate::model::{format_gpa, Programme, StudentRecord};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 5;

pub struct FileStore {
    path: PathBuf,
    policy: ProgrammePolicy,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: ProgrammePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ProgrammePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load_records(&self) -> Result<Vec<StudentRecord>> {
        load(&self.path, self.policy)
    }

    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        save(records, &self.path)
    }
}

/// Overwrite `path` with one line per record.
pub fn save(records: &[StudentRecord], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", encode_line(record))?;
    }
    writer.flush()?;
    tracing::debug!("Saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Read every record from `path`. A missing file is an empty collection.
pub fn load(path: &Path, policy: ProgrammePolicy) -> Result<Vec<StudentRecord>> {
    if !path.exists() {
        tracing::debug!("No records file at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(decode_line(&line, idx + 1, policy)?);
    }

    tracing::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

pub fn encode_line(record: &StudentRecord) -> String {
    [
        record.student_id.as_str(),
        record.name.as_str(),
        record.programme.as_str(),
        record.date_of_birth.as_str(),
        format_gpa(record.gpa).as_str(),
    ]
    .join(",")
}

/// Parse one stored line. `line_no` is 1-based and only used for diagnostics.
pub fn decode_line(line: &str, line_no: usize, policy: ProgrammePolicy) -> Result<StudentRecord> {
    let malformed = |reason: String| RosterError::MalformedRecordLine {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let [id, name, programme, dob, gpa] = fields[..] else {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    };

    if policy == ProgrammePolicy::Strict && Programme::parse_exact(programme).is_none() {
        return Err(malformed(format!("unknown programme '{}'", programme)));
    }

    let gpa: f64 = gpa
        .trim()
        .parse()
        .map_err(|_| malformed(format!("CGPA '{}' is not a number", gpa)))?;

    Ok(StudentRecord::new(id, name, programme, dob, gpa))
}
