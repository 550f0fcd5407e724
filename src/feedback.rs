// File: src/feedback.rs
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// One user correction, appended and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: String,
    pub original: String,
    pub correction: String,
}

/// Append-only log of (original, correction) pairs, kept as a JSON array
/// on disk so it stays hand-readable for offline review.
///
/// Each append rewrites the file through a temp file in the same
/// directory and persists it over the old one, so a crash mid-write never
/// corrupts previously recorded entries. The internal mutex serializes
/// concurrent appenders within the process.
pub struct FeedbackStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// Durably appends one record. The timestamp is taken at call time.
    pub fn record(&self, original: &str, correction: &str) -> Result<(), Error> {
        let entry = FeedbackRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            original: original.to_string(),
            correction: correction.to_string(),
        };

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = read_entries(&self.path)?;
        entries.push(entry);

        let parent_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(writer, &entries)
            .map_err(|e| Error::new(ErrorKind::Other, e))?;
        temp_file.persist(&self.path)?;
        Ok(())
    }

    /// Bulk retrieval for offline analysis. A store that has never been
    /// written to reads as empty.
    pub fn load_all(&self) -> Result<Vec<FeedbackRecord>, Error> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        read_entries(&self.path)
    }

    /// Number of records collected so far.
    pub fn stats(&self) -> Result<usize, Error> {
        Ok(self.load_all()?.len())
    }
}

fn read_entries(path: &Path) -> Result<Vec<FeedbackRecord>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| Error::new(ErrorKind::Other, e))
}
