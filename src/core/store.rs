//! Persistence of the student collection
//!
//! The whole collection lives in one JSON file: read completely on load,
//! rewritten completely on save. There is no locking and no atomic rename;
//! the last writer wins.

use crate::{
    core::student::Student,
    error::{RecordsError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// What was found at the data file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No data file exists yet
    Missing,
    /// The file exists but does not hold a valid list of students
    Corrupt { reason: String },
    /// The file was decoded successfully
    Loaded(Vec<Student>),
}

impl LoadOutcome {
    /// The collection to start the session with. Missing and corrupt files
    /// both yield an empty collection.
    pub fn into_students(self) -> Vec<Student> {
        match self {
            Self::Loaded(students) => students,
            Self::Missing | Self::Corrupt { .. } => Vec::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// JSON file store for the student collection
#[derive(Debug, Clone)]
pub struct StudentStore {
    path: PathBuf,
    fs_utils: FileSystemUtils,
}

impl StudentStore {
    /// Create a store backed by the file at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Location of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection from disk.
    ///
    /// Only genuine I/O failures are errors. A file that cannot be decoded is
    /// reported as [`LoadOutcome::Corrupt`] so the caller can decide how loudly
    /// to react.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<LoadOutcome> {
        let content = self
            .fs_utils
            .read_file_if_exists(&self.path)
            .map_err(|e| RecordsError::file_system("read", &self.path, e))?;

        let Some(content) = content else {
            debug!("No data file, starting empty");
            return Ok(LoadOutcome::Missing);
        };

        match serde_json::from_slice::<Vec<Student>>(&content) {
            Ok(students) => {
                info!("Loaded {} students", students.len());
                Ok(LoadOutcome::Loaded(students))
            }
            Err(e) => {
                warn!("Data file could not be decoded: {}", e);
                Ok(LoadOutcome::Corrupt {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Overwrite the data file with the full collection
    #[instrument(skip(self, students), fields(path = %self.path.display(), count = students.len()))]
    pub fn save(&self, students: &[Student]) -> Result<()> {
        let json = serde_json::to_string_pretty(students)
            .map_err(|e| RecordsError::encode(&self.path, e))?;

        self.fs_utils
            .write_file(&self.path, json)
            .map_err(|e| RecordsError::file_system("write", &self.path, e))?;

        debug!("Saved {} students", students.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        vec![
            Student::from_input("S1", "jane doe", "20", "cs").unwrap(),
            Student::from_input("S2", "john smith", "-1", "history of art").unwrap(),
            Student::from_input("A-7", "élodie", "33", "maths").unwrap(),
        ]
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::new(temp_dir.path().join("students.json"));

        let outcome = store.load().unwrap();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(outcome.into_students().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_values() {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::new(temp_dir.path().join("students.json"));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(sample()));
    }

    #[test]
    fn test_save_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::new(temp_dir.path().join("students.json"));

        store.save(&sample()).unwrap();
        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_saved_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::new(temp_dir.path().join("students.json"));

        store.save(&sample()[..1]).unwrap();

        let expected = "[\n  {\n    \"id\": \"S1\",\n    \"name\": \"Jane Doe\",\n    \"age\": 20,\n    \"course\": \"Cs\"\n  }\n]";
        assert_eq!(fs::read_to_string(store.path()).unwrap(), expected);
    }

    #[test]
    fn test_corrupt_files_load_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        let store = StudentStore::new(&path);

        for content in [
            "",
            "   \n",
            "{not json",
            "{\"id\": \"S1\"}",
            "[{\"id\": \"S1\", \"name\": \"A\", \"age\": \"20\", \"course\": \"B\"}]",
            "[{\"id\": \"S1\", \"name\": \"A\", \"course\": \"B\"}]",
        ] {
            fs::write(&path, content).unwrap();
            let outcome = store.load().unwrap();
            assert!(outcome.is_corrupt(), "expected corrupt for {content:?}");
            assert!(outcome.into_students().is_empty());
        }
    }

    #[test]
    fn test_invalid_utf8_file_loads_as_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(&path, [0xff, 0xfe, b'[', b']']).unwrap();

        let outcome = StudentStore::new(&path).load().unwrap();
        assert!(outcome.is_corrupt());
        assert!(outcome.into_students().is_empty());
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, b'[', b']']);
    }

    #[test]
    fn test_load_leaves_corrupt_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(&path, "garbage").unwrap();

        StudentStore::new(&path).load().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage");
    }

    #[test]
    fn test_load_directory_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = StudentStore::new(temp_dir.path());

        let err = store.load().unwrap_err();
        assert!(matches!(err, RecordsError::FileSystem { .. }));
    }
}
