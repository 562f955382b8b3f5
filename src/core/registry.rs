//! The in-memory student collection and its CRUD contract
//!
//! `StudentRegistry` owns the collection for the lifetime of a session and
//! writes it back through the store after every successful mutation.

use crate::{
    core::{
        store::{LoadOutcome, StudentStore},
        student::{Student, StudentUpdate},
    },
    error::{RecordsError, Result},
};
use tracing::{debug, info, instrument, warn};

/// Session object owning the student collection
#[derive(Debug)]
pub struct StudentRegistry {
    store: StudentStore,
    students: Vec<Student>,
    dirty: bool,
}

impl StudentRegistry {
    /// Open a registry, loading the collection from the store.
    ///
    /// The load outcome is returned alongside so the caller can report a
    /// missing or corrupt data file.
    pub fn open(store: StudentStore) -> Result<(Self, LoadOutcome)> {
        let outcome = store.load()?;
        let registry = Self::with_students(store, outcome.clone().into_students());
        Ok((registry, outcome))
    }

    /// Create a registry over an existing collection without touching disk
    pub fn with_students(store: StudentStore, students: Vec<Student>) -> Self {
        Self {
            store,
            students,
            dirty: false,
        }
    }

    /// All records in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether an earlier save failed and the disk copy is stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Look up a record by exact id
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RecordsError::not_found(id))
    }

    /// Append a new record and persist.
    ///
    /// A record whose id is already taken is rejected without mutation.
    #[instrument(skip(self, student), fields(id = %student.id))]
    pub fn add(&mut self, student: Student) -> Result<&Student> {
        if self.contains(&student.id) {
            return Err(RecordsError::duplicate_id(&student.id));
        }

        self.students.push(student);
        info!("Student added, {} total", self.students.len());
        self.persist()?;

        let index = self.students.len() - 1;
        Ok(&self.students[index])
    }

    /// Replace the fields named in `update` on the record with `id` and persist
    #[instrument(skip(self, update))]
    pub fn update(&mut self, id: &str, update: StudentUpdate) -> Result<&Student> {
        let index = self.position(id)?;

        if update.is_empty() {
            debug!("Update changes nothing");
        }
        self.students[index].apply(update);
        info!("Student updated");
        self.persist()?;

        Ok(&self.students[index])
    }

    /// Remove the record with `id`, persist, and return it
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<Student> {
        let index = self.position(id)?;

        let removed = self.students.remove(index);
        info!("Student deleted, {} remaining", self.students.len());
        self.persist()?;

        Ok(removed)
    }

    /// Write the collection out if a previous save failed
    pub fn flush(&mut self) -> Result<()> {
        if self.dirty {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        match self.store.save(&self.students) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                warn!("Save failed, keeping changes in memory: {}", e);
                self.dirty = true;
                Err(e)
            }
        }
    }
}
