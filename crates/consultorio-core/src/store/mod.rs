//! Persistence layer: whole-document JSON snapshots.
//!
//! Every operation loads the full document, mutates an in-memory copy and
//! writes the full document back. Single-user, single-process;
//! last-writer-wins with no locking. A failed save leaves the previous
//! document intact and only the in-progress mutation is lost.

mod patients;
mod schedule;
mod slots;

pub use slots::GenerationSummary;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub(crate) const PATIENTS_DOC: &str = "pacientes.json";
pub(crate) const SLOTS_DOC: &str = "turnos.json";
pub(crate) const SCHEDULE_DOC: &str = "configuracion.json";

enum Backend {
    Disk(PathBuf),
    Memory(RefCell<HashMap<&'static str, String>>),
}

/// Handle over the persisted documents.
pub struct Store {
    backend: Backend,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            backend: Backend::Disk(dir.as_ref().to_path_buf()),
        })
    }

    /// In-memory store (for testing).
    pub fn open_in_memory() -> Self {
        Self {
            backend: Backend::Memory(RefCell::new(HashMap::new())),
        }
    }

    /// Read a whole document; `None` if it does not exist yet.
    pub(crate) fn read_document(&self, name: &'static str) -> Result<Option<String>> {
        match &self.backend {
            Backend::Disk(dir) => {
                let path = dir.join(name);
                if !path.exists() {
                    return Ok(None);
                }
                Ok(Some(fs::read_to_string(path)?))
            }
            Backend::Memory(docs) => Ok(docs.borrow().get(name).cloned()),
        }
    }

    /// Replace a whole document in a single write.
    pub(crate) fn write_document(&self, name: &'static str, contents: &str) -> Result<()> {
        match &self.backend {
            Backend::Disk(dir) => {
                fs::write(dir.join(name), contents)?;
            }
            Backend::Memory(docs) => {
                docs.borrow_mut().insert(name, contents.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_reads_as_none() {
        let store = Store::open_in_memory();
        assert!(store.read_document(PATIENTS_DOC).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = Store::open_in_memory();
        store.write_document(PATIENTS_DOC, "{}").unwrap();
        assert_eq!(store.read_document(PATIENTS_DOC).unwrap().unwrap(), "{}");
    }

    #[test]
    fn test_disk_store_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        let store = Store::open(&dir).unwrap();
        assert!(dir.is_dir());

        store.write_document(SLOTS_DOC, "{}").unwrap();
        assert!(dir.join(SLOTS_DOC).exists());

        let reopened = Store::open(&dir).unwrap();
        assert_eq!(reopened.read_document(SLOTS_DOC).unwrap().unwrap(), "{}");
    }
}
