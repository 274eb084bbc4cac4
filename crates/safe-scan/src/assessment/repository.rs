use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::domain::AssessmentRecord;

/// Slot holding the archived assessments.
pub const ASSESSMENTS_SLOT: &str = "safe_scan_assessments";

/// Append-only archive of completed assessments, most recent first.
pub trait AssessmentRepository {
    /// Prepend `record` and persist the whole list. Fails without writing when the stored list
    /// cannot be read.
    fn append(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    /// Every stored record, most recent first. Missing or unreadable state yields an empty list.
    fn load_all(&self) -> Vec<AssessmentRecord>;
    /// Remove every stored record.
    fn clear(&self) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to encode assessments: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(#[from] io::Error),
}

/// Named cells each holding one text document.
pub trait SlotStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>>;
    /// Replace the slot's contents in one step.
    fn write(&self, slot: &str, contents: &str) -> io::Result<()>;
    fn remove(&self, slot: &str) -> io::Result<()>;
}

/// Process-local slots for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| io::Error::other("slot mutex poisoned"))
    }
}

impl SlotStorage for MemorySlots {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        self.lock()?.insert(slot.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        self.lock()?.remove(slot);
        Ok(())
    }
}

/// One `<slot>.json` file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileSlots {
    root: PathBuf,
}

impl FileSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}

impl SlotStorage for FileSlots {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let final_path = self.slot_path(slot);
        let tmp_path = self.root.join(format!(".{slot}.json.tmp"));
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &final_path)
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Repository storing the full record list as one JSON array in a single slot.
#[derive(Debug, Clone)]
pub struct JsonSlotRepository<S> {
    storage: S,
    slot: String,
}

impl<S: SlotStorage> JsonSlotRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, ASSESSMENTS_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current records for a read-modify-write. A failed read is an error so the archive is
    /// never replaced on the strength of it; undecodable contents still count as empty.
    fn load_for_update(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let Some(raw) = self.storage.read(&self.slot)? else {
            return Ok(Vec::new());
        };
        Ok(self.decode(&raw))
    }

    fn decode(&self, raw: &str) -> Vec<AssessmentRecord> {
        match serde_json::from_str::<Vec<AssessmentRecord>>(raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "assessment slot corrupt; treating as empty");
                Vec::new()
            }
        }
    }
}

impl JsonSlotRepository<MemorySlots> {
    pub fn in_memory() -> Self {
        Self::new(MemorySlots::default())
    }
}

impl JsonSlotRepository<FileSlots> {
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(FileSlots::new(root))
    }
}

impl<S: SlotStorage> AssessmentRepository for JsonSlotRepository<S> {
    fn append(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut records = self.load_for_update()?;
        records.insert(0, record);
        let encoded = serde_json::to_string(&records)?;
        self.storage.write(&self.slot, &encoded)?;
        debug!(slot = %self.slot, count = records.len(), "assessments persisted");
        Ok(())
    }

    fn load_all(&self) -> Vec<AssessmentRecord> {
        match self.storage.read(&self.slot) {
            Ok(Some(raw)) => self.decode(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "assessment slot unreadable; treating as empty");
                Vec::new()
            }
        }
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.storage.remove(&self.slot)?;
        Ok(())
    }
}
