use tracing::{debug, info, warn};
use crate::{FileRecord, FileUpdate, Result, StorageError};
use super::disk::SlotBackend;

/// Slot key the collection is mirrored under.
pub const DEFAULT_SLOT_KEY: &str = "kvsFiles";

/// What `FileStore::open` found in the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// Slot absent. The caller decides whether to seed.
    FirstRun,
    /// Slot parsed.
    Restored { count: usize },
    /// Slot present but unreadable as a collection; started empty.
    Recovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[FileRecord]) + Send + Sync>;

/// The authoritative in-memory collection of file records, mirrored to a
/// single slot after every mutation.
pub struct FileStore<B: SlotBackend> {
    backend: B,
    key: String,
    files: Vec<FileRecord>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<B: SlotBackend> FileStore<B> {
    pub async fn open(backend: B, key: impl Into<String>) -> Result<(Self, Startup)> {
        let key = key.into();

        let (files, startup) = match backend.read(&key).await? {
            None => (Vec::new(), Startup::FirstRun),
            Some(content) => match serde_json::from_str::<Vec<FileRecord>>(&content) {
                Ok(files) => {
                    let count = files.len();
                    (files, Startup::Restored { count })
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "error parsing stored files, starting empty");
                    (Vec::new(), Startup::Recovered)
                }
            },
        };

        let store = Self {
            backend,
            key,
            files,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        Ok((store, startup))
    }

    /// Current collection in insertion order.
    pub fn load(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Replaces the whole collection and persists it.
    pub async fn seed(&mut self, records: Vec<FileRecord>) -> Result<()> {
        info!(count = records.len(), "seeding file collection");
        self.files = records;
        self.commit().await
    }

    /// Appends `record`. Ids are not checked for uniqueness.
    pub async fn add(&mut self, record: FileRecord) -> Result<()> {
        debug!(id = %record.id, name = %record.name, "adding file");
        self.files.push(record);
        self.commit().await
    }

    /// Removes the first record with `id`. Unknown ids still persist the
    /// (unchanged) collection.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        if let Some(pos) = self.files.iter().position(|f| f.id == id) {
            let removed = self.files.remove(pos);
            debug!(id = %removed.id, name = %removed.name, "deleted file");
        } else {
            debug!(id, "delete of unknown id");
        }
        self.commit().await
    }

    /// Merges `update` into the first record with `id`.
    pub async fn update(&mut self, id: &str, update: FileUpdate) -> Result<()> {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.apply(update);
            debug!(id, "updated file");
        } else {
            debug!(id, "update of unknown id");
        }
        self.commit().await
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[FileRecord]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Full snapshot write, then listener notification.
    async fn commit(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.files)
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        self.backend.write(&self.key, &snapshot).await?;
        debug!(key = %self.key, count = self.files.len(), "persisted file collection");

        for (_, listener) in &self.listeners {
            listener(&self.files);
        }
        Ok(())
    }
}
