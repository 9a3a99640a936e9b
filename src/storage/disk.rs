use std::{collections::HashMap, path::{Path, PathBuf}, sync::Arc};
use tokio::{fs, sync::Mutex};
use async_trait::async_trait;
use crate::{Result, StorageError};

/// A named-slot key-value store holding one serialized string per key,
/// in the manner of browser local storage.
#[async_trait]
pub trait SlotBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Slots stored as `<base_path>/<key>.json`.
pub struct DiskSlots {
    base_path: PathBuf,
}

impl DiskSlots {
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref().to_owned();
        fs::create_dir_all(&base_path).await?;
        Ok(Self { base_path })
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Storage(format!("invalid slot key {:?}", key)).into());
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl SlotBackend for DiskSlots {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slots. Clones share the same map, so a store reopened over a
/// clone sees what the previous one wrote.
#[derive(Clone, Default)]
pub struct MemorySlots {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_slot(key: &str, value: &str) -> Self {
        let slots = Self::new();
        slots.slots.lock().await.insert(key.to_string(), value.to_string());
        slots
    }
}

#[async_trait]
impl SlotBackend for MemorySlots {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().await;
        Ok(slots.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        slots.remove(key);
        Ok(())
    }
}
