use chrono::{DateTime, Utc};
use crate::{manager::Notice, FileRecord, Result};
use super::{disk::SlotBackend, store::{FileStore, Startup}};

/// The three demo records a fresh installation starts with.
pub fn sample_records(now: DateTime<Utc>) -> Vec<FileRecord> {
    let sample = |id: &str, name: &str, file_type: &str, size: &str| FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        file_type: Some(file_type.to_string()),
        size: size.to_string(),
        last_modified: Some(now),
        external_link: format!("https://terabox.com/s/sample{}", id),
    };

    vec![
        sample("1", "Project Documentation.pdf", "pdf", "2.4 MB"),
        sample("2", "Database Schema.sql", "sql", "156 KB"),
        sample("3", "User Data.json", "json", "89 KB"),
    ]
}

/// Opens the store and seeds it with the sample records when the slot did
/// not exist yet. A welcome notice is returned only in that case.
pub async fn open_seeded<B: SlotBackend>(
    backend: B,
    key: &str,
) -> Result<(FileStore<B>, Startup, Option<Notice>)> {
    let (mut store, startup) = FileStore::open(backend, key).await?;

    let notice = if startup == Startup::FirstRun {
        store.seed(sample_records(Utc::now())).await?;
        Some(Notice::info(
            "Welcome to KVS Database",
            "Sample data has been loaded for demonstration",
        ))
    } else {
        None
    };

    Ok((store, startup, notice))
}
