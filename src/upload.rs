use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::{
    manager::Notice,
    storage::{FileStore, SlotBackend},
    FileRecord, FileSize, Result, ValidationError,
};

/// The upload form's fields, as typed or pre-filled from a dropped file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub name: String,
    pub size: String,
    pub file_type: String,
    pub external_link: String,
}

impl UploadForm {
    /// Pre-fills name, size and type from a dropped file's name and length.
    /// The contents are never read.
    pub fn from_dropped(name: &str, byte_len: u64) -> Self {
        let file_type = match name.rsplit('.').next() {
            Some(ext) if !ext.is_empty() => ext.to_string(),
            _ => "unknown".to_string(),
        };

        Self {
            name: name.to_string(),
            size: FileSize::label_for_bytes(byte_len),
            file_type,
            external_link: String::new(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let fields = [
            ("name", &self.name),
            ("size", &self.size),
            ("type", &self.file_type),
            ("link", &self.external_link),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        FileSize::parse(&self.size)?;
        Ok(())
    }

    /// Builds a new record with a fresh id.
    pub fn submit(&self, now: DateTime<Utc>) -> std::result::Result<FileRecord, ValidationError> {
        self.validate()?;

        Ok(FileRecord {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            file_type: Some(self.file_type.trim().to_string()),
            size: FileSize::normalize(&self.size)?,
            last_modified: Some(now),
            external_link: self.external_link.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn rejection_notice(err: &ValidationError) -> Notice {
    match err {
        ValidationError::MissingField(_) => {
            Notice::destructive("Missing Information", "Please fill in all fields")
        }
        other => Notice::destructive("Invalid Information", other.to_string()),
    }
}

/// Submits `form` into `store`. On success the form is cleared; on a
/// validation failure nothing is stored and the error is returned.
pub async fn upload<B: SlotBackend>(
    store: &mut FileStore<B>,
    form: &mut UploadForm,
) -> Result<(FileRecord, Notice)> {
    let record = form.submit(Utc::now())?;
    store.add(record.clone()).await?;
    form.clear();
    let notice = Notice::info(
        "File Uploaded",
        "Your file has been successfully added to the database",
    );
    Ok((record, notice))
}
