//! File manager session: searching, view mode, selection and the simulated
//! download/delete actions.

use std::fmt;
use std::str::FromStr;
use tracing::info;
use crate::{storage::{FileStore, SlotBackend}, FileRecord, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A short user-facing message describing the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode {:?}, expected grid or list", other)),
        }
    }
}

/// Records whose name contains `query`, ignoring case. Records with an
/// empty name never match.
pub fn search<'a>(files: &'a [FileRecord], query: &str) -> Vec<&'a FileRecord> {
    let query = query.to_lowercase();
    files
        .iter()
        .filter(|f| !f.name.is_empty() && f.name.to_lowercase().contains(&query))
        .collect()
}

/// At most one selected record, tracked by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clicking the selected record deselects it; any other record replaces the selection.
    pub fn toggle(&mut self, file: &FileRecord) {
        if self.selected.as_deref() == Some(file.id.as_str()) {
            self.selected = None;
        } else {
            self.selected = Some(file.id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// No bytes move: the external link is only logged and echoed back.
pub fn download(file: &FileRecord) -> Notice {
    info!(link = %file.external_link, "download requested for {}", file.name);
    Notice::info(
        "Download Initiated",
        format!("Preparing download for {}. Please check your browser downloads.", file.name),
    )
}

pub async fn delete<B: SlotBackend>(
    store: &mut FileStore<B>,
    selection: &mut Selection,
    id: &str,
) -> Result<Notice> {
    store.delete(id).await?;
    selection.clear();
    Ok(Notice::destructive("File Deleted", "The file has been successfully removed"))
}
