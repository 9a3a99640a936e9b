//! Figures shown on the dashboard view, derived from the current collection.

use serde::Serialize;
use crate::{kilobytes_lenient, FileRecord};

const PALETTE: [&str; 8] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(249, 115, 22, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(234, 179, 8, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(20, 184, 166, 0.8)",
];

/// Shown as a fixed figure on the dashboard; there is no user tracking.
pub const ACTIVE_USERS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub file: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

/// Demo feed displayed under "Recent Activity".
pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity { action: "Upload", file: "System Backup.zip", user: "Admin", time: "2 hours ago" },
    Activity { action: "Download", file: "User Data.json", user: "John", time: "5 hours ago" },
    Activity { action: "Delete", file: "Old Records.csv", user: "Sarah", time: "Yesterday" },
    Activity { action: "Modify", file: "Configuration.xml", user: "Admin", time: "2 days ago" },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_files: usize,
    pub total_size_kb: f64,
    /// Extension histogram in first-seen order.
    pub file_types: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub file_type: String,
    pub count: usize,
    pub share: f64,
    pub color: &'static str,
}

impl DashboardStats {
    pub fn compute(files: &[FileRecord]) -> Self {
        let mut total_size_kb = 0.0;
        let mut file_types: Vec<(String, usize)> = Vec::new();

        for file in files {
            total_size_kb += kilobytes_lenient(&file.size);

            let extension = file.extension();
            match file_types.iter_mut().find(|(t, _)| *t == extension) {
                Some((_, count)) => *count += 1,
                None => file_types.push((extension, 1)),
            }
        }

        Self {
            total_files: files.len(),
            total_size_kb,
            file_types,
        }
    }

    pub fn total_size_mb(&self) -> f64 {
        self.total_size_kb / 1024.0
    }

    /// Storage used, e.g. `2.62 MB`.
    pub fn total_size_label(&self) -> String {
        format!("{:.2} MB", self.total_size_mb())
    }

    pub fn distinct_types(&self) -> usize {
        self.file_types.len()
    }

    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        let total: usize = self.file_types.iter().map(|(_, c)| c).sum();
        let total = total.max(1) as f64;

        self.file_types
            .iter()
            .enumerate()
            .map(|(index, (file_type, count))| ChartSlice {
                file_type: file_type.clone(),
                count: *count,
                share: *count as f64 / total,
                color: color_for_type(file_type, index),
            })
            .collect()
    }
}

pub fn color_for_type(file_type: &str, index: usize) -> &'static str {
    match file_type.to_lowercase().as_str() {
        "pdf" => "rgba(239, 68, 68, 0.8)",
        "jpg" | "jpeg" | "png" => "rgba(16, 185, 129, 0.8)",
        "doc" | "docx" => "rgba(59, 130, 246, 0.8)",
        "zip" | "rar" => "rgba(249, 115, 22, 0.8)",
        "mp4" | "mov" => "rgba(139, 92, 246, 0.8)",
        "json" => "rgba(234, 179, 8, 0.8)",
        "sql" => "rgba(20, 184, 166, 0.8)",
        _ => PALETTE[index % PALETTE.len()],
    }
}
