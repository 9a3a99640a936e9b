use serde::{Deserialize, Serialize};

/// Icon family a record is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileCategory {
    Document,
    Image,
    Archive,
    Code,
    Other,
}

impl FileCategory {
    pub fn from_type(file_type: Option<&str>) -> Self {
        let Some(file_type) = file_type else {
            return FileCategory::Other;
        };

        match file_type.to_lowercase().as_str() {
            "pdf" | "doc" | "docx" | "txt" => FileCategory::Document,
            "jpg" | "jpeg" | "png" | "gif" => FileCategory::Image,
            "zip" | "rar" | "7z" => FileCategory::Archive,
            "js" | "jsx" | "html" | "css" | "json" | "sql" => FileCategory::Code,
            _ => FileCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Document => "document",
            FileCategory::Image => "image",
            FileCategory::Archive => "archive",
            FileCategory::Code => "code",
            FileCategory::Other => "file",
        }
    }
}
