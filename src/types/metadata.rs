use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use super::FileCategory;

/// Metadata for one logical file. The bytes themselves live behind
/// `external_link` and are never fetched.
///
/// Stored records may have been written by hand or by older builds, so every
/// field except `id` tolerates being missing, `null` or of the wrong scalar
/// type. One loose record must not make the whole collection unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "teraboxLink", default, deserialize_with = "lenient_string")]
    pub external_link: String,
}

impl FileRecord {
    pub fn type_label(&self) -> &str {
        match self.file_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "unknown",
        }
    }

    pub fn category(&self) -> FileCategory {
        FileCategory::from_type(self.file_type.as_deref())
    }

    /// Lower-cased text after the last `.` of the name, `unknown` for an empty name.
    pub fn extension(&self) -> String {
        if self.name.is_empty() {
            return "unknown".to_string();
        }
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn apply(&mut self, update: FileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(file_type) = update.file_type {
            self.file_type = Some(file_type);
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(last_modified) = update.last_modified {
            self.last_modified = Some(last_modified);
        }
        if let Some(link) = update.external_link {
            self.external_link = link;
        }
    }
}

/// Partial record used by `FileStore::update`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(rename = "teraboxLink", default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl FileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.file_type.is_none()
            && self.size.is_none()
            && self.last_modified.is_none()
            && self.external_link.is_none()
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

/// RFC 3339, a zone-less ISO-8601 date-time read as UTC, or epoch
/// milliseconds. Anything else reads as no timestamp.
fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|t| t.and_utc())
            }),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    };
    Ok(parsed)
}
