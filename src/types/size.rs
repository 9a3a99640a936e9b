use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    Kb,
    Mb,
}

impl SizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Kb => "KB",
            SizeUnit::Mb => "MB",
        }
    }
}

/// A size string of the form `<number> <KB|MB>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl FileSize {
    /// Strict parse. Accepts an optional space between number and unit and
    /// a unit in any case.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let (value, _, unit) = split_size(input)?;
        Ok(Self { value, unit })
    }

    /// Validates `input` and rewrites it as `<number> <UNIT>`, keeping the
    /// number exactly as typed.
    pub fn normalize(input: &str) -> Result<String, ValidationError> {
        let (_, number, unit) = split_size(input)?;
        Ok(format!("{} {}", number, unit.as_str()))
    }

    /// Label for a dropped file of `bytes` length, always in KB with two decimals.
    pub fn label_for_bytes(bytes: u64) -> String {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }

    pub fn kilobytes(&self) -> f64 {
        match self.unit {
            SizeUnit::Kb => self.value,
            SizeUnit::Mb => self.value * 1024.0,
        }
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.as_str())
    }
}

impl FromStr for FileSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn split_size(input: &str) -> Result<(f64, &str, SizeUnit), ValidationError> {
    let invalid = || ValidationError::InvalidSize(input.to_string());
    let trimmed = input.trim();

    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(invalid)?;
    let (number, unit) = trimmed.split_at(split_at);

    let value: f64 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    let unit = match unit.trim_start().to_ascii_uppercase().as_str() {
        "KB" => SizeUnit::Kb,
        "MB" => SizeUnit::Mb,
        _ => return Err(invalid()),
    };

    Ok((value, number, unit))
}

/// Best-effort reading used by the dashboard totals. Never fails: the first
/// space-separated token contributes its leading number (0 if there is none)
/// and only an exact `MB` second token scales by 1024.
pub fn kilobytes_lenient(size: &str) -> f64 {
    let size = if size.is_empty() { "0 KB" } else { size };
    let mut parts = size.split(' ');
    let number = leading_number(parts.next().unwrap_or_default());
    match parts.next() {
        Some("MB") => number * 1024.0,
        _ => number,
    }
}

/// Length of an `e[+-]digits` suffix at the start of `rest`, or 0.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

fn leading_number(token: &str) -> f64 {
    let token = token.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (i, c) in token.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    end += exponent_len(&token[end..]);
    token[..end].trim_end_matches('.').parse().unwrap_or(0.0)
}
