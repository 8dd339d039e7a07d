//! Listing records produced by the content pipeline.

use chrono::{DateTime, NaiveDate};

// =============================================================================
// File Types
// =============================================================================

/// Kinds of attachment the site knows how to present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Image,
    Pdf,
    Document,
    Other,
}

impl FileType {
    /// Detect file type from path extension
    pub fn from_path(path: &str) -> Self {
        match extension(path).as_deref() {
            Some("jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp") => Self::Image,
            Some("pdf") => Self::Pdf,
            Some("doc" | "docx" | "txt" | "rtf") => Self::Document,
            _ => Self::Other,
        }
    }
}

/// Lowercased extension of the last path segment, if it has one.
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Last segment of a slash-separated path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// File name without its final extension.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Formats tried, in order, when reading a free-form date line.
///
/// Numeric forms are day-first apart from ISO.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// A date line kept verbatim, with a best-effort parsed value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemDate {
    /// Text exactly as written in the metadata file
    pub raw: String,
    /// Calendar date when `raw` matched a known format
    pub parsed: Option<NaiveDate>,
}

impl ItemDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_date(&raw);
        Self { raw, parsed }
    }

    /// Long form, e.g. "March 1, 2024". Falls back to the raw text.
    pub fn display_long(&self) -> String {
        match self.parsed {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.raw.clone(),
        }
    }

    /// Short form, e.g. "Mar 1, 2024". Falls back to the raw text.
    pub fn display_short(&self) -> String {
        match self.parsed {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.raw.clone(),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

// =============================================================================
// Records
// =============================================================================

/// A file attached to a record, resolved to its raw content URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    /// Display name (last path segment)
    pub name: String,
    /// Repository path
    pub path: String,
    /// Raw content URL
    pub url: String,
    pub kind: FileType,
    /// Size from the tree listing
    pub size_bytes: Option<u64>,
}

/// One card on a listing page.
///
/// Gallery, achievement, upload and notice records all share this shape;
/// fields a listing does not use are left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedItem {
    /// Folder name, file stem, or path; unique within a listing
    pub id: String,
    pub title: String,
    /// Empty when the listing has no categories
    pub category: String,
    pub date: ItemDate,
    /// Remaining metadata lines joined with `\n`
    pub description: String,
    pub media: Vec<MediaRef>,
    /// Pinned notices sort ahead of everything else
    pub pinned: bool,
}

impl ParsedItem {
    /// First image attachment, used as the card cover.
    pub fn cover(&self) -> Option<&MediaRef> {
        self.media.iter().find(|m| m.kind == FileType::Image)
    }
}
