//! Formatting utilities for file sizes and card text.

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units (e.g., "1.5 KB", "2 MB").
///
/// Values keep at most two decimals, without trailing zeros.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let number = format!("{:.2}", value);
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", number, SIZE_UNITS[unit])
}

/// Like [`format_size`], but `"-"` when the size is unknown.
pub fn format_optional_size(bytes: Option<u64>) -> String {
    bytes.map(format_size).unwrap_or_else(|| "-".to_string())
}

/// Shorten `text` to `max_chars` characters, appending `"..."` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(2_500_000), "2.38 MB");
    }

    #[test]
    fn test_format_optional_size() {
        assert_eq!(format_optional_size(None), "-");
        assert_eq!(format_optional_size(Some(2048)), "2 KB");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 150), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        // Counts characters, not bytes
        assert_eq!(truncate("ठीक है भाई", 3), "ठीक...");
    }
}
