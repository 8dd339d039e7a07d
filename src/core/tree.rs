//! Repository tree listing.
//!
//! Decodes the response of GitHub's recursive tree endpoint
//! (`GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`) into a flat
//! list of [`TreeEntry`] values.

use serde::Deserialize;

use super::error::FetchError;

/// Whether a tree entry is a file or a folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One path in the content repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntry {
    /// Slash-separated path from the repository root
    pub path: String,
    pub kind: EntryKind,
    /// Blob size; absent for directories
    pub size_bytes: Option<u64>,
}

impl TreeEntry {
    pub fn file(path: impl Into<String>, size_bytes: Option<u64>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size_bytes,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            size_bytes: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Wire shape of the tree response.
#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<RawTreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct RawTreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    size: Option<u64>,
}

/// Decode a tree listing body.
///
/// `blob` entries become files and `tree` entries directories; anything
/// else (submodule `commit` entries) is skipped.
pub fn decode_tree(body: &str) -> Result<Vec<TreeEntry>, FetchError> {
    let response: TreeResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if response.truncated {
        log::warn!(
            "tree listing truncated at {} entries; later content will be missing",
            response.tree.len()
        );
    }

    Ok(response
        .tree
        .into_iter()
        .filter_map(|item| match item.kind.as_str() {
            "blob" => Some(TreeEntry::file(item.path, item.size)),
            "tree" => Some(TreeEntry::directory(item.path)),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tree() {
        let body = r#"{
            "sha": "abc",
            "url": "https://api.github.com/...",
            "tree": [
                {"path": "Gallery", "mode": "040000", "type": "tree", "sha": "1"},
                {"path": "Gallery/Sports/a.jpg", "mode": "100644", "type": "blob", "sha": "2", "size": 2048},
                {"path": "vendor/lib", "mode": "160000", "type": "commit", "sha": "3"}
            ],
            "truncated": false
        }"#;

        let entries = decode_tree(body).unwrap();
        assert_eq!(
            entries,
            vec![
                TreeEntry::directory("Gallery"),
                TreeEntry::file("Gallery/Sports/a.jpg", Some(2048)),
            ]
        );
    }

    #[test]
    fn test_decode_truncated_tree_still_returns_entries() {
        let body = r#"{"tree": [{"path": "a.txt", "type": "blob"}], "truncated": true}"#;
        let entries = decode_tree(body).unwrap();
        assert_eq!(entries, vec![TreeEntry::file("a.txt", None)]);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_tree("<html>rate limited</html>"),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(
            decode_tree(r#"{"message": "Not Found"}"#),
            Err(FetchError::Malformed(_))
        ));
    }
}
