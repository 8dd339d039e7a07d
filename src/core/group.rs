//! Grouping of tree entries into per-item folders.
//!
//! Content follows the path convention `<Section>/<ItemId>/<files...>`.
//! The item id is taken verbatim from the path; any folder name is accepted.

use std::collections::HashMap;

use super::tree::TreeEntry;
use crate::models::file_stem;

/// Path shape a listing expects below its section folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Exactly `section/key/file`
    Folder,
    /// `section/key/file` or deeper
    NestedFolder,
    /// Exactly `section/file.ext`; files sharing a stem form one group
    Flat,
}

/// All files belonging to one item.
///
/// Every entry shares the same section and key path segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemGroup {
    pub key: String,
    pub entries: Vec<TreeEntry>,
}

impl ItemGroup {
    /// First entry whose file name satisfies `pred`.
    pub fn find(&self, pred: impl Fn(&str) -> bool) -> Option<&TreeEntry> {
        self.entries
            .iter()
            .find(|e| pred(crate::models::file_name(&e.path)))
    }

    /// Every entry except the one at `path`.
    pub fn others<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a TreeEntry> + 'a {
        self.entries.iter().filter(move |e| e.path != path)
    }
}

/// Key of an entry under `layout`, or `None` if the entry does not belong.
pub fn entry_key<'a>(entry: &'a TreeEntry, section: &str, layout: Layout) -> Option<&'a str> {
    if !entry.is_file() {
        return None;
    }

    let segments: Vec<&str> = entry.path.split('/').collect();
    if segments.first() != Some(&section) || segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    match layout {
        Layout::Folder if segments.len() == 3 => Some(segments[1]),
        Layout::NestedFolder if segments.len() >= 3 => Some(segments[1]),
        Layout::Flat if segments.len() == 2 => Some(file_stem(segments[1])),
        _ => None,
    }
}

/// Partition `entries` into groups for `section`.
///
/// Groups appear in order of their first entry. Directories, entries
/// outside the section and entries at the wrong depth are ignored.
pub fn group_entries(entries: &[TreeEntry], section: &str, layout: Layout) -> Vec<ItemGroup> {
    let mut groups: Vec<ItemGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let Some(key) = entry_key(entry, section, layout) else {
            continue;
        };

        match index.get(key) {
            Some(&i) => groups[i].entries.push(entry.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(ItemGroup {
                    key: key.to_string(),
                    entries: vec![entry.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<TreeEntry> {
        paths.iter().map(|p| TreeEntry::file(*p, None)).collect()
    }

    fn keys(groups: &[ItemGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.key.as_str()).collect()
    }

    #[test]
    fn test_folder_layout_requires_exact_depth() {
        let entries = files(&[
            "Achievements/Sports Day/data.txt",
            "Achievements/Sports Day/image.jpg",
            "Achievements/readme.txt",
            "Achievements/Science/extra/photo.jpg",
            "Achievements/Science/data.txt",
            "Gallery/Sports/a.jpg",
        ]);

        let groups = group_entries(&entries, "Achievements", Layout::Folder);
        assert_eq!(keys(&groups), vec!["Sports Day", "Science"]);
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].entries.len(), 1);

        // Every entry shares the section and key prefix
        for group in &groups {
            let prefix = format!("Achievements/{}/", group.key);
            assert!(group.entries.iter().all(|e| e.path.starts_with(&prefix)));
        }
    }

    #[test]
    fn test_nested_layout_accepts_deeper_paths() {
        let entries = files(&[
            "Uploads/2024-forms/data.txt",
            "Uploads/2024-forms/pdf/admission.pdf",
            "Uploads/loose.pdf",
        ]);

        let groups = group_entries(&entries, "Uploads", Layout::NestedFolder);
        assert_eq!(keys(&groups), vec!["2024-forms"]);
        assert_eq!(groups[0].entries.len(), 2);
    }

    #[test]
    fn test_flat_layout_groups_by_stem() {
        let entries = files(&[
            "Notices/1.txt",
            "Notices/2.txt",
            "Notices/2.pdf",
            "Notices/archive/3.txt",
        ]);

        let groups = group_entries(&entries, "Notices", Layout::Flat);
        assert_eq!(keys(&groups), vec!["1", "2"]);
        assert_eq!(groups[1].entries.len(), 2);
    }

    #[test]
    fn test_directories_and_other_sections_ignored() {
        let mut entries = files(&["Gallery/Arts/c.webp", "GalleryOld/Arts/d.webp"]);
        entries.insert(0, TreeEntry::directory("Gallery/Arts"));
        entries.insert(0, TreeEntry::directory("Gallery/Arts/nested"));

        let groups = group_entries(&entries, "Gallery", Layout::Folder);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries, files(&["Gallery/Arts/c.webp"]));
    }

    #[test]
    fn test_empty_segments_rejected() {
        let entries = files(&["Gallery//a.jpg", "Gallery/Arts/"]);
        assert!(group_entries(&entries, "Gallery", Layout::Folder).is_empty());
    }

    #[test]
    fn test_find_and_others() {
        let entries = files(&["Uploads/x/data.txt", "Uploads/x/a.pdf", "Uploads/x/b.pdf"]);
        let groups = group_entries(&entries, "Uploads", Layout::NestedFolder);
        let group = &groups[0];

        let data = group.find(|name| name == "data.txt").unwrap();
        assert_eq!(data.path, "Uploads/x/data.txt");
        assert_eq!(group.others(&data.path).count(), 2);
        assert!(group.find(|name| name == "missing.txt").is_none());
    }
}
