//! Static gallery manifest.
//!
//! A prebuilt alternative to listing the gallery live: every image under a
//! section folder, with its category and raw URL, serialized as
//! `[{"category": ..., "src": ...}]`.

use serde::Serialize;

use super::error::FetchError;
use super::group::{Layout, group_entries};
use super::listing::is_image;
use super::tree::TreeEntry;
use crate::models::ContentHost;

/// One image of the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub category: String,
    pub src: String,
}

/// Manifest entries for the images under `section`, in tree order.
pub fn gallery_manifest(
    entries: &[TreeEntry],
    section: &str,
    host: &ContentHost,
) -> Result<Vec<ManifestEntry>, FetchError> {
    group_entries(entries, section, Layout::Folder)
        .iter()
        .flat_map(|group| {
            group
                .entries
                .iter()
                .filter(|e| is_image(&e.path))
                .map(move |e| (group.key.as_str(), e.path.as_str()))
        })
        .map(|(category, path)| {
            Ok(ManifestEntry {
                category: category.to_string(),
                src: host.raw_url(path)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_manifest() {
        let host = ContentHost::github("GHSS-School", "GHSS_School", "main");
        let entries = vec![
            TreeEntry::directory("Gallery/Annual Day"),
            TreeEntry::file("Gallery/Annual Day/stage.JPG", Some(1200)),
            TreeEntry::file("Gallery/Annual Day/readme.md", Some(10)),
            TreeEntry::file("Gallery/Sports/race.png", Some(900)),
            TreeEntry::file("Achievements/fair/image.jpg", Some(900)),
        ];

        let manifest = gallery_manifest(&entries, "Gallery", &host).unwrap();
        assert_eq!(
            manifest,
            vec![
                ManifestEntry {
                    category: "Annual Day".to_string(),
                    src: "https://raw.githubusercontent.com/GHSS-School/GHSS_School/main/Gallery/Annual%20Day/stage.JPG".to_string(),
                },
                ManifestEntry {
                    category: "Sports".to_string(),
                    src: "https://raw.githubusercontent.com/GHSS-School/GHSS_School/main/Gallery/Sports/race.png".to_string(),
                },
            ]
        );

        let json = serde_json::to_string(&manifest[1]).unwrap();
        assert_eq!(
            json,
            r#"{"category":"Sports","src":"https://raw.githubusercontent.com/GHSS-School/GHSS_School/main/Gallery/Sports/race.png"}"#
        );
    }

    #[test]
    fn test_empty_section() {
        let host = ContentHost::github("o", "r", "main");
        let entries = vec![TreeEntry::file("Notices/a.txt", None)];
        assert!(gallery_manifest(&entries, "Gallery", &host).unwrap().is_empty());
    }
}
