//! The remote-listing pipeline.
//!
//! One parametrized pipeline serves every dynamic page:
//!
//! 1. fetch the repository tree (the only fatal step),
//! 2. group entries under the listing's section folder,
//! 3. pick the metadata and media files of each group,
//! 4. fetch and parse every metadata file concurrently,
//! 5. sort the surviving records.
//!
//! A group with missing files, an unreadable metadata file or a parse
//! error is dropped with a warning; the rest of the listing still loads.

use futures::future::join_all;

use super::error::FetchError;
use super::group::{ItemGroup, Layout, entry_key, group_entries};
use super::metadata::LineSchema;
use super::presenter::{SortOrder, sort_items};
use super::source::ContentSource;
use super::tree::TreeEntry;
use crate::config::{COVER_IMAGE_STEM, IMAGE_EXTENSIONS, METADATA_FILE, TEXT_EXTENSION};
use crate::models::{FileType, MediaRef, ParsedItem, extension, file_name, file_stem};

/// The four dynamic listings of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    /// `Gallery/<category>/<image>`: one item per image
    Gallery,
    /// `Achievements/<id>/{data.txt, image.*}`
    Achievements,
    /// `Uploads/<id>/{data.txt, files...}`
    Files,
    /// `Notices/<id>.txt` (plus optional same-stem attachments)
    Notices,
}

impl ListingKind {
    /// Top-level folder in the content repository.
    pub fn section(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::Achievements => "Achievements",
            Self::Files => "Uploads",
            Self::Notices => "Notices",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Self::Gallery | Self::Achievements => Layout::Folder,
            Self::Files => Layout::NestedFolder,
            Self::Notices => Layout::Flat,
        }
    }

    /// Metadata line mapping; the gallery has no metadata files.
    pub fn schema(self) -> Option<LineSchema> {
        match self {
            Self::Gallery => None,
            Self::Achievements => Some(LineSchema::Achievement),
            Self::Files => Some(LineSchema::Upload),
            Self::Notices => Some(LineSchema::Notice),
        }
    }

    pub fn sort_order(self) -> SortOrder {
        match self {
            Self::Gallery => SortOrder::Source,
            Self::Achievements => SortOrder::Newest,
            Self::Files => SortOrder::ById,
            Self::Notices => SortOrder::PinnedThenNewest,
        }
    }

    /// Plural noun for status messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Gallery => "gallery images",
            Self::Achievements => "achievements",
            Self::Files => "files",
            Self::Notices => "notices",
        }
    }
}

pub(crate) fn is_image(name: &str) -> bool {
    extension(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_cover_image(name: &str) -> bool {
    is_image(name) && file_stem(name).eq_ignore_ascii_case(COVER_IMAGE_STEM)
}

/// Whether `entry` is the metadata file of `group`. Folder layouts only
/// accept `data.txt` directly inside the item folder.
fn is_metadata_entry(kind: ListingKind, group: &ItemGroup, entry: &TreeEntry) -> bool {
    match kind.layout() {
        Layout::Flat => extension(&entry.path).as_deref() == Some(TEXT_EXTENSION),
        Layout::Folder | Layout::NestedFolder => {
            entry.path == format!("{}/{}/{}", kind.section(), group.key, METADATA_FILE)
        }
    }
}

/// Files chosen from one group.
struct GroupPlan<'a> {
    group: &'a ItemGroup,
    metadata: &'a TreeEntry,
    media: Vec<&'a TreeEntry>,
}

/// Pick the metadata and media files of a group, or `None` if a required
/// file is missing.
fn plan_group(kind: ListingKind, group: &ItemGroup) -> Option<GroupPlan<'_>> {
    let metadata = group
        .entries
        .iter()
        .find(|entry| is_metadata_entry(kind, group, entry));

    let plan = match (kind, metadata) {
        (ListingKind::Achievements, Some(metadata)) => group
            .find(is_cover_image)
            .map(|cover| GroupPlan {
                group,
                metadata,
                media: vec![cover],
            }),
        (ListingKind::Files, Some(metadata)) => Some(GroupPlan {
            group,
            metadata,
            media: group
                .entries
                .iter()
                .filter(|e| file_name(&e.path) != METADATA_FILE)
                .collect(),
        }),
        (ListingKind::Notices, Some(metadata)) => Some(GroupPlan {
            group,
            metadata,
            media: group.others(&metadata.path).collect(),
        }),
        _ => None,
    };

    if plan.is_none() {
        let required = match kind {
            ListingKind::Achievements => "data.txt or image file",
            ListingKind::Notices => ".txt file",
            _ => METADATA_FILE,
        };
        log::warn!(
            "skipping {}/{}: missing {} (found: {:?})",
            kind.section(),
            group.key,
            required,
            group.entries.iter().map(|e| e.path.as_str()).collect::<Vec<_>>()
        );
    }

    plan
}

fn media_ref<S: ContentSource>(source: &S, entry: &TreeEntry) -> Result<MediaRef, FetchError> {
    Ok(MediaRef {
        name: file_name(&entry.path).to_string(),
        path: entry.path.clone(),
        url: source.raw_url(&entry.path)?,
        kind: FileType::from_path(&entry.path),
        size_bytes: entry.size_bytes,
    })
}

/// Fetch and parse one group's metadata into a record.
async fn build_item<S: ContentSource>(
    source: &S,
    kind: ListingKind,
    schema: LineSchema,
    plan: GroupPlan<'_>,
) -> Option<ParsedItem> {
    let key = &plan.group.key;

    let text = match source.fetch_text(&plan.metadata.path).await {
        Ok(text) => text,
        Err(e) if e.is_aborted() => return None,
        Err(e) => {
            log::warn!("failed to fetch {}: {}", plan.metadata.path, e);
            return None;
        }
    };

    let meta = match schema.parse(&text) {
        Ok(meta) => meta,
        Err(e) => {
            log::warn!(
                "invalid {} in {}/{}: {}",
                file_name(&plan.metadata.path),
                kind.section(),
                key,
                e
            );
            return None;
        }
    };

    let media = match plan
        .media
        .iter()
        .map(|entry| media_ref(source, entry))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(media) => media,
        Err(e) => {
            log::warn!("skipping {}/{}: {}", kind.section(), key, e);
            return None;
        }
    };

    Some(ParsedItem {
        id: key.clone(),
        title: meta.title,
        category: meta.category,
        date: meta.date,
        description: meta.description,
        media,
        pinned: meta.pinned,
    })
}

/// One gallery record per image, in tree order; the folder name is the
/// category.
fn gallery_items<S: ContentSource>(source: &S, tree: &[TreeEntry]) -> Vec<ParsedItem> {
    let section = ListingKind::Gallery.section();
    tree.iter()
        .filter(|entry| is_image(&entry.path))
        .filter_map(|entry| {
            let category = entry_key(entry, section, Layout::Folder)?;
            match media_ref(source, entry) {
                Ok(media) => Some((category, media)),
                Err(e) => {
                    log::warn!("skipping {}: {}", entry.path, e);
                    None
                }
            }
        })
        .enumerate()
        .map(|(i, (category, media))| ParsedItem {
            id: media.path.clone(),
            title: format!("{} - Image {}", category, i + 1),
            category: category.to_string(),
            date: Default::default(),
            description: String::new(),
            media: vec![media],
            pinned: false,
        })
        .collect()
}

/// Run the pipeline for `kind` against `source`.
///
/// Only a tree-level failure is returned as an error.
pub async fn load_listing<S: ContentSource>(
    source: &S,
    kind: ListingKind,
) -> Result<Vec<ParsedItem>, FetchError> {
    let tree = match source.fetch_tree().await {
        Ok(tree) => tree,
        Err(e) => {
            if !e.is_aborted() {
                log::error!("failed to load {}: {}", kind.noun(), e);
            }
            return Err(e);
        }
    };
    log::debug!("tree listing has {} entries", tree.len());

    let groups = group_entries(&tree, kind.section(), kind.layout());

    let items = match kind.schema() {
        None => gallery_items(source, &tree),
        Some(schema) => {
            let pending = groups
                .iter()
                .filter_map(|group| plan_group(kind, group))
                .map(|plan| build_item(source, kind, schema, plan));
            join_all(pending).await.into_iter().flatten().collect()
        }
    };

    log::info!(
        "loaded {} {} from {} folders",
        items.len(),
        kind.noun(),
        groups.len()
    );

    Ok(sort_items(items, kind.sort_order()))
}
