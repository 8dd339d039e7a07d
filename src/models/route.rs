//! Hash-based routing.
//!
//! URL format: `#/<page>` (e.g. `#/gallery`, `#/notice-board`). Hash routing
//! keeps the site servable from any static host without rewrite rules.

/// Application routes for hash-based navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash
    Home,
    About,
    Gallery,
    NoticeBoard,
    Faculty,
    Achievements,
    Files,
    /// Anything unrecognized
    NotFound,
}

impl AppRoute {
    /// Routes shown in the navigation bar, in display order.
    pub const NAV: &'static [AppRoute] = &[
        Self::Home,
        Self::About,
        Self::Gallery,
        Self::NoticeBoard,
        Self::Faculty,
        Self::Achievements,
        Self::Files,
    ];

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "about" => Self::About,
            "gallery" => Self::Gallery,
            "notice-board" => Self::NoticeBoard,
            "faculty" => Self::Faculty,
            "achievements" => Self::Achievements,
            "files" => Self::Files,
            _ => Self::NotFound,
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::About => "#/about",
            Self::Gallery => "#/gallery",
            Self::NoticeBoard => "#/notice-board",
            Self::Faculty => "#/faculty",
            Self::Achievements => "#/achievements",
            Self::Files => "#/files",
            Self::NotFound => "#/404",
        }
    }

    /// Label in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Gallery => "Gallery",
            Self::NoticeBoard => "Notice Board",
            Self::Faculty => "School Family",
            Self::Achievements => "Achievements/Activity",
            Self::Files => "Files/Uploads",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Page name used in the document title (`None` for the home page).
    pub fn page_title(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::About => Some("About"),
            Self::Gallery => Some("Gallery"),
            Self::NoticeBoard => Some("Notice Board"),
            Self::Faculty => Some("Faculty"),
            Self::Achievements => Some("Achievements"),
            Self::Files => Some("Files"),
            Self::NotFound => Some("Page Not Found"),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(self) {
        crate::utils::dom::set_hash(self.to_hash());
    }
}
