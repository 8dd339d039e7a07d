//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::{IconTheme, StatIcon};
use crate::models::FileType;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuBell as Bell, LuBookOpen as FilePdf, LuCalendar as Calendar,
        LuChevronRight as ChevronRight, LuCircleAlert as Alert, LuDownload as Download,
        LuEye as Eye, LuFile as File, LuFileText as FileText,
        LuFolderOpen as Folder, LuGraduationCap as Graduation, LuHeart as Heart,
        LuImage as FileImage, LuLightbulb as Lightbulb,
        LuLoaderCircle as Loader, LuMail as Mail, LuMapPin as Location, LuMenu as Menu,
        LuPhone as Phone, LuPin as Pin, LuRefreshCw as Refresh, LuSchool as School,
        LuSearch as Search, LuStar as Star, LuTarget as Target, LuTrophy as Trophy,
        LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowLeft as ArrowLeft, BsArrowRepeat as Loader,
        BsBell as Bell, BsBuilding as School,
        BsBullseye as Target, BsCalendar as Calendar, BsChevronRight as ChevronRight,
        BsDownload as Download, BsEnvelope as Mail, BsExclamationCircle as Alert, BsEye as Eye,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFolder2Open as Folder, BsGeoAltFill as Location,
        BsHeart as Heart, BsLightbulb as Lightbulb, BsList as Menu,
        BsMortarboard as Graduation, BsPeople as Users, BsPinAngle as Pin, BsSearch as Search,
        BsStar as Star, BsTelephone as Phone, BsTrophy as Trophy, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SEARCH, Search);
themed_icon!(REFRESH, Refresh);
themed_icon!(LOADER, Loader);
themed_icon!(ALERT, Alert);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(CALENDAR, Calendar);
themed_icon!(PIN, Pin);
themed_icon!(BELL, Bell);
themed_icon!(TROPHY, Trophy);
themed_icon!(USERS, Users);
themed_icon!(GRADUATION, Graduation);
themed_icon!(SCHOOL, School);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);
themed_icon!(TARGET, Target);
themed_icon!(EYE, Eye);
themed_icon!(HEART, Heart);
themed_icon!(STAR, Star);
themed_icon!(LIGHTBULB, Lightbulb);

/// Icon for an attachment type.
pub fn file_icon(kind: FileType) -> Icon {
    match kind {
        FileType::Image => FILE_IMAGE,
        FileType::Pdf => FILE_PDF,
        FileType::Document => FILE_TEXT,
        FileType::Other => FILE,
    }
}

/// Icon above a stat counter.
pub fn stat_icon(icon: StatIcon) -> Icon {
    match icon {
        StatIcon::Students => USERS,
        StatIcon::Faculty => GRADUATION,
        StatIcon::School => SCHOOL,
    }
}
