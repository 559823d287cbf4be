//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use filedrop_core::MimeCategory;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuBookOpen as FilePdf, LuFile as File, LuFileText as FileText,
        LuFilm as FileVideo, LuImage as FileImage, LuMusic as FileAudio,
        LuPresentation as FileSlides, LuSheet as FileSheet, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCloudArrowUp as Upload, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkSlides as FileSlides,
        BsFileEarmarkSpreadsheet as FileSheet, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsXLg as Close,
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

themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_SHEET, FileSheet);
themed_icon!(FILE_SLIDES, FileSlides);
themed_icon!(FILE_ARCHIVE, FileArchive);

/// Icon for a file's coarse MIME category.
pub fn for_category(category: MimeCategory) -> Icon {
    match category {
        MimeCategory::Image => FILE_IMAGE,
        MimeCategory::Video => FILE_VIDEO,
        MimeCategory::Audio => FILE_AUDIO,
        MimeCategory::Pdf => FILE_PDF,
        MimeCategory::Document => FILE_TEXT,
        MimeCategory::Spreadsheet => FILE_SHEET,
        MimeCategory::Presentation => FILE_SLIDES,
        MimeCategory::Archive => FILE_ARCHIVE,
        MimeCategory::Other => FILE,
    }
}
