//! Media discovery inside a single project folder.
//!
//! Listing is non-recursive and name-based only: files are classified by
//! [`MediaKind::classify`] and anything unrecognized is dropped before the
//! deriver ever sees it.

use std::fs;
use std::io;
use std::path::Path;

use crate::project::MediaKind;

/// Conventional cover file name, synthesized when a folder has no cover.
pub const DEFAULT_COVER_FILE: &str = "cover.jpg";

/// A recognized media file inside a project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// File name within the folder.
    pub name: String,
    /// Classification by file name.
    pub kind: MediaKind,
}

impl MediaFile {
    /// Whether this file is cover-classified.
    #[must_use]
    pub fn is_cover(&self) -> bool {
        self.kind.is_cover()
    }
}

/// List the recognized media files of a project folder.
///
/// Cover-named files sort first (lexically among themselves), the rest
/// lexically ascending. Subdirectories, unrecognized files, and non-UTF-8
/// file names are ignored.
///
/// # Errors
///
/// Returns an error if the folder cannot be listed; callers treat that as
/// a per-project skip, not a scan failure.
pub fn list_media(dir: &Path) -> io::Result<Vec<MediaFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let kind = MediaKind::classify(&name);
        if kind.is_media() {
            files.push(MediaFile { name, kind });
        }
    }

    files.sort_by(|a, b| {
        b.kind
            .is_cover()
            .cmp(&a.kind.is_cover())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(files)
}
