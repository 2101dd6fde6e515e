//! Project record model for the showcase map.
//!
//! This module defines the data emitted by the directory scanner: one record
//! per project folder, carrying display metadata, a map pin position, and the
//! ordered media list consumed by the site's map and gallery renderer.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A position on the world-map canvas, in percent of its width and height.
///
/// Values are nominally in `[0, 100]` but may exceed that range slightly once
/// pin jitter is applied; consumers clamp or tolerate the overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Horizontal position in percent of canvas width.
    pub x: f64,
    /// Vertical position in percent of canvas height.
    pub y: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by the given deltas.
    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Classification of a file inside a project folder.
///
/// Classification looks at the file name only; no content is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// The designated cover image (`cover.jpg`, `cover.jpeg`, or `cover.png`).
    Cover,
    /// A still image (`.jpg`, `.jpeg`, `.png`).
    Image,
    /// A video clip (`.mp4`).
    Video,
    /// Anything else; never included in a record's media list.
    Unrecognized,
}

impl MediaKind {
    /// Classify a file by its name.
    ///
    /// Both the stem and the extension are matched case-insensitively.
    #[must_use]
    pub fn classify(file_name: &str) -> Self {
        let path = Path::new(file_name);
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Unrecognized;
        };
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" => {
                let is_cover = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s.eq_ignore_ascii_case("cover"));
                if is_cover {
                    Self::Cover
                } else {
                    Self::Image
                }
            }
            "mp4" => Self::Video,
            _ => Self::Unrecognized,
        }
    }

    /// Whether this kind belongs in a record's media list.
    #[must_use]
    pub fn is_media(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Whether this kind is the designated cover.
    #[must_use]
    pub fn is_cover(self) -> bool {
        matches!(self, Self::Cover)
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cover => write!(f, "cover"),
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A single derived project, one per folder under the scan root.
///
/// Records are immutable once produced: the scanner recomputes them from
/// scratch on every run, and the rendering layer only annotates transient
/// view state (selection, carousel position) in its own local state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Source folder name, unique within one scan.
    pub id: String,

    /// Display country, resolved from the first slug segment.
    pub country: String,

    /// Display region, title-cased from the second slug segment.
    pub region: String,

    /// Display name, synthesized as `"{region} Project"`.
    pub name: String,

    /// Display location, synthesized as `"{region}, {country}"`.
    pub location: String,

    /// Placeholder copy referencing the region and country.
    pub description: String,

    /// Pin position on the map canvas.
    pub coordinates: Coordinates,

    /// URL path of the cover asset.
    ///
    /// When the folder holds no cover-named file this points at the
    /// conventional `cover.jpg` location anyway, which may not exist on
    /// disk.
    pub cover: String,

    /// Ordered media URL paths, cover first.
    pub media: Vec<String>,
}
