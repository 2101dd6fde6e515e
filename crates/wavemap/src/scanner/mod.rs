//! The project directory deriver.
//!
//! A scan converts a flat set of per-project subdirectories of media files
//! into an ordered list of [`ProjectRecord`]s for the map and gallery
//! renderer. Every scan recomputes everything from scratch: there is no
//! cache and no shared state across scans beyond the configuration.
//!
//! The root not existing is fatal. A single unreadable project folder is
//! not: it is reported to the [`DiagnosticSink`] and skipped, and the scan
//! carries on with the remaining folders.

pub mod media;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{Error, Result};
use crate::geo::jitter::{fan_offset, JitterSource, RandomJitter, SeededJitter};
use crate::geo::{self, FALLBACK_COORDINATES};
use crate::project::{MediaKind, ProjectRecord};
use media::{list_media, MediaFile, DEFAULT_COVER_FILE};

/// Slug segment used when a folder name is missing the country or region.
const UNKNOWN_SEGMENT: &str = "unknown";

/// Derives project records from the configured projects root.
///
/// The scanner owns its jitter source so that consecutive same-country
/// pins fan out across one scan; per-country occurrence counters are local
/// to each [`scan`](Scanner::scan) call and reset every run.
#[derive(Debug)]
pub struct Scanner {
    config: Config,
    jitter: Box<dyn JitterSource>,
}

impl Scanner {
    /// Create a scanner from a configuration.
    ///
    /// A `map.jitter_seed` in the configuration selects a reproducible
    /// RNG; otherwise pin jitter comes from the thread RNG.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let jitter: Box<dyn JitterSource> = match config.map.jitter_seed {
            Some(seed) => Box::new(SeededJitter::new(seed)),
            None => Box::new(RandomJitter::new()),
        };
        Self { config, jitter }
    }

    /// Create a scanner with an explicit jitter source.
    #[must_use]
    pub fn with_jitter(config: Config, jitter: Box<dyn JitterSource>) -> Self {
        Self { config, jitter }
    }

    /// Run one scan.
    ///
    /// Returns one record per readable project folder under the root,
    /// ordered by folder name. Per-folder anomalies go to `sink`; only
    /// root-level failures abort the scan.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing, is not a directory, or
    /// cannot be listed.
    pub fn scan(&mut self, sink: &mut dyn DiagnosticSink) -> Result<Vec<ProjectRecord>> {
        let root = self.config.scan.root.clone();
        let folders = list_project_folders(&root, sink)?;
        info!(
            root = %root.display(),
            folders = folders.len(),
            "scanning projects root"
        );

        let mut country_counts: HashMap<String, usize> = HashMap::new();
        let mut records = Vec::with_capacity(folders.len());
        for folder in &folders {
            if let Some(record) = self.derive_project(&root, folder, &mut country_counts, sink) {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Scan and return the record for one project folder.
    ///
    /// This runs a full scan first: pin placement depends on how many
    /// same-country projects precede the requested one, so deriving a
    /// folder in isolation would place its pin differently.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails or no folder matches `id`.
    pub fn find(&mut self, id: &str, sink: &mut dyn DiagnosticSink) -> Result<ProjectRecord> {
        self.scan(sink)?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| Error::project_not_found(id))
    }

    /// Derive one record; `None` means the folder was skipped.
    fn derive_project(
        &mut self,
        root: &Path,
        folder: &str,
        country_counts: &mut HashMap<String, usize>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ProjectRecord> {
        let files = match list_media(&root.join(folder)) {
            Ok(files) => files,
            Err(source) => {
                sink.report(Diagnostic::SkippedFolder {
                    project: folder.to_string(),
                    reason: source.to_string(),
                });
                return None;
            }
        };

        let mut segments = folder.split('-').filter(|s| !s.is_empty());
        let country_slug = segments.next().unwrap_or(UNKNOWN_SEGMENT);
        let region_slug = segments.next().unwrap_or(UNKNOWN_SEGMENT);

        let country = geo::country_display_name(country_slug)
            .map_or_else(|| geo::title_case(country_slug), ToString::to_string);
        let region = geo::title_case(region_slug);

        let base = geo::base_coordinates(&country).unwrap_or_else(|| {
            sink.report(Diagnostic::UnmappedCountry {
                project: folder.to_string(),
                country: country.clone(),
            });
            FALLBACK_COORDINATES
        });

        // Occurrence counters are scoped to the calling scan, never the process.
        let counter = country_counts.entry(country.to_ascii_lowercase()).or_insert(0);
        let occurrence = *counter;
        *counter += 1;

        let (min, max) = self.config.jitter_band();
        let (dx, dy) = fan_offset(occurrence, min, max, self.jitter.as_mut());
        let coordinates = base.offset_by(dx, dy);

        let base_url = self.config.media_base_url();
        let media_url = |file: &str| format!("{base_url}/{folder}/{file}");

        let cover = match files.first() {
            Some(first) if first.kind.is_cover() => media_url(&first.name),
            Some(_) => {
                sink.report(Diagnostic::MissingCover {
                    project: folder.to_string(),
                });
                media_url(DEFAULT_COVER_FILE)
            }
            None => {
                sink.report(Diagnostic::EmptyMedia {
                    project: folder.to_string(),
                });
                media_url(DEFAULT_COVER_FILE)
            }
        };

        let chosen_cover = usize::from(files.first().is_some_and(MediaFile::is_cover));
        let mut media_paths = Vec::with_capacity(files.len() + 1 - chosen_cover);
        media_paths.push(cover.clone());
        for file in files.iter().skip(chosen_cover) {
            media_paths.push(media_url(&file.name));
        }

        debug!(project = folder, country = %country, "derived record");
        Some(ProjectRecord {
            id: folder.to_string(),
            name: format!("{region} Project"),
            location: format!("{region}, {country}"),
            description: format!("SurfSmart wave machine installation in {region}, {country}."),
            country,
            region,
            coordinates,
            cover,
            media: media_paths,
        })
    }
}

/// List immediate subdirectories of the root, sorted by name.
///
/// Non-directory entries are ignored. Entries whose type cannot be read
/// are reported and skipped.
fn list_project_folders(root: &Path, sink: &mut dyn DiagnosticSink) -> Result<Vec<String>> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(Error::root_not_found(root));
        }
        Err(source) => {
            return Err(Error::RootRead {
                path: root.to_path_buf(),
                source,
            });
        }
    };
    if !meta.is_dir() {
        return Err(Error::not_a_directory(root));
    }

    let entries = fs::read_dir(root).map_err(|source| Error::RootRead {
        path: root.to_path_buf(),
        source,
    })?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::RootRead {
            path: root.to_path_buf(),
            source,
        })?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => folders.push(name),
            Ok(_) => {}
            Err(source) => sink.report(Diagnostic::SkippedFolder {
                project: name,
                reason: source.to_string(),
            }),
        }
    }

    folders.sort();
    Ok(folders)
}

/// Aggregate numbers for one scan, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of derived records.
    pub project_count: usize,
    /// Records per display country.
    pub country_counts: BTreeMap<String, usize>,
    /// Image entries across all media lists, covers included.
    pub image_count: usize,
    /// Video entries across all media lists.
    pub video_count: usize,
    /// Diagnostics reported during the scan.
    pub warning_count: usize,
}

impl ScanStats {
    /// Summarize a scan's records and its diagnostic count.
    #[must_use]
    pub fn summarize(records: &[ProjectRecord], warning_count: usize) -> Self {
        let mut country_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut image_count = 0;
        let mut video_count = 0;
        for record in records {
            *country_counts.entry(record.country.clone()).or_insert(0) += 1;
            for path in &record.media {
                match MediaKind::classify(path) {
                    MediaKind::Cover | MediaKind::Image => image_count += 1,
                    MediaKind::Video => video_count += 1,
                    MediaKind::Unrecognized => {}
                }
            }
        }

        Self {
            generated_at: Utc::now(),
            project_count: records.len(),
            country_counts,
            image_count,
            video_count,
            warning_count,
        }
    }
}
