//! Non-fatal scan diagnostics.
//!
//! A scan never fails because of a single project folder: unmapped
//! countries, missing covers, empty media sets, and unreadable folders are
//! reported as [`Diagnostic`] events through an injectable [`DiagnosticSink`]
//! and the scan continues with best-effort records. The default sink logs
//! through `tracing`; tests and reporting collect events instead.

use tracing::warn;

/// A non-fatal anomaly observed while deriving one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The country slug had no display-name/coordinate mapping; the record
    /// fell back to a title-cased name and the map center point.
    UnmappedCountry {
        /// Folder name of the affected project.
        project: String,
        /// The display country that missed the coordinate table.
        country: String,
    },

    /// No cover-named file was found; the cover path was synthesized.
    MissingCover {
        /// Folder name of the affected project.
        project: String,
    },

    /// No recognized media files at all; the media list holds only the
    /// synthesized cover path.
    EmptyMedia {
        /// Folder name of the affected project.
        project: String,
    },

    /// The project folder could not be listed and was skipped.
    SkippedFolder {
        /// Folder name of the skipped project.
        project: String,
        /// Description of the listing failure.
        reason: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedCountry { project, country } => {
                write!(
                    f,
                    "{project}: no map coordinates for '{country}', using center fallback"
                )
            }
            Self::MissingCover { project } => {
                write!(f, "{project}: no cover image, synthesizing cover.jpg path")
            }
            Self::EmptyMedia { project } => {
                write!(f, "{project}: no recognized media files")
            }
            Self::SkippedFolder { project, reason } => {
                write!(f, "{project}: skipped, folder unreadable ({reason})")
            }
        }
    }
}

impl Diagnostic {
    /// The folder name the event refers to.
    #[must_use]
    pub fn project(&self) -> &str {
        match self {
            Self::UnmappedCountry { project, .. }
            | Self::MissingCover { project }
            | Self::EmptyMedia { project }
            | Self::SkippedFolder { project, .. } => project,
        }
    }
}

/// Receiver for scan diagnostics.
///
/// Implementors decide what "reporting" means: log lines, counters, or an
/// in-memory list. The scanner holds no opinion beyond calling `report`.
pub trait DiagnosticSink {
    /// Handle one diagnostic event.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(project = diagnostic.project(), "{diagnostic}");
    }
}

/// Sink that accumulates diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    events: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events reported so far, in order.
    #[must_use]
    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    /// Number of events reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.events.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unmapped_country() {
        let d = Diagnostic::UnmappedCountry {
            project: "atlantis-reef".to_string(),
            country: "Atlantis".to_string(),
        };
        let msg = d.to_string();
        assert!(msg.contains("atlantis-reef"));
        assert!(msg.contains("Atlantis"));
        assert!(msg.contains("fallback"));
    }

    #[test]
    fn test_display_missing_cover() {
        let d = Diagnostic::MissingCover {
            project: "china-beijing".to_string(),
        };
        assert!(d.to_string().contains("cover"));
    }

    #[test]
    fn test_display_empty_media() {
        let d = Diagnostic::EmptyMedia {
            project: "france-nice".to_string(),
        };
        assert!(d.to_string().contains("no recognized media"));
    }

    #[test]
    fn test_display_skipped_folder() {
        let d = Diagnostic::SkippedFolder {
            project: "uae-dubai".to_string(),
            reason: "permission denied".to_string(),
        };
        let msg = d.to_string();
        assert!(msg.contains("skipped"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_project_accessor() {
        let d = Diagnostic::EmptyMedia {
            project: "france-nice".to_string(),
        };
        assert_eq!(d.project(), "france-nice");
    }

    #[test]
    fn test_collecting_sink_accumulates_in_order() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(Diagnostic::MissingCover {
            project: "a".to_string(),
        });
        sink.report(Diagnostic::EmptyMedia {
            project: "b".to_string(),
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0].project(), "a");
        assert_eq!(sink.events()[1].project(), "b");
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        let mut sink = TracingSink;
        sink.report(Diagnostic::MissingCover {
            project: "x".to_string(),
        });
    }
}
