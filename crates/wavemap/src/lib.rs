//! `wavemap` - project showcase derivation for the SurfSmart site
//!
//! This library scans a directory of per-project media folders and derives
//! the ordered list of project records the site's map and gallery renderer
//! consumes: display names from folder-name slugs, map pin coordinates with
//! bounded separation for same-country projects, and cover-first media
//! lists.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geo;
pub mod logging;
pub mod project;
pub mod scanner;

pub use config::Config;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use project::{Coordinates, MediaKind, ProjectRecord};
pub use scanner::{ScanStats, Scanner};
