//! Discovery of the newest finished recording and trace files.
//!
//! Browser sessions write video recordings (`.webm`) and traces (`.zip`) into
//! an output directory tree. A file modified within the last
//! [`DEFAULT_SETTLE_TIME`] is assumed to still be written and is not
//! reported.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Extensions searched when none are given.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".webm", ".zip"];

/// Minimum age of a file before it is considered complete.
pub const DEFAULT_SETTLE_TIME: Duration = Duration::from_secs(1);

/// Finds the most recently modified settled file per extension.
///
/// # Examples
///
/// ```
/// use tollgate_storage::ArtifactScanner;
///
/// let dir = tempfile::tempdir().unwrap();
/// let target = dir.path().join("recordings");
///
/// let latest = ArtifactScanner::default().latest(&target);
/// assert!(target.is_dir());
/// assert_eq!(latest.get(".webm"), Some(&None));
/// assert_eq!(latest.get(".zip"), Some(&None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactScanner {
    extensions: Vec<String>,
    settle_time: Duration,
}

impl Default for ArtifactScanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ArtifactScanner {
    /// Scanner for the given extensions (with leading dot, e.g. `.webm`).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            settle_time: DEFAULT_SETTLE_TIME,
        }
    }

    /// Override how long a file must be untouched before it is reported.
    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = settle_time;
        self
    }

    /// Extensions this scanner looks for.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Newest settled file per extension under `dir`.
    ///
    /// Creates `dir` if it does not exist, in which case every extension
    /// maps to `None`. Failures never propagate: a directory that cannot be
    /// created is logged and reported as all `None`, and entries that cannot
    /// be read are skipped.
    #[instrument(skip(self, dir), fields(dir = %dir.display(), extensions = ?self.extensions))]
    pub fn latest(&self, dir: &Path) -> BTreeMap<String, Option<PathBuf>> {
        let mut latest: BTreeMap<String, Option<PathBuf>> = self
            .extensions
            .iter()
            .map(|ext| (ext.clone(), None))
            .collect();

        if !dir.exists() {
            match std::fs::create_dir_all(dir) {
                Ok(()) => debug!("Created missing artifact directory"),
                Err(e) => warn!(error = %e, "Failed to create artifact directory"),
            }
            return latest;
        }

        let now = SystemTime::now();
        for ext in &self.extensions {
            let found = self.newest_settled(dir, ext, now);
            debug!(extension = %ext, found = ?found, "Scanned for artifact");
            latest.insert(ext.clone(), found);
        }

        latest
    }

    fn newest_settled(&self, dir: &Path, ext: &str, now: SystemTime) -> Option<PathBuf> {
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        let entries = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    None
                }
            });

        for entry in entries {
            if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(ext) {
                continue;
            }

            let modified = match entry.metadata().map(|m| m.modified()) {
                Ok(Ok(modified)) => modified,
                Ok(Err(e)) => {
                    warn!(path = %entry.path().display(), error = %e, "No modification time");
                    continue;
                }
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "Skipping vanished entry");
                    continue;
                }
            };

            if newest.as_ref().is_none_or(|(t, _)| modified > *t) {
                newest = Some((modified, entry.into_path()));
            }
        }

        // Only the newest match counts, and only once it has settled.
        newest.and_then(|(modified, path)| {
            let age = now.duration_since(modified).unwrap_or_default();
            (age > self.settle_time).then_some(path)
        })
    }
}

/// [`ArtifactScanner::latest`] with the default settle time.
///
/// An empty `extensions` slice searches for [`DEFAULT_EXTENSIONS`].
pub fn latest_files(dir: &Path, extensions: &[&str]) -> BTreeMap<String, Option<PathBuf>> {
    let scanner = if extensions.is_empty() {
        ArtifactScanner::default()
    } else {
        ArtifactScanner::new(extensions.iter().copied())
    };
    scanner.latest(dir)
}
