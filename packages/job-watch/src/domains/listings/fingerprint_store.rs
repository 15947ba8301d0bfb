use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ids of postings already notified, backed by a JSON array on disk.
///
/// Entries are never removed. The file is written by a single process; two
/// watchers sharing one file will overwrite each other's additions.
#[derive(Debug)]
pub struct FingerprintStore {
    path: PathBuf,
    seen: BTreeSet<String>,
}

impl FingerprintStore {
    /// Load the set from `path`.
    ///
    /// A missing, unreadable or corrupt file yields an empty set; the watcher
    /// would rather re-notify than refuse to start.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let seen = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Fingerprint file is corrupt, starting empty");
                    BTreeSet::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No fingerprint file yet, starting empty");
                BTreeSet::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read fingerprint file, starting empty");
                BTreeSet::new()
            }
        };

        Self { path, seen }
    }

    /// Store with no backing data yet; nothing touches disk until [`persist`](Self::persist).
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seen: BTreeSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Mark `id` as seen. Returns `true` if it was not seen before.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.seen.insert(id.into())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Rewrite the whole file with the current set, sorted.
    pub fn persist(&self) -> Result<()> {
        let ids: Vec<&String> = self.seen.iter().collect();
        let json = serde_json::to_string_pretty(&ids).context("Failed to serialize fingerprints")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = ids.len(), "Fingerprints persisted");
        Ok(())
    }
}
