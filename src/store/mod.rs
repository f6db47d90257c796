//! Whole-collection snapshot persistence. The entire entry list is written
//! as one JSON document and re-read at startup; there is no incremental or
//! per-entry persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{domain::BudgetEntry, errors::StoreError, utils::paths};

const TMP_SUFFIX: &str = "tmp";

/// Owns the snapshot file for one data directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self, StoreError> {
        let root = root.unwrap_or_else(paths::app_data_dir);
        paths::ensure_dir(&root)?;
        Ok(Self {
            snapshot_path: paths::snapshot_file_in(&root),
        })
    }

    pub fn new_default() -> Result<Self, StoreError> {
        Self::new(None)
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Loads the persisted snapshot. A missing file, unreadable payload, or
    /// payload that is not a JSON array falls back to the default collection;
    /// load never surfaces an error to the caller.
    pub fn load(&self) -> Vec<BudgetEntry> {
        if !self.snapshot_path.exists() {
            return default_entries();
        }
        let data = match fs::read_to_string(&self.snapshot_path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, path = %self.snapshot_path.display(), "snapshot unreadable, using defaults");
                return default_entries();
            }
        };
        match parse_snapshot(&data) {
            Ok(entries) => entries,
            Err(reason) => {
                tracing::warn!(%reason, path = %self.snapshot_path.display(), "discarding malformed snapshot");
                default_entries()
            }
        }
    }

    /// Persists the entire collection atomically by staging to a temporary
    /// file and renaming over the previous snapshot.
    pub fn save(&self, entries: &[BudgetEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = tmp_path(&self.snapshot_path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.snapshot_path)?;
        Ok(())
    }

    /// Returns the collection extended with `entry` at the end, after a
    /// successful full-snapshot save. Prior entries keep their order.
    pub fn append(
        &self,
        entries: &[BudgetEntry],
        entry: BudgetEntry,
    ) -> Result<Vec<BudgetEntry>, StoreError> {
        let mut updated = entries.to_vec();
        updated.push(entry);
        self.save(&updated)?;
        Ok(updated)
    }
}

fn default_entries() -> Vec<BudgetEntry> {
    Vec::new()
}

fn parse_snapshot(data: &str) -> Result<Vec<BudgetEntry>, String> {
    let value: Value = serde_json::from_str(data).map_err(|err| err.to_string())?;
    let Value::Array(items) = value else {
        return Err("snapshot payload is not a sequence".to_string());
    };
    // Null or non-entry elements are skipped rather than failing the load.
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<BudgetEntry>(item).ok())
        .collect())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
