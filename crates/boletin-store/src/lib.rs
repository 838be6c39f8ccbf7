//! Boletin Storage Layer
//!
//! Durable persistence for [`CorpusState`] as two UTF-8 JSON files:
//! `known_references.json` (url → reference) and `enriched_records.json`
//! (url → merged result). Both are human-diffable and pretty-printed.
//!
//! # Durability model
//!
//! - **Fail-open loading**: a missing file yields an empty mapping; an
//!   unparsable file logs the corruption and yields an empty mapping. State
//!   corruption never blocks a run.
//! - **Atomic replace on save**: each file is written to a sibling temp file
//!   and renamed over the target, so a crash mid-write leaves the previous
//!   valid content intact rather than a truncated file.
//!
//! The two files are written independently; cross-file atomicity is not
//! attempted. A url present in the references file but absent from the
//! records file is a recoverable gap handled by the diff step.

#![warn(missing_docs)]

use boletin_domain::{CorpusState, DocumentReference, EnrichedRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// File name of the url → reference mapping.
pub const REFERENCES_FILE: &str = "known_references.json";

/// File name of the url → enriched record mapping.
pub const RECORDS_FILE: &str = "enriched_records.json";

/// Errors that can occur while persisting corpus state.
///
/// Loading never produces these (it is fail-open); only `save` does.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed store for [`CorpusState`].
pub struct CorpusStore {
    dir: PathBuf,
}

impl CorpusStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the references file.
    pub fn references_path(&self) -> PathBuf {
        self.dir.join(REFERENCES_FILE)
    }

    /// Path of the records file.
    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    /// Load the corpus state from disk.
    ///
    /// Missing files yield empty mappings (first run). Unparsable files log
    /// the corruption and yield empty mappings; this method never fails.
    pub fn load(&self) -> CorpusState {
        let known_references: BTreeMap<String, DocumentReference> =
            load_map(&self.references_path());
        let enriched_records: BTreeMap<String, EnrichedRecord> = load_map(&self.records_path());

        info!(
            references = known_references.len(),
            records = enriched_records.len(),
            "corpus state loaded"
        );

        CorpusState {
            known_references,
            enriched_records,
        }
    }

    /// Persist the corpus state, replacing each file atomically.
    pub fn save(&self, state: &CorpusState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        write_atomic(&self.references_path(), &state.known_references)?;
        write_atomic(&self.records_path(), &state.enriched_records)?;
        Ok(())
    }
}

/// Read a url-keyed mapping from `path`, failing open to empty.
fn load_map<T: DeserializeOwned>(path: &Path) -> BTreeMap<String, T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            error!("could not read state file {}: {}", path.display(), e);
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(map) => map,
        Err(e) => {
            error!(
                "state file {} is corrupt, starting from empty: {}",
                path.display(),
                e
            );
            BTreeMap::new()
        }
    }
}

/// Write `value` as pretty JSON to `path` via a sibling temp file + rename.
fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json.as_bytes())?;
    fs::rename(&tmp, path)?;
    Ok(())
}
