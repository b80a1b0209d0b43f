//! File-backed key/value store for the enumerated solutions and their index.
//!
//! The file is one JSON object. Writing a key rewrites the file but keeps every
//! other key already in it.

use crate::{Solution, SolutionIndex, StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// Key holding the raw `Vec<Solution>` from the search.
pub const RAW_SOLUTIONS: &str = "raw_solutions";
/// Key holding the [`SolutionIndex`].
pub const BOARD_TO_SOLUTION: &str = "board_to_solution";

/// Default store file name.
pub const DB_FILENAME: &str = "solutions.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStore {
    path: PathBuf,
}

impl SolutionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<Map<String, Value>> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save `value` under `key`, preserving the other keys in the file.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        log::debug!("saving {} to {}", key, self.path.display());
        let mut all = if self.path.exists() {
            self.read_all()?
        } else {
            Map::new()
        };
        all.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Write beside the store, then swap it in; an interrupted write
        // leaves the previous file intact.
        let staging = self.staging_path();
        let mut writer = BufWriter::new(File::create(&staging)?);
        serde_json::to_writer(&mut writer, &all)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<T> {
        let mut all = self.read_all()?;
        let value = all
            .remove(key)
            .ok_or_else(|| StoreError::MissingKey(key.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn store_raw_solutions(&self, solutions: &[Solution]) -> StoreResult<()> {
        self.store(RAW_SOLUTIONS, &solutions)
    }

    pub fn load_raw_solutions(&self) -> StoreResult<Vec<Solution>> {
        self.load(RAW_SOLUTIONS)
    }

    pub fn store_index(&self, index: &SolutionIndex) -> StoreResult<()> {
        self.store(BOARD_TO_SOLUTION, index)
    }

    pub fn load_index(&self) -> StoreResult<SolutionIndex> {
        self.load(BOARD_TO_SOLUTION)
    }
}

/// Loads the solution index on a background thread.
///
/// Start it early, do other setup, then call [`IndexLoader::wait`] before the
/// first lookup.
pub struct IndexLoader {
    handle: JoinHandle<StoreResult<SolutionIndex>>,
}

impl IndexLoader {
    pub fn spawn(store: SolutionStore) -> Self {
        let handle = std::thread::spawn(move || {
            let index = store.load_index()?;
            log::info!("done loading solutions ({} keys)", index.key_count());
            Ok(index)
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until loading ends. A missing or corrupt store is an error,
    /// never an empty index.
    pub fn wait(self) -> StoreResult<SolutionIndex> {
        self.handle.join().map_err(|_| StoreError::LoaderPanicked)?
    }
}
