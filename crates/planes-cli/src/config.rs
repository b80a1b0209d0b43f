//! Where the solution store lives.

use planes_core::DB_FILENAME;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default store location.
pub const DB_ENV: &str = "PLANES_DB";

/// Resolve the store path: explicit flag, then `PLANES_DB`, then the local
/// data directory.
pub fn db_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(DB_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    default_db_path()
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("planes"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILENAME)
}
