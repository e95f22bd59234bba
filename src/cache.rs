//! Album snapshot disk cache.
//!
//! A single-slot JSON store holding the album list exactly as the last
//! successful fetch returned it. The slot is read at the start of every poll
//! cycle and overwritten at the end of every cycle that fetched, whether or
//! not a notification fired.
//!
//! Failure policy: a missing file is not an error, it is the first run. An
//! unreadable or corrupt file is logged and also treated as the first run,
//! so one bad write can never stall future cycles. Writes go through a
//! sibling temp file and a rename, so the slot is never observed half-written.

use std::fs;
use std::path::PathBuf;

use crate::immich::Album;

/// Single-slot disk cache for the last observed album collection.
pub struct AlbumCache {
    path: PathBuf,
}

/// Errors from persisting a snapshot.
///
/// Read-side failures never surface here; they degrade to an empty cache
/// inside [`AlbumCache::load`].
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write cache to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

impl AlbumCache {
    /// Create a cache backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a cache in the default location (user cache directory).
    pub fn default_location() -> Self {
        let path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("album-minder")
            .join("albums.json");
        Self::new(path)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the last persisted snapshot.
    ///
    /// Returns `None` when no prior state exists (first run) and when the
    /// file cannot be read or parsed; the next save re-establishes it.
    pub fn load(&self) -> Option<Vec<Album>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no cached snapshot, first run");
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable cache, treating as first run");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(albums) => Some(albums),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt cache, treating as first run");
                None
            }
        }
    }

    /// Atomically replace the persisted snapshot with `albums`.
    pub fn save(&self, albums: &[Album]) -> Result<(), CacheError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CacheError::CreateDir(dir.to_path_buf(), e))?;
        }

        let contents = serde_json::to_vec(&albums).map_err(CacheError::Serialize)?;

        // Write atomically (write to temp, then rename)
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &contents).map_err(|e| CacheError::Write(temp_path.clone(), e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| CacheError::Rename(temp_path, self.path.clone(), e))?;

        tracing::debug!(path = %self.path.display(), albums = albums.len(), "snapshot persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::album;
    use tempfile::TempDir;

    fn cache_in(temp: &TempDir) -> AlbumCache {
        AlbumCache::new(temp.path().join("albums.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        assert!(cache.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        let albums = vec![album("Pearly", 5), album("Pets", 9)];
        cache.save(&albums).unwrap();

        let loaded = cache.load().expect("snapshot should exist after save");
        assert_eq!(loaded, albums);
    }

    /// Round-trip must preserve every field, including metadata the diff
    /// never reads.
    #[test]
    fn test_round_trip_preserves_opaque_metadata() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        let mut rich = album("Holiday 2025", 132);
        rich.description = "Beach trip".to_string();
        rich.shared = true;
        rich.has_shared_link = true;
        rich.is_activity_enabled = true;
        rich.order = Some("desc".to_string());
        rich.album_thumbnail_asset_id = Some("thumb-1".to_string());
        rich.owner_id = Some("owner-uuid-1".to_string());
        rich.created_at = "2025-06-01T10:00:00Z".parse().ok();
        rich.updated_at = "2025-06-20T18:30:00Z".parse().ok();
        rich.start_date = "2025-06-01T00:00:00Z".parse().ok();
        rich.end_date = "2025-06-14T00:00:00Z".parse().ok();
        rich.last_modified_asset_timestamp = "2025-06-14T21:12:45Z".parse().ok();
        rich.album_users = vec![serde_json::json!({"userId": "friend-1", "role": "viewer"})];

        cache.save(std::slice::from_ref(&rich)).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded, vec![rich]);
    }

    #[test]
    fn test_corrupt_cache_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        std::fs::write(cache.path(), b"{ not json").unwrap();

        assert!(cache.load().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        cache.save(&[album("Pearly", 5)]).unwrap();
        cache.save(&[album("Pearly", 8)]).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].asset_count, 8);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let cache = AlbumCache::new(temp.path().join("nested").join("dir").join("albums.json"));

        cache.save(&[album("Pearly", 5)]).unwrap();

        assert!(cache.load().is_some());
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let cache = cache_in(&temp);

        cache.save(&[album("Pearly", 5)]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["albums.json"]);
    }
}
