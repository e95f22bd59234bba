//! Test utilities and fixtures for album-minder tests.
//!
//! Keeps album construction boilerplate out of the individual test modules.

use crate::immich::Album;

/// Creates an [`Album`] with the given name and count and empty metadata.
///
/// Use struct update syntax to customize:
///
/// ```ignore
/// let shared = Album { shared: true, ..album("Pearly", 5) };
/// ```
pub fn album(name: &str, asset_count: u64) -> Album {
    Album {
        album_name: name.to_string(),
        description: String::new(),
        album_thumbnail_asset_id: None,
        created_at: None,
        updated_at: None,
        id: format!("id-{name}"),
        owner_id: None,
        album_users: Vec::new(),
        shared: false,
        has_shared_link: false,
        start_date: None,
        end_date: None,
        assets: Vec::new(),
        asset_count,
        is_activity_enabled: false,
        order: None,
        last_modified_asset_timestamp: None,
    }
}
