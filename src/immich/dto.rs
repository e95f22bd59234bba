//! Immich API Data Transfer Objects
//!
//! These types match EXACTLY what the Immich /albums endpoint returns.
//! DO NOT add fields that aren't in the API response.
//!
//! API Reference: https://immich.app/docs/api/get-all-albums
//!
//! The same shape is persisted verbatim as the cache document, so every
//! field must survive a serialize/deserialize round trip unchanged, even
//! the ones the diff never looks at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One album as reported by `GET /albums`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Display name (not unique server-side)
    pub album_name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Asset used as the album cover
    pub album_thumbnail_asset_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Server-assigned album UUID
    pub id: String,
    pub owner_id: Option<String>,
    /// Users the album is shared with; opaque to us
    #[serde(default)]
    pub album_users: Vec<serde_json::Value>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub has_shared_link: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Embedded assets; opaque to us, the count below is authoritative
    #[serde(default)]
    pub assets: Vec<serde_json::Value>,
    /// Number of media items in the album
    pub asset_count: u64,
    #[serde(default)]
    pub is_activity_enabled: bool,
    /// Asset ordering mode ("asc" / "desc")
    pub order: Option<String>,
    pub last_modified_asset_timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
