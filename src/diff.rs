//! Pure comparison logic between two album snapshots.
//!
//! No I/O in here; everything is a function of the two collections and a
//! target name, which keeps every edge case unit-testable.
//!
//! Duplicate album names: Immich does not enforce unique names, so lookup
//! is defined as FIRST MATCH in server order. If duplicate tracked names
//! ever show up in practice, matching should move to album IDs.

use crate::immich::Album;

/// Find the first album named `name`, in collection order.
pub fn find_album<'a>(albums: &'a [Album], name: &str) -> Option<&'a Album> {
    albums.iter().find(|album| album.album_name == name)
}

/// Signed change in `target`'s media count between two snapshots.
///
/// Returns `None` when `target` is absent from `new` (nothing to report on).
/// An `old` of `None` is the first run; a target absent from `old` has never
/// been seen. Both count as a baseline of 0, so a freshly appeared album
/// reports its full size as the delta.
pub fn asset_delta(old: Option<&[Album]>, new: &[Album], target: &str) -> Option<i64> {
    let current = find_album(new, target)?;

    let previous = old
        .and_then(|albums| find_album(albums, target))
        .map_or(0, |album| album.asset_count as i64);

    Some(current.asset_count as i64 - previous)
}
