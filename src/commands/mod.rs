pub mod days;
pub mod export;
pub mod fav;
pub mod favorites;
pub mod schedule;
pub mod timetable;

use lineup_core::favorites::JsonFileStore;
use tracing::warn;

/// Open the on-disk favorites store. Favorites are a convenience cache, so
/// a missing user data directory degrades to a temp-dir store with a
/// warning instead of failing the command.
pub(crate) fn open_store() -> JsonFileStore {
    match JsonFileStore::open() {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "no user data directory, favorites will not persist");
            JsonFileStore::at(std::env::temp_dir().join("lineup"))
        }
    }
}
