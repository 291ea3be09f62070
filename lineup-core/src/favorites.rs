//! Favorite persistence and clash orchestration.
//!
//! A single owner mutates the favorite set. Every toggle persists the set
//! and recomputes the clash set before returning, so reads are never stale
//! relative to the last mutation. Storage is a best-effort convenience
//! cache: a failed write degrades to session-only favorites with a logged
//! warning, never a user-facing error.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tracing::warn;

use crate::conflict::detect_conflicts;
use crate::error::{LineupError, LineupResult};
use crate::lineup::Lineup;

/// Storage key the serialized favorite set lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// Durable per-device key-value storage for the favorite set.
///
/// The payload is a JSON array of performance ids, the same shape the
/// festival app keeps in browser local storage.
pub trait FavoriteStore {
    fn get(&self, key: &str) -> LineupResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> LineupResult<()>;
}

/// Store keeping each key as a JSON file under a directory
/// (`<data_dir>/lineup/` by default).
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open() -> LineupResult<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| LineupError::Storage("could not determine data directory".to_string()))?
            .join("lineup");
        Ok(JsonFileStore { dir })
    }

    pub fn at(dir: PathBuf) -> Self {
        JsonFileStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl FavoriteStore for JsonFileStore {
    fn get(&self, key: &str) -> LineupResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| LineupError::Storage(e.to_string()))?;
        Ok(Some(content))
    }

    /// Atomic write (temp file then rename) so an interrupted write never
    /// leaves a truncated favorites file behind.
    fn set(&mut self, key: &str, value: &str) -> LineupResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| LineupError::Storage(e.to_string()))?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        std::fs::write(&temp, value).map_err(|e| LineupError::Storage(e.to_string()))?;
        std::fs::rename(&temp, &path).map_err(|e| LineupError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl FavoriteStore for MemoryStore {
    fn get(&self, key: &str) -> LineupResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LineupResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owner of the favorite set and its derived clash set.
pub struct Favorites<S: FavoriteStore> {
    store: S,
    ids: HashSet<String>,
    conflicts: HashSet<String>,
}

impl<S: FavoriteStore> Favorites<S> {
    /// Load the persisted set once at session start. A missing, unreadable,
    /// or malformed entry starts the session empty rather than failing.
    pub fn load(store: S, lineup: &Lineup) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!(error = %e, "ignoring malformed favorites entry");
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                warn!(error = %e, "could not read favorites, starting empty");
                HashSet::new()
            }
        };

        let mut favorites = Favorites {
            store,
            ids,
            conflicts: HashSet::new(),
        };
        favorites.recompute(lineup);
        favorites
    }

    /// Flip one id in or out of the favorite set, persist, and recompute
    /// clashes. Returns true when the id was added.
    ///
    /// A failed write keeps the in-memory set authoritative for the rest
    /// of the session.
    pub fn toggle(&mut self, id: &str, lineup: &Lineup) -> bool {
        let added = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        self.recompute(lineup);
        added
    }

    /// Re-derive the clash set after the lineup reference changes.
    pub fn refresh(&mut self, lineup: &Lineup) {
        self.recompute(lineup);
    }

    /// Read-only snapshot of the favorited ids.
    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Ids that overlap at least one other favorite, consistent with the
    /// latest favorites and lineup as of the last recompute.
    pub fn conflicts(&self) -> &HashSet<String> {
        &self.conflicts
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn persist(&mut self) {
        // Sorted for deterministic output.
        let mut sorted: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let payload = match serde_json::to_string(&sorted) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "could not serialize favorites");
                return;
            }
        };

        if let Err(e) = self.store.set(FAVORITES_KEY, &payload) {
            warn!(error = %e, "favorites write failed, keeping in-memory set");
        }
    }

    fn recompute(&mut self, lineup: &Lineup) {
        self.conflicts = detect_conflicts(lineup.performances(), &self.ids);
    }
}
