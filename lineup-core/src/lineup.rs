//! Lineup dataset loading and derived views.
//!
//! All validation happens here, at the boundary where data enters the
//! system. The schedule algorithms downstream assume well-formed
//! performances and never re-check.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{LineupError, LineupResult};
use crate::performance::Performance;

/// The full festival dataset, loaded wholesale at startup and never
/// mutated or re-fetched mid-session.
#[derive(Debug, Clone)]
pub struct Lineup {
    performances: Vec<Performance>,
}

impl Lineup {
    /// Parse and validate a JSON dataset (an array of performances).
    ///
    /// Rejects unparsable timestamps, non-monotonic spans (`end <= start`)
    /// and duplicate ids. Fails loudly rather than letting a degenerate
    /// zero-span performance reach the grid.
    pub fn from_json(json: &str) -> LineupResult<Self> {
        let performances: Vec<Performance> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for p in &performances {
            if p.end <= p.start {
                return Err(LineupError::Validation {
                    id: p.id.clone(),
                    reason: format!("endTime {} is not after startTime {}", p.end, p.start),
                });
            }
            if !seen.insert(p.id.as_str()) {
                return Err(LineupError::Validation {
                    id: p.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }

        tracing::debug!(performances = performances.len(), "loaded lineup dataset");
        Ok(Lineup { performances })
    }

    pub fn load(path: &Path) -> LineupResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The dataset in its original order.
    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Performance> {
        self.performances.iter().find(|p| p.id == id)
    }

    /// Festival-day labels ordered by each day's earliest start.
    pub fn days(&self) -> Vec<&str> {
        let mut days: Vec<(&str, DateTime<Utc>)> = Vec::new();
        for p in &self.performances {
            match days.iter_mut().find(|(day, _)| *day == p.day) {
                Some((_, earliest)) => {
                    if p.start < *earliest {
                        *earliest = p.start;
                    }
                }
                None => days.push((p.day.as_str(), p.start)),
            }
        }
        days.sort_by_key(|(_, earliest)| *earliest);
        days.into_iter().map(|(day, _)| day).collect()
    }

    /// One day's performances in dataset order.
    pub fn performances_for_day(&self, day: &str) -> Vec<&Performance> {
        self.performances.iter().filter(|p| p.day == day).collect()
    }

    /// Distinct stages active on a day, in first-seen dataset order.
    ///
    /// This order is the timetable's left-to-right column order; it is
    /// data-driven and deterministic, not alphabetical.
    pub fn stages_for_day(&self, day: &str) -> Vec<&str> {
        let mut stages: Vec<&str> = Vec::new();
        for p in self.performances.iter().filter(|p| p.day == day) {
            if !stages.contains(&p.stage.as_str()) {
                stages.push(p.stage.as_str());
            }
        }
        stages
    }

    /// Case-insensitive artist-name substring search, in dataset order.
    pub fn search(&self, query: &str) -> Vec<&Performance> {
        let needle = query.to_lowercase();
        self.performances
            .iter()
            .filter(|p| p.artist.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every genre tag in the lineup, deduplicated and sorted.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self
            .performances
            .iter()
            .flat_map(|p| p.genres.iter().map(String::as_str))
            .collect();
        genres.sort_unstable();
        genres.dedup();
        genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Thursday appears first in the file but starts a day later; day
    // ordering must come from start times, not dataset order.
    const DATASET: &str = r#"[
        {"id": "t1", "artist": "Glass Harbor", "stage": "Second Stage", "day": "Thursday",
         "startTime": "2026-08-06T17:00:00Z", "endTime": "2026-08-06T18:00:00Z",
         "genres": ["indie"]},
        {"id": "w1", "artist": "Night Parade", "stage": "Main Stage", "day": "Wednesday",
         "startTime": "2026-08-05T18:00:00Z", "endTime": "2026-08-05T19:00:00Z",
         "genres": ["electronic", "pop"]},
        {"id": "w2", "artist": "Paper Lions", "stage": "Forest Stage", "day": "Wednesday",
         "startTime": "2026-08-06T00:30:00Z", "endTime": "2026-08-06T01:30:00Z"},
        {"id": "t2", "artist": "Night Swim", "stage": "Main Stage", "day": "Thursday",
         "startTime": "2026-08-06T19:00:00Z", "endTime": "2026-08-06T20:00:00Z",
         "genres": ["electronic"]}
    ]"#;

    #[test]
    fn loads_and_indexes_the_dataset() {
        let lineup = Lineup::from_json(DATASET).unwrap();
        assert_eq!(lineup.performances().len(), 4);
        assert_eq!(lineup.get("w2").unwrap().artist, "Paper Lions");
        assert!(lineup.get("ghost").is_none());
    }

    #[test]
    fn days_are_ordered_by_earliest_start() {
        let lineup = Lineup::from_json(DATASET).unwrap();
        assert_eq!(lineup.days(), vec!["Wednesday", "Thursday"]);
    }

    #[test]
    fn stage_order_is_first_seen_and_stable() {
        let lineup = Lineup::from_json(DATASET).unwrap();
        let first = lineup.stages_for_day("Wednesday");
        assert_eq!(first, vec!["Main Stage", "Forest Stage"]);
        // Re-deriving from the same dataset yields the same order.
        assert_eq!(lineup.stages_for_day("Wednesday"), first);
        assert_eq!(lineup.stages_for_day("Thursday"), vec!["Second Stage", "Main Stage"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let lineup = Lineup::from_json(DATASET).unwrap();
        let hits = lineup.search("night");
        let artists: Vec<_> = hits.iter().map(|p| p.artist.as_str()).collect();
        assert_eq!(artists, vec!["Night Parade", "Night Swim"]);
    }

    #[test]
    fn genres_are_deduplicated_and_sorted() {
        let lineup = Lineup::from_json(DATASET).unwrap();
        assert_eq!(lineup.genres(), vec!["electronic", "indie", "pop"]);
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let json = r#"[{"id": "bad", "artist": "X", "stage": "Main", "day": "Friday",
            "startTime": "2026-08-07T21:00:00Z", "endTime": "2026-08-07T20:00:00Z"}]"#;
        let err = Lineup::from_json(json).unwrap_err();
        assert!(
            matches!(err, LineupError::Validation { ref id, .. } if id == "bad"),
            "expected validation error, got {:?}",
            err
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "dup", "artist": "X", "stage": "Main", "day": "Friday",
             "startTime": "2026-08-07T20:00:00Z", "endTime": "2026-08-07T21:00:00Z"},
            {"id": "dup", "artist": "Y", "stage": "Main", "day": "Friday",
             "startTime": "2026-08-07T21:00:00Z", "endTime": "2026-08-07T22:00:00Z"}
        ]"#;
        let err = Lineup::from_json(json).unwrap_err();
        assert!(matches!(err, LineupError::Validation { .. }));
    }

    #[test]
    fn rejects_unparsable_timestamps_at_the_boundary() {
        let json = r#"[{"id": "bad", "artist": "X", "stage": "Main", "day": "Friday",
            "startTime": "yesterday-ish", "endTime": "2026-08-07T21:00:00Z"}]"#;
        let err = Lineup::from_json(json).unwrap_err();
        assert!(matches!(err, LineupError::Parse(_)));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let lineup = Lineup::from_json("[]").unwrap();
        assert!(lineup.is_empty());
        assert!(lineup.days().is_empty());
    }
}
