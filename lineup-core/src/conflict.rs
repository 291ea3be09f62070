//! Clash detection over the favorited subset of a lineup.

use std::collections::HashSet;

use crate::performance::Performance;

/// Find every favorited performance that overlaps in time with at least
/// one other favorited performance.
///
/// Ids in `favorite_ids` with no matching performance are ignored. The
/// pairwise scan is quadratic in the favorite count, which stays in the
/// tens over a festival weekend; an interval tree would buy nothing here.
pub fn detect_conflicts(
    performances: &[Performance],
    favorite_ids: &HashSet<String>,
) -> HashSet<String> {
    let mut clashes = HashSet::new();

    let mut favorited: Vec<&Performance> = performances
        .iter()
        .filter(|p| favorite_ids.contains(&p.id))
        .collect();

    // A single favorite cannot clash with anything.
    if favorited.len() < 2 {
        return clashes;
    }

    favorited.sort_by_key(|p| p.start);

    for i in 0..favorited.len() {
        for j in (i + 1)..favorited.len() {
            if favorited[i].overlaps(favorited[j]) {
                clashes.insert(favorited[i].id.clone());
                clashes.insert(favorited[j].id.clone());
            }
        }
    }

    clashes
}
