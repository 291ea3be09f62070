use anyhow::{bail, Result};
use lineup_core::favorites::Favorites;
use lineup_core::{Lineup, Performance};
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(lineup: &Lineup, query: &str) -> Result<()> {
    let performance = resolve_performance(lineup, query)?;
    let mut favorites = Favorites::load(open_store(), lineup);

    let added = favorites.toggle(&performance.id, lineup);
    let when = format!("{} {}", performance.day, performance.start.format("%H:%M"));
    if added {
        println!(
            "{}",
            format!("★ Added {} ({}, {})", performance.artist, performance.stage, when).green()
        );
    } else {
        println!(
            "{}",
            format!("Removed {} ({}, {})", performance.artist, performance.stage, when).yellow()
        );
    }

    // Point out exactly which favorites the new one collides with.
    if favorites.conflicts().contains(&performance.id) {
        for other in lineup.performances() {
            if other.id != performance.id
                && favorites.contains(&other.id)
                && performance.overlaps(other)
            {
                println!(
                    "  {} overlaps {} ({}-{})",
                    "!".red().bold(),
                    other.artist,
                    other.start.format("%H:%M"),
                    other.end.format("%H:%M"),
                );
            }
        }
    }

    Ok(())
}

/// Resolve a query to a single performance: exact id first, then artist
/// name. A substring match only wins when it is unambiguous; an exact
/// artist name beats other substring hits.
fn resolve_performance<'a>(lineup: &'a Lineup, query: &str) -> Result<&'a Performance> {
    if let Some(p) = lineup.get(query) {
        return Ok(p);
    }

    let matches = lineup.search(query);
    if matches.is_empty() {
        bail!("No artist matching '{}'", query);
    }
    if matches.len() == 1 {
        return Ok(matches[0]);
    }

    let exact: Vec<&Performance> = matches
        .iter()
        .copied()
        .filter(|p| p.artist.eq_ignore_ascii_case(query))
        .collect();
    if exact.len() == 1 {
        return Ok(exact[0]);
    }

    let candidates: Vec<String> = matches
        .iter()
        .map(|p| format!("{} ({}, {} {})", p.artist, p.id, p.day, p.start.format("%H:%M")))
        .collect();
    bail!(
        "Ambiguous query '{}'. Use an id instead. Matches: {}",
        query,
        candidates.join(", ")
    );
}
