use std::path::Path;

use anyhow::{bail, Result};
use lineup_core::favorites::Favorites;
use lineup_core::ics::generate_ics;
use lineup_core::{Lineup, Performance};
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(lineup: &Lineup, output: &Path) -> Result<()> {
    let favorites = Favorites::load(open_store(), lineup);

    let mut favorited: Vec<&Performance> = lineup
        .performances()
        .iter()
        .filter(|p| favorites.contains(&p.id))
        .collect();

    if favorited.is_empty() {
        bail!("No favorites to export. Add one with: lineup fav <artist>");
    }

    favorited.sort_by_key(|p| p.start);

    let ics = generate_ics(&favorited)?;
    std::fs::write(output, ics)?;

    println!(
        "{}",
        format!("Exported {} sets to {}", favorited.len(), output.display()).green()
    );

    Ok(())
}
