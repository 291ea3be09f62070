use anyhow::Result;
use lineup_core::favorites::Favorites;
use lineup_core::{Lineup, Performance};
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::Render;

pub fn run(lineup: &Lineup) -> Result<()> {
    let favorites = Favorites::load(open_store(), lineup);

    let mut favorited: Vec<&Performance> = lineup
        .performances()
        .iter()
        .filter(|p| favorites.contains(&p.id))
        .collect();

    if favorited.is_empty() {
        println!("{}", "No favorites yet. Add one with: lineup fav <artist>".dimmed());
        return Ok(());
    }

    favorited.sort_by_key(|p| p.start);

    let mut current_day: Option<&str> = None;
    for p in favorited {
        if current_day != Some(p.day.as_str()) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", p.day.bold());
            current_day = Some(p.day.as_str());
        }
        println!("  {}", p.render(&favorites));
    }

    let clashes = favorites.conflicts().len();
    if clashes > 0 {
        println!();
        println!("{}", format!("{} clashes detected", clashes).red().bold());
    }

    Ok(())
}
