use anyhow::Result;
use lineup_core::favorites::Favorites;
use lineup_core::{Lineup, Performance};
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::Render;

pub fn run(
    lineup: &Lineup,
    day: Option<String>,
    search: Option<String>,
    genre: Option<String>,
) -> Result<()> {
    let favorites = Favorites::load(open_store(), lineup);

    let mut selected: Vec<&Performance> = lineup
        .performances()
        .iter()
        .filter(|p| day.as_deref().map_or(true, |d| p.day == d))
        .filter(|p| {
            search
                .as_deref()
                .map_or(true, |q| p.artist.to_lowercase().contains(&q.to_lowercase()))
        })
        .filter(|p| {
            genre
                .as_deref()
                .map_or(true, |g| p.genres.iter().any(|x| x.eq_ignore_ascii_case(g)))
        })
        .collect();

    if selected.is_empty() {
        println!("{}", "No sets match".dimmed());
        if day.is_some() && !lineup.days().is_empty() {
            println!("{}", format!("Days: {}", lineup.days().join(", ")).dimmed());
        }
        if genre.is_some() && !lineup.genres().is_empty() {
            println!("{}", format!("Genres: {}", lineup.genres().join(", ")).dimmed());
        }
        return Ok(());
    }

    selected.sort_by_key(|p| p.start);

    // One block per festival day
    let mut current_day: Option<&str> = None;
    for p in selected {
        if current_day != Some(p.day.as_str()) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", p.day.bold());
            current_day = Some(p.day.as_str());
        }
        println!("  {}", p.render(&favorites));
    }

    Ok(())
}
