use anyhow::{bail, Context, Result};
use lineup_core::config::LineupConfig;
use lineup_core::favorites::Favorites;
use lineup_core::grid::DayWindow;
use lineup_core::{Lineup, Performance};
use owo_colors::OwoColorize;
use tracing::warn;

use super::open_store;
use crate::render::fit;

const COL_WIDTH: usize = 20;

#[derive(Clone, Copy)]
enum Cell<'a> {
    Empty,
    /// Continuation of a set that started on an earlier row.
    Span,
    Start(&'a Performance),
}

pub fn run(
    lineup: &Lineup,
    config: &LineupConfig,
    day: Option<String>,
    quantum: Option<u32>,
) -> Result<()> {
    let days = lineup.days();
    let day = match day {
        Some(day) => {
            if !days.contains(&day.as_str()) {
                bail!("Day '{}' not found. Available: {}", day, days.join(", "));
            }
            day
        }
        None => days
            .first()
            .copied()
            .context("Lineup dataset is empty")?
            .to_string(),
    };

    let window = match quantum {
        Some(q) => DayWindow::new(config.min_hour, config.max_hour, q)?,
        None => config.day_window()?,
    };

    let favorites = Favorites::load(open_store(), lineup);
    let stages = lineup.stages_for_day(&day);
    let performances = lineup.performances_for_day(&day);

    // Paint every set into its cells; the artist shows on the start row and
    // the rest of the span draws as continuation.
    let rows = window.row_count() as usize;
    let mut cells = vec![vec![Cell::Empty; stages.len()]; rows];
    let mut first_row = rows;
    let mut last_row = 0usize;

    for &p in &performances {
        let Some(placement) = window.placement(p, &stages) else {
            warn!(id = %p.id, stage = %p.stage, "stage not in day's stage list, skipping");
            continue;
        };

        let row_start = placement.row_start as usize;
        let row_end = (placement.row_end as usize).min(rows);
        if row_start >= rows || row_end <= row_start {
            warn!(id = %p.id, "set falls outside the day window, skipping");
            continue;
        }

        first_row = first_row.min(row_start);
        last_row = last_row.max(row_end);
        for row in row_start..row_end {
            cells[row][placement.column] = if row == row_start {
                Cell::Start(p)
            } else {
                Cell::Span
            };
        }
    }

    if first_row >= last_row {
        println!("{}", "Nothing scheduled".dimmed());
        return Ok(());
    }

    println!("{}", day.bold());

    let mut header = " ".repeat(6);
    for stage in &stages {
        header.push(' ');
        header.push_str(&fit(stage, COL_WIDTH).bold().to_string());
    }
    println!("{}", header.trim_end());

    for row in first_row..last_row {
        // Label full hours only; intermediate quantum rows stay quiet.
        let minutes = row as u32 * window.quantum_minutes();
        let label = if minutes % 60 == 0 {
            window.slot_label(row as u32)
        } else {
            String::new()
        };

        let mut line = format!("{} ", format!("{:>5}", label).dimmed());
        for (column, _) in stages.iter().enumerate() {
            let cell = match cells[row][column] {
                Cell::Empty => fit("", COL_WIDTH),
                Cell::Span => fit("┆", COL_WIDTH).dimmed().to_string(),
                Cell::Start(p) => {
                    let marker = if favorites.contains(&p.id) { "★ " } else { "" };
                    let text = fit(&format!("{}{}", marker, p.artist), COL_WIDTH);
                    if favorites.conflicts().contains(&p.id) {
                        text.red().to_string()
                    } else if favorites.contains(&p.id) {
                        text.yellow().to_string()
                    } else {
                        text
                    }
                }
            };
            line.push(' ');
            line.push_str(&cell);
        }
        println!("{}", line.trim_end());
    }

    let day_clashes = performances
        .iter()
        .filter(|p| favorites.conflicts().contains(&p.id))
        .count();
    if day_clashes > 0 {
        println!();
        println!(
            "{}",
            format!("{} clashes among your favorites", day_clashes).red().bold()
        );
    }

    Ok(())
}
