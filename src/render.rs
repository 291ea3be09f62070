//! TUI rendering for lineup types.
//!
//! Extension traits that add colored terminal output using owo_colors.

use lineup_core::favorites::{FavoriteStore, Favorites};
use lineup_core::Performance;
use owo_colors::OwoColorize;

/// Extension trait for rendering a schedule line with favorite and clash
/// markers.
pub trait Render {
    fn render<S: FavoriteStore>(&self, favorites: &Favorites<S>) -> String;
}

impl Render for Performance {
    fn render<S: FavoriteStore>(&self, favorites: &Favorites<S>) -> String {
        let time = format!(
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        );
        let star = if favorites.contains(&self.id) {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        let tag = format!("[{}]", self.stage);

        let mut line = format!("{} {} {} {}", star, time.dimmed(), self.artist, tag.dimmed());
        if favorites.conflicts().contains(&self.id) {
            line.push_str(&format!(" {}", "CLASH".red().bold()));
        }
        line
    }
}

/// Pad-or-truncate to a fixed display width. Colors must be applied after
/// padding: escape codes would otherwise count toward the width.
pub fn fit(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}
