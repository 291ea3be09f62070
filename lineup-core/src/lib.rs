//! Core types and schedule logic for the lineup planner.
//!
//! This crate provides everything the front end composes:
//! - `Performance` and `Lineup` for the dataset and its derived views
//! - `conflict` for clash detection over the favorited subset
//! - `grid` for timetable placement within an extended day window
//! - `favorites` for the persisted favorite set and its derived clashes

pub mod config;
pub mod conflict;
pub mod error;
pub mod favorites;
pub mod grid;
pub mod ics;
pub mod lineup;
pub mod performance;

// Re-export the types nearly every caller needs at crate root.
pub use error::{LineupError, LineupResult};
pub use lineup::Lineup;
pub use performance::Performance;
