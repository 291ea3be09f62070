//! Timetable grid placement.
//!
//! A festival day renders as a time-by-stage grid: one column per stage in
//! the day's derived order, one row per `quantum_minutes` slice of an
//! extended day window that runs past midnight. Both computations are pure
//! transforms over one performance at a time; the window carries no state.

use chrono::{DateTime, Timelike, Utc};

use crate::error::{LineupError, LineupResult};
use crate::performance::Performance;

/// Grid coordinates for one performance within a single day's timetable.
///
/// Rows are 0-indexed positions inside the day window; any reserved header
/// row is the renderer's business. Column indices are positions within that
/// day's ordered stage list and are meaningless outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub row_start: u32,
    pub row_end: u32,
    pub column: usize,
}

/// The extended day window a timetable renders.
///
/// Hours are on a 0..=48 scale: a `max_hour` above 24 means the day spills
/// past midnight (29 reads as 5 AM on the next calendar date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    min_hour: u32,
    max_hour: u32,
    quantum_minutes: u32,
}

impl Default for DayWindow {
    /// Noon to noon the next day, 15-minute rows.
    fn default() -> Self {
        DayWindow {
            min_hour: 12,
            max_hour: 36,
            quantum_minutes: 15,
        }
    }
}

impl DayWindow {
    pub fn new(min_hour: u32, max_hour: u32, quantum_minutes: u32) -> LineupResult<Self> {
        if min_hour >= 24 {
            return Err(LineupError::Config(format!(
                "min_hour must be below 24, got {}",
                min_hour
            )));
        }
        if max_hour <= min_hour || max_hour > 48 {
            return Err(LineupError::Config(format!(
                "max_hour must be between {} and 48, got {}",
                min_hour + 1,
                max_hour
            )));
        }
        if quantum_minutes == 0 || quantum_minutes > 60 {
            return Err(LineupError::Config(format!(
                "quantum_minutes must be between 1 and 60, got {}",
                quantum_minutes
            )));
        }

        Ok(DayWindow {
            min_hour,
            max_hour,
            quantum_minutes,
        })
    }

    pub fn quantum_minutes(&self) -> u32 {
        self.quantum_minutes
    }

    /// Number of quantum rows in the window.
    pub fn row_count(&self) -> u32 {
        (self.max_hour - self.min_hour) * 60 / self.quantum_minutes
    }

    /// Grid rows for a performance span: 0-indexed, floored to the quantum.
    ///
    /// Timestamps with an hour-of-day earlier than `min_hour` are folded
    /// into the spillover past midnight, so a set starting 01:30 after a
    /// noon-anchored day lands at normalized hour 25.5, not 1.5.
    pub fn grid_row(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> (u32, u32) {
        let row_start = self.minutes_into_window(start) / self.quantum_minutes;
        let row_end = self.minutes_into_window(end) / self.quantum_minutes;
        (row_start, row_end)
    }

    /// Wall-clock "HH:MM" label for a row, hours displayed mod 24.
    pub fn slot_label(&self, row: u32) -> String {
        let minutes = self.min_hour * 60 + row * self.quantum_minutes;
        format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
    }

    /// Placement for one performance given the day's ordered stage list.
    ///
    /// Returns `None` when the stage is not in the list; the caller must
    /// skip the performance instead of fabricating a column.
    pub fn placement(&self, performance: &Performance, stages: &[&str]) -> Option<GridPlacement> {
        let column = column_for(&performance.stage, stages)?;
        let (row_start, row_end) = self.grid_row(performance.start, performance.end);
        Some(GridPlacement {
            row_start,
            row_end,
            column,
        })
    }

    fn minutes_into_window(&self, t: DateTime<Utc>) -> u32 {
        let mut hour = t.hour();
        if hour < self.min_hour {
            hour += 24;
        }
        (hour - self.min_hour) * 60 + t.minute()
    }
}

/// Column index of a stage within a day's ordered stage list, or `None`
/// for a stage the day does not know about.
pub fn column_for(stage: &str, ordered_stages: &[&str]) -> Option<usize> {
    ordered_stages.iter().position(|s| *s == stage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, minute, 0).unwrap()
    }

    fn make_performance(stage: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Performance {
        Performance {
            id: "p".to_string(),
            artist: "P".to_string(),
            stage: stage.to_string(),
            day: "Friday".to_string(),
            start,
            end,
            country_code: None,
            genres: vec![],
            image_url: None,
            description: None,
            socials: BTreeMap::new(),
        }
    }

    #[test]
    fn rows_for_evening_set_with_half_hour_quantum() {
        // 20:00-21:00 against a noon-anchored window: rows 16..18.
        let window = DayWindow::new(12, 36, 30).unwrap();
        assert_eq!(window.grid_row(at(7, 20, 0), at(7, 21, 0)), (16, 18));
    }

    #[test]
    fn rows_for_evening_set_with_quarter_hour_quantum() {
        let window = DayWindow::default();
        assert_eq!(window.grid_row(at(7, 20, 0), at(7, 21, 0)), (32, 36));
    }

    #[test]
    fn after_midnight_folds_into_the_extended_day() {
        // 01:30 the next calendar date reads as hour 25.5: (25.5-12)*60/30 = 27.
        let window = DayWindow::new(12, 29, 30).unwrap();
        let (row_start, row_end) = window.grid_row(at(8, 1, 30), at(8, 2, 30));
        assert_eq!(row_start, 27);
        assert_eq!(row_end, 29);
    }

    #[test]
    fn doubling_the_quantum_floor_halves_the_rows() {
        let fine = DayWindow::new(12, 36, 15).unwrap();
        let coarse = DayWindow::new(12, 36, 30).unwrap();
        let (s15, e15) = fine.grid_row(at(7, 20, 45), at(7, 21, 45));
        let (s30, e30) = coarse.grid_row(at(7, 20, 45), at(7, 21, 45));
        assert_eq!(s30, s15 / 2);
        assert_eq!(e30, e15 / 2);
    }

    #[test]
    fn any_set_spanning_a_quantum_occupies_at_least_one_row() {
        let window = DayWindow::default();
        let (row_start, row_end) = window.grid_row(at(7, 20, 0), at(7, 20, 15));
        assert!(row_end > row_start);
    }

    #[test]
    fn row_count_matches_window_span() {
        assert_eq!(DayWindow::new(12, 36, 15).unwrap().row_count(), 96);
        assert_eq!(DayWindow::new(12, 29, 30).unwrap().row_count(), 34);
    }

    #[test]
    fn slot_labels_wrap_past_midnight() {
        let window = DayWindow::default();
        assert_eq!(window.slot_label(0), "12:00");
        assert_eq!(window.slot_label(1), "12:15");
        // Hour 25 of the extended day displays as 01:00.
        assert_eq!(window.slot_label(52), "01:00");
    }

    #[test]
    fn column_is_the_index_in_the_day_stage_order() {
        let stages = ["Main Stage", "Second Stage", "Forest Stage"];
        assert_eq!(column_for("Second Stage", &stages), Some(1));
        assert_eq!(column_for("Main Stage", &stages), Some(0));
    }

    #[test]
    fn unknown_stage_has_no_column() {
        let stages = ["Main Stage", "Second Stage"];
        assert_eq!(column_for("Ghost Stage", &stages), None);
    }

    #[test]
    fn placement_skips_performances_on_unknown_stages() {
        let window = DayWindow::default();
        let p = make_performance("Ghost Stage", at(7, 20, 0), at(7, 21, 0));
        assert_eq!(window.placement(&p, &["Main Stage"]), None);

        let p = make_performance("Main Stage", at(7, 20, 0), at(7, 21, 0));
        let placement = window.placement(&p, &["Main Stage"]).unwrap();
        assert_eq!(placement.column, 0);
        assert_eq!((placement.row_start, placement.row_end), (32, 36));
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert!(DayWindow::new(24, 36, 15).is_err());
        assert!(DayWindow::new(12, 12, 15).is_err());
        assert!(DayWindow::new(12, 49, 15).is_err());
        assert!(DayWindow::new(12, 36, 0).is_err());
        assert!(DayWindow::new(12, 36, 61).is_err());
    }
}
