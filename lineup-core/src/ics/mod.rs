//! ICS export of favorited performances.

mod generate;

pub use generate::{generate_ics, REMINDER_LEAD_MINUTES};
