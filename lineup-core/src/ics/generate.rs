//! ICS file generation for favorited performances.

use icalendar::{Alarm, Calendar, Component, EventLike, Trigger};

use crate::error::LineupResult;
use crate::performance::Performance;

/// Minutes before a set starts that the exported reminder fires, matching
/// the festival app's "starting soon" notification lead.
pub const REMINDER_LEAD_MINUTES: i64 = 15;

/// Generate a VCALENDAR with one VEVENT per performance, each carrying a
/// display alarm 15 minutes before the set.
///
/// Output is deterministic apart from DTSTAMP.
pub fn generate_ics(performances: &[&Performance]) -> LineupResult<String> {
    let mut cal = Calendar::new();

    for performance in performances {
        let mut event = icalendar::Event::new();
        event.uid(format!("{}@lineup", performance.id).as_str());
        event.summary(&performance.artist);
        event.location(&performance.stage);

        event.add_property(
            "DTSTART",
            performance.start.format("%Y%m%dT%H%M%SZ").to_string().as_str(),
        );
        event.add_property(
            "DTEND",
            performance.end.format("%Y%m%dT%H%M%SZ").to_string().as_str(),
        );

        if let Some(ref description) = performance.description {
            event.description(description);
        }

        let trigger = Trigger::before_start(chrono::Duration::minutes(REMINDER_LEAD_MINUTES));
        let summary = format!("{} is starting soon", performance.artist);
        event.alarm(Alarm::display(summary.as_str(), trigger));

        let event = event.done();
        cal.push(event);
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with LINEUP (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
/// - Remove DTSTAMP and UID inside VALARM sections (not required by RFC 5545)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:LINEUP\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
