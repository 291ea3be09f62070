use anyhow::Result;
use lineup_core::Lineup;
use owo_colors::OwoColorize;

pub fn run(lineup: &Lineup) -> Result<()> {
    if lineup.is_empty() {
        println!("{}", "No performances in the dataset".dimmed());
        return Ok(());
    }

    for day in lineup.days() {
        let sets = lineup.performances_for_day(day).len();
        let stages = lineup.stages_for_day(day).len();
        let detail = format!("({} sets across {} stages)", sets, stages);
        println!("{}  {}", day.bold(), detail.dimmed());
    }

    Ok(())
}
