use std::io::Write;

use serde::Serialize;

use super::ranking::RankedArchetype;

const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Serialize)]
struct MatchRow<'a> {
    #[serde(rename = "Rank")]
    rank: usize,
    #[serde(rename = "Archetype ID")]
    archetype_id: &'a str,
    #[serde(rename = "Archetype")]
    archetype_name: &'a str,
    #[serde(rename = "Score")]
    score: i32,
    #[serde(rename = "Values")]
    values: i32,
    #[serde(rename = "Tasks")]
    tasks: i32,
    #[serde(rename = "Strengths")]
    strengths: i32,
    #[serde(rename = "Requirements")]
    requirements: i32,
    #[serde(rename = "Balance")]
    balance: i32,
    #[serde(rename = "Self Selected")]
    self_selected: i32,
    #[serde(rename = "Matching Values")]
    matching_values: String,
    #[serde(rename = "Matching Tasks")]
    matching_tasks: String,
    #[serde(rename = "Matching Strengths")]
    matching_strengths: String,
}

/// Writes ranked matches as CSV, one row per archetype in ranking order.
pub fn write_matches_csv<W: Write>(
    writer: W,
    matches: &[RankedArchetype<'_>],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    for (index, entry) in matches.iter().enumerate() {
        let breakdown = &entry.matched.breakdown;
        let factors = &entry.matched.matching_factors;

        csv_writer.serialize(MatchRow {
            rank: index + 1,
            archetype_id: entry.archetype.id,
            archetype_name: entry.archetype.name,
            score: entry.matched.score,
            values: breakdown.values,
            tasks: breakdown.tasks,
            strengths: breakdown.strengths,
            requirements: breakdown.requirements,
            balance: breakdown.balance,
            self_selected: breakdown.self_selected,
            matching_values: factors.values.join(LIST_SEPARATOR),
            matching_tasks: factors.tasks.join(LIST_SEPARATOR),
            matching_strengths: factors.strengths.join(LIST_SEPARATOR),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
