//! CSV export of ranked leaderboards

use crate::error::Result;
use crate::knowledge::RoleKey;
use crate::ranking::submission::LeaderboardRow;
use chrono::NaiveDate;
use csv::WriterBuilder;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of exported leaderboards
pub const LEADERBOARD_COLUMNS: [&str; 9] = [
    "rank",
    "name",
    "combined_score",
    "keyword_score",
    "semantic_score",
    "matched_skills",
    "missing_skills",
    "total_skills",
    "submitted_at",
];

/// Write rows as CSV. The header row is written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[LeaderboardRow], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(LEADERBOARD_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_file(rows: &[LeaderboardRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(rows, file)?;
    info!("Exported {} leaderboard rows to {}", rows.len(), path.display());
    Ok(())
}

/// Default export file name, e.g. `Infosys_Systems_Engineer_Trainee_rankings_20260301.csv`
pub fn export_filename(key: &RoleKey, date: NaiveDate) -> String {
    format!(
        "{}_{}_rankings_{}.csv",
        sanitize(&key.company),
        sanitize(&key.role),
        date.format("%Y%m%d")
    )
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
