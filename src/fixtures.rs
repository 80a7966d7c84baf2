//! Loading match data from JSON and CSV fixture files.
//!
//! JSON: either an array of matches (single elimination) or an object with `upper` and
//! `lower` arrays (double elimination), using the camelCase match fields.
//!
//! CSV: header `id,name,top,bottom,rounds` plus an optional `section` column. An empty
//! `top`/`bottom` means the party is not yet determined. `section` is `winners`/`upper`
//! or `losers`/`lower`; when the column is absent or empty everywhere the file is a
//! single-elimination bracket.

use crate::models::{BracketInput, Match, Party, SectionKind};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Errors while reading a fixture.
#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// `section` column holds something other than winners/upper/losers/lower.
    UnknownSection { row: usize, value: String },
    /// Some rows name a section and this one does not.
    MissingSection { row: usize },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "Could not read fixture: {}", e),
            FixtureError::Json(e) => write!(f, "Invalid JSON fixture: {}", e),
            FixtureError::Csv(e) => write!(f, "Invalid CSV fixture: {}", e),
            FixtureError::UnknownSection { row, value } => {
                write!(f, "Row {}: unknown section '{}'", row, value)
            }
            FixtureError::MissingSection { row } => {
                write!(f, "Row {}: section is required when other rows name one", row)
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            FixtureError::Json(e) => Some(e),
            FixtureError::Csv(e) => Some(e),
            FixtureError::UnknownSection { .. } | FixtureError::MissingSection { .. } => None,
        }
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(e: std::io::Error) -> Self {
        FixtureError::Io(e)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::Json(e)
    }
}

impl From<csv::Error> for FixtureError {
    fn from(e: csv::Error) -> Self {
        FixtureError::Csv(e)
    }
}

/// Load a bracket from a file; `.csv` files are read as CSV, everything else as JSON.
pub fn load_bracket(path: &Path) -> Result<BracketInput, FixtureError> {
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let input = if is_csv {
        read_matches_csv(file)?
    } else {
        read_matches_json(file)?
    };
    log::debug!(
        "Read {} matches from {}",
        input.match_count(),
        path.display()
    );
    Ok(input)
}

/// Parse a JSON fixture.
pub fn read_matches_json<R: Read>(reader: R) -> Result<BracketInput, FixtureError> {
    Ok(serde_json::from_reader(reader)?)
}

#[derive(Deserialize)]
struct CsvRow {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    top: Option<String>,
    #[serde(default)]
    bottom: Option<String>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    section: Option<String>,
}

impl CsvRow {
    fn into_match(self) -> Match {
        Match {
            name: self.name,
            top_party: self.top.map(Party::named),
            bottom_party: self.bottom.map(Party::named),
            number_of_rounds: self.rounds,
            ..Match::new(self.id)
        }
    }
}

fn parse_section(row: usize, value: &str) -> Result<SectionKind, FixtureError> {
    match value.to_ascii_lowercase().as_str() {
        "winners" | "upper" => Ok(SectionKind::Winners),
        "losers" | "lower" => Ok(SectionKind::Losers),
        _ => Err(FixtureError::UnknownSection {
            row,
            value: value.to_string(),
        }),
    }
}

/// Parse a CSV fixture. Row numbers in errors count data rows from 1.
pub fn read_matches_csv<R: Read>(reader: R) -> Result<BracketInput, FixtureError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: CsvRow = record?;
        rows.push(row);
    }

    if rows.iter().all(|r| r.section.is_none()) {
        return Ok(BracketInput::Single(
            rows.into_iter().map(CsvRow::into_match).collect(),
        ));
    }

    let mut upper = Vec::new();
    let mut lower = Vec::new();
    for (i, mut row) in rows.into_iter().enumerate() {
        let section = match row.section.take() {
            Some(value) => parse_section(i + 1, &value)?,
            None => return Err(FixtureError::MissingSection { row: i + 1 }),
        };
        match section {
            SectionKind::Losers => lower.push(row.into_match()),
            _ => upper.push(row.into_match()),
        }
    }
    Ok(BracketInput::Double { upper, lower })
}
