//! Loading a result table into adapted records.
//!
//! Headers are matched against the configured column names (case-insensitive,
//! surrounding whitespace ignored). Columns the engine does not use, such as a
//! leading unnamed index column, are skipped.
//!
//! A single irregular row never fails the load: short rows read their missing
//! cells as empty, and rows whose year is not a whole number are skipped and
//! counted.

use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    config::{ColumnNames, DatasetConfig},
    io_utils,
    record::{LabelAliases, MedalField, RawRecord, ResultRecord, Season, adapt_with},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Required column '{column}' not found in header [{available}]")]
    MissingColumn { column: String, available: String },
    #[error("Row {row}: year '{value}' is not a whole number")]
    InvalidYear { row: usize, value: String },
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
}

/// Positions of the engine's fields within a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnIndices {
    name: usize,
    team: usize,
    sport: usize,
    event_title: usize,
    season: usize,
    year: usize,
    medal: usize,
    rank_position: Option<usize>,
    participant_type: Option<usize>,
}

impl ColumnIndices {
    fn resolve(headers: &[String], names: &ColumnNames) -> Result<Self, DatasetError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(wanted.trim()))
        };
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| DatasetError::MissingColumn {
                column: wanted.to_string(),
                available: headers.join(", "),
            })
        };
        Ok(Self {
            name: require(&names.name)?,
            team: require(&names.team)?,
            sport: require(&names.sport)?,
            event_title: require(&names.event_title)?,
            season: require(&names.season)?,
            year: require(&names.year)?,
            medal: require(&names.medal)?,
            rank_position: find(&names.rank_position),
            participant_type: find(&names.participant_type),
        })
    }

    fn raw_record(&self, row: &[String], row_number: usize) -> Result<RawRecord, DatasetError> {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        let optional = |idx: Option<usize>| idx.map(cell).unwrap_or("").to_string();
        Ok(RawRecord {
            name: cell(self.name).to_string(),
            team: cell(self.team).to_string(),
            sport: cell(self.sport).to_string(),
            event_title: cell(self.event_title).to_string(),
            season: cell(self.season).to_string(),
            year: parse_year(cell(self.year)).ok_or_else(|| DatasetError::InvalidYear {
                row: row_number,
                value: cell(self.year).to_string(),
            })?,
            participant_type: optional(self.participant_type),
            medal: cell(self.medal).to_string(),
            rank_position: optional(self.rank_position),
        })
    }
}

/// Accepts whole numbers, including float-formatted ones such as `"1996.0"`.
fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

pub fn load_records(
    path: &Path,
    options: LoadOptions,
    config: &DatasetConfig,
) -> Result<Vec<ResultRecord>> {
    info!(
        "Reading results from '{}' with delimiter '{}'",
        path.display(),
        crate::printable_delimiter(options.delimiter)
    );
    let reader = io_utils::open_csv_reader_from_path(path, options.delimiter)?;
    let records = read_records(reader, options.encoding, config)
        .with_context(|| format!("Loading results from {path:?}"))?;
    info!("Loaded {} result row(s)", records.len());
    Ok(records)
}

pub fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    encoding: &'static Encoding,
    config: &DatasetConfig,
) -> Result<Vec<ResultRecord>> {
    let headers = io_utils::reader_headers(&mut reader, encoding)?;
    let indices = ColumnIndices::resolve(&headers, &config.columns)?;
    debug!("Resolved column positions: {indices:?}");
    let aliases: LabelAliases = config.label_aliases()?;

    let mut records = Vec::new();
    let mut unrecognized = 0usize;
    let mut skipped = 0usize;
    for (row_idx, record) in reader.byte_records().enumerate() {
        let row_number = row_idx + 2;
        let record = record.with_context(|| format!("Reading row {row_number}"))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {row_number}"))?;
        let raw = match indices.raw_record(&decoded, row_number) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Skipping row: {err}");
                skipped += 1;
                continue;
            }
        };
        let adapted = adapt_with(&raw, &aliases);
        if matches!(adapted.season, Season::Other(_))
            || matches!(adapted.medal, MedalField::Unrecognized(_))
        {
            debug!(
                "Row {row_number}: unrecognized label (season '{}', medal '{}')",
                raw.season, raw.medal
            );
            unrecognized += 1;
        }
        records.push(adapted);
    }
    if skipped > 0 {
        warn!("Skipped {skipped} row(s) without a whole-number year");
    }
    if unrecognized > 0 {
        warn!("{unrecognized} row(s) carry unrecognized season or medal labels");
    }
    Ok(records)
}
