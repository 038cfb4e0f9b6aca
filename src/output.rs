//! Turning view results into printable reports.
//!
//! A [`Report`] is a list of titled [`Section`]s, each a header row plus data
//! rows of [`Cell`]s. The same report renders as aligned text, CSV, or JSON.

use std::{fmt, io::Write, path::Path};

use anyhow::{Context, Result, anyhow};
use encoding_rs::Encoding;
use serde_json::{Map, Value as JsonValue};

use crate::{
    cli::OutputFormat,
    io_utils,
    partition::Partitioned,
    tally::{GroupKey, MedalTallyRow},
    table,
    views::{AthleteProfile, EventEntry},
};

pub const NO_DATA: &str = "No data available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
    Year(i32),
}

impl Cell {
    fn to_json(&self) -> JsonValue {
        match self {
            Cell::Text(text) => JsonValue::from(text.as_str()),
            Cell::Count(count) => JsonValue::from(*count),
            Cell::Year(year) => JsonValue::from(*year),
        }
    }
}

impl From<i32> for Cell {
    fn from(year: i32) -> Self {
        Cell::Year(year)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Count(count) => write!(f, "{count}"),
            Cell::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Section {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect())
            .collect()
    }

    fn json_rows(&self) -> JsonValue {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, JsonValue> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Cell::to_json))
                    .collect();
                JsonValue::Object(object)
            })
            .collect();
        JsonValue::Array(rows)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn single(section: Section) -> Self {
        Self {
            sections: vec![section],
        }
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_text()),
            OutputFormat::Csv => self.render_csv(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let mut output = String::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            output.push_str(&section.title);
            output.push('\n');
            if section.is_empty() {
                output.push_str(NO_DATA);
                output.push('\n');
            } else {
                output.push_str(&table::render_table(&section.headers, &section.text_rows()));
            }
        }
        output
    }

    /// Sections follow each other, each led by its own header row.
    fn render_csv(&self) -> Result<String> {
        let mut writer = io_utils::csv_writer(Vec::new());
        for section in &self.sections {
            writer
                .write_record(&section.headers)
                .with_context(|| format!("Writing CSV header for '{}'", section.title))?;
            for row in section.text_rows() {
                writer.write_record(&row).context("Writing CSV row")?;
            }
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow!("Flushing CSV output: {}", err.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }

    /// A single section is a plain array of row objects; several sections
    /// become an object keyed by section title.
    fn render_json(&self) -> Result<String> {
        let value = match self.sections.as_slice() {
            [section] => section.json_rows(),
            sections => JsonValue::Object(
                sections
                    .iter()
                    .map(|section| (section.title.clone(), section.json_rows()))
                    .collect(),
            ),
        };
        let mut rendered = serde_json::to_string_pretty(&value).context("Serializing JSON")?;
        rendered.push('\n');
        Ok(rendered)
    }
}

pub fn write_report(
    report: &Report,
    format: OutputFormat,
    path: Option<&Path>,
    encoding: &'static Encoding,
) -> Result<()> {
    let rendered = report.render(format)?;
    let mut writer = io_utils::open_output(path, encoding)?;
    writer
        .write_all(rendered.as_bytes())
        .context("Writing report")?;
    writer.flush().context("Flushing report")
}

pub fn tally_section<K: GroupKey>(title: impl Into<String>, rows: &[MedalTallyRow<K>]) -> Section {
    let mut headers = vec!["rank"];
    headers.extend_from_slice(K::COLUMNS);
    headers.extend_from_slice(&["gold", "silver", "bronze", "total"]);
    let mut section = Section::new(title, &headers);
    for row in rows {
        let mut cells = vec![row.rank.map(Cell::Count).unwrap_or(Cell::Text(String::new()))];
        cells.extend(row.key.cells().into_iter().map(Cell::Text));
        cells.extend([
            Cell::Count(row.gold),
            Cell::Count(row.silver),
            Cell::Count(row.bronze),
            Cell::Count(row.total),
        ]);
        section.rows.push(cells);
    }
    section
}

pub fn leaderboard_report<K: GroupKey>(
    title: &str,
    board: &Partitioned<MedalTallyRow<K>>,
) -> Report {
    Report {
        sections: vec![
            tally_section(format!("{title}: top {}", board.featured.len()), &board.featured),
            tally_section(format!("{title}: further placings"), &board.remaining),
        ],
    }
}

pub fn profile_report(profile: &AthleteProfile) -> Report {
    let mut summary = Section::new(
        format!("Olympic record: {}", profile.name),
        &["starts", "gold", "silver", "bronze"],
    );
    summary.rows.push(vec![
        Cell::Count(profile.starts),
        Cell::Count(profile.medals.gold),
        Cell::Count(profile.medals.silver),
        Cell::Count(profile.medals.bronze),
    ]);
    let mut history = Section::new(
        "Career",
        &["year", "sport", "event", "placement", "team"],
    );
    for entry in &profile.history {
        history.rows.push(vec![
            Cell::Year(entry.year),
            Cell::Text(entry.sport.clone()),
            Cell::Text(entry.event_title.clone()),
            Cell::Text(entry.placement.to_string()),
            Cell::Text(entry.team.clone()),
        ]);
    }
    Report {
        sections: vec![summary, history],
    }
}

pub fn event_section(title: impl Into<String>, entries: &[EventEntry]) -> Section {
    let mut section = Section::new(title, &["placement", "athlete", "team"]);
    for entry in entries {
        section.rows.push(vec![
            Cell::Text(entry.placement.to_string()),
            Cell::Text(entry.name.clone()),
            Cell::Text(entry.team.clone()),
        ]);
    }
    section
}

/// One-column listing; years stay numeric in JSON.
pub fn list_section<T>(title: impl Into<String>, header: &str, values: &[T]) -> Section
where
    T: Clone + Into<Cell>,
{
    let mut section = Section::new(title, &[header]);
    for value in values {
        section.rows.push(vec![value.clone().into()]);
    }
    section
}
