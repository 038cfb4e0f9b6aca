//! Display placement of a single result entry.
//!
//! Used for individual listings (career history, per-event results), never
//! for aggregated tally rows.

use std::fmt;

use crate::record::{Medal, RankPosition, ResultRecord};

pub const NO_PLACEMENT: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Medal(Medal),
    /// No placement recorded.
    Unplaced,
    /// Whole finish position, e.g. `"4"` for a stored `"4.0"`.
    Position(String),
    /// Placement text that could not be read as a number.
    Raw(String),
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Medal(medal) => write!(f, "{medal}"),
            Placement::Unplaced => f.write_str(NO_PLACEMENT),
            Placement::Position(position) => f.write_str(position),
            Placement::Raw(raw) => f.write_str(raw),
        }
    }
}

/// A podium medal wins over any numeric placement stored on the same record.
pub fn normalize_placement(record: &ResultRecord) -> Placement {
    if let Some(medal) = record.medal.podium() {
        return Placement::Medal(medal);
    }
    match &record.rank_position {
        RankPosition::Absent => Placement::Unplaced,
        RankPosition::Numeric(value) => Placement::Position(whole_number(*value)),
        RankPosition::Text(raw) => Placement::Raw(raw.clone()),
    }
}

/// Truncates toward zero and prints every digit, however large.
fn whole_number(value: f64) -> String {
    // `+ 0.0` folds a negative zero into zero.
    format!("{:.0}", value.trunc() + 0.0)
}
