//! Canonical result records and the adapter that builds them from raw rows.
//!
//! A [`RawRecord`] carries the textual fields exactly as the dataset stores
//! them. [`adapt()`] turns it into a [`ResultRecord`] whose season, medal,
//! participant kind, and finish placement are typed values. This is the only
//! place where label spellings are reconciled: "Summer" and "Sommer" both
//! become [`Season::Summer`], "Silver" and "Silber" both become
//! [`Medal::Silver`].
//!
//! Adaptation never fails. Labels the alias tables do not know are carried
//! through unchanged as the `Other`/`Unrecognized` variants, and a placement
//! that does not parse as a number is kept as raw text.

use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Summer,
    Winter,
    Other(String),
}

impl Season {
    pub fn label(&self) -> &str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three podium classes, declared in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Medal column of a result row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MedalField {
    #[default]
    Absent,
    Podium(Medal),
    /// A non-empty label outside the known medal spellings.
    Unrecognized(String),
}

impl MedalField {
    pub fn podium(&self) -> Option<Medal> {
        match self {
            MedalField::Podium(medal) => Some(*medal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticipantKind {
    Athlete,
    Team,
    Other(String),
}

impl ParticipantKind {
    pub fn label(&self) -> &str {
        match self {
            ParticipantKind::Athlete => "Athlete",
            ParticipantKind::Team => "Team",
            ParticipantKind::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw finish placement, independent of any medal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RankPosition {
    /// Empty cell or a not-a-number sentinel.
    #[default]
    Absent,
    /// A finite number, possibly written as floating text ("4.0").
    Numeric(f64),
    /// Text that could not be coerced to a number.
    Text(String),
}

impl RankPosition {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_missing_token(trimmed) {
            return RankPosition::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_nan() => RankPosition::Absent,
            Ok(value) if value.is_finite() => RankPosition::Numeric(value),
            _ => RankPosition::Text(trimmed.to_string()),
        }
    }

    /// Numeric sort key; `None` for absent or textual placements.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RankPosition::Numeric(value) => Some(*value),
            _ => None,
        }
    }
}

/// One row of the source table before any label normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub name: String,
    pub team: String,
    pub sport: String,
    pub event_title: String,
    pub season: String,
    pub year: i32,
    pub participant_type: String,
    pub medal: String,
    pub rank_position: String,
}

/// One participant-event-year entry in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub name: String,
    pub team: String,
    pub sport: String,
    pub event_title: String,
    pub season: Season,
    pub year: i32,
    pub participant: ParticipantKind,
    pub medal: MedalField,
    pub rank_position: RankPosition,
}

/// Case-insensitive label lookup tables used by the adapter.
#[derive(Debug, Clone)]
pub struct LabelAliases {
    seasons: HashMap<String, Season>,
    medals: HashMap<String, Medal>,
    participants: HashMap<String, ParticipantKind>,
}

impl Default for LabelAliases {
    fn default() -> Self {
        let mut aliases = LabelAliases {
            seasons: HashMap::new(),
            medals: HashMap::new(),
            participants: HashMap::new(),
        };
        for (label, season) in [
            ("Summer", Season::Summer),
            ("Sommer", Season::Summer),
            ("Winter", Season::Winter),
        ] {
            aliases.add_season(label, season);
        }
        for (label, medal) in [
            ("Gold", Medal::Gold),
            ("Silver", Medal::Silver),
            ("Silber", Medal::Silver),
            ("Bronze", Medal::Bronze),
        ] {
            aliases.add_medal(label, medal);
        }
        for (label, kind) in [
            ("Athlete", ParticipantKind::Athlete),
            ("Athlet", ParticipantKind::Athlete),
            ("Team", ParticipantKind::Team),
        ] {
            aliases.add_participant(label, kind);
        }
        aliases
    }
}

impl LabelAliases {
    pub fn add_season(&mut self, label: &str, season: Season) {
        self.seasons.insert(alias_key(label), season);
    }

    pub fn add_medal(&mut self, label: &str, medal: Medal) {
        self.medals.insert(alias_key(label), medal);
    }

    pub fn add_participant(&mut self, label: &str, kind: ParticipantKind) {
        self.participants.insert(alias_key(label), kind);
    }

    pub fn season(&self, raw: &str) -> Season {
        self.seasons
            .get(&alias_key(raw))
            .cloned()
            .unwrap_or_else(|| Season::Other(raw.trim().to_string()))
    }

    pub fn medal(&self, raw: &str) -> MedalField {
        let trimmed = raw.trim();
        if is_missing_token(trimmed) {
            return MedalField::Absent;
        }
        match self.medals.get(&alias_key(trimmed)) {
            Some(medal) => MedalField::Podium(*medal),
            None => MedalField::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn participant(&self, raw: &str) -> ParticipantKind {
        self.participants
            .get(&alias_key(raw))
            .cloned()
            .unwrap_or_else(|| ParticipantKind::Other(raw.trim().to_string()))
    }
}

pub fn adapt(raw: &RawRecord) -> ResultRecord {
    adapt_with(raw, &LabelAliases::default())
}

pub fn adapt_with(raw: &RawRecord, aliases: &LabelAliases) -> ResultRecord {
    ResultRecord {
        name: raw.name.trim().to_string(),
        team: raw.team.trim().to_string(),
        sport: raw.sport.trim().to_string(),
        event_title: raw.event_title.trim().to_string(),
        season: aliases.season(&raw.season),
        year: raw.year,
        participant: aliases.participant(&raw.participant_type),
        medal: aliases.medal(&raw.medal),
        rank_position: RankPosition::parse(&raw.rank_position),
    }
}

/// Empty cells and the usual not-a-number spellings written by dataframe exports.
pub fn is_missing_token(value: &str) -> bool {
    let lowered = value.trim().to_ascii_lowercase();
    let stripped = lowered.trim_start_matches('#');
    matches!(
        stripped,
        "" | "nan" | "-nan" | "na" | "n/a" | "<na>" | "null" | "none"
    )
}

fn alias_key(label: &str) -> String {
    label.trim().to_lowercase()
}
