//! Ranked views over a record set.
//!
//! Every medal table runs the same pipeline: a [`Selection`] picks the
//! records, [`aggregate`] groups and counts them by a key, and
//! [`order_and_rank`] orders and numbers the rows. The views below only
//! differ in which selection and key they pass to [`tally_view`].

use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    partition::{Partitioned, partition},
    placement::{Placement, normalize_placement},
    ranking::order_and_rank,
    record::{ParticipantKind, ResultRecord, Season},
    selection::Selection,
    tally::{GroupKey, MedalCounts, MedalTallyRow, aggregate},
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamKey {
    pub team: String,
}

impl TeamKey {
    pub fn of(record: &ResultRecord) -> Self {
        TeamKey {
            team: record.team.clone(),
        }
    }
}

impl GroupKey for TeamKey {
    const COLUMNS: &'static [&'static str] = &["team"];

    fn cells(&self) -> Vec<String> {
        vec![self.team.clone()]
    }
}

/// Athlete identity: the same person in two sports or seasons is two entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AthleteKey {
    pub name: String,
    pub sport: String,
    pub season: Season,
}

impl AthleteKey {
    pub fn of(record: &ResultRecord) -> Self {
        AthleteKey {
            name: record.name.clone(),
            sport: record.sport.clone(),
            season: record.season.clone(),
        }
    }
}

impl GroupKey for AthleteKey {
    const COLUMNS: &'static [&'static str] = &["name", "sport", "season"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sport.clone(),
            self.season.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisciplineKey {
    pub sport: String,
    pub event_title: String,
}

impl DisciplineKey {
    pub fn of(record: &ResultRecord) -> Self {
        DisciplineKey {
            sport: record.sport.clone(),
            event_title: record.event_title.clone(),
        }
    }
}

impl GroupKey for DisciplineKey {
    const COLUMNS: &'static [&'static str] = &["sport", "event"];

    fn cells(&self) -> Vec<String> {
        vec![self.sport.clone(), self.event_title.clone()]
    }
}

/// Selects, aggregates, orders, and ranks in one pass.
pub fn tally_view<K, F>(
    records: &[ResultRecord],
    selection: &Selection,
    key_fn: F,
) -> Vec<MedalTallyRow<K>>
where
    K: GroupKey,
    F: FnMut(&ResultRecord) -> K,
{
    order_and_rank(aggregate(selection.apply(records), key_fn))
}

/// Country medal table for one edition of the games.
pub fn medal_table(
    records: &[ResultRecord],
    year: i32,
    season: Option<Season>,
) -> Vec<MedalTallyRow<TeamKey>> {
    let selection = Selection::all().year(year).maybe_season(season);
    tally_view(records, &selection, TeamKey::of)
}

/// Country medal table over every year of one season.
pub fn all_time_table(records: &[ResultRecord], season: Season) -> Vec<MedalTallyRow<TeamKey>> {
    let selection = Selection::all().season(season);
    tally_view(records, &selection, TeamKey::of)
}

/// Country medal table for one sport in one year, across all its events.
pub fn discipline_table(
    records: &[ResultRecord],
    year: i32,
    sport: &str,
) -> Vec<MedalTallyRow<TeamKey>> {
    let selection = Selection::all().year(year).sport(sport);
    tally_view(records, &selection, TeamKey::of)
}

/// Medals per event of one sport, for spotting where a sport's medals went.
pub fn event_breakdown(
    records: &[ResultRecord],
    year: i32,
    sport: &str,
) -> Vec<MedalTallyRow<DisciplineKey>> {
    let selection = Selection::all().year(year).sport(sport);
    tally_view(records, &selection, DisciplineKey::of)
}

/// Individual medal leaderboard, split into a featured top block and the rest.
///
/// Team entries are excluded. Without a season both seasons are ranked
/// together, but an athlete's summer and winter medals stay separate rows.
pub fn athlete_leaderboard(
    records: &[ResultRecord],
    season: Option<Season>,
    featured: usize,
) -> Partitioned<MedalTallyRow<AthleteKey>> {
    let selection = Selection::all()
        .participant(ParticipantKind::Athlete)
        .medalists_only()
        .maybe_season(season);
    partition(tally_view(records, &selection, AthleteKey::of), featured)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerEntry {
    pub year: i32,
    pub sport: String,
    pub event_title: String,
    pub placement: Placement,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteProfile {
    pub name: String,
    pub starts: usize,
    pub medals: MedalCounts,
    /// Newest year first.
    pub history: Vec<CareerEntry>,
}

/// Career summary for one participant name, `None` when the name never starts.
pub fn athlete_profile(records: &[ResultRecord], name: &str) -> Option<AthleteProfile> {
    let selection = Selection::all().name(name);
    let entries: Vec<&ResultRecord> = selection.apply(records).collect();
    if entries.is_empty() {
        return None;
    }
    let medals: MedalCounts = entries.iter().copied().collect();
    let mut history: Vec<CareerEntry> = entries
        .iter()
        .map(|record| CareerEntry {
            year: record.year,
            sport: record.sport.clone(),
            event_title: record.event_title.clone(),
            placement: normalize_placement(record),
            team: record.team.clone(),
        })
        .collect();
    history.sort_by(|a, b| b.year.cmp(&a.year));
    Some(AthleteProfile {
        name: name.to_string(),
        starts: entries.len(),
        medals,
        history,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub placement: Placement,
    pub name: String,
    pub team: String,
}

/// Every entry of one event, best finish first; unplaced entries go last.
pub fn event_results(
    records: &[ResultRecord],
    year: i32,
    sport: &str,
    event: &str,
) -> Vec<EventEntry> {
    let selection = Selection::all().year(year).sport(sport).event(event);
    let mut entries: Vec<&ResultRecord> = selection.apply(records).collect();
    entries.sort_by(|a, b| {
        compare_positions(a.rank_position.as_number(), b.rank_position.as_number())
    });
    entries
        .into_iter()
        .map(|record| EventEntry {
            placement: normalize_placement(record),
            name: record.name.clone(),
            team: record.team.clone(),
        })
        .collect()
}

fn compare_positions(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct years, newest first.
pub fn years(records: &[ResultRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|record| record.year)
        .unique()
        .sorted_by(|a, b| b.cmp(a))
        .collect()
}

pub fn sports(records: &[ResultRecord], year: i32) -> Vec<String> {
    let selection = Selection::all().year(year);
    selection
        .apply(records)
        .map(|record| record.sport.clone())
        .unique()
        .sorted()
        .collect()
}

pub fn events(records: &[ResultRecord], year: i32, sport: &str) -> Vec<String> {
    let selection = Selection::all().year(year).sport(sport);
    selection
        .apply(records)
        .map(|record| record.event_title.clone())
        .unique()
        .sorted()
        .collect()
}

pub fn athlete_names(records: &[ResultRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.name.clone())
        .unique()
        .sorted()
        .collect()
}
