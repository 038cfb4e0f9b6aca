//! Medal counting grouped by an arbitrary key.
//!
//! [`aggregate()`] is shared by every tally view: the caller decides which
//! records go in and how a record maps to its group, the aggregator only
//! counts podium finishes. Groups are emitted in ascending key order, which
//! is the order ties keep after ranking.

use std::collections::BTreeMap;

use crate::record::{Medal, ResultRecord};

/// Gold, silver, and bronze counts. Every class is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedalCounts {
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl MedalCounts {
    pub fn record(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.gold + self.silver + self.bronze
    }

    /// Sort triple; golds dominate, then silvers, then bronzes.
    pub fn triple(&self) -> (usize, usize, usize) {
        (self.gold, self.silver, self.bronze)
    }
}

impl<'a> FromIterator<&'a ResultRecord> for MedalCounts {
    fn from_iter<I: IntoIterator<Item = &'a ResultRecord>>(iter: I) -> Self {
        let mut counts = MedalCounts::default();
        for medal in iter.into_iter().filter_map(|record| record.medal.podium()) {
            counts.record(medal);
        }
        counts
    }
}

/// One grouped line of a medal table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalTallyRow<K> {
    /// Positional rank, set by [`crate::ranking::order_and_rank`].
    pub rank: Option<usize>,
    pub key: K,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
    pub total: usize,
}

impl<K> MedalTallyRow<K> {
    pub fn new(key: K, counts: MedalCounts) -> Self {
        Self {
            rank: None,
            key,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        }
    }

    pub fn counts(&self) -> MedalCounts {
        MedalCounts {
            gold: self.gold,
            silver: self.silver,
            bronze: self.bronze,
        }
    }
}

/// Grouping identity of a tally row, with the column names it renders under.
pub trait GroupKey: Ord + Clone {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Counts the podium finishes of `records` per `key_fn` group.
///
/// Records without a recognised medal are skipped. Empty input yields an
/// empty table.
pub fn aggregate<'a, I, K, F>(records: I, mut key_fn: F) -> Vec<MedalTallyRow<K>>
where
    I: IntoIterator<Item = &'a ResultRecord>,
    K: Ord,
    F: FnMut(&ResultRecord) -> K,
{
    let mut groups: BTreeMap<K, MedalCounts> = BTreeMap::new();
    for record in records {
        let Some(medal) = record.medal.podium() else {
            continue;
        };
        groups.entry(key_fn(record)).or_default().record(medal);
    }
    groups
        .into_iter()
        .map(|(key, counts)| MedalTallyRow::new(key, counts))
        .collect()
}
