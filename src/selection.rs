//! Record pre-filters applied before aggregation or listing.
//!
//! Every criterion is optional and they combine with AND. Text criteria
//! compare exactly against the adapted (trimmed) field values.

use crate::record::{ParticipantKind, ResultRecord, Season};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub year: Option<i32>,
    pub season: Option<Season>,
    pub sport: Option<String>,
    pub event: Option<String>,
    pub participant: Option<ParticipantKind>,
    pub name: Option<String>,
    pub medalists_only: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn maybe_season(mut self, season: Option<Season>) -> Self {
        self.season = season;
        self
    }

    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn participant(mut self, kind: ParticipantKind) -> Self {
        self.participant = Some(kind);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn medalists_only(mut self) -> Self {
        self.medalists_only = true;
        self
    }

    pub fn matches(&self, record: &ResultRecord) -> bool {
        self.year.is_none_or(|year| record.year == year)
            && self.season.as_ref().is_none_or(|season| &record.season == season)
            && self.sport.as_deref().is_none_or(|sport| record.sport == sport)
            && self
                .event
                .as_deref()
                .is_none_or(|event| record.event_title == event)
            && self
                .participant
                .as_ref()
                .is_none_or(|kind| &record.participant == kind)
            && self.name.as_deref().is_none_or(|name| record.name == name)
            && (!self.medalists_only || record.medal.podium().is_some())
    }

    pub fn apply<'a>(
        &'a self,
        records: &'a [ResultRecord],
    ) -> impl Iterator<Item = &'a ResultRecord> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}
