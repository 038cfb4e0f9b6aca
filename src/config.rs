//! Dataset configuration loaded from YAML.
//!
//! Every field is optional. Defaults describe the cleaned Olympics export:
//!
//! ```yaml
//! columns:
//!   name: Name
//!   team: Team
//!   medal: Medal
//! aliases:
//!   seasons:
//!     Été: Summer
//!   medals:
//!     Or: Gold
//! ```
//!
//! Alias targets are resolved through the built-in labels, so any spelling
//! the adapter already understands ("Sommer", "Silber") works as a target.

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::record::{LabelAliases, MedalField, ParticipantKind, Season};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub columns: ColumnNames,
    pub aliases: AliasConfig,
}

/// Header names of the fields the adapter reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    pub name: String,
    pub team: String,
    pub sport: String,
    pub event_title: String,
    pub season: String,
    pub year: String,
    pub medal: String,
    pub rank_position: String,
    pub participant_type: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            team: "Team".to_string(),
            sport: "Sport".to_string(),
            event_title: "event_title".to_string(),
            season: "Season".to_string(),
            year: "Year".to_string(),
            medal: "Medal".to_string(),
            rank_position: "rank_position".to_string(),
            participant_type: "participant_type".to_string(),
        }
    }
}

/// Extra label spellings, keyed by the spelling found in the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AliasConfig {
    pub seasons: BTreeMap<String, String>,
    pub medals: BTreeMap<String, String>,
    pub participants: BTreeMap<String, String>,
}

impl DatasetConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening config file {path:?}"))?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader).context("Parsing config YAML")?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Built-in label tables extended with the configured aliases.
    pub fn label_aliases(&self) -> Result<LabelAliases> {
        let builtin = LabelAliases::default();
        let mut aliases = builtin.clone();
        for (label, target) in &self.aliases.seasons {
            match builtin.season(target) {
                Season::Other(_) => {
                    return Err(anyhow!(
                        "Season alias '{label}' targets unknown season '{target}'"
                    ));
                }
                season => aliases.add_season(label, season),
            }
        }
        for (label, target) in &self.aliases.medals {
            let MedalField::Podium(medal) = builtin.medal(target) else {
                return Err(anyhow!(
                    "Medal alias '{label}' targets unknown medal '{target}'"
                ));
            };
            aliases.add_medal(label, medal);
        }
        for (label, target) in &self.aliases.participants {
            match builtin.participant(target) {
                ParticipantKind::Other(_) => {
                    return Err(anyhow!(
                        "Participant alias '{label}' targets unknown participant type '{target}'"
                    ));
                }
                kind => aliases.add_participant(label, kind),
            }
        }
        Ok(aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Medal;

    #[test]
    fn empty_document_uses_defaults() {
        let config: DatasetConfig = serde_yaml::from_str("{}").expect("parse config");
        assert_eq!(config, DatasetConfig::default());
        assert_eq!(config.columns.event_title, "event_title");
    }

    #[test]
    fn partial_columns_keep_remaining_defaults() {
        let yaml = "columns:\n  medal: Medaille\n  year: Jahr\n";
        let config: DatasetConfig = serde_yaml::from_str(yaml).expect("parse config");
        assert_eq!(config.columns.medal, "Medaille");
        assert_eq!(config.columns.year, "Jahr");
        assert_eq!(config.columns.team, "Team");
    }

    #[test]
    fn aliases_resolve_through_builtin_labels() {
        let yaml = "aliases:\n  seasons:\n    Été: Sommer\n  medals:\n    Argent: Silber\n";
        let config: DatasetConfig = serde_yaml::from_str(yaml).expect("parse config");
        let aliases = config.label_aliases().expect("aliases");
        assert_eq!(aliases.season("Été"), Season::Summer);
        assert_eq!(aliases.medal("argent").podium(), Some(Medal::Silver));
    }

    #[test]
    fn unknown_alias_target_is_rejected() {
        let yaml = "aliases:\n  medals:\n    Tin: Platinum\n";
        let config: DatasetConfig = serde_yaml::from_str(yaml).expect("parse config");
        let err = config.label_aliases().expect_err("unknown target");
        assert!(err.to_string().contains("Platinum"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = serde_yaml::from_str::<DatasetConfig>("colums: {}\n")
            .expect_err("misspelled key should fail");
        assert!(err.to_string().contains("colums"));
    }

    #[test]
    fn load_rejects_nonexistent_file() {
        let err = DatasetConfig::load(Path::new("nonexistent_config_file.yml"))
            .expect_err("nonexistent file should fail");
        assert!(err.to_string().contains("nonexistent_config_file.yml"));
    }
}
