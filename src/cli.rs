use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{partition::DEFAULT_FEATURED, record::Season};

#[derive(Debug, Parser)]
#[command(author, version, about = "Medal tables and leaderboards from Olympic result data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Medal table by country for one year of the games
    Medals(MedalsArgs),
    /// All-time medal table by country for one season
    AllTime(AllTimeArgs),
    /// Individual medal leaderboard with a featured top block
    Athletes(AthletesArgs),
    /// Medal table or event results for one sport in one year
    Discipline(DisciplineArgs),
    /// Career summary and result history of one athlete
    Profile(ProfileArgs),
    /// List distinct years, sports, events, or athlete names
    List(ListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Result table to read ('-' reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// YAML file overriding column names and label aliases
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
    /// Character encoding for the output file/stdout (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum SeasonArg {
    Summer,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(value: SeasonArg) -> Self {
        match value {
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

#[derive(Debug, Args)]
pub struct MedalsArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Year of the games
    #[arg(short, long)]
    pub year: i32,
    /// Restrict to one season
    #[arg(long, value_enum)]
    pub season: Option<SeasonArg>,
}

#[derive(Debug, Args)]
pub struct AllTimeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Season to tally across all years
    #[arg(long, value_enum)]
    pub season: SeasonArg,
}

#[derive(Debug, Args)]
pub struct AthletesArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Restrict to one season (both seasons if omitted)
    #[arg(long, value_enum)]
    pub season: Option<SeasonArg>,
    /// Number of featured leaderboard entries
    #[arg(long, default_value_t = DEFAULT_FEATURED)]
    pub top: usize,
}

#[derive(Debug, Args)]
pub struct DisciplineArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Year of the games
    #[arg(short, long)]
    pub year: i32,
    /// Sport to analyze
    #[arg(short, long)]
    pub sport: String,
    /// List every entry of this event instead of the medal table
    #[arg(short, long)]
    pub event: Option<String>,
    /// Tally medals per event rather than per country
    #[arg(long = "by-event", conflicts_with = "event")]
    pub by_event: bool,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Athlete name, matched exactly
    #[arg(short, long)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum ListKind {
    Years,
    Sports,
    Events,
    Names,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// What to list
    #[arg(value_enum)]
    pub kind: ListKind,
    /// Year scope (required for sports and events)
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Sport scope (required for events)
    #[arg(short, long)]
    pub sport: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
