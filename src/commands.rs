use anyhow::{Context, Result, bail};
use log::{debug, info, warn};

use crate::{
    cli::{
        AllTimeArgs, AthletesArgs, Commands, DisciplineArgs, InputArgs, ListArgs, ListKind,
        MedalsArgs, OutputArgs, ProfileArgs,
    },
    config::DatasetConfig,
    dataset::{self, LoadOptions},
    io_utils,
    output::{self, Report, Section},
    record::{ResultRecord, Season},
    views,
};

pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Medals(args) => handle_medals(&args),
        Commands::AllTime(args) => handle_all_time(&args),
        Commands::Athletes(args) => handle_athletes(&args),
        Commands::Discipline(args) => handle_discipline(&args),
        Commands::Profile(args) => handle_profile(&args),
        Commands::List(args) => handle_list(&args),
    }
}

fn load(input: &InputArgs) -> Result<Vec<ResultRecord>> {
    let delimiter = io_utils::resolve_input_delimiter(&input.input, input.delimiter);
    let encoding = io_utils::resolve_encoding(input.input_encoding.as_deref())?;
    let config = DatasetConfig::load_or_default(input.config.as_deref())
        .with_context(|| format!("Loading config {:?}", input.config))?;
    debug!("Dataset config: {config:?}");
    dataset::load_records(&input.input, LoadOptions { delimiter, encoding }, &config)
}

fn emit(report: &Report, output: &OutputArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(output.output_encoding.as_deref())?;
    if report.row_count() == 0 {
        warn!("Selection produced no rows");
    }
    output::write_report(
        report,
        output.format,
        output.output.as_deref(),
        encoding,
    )?;
    info!(
        "Wrote {} row(s) across {} section(s)",
        report.row_count(),
        report.sections.len()
    );
    Ok(())
}

fn season_label(season: Option<&Season>) -> String {
    season.map_or_else(|| "all seasons".to_string(), Season::to_string)
}

fn handle_medals(args: &MedalsArgs) -> Result<()> {
    let records = load(&args.input)?;
    let season = args.season.map(Season::from);
    let table = views::medal_table(&records, args.year, season.clone());
    info!(
        "Medal table {} ({}): {} team(s)",
        args.year,
        season_label(season.as_ref()),
        table.len()
    );
    let title = format!("Medal table {}", args.year);
    emit(&Report::single(output::tally_section(title, &table)), &args.output)
}

fn handle_all_time(args: &AllTimeArgs) -> Result<()> {
    let records = load(&args.input)?;
    let season = Season::from(args.season);
    let table = views::all_time_table(&records, season.clone());
    info!("All-time {season} medal table: {} team(s)", table.len());
    let title = format!("All-time medal table ({season})");
    emit(&Report::single(output::tally_section(title, &table)), &args.output)
}

fn handle_athletes(args: &AthletesArgs) -> Result<()> {
    let records = load(&args.input)?;
    let season = args.season.map(Season::from);
    let board = views::athlete_leaderboard(&records, season.clone(), args.top);
    info!(
        "Athlete leaderboard ({}): {} featured, {} remaining",
        season_label(season.as_ref()),
        board.featured.len(),
        board.remaining.len()
    );
    let title = match &season {
        Some(season) => format!("Top athletes ({season})"),
        None => "Top athletes (overall)".to_string(),
    };
    emit(&output::leaderboard_report(&title, &board), &args.output)
}

fn handle_discipline(args: &DisciplineArgs) -> Result<()> {
    let records = load(&args.input)?;
    let report = if let Some(event) = &args.event {
        let entries = views::event_results(&records, args.year, &args.sport, event);
        info!("{} {} {event}: {} result(s)", args.year, args.sport, entries.len());
        Report::single(output::event_section(
            format!("Results: {event} ({} {})", args.sport, args.year),
            &entries,
        ))
    } else if args.by_event {
        let table = views::event_breakdown(&records, args.year, &args.sport);
        info!("{} {}: medals in {} event(s)", args.year, args.sport, table.len());
        Report::single(output::tally_section(
            format!("Medals per event: {} {}", args.sport, args.year),
            &table,
        ))
    } else {
        let table = views::discipline_table(&records, args.year, &args.sport);
        info!("{} {}: {} medal-winning team(s)", args.year, args.sport, table.len());
        Report::single(output::tally_section(
            format!("Medal table: {} {}", args.sport, args.year),
            &table,
        ))
    };
    emit(&report, &args.output)
}

fn handle_profile(args: &ProfileArgs) -> Result<()> {
    let records = load(&args.input)?;
    let report = match views::athlete_profile(&records, &args.name) {
        Some(profile) => {
            info!(
                "Profile '{}': {} start(s), {} medal(s)",
                profile.name,
                profile.starts,
                profile.medals.total()
            );
            output::profile_report(&profile)
        }
        None => {
            warn!("No results found for athlete '{}'", args.name);
            Report::single(Section::new(
                format!("Olympic record: {}", args.name),
                &["starts", "gold", "silver", "bronze"],
            ))
        }
    };
    emit(&report, &args.output)
}

fn handle_list(args: &ListArgs) -> Result<()> {
    let records = load(&args.input)?;
    let section = match args.kind {
        ListKind::Years => output::list_section("Years", "year", &views::years(&records)),
        ListKind::Names => {
            output::list_section("Athletes", "name", &views::athlete_names(&records))
        }
        ListKind::Sports => {
            let Some(year) = args.year else {
                bail!("Listing sports requires --year");
            };
            output::list_section(
                format!("Sports {year}"),
                "sport",
                &views::sports(&records, year),
            )
        }
        ListKind::Events => {
            let (Some(year), Some(sport)) = (args.year, args.sport.as_deref()) else {
                bail!("Listing events requires --year and --sport");
            };
            output::list_section(
                format!("Events: {sport} {year}"),
                "event",
                &views::events(&records, year, sport),
            )
        }
    };
    emit(&Report::single(section), &args.output)
}
