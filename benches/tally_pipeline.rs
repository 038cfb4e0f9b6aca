use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use encoding_rs::UTF_8;
use olympic_standings::config::DatasetConfig;
use olympic_standings::dataset::{LoadOptions, load_records};
use olympic_standings::record::Season;
use olympic_standings::views;
use tempfile::TempDir;

const TEAMS: &[&str] = &[
    "Australia", "Brazil", "Canada", "France", "Germany", "Japan", "Kenya", "Norway",
];

fn generate_results(rows: usize) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let csv_path = temp_dir.path().join("results.csv");
    let mut file = File::create(&csv_path).expect("create csv");
    writeln!(
        file,
        ",Name,Team,Sport,Season,Year,event_title,Medal,rank_position,participant_type"
    )
    .expect("header");
    for i in 0..rows {
        let place = i % 8 + 1;
        let medal = match place {
            1 => "Gold",
            2 => "Silver",
            3 => "Bronze",
            _ => "",
        };
        let season = if i % 5 == 0 { "Winter" } else { "Summer" };
        let year = 1960 + (i / 400 % 16) as i32 * 4;
        let team = TEAMS[i % TEAMS.len()];
        writeln!(
            file,
            "{i},Athlete {},{team},Sport {},{season},{year},Event {},{medal},{place}.0,Athlete",
            i % 900,
            i % 12,
            i / 8 % 40,
        )
        .expect("row");
    }
    (temp_dir, csv_path)
}

fn bench_tally_pipeline(c: &mut Criterion) {
    let (temp_dir, csv_path) = generate_results(50_000);
    let options = LoadOptions {
        delimiter: b',',
        encoding: UTF_8,
    };
    let config = DatasetConfig::default();
    let records = load_records(&csv_path, options, &config).expect("load results");

    let mut group = c.benchmark_group("tally_pipeline");

    group.bench_function("load_records", |b| {
        b.iter_batched(
            || (),
            |_| load_records(&csv_path, options, &config).expect("load results"),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("all_time_table", |b| {
        b.iter(|| views::all_time_table(&records, Season::Summer));
    });

    group.bench_function("athlete_leaderboard", |b| {
        b.iter(|| views::athlete_leaderboard(&records, None, 5));
    });

    drop(temp_dir);
    group.finish();
}

criterion_group!(benches, bench_tally_pipeline);
criterion_main!(benches);
