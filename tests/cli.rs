mod common;

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use serde_json::Value;

use common::{SAMPLE_DATA, TestWorkspace, fixture_path};

fn standings() -> Command {
    Command::cargo_bin("olympic-standings").expect("binary exists")
}

fn sample() -> String {
    fixture_path(SAMPLE_DATA).to_string_lossy().into_owned()
}

fn stdout_of(args: &[&str]) -> String {
    let output = standings().args(args).output().expect("run binary");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn medals_csv_lists_yearly_table_in_rank_order() {
    let input = sample();
    let stdout = stdout_of(&["medals", "-i", &input, "-y", "2004", "--format", "csv"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#""rank","team","gold","silver","bronze","total""#,
            r#""1","United States","1","1","1","3""#,
            r#""2","Australia","1","0","0","1""#,
            r#""3","Netherlands","0","1","0","1""#,
            r#""4","Ukraine","0","0","1","1""#,
        ]
    );
}

#[test]
fn medals_table_prints_title_and_rows() {
    let input = sample();
    standings()
        .args(["medals", "-i", &input, "-y", "2008"])
        .assert()
        .success()
        .stdout(
            contains("Medal table 2008")
                .and(contains("United States"))
                .and(contains("Serbia"))
                .and(contains("Norway").not()),
        );
}

#[test]
fn medals_for_unknown_year_reports_no_data() {
    let input = sample();
    standings()
        .args(["medals", "-i", &input, "-y", "1896"])
        .assert()
        .success()
        .stdout(contains("No data available."));
}

#[test]
fn all_time_winter_counts_relay_medals() {
    let input = sample();
    let stdout = stdout_of(&["all-time", "-i", &input, "--season", "winter", "--format", "csv"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], r#""1","Norway","3","0","0","3""#);
    assert_eq!(lines[2], r#""2","Germany","0","2","1","3""#);
    assert_eq!(lines[4], r#""4","Austria","0","0","1","1""#);
}

#[test]
fn athletes_json_splits_featured_and_remaining() {
    let input = sample();
    let stdout = stdout_of(&["athletes", "-i", &input, "--top", "2", "--format", "json"]);
    let value: Value = serde_json::from_str(&stdout).expect("parse json");
    let sections = value.as_object().expect("object keyed by section");
    let featured = sections
        .get("Top athletes (overall): top 2")
        .and_then(Value::as_array)
        .expect("featured section");
    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0]["name"], "Michael Phelps");
    assert_eq!(featured[0]["gold"], 2);
    assert_eq!(featured[0]["rank"], 1);
    assert_eq!(featured[1]["name"], "Ole Einar Bjoerndalen");

    let remaining = sections
        .get("Top athletes (overall): further placings")
        .and_then(Value::as_array)
        .expect("remaining section");
    assert_eq!(remaining.len(), 14);
    assert_eq!(remaining[0]["rank"], 3);
    assert!(remaining.iter().all(|row| row["name"] != "Norway"));
}

#[test]
fn discipline_event_lists_placements() {
    let input = sample();
    let stdout = stdout_of(&[
        "discipline",
        "-i",
        &input,
        "-y",
        "2004",
        "-s",
        "Swimming",
        "-e",
        "200m Freestyle",
        "--format",
        "csv",
    ]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#""placement","athlete","team""#,
            r#""Gold","Ian Thorpe","Australia""#,
            r#""Silver","Pieter van den Hoogenband","Netherlands""#,
            r#""Bronze","Michael Phelps","United States""#,
            r#""-","Grant Hackett","Australia""#,
        ]
    );
}

#[test]
fn discipline_by_event_rejects_event_filter() {
    let input = sample();
    standings()
        .args([
            "discipline", "-i", &input, "-y", "2008", "-s", "Swimming", "-e", "100m Freestyle",
            "--by-event",
        ])
        .assert()
        .failure();
}

#[test]
fn profile_reports_career_history() {
    let input = sample();
    standings()
        .args(["profile", "-i", &input, "-n", "Michael Phelps"])
        .assert()
        .success()
        .stdout(
            contains("Olympic record: Michael Phelps")
                .and(contains("Career"))
                .and(contains("100m Butterfly"))
                .and(contains("Bronze")),
        );
}

#[test]
fn list_years_newest_first() {
    let input = sample();
    let stdout = stdout_of(&["list", "years", "-i", &input, "--format", "csv"]);
    assert_eq!(stdout, "\"year\"\n\"2008\"\n\"2004\"\n\"2002\"\n");
}

#[test]
fn list_years_json_keeps_years_numeric() {
    let input = sample();
    let stdout = stdout_of(&["list", "years", "-i", &input, "--format", "json"]);
    let value: Value = serde_json::from_str(&stdout).expect("parse json");
    assert_eq!(value[0]["year"], 2008);
    assert_eq!(value[2]["year"], 2002);
}

#[test]
fn malformed_rows_do_not_abort_the_load() {
    let workspace = TestWorkspace::new();
    let path = workspace.write(
        "ragged.csv",
        "Name,Team,Sport,Season,Year,event_title,Medal\n\
         Ana,Peru,Judo,Summer,2012,Open,Gold\n\
         Bea,Chile,Judo,Summer,2012\n\
         Cora,Chile,Judo,Summer,,Open,Gold\n\
         Dana,Chile,Judo,Summer,2012,Open,Silver\n",
    );
    let stdout = stdout_of(&["medals", "-i", path.to_str().unwrap(), "-y", "2012", "--format", "csv"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#""rank","team","gold","silver","bronze","total""#,
            r#""1","Peru","1","0","0","1""#,
            r#""2","Chile","0","1","0","1""#,
        ]
    );
}

#[test]
fn list_events_requires_year_and_sport() {
    let input = sample();
    standings()
        .args(["list", "events", "-i", &input, "-y", "2008"])
        .assert()
        .failure()
        .stderr(contains("requires --year and --sport"));
}

#[test]
fn missing_column_is_reported() {
    let workspace = TestWorkspace::new();
    let path = workspace.write("broken.csv", "Name,Team,Sport\nA,B,C\n");
    standings()
        .args(["medals", "-i", path.to_str().unwrap(), "-y", "2004"])
        .assert()
        .failure()
        .stderr(contains("Required column"));
}

#[test]
fn config_renames_columns_and_adds_aliases() {
    let workspace = TestWorkspace::new();
    let data = workspace.write(
        "jeux.csv",
        "athlete,nation,discipline,epreuve,saison,annee,podium\n\
         Ana,Peru,Judo,Open,Ete,2012,Or\n\
         Bea,Chile,Judo,Open,Ete,2012,Argent\n\
         Cora,Peru,Judo,Lightweight,Ete,2012,Or\n",
    );
    let config = workspace.write(
        "dataset.yaml",
        "columns:\n  name: athlete\n  team: nation\n  sport: discipline\n  event_title: epreuve\n  season: saison\n  year: annee\n  medal: podium\naliases:\n  seasons:\n    Ete: Summer\n  medals:\n    Or: Gold\n    Argent: Silver\n",
    );
    let output = workspace.path().join("table.csv");
    standings()
        .args([
            "medals",
            "-i",
            data.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "-y",
            "2012",
            "--season",
            "summer",
            "--format",
            "csv",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();
    let written = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[1], r#""1","Peru","2","0","0","2""#);
    assert_eq!(lines[2], r#""2","Chile","0","1","0","1""#);
}
