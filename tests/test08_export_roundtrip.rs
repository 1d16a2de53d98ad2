mod common;

use common::{PAR_CARD, card, context, id};
use golf_stakes::controller::{AwardNomination, EventReport, OpponentConfig, WagerConfig};
use golf_stakes::view::{
    hole_wager_rows, leaderboard_rows, read_leaderboard_csv, render_event_report,
    settlement_rows, write_csv, write_csv_bundle,
};
use golf_stakes::{EventContext, build_event_report};

fn sample_context() -> EventContext {
    context(
        &[("Alice", 10), ("Bob", 12), ("Cara", 8), ("Dan", 20)],
        vec![
            ("Alice", card(&[(3, 2), (17, 4)])),
            ("Bob", card(&[(1, 5)])),
            ("Cara", PAR_CARD.into()),
            ("Dan", "4435".into()),
        ],
    )
}

fn sample_report() -> EventReport {
    let wagers = vec![
        WagerConfig::FieldMatchPlay { bet_unit: 50 },
        WagerConfig::OneVsMany {
            anchor: id("Alice"),
            default_bet: 100,
            opponents: vec![OpponentConfig::new("Bob"), OpponentConfig::new("Cara")],
        },
    ];
    let awards = vec![
        AwardNomination::single("longest drive", vec![id("Bob")]),
        AwardNomination::count_based("nearest pin (N)", vec![]),
    ];
    build_event_report(&sample_context(), &wagers, &awards).unwrap()
}

#[test]
fn test08_leaderboard_csv_reads_back() {
    let report = sample_report();
    let rows = leaderboard_rows(&report.leaderboard);
    assert_eq!(rows.len(), 3);

    let mut buf = Vec::new();
    write_csv(&mut buf, &rows).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with("player,handicap,gross,net,gross_rank,net_rank,birdies"));
    assert!(text.contains("Alice,10,70,60,1,1,3/17,0,10"));

    assert_eq!(read_leaderboard_csv(buf.as_slice()).unwrap(), rows);
}

#[test]
fn test08_wager_rows() {
    let report = sample_report();
    let field = &report.settlements[0];
    let rows = hole_wager_rows(field);
    assert_eq!(rows.len(), 18);
    assert_eq!(rows[0].matchup, "field");
    // Alice and Cara share the low score on hole 1
    assert_eq!(rows[0].winner, "halved");
    assert_eq!(rows[0].deltas, "0");
    assert_eq!(rows[2].winner, "Alice");
    assert_eq!(rows[2].deltas, "+50 Alice; -50 Bob; -50 Cara");

    let many = &report.settlements[1];
    let rows = hole_wager_rows(many);
    assert_eq!(rows[0].matchup, "Alice vs Bob");
    assert_eq!(rows[1].matchup, "Alice vs Cara");

    let summary = settlement_rows(field);
    let alice = summary.iter().find(|r| r.player == "Alice").unwrap();
    assert_eq!((alice.earnings, alice.win, alice.lose), (100, 2, 0));
}

#[test]
fn test08_csv_bundle_writes_every_table() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let written = write_csv_bundle(dir.path(), &report).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "leaderboard.csv",
            "placements.csv",
            "awards.csv",
            "wager1_holes.csv",
            "wager1_summary.csv",
            "wager2_holes.csv",
            "wager2_summary.csv",
        ]
    );
    for path in &written {
        assert!(path.is_file(), "{}", path.display());
    }

    let placements = std::fs::read_to_string(dir.path().join("placements.csv")).unwrap();
    assert!(placements.contains("gross champion,Alice"));
    let awards = std::fs::read_to_string(dir.path().join("awards.csv")).unwrap();
    assert!(awards.contains("longest drive,Bob"));
    assert!(awards.contains("nearest pin (N),none"));
}

#[test]
fn test08_report_json_round_trip() {
    let report = sample_report();
    let json = serde_json::to_string(&report).unwrap();
    let back: EventReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test08_html_report() {
    let report = sample_report();
    let html = render_event_report(&report).into_string();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Sunrise (East / West)"));
    assert!(html.contains("Incomplete cards: Dan"));
    assert!(html.contains("Alice - holes 3/17"));
    assert!(html.contains("Wager: field match play"));
    assert!(html.contains("none"));
}
