mod common;

use common::{PAR_CARD, card, card_over, context, context_with, id, roster_from_players};
use golf_stakes::controller::{Placement, compute_leaderboard, next_event_roster};
use golf_stakes::model::Player;
use golf_stakes::view::placement_rows;

#[test]
fn test03_champion_ineligible_player_is_skipped() {
    // gross: Alice 70, Bob 71, Cara 72
    let roster = roster_from_players(vec![
        Player::new("Alice", 0).with_eligibility(true, false),
        Player::new("Bob", 0),
        Player::new("Cara", 0),
    ]);
    let ctx = context_with(
        roster,
        vec![
            ("Alice", card(&[(1, 3), (2, 3)])),
            ("Bob", card(&[(1, 3)])),
            ("Cara", PAR_CARD.into()),
        ],
    );
    let placement = compute_leaderboard(&ctx).placement;
    assert_eq!(placement.gross_champion, Some(id("Bob")));
    // runner-up search runs over the whole gross order minus the champion
    assert_eq!(placement.gross_runnerup, Some(id("Alice")));
    assert_eq!(placement.net_champion, Some(id("Cara")));
    assert_eq!(placement.net_runnerup, None);
}

#[test]
fn test03_net_places_exclude_gross_placers_by_identity() {
    let ctx = context(
        &[("P1", 5), ("P2", 0), ("P3", 12), ("P4", 8), ("P5", 10)],
        vec![
            ("P1", card(&[(1, 3), (2, 3)])), // 70, net 65
            ("P2", PAR_CARD.into()),         // 72, net 72
            ("P3", card_over(8)),            // 80, net 68
            ("P4", card_over(6)),            // 78, net 70
            ("P5", card_over(13)),           // 85, net 75
        ],
    );
    let board = compute_leaderboard(&ctx);
    let placement = &board.placement;
    assert_eq!(placement.gross_champion, Some(id("P1")));
    assert_eq!(placement.gross_runnerup, Some(id("P2")));
    assert_eq!(placement.net_champion, Some(id("P3")));
    assert_eq!(placement.net_runnerup, Some(id("P4")));

    let p3 = board.entry(&id("P3")).unwrap();
    assert_eq!((p3.handicap_delta, p3.new_handicap), (-2, 10));
    let p4 = board.entry(&id("P4")).unwrap();
    assert_eq!((p4.handicap_delta, p4.new_handicap), (-1, 7));
    let p1 = board.entry(&id("P1")).unwrap();
    assert_eq!((p1.handicap_delta, p1.new_handicap), (0, 5));
    // deltas are informational only
    assert_eq!(p3.net_total, 68);
}

#[test]
fn test03_runnerup_flag_only_affects_gross_places() {
    let roster = roster_from_players(vec![
        Player::new("P1", 0),
        Player::new("P2", 0).with_eligibility(false, true),
        Player::new("P3", 0),
        Player::new("P4", 0),
    ]);
    let ctx = context_with(
        roster,
        vec![
            ("P1", card(&[(1, 3), (2, 3)])), // 70
            ("P2", PAR_CARD.into()),         // 72
            ("P3", card_over(8)),            // 80
            ("P4", card_over(9)),            // 81
        ],
    );
    let placement = compute_leaderboard(&ctx).placement;
    assert_eq!(placement.gross_champion, Some(id("P1")));
    assert_eq!(placement.gross_runnerup, Some(id("P3")));
    assert_eq!(placement.net_champion, Some(id("P2")));
    assert_eq!(placement.net_runnerup, Some(id("P4")));
}

#[test]
fn test03_no_eligible_champion_renders_none() {
    let roster = roster_from_players(vec![
        Player::new("Alice", 0).with_eligibility(true, false),
        Player::new("Bob", 0).with_eligibility(true, false),
    ]);
    let ctx = context_with(
        roster,
        vec![("Alice", PAR_CARD.into()), ("Bob", card_over(1))],
    );
    let board = compute_leaderboard(&ctx);
    assert_eq!(board.placement.gross_champion, None);
    assert_eq!(board.placement.gross_runnerup, Some(id("Alice")));
    assert_eq!(board.placement.net_champion, Some(id("Bob")));
    assert_eq!(board.placement.net_runnerup, None);

    let rows = placement_rows(&board);
    assert_eq!(rows[0].title, "gross champion");
    assert_eq!(rows[0].player, "none");
    assert_eq!(rows[3].player, "none");
}

#[test]
fn test03_empty_field_has_no_places() {
    let ctx = context(&[("Alice", 0)], vec![("Alice", "123".into())]);
    let board = compute_leaderboard(&ctx);
    assert!(board.entries.is_empty());
    assert_eq!(board.placement, Placement::default());
}

#[test]
fn test03_next_event_roster_is_a_new_record() {
    let ctx = context(
        &[("P1", 0), ("P2", 0), ("P3", 12), ("P4", 8)],
        vec![
            ("P1", card(&[(1, 3)])),
            ("P2", PAR_CARD.into()),
            ("P3", card_over(8)),
            ("P4", card_over(6)),
        ],
    );
    let board = compute_leaderboard(&ctx);
    let next = next_event_roster(&ctx.roster, &board.placement);
    let hcp = |name: &str| next.iter().find(|p| p.id == id(name)).unwrap().handicap;
    assert_eq!(hcp("P3"), 10);
    assert_eq!(hcp("P4"), 7);
    assert_eq!(hcp("P1"), 0);
    assert_eq!(ctx.roster.require(&id("P3")).unwrap().handicap, 12);
}
