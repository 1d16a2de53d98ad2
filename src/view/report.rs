use maud::{DOCTYPE, Markup, html};

use crate::controller::{EventReport, Leaderboard, SettlementResult};
use crate::view::export::{hole_wager_rows, join_holes, placement_rows, settlement_rows};

pub fn render_event_report(report: &EventReport) -> Markup {
    let title = format!(
        "{} ({} / {})",
        report.course_name, report.front_area, report.back_area
    );
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h2 { (title) }
                @if let Some(date) = report.date {
                    p class="event-date" { (date.format("%Y-%m-%d").to_string()) " · par " (report.total_par) }
                }
                (render_leaderboard(&report.leaderboard))
                (render_placements(&report.leaderboard))
                (render_birdies(&report.leaderboard))
                @for settlement in &report.settlements {
                    (render_settlement(settlement))
                }
                h3 { "Awards" }
                ul class="awards" {
                    @for award in &report.awards {
                        li { b { (award.category) } " " (award.display) }
                    }
                }
            }
        }
    }
}

pub fn render_leaderboard(leaderboard: &Leaderboard) -> Markup {
    html! {
        h3 { "Leaderboard" }
        @if leaderboard.entries.is_empty() {
            p { "No complete scores." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "NET" }
                        th { "GROSS" }
                        th { "PLAYER" }
                        th { "HCP" }
                        th { "GROSS TOTAL" }
                        th { "NET TOTAL" }
                        th { "NEXT HCP" }
                    }
                }
                tbody {
                    @for e in &leaderboard.entries {
                        tr {
                            td { (e.net_rank) }
                            td { (e.gross_rank) }
                            td { (e.player.as_str()) }
                            td { (e.handicap) }
                            td { (e.gross_total) }
                            td { (e.net_total) }
                            td { (e.new_handicap) }
                        }
                    }
                }
            }
        }
        @if !leaderboard.excluded.is_empty() {
            p class="refresh" {
                "Incomplete cards: "
                @for (i, p) in leaderboard.excluded.iter().enumerate() {
                    @if i > 0 { ", " }
                    (p.as_str())
                }
            }
        }
    }
}

fn render_placements(leaderboard: &Leaderboard) -> Markup {
    html! {
        table class="styled-table placements" {
            tbody {
                @for row in placement_rows(leaderboard) {
                    tr {
                        td { (row.title) }
                        td { (row.player) }
                    }
                }
            }
        }
    }
}

fn render_birdies(leaderboard: &Leaderboard) -> Markup {
    let grouped = leaderboard.birdies_by_player();
    html! {
        h3 { "Birdies" }
        @if grouped.is_empty() {
            p { "none" }
        } @else {
            ul class="birdies" {
                @for (player, holes) in &grouped {
                    li { (player.as_str()) " - holes " (join_holes(holes)) }
                }
            }
        }
    }
}

fn render_settlement(result: &SettlementResult) -> Markup {
    html! {
        h3 { "Wager: " (result.format.to_string()) }
        table class="styled-table linescore-table" {
            thead {
                tr {
                    th { "Hole" }
                    th { "Match" }
                    th { "Winner" }
                    th { "x" }
                    th { "Stakes" }
                }
            }
            tbody {
                @for row in hole_wager_rows(result) {
                    tr {
                        td { (row.hole) }
                        td { (row.matchup) }
                        td { (row.winner) }
                        td { (row.multiplier) }
                        td { (row.deltas) }
                    }
                }
            }
        }
        table class="styled-table" {
            thead {
                tr {
                    th { "PLAYER" }
                    th { "TOTAL" }
                    th { "W" }
                    th { "L" }
                    th { "T" }
                }
            }
            tbody {
                @for row in settlement_rows(result) {
                    tr {
                        td { (row.player) }
                        td { (row.earnings) }
                        td { (row.win) }
                        td { (row.lose) }
                        td { (row.tie) }
                    }
                }
            }
        }
        @if !result.warnings.is_empty() {
            ul class="warnings" {
                @for w in &result.warnings {
                    li { (w.player.as_str()) ": " (w.message) }
                }
            }
        }
    }
}
