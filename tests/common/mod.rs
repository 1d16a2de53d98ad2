#![allow(dead_code)]

use golf_stakes::controller::{read_course_database, read_roster};
use golf_stakes::model::{
    CourseDatabase, CourseSelection, EventContext, Player, PlayerId, Roster, ScoreInput,
    ScoreLedger, select_course,
};

// West rows are out of order on purpose; selection sorts by hole number.
pub const COURSE_CSV: &str = "course_name,area,hole,par,hcp
Sunrise,East,1,4,7
Sunrise,East,2,4,1
Sunrise,East,3,3,15
Sunrise,East,4,5,3
Sunrise,East,5,4,11
Sunrise,East,6,4,5
Sunrise,East,7,3,17
Sunrise,East,8,5,9
Sunrise,East,9,4,13
Sunrise,West,9,4,14
Sunrise,West,8,5,10
Sunrise,West,7,3,18
Sunrise,West,6,4,6
Sunrise,West,5,4,12
Sunrise,West,4,4,4
Sunrise,West,3,3,16
Sunrise,West,2,5,2
Sunrise,West,1,4,8
Sunrise,North,1,4,1
Sunrise,North,2,4,3
Sunrise,North,3,3,5
Sunrise,North,4,5,7
Sunrise,North,5,4,9
Sunrise,North,6,4,11
Sunrise,North,7,3,13
Sunrise,North,8,5,15
";

/// Par per hole for East + West.
pub const PARS: [u32; 18] = [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 5, 3, 4, 4, 4, 3, 5, 4];
pub const PAR_CARD: &str = "443544354453444354";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn id(name: &str) -> PlayerId {
    PlayerId::new(name)
}

pub fn course_db() -> CourseDatabase {
    read_course_database(COURSE_CSV.as_bytes()).expect("fixture course csv")
}

pub fn course() -> CourseSelection {
    select_course(&course_db(), "Sunrise", "East", "West").expect("East + West is 18 holes")
}

/// Par card with the given `(hole, strokes)` overrides.
pub fn card(changes: &[(u8, u32)]) -> ScoreInput {
    let mut strokes = PARS.to_vec();
    for &(hole, s) in changes {
        strokes[usize::from(hole) - 1] = s;
    }
    ScoreInput::Strokes(strokes)
}

/// Par card with a bogey on each of the first `n` holes.
pub fn card_over(n: u8) -> ScoreInput {
    let changes: Vec<(u8, u32)> = (1..=n)
        .map(|h| (h, PARS[usize::from(h) - 1] + 1))
        .collect();
    card(&changes)
}

pub fn roster(players: &[(&str, i32)]) -> Roster {
    Roster::new(players.iter().map(|&(n, h)| Player::new(n, h)).collect()).expect("unique names")
}

pub fn roster_from_players(players: Vec<Player>) -> Roster {
    Roster::new(players).expect("unique names")
}

pub fn ledger(cards: Vec<(&str, ScoreInput)>) -> ScoreLedger {
    cards
        .into_iter()
        .fold(ScoreLedger::new(), |l, (name, input)| {
            l.with_input(&id(name), &input)
        })
}

pub fn context_with(roster: Roster, cards: Vec<(&str, ScoreInput)>) -> EventContext {
    EventContext::new(course(), roster, ledger(cards)).expect("cards match roster")
}

pub fn context(players: &[(&str, i32)], cards: Vec<(&str, ScoreInput)>) -> EventContext {
    context_with(roster(players), cards)
}

pub fn roster_csv() -> Roster {
    read_roster(
        "name,handicap,champion,runnerup
Alice,10,yes,yes
Bob,12,yes,yes
Cara,8,no,yes
Dan,20,yes,yes
"
        .as_bytes(),
    )
    .expect("fixture roster csv")
}
