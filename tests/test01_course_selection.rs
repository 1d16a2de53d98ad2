mod common;

use common::{COURSE_CSV, PARS, course, course_db};
use golf_stakes::CoreError;
use golf_stakes::controller::{read_course_database, read_roster};
use golf_stakes::model::select_course;

#[test]
fn test01_front_then_back_in_hole_order() {
    let course = course();
    let holes = course.holes();
    assert_eq!(holes.len(), 18);
    assert_eq!(
        holes.iter().map(|h| h.number).collect::<Vec<_>>(),
        (1..=18).collect::<Vec<u8>>()
    );
    assert_eq!(
        holes.iter().map(|h| u32::from(h.par)).collect::<Vec<_>>(),
        PARS.to_vec()
    );
    assert_eq!(holes[0].area, "East");
    assert_eq!(holes[9].area, "West");
    assert_eq!(holes[9].area_hole, 1);
    assert_eq!(holes[10].stroke_index, 2);
    assert_eq!(course.total_par(), 72);
    assert_eq!(course.hole(11).map(|h| h.par), Some(5));
    assert!(course.hole(0).is_none());
    assert!(course.hole(19).is_none());
}

#[test]
fn test01_same_area_twice_is_rejected() {
    let err = select_course(&course_db(), "Sunrise", "East", "East").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(_)));
    assert!(err.is_configuration());
}

#[test]
fn test01_missing_area_is_rejected() {
    let err = select_course(&course_db(), "Sunrise", "East", "South").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(ref m) if m.contains("South")));

    let err = select_course(&course_db(), "Moonlight", "East", "West").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(_)));
}

#[test]
fn test01_wrong_hole_count_is_rejected() {
    // North only has 8 holes
    let err = select_course(&course_db(), "Sunrise", "North", "East").unwrap_err();
    assert!(
        matches!(err, CoreError::InvalidSelection(ref m) if m.contains("'North' has 8 holes"))
    );
}

#[test]
fn test01_each_area_must_be_nine_holes() {
    let mut csv = String::from("course_name,area,hole,par,hcp\n");
    for hole in 1..=10 {
        csv.push_str(&format!("Ridge,Ten,{hole},4,{hole}\n"));
    }
    for hole in 1..=8 {
        csv.push_str(&format!("Ridge,Eight,{hole},4,{}\n", hole + 10));
    }
    let db = read_course_database(csv.as_bytes()).unwrap();

    // 10 + 8 is still 18 holes
    let err = select_course(&db, "Ridge", "Ten", "Eight").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(ref m) if m.contains("'Ten' has 10 holes")));
    let err = select_course(&db, "Ridge", "Eight", "Ten").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(ref m) if m.contains("'Eight' has 8 holes")));
}

#[test]
fn test01_repeated_hole_number_is_rejected() {
    let csv = format!("{COURSE_CSV}Sunrise,Lake,1,4,1\nSunrise,Lake,1,4,2\n");
    let db = read_course_database(csv.as_bytes()).unwrap();
    let err = select_course(&db, "Sunrise", "Lake", "East").unwrap_err();
    assert!(matches!(err, CoreError::InvalidSelection(ref m) if m.contains("repeats")));
}

#[test]
fn test01_course_listing() {
    let db = course_db();
    assert_eq!(db.course_names(), vec!["Sunrise"]);
    assert_eq!(db.areas("Sunrise"), vec!["East", "West", "North"]);
    assert!(db.areas("Moonlight").is_empty());
}

#[test]
fn test01_bad_course_row_is_a_parse_error() {
    let err = read_course_database("course_name,area,hole,par,hcp\nSunrise,East,one,4,1\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
    assert!(!err.is_configuration());
}

#[test]
fn test01_roster_eligibility_flags() {
    let roster = read_roster(
        "name,handicap,champion,runnerup
Alice,10,yes,yes
Bob,12,no,yes
Cara,8,yes,no
Dan,20,,
"
        .as_bytes(),
    )
    .unwrap();
    assert_eq!(roster.len(), 4);

    let bob = roster.require(&"Bob".into()).unwrap();
    assert_eq!(bob.handicap, 12);
    assert!(bob.champion_ineligible);
    assert!(!bob.runnerup_ineligible);

    let cara = roster.require(&"Cara".into()).unwrap();
    assert!(!cara.champion_ineligible);
    assert!(cara.runnerup_ineligible);

    let dan = roster.require(&"Dan".into()).unwrap();
    assert!(!dan.champion_ineligible && !dan.runnerup_ineligible);

    assert!(matches!(
        roster.require(&"Eve".into()),
        Err(CoreError::UnknownPlayer(_))
    ));
}

#[test]
fn test01_roster_rejects_bad_flags_and_duplicates() {
    let err = read_roster("name,handicap,champion,runnerup\nAlice,10,maybe,yes\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, CoreError::Parse(ref m) if m.contains("maybe")));

    let err = read_roster(
        "name,handicap,champion,runnerup\nAlice,10,yes,yes\nAlice,12,yes,yes\n".as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Parse(ref m) if m.contains("duplicate")));
}
