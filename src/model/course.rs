use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::CoreError;

pub const HOLES_PER_ROUND: usize = 18;
pub const HOLES_PER_AREA: usize = 9;

/// One row of the course data source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    pub course_name: String,
    pub area: String,
    pub hole: u8,
    pub par: u8,
    pub hcp: u8,
}

#[derive(Clone, Debug, Default)]
pub struct CourseDatabase {
    records: Vec<CourseRecord>,
}

impl CourseDatabase {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    /// Course names in first-seen order.
    pub fn course_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for r in &self.records {
            if !names.contains(&r.course_name.as_str()) {
                names.push(&r.course_name);
            }
        }
        names
    }

    pub fn areas(&self, course_name: &str) -> Vec<&str> {
        let mut areas: Vec<&str> = Vec::new();
        for r in self.records.iter().filter(|r| r.course_name == course_name) {
            if !areas.contains(&r.area.as_str()) {
                areas.push(&r.area);
            }
        }
        areas
    }

    fn area_holes(&self, course_name: &str, area: &str) -> Vec<&CourseRecord> {
        let mut holes: Vec<&CourseRecord> = self
            .records
            .iter()
            .filter(|r| r.course_name == course_name && r.area == area)
            .collect();
        holes.sort_by_key(|r| r.hole);
        holes
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    /// Position in the round, 1..=18.
    pub number: u8,
    pub par: u8,
    /// Difficulty rank, 1 is the hardest hole.
    pub stroke_index: u8,
    pub area: String,
    pub area_hole: u8,
}

/// Front nine followed by back nine, fixed for the whole event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseSelection {
    pub course_name: String,
    pub front_area: String,
    pub back_area: String,
    holes: Vec<Hole>,
}

impl CourseSelection {
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.get(usize::from(number).checked_sub(1)?)
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}

/// Combine two areas of `course_name` into an 18-hole selection.
///
/// # Errors
///
/// Returns `CoreError::InvalidSelection` when both areas are the same, or
/// when an area has no holes, repeats a hole number or is not nine holes.
pub fn select_course(
    db: &CourseDatabase,
    course_name: &str,
    front_area: &str,
    back_area: &str,
) -> Result<CourseSelection, CoreError> {
    if front_area == back_area {
        return Err(CoreError::InvalidSelection(format!(
            "front and back area are both '{front_area}'"
        )));
    }

    let front = db.area_holes(course_name, front_area);
    let back = db.area_holes(course_name, back_area);
    for (area, holes) in [(front_area, &front), (back_area, &back)] {
        if holes.is_empty() {
            return Err(CoreError::InvalidSelection(format!(
                "area '{area}' has no holes on course '{course_name}'"
            )));
        }
        let unique: BTreeSet<u8> = holes.iter().map(|r| r.hole).collect();
        if unique.len() != holes.len() {
            return Err(CoreError::InvalidSelection(format!(
                "area '{area}' repeats a hole number"
            )));
        }
        if holes.len() != HOLES_PER_AREA {
            return Err(CoreError::InvalidSelection(format!(
                "area '{area}' has {} holes, expected {HOLES_PER_AREA}",
                holes.len()
            )));
        }
    }

    let holes = front
        .into_iter()
        .chain(back)
        .zip(1u8..)
        .map(|(r, number)| Hole {
            number,
            par: r.par,
            stroke_index: r.hcp,
            area: r.area.clone(),
            area_hole: r.hole,
        })
        .collect();

    Ok(CourseSelection {
        course_name: course_name.to_string(),
        front_area: front_area.to_string(),
        back_area: back_area.to_string(),
        holes,
    })
}
