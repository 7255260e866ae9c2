use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::hash_map::Entry;

use crate::model::{COURSE_HOLES, GolfCourse, HoleInfo, PAR_MAX, PAR_MIN, SLOPE_MAX, SLOPE_MIN};

/// Two holes claiming the same stroke index. `first_hole_number` is the
/// hole that used the index first, in card order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IndexConflict {
    pub hole_number: i32,
    pub first_hole_number: i32,
    pub index: i32,
}

/// Reports every duplicated stroke index, not just the first. A hole at
/// position `i` conflicts when the first occurrence of its index sits at
/// some earlier position `j`.
#[must_use]
pub fn validate_hole_indexes(holes: &[HoleInfo]) -> Vec<IndexConflict> {
    let mut first_seen: AHashMap<i32, usize> = AHashMap::new();
    let mut conflicts = Vec::new();

    for (i, hole) in holes.iter().enumerate() {
        match first_seen.entry(hole.index) {
            Entry::Occupied(entry) => conflicts.push(IndexConflict {
                hole_number: hole.number,
                first_hole_number: holes[*entry.get()].number,
                index: hole.index,
            }),
            Entry::Vacant(entry) => {
                entry.insert(i);
            }
        }
    }

    conflicts
}

/// Field -> message map for the course form; an empty map means the course
/// is valid. Validation never throws: problems are returned values that
/// block submission.
#[must_use]
pub fn validate_course(course: &GolfCourse) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if course.name.trim().is_empty() {
        errors.insert("name".to_string(), "course name is required".to_string());
    }

    if course.holes.len() != COURSE_HOLES {
        errors.insert(
            "holes".to_string(),
            format!(
                "a course has exactly {COURSE_HOLES} holes, got {}",
                course.holes.len()
            ),
        );
    }

    for hole in &course.holes {
        if !(PAR_MIN..=PAR_MAX).contains(&hole.par) {
            errors.insert(
                format!("hole_{}_par", hole.number),
                format!("par must be {PAR_MIN} to {PAR_MAX}, got {}", hole.par),
            );
        }
        if !(1..=COURSE_HOLES as i32).contains(&hole.index) {
            errors.insert(
                format!("hole_{}_index", hole.number),
                format!("stroke index must be 1 to {COURSE_HOLES}, got {}", hole.index),
            );
        }
    }

    for conflict in validate_hole_indexes(&course.holes) {
        errors.insert(
            format!("hole_{}_index", conflict.hole_number),
            format!(
                "stroke index {} already used by hole {}",
                conflict.index, conflict.first_hole_number
            ),
        );
    }

    if course.tee_boxes.is_empty() {
        errors.insert(
            "tee_boxes".to_string(),
            "at least one tee box is required".to_string(),
        );
    }

    let mut seen_colors = AHashMap::new();
    for tee_box in &course.tee_boxes {
        if seen_colors.insert(tee_box.color, ()).is_some() {
            errors.insert(
                format!("tee_box_{}_color", tee_box.id),
                format!("tee color {} is already in use", tee_box.color.as_str()),
            );
        }
        for (label, slope) in [
            ("men_slope", tee_box.men_slope),
            ("women_slope", tee_box.women_slope),
        ] {
            if !(SLOPE_MIN..=SLOPE_MAX).contains(&slope) {
                errors.insert(
                    format!("tee_box_{}_{label}", tee_box.id),
                    format!("slope must be {SLOPE_MIN} to {SLOPE_MAX}, got {slope}"),
                );
            }
        }
    }

    errors
}
