//! Admission scoring — a fixed-weight linear heuristic, not a calibrated probability.
//!
//! admission_chance = clamp(base + fit, 5, 95), rounded to 1 decimal, where
//! - base = (cgpa/10)·40 + (ielts/9)·25 + (gre/340)·20
//! - fit  = (cgpa − min_cgpa)·5 + (ielts − min_ielts)·3

use serde::{Deserialize, Serialize};

use crate::models::{StudentProfile, UniversityRecord};
use crate::recommendation::round_to;

const CGPA_SCALE: f64 = 10.0;
const IELTS_SCALE: f64 = 9.0;
const GRE_SCALE: f64 = 340.0;

const CGPA_WEIGHT: f64 = 40.0;
const IELTS_WEIGHT: f64 = 25.0;
const GRE_WEIGHT: f64 = 20.0;

/// Points per unit of margin above the university minimum.
const CGPA_MARGIN_WEIGHT: f64 = 5.0;
const IELTS_MARGIN_WEIGHT: f64 = 3.0;

pub const MIN_ADMISSION_CHANCE: f64 = 5.0;
pub const MAX_ADMISSION_CHANCE: f64 = 95.0;

/// Qualitative bucket from the CGPA margin over a university's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitCategory {
    /// cgpa ≥ min_cgpa + 1
    Safe,
    /// min_cgpa ≤ cgpa < min_cgpa + 1
    Moderate,
    /// cgpa < min_cgpa
    Ambitious,
}

/// University-independent part of the score.
pub fn base_score(student: &StudentProfile) -> f64 {
    (student.cgpa / CGPA_SCALE) * CGPA_WEIGHT
        + (student.ielts / IELTS_SCALE) * IELTS_WEIGHT
        + (f64::from(student.gre) / GRE_SCALE) * GRE_WEIGHT
}

/// Margin of the student over this university's minimums. Negative below the bar.
pub fn fit_score(student: &StudentProfile, university: &UniversityRecord) -> f64 {
    (student.cgpa - university.min_cgpa) * CGPA_MARGIN_WEIGHT
        + (student.ielts - university.min_ielts) * IELTS_MARGIN_WEIGHT
}

/// Percentage in [5, 95], rounded to one decimal.
pub fn admission_chance(student: &StudentProfile, university: &UniversityRecord) -> f64 {
    let raw = base_score(student) + fit_score(student, university);
    round_to(raw.clamp(MIN_ADMISSION_CHANCE, MAX_ADMISSION_CHANCE), 1)
}

pub fn categorize(student: &StudentProfile, university: &UniversityRecord) -> FitCategory {
    if student.cgpa >= university.min_cgpa + 1.0 {
        FitCategory::Safe
    } else if student.cgpa >= university.min_cgpa {
        FitCategory::Moderate
    } else {
        FitCategory::Ambitious
    }
}
