//! ROI Evaluator — salary uplift relative to tuition cost.
//!
//! Callers only pass records with positive fee and salary (see
//! `UniversityRecord::is_well_formed`), so every ratio here is finite.

use serde::{Deserialize, Serialize};

use crate::models::UniversityRecord;
use crate::recommendation::round_to;

const HIGH_ROI_ABOVE: f64 = 1.0;
const MEDIUM_ROI_ABOVE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiLevel {
    Low,
    Medium,
    High,
}

impl RoiLevel {
    /// High if roi > 1.0, Medium if roi > 0.5, else Low.
    pub fn from_roi(roi: f64) -> Self {
        if roi > HIGH_ROI_ABOVE {
            RoiLevel::High
        } else if roi > MEDIUM_ROI_ABOVE {
            RoiLevel::Medium
        } else {
            RoiLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiAssessment {
    /// (avg_salary − tuition_fee) / tuition_fee, 2 decimals
    pub roi: f64,
    pub level: RoiLevel,
    /// tuition_fee / avg_salary, 2 decimals
    pub break_even_years: f64,
}

pub fn evaluate(university: &UniversityRecord) -> RoiAssessment {
    let roi = (university.avg_salary - university.tuition_fee) / university.tuition_fee;
    let break_even_years = university.tuition_fee / university.avg_salary;

    RoiAssessment {
        roi: round_to(roi, 2),
        // level is decided on the unrounded ratio
        level: RoiLevel::from_roi(roi),
        break_even_years: round_to(break_even_years, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn university(tuition_fee: f64, avg_salary: f64) -> UniversityRecord {
        UniversityRecord {
            university_name: "X".to_string(),
            country: "Y".to_string(),
            course: "Computer Science".to_string(),
            min_cgpa: 7.0,
            min_ielts: 6.5,
            tuition_fee,
            avg_salary,
        }
    }

    #[test]
    fn test_reference_university_is_high_roi() {
        let roi = evaluate(&university(40_000.0, 90_000.0));
        assert_eq!(roi.roi, 1.25);
        assert_eq!(roi.level, RoiLevel::High);
        assert_eq!(roi.break_even_years, 0.44);
    }

    #[test]
    fn test_roi_of_exactly_one_is_medium() {
        let roi = evaluate(&university(40_000.0, 80_000.0));
        assert_eq!(roi.roi, 1.0);
        assert_eq!(roi.level, RoiLevel::Medium);
    }

    #[test]
    fn test_roi_of_exactly_half_is_low() {
        let roi = evaluate(&university(40_000.0, 60_000.0));
        assert_eq!(roi.roi, 0.5);
        assert_eq!(roi.level, RoiLevel::Low);
        assert_eq!(roi.break_even_years, 0.67);
    }

    #[test]
    fn test_salary_below_tuition_gives_negative_roi() {
        let roi = evaluate(&university(50_000.0, 30_000.0));
        assert_eq!(roi.roi, -0.4);
        assert_eq!(roi.level, RoiLevel::Low);
        assert_eq!(roi.break_even_years, 1.67);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(RoiLevel::from_roi(1.01), RoiLevel::High);
        assert_eq!(RoiLevel::from_roi(0.51), RoiLevel::Medium);
        assert_eq!(RoiLevel::from_roi(0.0), RoiLevel::Low);
    }
}
