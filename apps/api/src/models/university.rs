use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `universities` table. Read-only to this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UniversityRecord {
    pub university_name: String,
    pub country: String,
    pub course: String,
    pub min_cgpa: f64,
    pub min_ielts: f64,
    pub tuition_fee: f64,
    pub avg_salary: f64,
}

impl UniversityRecord {
    /// Records with non-positive fee or salary would make the ROI math
    /// non-finite, so they are refused at ingestion.
    pub fn is_well_formed(&self) -> bool {
        self.min_cgpa.is_finite()
            && self.min_ielts.is_finite()
            && self.tuition_fee.is_finite()
            && self.tuition_fee > 0.0
            && self.avg_salary.is_finite()
            && self.avg_salary > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tuition_fee: f64, avg_salary: f64) -> UniversityRecord {
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
    fn test_positive_fee_and_salary_is_well_formed() {
        assert!(record(40_000.0, 90_000.0).is_well_formed());
    }

    #[test]
    fn test_zero_fee_rejected() {
        assert!(!record(0.0, 90_000.0).is_well_formed());
    }

    #[test]
    fn test_zero_salary_rejected() {
        assert!(!record(40_000.0, 0.0).is_well_formed());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let mut r = record(40_000.0, 90_000.0);
        r.min_cgpa = f64::NAN;
        assert!(!r.is_well_formed());
    }
}
