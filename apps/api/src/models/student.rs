use serde::{Deserialize, Serialize};

/// A student's admission profile, built per request from `/recommend` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// 0 – 10
    pub cgpa: f64,
    /// 0 – 9
    pub ielts: f64,
    /// 0 – 340
    pub gre: u16,
    /// Currency units, same unit as `UniversityRecord::tuition_fee`.
    pub budget: f64,
    /// Trimmed, non-empty.
    pub course: String,
}
