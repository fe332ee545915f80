//! Eligibility Filter — which universities a student may reasonably apply to.

use crate::models::{StudentProfile, UniversityRecord};

/// Slack allowed below a university's published CGPA / IELTS minimum.
pub const THRESHOLD_GRACE: f64 = 0.5;

/// True when the student passes every eligibility condition for `university`:
/// - cgpa within grace of the minimum
/// - ielts within grace of the minimum
/// - budget covers the tuition fee
/// - the university's course contains the requested course (case-insensitive)
pub fn is_eligible(student: &StudentProfile, university: &UniversityRecord) -> bool {
    student.cgpa >= university.min_cgpa - THRESHOLD_GRACE
        && student.ielts >= university.min_ielts - THRESHOLD_GRACE
        && student.budget >= university.tuition_fee
        && university
            .course
            .to_lowercase()
            .contains(&student.course.to_lowercase())
}

/// Returns the eligible records, preserving input order.
pub fn filter_eligible<'a>(
    student: &StudentProfile,
    universities: &'a [UniversityRecord],
) -> Vec<&'a UniversityRecord> {
    universities
        .iter()
        .filter(|u| is_eligible(student, u))
        .collect()
}
