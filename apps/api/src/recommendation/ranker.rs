//! Ranker — scores every eligible university and keeps the top few by admission chance.
//!
//! Flow: filter_eligible → score (chance, category, ROI) → stable sort desc → truncate.

use serde::{Deserialize, Serialize};

use crate::models::{StudentProfile, UniversityRecord};
use crate::recommendation::eligibility::filter_eligible;
use crate::recommendation::roi::{self, RoiLevel};
use crate::recommendation::scoring::{admission_chance, categorize, FitCategory};

/// Maximum number of recommendations returned per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One ranked university, as returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub university_name: String,
    pub country: String,
    pub category: FitCategory,
    pub admission_chance: f64,
    pub roi: f64,
    pub roi_level: RoiLevel,
    pub break_even_years: f64,
}

pub fn score(student: &StudentProfile, university: &UniversityRecord) -> ScoredRecommendation {
    let roi = roi::evaluate(university);

    ScoredRecommendation {
        university_name: university.university_name.clone(),
        country: university.country.clone(),
        category: categorize(student, university),
        admission_chance: admission_chance(student, university),
        roi: roi.roi,
        roi_level: roi.level,
        break_even_years: roi.break_even_years,
    }
}

/// Sorts descending by admission chance and keeps the first `MAX_RECOMMENDATIONS`.
/// The sort is stable: equal chances keep their dataset order.
pub fn rank(mut scored: Vec<ScoredRecommendation>) -> Vec<ScoredRecommendation> {
    scored.sort_by(|a, b| b.admission_chance.total_cmp(&a.admission_chance));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

/// Full deterministic pipeline from profile + dataset to the ranked list.
/// An empty dataset or no eligible universities yields an empty list.
pub fn recommend(
    student: &StudentProfile,
    universities: &[UniversityRecord],
) -> Vec<ScoredRecommendation> {
    let scored = filter_eligible(student, universities)
        .into_iter()
        .map(|u| score(student, u))
        .collect();
    rank(scored)
}
