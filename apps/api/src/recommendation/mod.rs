// University recommendation: eligibility filter → admission scoring + ROI → rank
// → optional narrative insight from the text-generation service.
// Everything except `insight` and `handlers` is pure arithmetic with no I/O.

pub mod eligibility;
pub mod handlers;
pub mod insight;
pub mod prompts;
pub mod ranker;
pub mod roi;
pub mod scoring;

/// Rounds half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
