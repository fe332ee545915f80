//! Axum route handler for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::StudentProfile;
use crate::recommendation::insight::insight_or_fallback;
use crate::recommendation::ranker::{recommend, ScoredRecommendation};
use crate::state::AppState;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw `/recommend` body. Numeric fields arrive as JSON numbers or as
/// numeric strings from HTML forms, so they are coerced in `into_profile`.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub cgpa: Option<Value>,
    #[serde(default)]
    pub ielts: Option<Value>,
    #[serde(default)]
    pub gre: Option<Value>,
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default)]
    pub course: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub total_found: usize,
    pub recommendations: Vec<ScoredRecommendation>,
    pub ai_insight: String,
}

impl RecommendRequest {
    /// Presence check first (missing, empty, non-numeric or zero ⇒ "All fields
    /// are required."), then per-field range checks.
    pub fn into_profile(self) -> Result<StudentProfile, AppError> {
        let required = || AppError::Validation(ALL_FIELDS_REQUIRED.to_string());

        let cgpa = coerce_number(self.cgpa.as_ref()).ok_or_else(required)?;
        let ielts = coerce_number(self.ielts.as_ref()).ok_or_else(required)?;
        let gre = coerce_number(self.gre.as_ref()).ok_or_else(required)?;
        let budget = coerce_number(self.budget.as_ref()).ok_or_else(required)?;
        let course = match &self.course {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(required()),
        };

        check_range("cgpa", cgpa, 0.0, 10.0)?;
        check_range("ielts", ielts, 0.0, 9.0)?;
        check_range("budget", budget, 0.0, f64::MAX)?;
        if !(0.0..=340.0).contains(&gre) || gre.fract() != 0.0 {
            return Err(AppError::Validation(
                "gre must be a whole number between 0 and 340.".to_string(),
            ));
        }

        Ok(StudentProfile {
            cgpa,
            ielts,
            gre: gre as u16,
            budget,
            course,
        })
    }
}

/// Number-like coercion: JSON numbers as-is, strings parsed after trimming.
/// Returns `None` for anything falsy (absent, null, blank, zero, NaN) or non-numeric.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n != 0.0 && !n.is_nan()).then_some(n)
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), AppError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else if max == f64::MAX {
        Err(AppError::Validation(format!(
            "{field} must be a non-negative number."
        )))
    } else {
        Err(AppError::Validation(format!(
            "{field} must be between {min} and {max}."
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /recommend
///
/// Fetches the university dataset, ranks the top matches for the student and
/// attaches a narrative insight (fallback text if the AI service fails).
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation(ALL_FIELDS_REQUIRED.to_string()))?;
    let student = request.into_profile()?;

    let universities = state
        .universities
        .list_universities()
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

    let recommendations = recommend(&student, &universities);
    info!(
        "Ranked {} of {} universities for course '{}'",
        recommendations.len(),
        universities.len(),
        student.course
    );

    let ai_insight = insight_or_fallback(
        state.insight.as_ref(),
        &student,
        &recommendations,
        state.config.insight_timeout,
    )
    .await;

    Ok(Json(RecommendResponse {
        total_found: recommendations.len(),
        recommendations,
        ai_insight,
    }))
}
