// Prompt for the admission-analysis insight. Placeholders are filled by `build_insight_prompt`.

use crate::models::StudentProfile;
use crate::recommendation::ranker::ScoredRecommendation;

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"You are a professional overseas education consultant.

Generate a well-structured admission analysis report.

Formatting Rules (VERY IMPORTANT):
1. Start with a short 2–3 sentence overview paragraph.
2. Leave one blank line after the paragraph.
3. Then provide clearly formatted bullet points using "-".
4. Each bullet must start on a new line.
5. Keep total response under 120 words.
6. Keep tone professional and concise.
7. Do NOT write one long paragraph.

Student Profile:
CGPA: {cgpa}
IELTS: {ielts}
GRE: {gre}
Budget: {budget}
Course: {course}

Recommended Universities:
{universities}

Report Sections:
- Overall Assessment
- Key Strengths
- Potential Risks
- Financial / ROI Perspective
- Strategic Recommendation
"#;

pub fn build_insight_prompt(
    student: &StudentProfile,
    recommendations: &[ScoredRecommendation],
) -> String {
    let universities = recommendations
        .iter()
        .map(|r| {
            format!(
                "- {} ({}) | Admission Chance: {}% | ROI: {:?}",
                r.university_name, r.country, r.admission_chance, r.roi_level
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    INSIGHT_PROMPT_TEMPLATE
        .replace("{cgpa}", &student.cgpa.to_string())
        .replace("{ielts}", &student.ielts.to_string())
        .replace("{gre}", &student.gre.to_string())
        .replace("{budget}", &student.budget.to_string())
        .replace("{course}", &student.course)
        .replace("{universities}", &universities)
}
