//! Prompt builder: pure functions turning a profile into the text sent to the model.
//!
//! No I/O. Identical inputs always produce identical prompts; the cover-letter
//! date is passed in rather than read from the clock.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::generation::prompts::{
    CAREER_ADVICE_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE, RESUME_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill, or_default, or_na, NO_CODE_BLOCKS, PLAIN_TEXT_ONLY};
use crate::profile::{CandidateProfile, CandidateSummary};
use crate::templates::ResumeStyle;

/// Output budgets per operation, in tokens.
pub const RESUME_MAX_TOKENS: u32 = 3500;
pub const COVER_LETTER_MAX_TOKENS: u32 = 2000;
pub const CAREER_ADVICE_MAX_TOKENS: u32 = 3000;

/// Per-letter inputs that are not part of the stored profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoverLetterDetails {
    /// Falls back to the profile's target companies when blank.
    pub company: String,
    pub why_role: String,
    pub why_company: String,
    pub achievement: String,
}

pub fn resume_prompt(style: ResumeStyle, profile: &CandidateProfile) -> String {
    let summary = CandidateSummary::from_profile(profile);
    let role_keywords = or_default(&profile.target_role, "the target role");

    fill(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("style", style.display_name()),
            ("no_code_blocks", NO_CODE_BLOCKS),
            ("prompt_style", style.prompt_style()),
            ("name", or_na(&profile.name)),
            ("email", or_na(&profile.email)),
            ("phone", or_na(&profile.phone)),
            ("location", or_na(&profile.location)),
            ("linkedin", or_na(&profile.linkedin)),
            ("github", or_na(&profile.github)),
            ("target_role", or_na(&profile.target_role)),
            ("target_industry", or_na(&profile.target_industry)),
            ("experience_level", or_na(&profile.experience_level)),
            ("education", or_na(&summary.education)),
            ("gpa", or_na(&summary.gpa)),
            ("coursework", or_na(&summary.coursework)),
            ("technical_skills", or_na(&profile.technical_skills)),
            ("soft_skills", or_na(&profile.soft_skills)),
            ("languages", or_na(&profile.languages)),
            ("work_experience", or_na(&summary.work_experience)),
            ("projects", or_na(&summary.projects)),
            ("certifications", or_na(&profile.certifications)),
            ("achievements", or_na(&profile.achievements)),
            ("tone", or_default(&profile.tone, "Professional")),
            ("role_keywords", role_keywords),
            ("outline_name", or_default(&profile.name, "Full Name")),
            ("outline_location", or_default(&profile.location, "Location")),
            ("outline_email", or_default(&profile.email, "Email")),
            ("outline_phone", or_default(&profile.phone, "Phone")),
            ("outline_linkedin", or_default(&profile.linkedin, "LinkedIn URL")),
            ("outline_github", or_default(&profile.github, "GitHub URL")),
        ],
    )
}

pub fn cover_letter_prompt(
    profile: &CandidateProfile,
    details: &CoverLetterDetails,
    date: NaiveDate,
) -> String {
    let summary = CandidateSummary::from_profile(profile);
    let current_date = date.format("%B %d, %Y").to_string();
    let company = or_default(&details.company, &profile.target_companies);

    fill(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("plain_text_only", PLAIN_TEXT_ONLY),
            ("name", or_na(&profile.name)),
            ("email", or_na(&profile.email)),
            ("phone", or_na(&profile.phone)),
            ("linkedin", or_na(&profile.linkedin)),
            ("role", or_na(&profile.target_role)),
            ("company", or_na(company)),
            ("education", or_na(&summary.education)),
            ("skills", or_na(&profile.technical_skills)),
            ("why_role", or_na(&details.why_role)),
            ("why_company", or_na(&details.why_company)),
            ("achievement", or_na(&details.achievement)),
            ("tone", or_default(&profile.tone, "Professional")),
            ("current_date", &current_date),
        ],
    )
}

pub fn career_advice_prompt(profile: &CandidateProfile, question: &str) -> String {
    let summary = CandidateSummary::from_profile(profile);

    fill(
        CAREER_ADVICE_PROMPT_TEMPLATE,
        &[
            ("name", or_na(&profile.name)),
            ("education", or_na(&summary.education)),
            ("role", or_na(&profile.target_role)),
            ("experience_level", or_na(&profile.experience_level)),
            ("skills", or_na(&profile.technical_skills)),
            ("industry", or_na(&profile.target_industry)),
            ("question", question.trim()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::sample_profile;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_resume_prompt_names_style_and_guidance() {
        let prompt = resume_prompt(ResumeStyle::Academic, &sample_profile());
        assert!(prompt.starts_with(
            "You are an elite resume writer specializing in Academic/Research resumes."
        ));
        assert!(prompt.contains("Publications and citations section"));
        assert!(prompt.contains("1. Follow the Academic/Research template style exactly"));
        assert!(prompt.contains("Do NOT wrap output in code blocks"));
    }

    #[test]
    fn test_resume_prompt_interpolates_profile() {
        let prompt = resume_prompt(ResumeStyle::ModernProfessional, &sample_profile());
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Email: ada@example.com | Phone: +44 20 7946 0000"));
        assert!(prompt.contains("Education: BSc in Mathematics from University of London"));
        assert!(prompt.contains("**Engineer** at Babbage & Co (2020 - Present)"));
        assert!(prompt.contains("6. Include ATS keywords for Software Engineer"));
        assert!(prompt.contains("# Ada Lovelace\nLondon | ada@example.com"));
        assert!(prompt.contains("GPA: 4.0*"));
    }

    #[test]
    fn test_resume_prompt_uses_placeholders_for_empty_profile() {
        let prompt = resume_prompt(ResumeStyle::Minimalist, &CandidateProfile::default());
        assert!(prompt.contains("Name: N/A"));
        assert!(prompt.contains("Email: N/A | Phone: N/A"));
        assert!(prompt.contains("Tone: Professional"));
        assert!(prompt.contains("Include ATS keywords for the target role"));
        assert!(prompt.contains("# Full Name\nLocation | Email | Phone"));
        assert!(prompt.contains("No work experience yet"));
        assert!(!prompt.contains("{"));
    }

    #[test]
    fn test_resume_prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(
            resume_prompt(ResumeStyle::Startup, &profile),
            resume_prompt(ResumeStyle::Startup, &profile)
        );
    }

    #[test]
    fn test_cover_letter_prompt_structure() {
        let details = CoverLetterDetails {
            company: "Analytical Engines Ltd".to_string(),
            why_role: "I love computation".to_string(),
            why_company: String::new(),
            achievement: "Published the first algorithm".to_string(),
        };
        let prompt = cover_letter_prompt(&sample_profile(), &details, date());
        assert!(prompt.contains("March 07, 2025"));
        assert!(prompt.contains("Hiring Manager\nAnalytical Engines Ltd"));
        assert!(prompt.contains("Why Company: N/A"));
        assert!(prompt.contains("- 300-450 words total"));
        for part in ["**OPENING", "**YOUR BACKGROUND", "**YOUR VALUE", "**COMPANY FIT", "**CLOSING", "Sincerely,\nAda Lovelace"] {
            assert!(prompt.contains(part), "missing {part}");
        }
    }

    #[test]
    fn test_cover_letter_company_falls_back_to_target_companies() {
        let prompt = cover_letter_prompt(&sample_profile(), &CoverLetterDetails::default(), date());
        assert!(prompt.contains("Company: Babbage & Co"));
    }

    #[test]
    fn test_career_advice_prompt_sections() {
        let prompt = career_advice_prompt(&sample_profile(), "  How do I break into systems work?  ");
        assert!(prompt.contains("**QUESTION:**\nHow do I break into systems work?\n"));
        for section in ["## Direct Answer", "5. [Fifth specific action]", "- Month 4-6:", "- **Communities:**", "## Encouragement & Motivation"] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_user_braces_are_not_reinterpreted() {
        let profile = CandidateProfile {
            name: "{email}".to_string(),
            email: "x@y.z".to_string(),
            ..Default::default()
        };
        let prompt = resume_prompt(ResumeStyle::Creative, &profile);
        assert!(prompt.contains("Name: {email}"));
    }
}
