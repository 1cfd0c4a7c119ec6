//! Prompt-facing view of a profile: the structured lists flattened into text blocks.

use crate::llm_client::prompts::{or_default, or_na};
use crate::profile::{CandidateProfile, Experience, Project};

const NO_EXPERIENCE: &str = "No work experience yet";
const NO_PROJECTS: &str = "No projects listed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSummary {
    pub work_experience: String,
    pub projects: String,
    /// "{degree} in {major} from {university}", empty without a degree.
    pub education: String,
    pub gpa: String,
    pub coursework: String,
}

impl CandidateSummary {
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        let (education, gpa, coursework) = match profile.primary_education() {
            Some(edu) => (
                format!(
                    "{} in {} from {}",
                    edu.degree.trim(),
                    or_na(&edu.major),
                    or_na(&edu.university)
                ),
                edu.gpa.clone(),
                edu.coursework.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            work_experience: experience_text(&profile.experiences),
            projects: project_text(&profile.projects),
            education,
            gpa,
            coursework,
        }
    }
}

fn experience_text(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return NO_EXPERIENCE.to_string();
    }
    experiences
        .iter()
        .filter(|e| !e.title.trim().is_empty())
        .map(|e| {
            format!(
                "**{}** at {} ({} - {})\n{}\n{}",
                e.title, e.company, e.start_date, e.end_date, e.location, e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn project_text(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }
    projects
        .iter()
        .filter(|p| !p.name.trim().is_empty())
        .map(|p| {
            format!(
                "**{}** ({}): {}\nTech Stack: {}\nLink: {}",
                p.name,
                or_default(&p.kind, "Personal"),
                p.description,
                p.tech,
                or_na(&p.link)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Years shown on portfolio stats: the first token of the experience-level
/// selector when it is a plain number, otherwise "1".
pub fn years_of_experience(experience_level: &str) -> String {
    match experience_level.split_whitespace().next() {
        Some(token) if token.chars().all(|c| c.is_ascii_digit()) => token.to_string(),
        _ => "1".to_string(),
    }
}
