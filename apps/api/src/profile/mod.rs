//! Candidate profile: the user's career data record driving every generated document.
//!
//! No field is required. A profile starts empty, is replaced wholesale whenever the
//! user edits it, and round-trips through the JSON interchange format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod completeness;
pub mod summary;

pub use completeness::{completeness, CompletenessReport};
pub use summary::CandidateSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub headline: String,
    pub education_list: Vec<Education>,
    pub target_role: String,
    pub target_industry: String,
    pub target_companies: String,
    /// Free-text selector value such as "3 years" or "Entry level".
    pub experience_level: String,
    /// Comma-separated.
    pub technical_skills: String,
    /// Comma-separated.
    pub soft_skills: String,
    pub languages: String,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    /// One certification per line.
    pub certifications: String,
    pub achievements: String,
    pub linkedin: String,
    pub github: String,
    pub tone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub university: String,
    pub grad_year: String,
    pub gpa: String,
    pub honors: String,
    pub coursework: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Comma-separated tech stack.
    pub tech: String,
    pub link: String,
    pub demo: String,
    pub highlights: String,
}

impl CandidateProfile {
    /// The first education entry, counted only when it names a degree.
    /// Later entries never stand in for a blank first one.
    pub fn primary_education(&self) -> Option<&Education> {
        self.education_list
            .first()
            .filter(|e| !e.degree.trim().is_empty())
    }

    pub fn technical_skill_list(&self) -> Vec<&str> {
        split_list(&self.technical_skills)
    }
}

/// Splits a comma-separated field into trimmed, non-blank items.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Serializes a profile as pretty-printed JSON (2-space indent).
pub fn serialize(profile: &CandidateProfile) -> Result<String> {
    serde_json::to_string_pretty(profile).context("Failed to serialize profile")
}

/// Parses a profile from JSON. Malformed input yields an empty profile.
pub fn deserialize(text: &str) -> CandidateProfile {
    match serde_json::from_str(text) {
        Ok(profile) => profile,
        Err(e) => {
            debug!("Ignoring malformed profile JSON: {e}");
            CandidateProfile::default()
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_profile() -> CandidateProfile {
    CandidateProfile {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        location: "London".to_string(),
        headline: "Analytical engine programmer".to_string(),
        education_list: vec![Education {
            degree: "BSc".to_string(),
            major: "Mathematics".to_string(),
            university: "University of London".to_string(),
            grad_year: "1835".to_string(),
            gpa: "4.0".to_string(),
            honors: String::new(),
            coursework: "Calculus, Logic".to_string(),
        }],
        target_role: "Software Engineer".to_string(),
        target_industry: "Technology".to_string(),
        target_companies: "Babbage & Co".to_string(),
        experience_level: "3 years".to_string(),
        technical_skills: "Rust, Python, SQL".to_string(),
        soft_skills: "Communication, Leadership".to_string(),
        languages: "English, French".to_string(),
        experiences: vec![Experience {
            title: "Engineer".to_string(),
            company: "Babbage & Co".to_string(),
            start_date: "2020".to_string(),
            end_date: "Present".to_string(),
            location: "London".to_string(),
            description: "Wrote the first published algorithm".to_string(),
        }],
        projects: vec![Project {
            name: "Bernoulli Numbers".to_string(),
            kind: "Academic".to_string(),
            description: "Computed Bernoulli numbers on the analytical engine".to_string(),
            tech: "Punch cards, Notes".to_string(),
            link: "https://example.com/notes".to_string(),
            demo: String::new(),
            highlights: String::new(),
        }],
        certifications: "Royal Society Fellow".to_string(),
        achievements: "First programmer".to_string(),
        linkedin: "linkedin.com/in/ada".to_string(),
        github: "github.com/ada".to_string(),
        tone: "Professional".to_string(),
    }
}
