use serde::{Deserialize, Serialize};

use crate::profile::CandidateProfile;

const REQUIRED_WEIGHT: f64 = 70.0;
const OPTIONAL_WEIGHT: f64 = 30.0;

pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "email",
    "phone",
    "education",
    "target_role",
    "technical_skills",
];

pub const OPTIONAL_FIELDS: [&str; 6] = [
    "experiences",
    "projects",
    "certifications",
    "achievements",
    "linkedin",
    "github",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletenessReport {
    pub score: u8,
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
}

/// Required fields count when they hold non-whitespace text.
fn required_filled(profile: &CandidateProfile) -> [bool; 6] {
    [
        !profile.name.trim().is_empty(),
        !profile.email.trim().is_empty(),
        !profile.phone.trim().is_empty(),
        profile.primary_education().is_some(),
        !profile.target_role.trim().is_empty(),
        !profile.technical_skills.trim().is_empty(),
    ]
}

/// Optional fields count when present at all; whitespace-only text still counts.
fn optional_filled(profile: &CandidateProfile) -> [bool; 6] {
    [
        !profile.experiences.is_empty(),
        !profile.projects.is_empty(),
        !profile.certifications.is_empty(),
        !profile.achievements.is_empty(),
        !profile.linkedin.is_empty(),
        !profile.github.is_empty(),
    ]
}

/// Profile fill level in `[0, 100]`.
///
/// Required fields carry 70% and optional fields 30%, each proportional to how
/// many of their six fields are filled. The sum is truncated.
pub fn completeness(profile: &CandidateProfile) -> u8 {
    let required = required_filled(profile).iter().filter(|f| **f).count();
    let optional = optional_filled(profile).iter().filter(|f| **f).count();

    let required_score = (required as f64 / REQUIRED_FIELDS.len() as f64) * REQUIRED_WEIGHT;
    let optional_score = (optional as f64 / OPTIONAL_FIELDS.len() as f64) * OPTIONAL_WEIGHT;

    (required_score + optional_score) as u8
}

pub fn compute_completeness_report(profile: &CandidateProfile) -> CompletenessReport {
    let missing = |names: &[&str; 6], filled: [bool; 6]| -> Vec<String> {
        names
            .iter()
            .zip(filled)
            .filter(|(_, is_filled)| !is_filled)
            .map(|(name, _)| name.to_string())
            .collect()
    };

    CompletenessReport {
        score: completeness(profile),
        missing_required: missing(&REQUIRED_FIELDS, required_filled(profile)),
        missing_optional: missing(&OPTIONAL_FIELDS, optional_filled(profile)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{sample_profile, Education, Experience};

    #[test]
    fn test_full_profile_scores_100() {
        assert_eq!(completeness(&sample_profile()), 100);
    }

    #[test]
    fn test_empty_profile_scores_0() {
        assert_eq!(completeness(&CandidateProfile::default()), 0);
    }

    #[test]
    fn test_whitespace_required_fields_do_not_count() {
        let profile = CandidateProfile {
            name: "   ".to_string(),
            email: "\t".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 0);
    }

    #[test]
    fn test_whitespace_optional_fields_still_count() {
        let profile = CandidateProfile {
            linkedin: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 5);
    }

    #[test]
    fn test_partial_scores_truncate() {
        // 1/6 * 70 = 11.67 → 11
        let profile = CandidateProfile {
            name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 11);

        // 4/6 * 70 + 1/6 * 30 = 46.67 + 5 → 51
        let profile = CandidateProfile {
            name: "Ada".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            target_role: "Engineer".to_string(),
            github: "gh/ada".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 51);
    }

    #[test]
    fn test_education_needs_a_degree() {
        let mut profile = CandidateProfile {
            education_list: vec![Education {
                university: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 0);
        profile.education_list[0].degree = "BSc".to_string();
        assert_eq!(completeness(&profile), 11);
    }

    #[test]
    fn test_only_first_education_entry_counts() {
        let profile = CandidateProfile {
            education_list: vec![
                Education::default(),
                Education {
                    degree: "MSc".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(completeness(&profile), 0);
    }

    #[test]
    fn test_adding_fields_never_decreases_score() {
        let full = sample_profile();
        let mut profile = CandidateProfile::default();
        let mut previous = completeness(&profile);

        let steps: Vec<Box<dyn Fn(&mut CandidateProfile) + '_>> = vec![
            Box::new(|p: &mut CandidateProfile| p.github = full.github.clone()),
            Box::new(|p: &mut CandidateProfile| p.name = full.name.clone()),
            Box::new(|p: &mut CandidateProfile| p.experiences = vec![Experience::default()]),
            Box::new(|p: &mut CandidateProfile| p.email = full.email.clone()),
            Box::new(|p: &mut CandidateProfile| p.education_list = full.education_list.clone()),
            Box::new(|p: &mut CandidateProfile| p.achievements = full.achievements.clone()),
            Box::new(|p: &mut CandidateProfile| p.phone = full.phone.clone()),
            Box::new(|p: &mut CandidateProfile| p.projects = full.projects.clone()),
            Box::new(|p: &mut CandidateProfile| p.target_role = full.target_role.clone()),
            Box::new(|p: &mut CandidateProfile| p.certifications = full.certifications.clone()),
            Box::new(|p: &mut CandidateProfile| p.technical_skills = full.technical_skills.clone()),
            Box::new(|p: &mut CandidateProfile| p.linkedin = full.linkedin.clone()),
        ];

        for step in steps {
            step(&mut profile);
            let score = completeness(&profile);
            assert!(score >= previous, "{score} < {previous}");
            previous = score;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_report_lists_missing_fields() {
        let profile = CandidateProfile {
            name: "Ada".to_string(),
            github: "gh/ada".to_string(),
            ..Default::default()
        };
        let report = compute_completeness_report(&profile);
        assert_eq!(report.score, 16);
        assert_eq!(
            report.missing_required,
            vec!["email", "phone", "education", "target_role", "technical_skills"]
        );
        assert!(!report.missing_optional.contains(&"github".to_string()));
        assert_eq!(report.missing_optional.len(), 5);
    }
}
