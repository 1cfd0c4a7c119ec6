//! Static template catalogue: resume styles, portfolio layouts, design presets
//! and the quick-fill presets for skills, achievements and advice questions.
//! Nothing here is mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::or_default;

// ────────────────────────────────────────────────────────────────────────────
// Resume styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStyle {
    #[default]
    ModernProfessional,
    AtsOptimized,
    Creative,
    Technical,
    Executive,
    Academic,
    Minimalist,
    Startup,
}

impl ResumeStyle {
    pub const ALL: [ResumeStyle; 8] = [
        ResumeStyle::ModernProfessional,
        ResumeStyle::AtsOptimized,
        ResumeStyle::Creative,
        ResumeStyle::Technical,
        ResumeStyle::Executive,
        ResumeStyle::Academic,
        ResumeStyle::Minimalist,
        ResumeStyle::Startup,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ResumeStyle::ModernProfessional => "Modern Professional",
            ResumeStyle::AtsOptimized => "ATS-Optimized",
            ResumeStyle::Creative => "Creative",
            ResumeStyle::Technical => "Technical/Engineering",
            ResumeStyle::Executive => "Executive/Senior",
            ResumeStyle::Academic => "Academic/Research",
            ResumeStyle::Minimalist => "Minimalist",
            ResumeStyle::Startup => "Startup/Entrepreneurial",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            ResumeStyle::ModernProfessional => "Most Popular",
            ResumeStyle::AtsOptimized => "ATS-Friendly",
            ResumeStyle::Creative => "Eye-Catching",
            ResumeStyle::Technical => "Tech-Focused",
            ResumeStyle::Executive => "Leadership",
            ResumeStyle::Academic => "Research",
            ResumeStyle::Minimalist => "Simple",
            ResumeStyle::Startup => "Growth-Minded",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResumeStyle::ModernProfessional => {
                "Clean, modern design with clear sections. Perfect for tech and corporate roles."
            }
            ResumeStyle::AtsOptimized => {
                "Maximized for Applicant Tracking Systems. Simple formatting, keyword-rich."
            }
            ResumeStyle::Creative => {
                "Stand-out design for creative fields like design, marketing, content creation."
            }
            ResumeStyle::Technical => {
                "Detail-oriented format for developers, engineers, and technical roles."
            }
            ResumeStyle::Executive => {
                "Leadership-focused format for senior positions and executives."
            }
            ResumeStyle::Academic => {
                "Comprehensive CV format for academia, research, and scientific positions."
            }
            ResumeStyle::Minimalist => "Ultra-clean, minimal design. Perfect for any industry.",
            ResumeStyle::Startup => {
                "Fast-paced, impact-focused format for startups and growth companies."
            }
        }
    }

    /// Style-guidance fragment injected into the resume prompt.
    pub fn prompt_style(self) -> &'static str {
        match self {
            ResumeStyle::ModernProfessional => {
                "Use a modern, clean format with:
- Clear section dividers with horizontal lines
- Bold company/project names
- Italicized dates and locations
- Concise bullet points (1-2 lines each)
- Professional summary at top
- Skills grouped by category"
            }
            ResumeStyle::AtsOptimized => {
                "Use ATS-optimized format with:
- Simple, linear structure (no columns/tables)
- Standard section headings (EXPERIENCE, EDUCATION, SKILLS)
- Keywords from job description prominently placed
- Plain text formatting (no graphics/icons)
- Contact info at top in simple format
- Reverse chronological order"
            }
            ResumeStyle::Creative => {
                "Use creative, engaging format with:
- Unique section names (e.g., \"My Journey\" instead of \"Experience\")
- Personality-driven language
- Story-telling approach
- Creative bullet point symbols (→, ★, ◆)
- Emphasis on portfolio/creative work
- Visual hierarchy with varied formatting"
            }
            ResumeStyle::Technical => {
                "Use technical format with:
- Detailed technical skills section with proficiency levels
- Project descriptions with tech stack details
- GitHub/technical portfolio links prominent
- Code/architecture achievements highlighted
- Certifications and technical training emphasized
- Metrics around system performance, scale, efficiency"
            }
            ResumeStyle::Executive => {
                "Use executive format with:
- Strong professional summary/executive profile
- Leadership achievements and business impact
- Strategic initiatives and organizational results
- Board memberships, publications, speaking engagements
- High-level metrics (revenue, team size, budget)
- Focus on vision and strategy over tactical details"
            }
            ResumeStyle::Academic => {
                "Use academic CV format with:
- Detailed education section with thesis/dissertation
- Publications and citations section
- Research experience with methodology details
- Grants, awards, and honors
- Conference presentations and talks
- Teaching experience and courses taught
- Academic service and committee work"
            }
            ResumeStyle::Minimalist => {
                "Use minimalist format with:
- Maximum white space
- Simple typography (one or two fonts)
- Minimal use of bold/italics
- Clean section breaks
- Concise descriptions (1 line when possible)
- Focus on impact over details
- Elegant simplicity"
            }
            ResumeStyle::Startup => {
                "Use startup-focused format with:
- Emphasis on rapid growth and scaling
- Startup/entrepreneurial experience highlighted
- Metrics around user growth, revenue, market share
- Scrappy, resourceful achievements
- Cross-functional capabilities
- Innovation and experimentation
- \"Wear many hats\" versatility"
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio layouts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioLayout {
    #[default]
    Minimal,
    Creative,
    Terminal,
    Interactive,
}

impl PortfolioLayout {
    pub const ALL: [PortfolioLayout; 4] = [
        PortfolioLayout::Minimal,
        PortfolioLayout::Creative,
        PortfolioLayout::Terminal,
        PortfolioLayout::Interactive,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            PortfolioLayout::Minimal => "Modern Minimal",
            PortfolioLayout::Creative => "Creative Portfolio",
            PortfolioLayout::Terminal => "Tech Professional",
            PortfolioLayout::Interactive => "Interactive Designer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PortfolioLayout::Minimal => {
                "Clean design with subtle animations and plenty of whitespace"
            }
            PortfolioLayout::Creative => {
                "Bold colors, creative layouts, and eye-catching animations"
            }
            PortfolioLayout::Terminal => "Dark theme with code snippets and terminal-style elements",
            PortfolioLayout::Interactive => {
                "3D elements, parallax scrolling, and interactive components"
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Design presets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorPreset::PurpleDream.colors()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreset {
    PurpleDream,
    OceanBlue,
    SunsetOrange,
    ForestGreen,
    RoseGold,
    CyberPurple,
}

impl ColorPreset {
    pub const ALL: [ColorPreset; 6] = [
        ColorPreset::PurpleDream,
        ColorPreset::OceanBlue,
        ColorPreset::SunsetOrange,
        ColorPreset::ForestGreen,
        ColorPreset::RoseGold,
        ColorPreset::CyberPurple,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ColorPreset::PurpleDream => "Purple Dream",
            ColorPreset::OceanBlue => "Ocean Blue",
            ColorPreset::SunsetOrange => "Sunset Orange",
            ColorPreset::ForestGreen => "Forest Green",
            ColorPreset::RoseGold => "Rose Gold",
            ColorPreset::CyberPurple => "Cyber Purple",
        }
    }

    pub fn colors(self) -> ColorScheme {
        let (primary, secondary, accent) = match self {
            ColorPreset::PurpleDream => ("#6366f1", "#764ba2", "#ec4899"),
            ColorPreset::OceanBlue => ("#0ea5e9", "#06b6d4", "#3b82f6"),
            ColorPreset::SunsetOrange => ("#f97316", "#fb923c", "#ef4444"),
            ColorPreset::ForestGreen => ("#10b981", "#059669", "#34d399"),
            ColorPreset::RoseGold => ("#ec4899", "#f43f5e", "#fb7185"),
            ColorPreset::CyberPurple => ("#a855f7", "#9333ea", "#c026d3"),
        };
        ColorScheme {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontPreset {
    #[default]
    Inter,
    Roboto,
    Poppins,
    FiraCode,
}

impl FontPreset {
    pub const ALL: [FontPreset; 4] = [
        FontPreset::Inter,
        FontPreset::Roboto,
        FontPreset::Poppins,
        FontPreset::FiraCode,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            FontPreset::Inter => "Modern (Inter)",
            FontPreset::Roboto => "Professional (Roboto)",
            FontPreset::Poppins => "Creative (Poppins)",
            FontPreset::FiraCode => "Tech (Fira Code)",
        }
    }

    /// `@import` statement that must precede the font-family declaration, if any.
    pub fn import_statement(self) -> Option<&'static str> {
        match self {
            FontPreset::Inter => None,
            FontPreset::Roboto => Some(
                "@import url('https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap');",
            ),
            FontPreset::Poppins => Some(
                "@import url('https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;600;700&display=swap');",
            ),
            FontPreset::FiraCode => Some(
                "@import url('https://fonts.googleapis.com/css2?family=Fira+Code:wght@300;400;500&display=swap');",
            ),
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            FontPreset::Inter => "font-family: 'Inter', sans-serif;",
            FontPreset::Roboto => "font-family: 'Roboto', sans-serif;",
            FontPreset::Poppins => "font-family: 'Poppins', sans-serif;",
            FontPreset::FiraCode => "font-family: 'Fira Code', monospace;",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Quick-fill presets
// ────────────────────────────────────────────────────────────────────────────

/// Starter skill lists for common roles, pasted into the profile's skill fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillPreset {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    UiUxDesigner,
    MarketingSpecialist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSet {
    pub technical_skills: &'static str,
    pub soft_skills: &'static str,
}

impl SkillPreset {
    pub const ALL: [SkillPreset; 5] = [
        SkillPreset::SoftwareEngineer,
        SkillPreset::DataScientist,
        SkillPreset::ProductManager,
        SkillPreset::UiUxDesigner,
        SkillPreset::MarketingSpecialist,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SkillPreset::SoftwareEngineer => "Software Engineer",
            SkillPreset::DataScientist => "Data Scientist",
            SkillPreset::ProductManager => "Product Manager",
            SkillPreset::UiUxDesigner => "UI/UX Designer",
            SkillPreset::MarketingSpecialist => "Marketing Specialist",
        }
    }

    pub fn skills(self) -> SkillSet {
        let (technical_skills, soft_skills) = match self {
            SkillPreset::SoftwareEngineer => (
                "Python, JavaScript, React, Node.js, SQL, Git, Docker, AWS, REST APIs, MongoDB",
                "Problem Solving, Team Collaboration, Agile Development, Code Review, Communication",
            ),
            SkillPreset::DataScientist => (
                "Python, R, TensorFlow, PyTorch, Pandas, NumPy, Scikit-learn, SQL, Tableau, Jupyter",
                "Statistical Analysis, Data Visualization, Research, Communication, Critical Thinking",
            ),
            SkillPreset::ProductManager => (
                "SQL, Google Analytics, JIRA, Figma, A/B Testing, Excel, Product Roadmapping",
                "Leadership, Stakeholder Management, Strategic Thinking, Communication, Prioritization",
            ),
            SkillPreset::UiUxDesigner => (
                "Figma, Adobe XD, Sketch, Photoshop, Illustrator, HTML/CSS, Prototyping, User Research",
                "Creativity, Empathy, Communication, Collaboration, Attention to Detail",
            ),
            SkillPreset::MarketingSpecialist => (
                "SEO, Google Ads, Facebook Ads, Google Analytics, HubSpot, Mailchimp, Content Marketing",
                "Creativity, Analytical Thinking, Communication, Project Management, Adaptability",
            ),
        };
        SkillSet {
            technical_skills,
            soft_skills,
        }
    }
}

/// Example achievement bullets for an experience entry's achievements field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementPreset {
    IncreasedPerformance,
    LedTeam,
    BuiltFeature,
    ReducedCost,
    ImprovedProcess,
}

impl AchievementPreset {
    pub const ALL: [AchievementPreset; 5] = [
        AchievementPreset::IncreasedPerformance,
        AchievementPreset::LedTeam,
        AchievementPreset::BuiltFeature,
        AchievementPreset::ReducedCost,
        AchievementPreset::ImprovedProcess,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AchievementPreset::IncreasedPerformance => "Increased Performance",
            AchievementPreset::LedTeam => "Led Team/Project",
            AchievementPreset::BuiltFeature => "Built Feature",
            AchievementPreset::ReducedCost => "Reduced Cost",
            AchievementPreset::ImprovedProcess => "Improved Process",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            AchievementPreset::IncreasedPerformance => {
                "• Optimized API response time by 40%, improving user experience for 10,000+ daily users\n\
                 • Increased system throughput by 60% through code optimization"
            }
            AchievementPreset::LedTeam => {
                "• Led cross-functional team of 5 to deliver project 2 weeks ahead of schedule\n\
                 • Managed end-to-end development of feature used by 50,000+ users"
            }
            AchievementPreset::BuiltFeature => {
                "• Built RESTful API serving 10,000+ requests/day with 99.9% uptime\n\
                 • Developed full-stack feature increasing user engagement by 25%"
            }
            AchievementPreset::ReducedCost => {
                "• Reduced server costs by $50K annually through infrastructure optimization\n\
                 • Decreased bug rate by 35% through implementing automated testing"
            }
            AchievementPreset::ImprovedProcess => {
                "• Streamlined deployment process, reducing release time from 2 hours to 15 minutes\n\
                 • Improved code review efficiency by 40% through implementing new tools"
            }
        }
    }
}

/// Canned career-advice questions. Two of them name the profile's target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePreset {
    InterviewTips,
    LearningRoadmap,
    ProfileReview,
}

/// Stands in for a blank target role inside a preset question.
pub const UNNAMED_ROLE: &str = "professional";

impl AdvicePreset {
    pub const ALL: [AdvicePreset; 3] = [
        AdvicePreset::InterviewTips,
        AdvicePreset::LearningRoadmap,
        AdvicePreset::ProfileReview,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AdvicePreset::InterviewTips => "Interview Tips",
            AdvicePreset::LearningRoadmap => "Learning Roadmap",
            AdvicePreset::ProfileReview => "Profile Review",
        }
    }

    /// The question text with `target_role` filled in.
    pub fn question(self, target_role: &str) -> String {
        let role = or_default(target_role, UNNAMED_ROLE);
        match self {
            AdvicePreset::InterviewTips => format!(
                "Give me 5 specific interview tips for a {role} position, including common \
                 questions and how to answer them effectively."
            ),
            AdvicePreset::LearningRoadmap => format!(
                "Create a detailed 6-month learning roadmap to become a {role}. Include \
                 specific skills, resources, and milestones."
            ),
            AdvicePreset::ProfileReview => "Review my profile and suggest 3-5 specific \
                improvements to make me more competitive in the job market."
                .to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalogue listing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: serde_json::Value,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PresetInfo<T: Serialize> {
    pub id: serde_json::Value,
    pub name: &'static str,
    pub value: T,
}

#[derive(Debug, Serialize)]
pub struct TemplateCatalogue {
    pub resume_styles: Vec<TemplateInfo>,
    pub portfolio_layouts: Vec<TemplateInfo>,
    pub color_presets: Vec<PresetInfo<ColorScheme>>,
    pub font_presets: Vec<PresetInfo<&'static str>>,
    pub skill_presets: Vec<PresetInfo<SkillSet>>,
    pub achievement_presets: Vec<PresetInfo<&'static str>>,
    /// Question text as sent for a profile with no target role.
    pub advice_presets: Vec<PresetInfo<String>>,
}

fn id_of<T: Serialize>(value: T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

pub fn catalogue() -> TemplateCatalogue {
    TemplateCatalogue {
        resume_styles: ResumeStyle::ALL
            .iter()
            .map(|s| TemplateInfo {
                id: id_of(s),
                name: s.display_name(),
                description: s.description(),
                badge: Some(s.badge()),
            })
            .collect(),
        portfolio_layouts: PortfolioLayout::ALL
            .iter()
            .map(|l| TemplateInfo {
                id: id_of(l),
                name: l.display_name(),
                description: l.description(),
                badge: None,
            })
            .collect(),
        color_presets: ColorPreset::ALL
            .iter()
            .map(|c| PresetInfo {
                id: id_of(c),
                name: c.display_name(),
                value: c.colors(),
            })
            .collect(),
        font_presets: FontPreset::ALL
            .iter()
            .map(|f| PresetInfo {
                id: id_of(f),
                name: f.display_name(),
                value: f.font_family(),
            })
            .collect(),
        skill_presets: SkillPreset::ALL
            .iter()
            .map(|p| PresetInfo {
                id: id_of(p),
                name: p.display_name(),
                value: p.skills(),
            })
            .collect(),
        achievement_presets: AchievementPreset::ALL
            .iter()
            .map(|p| PresetInfo {
                id: id_of(p),
                name: p.display_name(),
                value: p.text(),
            })
            .collect(),
        advice_presets: AdvicePreset::ALL
            .iter()
            .map(|p| PresetInfo {
                id: id_of(p),
                name: p.display_name(),
                value: p.question(""),
            })
            .collect(),
    }
}
