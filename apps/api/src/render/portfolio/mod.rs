//! Static portfolio site: one HTML document with inline CSS and JS.
//!
//! A single engine assembles the page; the chosen `PortfolioLayout` only
//! contributes its fragment set (see `layouts`). Inputs are interpolated
//! as given and are not HTML-escaped.

use serde::{Deserialize, Serialize};

use crate::profile::{split_list, summary::years_of_experience, CandidateProfile};
use crate::templates::{ColorScheme, FontPreset, PortfolioLayout};

mod layouts;
pub mod sections;

// ────────────────────────────────────────────────────────────────────────────
// Config types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Dark,
    Light,
    /// Starts dark; visitors switch with a stored preference.
    #[default]
    Toggle,
}

impl ThemeMode {
    pub fn initial_theme(self) -> &'static str {
        match self {
            ThemeMode::Dark | ThemeMode::Toggle => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
            ThemeMode::Toggle => "Toggle (User Choice)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroAlign {
    #[default]
    Center,
    Left,
}

impl HeroAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            HeroAlign::Center => "center",
            HeroAlign::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProject {
    pub name: String,
    pub description: String,
    /// Comma-separated.
    pub tech: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// Host and path without scheme, e.g. `github.com/jane`.
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioStats {
    pub projects: usize,
    pub skills: usize,
    pub years: String,
}

impl Default for PortfolioStats {
    fn default() -> Self {
        Self {
            projects: 0,
            skills: 0,
            years: "1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub greeting_text: String,
    pub colors: ColorScheme,
    pub font: FontPreset,
    pub hero_title_size_rem: f32,
    pub logo_size_rem: f32,
    pub hero_align: HeroAlign,
    /// CSS grid columns for the about section, e.g. `1fr 1fr`.
    pub about_layout: String,
    pub card_radius_px: u32,
    pub button_radius_px: u32,
    pub hover_lift_px: u32,
    pub nav_opacity: f32,
    pub show_about: bool,
    pub show_stats: bool,
    pub show_nav: bool,
    pub show_particles: bool,
    pub theme: ThemeMode,
    pub layout: PortfolioLayout,
    /// Comma-separated.
    pub technical_skills: String,
    /// Comma-separated.
    pub soft_skills: String,
    pub projects: Vec<PortfolioProject>,
    pub social: SocialLinks,
    pub stats: PortfolioStats,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            tagline: String::new(),
            about: String::new(),
            email: String::new(),
            greeting_text: "👋 Hello, I'm".to_string(),
            colors: ColorScheme::default(),
            font: FontPreset::default(),
            hero_title_size_rem: 6.0,
            logo_size_rem: 1.5,
            hero_align: HeroAlign::default(),
            about_layout: "1fr 1fr".to_string(),
            card_radius_px: 20,
            button_radius_px: 50,
            hover_lift_px: 10,
            nav_opacity: 0.8,
            show_about: true,
            show_stats: true,
            show_nav: true,
            show_particles: true,
            theme: ThemeMode::default(),
            layout: PortfolioLayout::default(),
            technical_skills: String::new(),
            soft_skills: String::new(),
            projects: Vec::new(),
            social: SocialLinks::default(),
            stats: PortfolioStats::default(),
        }
    }
}

impl PortfolioConfig {
    /// Content fields derived from a profile; design fields keep their defaults.
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        let role = profile.target_role.trim();
        let first_skill = profile
            .technical_skill_list()
            .first()
            .copied()
            .unwrap_or("technology");

        Self {
            name: profile.name.clone(),
            tagline: format!("{role} | Building innovative solutions"),
            about: format!(
                "Passionate {role} with expertise in {first_skill}. I love building products that make a difference."
            ),
            email: profile.email.clone(),
            technical_skills: profile.technical_skills.clone(),
            soft_skills: profile.soft_skills.clone(),
            projects: profile
                .projects
                .iter()
                .map(|p| PortfolioProject {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    tech: p.tech.clone(),
                })
                .collect(),
            social: SocialLinks {
                github: profile.github.clone(),
                linkedin: profile.linkedin.clone(),
            },
            stats: PortfolioStats {
                projects: profile.projects.len(),
                skills: split_list(&profile.technical_skills).len(),
                years: years_of_experience(&profile.experience_level),
            },
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the complete `index.html` document.
pub fn render_portfolio(config: &PortfolioConfig) -> String {
    let fragments = layouts::fragments(config);
    let (toggle_button, toggle_script) = sections::theme_toggle(config.theme);
    let particles = if config.show_particles {
        sections::particles_script(&config.colors.primary)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{initial_theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - {title_suffix}</title>
    <style>{base_styles}{layout_styles}    </style>
</head>
<body>
    <div id="particles-js"></div>{toggle_button}{decor}{nav}
{hero}
{about}
{sections}
{particles}{toggle_script}{scroll_script}{layout_script}
</body>
</html>
"#,
        initial_theme = config.theme.initial_theme(),
        name = config.name,
        title_suffix = fragments.title_suffix,
        base_styles = layouts::base_styles(config),
        layout_styles = fragments.styles,
        decor = fragments.decor,
        nav = sections::nav_html(config),
        hero = sections::hero_html(config),
        about = fragments.about,
        sections = sections::body_sections_html(config, fragments.section_class),
        scroll_script = sections::SCROLL_SCRIPT,
        layout_script = fragments.script,
    )
}

/// README shipped next to `index.html` in the download.
pub fn readme(name: &str, theme: ThemeMode, layout: PortfolioLayout) -> String {
    format!(
        r#"# {name}'s Portfolio

## 🌟 Features
- 🌓 Theme: {theme}
- 🎨 Template: {layout}
- 🎨 Responsive Design
- ⚡ Fast Loading
- 📱 Mobile Friendly
- ✨ Smooth Animations

## 🚀 Deploy

### Option 1: Netlify (Easiest)
1. Go to [netlify.com](https://netlify.com)
2. Drag and drop this folder
3. Your site is live!

### Option 2: Vercel
1. Go to [vercel.com](https://vercel.com)
2. Import from GitHub or upload files
3. Deploy instantly

### Option 3: GitHub Pages
1. Create a new repository
2. Upload files
3. Enable GitHub Pages in settings
4. Your portfolio is live at username.github.io

## 📝 Customization
Edit `index.html` to customize colors, content, and layout.

Created with AI Career Builder Pro 🚀
"#,
        theme = theme.display_name(),
        layout = layout.display_name()
    )
}
