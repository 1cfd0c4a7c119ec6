//! Section markup shared by every portfolio layout.

use crate::profile::split_list;
use crate::render::portfolio::{PortfolioConfig, PortfolioProject, ThemeMode};

pub const MAX_PROJECTS: usize = 6;
const MAX_TECHNICAL_SKILLS: usize = 8;
const MAX_SOFT_SKILLS: usize = 5;

pub fn skills_html(config: &PortfolioConfig) -> String {
    let categories = [
        ("Technical Skills", &config.technical_skills, MAX_TECHNICAL_SKILLS),
        ("Soft Skills", &config.soft_skills, MAX_SOFT_SKILLS),
    ];

    categories
        .iter()
        .map(|(category, raw, limit)| {
            let tags: String = raw
                .split(',')
                .take(*limit)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| format!(r#"<span class="skill-tag">{s}</span>"#))
                .collect();
            format!(
                r#"<div class="skill-card"><h3>{category}</h3><div class="skill-tags">{tags}</div></div>"#
            )
        })
        .collect()
}

pub fn projects_html(projects: &[PortfolioProject]) -> String {
    projects
        .iter()
        .take(MAX_PROJECTS)
        .map(|project| {
            let badges: String = split_list(&project.tech)
                .into_iter()
                .map(|t| format!(r#"<span class="tech-badge">{t}</span>"#))
                .collect();
            let name = if project.name.trim().is_empty() {
                "Project"
            } else {
                project.name.as_str()
            };
            format!(
                r#"
                    <div class="project-card">
                        <div class="project-image">💡</div>
                        <div class="project-content">
                            <h3>{name}</h3>
                            <p>{description}</p>
                            <div class="project-tech">{badges}</div>
                        </div>
                    </div>
                    "#,
                description = project.description
            )
        })
        .collect()
}

pub fn social_links_html(config: &PortfolioConfig) -> String {
    format!(
        r#"
                    <a href="https://{github}" target="_blank" title="GitHub">🐙</a>
                    <a href="https://{linkedin}" target="_blank" title="LinkedIn">💼</a>
                    <a href="mailto:{email}" title="Email">📧</a>
                "#,
        github = config.social.github,
        linkedin = config.social.linkedin,
        email = config.email
    )
}

pub fn stats_html(config: &PortfolioConfig) -> String {
    let hidden = if config.show_stats { "" } else { "display: none;" };
    format!(
        r#"
                <div class="about-stats" style="{hidden}">
                    <div class="stat-card">
                        <div class="stat-number">{projects}+</div>
                        <div class="stat-label">Projects</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-number">{skills}+</div>
                        <div class="stat-label">Technologies</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-number">{years}</div>
                        <div class="stat-label">Years</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-number">100%</div>
                        <div class="stat-label">Passion</div>
                    </div>
                </div>"#,
        projects = config.stats.projects,
        skills = config.stats.skills,
        years = config.stats.years
    )
}

pub fn nav_html(config: &PortfolioConfig) -> String {
    let about_link = if config.show_about {
        r##"<li><a href="#about">About</a></li>"##
    } else {
        ""
    };
    format!(
        r##"
    <nav>
        <div class="container">
            <div class="logo">{name}</div>
            <ul class="nav-links">
                <li><a href="#home">Home</a></li>
                {about_link}
                <li><a href="#skills">Skills</a></li>
                <li><a href="#projects">Projects</a></li>
                <li><a href="#contact">Contact</a></li>
            </ul>
        </div>
    </nav>"##,
        name = config.name
    )
}

pub fn hero_html(config: &PortfolioConfig) -> String {
    format!(
        r##"
    <section id="home" class="hero">
        <div class="hero-content">
            <div class="greeting">{greeting}</div>
            <h1>{name}</h1>
            <p class="tagline">{tagline}</p>
            <p class="description">{about}</p>
            <div>
                <a href="#projects" class="btn btn-primary">View Work →</a>
                <a href="#contact" class="btn btn-secondary">Contact</a>
            </div>
        </div>
    </section>"##,
        greeting = config.greeting_text,
        name = config.name,
        tagline = config.tagline,
        about = config.about
    )
}

/// Skills, projects and contact sections. `section_class` lets a layout add
/// its own animation class (e.g. `fade-in`).
pub fn body_sections_html(config: &PortfolioConfig, section_class: &str) -> String {
    format!(
        r#"
    <section id="skills" class="{section_class}">
        <div class="container">
            <h2 class="section-title">Skills & Expertise</h2>
            <div class="skills-grid">{skills}</div>
        </div>
    </section>

    <section id="projects" class="{section_class}">
        <div class="container">
            <h2 class="section-title">Featured Projects</h2>
            <div class="projects-grid">{projects}</div>
        </div>
    </section>

    <section id="contact" class="{section_class}">
        <div class="container">
            <h2 class="section-title">Let's Connect</h2>
            <div class="contact-content">
                <p>I'm always excited to collaborate on innovative projects!</p>
                <div class="contact-info">{email}</div>
                <div class="social-links">{social}</div>
            </div>
        </div>
    </section>"#,
        skills = skills_html(config),
        projects = projects_html(&config.projects),
        email = config.email,
        social = social_links_html(config)
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Scripts
// ────────────────────────────────────────────────────────────────────────────

pub const THEME_TOGGLE_BUTTON: &str = r#"
    <button id="themeToggle" class="theme-toggle" aria-label="Toggle theme">🌙</button>"#;

pub const THEME_TOGGLE_SCRIPT: &str = r#"
<script>
    const themeToggle = document.getElementById('themeToggle');
    const html = document.documentElement;
    const currentTheme = localStorage.getItem('theme') || 'dark';
    html.setAttribute('data-theme', currentTheme);

    if (themeToggle) {
        themeToggle.innerHTML = currentTheme === 'dark' ? '☀️' : '🌙';
        themeToggle.addEventListener('click', function() {
            const theme = html.getAttribute('data-theme');
            const newTheme = theme === 'dark' ? 'light' : 'dark';
            html.setAttribute('data-theme', newTheme);
            localStorage.setItem('theme', newTheme);
            this.innerHTML = newTheme === 'dark' ? '☀️' : '🌙';
        });
    }
</script>"#;

/// Smooth anchor scrolling plus `.visible` on `.fade-in` elements entering the viewport.
pub const SCROLL_SCRIPT: &str = r##"
<script>
    document.querySelectorAll('a[href^="#"]').forEach(anchor => {
        anchor.addEventListener('click', function (e) {
            e.preventDefault();
            const target = document.querySelector(this.getAttribute('href'));
            if (target) {
                target.scrollIntoView({ behavior: 'smooth' });
            }
        });
    });

    const observer = new IntersectionObserver((entries) => {
        entries.forEach(entry => {
            if (entry.isIntersecting) {
                entry.target.classList.add('visible');
            }
        });
    }, { root: null, rootMargin: '0px', threshold: 0.1 });

    document.querySelectorAll('.fade-in').forEach(el => observer.observe(el));
</script>"##;

pub fn particles_script(primary_color: &str) -> String {
    format!(
        r#"
<script src="https://cdn.jsdelivr.net/particles.js/2.0.0/particles.min.js"></script>
<script>
    particlesJS('particles-js', {{
        particles: {{
            number: {{ value: 80, density: {{ enable: true, value_area: 800 }} }},
            color: {{ value: '{primary_color}' }},
            shape: {{ type: 'circle' }},
            opacity: {{ value: 0.5 }},
            size: {{ value: 3, random: true }},
            line_linked: {{
                enable: true,
                distance: 150,
                color: '{primary_color}',
                opacity: 0.4,
                width: 1
            }},
            move: {{ enable: true, speed: 2 }}
        }},
        interactivity: {{
            events: {{
                onhover: {{ enable: true, mode: 'repulse' }},
                onclick: {{ enable: true, mode: 'push' }}
            }}
        }}
    }});
</script>"#
    )
}

/// Toggle control and its script; both empty unless the theme is user-selectable.
pub fn theme_toggle(theme: ThemeMode) -> (&'static str, &'static str) {
    match theme {
        ThemeMode::Toggle => (THEME_TOGGLE_BUTTON, THEME_TOGGLE_SCRIPT),
        ThemeMode::Dark | ThemeMode::Light => ("", ""),
    }
}
