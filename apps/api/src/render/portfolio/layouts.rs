//! Per-layout fragment sets: style sheet additions, about section and decoration.
//!
//! The page skeleton is the same for every layout; a layout only decides how
//! it looks and what sits around the shared sections.

use crate::render::portfolio::sections::stats_html;
use crate::render::portfolio::PortfolioConfig;
use crate::templates::PortfolioLayout;

pub struct LayoutFragments {
    pub title_suffix: &'static str,
    /// Class list for the skills, projects and contact sections.
    pub section_class: &'static str,
    pub styles: String,
    /// Empty when the about section is switched off.
    pub about: String,
    /// Extra elements placed right after `<body>`.
    pub decor: &'static str,
    pub script: &'static str,
}

pub fn fragments(config: &PortfolioConfig) -> LayoutFragments {
    match config.layout {
        PortfolioLayout::Minimal => LayoutFragments {
            title_suffix: "Portfolio",
            section_class: "section fade-in",
            styles: String::new(),
            about: about_section(config, "section fade-in", "About Me", &about_text(config)),
            decor: "",
            script: "",
        },
        PortfolioLayout::Creative => LayoutFragments {
            title_suffix: "Creative Portfolio",
            section_class: "section",
            styles: CREATIVE_STYLES.to_string(),
            about: creative_about(config),
            decor: "",
            script: "",
        },
        PortfolioLayout::Terminal => LayoutFragments {
            title_suffix: "Tech Portfolio",
            section_class: "section",
            styles: TERMINAL_STYLES.to_string(),
            about: terminal_about(config),
            decor: "",
            script: "",
        },
        PortfolioLayout::Interactive => LayoutFragments {
            title_suffix: "Interactive Portfolio",
            section_class: "section",
            styles: INTERACTIVE_STYLES.to_string(),
            about: interactive_about(config),
            decor: INTERACTIVE_DECOR,
            script: INTERACTIVE_SCRIPT,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// About sections
// ────────────────────────────────────────────────────────────────────────────

fn about_text(config: &PortfolioConfig) -> String {
    format!(
        r#"
                <div class="about-text">
                    <p>{}</p>
                </div>"#,
        config.about
    )
}

fn about_section(config: &PortfolioConfig, class: &str, title: &str, inner: &str) -> String {
    if !config.show_about {
        return String::new();
    }
    format!(
        r#"
    <section id="about" class="{class}">
        <div class="container">
            <h2 class="section-title">{title}</h2>
            <div class="about-content">{inner}{stats}
            </div>
        </div>
    </section>"#,
        stats = stats_html(config)
    )
}

fn creative_about(config: &PortfolioConfig) -> String {
    if !config.show_about {
        return String::new();
    }
    format!(
        r#"
    <section id="about" class="section">
        <div class="morph-shape"></div>
        <div class="container">
            <h2 class="section-title glow-text">About Me</h2>
            <div class="about-content">{text}
                <div class="about-visual">
                    <div class="floating-element"></div>
                </div>{stats}
            </div>
        </div>
    </section>"#,
        text = about_text(config),
        stats = stats_html(config)
    )
}

fn terminal_about(config: &PortfolioConfig) -> String {
    let terminal = format!(
        r#"
                <div class="terminal">
                    <div class="terminal-header">
                        <div class="terminal-buttons">
                            <div class="terminal-button close"></div>
                            <div class="terminal-button minimize"></div>
                            <div class="terminal-button maximize"></div>
                        </div>
                        <div class="terminal-title">about.sh</div>
                    </div>
                    <div class="terminal-body">
                        <div class="terminal-line">
                            <span class="terminal-prompt">$</span>
                            <span class="terminal-command">cat about.txt</span>
                        </div>
                        <div class="terminal-output">
                            <p>{about}</p>
                        </div>
                        <div class="terminal-line">
                            <span class="terminal-prompt">$</span>
                            <span class="terminal-cursor"></span>
                        </div>
                    </div>
                </div>"#,
        about = config.about
    );
    about_section(config, "section", "&gt; About Me", &terminal)
}

fn interactive_about(config: &PortfolioConfig) -> String {
    let inner = format!(
        r#"{text}
                <div class="about-visual">
                    <div class="interactive-element">
                        <div class="interactive-element-face front"></div>
                        <div class="interactive-element-face back"></div>
                    </div>
                </div>"#,
        text = about_text(config)
    );
    about_section(config, "section", "About Me", &inner)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared style sheet
// ────────────────────────────────────────────────────────────────────────────

/// Style rules every layout starts from, parameterised by the config.
pub fn base_styles(config: &PortfolioConfig) -> String {
    let font_import = config.font.import_statement().unwrap_or("");
    let particles_display = if config.show_particles { "" } else { "display: none;" };
    let nav_display = if config.show_nav { "" } else { "display: none;" };

    format!(
        r#"
        {font_import}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        :root {{
            --primary: {primary};
            --secondary: {secondary};
            --accent: {accent};
        }}

        [data-theme="dark"] {{
            --bg-primary: #0f172a;
            --bg-secondary: #1e293b;
            --text-primary: #f8fafc;
            --text-secondary: rgba(248, 250, 252, 0.8);
            --card-bg: rgba(255, 255, 255, 0.05);
            --border-color: rgba(255, 255, 255, 0.1);
        }}

        [data-theme="light"] {{
            --bg-primary: #ffffff;
            --bg-secondary: #f8fafc;
            --text-primary: #0f172a;
            --text-secondary: #475569;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
        }}

        body {{
            {font_family}
            background: var(--bg-primary);
            color: var(--text-primary);
            overflow-x: hidden;
            scroll-behavior: smooth;
            transition: background 0.3s ease, color 0.3s ease;
        }}

        .theme-toggle {{
            position: fixed;
            top: 1.5rem;
            right: 1.5rem;
            z-index: 1001;
            width: 50px;
            height: 50px;
            border-radius: 50%;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            border: none;
            cursor: pointer;
            font-size: 1.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            transition: all 0.3s ease;
        }}

        .theme-toggle:hover {{
            transform: scale(1.1) rotate(20deg);
        }}

        #particles-js {{
            position: fixed;
            width: 100%;
            height: 100%;
            z-index: -1;
            {particles_display}
        }}

        [data-theme="light"] #particles-js {{
            opacity: 0.3;
        }}

        nav {{
            position: fixed;
            top: 0;
            width: 100%;
            background: var(--card-bg);
            backdrop-filter: blur(10px);
            opacity: {nav_opacity};
            padding: 1.5rem 0;
            z-index: 1000;
            border-bottom: 1px solid var(--border-color);
            {nav_display}
        }}

        nav .container {{
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}

        nav .logo {{
            font-size: {logo_size}rem;
            font-weight: 800;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }}

        nav .nav-links {{
            display: flex;
            gap: 2rem;
            list-style: none;
        }}

        nav a {{
            color: var(--text-secondary);
            text-decoration: none;
            font-weight: 500;
        }}

        .hero {{
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: {hero_align};
            padding: 2rem;
        }}

        .hero-content .greeting {{
            font-size: 1.3rem;
            color: var(--primary);
            margin-bottom: 1rem;
        }}

        .hero-content h1 {{
            font-size: {hero_size}rem;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            margin-bottom: 1rem;
            animation: fadeInUp 0.8s ease-out;
        }}

        .hero-content .tagline,
        .hero-content .description {{
            color: var(--text-secondary);
            margin-bottom: 2rem;
            animation: fadeInUp 0.8s ease-out 0.2s backwards;
        }}

        .hero-content .tagline {{
            font-size: 1.5rem;
        }}

        .btn {{
            padding: 1rem 2rem;
            border-radius: {button_radius}px;
            font-weight: 600;
            text-decoration: none;
            display: inline-block;
            margin: 0.5rem;
            transition: all 0.3s ease;
        }}

        .btn-primary {{
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            color: white;
        }}

        .btn-secondary {{
            border: 2px solid var(--primary);
            color: var(--primary);
        }}

        .btn:hover {{
            transform: translateY(-3px);
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 2rem;
        }}

        .section {{
            padding: 5rem 0;
            position: relative;
        }}

        .section-title {{
            font-size: 2.5rem;
            text-align: center;
            margin-bottom: 3rem;
            color: var(--primary);
        }}

        .about-content {{
            display: grid;
            grid-template-columns: {about_layout};
            gap: 3rem;
            align-items: center;
        }}

        .about-text {{
            font-size: 1.1rem;
            line-height: 1.7;
        }}

        .about-stats {{
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
        }}

        .stat-card, .skill-card, .project-card {{
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: {card_radius}px;
            transition: all 0.3s ease;
        }}

        .stat-card:hover, .skill-card:hover, .project-card:hover {{
            transform: translateY(-{hover_lift}px);
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
        }}

        .stat-card {{
            padding: 1.5rem;
            text-align: center;
        }}

        .stat-number {{
            font-size: 2rem;
            font-weight: 700;
            color: var(--primary);
            margin-bottom: 0.5rem;
        }}

        .stat-label {{
            color: var(--text-secondary);
        }}

        .skills-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 2rem;
        }}

        .skill-card {{
            padding: 2rem;
        }}

        .skill-card h3, .project-content h3 {{
            margin-bottom: 1rem;
            color: var(--primary);
        }}

        .skill-tags, .project-tech {{
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
        }}

        .project-tech {{
            margin-top: 1rem;
        }}

        .skill-tag, .tech-badge {{
            background: rgba(99, 102, 241, 0.1);
            color: var(--primary);
            padding: 0.3rem 0.8rem;
            border-radius: 20px;
            font-size: 0.9rem;
        }}

        .projects-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
            gap: 2rem;
        }}

        .project-card {{
            overflow: hidden;
        }}

        .project-image {{
            height: 200px;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 3rem;
        }}

        .project-content {{
            padding: 1.5rem;
        }}

        .contact-content {{
            text-align: center;
            max-width: 600px;
            margin: 0 auto;
        }}

        .contact-content p {{
            font-size: 1.1rem;
            margin-bottom: 2rem;
        }}

        .contact-info {{
            font-size: 1.2rem;
            margin-bottom: 2rem;
        }}

        .social-links {{
            display: flex;
            justify-content: center;
            gap: 1rem;
            font-size: 1.5rem;
        }}

        .social-links a {{
            color: var(--primary);
            text-decoration: none;
        }}

        @keyframes fadeInUp {{
            from {{ opacity: 0; transform: translateY(30px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}

        .fade-in {{
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }}

        .fade-in.visible {{
            opacity: 1;
            transform: translateY(0);
        }}

        @media (max-width: 768px) {{
            .about-content {{
                grid-template-columns: 1fr;
            }}

            nav .nav-links {{
                display: none;
            }}
        }}
"#,
        primary = config.colors.primary,
        secondary = config.colors.secondary,
        accent = config.colors.accent,
        font_family = config.font.font_family(),
        nav_opacity = config.nav_opacity,
        logo_size = config.logo_size_rem,
        hero_align = config.hero_align.as_css(),
        hero_size = config.hero_title_size_rem,
        button_radius = config.button_radius_px,
        about_layout = config.about_layout,
        card_radius = config.card_radius_px,
        hover_lift = config.hover_lift_px,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Layout style sheets and decoration
// ────────────────────────────────────────────────────────────────────────────

const CREATIVE_STYLES: &str = r#"
        .morph-shape {
            position: absolute;
            top: 10%;
            right: 10%;
            width: 300px;
            height: 300px;
            border-radius: 60% 40% 30% 70% / 60% 30% 70% 40%;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            opacity: 0.1;
            animation: morph 8s ease-in-out infinite;
            z-index: -1;
        }

        .floating-element {
            width: 100px;
            height: 100px;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            border-radius: 50%;
            position: relative;
            animation: float 6s ease-in-out infinite;
        }

        .glow-text {
            text-shadow: 0 0 10px rgba(255, 255, 255, 0.5),
                         0 0 20px rgba(255, 255, 255, 0.3),
                         0 0 30px rgba(255, 255, 255, 0.2);
        }

        @keyframes morph {
            0% { border-radius: 60% 40% 30% 70% / 60% 30% 70% 40%; }
            50% { border-radius: 30% 60% 70% 40% / 50% 60% 30% 60%; }
            100% { border-radius: 60% 40% 30% 70% / 60% 30% 70% 40%; }
        }

        @keyframes float {
            0% { transform: translateY(0px); }
            50% { transform: translateY(-20px); }
            100% { transform: translateY(0px); }
        }
"#;

const TERMINAL_STYLES: &str = r#"
        :root {
            --terminal-bg: #161b22;
            --terminal-text: #c9d1d9;
            --terminal-prompt: #50fa7b;
            --terminal-cursor: #f8f8f0;
        }

        [data-theme="dark"] body {
            background: #0d1117;
            color: #c9d1d9;
        }

        .terminal {
            background: var(--terminal-bg);
            border-radius: 8px;
            overflow: hidden;
            margin-bottom: 2rem;
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
        }

        .terminal-header {
            background: #21262d;
            padding: 0.5rem 1rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }

        .terminal-buttons {
            display: flex;
            gap: 0.5rem;
        }

        .terminal-button {
            width: 12px;
            height: 12px;
            border-radius: 50%;
        }

        .terminal-button.close { background: #ff5f56; }
        .terminal-button.minimize { background: #ffbd2e; }
        .terminal-button.maximize { background: #27c93f; }

        .terminal-title, .terminal-body {
            color: var(--terminal-text);
            font-family: 'Fira Code', monospace;
        }

        .terminal-body {
            padding: 1rem;
        }

        .terminal-line {
            display: flex;
            margin-bottom: 0.5rem;
        }

        .terminal-prompt {
            color: var(--terminal-prompt);
            margin-right: 0.5rem;
        }

        .terminal-output {
            margin-top: 0.5rem;
            white-space: pre-wrap;
        }

        .terminal-cursor {
            display: inline-block;
            width: 10px;
            height: 1.2em;
            background: var(--terminal-cursor);
            animation: blink 1s infinite;
        }

        @keyframes blink {
            0%, 50% { opacity: 1; }
            51%, 100% { opacity: 0; }
        }
"#;

const INTERACTIVE_STYLES: &str = r#"
        body {
            perspective: 1000px;
        }

        .cursor-follower {
            position: fixed;
            width: 24px;
            height: 24px;
            border: 2px solid var(--primary);
            border-radius: 50%;
            pointer-events: none;
            z-index: 2000;
            transform: translate(-50%, -50%);
            transition: width 0.2s ease, height 0.2s ease;
        }

        .parallax-layer {
            position: fixed;
            width: 400px;
            height: 400px;
            border-radius: 50%;
            background: radial-gradient(circle, var(--accent), transparent 70%);
            opacity: 0.15;
            z-index: -1;
        }

        .parallax-layer.one { top: 10%; left: -100px; }
        .parallax-layer.two { top: 60%; right: -100px; }

        .skill-card, .project-card {
            transform-style: preserve-3d;
        }

        .interactive-element {
            width: 300px;
            height: 300px;
            margin: 0 auto;
            position: relative;
            transform-style: preserve-3d;
            animation: rotate3d 20s infinite linear;
        }

        .interactive-element-face {
            position: absolute;
            width: 300px;
            height: 300px;
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            opacity: 0.7;
            border: 2px solid var(--primary);
        }

        .interactive-element-face.front { transform: translateZ(150px); }
        .interactive-element-face.back { transform: rotateY(180deg) translateZ(150px); }

        @keyframes rotate3d {
            from { transform: rotateX(0deg) rotateY(0deg); }
            to { transform: rotateX(360deg) rotateY(360deg); }
        }

        @media (max-width: 768px) {
            .interactive-element {
                width: 200px;
                height: 200px;
            }
        }
"#;

const INTERACTIVE_DECOR: &str = r#"
    <div class="cursor-follower"></div>
    <div class="parallax-layer one" data-speed="0.2"></div>
    <div class="parallax-layer two" data-speed="0.4"></div>"#;

const INTERACTIVE_SCRIPT: &str = r#"
<script>
    const follower = document.querySelector('.cursor-follower');
    document.addEventListener('mousemove', (e) => {
        follower.style.left = e.clientX + 'px';
        follower.style.top = e.clientY + 'px';
    });

    window.addEventListener('scroll', () => {
        document.querySelectorAll('.parallax-layer').forEach(layer => {
            const speed = parseFloat(layer.dataset.speed);
            layer.style.transform = `translateY(${window.scrollY * speed}px)`;
        });
    });

    document.querySelectorAll('.skill-card, .project-card').forEach(card => {
        card.addEventListener('mousemove', (e) => {
            const rect = card.getBoundingClientRect();
            const x = (e.clientX - rect.left) / rect.width - 0.5;
            const y = (e.clientY - rect.top) / rect.height - 0.5;
            card.style.transform = `rotateY(${x * 12}deg) rotateX(${-y * 12}deg)`;
        });
        card.addEventListener('mouseleave', () => {
            card.style.transform = '';
        });
    });
</script>"#;
