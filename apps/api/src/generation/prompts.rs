// All LLM prompt templates for the Generation module.
// Placeholders are `{name}` tokens filled by `llm_client::prompts::fill`.

/// Resume generation prompt.
/// Replace: {style}, {no_code_blocks}, {prompt_style}, every profile field,
///          {role_keywords}, and the outline placeholders {outline_*}.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an elite resume writer specializing in {style} resumes.

Create an EXCEPTIONAL resume in CLEAN MARKDOWN format.

{no_code_blocks}

**TEMPLATE STYLE:**
{prompt_style}

**CANDIDATE PROFILE:**
Name: {name}
Email: {email} | Phone: {phone}
Location: {location}
LinkedIn: {linkedin} | GitHub: {github}

Target Role: {target_role}
Industry: {target_industry}
Experience Level: {experience_level}

Education: {education}
GPA: {gpa}
Coursework: {coursework}

Technical Skills: {technical_skills}
Soft Skills: {soft_skills}
Languages: {languages}

Work Experience:
{work_experience}

Projects:
{projects}

Certifications: {certifications}
Achievements: {achievements}

Tone: {tone}

**REQUIREMENTS:**
1. Follow the {style} template style exactly
2. Use clean Markdown (# ## ### - *)
3. NO code blocks, NO tables
4. Every bullet point MUST have quantifiable metrics
5. Use powerful action verbs (Architected, Engineered, Optimized, Spearheaded)
6. Include ATS keywords for {role_keywords}
7. Keep concise and impactful
8. Optimize for both ATS and human readers

**STRUCTURE:**

# {outline_name}
{outline_location} | {outline_email} | {outline_phone}
LinkedIn: {outline_linkedin} | GitHub: {outline_github}

## PROFESSIONAL SUMMARY
[3-4 powerful lines]

## TECHNICAL SKILLS
- Programming Languages: [list]
- Frameworks & Libraries: [list]
- Tools & Platforms: [list]

## EXPERIENCE
### [Job Title] | [Company Name]
*[Dates] | [Location]*
- [Achievement with metrics]

## PROJECTS
### [Project Name]
*Technologies: [Stack]*
- [Description with impact]

## EDUCATION
### [Degree] in [Major]
*[University] | Graduated: [Date] | GPA: {gpa}*

## CERTIFICATIONS & ACHIEVEMENTS
- [Items]

**OUTPUT:** Plain markdown text only, no wrappers."#;

/// Cover letter prompt.
/// Replace: {plain_text_only}, {name}, {email}, {phone}, {linkedin}, {role}, {company},
///          {education}, {skills}, {why_role}, {why_company}, {achievement}, {tone}, {current_date}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert career counselor writing compelling cover letters.

{plain_text_only}

**DETAILS:**
Name: {name}
Role: {role}
Company: {company}
Education: {education}
Skills: {skills}
Why Role: {why_role}
Why Company: {why_company}
Achievement: {achievement}
Tone: {tone}

**STRUCTURE:**

{name}
{email} | {phone} | {linkedin}

{current_date}

Hiring Manager
{company}

Dear Hiring Manager,

**OPENING (3-4 sentences):**
[Hook that grabs attention. State the position.]

**YOUR BACKGROUND (4-5 sentences):**
[Your journey to this field. Relevant experiences. Genuine enthusiasm.]

**YOUR VALUE (4-5 sentences):**
[Top achievement using STAR method. Include technical details and metrics.]

**COMPANY FIT (3-4 sentences):**
[Why THIS company specifically. How you align with their mission. What excites you.]

**CLOSING (2-3 sentences):**
[Reiterate enthusiasm. Thank them. Express eagerness to discuss.]

Sincerely,
{name}

**REQUIREMENTS:**
- 300-450 words total
- Specific examples with metrics
- Show company research
- Authentic voice
- Zero typos

**OUTPUT:** Plain text, no code blocks."#;

/// Career advisor prompt.
/// Replace: {name}, {education}, {role}, {experience_level}, {skills}, {industry}, {question}
pub const CAREER_ADVICE_PROMPT_TEMPLATE: &str = r#"You are a senior career advisor with 20+ years of experience helping students and professionals.

**STUDENT PROFILE:**
Name: {name}
Education: {education}
Target Role: {role}
Experience Level: {experience_level}
Skills: {skills}
Industry: {industry}

**QUESTION:**
{question}

**YOUR RESPONSE SHOULD INCLUDE:**

## Direct Answer
[Provide clear, specific answer to their question]

## Actionable Steps
1. [First specific action]
2. [Second specific action]
3. [Third specific action]
4. [Fourth specific action]
5. [Fifth specific action]

## Timeline
- Week 1-2: [What to do]
- Week 3-4: [What to do]
- Month 2-3: [What to do]
- Month 4-6: [What to do]

## Resources
- **Online Courses:** [Specific recommendations]
- **Books:** [Specific titles]
- **Platforms:** [Specific websites/tools]
- **Communities:** [Where to network]

## Encouragement & Motivation
[Supportive, realistic advice that motivates them]

**TONE:** Be supportive, specific, and practical. Use examples when helpful."#;
