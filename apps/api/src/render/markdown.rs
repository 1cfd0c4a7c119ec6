//! Line classifier: generated markdown-like text → ordered `Block`s.
//!
//! Prefix matching only, in priority order `# `, `## `, `### `, `- `/`• `.
//! This is not a markdown parser and is not meant to become one.

use crate::render::RenderError;

/// One visual element of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    SubHeading(String),
    /// Text after the bullet marker; the renderer draws the glyph.
    Bullet(String),
    Body(String),
    Spacer,
}

/// Inline tags the PDF path accepts. All are stripped; `<br/>` becomes a line break.
const ALLOWED_TAGS: [&str; 6] = ["b", "/b", "i", "/i", "u", "/u"];
const LINE_BREAK_TAGS: [&str; 3] = ["br/", "br /", "br"];

/// Removes fenced-code delimiters the model sometimes wraps output in, then trims.
pub fn clean_markdown(text: &str) -> String {
    text.replace("```markdown", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Classifies every line of `text` after `clean_markdown`.
pub fn classify_lines(text: &str) -> Vec<Block> {
    clean_markdown(text).lines().map(classify_line).collect()
}

pub fn classify_line(raw: &str) -> Block {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Block::Spacer;
    }

    // Emphasis markers are dropped wholesale, including stray single asterisks.
    let line = trimmed.replace("**", "").replace('*', "");

    if let Some(rest) = line.strip_prefix("# ") {
        Block::Title(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("## ") {
        Block::Heading(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("### ") {
        Block::SubHeading(rest.to_string())
    } else if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("• "))
    {
        Block::Bullet(rest.to_string())
    } else {
        Block::Body(line)
    }
}

/// Writes blocks back out as markdown text, one line per block.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Title(t) => format!("# {t}"),
            Block::Heading(t) => format!("## {t}"),
            Block::SubHeading(t) => format!("### {t}"),
            Block::Bullet(t) => format!("- {t}"),
            Block::Body(t) => t.clone(),
            Block::Spacer => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validates inline markup and returns the plain text to draw.
///
/// A `<` followed by a letter or `/` opens a tag; accepted tags are removed
/// (`<br/>` becomes `\n`). Any other tag, or a tag that never closes, is a
/// `RenderError::Markup`. Every other `<` or `>` is literal text (`a -> b`,
/// `< 100ms`).
pub fn strip_inline_markup(text: &str) -> Result<String, RenderError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if !opens_tag(after) {
            out.push('<');
            rest = after;
            continue;
        }
        let close = after
            .find('>')
            .ok_or_else(|| RenderError::Markup(format!("unclosed tag in {text:?}")))?;
        let tag = after[..close].trim().to_ascii_lowercase();
        if LINE_BREAK_TAGS.contains(&tag.as_str()) {
            out.push('\n');
        } else if !ALLOWED_TAGS.contains(&tag.as_str()) {
            return Err(RenderError::Markup(format!("unsupported tag <{tag}>")));
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(decode_entities(&out))
}

fn opens_tag(after_bracket: &str) -> bool {
    after_bracket
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/')
}

/// Escapes angle brackets so the line can be drawn as literal body text.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
