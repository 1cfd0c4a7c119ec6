//! PDF path: classified blocks → paginated US-letter document bytes.
//!
//! Layout is computed first as plain positioned text runs (no backend
//! involved), then replayed onto a `printpdf` document. Only the replay step
//! can fail for the whole document; markup problems are isolated per line.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Pt, Rgb};
use serde::Deserialize;
use tracing::debug;

use crate::render::font_metrics::FontFace;
use crate::render::markdown::{classify_lines, escape_markup, strip_inline_markup, Block};
use crate::render::RenderError;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (points)
// ────────────────────────────────────────────────────────────────────────────

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 54.0;
const CONTENT_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

/// Vertical gap for a blank line (0.1 in).
const SPACER_PT: f32 = 7.2;
/// Extra gap after the title (0.15 in).
const TITLE_SPACER_PT: f32 = 10.8;

const BULLET_GLYPH: &str = "•";

// ────────────────────────────────────────────────────────────────────────────
// Document kind
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    #[default]
    Resume,
    CoverLetter,
    Advice,
}

impl DocumentKind {
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover Letter",
            DocumentKind::Advice => "Career Advice",
        }
    }

    fn file_label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "CoverLetter",
            DocumentKind::Advice => "Career_Advice",
        }
    }

    /// Download filename, e.g. `Jane_Doe_CoverLetter.pdf`.
    pub fn filename(self, author_name: &str) -> String {
        self.filename_with_extension(author_name, "pdf")
    }

    /// Filename for the raw markdown offered alongside (or instead of) the PDF.
    pub fn markdown_filename(self, author_name: &str) -> String {
        self.filename_with_extension(author_name, "md")
    }

    fn filename_with_extension(self, author_name: &str, extension: &str) -> String {
        let name = author_name.trim();
        let name = if name.is_empty() { "Document" } else { name };
        format!("{}_{}.{extension}", name.replace(' ', "_"), self.file_label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block styles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy)]
struct BlockStyle {
    face: FontFace,
    size_pt: f32,
    leading_pt: f32,
    rgb: (u8, u8, u8),
    align: Align,
    left_indent_pt: f32,
    space_before_pt: f32,
    space_after_pt: f32,
}

const TITLE_STYLE: BlockStyle = BlockStyle {
    face: FontFace::HelveticaBold,
    size_pt: 24.0,
    leading_pt: 28.8,
    rgb: (0x63, 0x66, 0xf1),
    align: Align::Center,
    left_indent_pt: 0.0,
    space_before_pt: 0.0,
    space_after_pt: 12.0 + TITLE_SPACER_PT,
};

const HEADING_STYLE: BlockStyle = BlockStyle {
    face: FontFace::HelveticaBold,
    size_pt: 14.0,
    leading_pt: 16.8,
    rgb: (0x4f, 0x46, 0xe5),
    align: Align::Left,
    left_indent_pt: 0.0,
    space_before_pt: SPACER_PT + 12.0,
    space_after_pt: 6.0,
};

const SUBHEADING_STYLE: BlockStyle = BlockStyle {
    face: FontFace::HelveticaBold,
    size_pt: 12.0,
    leading_pt: 14.4,
    rgb: (0x1e, 0x29, 0x3b),
    align: Align::Left,
    left_indent_pt: 0.0,
    space_before_pt: 6.0,
    space_after_pt: 3.0,
};

const BODY_STYLE: BlockStyle = BlockStyle {
    face: FontFace::Helvetica,
    size_pt: 10.0,
    leading_pt: 14.0,
    rgb: (0x33, 0x41, 0x55),
    align: Align::Justify,
    left_indent_pt: 0.0,
    space_before_pt: 0.0,
    space_after_pt: 0.0,
};

const BULLET_STYLE: BlockStyle = BlockStyle {
    face: FontFace::Helvetica,
    size_pt: 10.0,
    leading_pt: 13.0,
    rgb: (0x47, 0x55, 0x69),
    align: Align::Left,
    left_indent_pt: 20.0,
    space_before_pt: 0.0,
    space_after_pt: 0.0,
};
const BULLET_INDENT_PT: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// One piece of text at a fixed position. `y_pt` is the baseline measured
/// from the bottom edge, as PDF coordinates are.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_pt: f32,
    pub y_pt: f32,
    pub size_pt: f32,
    pub face: FontFace,
    pub rgb: (u8, u8, u8),
}

struct Cursor {
    pages: Vec<Vec<TextRun>>,
    /// Distance from the top edge to the top of the next line.
    top_pt: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            top_pt: MARGIN_PT,
        }
    }

    fn advance(&mut self, gap_pt: f32) {
        if self.top_pt + gap_pt > PAGE_HEIGHT_PT - MARGIN_PT {
            self.new_page();
        } else {
            self.top_pt += gap_pt;
        }
    }

    /// Reserves one line of `leading_pt` and returns its baseline.
    fn next_line(&mut self, style: &BlockStyle) -> f32 {
        if self.top_pt + style.leading_pt > PAGE_HEIGHT_PT - MARGIN_PT {
            self.new_page();
        }
        let baseline_from_top = self.top_pt + style.size_pt;
        self.top_pt += style.leading_pt;
        PAGE_HEIGHT_PT - baseline_from_top
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.top_pt = MARGIN_PT;
    }

    fn push(&mut self, run: TextRun) {
        if let Some(page) = self.pages.last_mut() {
            page.push(run);
        }
    }
}

/// Lays out blocks into pages of positioned runs.
pub fn layout_blocks(blocks: &[Block]) -> Vec<Vec<TextRun>> {
    let mut cursor = Cursor::new();
    for block in blocks {
        if let Err(e) = layout_block(&mut cursor, block) {
            debug!("Falling back to escaped body text: {e}");
            let text = block_text(block).unwrap_or_default();
            let fallback = Block::Body(escape_markup(text));
            if let Err(e) = layout_block(&mut cursor, &fallback) {
                debug!("Dropping line that could not be laid out: {e}");
            }
        }
    }
    cursor.pages
}

fn block_text(block: &Block) -> Option<&str> {
    match block {
        Block::Title(t)
        | Block::Heading(t)
        | Block::SubHeading(t)
        | Block::Bullet(t)
        | Block::Body(t) => Some(t),
        Block::Spacer => None,
    }
}

fn layout_block(cursor: &mut Cursor, block: &Block) -> Result<(), RenderError> {
    let (style, raw) = match block {
        Block::Spacer => {
            cursor.advance(SPACER_PT);
            return Ok(());
        }
        Block::Title(t) => (&TITLE_STYLE, t),
        Block::Heading(t) => (&HEADING_STYLE, t),
        Block::SubHeading(t) => (&SUBHEADING_STYLE, t),
        Block::Bullet(t) => (&BULLET_STYLE, t),
        Block::Body(t) => (&BODY_STYLE, t),
    };

    let text = to_win_ansi(&strip_inline_markup(raw)?);
    let metrics = style.face.metrics();
    let x0 = MARGIN_PT + style.left_indent_pt;
    let width = CONTENT_WIDTH_PT - style.left_indent_pt;
    let lines = metrics.wrap(&text, style.size_pt, width);

    if style.space_before_pt > 0.0 {
        cursor.advance(style.space_before_pt);
    }

    for (i, line) in lines.iter().enumerate() {
        let y = cursor.next_line(style);

        if i == 0 && matches!(block, Block::Bullet(_)) {
            cursor.push(run(style, BULLET_GLYPH, MARGIN_PT + BULLET_INDENT_PT, y));
        }

        let line_width = metrics.width_pt(line, style.size_pt);
        let is_last = i + 1 == lines.len();
        match style.align {
            Align::Center => {
                let x = MARGIN_PT + (CONTENT_WIDTH_PT - line_width).max(0.0) / 2.0;
                cursor.push(run(style, line, x, y));
            }
            Align::Justify if !is_last => {
                for (word, x) in justify(line, style, x0, width) {
                    cursor.push(run(style, word, x, y));
                }
            }
            _ => cursor.push(run(style, line, x0, y)),
        }
    }

    if style.space_after_pt > 0.0 {
        cursor.advance(style.space_after_pt);
    }
    Ok(())
}

/// Spreads the words of a full line so it spans `width`.
fn justify<'a>(line: &'a str, style: &BlockStyle, x0: f32, width: f32) -> Vec<(&'a str, f32)> {
    let metrics = style.face.metrics();
    let words: Vec<&str> = line.split(' ').collect();
    if words.len() < 2 {
        return vec![(line, x0)];
    }
    let words_width: f32 = words
        .iter()
        .map(|w| metrics.width_pt(w, style.size_pt))
        .sum();
    let gap = (width - words_width) / (words.len() - 1) as f32;

    let mut x = x0;
    words
        .into_iter()
        .map(|word| {
            let at = x;
            x += metrics.width_pt(word, style.size_pt) + gap;
            (word, at)
        })
        .collect()
}

/// Characters the builtin fonts can draw beyond Latin-1 (WinAnsi 0x80-0x9F).
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Rewrites text into what the builtin Helvetica encoding can draw, so
/// measured and drawn widths agree. Common decorative symbols get a close
/// stand-in; anything else outside the encoding is dropped.
fn to_win_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | ' '..='~' | '\u{a0}'..='\u{ff}' => out.push(c),
            c if WIN_ANSI_EXTRAS.contains(c) => out.push(c),
            '→' | '➜' | '➔' | '⇒' => out.push_str("->"),
            '←' | '⇐' => out.push_str("<-"),
            '★' | '☆' | '✦' | '✱' => out.push('*'),
            '◆' | '◇' | '●' | '○' | '■' | '□' | '▪' | '▸' | '►' => out.push('•'),
            '✓' | '✔' => out.push('+'),
            _ => {}
        }
    }
    out
}

fn run(style: &BlockStyle, text: &str, x_pt: f32, y_pt: f32) -> TextRun {
    TextRun {
        text: text.to_string(),
        x_pt,
        y_pt,
        size_pt: style.size_pt,
        face: style.face,
        rgb: style.rgb,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend
// ────────────────────────────────────────────────────────────────────────────

/// Renders generated text to PDF bytes.
///
/// Lines with bad inline markup are drawn as escaped body text; only
/// backend failures (font registration, serialization) fail the document.
pub fn render_pdf(
    text: &str,
    author_name: &str,
    kind: DocumentKind,
) -> Result<Vec<u8>, RenderError> {
    let blocks = classify_lines(text);
    let pages = layout_blocks(&blocks);

    let title = format!("{} - {}", author_name.trim(), kind.title());
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(format!("font registration failed: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(format!("font registration failed: {e}")))?;

    let page_count = pages.len();
    for (index, runs) in pages.into_iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm::from(Pt(PAGE_WIDTH_PT)),
                Mm::from(Pt(PAGE_HEIGHT_PT)),
                format!("Layer {}", index + 1),
            )
        };
        let layer = doc.get_page(page).get_layer(layer);

        let mut current_rgb = None;
        for run in runs {
            if current_rgb != Some(run.rgb) {
                let (r, g, b) = run.rgb;
                layer.set_fill_color(Color::Rgb(Rgb::new(
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    None,
                )));
                current_rgb = Some(run.rgb);
            }
            let font: &IndirectFontRef = match run.face {
                FontFace::Helvetica => &regular,
                FontFace::HelveticaBold => &bold,
            };
            layer.use_text(
                run.text,
                run.size_pt,
                Mm::from(Pt(run.x_pt)),
                Mm::from(Pt(run.y_pt)),
                font,
            );
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(format!("serialization failed: {e}")))?;
    debug!(pages = page_count, bytes = bytes.len(), "Rendered PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_text(pages: &[Vec<TextRun>]) -> Vec<String> {
        pages
            .iter()
            .flatten()
            .map(|r| r.text.clone())
            .collect()
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let bytes = render_pdf(
            "# Jane Doe\n## Experience\n- Shipped things\nPlain paragraph.",
            "Jane Doe",
            DocumentKind::Resume,
        )
        .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_text_still_renders_one_page() {
        let bytes = render_pdf("", "", DocumentKind::Advice).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(layout_blocks(&classify_lines("")).len(), 1);
    }

    #[test]
    fn test_title_is_centered() {
        let pages = layout_blocks(&[Block::Title("Jane".to_string())]);
        let run = &pages[0][0];
        let width = FontFace::HelveticaBold.metrics().width_pt("Jane", 24.0);
        let center = run.x_pt + width / 2.0;
        assert!((center - PAGE_WIDTH_PT / 2.0).abs() < 0.01);
        assert_eq!(run.rgb, (0x63, 0x66, 0xf1));
    }

    #[test]
    fn test_bullet_draws_glyph_and_indents_text() {
        let pages = layout_blocks(&[Block::Bullet("Led the team".to_string())]);
        assert_eq!(pages[0][0].text, "•");
        assert_eq!(pages[0][0].x_pt, MARGIN_PT + BULLET_INDENT_PT);
        assert_eq!(pages[0][1].text, "Led the team");
        assert_eq!(pages[0][1].x_pt, MARGIN_PT + 20.0);
    }

    #[test]
    fn test_body_is_justified_except_last_line() {
        let text = "word ".repeat(200);
        let pages = layout_blocks(&[Block::Body(text.trim().to_string())]);
        let runs = &pages[0];
        // Full lines are split into one run per word; the last line is one run.
        let last = runs.last().unwrap();
        assert!(last.text.contains(' ') || last.text == "word");
        let first_line_y = runs[0].y_pt;
        let first_line: Vec<_> = runs.iter().filter(|r| r.y_pt == first_line_y).collect();
        assert!(first_line.len() > 1);
        let right_edge = first_line
            .last()
            .map(|r| r.x_pt + FontFace::Helvetica.metrics().width_pt(&r.text, 10.0))
            .unwrap();
        assert!((right_edge - (PAGE_WIDTH_PT - MARGIN_PT)).abs() < 0.01);
    }

    #[test]
    fn test_long_documents_paginate() {
        let text = (0..120)
            .map(|i| format!("- Bullet number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = layout_blocks(&classify_lines(&text));
        assert!(pages.len() >= 2);
        for run in pages.iter().flatten() {
            assert!(run.y_pt >= MARGIN_PT - 0.01);
            assert!(run.y_pt <= PAGE_HEIGHT_PT - MARGIN_PT);
        }
        assert!(render_pdf(&text, "Jane", DocumentKind::Resume).is_ok());
    }

    #[test]
    fn test_bad_markup_line_falls_back_to_literal_body() {
        let blocks = classify_lines("## Skills\n- Rust <script>alert(1)</script>\n- Go");
        let pages = layout_blocks(&blocks);
        let text = all_text(&pages);
        assert!(text.iter().any(|t| t == "Skills"));
        assert!(text.iter().any(|t| t.contains("<script>alert(1)</script>")));
        assert!(text.iter().any(|t| t == "Go"));
        // The fallback line is body style, not a bullet.
        let fallback = pages[0]
            .iter()
            .find(|r| r.text.contains("<script>"))
            .unwrap();
        assert_eq!(fallback.rgb, BODY_STYLE.rgb);
    }

    #[test]
    fn test_arrow_in_bullet_keeps_bullet_style() {
        let pages = layout_blocks(&classify_lines("- Migrated Python -> Rust services"));
        let runs = &pages[0];
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "•");
        assert_eq!(runs[1].text, "Migrated Python -> Rust services");
        assert_eq!(runs[1].rgb, BULLET_STYLE.rgb);
        assert_eq!(runs[1].x_pt, MARGIN_PT + BULLET_STYLE.left_indent_pt);

        let pages = layout_blocks(&classify_lines("- p99 latency < 100ms"));
        assert_eq!(all_text(&pages), vec!["•", "p99 latency < 100ms"]);
    }

    #[test]
    fn test_decorative_symbols_map_to_drawable_text() {
        let pages = layout_blocks(&classify_lines("- ★ Led team\n→ Shipped ◆ fast 🚀"));
        let text = all_text(&pages);
        assert_eq!(text[1], "* Led team");
        assert_eq!(text[2], "-> Shipped • fast");
        assert_eq!(to_win_ansi("Café – “quoted” €5"), "Café – “quoted” €5");
    }

    #[test]
    fn test_allowed_tags_are_stripped() {
        let pages = layout_blocks(&[Block::Heading("<b>Experience</b>".to_string())]);
        assert_eq!(pages[0][0].text, "Experience");
    }

    #[test]
    fn test_document_kind_filenames() {
        assert_eq!(DocumentKind::Resume.filename("Jane Doe"), "Jane_Doe_Resume.pdf");
        assert_eq!(
            DocumentKind::CoverLetter.filename(" Jane Q Doe "),
            "Jane_Q_Doe_CoverLetter.pdf"
        );
        assert_eq!(DocumentKind::Advice.filename(""), "Document_Career_Advice.pdf");
        assert_eq!(DocumentKind::Resume.markdown_filename("Jane Doe"), "Jane_Doe_Resume.md");
    }
}
