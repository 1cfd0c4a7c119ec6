// Document Renderer
// PDF path: markdown (line classifier) → pdf (layout + printpdf).
// Static-site path: portfolio (HTML engine) → archive (tar.gz download).
// handlers exposes both paths over HTTP.

pub mod archive;
pub mod font_metrics;
pub mod handlers;
pub mod markdown;
pub mod pdf;
pub mod portfolio;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Inline markup on one line could not be parsed. Recovered per line.
    #[error("invalid inline markup: {0}")]
    Markup(String),

    /// The PDF backend failed; the whole document is lost.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
