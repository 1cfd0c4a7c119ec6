//! Portfolio download: `index.html` + `README.md` as a gzip-compressed tar.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Archive, Builder, Header};
use thiserror::Error;

pub const INDEX_ENTRY: &str = "index.html";
pub const README_ENTRY: &str = "README.md";
pub const ARCHIVE_FILENAME: &str = "portfolio_website.tar.gz";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Packs the two portfolio files, in order, with mode 0644.
pub fn build_archive(index_html: &str, readme: &str) -> Result<Vec<u8>, ArchiveError> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut tar = Builder::new(encoder);

    for (path, contents) in [(INDEX_ENTRY, index_html), (README_ENTRY, readme)] {
        let mut header = Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, path, contents.as_bytes())?;
    }

    let encoder = tar.into_inner()?;
    Ok(encoder.finish()?)
}

/// Entry names of a gzip tar, in archive order.
pub fn list_entries(bytes: &[u8]) -> Result<Vec<String>, ArchiveError> {
    let mut archive = Archive::new(GzDecoder::new(bytes));
    let mut names = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        names.push(entry.path()?.to_string_lossy().into_owned());
    }
    Ok(names)
}
