use crate::error::Result;
use crate::record::{self, Record};
use crate::{io, paths, template};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub number: u32,
    pub name: String,
    pub link: String,
}

impl From<&Record> for TocEntry {
    /// The link is derived from the number and name again, not taken from the
    /// markdown file actually on disk.
    fn from(record: &Record) -> Self {
        Self {
            number: record.number,
            name: record.name.clone(),
            link: record.markdown_filename(),
        }
    }
}

/// Result of a table-of-contents build.
#[derive(Debug, Clone, Serialize)]
pub struct Toc {
    pub path: PathBuf,
    pub entries: Vec<TocEntry>,
}

#[derive(Serialize)]
struct TocContext<'a> {
    entries: &'a [TocEntry],
}

/// One entry per sidecar in `dir`, in filename order (lexical, which matches
/// numeric order only while every number is zero-padded to the same width).
/// Any sidecar that cannot be read or decoded fails the whole scan.
pub fn collect_entries(dir: &Path) -> Result<Vec<TocEntry>> {
    Ok(record::list_records(dir)?
        .iter()
        .map(TocEntry::from)
        .collect())
}

pub fn render_toc(entries: &[TocEntry], template: &str) -> Result<String> {
    template::render(template, &TocContext { entries })
}

/// Regenerate `dir/README.md`, replacing whatever is there.
pub fn build_toc(dir: &Path, template: &str) -> Result<Toc> {
    let entries = collect_entries(dir)?;
    let rendered = render_toc(&entries, template)?;

    let path = paths::toc_path(dir);
    io::atomic_write(&path, rendered.as_bytes())?;
    tracing::info!(entries = entries.len(), file = %path.display(), "wrote table of contents");

    Ok(Toc { path, entries })
}
