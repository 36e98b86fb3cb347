use crate::error::{AdrError, Result};
use crate::{io, paths, template};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Statuses offered when creating a record. Stored status is free text.
pub const STATUSES: &[&str] = &["Accepted", "Proposed", "Rejected", "Superseeded"];

/// Name given to record number 1 by `init`.
pub const FIRST_RECORD_NAME: &str = "Record architecture decisions";

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One architecture decision, as stored in its YAML sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub number: u32,
    pub name: String,
    pub date: String,
    pub status: String,
}

impl Record {
    pub fn new(
        number: u32,
        name: impl Into<String>,
        date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            date: date.into(),
            status: status.into(),
        }
    }

    /// Base filename shared by the markdown file and the sidecar.
    pub fn base_filename(&self) -> String {
        base_filename(self.number, &self.name)
    }

    /// Markdown filename, as linked from the table of contents.
    pub fn markdown_filename(&self) -> String {
        format!("{}.{}", self.base_filename(), paths::MARKDOWN_EXT)
    }
}

// ---------------------------------------------------------------------------
// Filename derivation
// ---------------------------------------------------------------------------

static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();

fn non_word_re() -> &'static Regex {
    NON_WORD_RE.get_or_init(|| Regex::new(r"[^0-9A-Za-z_]").unwrap())
}

/// `{number:04}-{slug}`, where the slug is `name` with every non-word
/// character turned into a separator, lower-cased and hyphen-joined.
///
/// A name with no word characters at all gives an empty slug (`0001-`).
pub fn base_filename(number: u32, name: &str) -> String {
    let spaced = non_word_re().replace_all(name, " ");
    let slug = spaced
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{number:04}-{slug}")
}

// ---------------------------------------------------------------------------
// Title validation
// ---------------------------------------------------------------------------

/// Titles must be longer than 3 and shorter than 64 bytes.
pub fn validate_title(title: &str) -> Result<()> {
    if title.len() >= 64 {
        return Err(AdrError::InvalidTitle(
            "title must be shorter than 64 characters".to_string(),
        ));
    }
    if title.len() <= 3 {
        return Err(AdrError::InvalidTitle(
            "title must be longer than 3 characters".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Files written for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaths {
    pub markdown: PathBuf,
    pub sidecar: PathBuf,
}

/// Render `record` through `template` and write the markdown file, then the
/// YAML sidecar, into `dir`. Existing files with the same base name are
/// replaced. If the sidecar write fails the markdown file stays behind.
pub fn create_record(record: &Record, template: &str, dir: &Path) -> Result<RecordPaths> {
    let base = record.base_filename();
    let rendered = template::render(template, record)?;

    let markdown = paths::markdown_path(dir, &base);
    io::atomic_write(&markdown, rendered.as_bytes())?;

    let sidecar = paths::sidecar_path(dir, &base);
    let data = serde_yaml::to_string(record)?;
    io::atomic_write(&sidecar, data.as_bytes())?;

    tracing::info!(number = record.number, file = %markdown.display(), "created record");
    Ok(RecordPaths { markdown, sidecar })
}

/// Decode one sidecar file.
pub fn load_record(path: &Path) -> Result<Record> {
    let data = std::fs::read_to_string(path).map_err(|source| AdrError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&data).map_err(|source| AdrError::Sidecar {
        path: path.to_path_buf(),
        source,
    })
}

/// Every record in `dir`, in sidecar filename order.
pub fn list_records(dir: &Path) -> Result<Vec<Record>> {
    io::entries_with_suffix(dir, &paths::sidecar_suffix())?
        .iter()
        .map(|name| load_record(&dir.join(name)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn base_filename_is_deterministic() {
        let a = base_filename(5, "Use Kafka for events");
        let b = base_filename(5, "Use Kafka for events");
        assert_eq!(a, b);
        assert_eq!(a, "0005-use-kafka-for-events");
    }

    #[test]
    fn base_filename_pads_without_truncating() {
        assert!(base_filename(1, "x").starts_with("0001-"));
        assert!(base_filename(9999, "x").starts_with("9999-"));
        assert!(base_filename(12345, "x").starts_with("12345-"));
        assert_eq!(base_filename(0, "x"), "0000-x");
    }

    #[test]
    fn base_filename_strips_punctuation() {
        assert_eq!(
            base_filename(2, "Use Postgres, not MySQL!"),
            "0002-use-postgres-not-mysql"
        );
        assert_eq!(
            base_filename(3, "\t  snake_case stays\n"),
            "0003-snake_case-stays"
        );
        assert_eq!(base_filename(4, "a/b\\c:d"), "0004-a-b-c-d");
    }

    #[test]
    fn base_filename_non_ascii_is_a_separator() {
        assert_eq!(base_filename(1, "Café décision"), "0001-caf-d-cision");
    }

    #[test]
    fn base_filename_empty_slug() {
        assert_eq!(base_filename(1, "?!..."), "0001-");
        assert_eq!(base_filename(1, ""), "0001-");
    }

    #[test]
    fn validate_title_bounds() {
        assert!(validate_title("abc").is_err());
        assert!(validate_title("abcd").is_ok());
        assert!(validate_title(&"x".repeat(63)).is_ok());
        assert!(validate_title(&"x".repeat(64)).is_err());
    }

    #[test]
    fn create_record_round_trip() {
        let dir = TempDir::new().unwrap();
        let record = Record::new(7, "Pick a database", "2024/05/01", "Proposed");
        let written = create_record(&record, template::RECORD_TEMPLATE, dir.path()).unwrap();

        assert_eq!(written.markdown, dir.path().join("0007-pick-a-database.md"));
        assert_eq!(written.sidecar, dir.path().join("0007-pick-a-database.yaml"));

        let decoded = load_record(&written.sidecar).unwrap();
        assert_eq!(decoded, record);

        let md = std::fs::read_to_string(&written.markdown).unwrap();
        assert!(md.starts_with("# 7. Pick a database\n"));
    }

    #[test]
    fn create_record_overwrites_existing_pair() {
        let dir = TempDir::new().unwrap();
        let first = Record::new(2, "Same name", "d1", "Proposed");
        let second = Record::new(2, "Same name", "d2", "Accepted");
        create_record(&first, "{{ status }}", dir.path()).unwrap();
        let written = create_record(&second, "{{ status }}", dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&written.markdown).unwrap(), "Accepted");
        assert_eq!(load_record(&written.sidecar).unwrap(), second);
    }

    #[test]
    fn create_record_bad_template_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let record = Record::new(1, "Broken", "d", "Accepted");
        let err = create_record(&record, "{% if %}", dir.path()).unwrap_err();
        assert!(matches!(err, AdrError::TemplateParse(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn create_record_sidecar_failure_leaves_markdown() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("0001-x.yaml")).unwrap();

        let record = Record::new(1, "x", "d", "Accepted");
        assert!(create_record(&record, "body", dir.path()).is_err());

        let md = dir.path().join("0001-x.md");
        assert_eq!(std::fs::read_to_string(md).unwrap(), "body");
    }

    #[test]
    fn sidecar_field_names() {
        let record = Record::new(1, "Pick a database", "2024/01/01", "Accepted");
        let yaml = serde_yaml::to_string(&record).unwrap();
        assert_eq!(
            yaml,
            "number: 1\nname: Pick a database\ndate: 2024/01/01\nstatus: Accepted\n"
        );
    }

    #[test]
    fn load_record_reports_path_on_bad_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("0001-x.yaml");
        std::fs::write(&path, "number: [").unwrap();
        let err = load_record(&path).unwrap_err();
        assert!(matches!(err, AdrError::Sidecar { .. }));
        assert!(err.to_string().contains("0001-x.yaml"));
    }

    #[test]
    fn list_records_in_filename_order() {
        let dir = TempDir::new().unwrap();
        for (n, name) in [(3, "c"), (1, "a"), (2, "b")] {
            let r = Record::new(n, name, "d", "Accepted");
            create_record(&r, "x", dir.path()).unwrap();
        }
        let numbers: Vec<u32> = list_records(dir.path())
            .unwrap()
            .iter()
            .map(|r| r.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
