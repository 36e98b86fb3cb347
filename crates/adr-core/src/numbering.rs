use crate::error::{AdrError, Result};
use crate::{io, paths};
use std::path::Path;

/// Number in front of the first hyphen of a record filename, or 0 when there
/// is none (`README.md`, `notes-draft.md`).
///
/// Parsed as `u64` so a hand-made prefix wider than a record number still
/// counts as the highest one instead of being ignored.
pub fn number_from_filename(filename: &str) -> u64 {
    let prefix = filename.split('-').next().unwrap_or_default();
    prefix.parse().unwrap_or(0)
}

/// Next unused record number in `dir`: one past the highest number found on
/// a markdown file. Gaps are not reused.
///
/// Record numbers are `u32`; once the highest prefix reaches `u32::MAX` this
/// fails with `NumberExhausted`.
pub fn next_number(dir: &Path) -> Result<u32> {
    let highest = io::entries_with_suffix(dir, &paths::markdown_suffix())?
        .iter()
        .map(|name| number_from_filename(&name.to_string_lossy()))
        .max()
        .unwrap_or(0);
    let next = u32::try_from(highest)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or(AdrError::NumberExhausted)?;
    tracing::debug!(dir = %dir.display(), highest, next, "scanned record numbers");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        std::fs::write(dir.path().join(name), "").unwrap();
    }

    #[test]
    fn empty_dir_starts_at_one() {
        let dir = TempDir::new().unwrap();
        assert_eq!(next_number(dir.path()).unwrap(), 1);
    }

    #[test]
    fn gaps_are_not_filled() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "0001-foo.md");
        touch(&dir, "0003-bar.md");
        assert_eq!(next_number(dir.path()).unwrap(), 4);
    }

    #[test]
    fn only_markdown_files_count() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "0002-foo.md");
        touch(&dir, "0009-orphan.yaml");
        touch(&dir, "README.md");
        touch(&dir, "draft-notes.md");
        assert_eq!(next_number(dir.path()).unwrap(), 3);
    }

    #[test]
    fn unpadded_and_wide_numbers() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "7-manual.md");
        touch(&dir, "12345-wide.md");
        assert_eq!(next_number(dir.path()).unwrap(), 12346);
    }

    #[test]
    fn unreadable_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(next_number(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn exhausted_numbers_are_an_error() {
        let dir = TempDir::new().unwrap();
        touch(&dir, &format!("{}-last.md", u32::MAX));
        assert!(matches!(
            next_number(dir.path()).unwrap_err(),
            AdrError::NumberExhausted
        ));
    }

    #[test]
    fn prefix_wider_than_u32_is_exhausted() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "0001-first.md");
        touch(&dir, "5000000000-x.md");
        assert!(matches!(
            next_number(dir.path()).unwrap_err(),
            AdrError::NumberExhausted
        ));
    }

    #[test]
    fn number_from_filename_cases() {
        assert_eq!(number_from_filename("0042-x.md"), 42);
        assert_eq!(number_from_filename("README.md"), 0);
        assert_eq!(number_from_filename("abc-1.md"), 0);
        assert_eq!(number_from_filename("-1.md"), 0);
        assert_eq!(number_from_filename("5000000000-x.md"), 5_000_000_000);
    }
}
