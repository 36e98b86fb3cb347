use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File and directory constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = ".adr.yaml";
pub const RECORD_DIR: &str = "./docs/adr";
pub const TOC_FILE: &str = "README.md";

pub const MARKDOWN_EXT: &str = "md";
pub const SIDECAR_EXT: &str = "yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn markdown_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.{MARKDOWN_EXT}"))
}

pub fn sidecar_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.{SIDECAR_EXT}"))
}

pub fn toc_path(dir: &Path) -> PathBuf {
    dir.join(TOC_FILE)
}

/// `.md`, for matching directory entries by name.
pub fn markdown_suffix() -> String {
    format!(".{MARKDOWN_EXT}")
}

/// `.yaml`, for matching directory entries by name.
pub fn sidecar_suffix() -> String {
    format!(".{SIDECAR_EXT}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
