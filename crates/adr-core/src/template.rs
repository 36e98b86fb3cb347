//! Template rendering for records and the table of contents.
//!
//! Templates are minijinja (Jinja2 syntax). A record template sees the
//! record's fields at the top level:
//!
//! ```jinja
//! # {{ number }}. {{ name }}
//! Date: {{ date }}, status: {{ status }}
//! ```
//!
//! The table-of-contents template iterates `entries`, each carrying `number`,
//! `name` and `link`:
//!
//! ```jinja
//! {% for entry in entries %}* [{{ entry.name }}]({{ entry.link }})
//! {% endfor %}
//! ```
//!
//! Undefined variables are errors, not empty strings.

use crate::error::{AdrError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

/// Template for record number 1, written by `init`.
pub const FIRST_TEMPLATE: &str = include_str!("templates/first.md");
/// Template for every record created after the first.
pub const RECORD_TEMPLATE: &str = include_str!("templates/record.md");
/// Template for the generated `README.md` index.
pub const TOC_TEMPLATE: &str = include_str!("templates/toc.md");

// ---------------------------------------------------------------------------
// Override resolution
// ---------------------------------------------------------------------------

/// What to do when a configured override template cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTemplate {
    /// Use the built-in template without reporting anything.
    #[default]
    UseBuiltin,
    /// Abort with [`AdrError::Unreadable`].
    Fail,
}

/// Pick the template text for an optional override path.
///
/// No path, or an empty one, always means the built-in.
pub fn resolve(
    path: Option<&Path>,
    builtin: &'static str,
    policy: MissingTemplate,
) -> Result<Cow<'static, str>> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(Cow::Borrowed(builtin));
    };
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Cow::Owned(text)),
        Err(source) => match policy {
            MissingTemplate::UseBuiltin => {
                tracing::debug!(
                    path = %path.display(),
                    error = %source,
                    "override template unreadable, using built-in"
                );
                Ok(Cow::Borrowed(builtin))
            }
            MissingTemplate::Fail => Err(AdrError::Unreadable {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `source` with `ctx` as the template context.
pub fn render<S: Serialize>(source: &str, ctx: &S) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    let tmpl = env
        .template_from_str(source)
        .map_err(AdrError::TemplateParse)?;
    tmpl.render(ctx).map_err(AdrError::TemplateRender)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
