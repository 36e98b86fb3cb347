use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdrError {
    #[error("config already exists at {}, project initialised", .0.display())]
    ConfigExists(PathBuf),

    #[error("{} missing, run init first", .0.display())]
    NotInitialized(PathBuf),

    #[error("invalid title: {0}")]
    InvalidTitle(String),

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("invalid template: {0}")]
    TemplateParse(#[source] minijinja::Error),

    #[error("failed to render template: {0}")]
    TemplateRender(#[source] minijinja::Error),

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode record {}: {source}", path.display())]
    Sidecar {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("record numbers exhausted")]
    NumberExhausted,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AdrError>;
