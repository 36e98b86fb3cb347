pub mod config;
pub mod date;
pub mod error;
pub mod io;
pub mod numbering;
pub mod paths;
pub mod record;
pub mod template;
pub mod toc;

pub use error::{AdrError, Result};
