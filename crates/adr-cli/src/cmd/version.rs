use crate::output::print_json;
use serde::Serialize;

/// Build metadata stamped at compile time.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub built_at: &'static str,
    pub built_by: &'static str,
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: match option_env!("ADR_GIT_COMMIT") {
        Some(c) => c,
        None => "none",
    },
    built_at: match option_env!("ADR_BUILD_DATE") {
        Some(d) => d,
        None => "unknown",
    },
    built_by: match option_env!("ADR_BUILT_BY") {
        Some(b) => b,
        None => "unknown",
    },
};

impl BuildInfo {
    pub fn render(&self) -> String {
        format!(
            "Version: {}\nCommit: {}\nBuilt At: {}\nBuilt By: {}\n",
            self.version, self.commit, self.built_at, self.built_by
        )
    }
}

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&BUILD_INFO);
    }
    print!("{}", BUILD_INFO.render());
    Ok(())
}
