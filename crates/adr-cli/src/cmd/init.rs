use super::{display_path, Context};
use adr_core::{
    config::Config,
    date, io,
    record::{self, Record},
    template, AdrError,
};
use anyhow::Context as _;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let config_file = ctx.config_file();
    if config_file.exists() {
        return Err(AdrError::ConfigExists(ctx.config_path.clone()).into());
    }

    // 1. Write the default config, then read it back like any other invocation
    println!("creating config at {}", ctx.config_path.display());
    Config::default()
        .save(&config_file)
        .with_context(|| format!("failed to write {}", ctx.config_path.display()))?;
    let config = ctx.require_config()?;

    // 2. Create the record directory
    let dir = ctx.record_dir(&config);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    // 3. Record number 1 documents the practice itself
    let first = Record::new(
        1,
        record::FIRST_RECORD_NAME,
        date::today(&config.date_format)?,
        "Accepted",
    );
    let written = record::create_record(&first, template::FIRST_TEMPLATE, &dir)
        .context("failed to create the first record")?;

    println!("  created: {}", display_path(&ctx.cwd, &written.markdown));
    println!("  created: {}", display_path(&ctx.cwd, &written.sidecar));
    println!("\nNext: adr new");
    Ok(())
}
