use super::{display_path, Context};
use crate::output::print_json;
use adr_core::{template, toc};
use anyhow::Context as _;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.load_config()?;
    let dir = ctx.record_dir(&config);

    let source = template::resolve(
        ctx.resolve_path(config.toc_template.as_deref()).as_deref(),
        template::TOC_TEMPLATE,
        config.missing_template_policy(),
    )?;
    let built = toc::build_toc(&dir, &source)
        .with_context(|| format!("failed to build index for {}", dir.display()))?;

    if ctx.json {
        print_json(&built)?;
    } else {
        println!(
            "Wrote {} ({} records)",
            display_path(&ctx.cwd, &built.path),
            built.entries.len()
        );
    }
    Ok(())
}
