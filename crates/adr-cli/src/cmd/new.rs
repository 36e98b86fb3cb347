use super::{display_path, Context};
use crate::output::print_json;
use crate::prompt::Prompter;
use adr_core::{
    date, numbering,
    record::{self, Record, STATUSES},
    template,
};
use anyhow::Context as _;

pub struct NewArgs {
    pub title: Option<String>,
    pub status: Option<String>,
}

pub fn run(ctx: &Context, args: NewArgs, prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    let config = ctx.require_config()?;

    let name = match args.title {
        Some(title) => {
            record::validate_title(&title)?;
            title
        }
        None => prompter.text("Name", &|input: &str| {
            record::validate_title(input).map_err(|e| e.to_string())
        })?,
    };
    let status = match args.status {
        Some(status) => status,
        None => STATUSES[prompter.select("Status", STATUSES)?].to_string(),
    };

    let dir = ctx.record_dir(&config);
    let number = numbering::next_number(&dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    let record = Record::new(number, name, date::today(&config.date_format)?, status);
    let source = template::resolve(
        ctx.resolve_path(config.adr_template.as_deref()).as_deref(),
        template::RECORD_TEMPLATE,
        config.missing_template_policy(),
    )?;
    let written = record::create_record(&record, &source, &dir)
        .with_context(|| format!("failed to create record {number}"))?;

    if ctx.json {
        print_json(&serde_json::json!({
            "record": record,
            "markdown": written.markdown,
            "sidecar": written.sidecar,
        }))?;
    } else {
        println!("Created record {number}: {}", display_path(&ctx.cwd, &written.markdown));
    }
    Ok(())
}
