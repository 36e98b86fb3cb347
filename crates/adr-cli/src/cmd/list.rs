use super::Context;
use crate::output::{print_json, print_table};
use adr_core::record;
use anyhow::Context as _;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.load_config()?;
    let dir = ctx.record_dir(&config);
    let records = record::list_records(&dir)
        .with_context(|| format!("failed to read records in {}", dir.display()))?;

    if ctx.json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No records yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.number.to_string(),
                r.status.clone(),
                r.date.clone(),
                r.name.clone(),
            ]
        })
        .collect();
    print_table(&["#", "STATUS", "DATE", "NAME"], &rows);
    Ok(())
}
