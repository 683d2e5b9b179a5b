//! Report the replacements a `fix` run would make.

use anyhow::Result;
use log::info;

use crate::{
    cli::{PlanArgs, PlanFormat},
    frequency::FrequencyTable,
    load_input,
    participle::{self, Decision},
    resolve_lists,
    table::{self, Align},
};

pub fn execute(args: &PlanArgs) -> Result<()> {
    let lists = resolve_lists(&args.lists)?;
    let (dataset, column, _) = load_input(&args.input)?;
    let frequencies = FrequencyTable::from_values(dataset.column_values(column));
    let decisions = participle::plan_decisions(&frequencies, &lists);

    match args.format {
        PlanFormat::Json => println!("{}", serde_json::to_string_pretty(&decisions)?),
        PlanFormat::Table if decisions.is_empty() => {
            info!("No replacements planned for column '{}'", args.input.column);
        }
        PlanFormat::Table => table::print_table(
            &["word", "replacement", "word_count", "replacement_count", "reason"],
            &[Align::Left, Align::Left, Align::Right, Align::Right, Align::Left],
            &render_rows(&decisions),
        ),
    }
    info!(
        "Planned {} replacement(s) across {} distinct value(s)",
        decisions.len(),
        frequencies.len()
    );
    Ok(())
}

fn render_rows(decisions: &[Decision]) -> Vec<Vec<String>> {
    decisions
        .iter()
        .map(|decision| {
            vec![
                decision.word.clone(),
                decision.replacement.clone(),
                decision.word_count.to_string(),
                decision.replacement_count.to_string(),
                decision.reason.as_str().to_string(),
            ]
        })
        .collect()
}
