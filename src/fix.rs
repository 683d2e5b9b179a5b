use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::FixArgs, frequency::FrequencyTable, io_utils, load_input, participle, resolve_lists,
};

pub fn execute(args: &FixArgs) -> Result<()> {
    let lists = resolve_lists(&args.lists)?;
    let (mut dataset, column, input_delimiter) = load_input(&args.input)?;

    let table = FrequencyTable::from_values(dataset.column_values(column));
    info!(
        "Column '{}' holds {} value(s), {} distinct",
        args.input.column,
        table.total(),
        table.len()
    );
    let replacements = participle::into_replacements(participle::plan_decisions(&table, &lists));

    if args.dry_run {
        info!(
            "Dry run: {} replacement(s) planned, no output written",
            replacements.len()
        );
        return Ok(());
    }

    info!("Replacing participles");
    let changed = dataset.replace_column(column, &replacements);
    info!("Replacements made");

    let output_delimiter = io_utils::resolve_output_delimiter(
        args.output.as_deref(),
        args.output_delimiter,
        input_delimiter,
    );
    dataset
        .save(args.output.as_deref(), output_delimiter)
        .with_context(|| format!("Writing corrected dataset for {:?}", args.input.input))?;

    let destination = args
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    info!(
        "Applied {} replacement mapping(s) to {} of {} row(s) -> {}",
        replacements.len(),
        changed,
        dataset.row_count(),
        destination
    );
    Ok(())
}
