pub mod cli;
pub mod dataset;
pub mod fix;
pub mod frequency;
pub mod io_utils;
pub mod lists;
pub mod participle;
pub mod plan;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{LevelFilter, debug, info, warn};

use crate::{
    cli::{Cli, Commands, InputArgs, ListArgs},
    dataset::Dataset,
    lists::CorrectionLists,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("dt_fix", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Fix(args) => fix::execute(&args),
        Commands::Plan(args) => plan::execute(&args),
    }
}

/// Built-in lists (or none), replaced by a list file, then extended by flags.
pub fn resolve_lists(args: &ListArgs) -> Result<CorrectionLists> {
    let mut lists = match &args.lists {
        Some(path) => CorrectionLists::load(path)
            .with_context(|| format!("Loading correction lists from {path:?}"))?,
        None if args.no_defaults => CorrectionLists::empty(),
        None => CorrectionLists::default(),
    };
    lists.extend_ignore(&args.ignore);
    lists.extend_correct(&args.correct);
    debug!(
        "Using {} ignored and {} correct word(s)",
        lists.ignore.len(),
        lists.correct.len()
    );
    let overlap = lists.overlap();
    if !overlap.is_empty() {
        warn!(
            "Words on both the ignore and correct lists will be ignored: {}",
            overlap.iter().join(", ")
        );
    }
    Ok(lists)
}

/// Loads the input and locates the participle column.
pub(crate) fn load_input(args: &InputArgs) -> Result<(Dataset, usize, u8)> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Reading '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(delimiter)
    );
    let dataset = Dataset::load(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", args.input))?;
    let column = dataset.column_index(&args.column)?;
    Ok((dataset, column, delimiter))
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        other => (other as char).to_string(),
    }
}
