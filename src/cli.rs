use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Correct Dutch -d/-t participle spellings in a CSV column",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite participles in a column to their more frequent or certified spelling
    Fix(FixArgs),
    /// Report the replacements `fix` would make without writing any output
    Plan(PlanArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input CSV file (`-` reads stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Name of the column holding the participles
    #[arg(short = 'c', long = "column")]
    pub column: String,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// YAML file with `ignore` and `correct` word lists (replaces the built-in lists)
    #[arg(long = "lists")]
    pub lists: Option<PathBuf>,
    /// Start from empty lists instead of the built-in ones
    #[arg(long = "no-defaults")]
    pub no_defaults: bool,
    /// Additional words that are never rewritten
    #[arg(long = "ignore", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,
    /// Additional words whose counterpart is always rewritten to them
    #[arg(long = "correct", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub correct: Vec<String>,
}

#[derive(Debug, Args)]
pub struct FixArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub lists: ListArgs,
    /// Output CSV file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Delimiter to use for output (defaults to input delimiter)
    #[arg(long = "output-delimiter", value_parser = parse_delimiter)]
    pub output_delimiter: Option<u8>,
    /// Decide replacements and log them without writing output
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub lists: ListArgs,
    /// How to print the planned replacements
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: PlanFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum PlanFormat {
    #[default]
    Table,
    Json,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "pipe" | "|" => Ok(b'|'),
        "semicolon" | ";" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Err("Delimiter cannot be empty".to_string()),
                (Some(_), Some(_)) => Err("Delimiter must be a single character".to_string()),
                (Some(ch), None) if !ch.is_ascii() => Err("Delimiter must be ASCII".to_string()),
                (Some(ch), None) => Ok(ch as u8),
            }
        }
    }
}
