use crate::options::{Mode, OutputFormat, SortKey};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bool_tally",
    version = crate::VERSION,
    about = "Count true/false values in a CSV file"
)]
pub struct Args {
    /// CSV file to read (prompts for one when omitted)
    pub path: Option<PathBuf>,

    /// Counting mode
    #[arg(long, value_enum, default_value = "combination")]
    pub mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Sort combinations by key or by count
    #[arg(long, value_enum, default_value = "key")]
    pub sort: SortKey,

    /// Reverse the sort order
    #[arg(long)]
    pub desc: bool,

    /// Detect the flat-mode header with a plain comma split, ignoring quotes
    #[arg(long)]
    pub legacy_header_split: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
