use clap::Parser;
use std::path::PathBuf;

use crate::search::Strategy;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for
    pub pattern: String,

    /// Text to search in; use --file to read it from disk instead
    pub text: Option<String>,

    /// Read the text from this file
    #[clap(long, value_parser, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Scan strategy
    #[clap(short, long, value_parser, default_value_t = Strategy::Horspool)]
    pub algorithm: Strategy,

    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,
}
