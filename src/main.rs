use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::info;
use std::fs;

use skipscan::cli::Cli;
use skipscan::error::{Result, SkipscanError};
use skipscan::search_str;

fn setup_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    let haystack = match (&cli.text, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err(SkipscanError::MissingHaystack),
    };

    info!(
        "searching for {:?} with {} over {} bytes",
        cli.pattern,
        cli.algorithm,
        haystack.len()
    );

    Ok(search_str(&cli.pattern, &haystack, cli.algorithm))
}

// Exit codes follow the grep convention: 0 found, 1 not found, 2 trouble.
fn main() {
    let cli = Cli::parse();
    setup_logging(&cli);

    match run(&cli) {
        Ok(true) => println!("found"),
        Ok(false) => {
            println!("not found");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("skipscan: {e}");
            std::process::exit(2);
        }
    }
}
