//! CLI entrypoint for `txt2json`.
//!
//! Converts a one-word-per-line text file into a JSON array. Run without
//! arguments it reads `words.txt` and writes `words.json` in the working
//! directory. With `--clue` it also prints the words still possible under
//! the given Wordle feedback.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use wordle_helper::{
    converter::{ConvertError, DEFAULT_OUTPUT, DEFAULT_SOURCE, convert},
    feedback::Clue,
    filter::filter_words,
    report::{render_candidates, render_summary},
};

#[derive(Parser, Debug)]
#[command(
    name = "txt2json",
    version,
    about = "Convert a line-per-word text file into a JSON array"
)]
struct Args {
    /// Text file with one word per line
    #[arg(default_value = DEFAULT_SOURCE)]
    input: PathBuf,

    /// JSON file to write (replaced if it exists)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Wordle clue as GUESS=FEEDBACK with G/Y/B marks, e.g. crane=BYBBG
    #[arg(short = 'c', long = "clue")]
    clues: Vec<Clue>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress the conversion summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::Read { .. }) => 3,
        Some(ConvertError::Decode { .. }) => 4,
        Some(ConvertError::Write { .. }) => 5,
        None => 1,
    }
}

fn run(args: &Args) -> Result<()> {
    let done = convert(&args.input, &args.output)?;
    if !args.quiet {
        println!("{}", render_summary(&args.input, &args.output, &done.stats));
    }
    if !args.clues.is_empty() {
        let candidates = filter_words(&done.words, &args.clues);
        info!(
            "{} of {} words match {} clue(s)",
            candidates.len(),
            done.words.len(),
            args.clues.len()
        );
        println!("{}", render_candidates(&candidates, &args.clues));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(exit_code(&e));
    }
}
