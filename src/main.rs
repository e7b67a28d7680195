use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use progex::{Builder, InputFilter, ProgressiveRegex};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to validate against; prompted for when omitted
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Match letters regardless of case
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Disable Unicode classes in the regex engine
    #[arg(long)]
    ascii: bool,

    /// Feed each input one keystroke at a time, as a form field would
    #[arg(short = 'k', long)]
    keystrokes: bool,

    /// Log every tested prefix
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("progex=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    print!("{label}> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("Progressive pattern REPL");
    println!("Type an empty pattern to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut initial = args.pattern.clone();

    loop {
        let text = match initial.take() {
            Some(text) => text,
            None => match prompt("pattern", &mut lines)? {
                Some(text) => text,
                None => break,
            },
        };
        let text = text.trim();
        if text.is_empty() {
            break;
        }

        let regex = Builder::new(text)
            .case_insensitive(args.ignore_case)
            .unicode(!args.ascii)
            .build();
        println!("Compiled: {}", regex.as_str());
        for (i, atom) in regex.pattern().atoms().iter().enumerate() {
            println!("  atom {i}: {:?} {:?} {:?}", atom.kind(), atom.content(), atom.repeat());
        }

        println!("Type return to go back to the pattern prompt.");
        while let Some(input) = prompt("input", &mut lines)? {
            if input == "return" {
                break;
            }
            if args.keystrokes {
                report_keystrokes(&regex, &input);
            } else if regex.is_match(&input) {
                println!("Match");
            } else {
                println!("No match");
            }
        }
    }
    Ok(())
}

fn report_keystrokes(regex: &ProgressiveRegex, input: &str) {
    let mut filter = InputFilter::new(regex.clone());
    for (i, c) in input.chars().enumerate() {
        if !filter.push(c) {
            println!("Rejected {c:?} at keystroke {i}");
        }
    }
    println!("Value: {:?}", filter.value());
}
