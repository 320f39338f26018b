// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io;

use anyhow::{anyhow, Context, Result};
use chordnote::config::{ChordNoteConfig, OutputFormat};
use chordnote::music::{octave_from_number, Catalog};
use chordnote::{note_number, note_number_with_octave};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "chordnote=warn";

fn print_usage() {
    println!("chordnote - Resolve notes, chords and scales to pitch data");
    println!();
    println!("Usage: chordnote [--config <PATH>] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  note <TOKEN> [--octave N]     Note number of TOKEN (e.g. Eb, C4, G#-1)");
    println!("  chord <SYMBOL> [--octave N]   Note names of a chord symbol (e.g. CM7)");
    println!("  intervals <KIND>              Semitone offsets of a chord kind (e.g. m7b5)");
    println!("  scale <KIND> [ROOT]           Offsets of a scale, or note numbers from ROOT");
    println!("  chords                        List chord kinds");
    println!("  scales                        List scale kinds");
    println!();
    println!("Options:");
    println!("  --config <PATH>   Load a YAML or TOML config file");
    println!("  --octave <N>      Octave (-1 to 9)");
    println!("  --help            Show this help message");
}

/// Command line split into options and positional arguments
#[derive(Debug, Default)]
struct Options {
    config: Option<String>,
    octave: Option<i8>,
    positional: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a path"))?;
                options.config = Some(path.clone());
            }
            "--octave" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--octave requires a number"))?;
                let number: i64 = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid octave: {}", value))?;
                options.octave = Some(octave_from_number(number)?);
            }
            _ => options.positional.push(arg.clone()),
        }
    }

    Ok(options)
}

fn init_logging(directive: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or(DEFAULT_LOG_DIRECTIVE)));

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn required<'a>(positional: &'a [String], index: usize, what: &str) -> &'a str {
    match positional.get(index) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} requires {}", positional[0], what);
            eprintln!("Run with --help for usage information");
            std::process::exit(1);
        }
    }
}

fn run(options: &Options, config: &ChordNoteConfig, catalog: &Catalog) -> Result<()> {
    let output: OutputFormat = config.output;
    let command = options.positional[0].as_str();

    match command {
        "note" => {
            let token = required(&options.positional, 1, "a note token");
            let number = match options.octave {
                Some(octave) => note_number_with_octave(token, octave)?,
                None => note_number(token)?,
            };
            println!("{}", number);
        }
        "chord" => {
            let symbol = required(&options.positional, 1, "a chord symbol");
            let notes = match options.octave.or(config.default_octave) {
                Some(octave) => catalog.chord_notes_with_octave(symbol, octave)?,
                None => catalog.chord_notes(symbol)?,
            };
            println!("{}", output.render(&notes));
        }
        "intervals" => {
            let kind = options.positional.get(1).map(String::as_str).unwrap_or("");
            println!("{}", output.render(catalog.chord_intervals(kind)?));
        }
        "scale" => {
            let kind = required(&options.positional, 1, "a scale name");
            match options.positional.get(2) {
                Some(root) => {
                    let notes = catalog.scale_from_root(kind, root)?;
                    println!("{}", output.render(&notes));
                }
                None => println!("{}", output.render(catalog.scale_intervals(kind)?)),
            }
        }
        "chords" => println!("{}", OutputFormat::Lines.render(&catalog.chord_kinds())),
        "scales" => println!("{}", OutputFormat::Lines.render(&catalog.scale_kinds())),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("chordnote - Resolve notes, chords and scales to pitch data");
        println!("Run with --help for usage information");
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    let options = parse_args(&args)?;
    let config = match &options.config {
        Some(path) => ChordNoteConfig::load(path)?,
        None => ChordNoteConfig::default(),
    };
    init_logging(config.log_level.as_deref());

    let catalog = config
        .catalog()
        .context("Failed to build catalog from config")?;
    debug!(custom = ?catalog.custom_counts(), "catalog ready");

    if options.positional.is_empty() {
        eprintln!("Error: missing command");
        print_usage();
        std::process::exit(1);
    }

    run(&options, &config, &catalog)
}
