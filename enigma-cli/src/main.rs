#![deny(missing_docs)]
//! A command-line interface for the rotor cipher machine.

use clap::{Parser, Subcommand};
use enigma_core::catalog::{REFLECTORS, ROTORS, ReflectorSpec, RotorSpec};
use enigma_core::{Machine, key_generator, stream};
use log::{error, info};
use serde::Serialize;
use settings::{KeySheet, SettingsArgs};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

mod settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encipher a line with the default machine (rotors II I III, reflector UKW-B, AAA)\necho HELLOWORLD | enigma crypt\n\n# Decipher it again: the same settings undo the encryption\necho YBHORYJACO | enigma crypt\n\n# Pick rotors, reflector, start positions and plugs\nenigma crypt --rotors 4,2,5 --reflector 2 --positions QXM --plugboard \"AB CD EF\" --input msg.txt\n\n# Draw random settings\nenigma keygen --plugs 10"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher or decipher text; the same settings do both
    Crypt {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Path to the input file. If omitted, reads standard input.
        #[arg(short, long, value_name = "INPUT_FILE")]
        input: Option<PathBuf>,

        /// Path to the output file. If omitted, writes to standard output.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
    /// Generate random machine settings
    Keygen {
        /// The number of distinct rotors to fit
        #[arg(long, default_value_t = 3)]
        rotor_count: usize,

        /// The number of plugboard cables
        #[arg(long, default_value_t = 10)]
        plugs: usize,

        /// Seed for reproducible settings. If omitted, the OS provides the randomness.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the settings as JSON instead of command-line flags
        #[arg(long)]
        json: bool,
    },
    /// List the rotors and reflectors the machine can be fitted with
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CatalogListing<'a> {
    rotors: &'a [RotorSpec],
    reflectors: &'a [ReflectorSpec],
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Crypt { settings, input, output } => {
            let config = settings.to_config().unwrap_or_else(|e| {
                error!("Invalid machine settings: {e}");
                std::process::exit(1);
            });
            let mut machine = Machine::new(&config).unwrap_or_else(|e| {
                error!("Failed to configure the machine: {e}");
                std::process::exit(1);
            });

            let reader: Box<dyn Read> = match input {
                Some(path) => match File::open(path) {
                    Ok(file) => Box::new(BufReader::new(file)),
                    Err(e) => {
                        error!("Failed to open input file '{}': {e}", path.display());
                        std::process::exit(1);
                    }
                },
                None => Box::new(io::stdin().lock()),
            };
            let writer: Box<dyn Write> = match output {
                Some(path) => match File::create(path) {
                    Ok(file) => Box::new(BufWriter::new(file)),
                    Err(e) => {
                        error!("Failed to create output file '{}': {e}", path.display());
                        std::process::exit(1);
                    }
                },
                None => Box::new(io::stdout().lock()),
            };

            match stream::process_stream(reader, writer, &mut machine) {
                Ok(total) => info!(
                    "Processed {total} letters; rotors ended at {}.",
                    machine.positions()
                ),
                Err(e) => {
                    error!("Failed to process text: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Keygen { rotor_count, plugs, seed, json } => {
            info!("Generating settings with {rotor_count} rotor(s) and {plugs} plug pair(s).");
            let config = key_generator::generate_config(*rotor_count, *plugs, *seed)
                .unwrap_or_else(|e| {
                    error!("Failed to generate settings: {e}");
                    std::process::exit(1);
                });
            let sheet = KeySheet::new(&config);
            if *json {
                print_json(&sheet);
            } else {
                println!("{}", sheet.to_flags());
            }
        }
        Commands::Catalog { json } => {
            if *json {
                print_json(&CatalogListing { rotors: &ROTORS, reflectors: &REFLECTORS });
                return;
            }

            println!("Rotors:");
            println!("{:<4} {:<6} {:<28} {}", "No.", "Name", "Wiring", "Turnover");
            println!("{:-<50}", "");
            for (id, rotor) in (1..).zip(&ROTORS) {
                println!("{id:<4} {:<6} {:<28} {}", rotor.name, rotor.wiring, rotor.turnover);
            }
            println!();
            println!("Reflectors:");
            println!("{:<4} {:<12} {}", "No.", "Name", "Wiring");
            println!("{:-<50}", "");
            for (id, reflector) in (1..).zip(&REFLECTORS) {
                println!("{id:<4} {:<12} {}", reflector.name, reflector.wiring);
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
