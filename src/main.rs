//! shrtnd binary — silly-speech encoder/decoder.
//!
//! With a subcommand it encodes or decodes a single phrase and exits; with
//! none it opens an interactive session on stdin:
//!
//! * `E <phrase>` — encode the phrase, learning unknown words
//! * `D <phrase>` — decode the phrase
//! * `LOAD <path>` — feed a newline-delimited word list into the dictionary
//! * `STORE <path>` — write the dictionary back out, sorted
//! * `BYE` — exit

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

use shrtnd::codec::Transcoder;
use shrtnd::config::load_config;
use shrtnd::error::ShrtndResult;

/// Command line arguments for shrtnd.
#[derive(Parser, Debug)]
#[clap(name = "shrtnd", version, about = "Encodes & decodes silly speech")]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Characters to strip during encoding (overrides configuration)
    #[clap(short, long)]
    strip: Option<String>,

    /// Word list to preload into the dictionary
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute; omit for an interactive session
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a phrase and exit
    Encode {
        /// Do not learn unknown words while encoding
        #[clap(long)]
        no_learn: bool,

        /// The phrase to encode
        phrase: Vec<String>,
    },

    /// Decode a phrase and exit
    Decode {
        /// Explore partial keys forward through unambiguous chains
        #[clap(long)]
        partial: bool,

        /// The phrase to decode
        phrase: Vec<String>,
    },
}

/// Initialize the logging system.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> ShrtndResult<()> {
    let mut app_config = load_config(args.config)?;
    if let Some(strip) = args.strip {
        app_config.strip = strip;
    }
    if let Some(dictionary) = args.dictionary {
        app_config.dictionary = Some(dictionary);
    }

    let transcoder = Transcoder::new(&app_config.strip)?;
    if let Some(path) = &app_config.dictionary {
        feed_from_file(&transcoder, path)?;
    }

    match args.command {
        Some(Command::Encode { no_learn, phrase }) => {
            println!("{}", transcoder.encode(&phrase.join(" "), !no_learn));
            Ok(())
        }
        Some(Command::Decode { partial, phrase }) => {
            println!("{}", transcoder.decode(&phrase.join(" "), partial));
            Ok(())
        }
        None => interactive_session(&transcoder),
    }
}

/// Feeds the contents of a newline-delimited word list into the dictionary.
fn feed_from_file(transcoder: &Transcoder, path: &Path) -> ShrtndResult<()> {
    let contents = fs::read_to_string(path)?;
    transcoder.feed_all(contents.lines());
    info!("loaded dictionary from '{}'", path.display());
    Ok(())
}

/// Writes the dictionary out as a newline-delimited, sorted word list.
fn store_to_file(transcoder: &Transcoder, path: &Path) -> ShrtndResult<()> {
    let mut contents = String::new();
    for word in transcoder.words() {
        contents.push_str(&word);
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Reads commands from stdin until `BYE` or end of input.
fn interactive_session(transcoder: &Transcoder) -> ShrtndResult<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (line.as_str(), ""),
        };

        if command.is_empty() {
            continue;
        }

        match command.to_uppercase().as_str() {
            "E" => println!("{}", transcoder.encode(rest, true)),
            "D" => println!("{}", transcoder.decode(rest, false)),
            "LOAD" => match feed_from_file(transcoder, Path::new(rest)) {
                Ok(()) => println!("Loaded contents from '{rest}'"),
                Err(_) => {
                    println!("Failed loading from file '{rest}', make sure the file exists!");
                }
            },
            "STORE" => match store_to_file(transcoder, Path::new(rest)) {
                Ok(()) => println!("Wrote dictionary to '{rest}'"),
                Err(_) => {
                    println!("Failed writing to file '{rest}', make sure the path is writable!");
                }
            },
            "BYE" => {
                println!("-Stay classy San Diego!");
                break;
            }
            _ => println!("Unknown command: {command}"),
        }
    }

    Ok(())
}
