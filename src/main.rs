use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use relevance::analysis;
use relevance::formatting::{self, Identity};
use relevance::rendering::{self, Terminal};

mod editor;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let filename = || {
        Arg::new("filename")
            .required(true)
            .help("The file containing the relevance expression, or '-' to read from standard input.")
    };
    let raw_control_chars = || {
        Arg::new("raw-control-chars")
            .short('R')
            .long("raw-control-chars")
            .action(ArgAction::SetTrue)
            .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file.")
    };

    let matches = Command::new("relevance")
        .version(VERSION)
        .propagate_version(true)
        .about("Structural hints for relevance expressions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debugging information to standard error."),
        )
        .subcommand(
            Command::new("format")
                .about("Toggle the given expression between its compact and expanded forms")
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("compact")
                        .help("Always expand to one clause per line."),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Always collapse onto a single line."),
                )
                .arg(raw_control_chars())
                .arg(filename()),
        )
        .subcommand(
            Command::new("match")
                .about("Show the brackets, keywords, or referent matched at a cursor offset")
                .arg(
                    Arg::new("offset")
                        .short('o')
                        .long("offset")
                        .required(true)
                        .value_parser(clap::value_parser!(usize))
                        .help("Cursor position, as a character offset into the expression."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the highlight spans as JSON."),
                )
                .arg(raw_control_chars())
                .arg(filename()),
        )
        .subcommand(
            Command::new("highlight")
                .about("Syntax highlight the given expression")
                .arg(raw_control_chars())
                .arg(filename()),
        )
        .subcommand(
            Command::new("language-server")
                .about("Run a Language Server Protocol server on standard input and output"),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            let content = read(submatches);
            let colour = colourful(submatches);

            let expanding = if submatches.get_flag("expand") {
                true
            } else if submatches.get_flag("compact") {
                false
            } else {
                !content
                    .trim()
                    .contains('\n')
            };
            debug!(expanding);

            if expanding {
                let fragments = formatting::expand_to_fragments(content.trim());
                if colour {
                    print!("{}", rendering::render(&Terminal, fragments));
                } else {
                    print!("{}", rendering::render(&Identity, fragments));
                }
            } else {
                let result = formatting::compact(&content);
                if !result.is_empty() {
                    println!("{}", result);
                }
            }
        }
        Some(("match", submatches)) => {
            let content = read(submatches);
            let offset = *submatches
                .get_one::<usize>("offset")
                .unwrap_or(&0);

            let highlights = analysis::analyze_at(&content, offset);
            debug!("{} highlight(s) at {}", highlights.len(), offset);

            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&highlights) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                }
            } else if colourful(submatches) {
                let painted = rendering::paint(&content, &highlights);
                print!("{}", painted);
                if !painted.ends_with('\n') {
                    println!();
                }
            } else {
                print!("{}", rendering::describe(&content, &highlights));
            }
        }
        Some(("highlight", submatches)) => {
            let content = read(submatches);
            let fragments = formatting::highlight(&content);

            if colourful(submatches) {
                print!("{}", rendering::render(&Terminal, fragments));
            } else {
                print!("{}", rendering::render(&Identity, fragments));
            }
        }
        Some(("language-server", _)) => {
            if let Err(error) = editor::run_language_server() {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: relevance [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Colour is on when writing to a terminal, or when asked for explicitly.
fn colourful(submatches: &clap::ArgMatches) -> bool {
    submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal()
}

fn read(submatches: &clap::ArgMatches) -> String {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => Path::new("-"),
    };
    debug!(?filename);

    match analysis::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
