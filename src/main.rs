mod debug_report;

use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::sync::Once;
use tajweed::{Options, Token, default_library, tokenize_batch, tokenize_verbose_with};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("error: {0} expects a value")]
    MissingValue(&'static str),
    #[error("error: invalid --max-passes '{0}' (expected a positive integer)")]
    InvalidMaxPasses(String),
    #[error("error: input provided multiple times")]
    DuplicateInput,
    #[error("error: unknown option '{0}'")]
    UnknownOption(String),
    #[error("error: failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("error: no input provided\n\n{help}", help = help_text())]
    NoInput,
}

#[derive(Debug, PartialEq, Eq)]
enum OutputMode {
    Colored,
    Json,
    Verbose,
}

struct CliConfig {
    /// One ayah per line.
    lines: Vec<String>,
    mode: OutputMode,
    color: bool,
    options: Options,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    text: &'a str,
    tokens: &'a [Token],
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `TAJWEED_LOG` (or `RUST_LOG`) is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let directives = std::env::var("TAJWEED_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let library = default_library();
    match config.mode {
        OutputMode::Verbose => {
            for line in &config.lines {
                let res = tokenize_verbose_with(line, library, &config.options);
                debug_report::print_run(&res, config.color);
            }
        }
        OutputMode::Json => {
            let outputs = tokenize_batch(&config.lines, library, &config.options);
            for (text, tokens) in config.lines.iter().zip(&outputs) {
                match serde_json::to_string(&JsonLine { text, tokens }) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("error: failed to encode tokens: {err}");
                        std::process::exit(1);
                    }
                }
            }
        }
        OutputMode::Colored => {
            let outputs = tokenize_batch(&config.lines, library, &config.options);
            for tokens in &outputs {
                debug_report::print_tokens(tokens, config.color);
            }
        }
    }
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut mode = OutputMode::Colored;
    let mut color = io::stdout().is_terminal();
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tajweed {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => mode = OutputMode::Json,
            "--verbose" | "-v" => mode = OutputMode::Verbose,
            "--color" => color = true,
            "--no-color" => color = false,
            "--max-passes" => {
                let value = args.next().ok_or(CliError::MissingValue("--max-passes"))?;
                options.max_resolution_passes = parse_max_passes(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or(CliError::MissingValue("--input"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--max-passes=") => {
                options.max_resolution_passes = parse_max_passes(arg.trim_start_matches("--max-passes="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => return Err(CliError::UnknownOption(arg)),
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    let lines: Vec<String> = input.lines().map(str::trim_end).filter(|l| !l.trim().is_empty()).map(String::from).collect();
    if lines.is_empty() {
        return Err(CliError::NoInput);
    }

    Ok(CliConfig { lines, mode, color, options })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), CliError> {
    if input.is_some() {
        return Err(CliError::DuplicateInput);
    }
    *input = Some(value);
    Ok(())
}

fn parse_max_passes(value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidMaxPasses(value.to_string())),
    }
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Stdin)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tajweed {version}

Tajweed rule tokenizer for Quranic Arabic text.

Usage:
  tajweed [OPTIONS] [--] <text...>
  tajweed [OPTIONS] --input <text>
  tajweed [OPTIONS] < ayahs.txt

Each non-empty input line is tokenized separately.

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --json                     Print one JSON object per line: {{\"text\", \"tokens\"}}.
  -v, --verbose              Print a pipeline report (rules, resolution, timing).
  --max-passes <n>           Overlap resolution pass cap. Default: {max_passes}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  TAJWEED_LOG                Log filter (e.g. `tajweed=debug`); falls back to RUST_LOG.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        max_passes = tajweed::DEFAULT_MAX_RESOLUTION_PASSES
    )
}
