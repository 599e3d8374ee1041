//! hexboard -- generate balanced hexagonal resource boards.
//!
//! Usage:
//!   hexboard [OPTIONS]
//!
//! Boards are written to stdout (or `--output FILE`) as JSON lines, or as a
//! text listing with `--format text`. Progress and errors go to stderr.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use hexboard::batch::{generate_batch, BatchConfig};
use hexboard::eval::evaluate_board;
use hexboard::export::{write_jsonl, write_report_text, write_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

struct Options {
    batch: BatchConfig,
    format: Format,
    stats: bool,
    output: Option<String>,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(o)) => o,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(1);
        }
    };

    if options.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hexboard=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        eprintln!(
            "Generating {} board(s): {}, seed {}, {} thread(s)",
            options.batch.count,
            options.batch.board,
            options.batch.seed,
            options.batch.threads
        );
    }

    let start = Instant::now();
    let boards = match generate_batch(&options.batch) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    if options.verbose {
        eprintln!(
            "Generated {} board(s) in {:.3}s",
            boards.len(),
            start.elapsed().as_secs_f64()
        );
    }

    let result = match &options.output {
        Some(path) => match File::create(path) {
            Ok(file) => write_boards(&boards, &options, &mut BufWriter::new(file)),
            Err(e) => {
                eprintln!("failed to create {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let stdout = io::stdout();
            write_boards(&boards, &options, &mut BufWriter::new(stdout.lock()))
        }
    };
    if let Err(e) = result {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
}

fn write_boards<W: Write>(
    boards: &[hexboard::Board],
    options: &Options,
    out: &mut W,
) -> io::Result<()> {
    match options.format {
        Format::Json => write_jsonl(boards, options.stats, out),
        Format::Text => {
            for (i, board) in boards.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_text(board, out)?;
                if options.stats {
                    write_report_text(&evaluate_board(board), out)?;
                }
            }
            out.flush()
        }
    }
}

/// Parses command-line arguments. Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options {
        batch: BatchConfig::default(),
        format: Format::Json,
        stats: false,
        output: None,
        verbose: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| format!("missing value for {}", arg))
        };
        match arg.as_str() {
            "--players" => options.batch.board.player_count = parse(value()?)?,
            "--desert" => options.batch.board.desert = parse(value()?)?,
            "--terrain" => options.batch.board.terrain = parse(value()?)?,
            "--numbers" => options.batch.board.numbers = parse(value()?)?,
            "--ports" => options.batch.board.ports = parse(value()?)?,
            "--count" => options.batch.count = parse_number(arg, value()?)?,
            "--seed" => options.batch.seed = parse_number(arg, value()?)?,
            "--threads" => {
                options.batch.threads = parse_number(arg, value()?)?;
                if options.batch.threads == 0 {
                    return Err("--threads must be at least 1".to_string());
                }
            }
            "--format" => {
                options.format = match value()? {
                    "json" => Format::Json,
                    "text" => Format::Text,
                    other => return Err(format!("invalid --format value: {}", other)),
                }
            }
            "--output" => options.output = Some(value()?.to_string()),
            "--stats" => options.stats = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Some(options))
}

fn parse<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    s.parse::<T>().map_err(|e| e.to_string())
}

fn parse_number<T: FromStr>(flag: &str, s: &str) -> Result<T, String> {
    s.parse::<T>()
        .map_err(|_| format!("invalid {} value: {}", flag, s))
}

fn print_usage() {
    eprintln!("Usage: hexboard [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --players P      small | large | 3-4 | 5-6 (default: small)");
    eprintln!("  --desert D       center | random (default: center)");
    eprintln!("  --terrain T      balanced | random (default: balanced)");
    eprintln!("  --numbers N      balanced | random (default: balanced)");
    eprintln!("  --ports P        fixed | random (default: fixed)");
    eprintln!("  --count N        Number of boards to generate (default: 1)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --threads N      Number of worker threads (default: 1)");
    eprintln!("  --format F       json | text (default: json)");
    eprintln!("  --stats          Include a fairness report per board");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --verbose        Log progress to stderr");
    eprintln!("  --help           Show this help");
}
