use anyhow::{bail, Context, Result};
use bmfind::bench::{self, BenchConfig, Engine};
use bmfind::output::{self, MatchSpan};
use bmfind::search::{bad_char_table, good_suffix_table};
use clap::{Parser, Subcommand};
use memmap2::Mmap;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmfind")]
#[command(about = "Boyer-Moore exact byte search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a pattern in a file
    Find {
        /// Pattern to search for
        pattern: String,

        /// File to search
        file: PathBuf,

        /// Search implementation to run
        #[arg(short, long, value_enum, default_value_t = Engine::BoyerMoore)]
        engine: Engine,

        /// Report every non-overlapping occurrence, not just the first
        #[arg(short, long)]
        all: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Time a search implementation on a synthetic fixture
    Bench {
        /// Haystack size in bytes
        #[arg(long, default_value_t = 128)]
        haystack_size: usize,

        /// Needle size in bytes
        #[arg(long, default_value_t = 32)]
        needle_size: usize,

        /// Search implementation to time
        #[arg(short, long, value_enum, default_value_t = Engine::BoyerMoore)]
        engine: Engine,

        /// Iterations folded into one timing sample
        #[arg(long, default_value_t = 1000)]
        iterations_per_sample: u32,

        /// Copy the needle into the haystack tail so every search succeeds
        #[arg(long)]
        plant: bool,

        /// Emit a CSV row instead of the human-readable report
        #[arg(long)]
        csv: bool,

        /// Emit the report as JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,
    },
    /// Print the shift tables computed for a pattern
    Tables {
        /// Pattern to build tables for
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            pattern,
            file,
            engine,
            all,
            no_color,
        } => cmd_find(&pattern, &file, engine, all, no_color),
        Commands::Bench {
            haystack_size,
            needle_size,
            engine,
            iterations_per_sample,
            plant,
            csv,
            json,
        } => {
            let config = BenchConfig {
                engine,
                haystack_size,
                needle_size,
                iterations_per_sample,
                plant_needle: plant,
                ..Default::default()
            };
            cmd_bench(&config, csv, json)
        }
        Commands::Tables { pattern } => cmd_tables(&pattern),
    }
}

fn cmd_find(pattern: &str, path: &PathBuf, engine: Engine, all: bool, no_color: bool) -> Result<()> {
    if pattern.is_empty() {
        bail!("pattern must not be empty");
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to map {}", path.display()))?;

    let matches = collect_matches(engine, &mmap, pattern.as_bytes(), all);
    if matches.is_empty() {
        eprintln!("no match for {:?} in {}", pattern, path.display());
        std::process::exit(1);
    }

    output::print_matches(path, &mmap, &matches, !no_color)?;
    Ok(())
}

/// Run the engine as a black box, restarting after each match when `all`
/// is set. Matches never overlap.
fn collect_matches(engine: Engine, haystack: &[u8], needle: &[u8], all: bool) -> Vec<MatchSpan> {
    let search = engine.searcher();
    let mut matches = Vec::new();
    let mut base = 0;

    while base <= haystack.len() {
        match search(&haystack[base..], needle) {
            Some(pos) => {
                matches.push(MatchSpan {
                    offset: base + pos,
                    len: needle.len(),
                });
                if !all {
                    break;
                }
                base += pos + needle.len();
            }
            None => break,
        }
    }

    matches
}

fn cmd_bench(config: &BenchConfig, csv: bool, json: bool) -> Result<()> {
    let report = bench::run(config);

    if csv {
        println!("{}", report.csv_row());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} ns/op ({} samples, ±{:.1}%)",
            report.name,
            report.avg_time_ns,
            report.samples,
            report.confidence_relative * 100.0
        );
    }

    Ok(())
}

fn cmd_tables(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        bail!("pattern must not be empty");
    }

    let needle = pattern.as_bytes();
    let m = needle.len();

    let bad_char = bad_char_table(needle);
    println!("bad-character shifts (default {m}):");
    for (byte, &shift) in bad_char.iter().enumerate() {
        if shift != m {
            let display = if (byte as u8).is_ascii_graphic() {
                format!("{:?}", byte as u8 as char)
            } else {
                format!("0x{byte:02x}")
            };
            println!("  {display} -> {shift}");
        }
    }

    let good_suffix = good_suffix_table(needle);
    println!("good-suffix shifts:");
    for (i, &shift) in good_suffix.iter().enumerate() {
        println!("  mismatch at {i} ({:?}) -> {shift}", needle[i] as char);
    }

    Ok(())
}
