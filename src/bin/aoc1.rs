use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use itertools::Itertools;

type ElfId = usize;

/// Calories carried by each elf, in input order. Elves are separated by one
/// or more blank lines; lines that aren't numbers are ignored.
fn elf_totals(input: &str) -> Vec<i64> {
    let mut totals: Vec<i64> = Vec::new();
    for (blank, lines) in &input.lines().map(str::trim).group_by(|line| line.is_empty()) {
        if blank {
            continue;
        }
        totals.push(lines.filter_map(|line| line.parse::<i64>().ok()).sum());
    }
    totals
}

fn top_total(totals: &[i64], count: usize) -> i64 {
    totals.iter().sorted_by(|a, b| b.cmp(a)).take(count).sum()
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    /// Calories carried by the best-stocked elf
    Part1,
    /// Calories carried by the top three elves together
    Part2,
}

impl Mode {
    fn elf_count(&self) -> usize {
        match self {
            Mode::Part1 => 1,
            Mode::Part2 => 3,
        }
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("unable to read input {}", path.display()))
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum)]
    mode: Mode,
    /// Calorie list to sum; "-" reads stdin
    #[arg(short, long, default_value = "inputs/2022-12-01.txt")]
    input: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let input = read_input(&args.input)?;
    let totals = elf_totals(&input);
    log::debug!("found {} elves", totals.len());
    if let Some(best) = totals.iter().position_max() {
        let elf_id: ElfId = best + 1;
        log::debug!("elf {} carries the most: {}", elf_id, totals[best]);
    }
    println!("{}", top_total(&totals, args.mode.elf_count()));
    Ok(())
}
