use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use derive_more::Display;
use nom::{
    character::complete::{anychar, char},
    combinator::all_consuming,
    sequence::separated_pair,
    IResult,
};

/// Discriminant is the points the outcome is worth.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
#[repr(u32)]
enum Outcome {
    Win = 6,
    Tie = 3,
    Loss = 0,
}

impl Outcome {
    fn score(self) -> u32 {
        self as u32
    }

    fn from_you_should(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'X' => Outcome::Loss,
            'Y' => Outcome::Tie,
            'Z' => Outcome::Win,
            other => anyhow::bail!("unexpected you-should input {:?}", other),
        })
    }
}

/// Discriminant is the innate score of the shape.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
#[repr(u32)]
enum Rps {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Rps {
    fn from_they_play(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'A' => Rps::Rock,
            'B' => Rps::Paper,
            'C' => Rps::Scissors,
            other => anyhow::bail!("unexpected they-play input {:?}", other),
        })
    }

    fn from_you_play(c: char) -> anyhow::Result<Self> {
        Ok(match c {
            'X' => Rps::Rock,
            'Y' => Rps::Paper,
            'Z' => Rps::Scissors,
            other => anyhow::bail!("unexpected you-play input {:?}", other),
        })
    }

    fn score(self) -> u32 {
        self as u32
    }

    /// The shape this one defeats.
    fn beats(self) -> Rps {
        match self {
            Rps::Rock => Rps::Scissors,
            Rps::Scissors => Rps::Paper,
            Rps::Paper => Rps::Rock,
        }
    }

    /// The shape that defeats this one.
    fn is_beaten_by(self) -> Rps {
        self.beats().beats()
    }

    /// Outcome of throwing `self` at `other`, from the thrower's side.
    fn play(self, other: Rps) -> Outcome {
        match other {
            o if o == self => Outcome::Tie,
            o if o == self.beats() => Outcome::Win,
            _ => Outcome::Loss,
        }
    }

    /// What to throw against `self` to end up with `outcome`.
    fn answer_for(self, outcome: Outcome) -> Rps {
        match outcome {
            Outcome::Win => self.is_beaten_by(),
            Outcome::Tie => self,
            Outcome::Loss => self.beats(),
        }
    }
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    /// Second column is the play you make
    Part1,
    /// Second column is the outcome you need
    Part2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Round {
    they_play: Rps,
    you_play: Rps,
}

/// Exactly one char, one space, one char.
fn parse_columns(s: &str) -> IResult<&str, (char, char)> {
    all_consuming(separated_pair(anychar, char(' '), anychar))(s)
}

impl Round {
    fn parse(line: &str, mode: Mode) -> anyhow::Result<Self> {
        let (_, (they, you)) = parse_columns(line.strip_suffix('\r').unwrap_or(line))
            .map_err(|e| anyhow::anyhow!("invalid round {:?}: {:?}", line, e))?;
        let they_play = Rps::from_they_play(they)?;
        let you_play = match mode {
            Mode::Part1 => Rps::from_you_play(you)?,
            Mode::Part2 => they_play.answer_for(Outcome::from_you_should(you)?),
        };
        Ok(Self {
            they_play,
            you_play,
        })
    }

    fn outcome(&self) -> Outcome {
        self.you_play.play(self.they_play)
    }

    fn score(&self) -> u32 {
        self.you_play.score() + self.outcome().score()
    }
}

/// Sum of the scores of every line that parses. Lines that don't are worth
/// nothing.
fn total_score(input: &str, mode: Mode) -> u32 {
    input
        .lines()
        .filter_map(|line| Round::parse(line, mode).ok())
        .map(|round| {
            let score = round.score();
            log::debug!(
                "they play {}, you play {}, outcome: {}; score: {}",
                round.they_play,
                round.you_play,
                round.outcome(),
                score
            );
            score
        })
        .sum()
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
    /// Strategy guide to score; "-" reads stdin
    #[arg(short, long, default_value = "inputs/2022-12-02.txt")]
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
    let start = std::time::Instant::now();
    let total = total_score(&input, args.mode);
    log::debug!("scored in {:?}", start.elapsed());
    println!("{}", total);
    Ok(())
}
