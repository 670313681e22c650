use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use jumpgrid_core::*;

/// Plays the jump puzzle with one of the built-in strategies.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// JSON layout file: {"grid": [[...], ...], "start": [row, col]}
    #[arg(short, long, conflicts_with_all = ["size", "max_step"])]
    board: Option<PathBuf>,

    /// Side length of a generated board
    #[arg(long, default_value_t = 10)]
    size: Coord,

    /// Largest step value on a generated board
    #[arg(long, default_value_t = 3)]
    max_step: Step,

    /// Start cell as ROW,COL (defaults to the centre, or the layout file's start)
    #[arg(long, value_parser = parse_coords)]
    start: Option<Coord2>,

    /// Which strategy picks the moves: minimizer, trap-seeker or random
    #[arg(long, default_value_t = StrategyKind::Minimizer)]
    strategy: StrategyKind,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only print the final result, not the board after every move
    #[arg(long)]
    summary: bool,

    /// Print the final result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_coords(s: &str) -> std::result::Result<Coord2, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok((row, col))
}

fn load_layout(args: &Args, seed: u64) -> Result<BoardLayout> {
    let Some(path) = &args.board else {
        let generator = RandomLayoutGenerator::new(seed, args.size, args.max_step);
        let generator = match args.start {
            Some(start) => generator.with_start(start),
            None => generator,
        };
        return generator.generate().context("Could not generate board");
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let layout: BoardLayout = serde_json::from_str(&text)
        .with_context(|| format!("Invalid layout in {}", path.display()))?;

    match args.start {
        Some(start) => BoardLayout::new(layout.grid().clone(), start)
            .with_context(|| format!("Start {start:?} is outside the board")),
        None => Ok(layout),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let layout = load_layout(&args, seed)?;
    let mut strategy = args.strategy.build(seed);
    let mut session = Session::new(Board::new(layout), &mut *strategy);

    if !args.summary {
        println!("{}\n", session.board());
    }
    while let TurnOutcome::Moved(dir) = session.step() {
        if !args.summary {
            println!("{dir:?}\n{}\n", session.board());
        }
    }

    let report = session.report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} finished after {} moves: score {}/{} ({:.2}% coverage)",
            args.strategy, report.turns, report.score, report.total_cells, report.coverage
        );
    }

    if let Some(EndReason::IllegalMove(dir)) = report.end_reason {
        bail!("{} proposed illegal move {dir:?}", args.strategy);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coords("3,4"), Ok((3, 4)));
        assert_eq!(parse_coords(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_coords("3").is_err());
        assert!(parse_coords("3,-1").is_err());
        assert!(parse_coords("300,1").is_err());
    }

    #[test]
    fn args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn generated_layout_honours_start() {
        let args = Args::parse_from(["jumpgrid", "--size", "5", "--start", "0,4"]);
        let layout = load_layout(&args, 9).unwrap();

        assert_eq!(layout.size(), 5);
        assert_eq!(layout.start(), (0, 4));
    }

    #[test]
    fn strategy_flag_uses_kebab_case_names() {
        let args = Args::parse_from(["jumpgrid", "--strategy", "trap-seeker"]);
        assert_eq!(args.strategy, StrategyKind::TrapSeeker);
    }
}
