use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use slide_puzzle_bfs::report::usage;
use slide_puzzle_bfs::search::DEFAULT_PROGRESS_INTERVAL;
use slide_puzzle_bfs::traits::board::DebugPrintable;
use slide_puzzle_bfs::util::{read_puzzles, PuzzleLine};
use slide_puzzle_bfs::{search, Configuration, RouteOrder, SearchOptions, SolveReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "slide-puzzle",
    version,
    about = "Finds a shortest winning strategy for a sliding tile puzzle"
)]
struct Cli {
    /// Grid rows
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=4))]
    rows: u8,

    /// Grid columns
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=4))]
    cols: u8,

    /// Comma separated layout to reach instead of the solved arrangement
    #[arg(short, long, value_delimiter = ',')]
    target: Option<Vec<String>>,

    /// Print the strategy from the target back to the initial layout
    #[arg(long)]
    reverse: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Expanded configurations between progress lines, 0 for only the last
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Draw the initial board before searching
    #[arg(long)]
    board: bool,

    /// Solve every layout in this file, one per line
    #[arg(short, long, conflicts_with = "tiles")]
    file: Option<PathBuf>,

    /// Row-major cells, 0 for the blank
    tiles: Vec<String>,
}

impl Cli {
    fn order(&self) -> RouteOrder {
        if self.reverse {
            RouteOrder::Reverse
        } else {
            RouteOrder::Forward
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<ExitCode> {
    match (cli.rows, cli.cols) {
        (2, 2) => run::<2, 2>(cli),
        (2, 3) => run::<2, 3>(cli),
        (2, 4) => run::<2, 4>(cli),
        (3, 2) => run::<3, 2>(cli),
        (3, 3) => run::<3, 3>(cli),
        (3, 4) => run::<3, 4>(cli),
        (4, 2) => run::<4, 2>(cli),
        (4, 3) => run::<4, 3>(cli),
        (4, 4) => run::<4, 4>(cli),
        (rows, cols) => bail!("unsupported grid {}x{}", rows, cols),
    }
}

fn run<const ROWS: usize, const COLS: usize>(cli: &Cli) -> anyhow::Result<ExitCode> {
    let target = cli
        .target
        .as_deref()
        .map(|cells| Configuration::<ROWS, COLS>::from_args(cells))
        .transpose()
        .context("invalid --target layout")?;

    let is_target = move |configuration: &Configuration<ROWS, COLS>| match target {
        Some(target) => *configuration == target,
        None => configuration.is_solved(),
    };

    match &cli.file {
        Some(path) => run_batch(cli, path, is_target),
        None => run_single(cli, is_target),
    }
}

fn run_single<const ROWS: usize, const COLS: usize, P>(
    cli: &Cli,
    is_target: P,
) -> anyhow::Result<ExitCode>
where
    P: Fn(&Configuration<ROWS, COLS>) -> bool,
{
    let cells = Configuration::<ROWS, COLS>::CELLS;
    if cli.tiles.len() < cells {
        eprintln!("{}", usage(cells));
        return Ok(ExitCode::from(1));
    }

    let initial = Configuration::<ROWS, COLS>::from_args(&cli.tiles).context("invalid puzzle layout")?;
    if cli.board {
        initial.debug_print();
    }

    let started = Local::now();
    info!("search started at {}", started.format("%Y-%m-%d %H:%M:%S"));

    let spinner = ProgressBar::new_spinner();
    let print_progress = cli.format == Format::Text;
    let options = SearchOptions {
        progress_interval: cli.progress_interval,
    };

    let outcome = search(initial, is_target, &options, |stats| {
        spinner.set_message(stats.to_string());
        spinner.tick();
        if print_progress {
            spinner.suspend(|| println!("{}", stats));
        }
    });
    spinner.finish_and_clear();

    let report = SolveReport::new(initial, &outcome, cli.order(), Local::now() - started);
    info!("finished in {} ms", report.elapsed_ms);

    match cli.format {
        Format::Text => print!("{}", report.render_text()),
        Format::Json => println!("{}", report.to_json()?),
    }

    Ok(ExitCode::SUCCESS)
}

fn solve_line<const ROWS: usize, const COLS: usize, P>(
    cli: &Cli,
    puzzle: &PuzzleLine,
    is_target: &P,
) -> anyhow::Result<String>
where
    P: Fn(&Configuration<ROWS, COLS>) -> bool,
{
    let initial = Configuration::<ROWS, COLS>::from_args(&puzzle.cells)?;
    let options = SearchOptions {
        progress_interval: 0,
    };

    let started = Local::now();
    let outcome = search(initial, is_target, &options, |_| {});
    let report = SolveReport::new(initial, &outcome, cli.order(), Local::now() - started);

    Ok(match cli.format {
        Format::Text => format!(
            "Puzzle at line {}: {}\n{}\n{}",
            puzzle.line,
            puzzle.cells.join(" "),
            report.stats,
            report.render_text()
        ),
        Format::Json => format!("{}\n", report.to_json()?),
    })
}

fn run_batch<const ROWS: usize, const COLS: usize, P>(
    cli: &Cli,
    path: &Path,
    is_target: P,
) -> anyhow::Result<ExitCode>
where
    P: Fn(&Configuration<ROWS, COLS>) -> bool + Sync,
{
    let puzzles = read_puzzles(path).with_context(|| format!("cannot read {}", path.display()))?;

    let bar = ProgressBar::new(puzzles.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} puzzles",
    )?);

    let outputs: Vec<String> = puzzles
        .par_iter()
        .map(|puzzle| {
            let output = solve_line(cli, puzzle, &is_target).unwrap_or_else(|e| match cli.format {
                Format::Text => format!("Puzzle at line {}: error: {:#}\n", puzzle.line, e),
                Format::Json => format!(
                    "{}\n",
                    serde_json::json!({ "line": puzzle.line, "error": format!("{:#}", e) })
                ),
            });
            bar.inc(1);
            output
        })
        .collect();
    bar.finish_and_clear();

    for output in outputs {
        print!("{}", output);
    }

    Ok(ExitCode::SUCCESS)
}
