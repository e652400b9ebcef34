use std::fmt;

use chrono::TimeDelta;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::route::{RouteOrder, Step};
use crate::search::{SearchOutcome, SearchStats};

pub const NO_STRATEGY: &str = "No winning strategy could be found!";

/// The line printed when fewer than `cells` tiles are given. Long grids
/// show the first two tiles and the last one.
pub fn usage(cells: usize) -> String {
    let tiles: Vec<String> = (1..=cells).map(|n| format!("Tile{}", n)).collect();
    let shown = if cells > 3 {
        format!("{}  {}  ...  {}", tiles[0], tiles[1], tiles[cells - 1])
    } else {
        tiles.join("  ")
    };
    format!("Usage:  slide-puzzle  {}", shown)
}

/// Everything one solve run produced, ready for printing.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport<const ROWS: usize, const COLS: usize> {
    pub rows: usize,
    pub cols: usize,
    pub initial: Configuration<ROWS, COLS>,
    pub solved: bool,
    pub order: RouteOrder,
    pub moves: Vec<Step<ROWS, COLS>>,
    pub stats: SearchStats,
    pub elapsed_ms: i64,
}

impl<const ROWS: usize, const COLS: usize> SolveReport<ROWS, COLS> {
    pub fn new(
        initial: Configuration<ROWS, COLS>,
        outcome: &SearchOutcome<ROWS, COLS>,
        order: RouteOrder,
        elapsed: TimeDelta,
    ) -> Self {
        let route = outcome.route(order);

        Self {
            rows: ROWS,
            cols: COLS,
            initial,
            solved: route.is_some(),
            order,
            moves: route.map(|route| route.steps()).unwrap_or_default(),
            stats: outcome.stats(),
            elapsed_ms: elapsed.num_milliseconds(),
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Strategy header and one `Move <tile> <direction>` line per slide, or the
/// failure line.
impl<const ROWS: usize, const COLS: usize> fmt::Display for SolveReport<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.solved {
            return writeln!(f, "{}", NO_STRATEGY);
        }

        writeln!(f, "{}", self.order.header())?;
        for step in &self.moves {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
