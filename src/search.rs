use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use std::fmt;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::route::{Route, RouteOrder};

pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Every discovered configuration mapped to the one it was first reached
/// from. The initial configuration maps to itself.
pub type ParentMap<const ROWS: usize, const COLS: usize> =
    FxHashMap<Configuration<ROWS, COLS>, Configuration<ROWS, COLS>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Dequeues between two progress reports, `0` for none but the last.
    pub progress_interval: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Counters of one search run. `steps` counts expanded configurations and
/// `queue` is the frontier length after the current configuration was taken
/// off it, so a found target is not part of its own `queue` count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub steps: u64,
    pub visited: usize,
    pub queue: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "steps: {}\t visited: {}\t queue: {}",
            self.steps, self.visited, self.queue
        )
    }
}

pub enum SearchOutcome<const ROWS: usize, const COLS: usize> {
    Found {
        target: Configuration<ROWS, COLS>,
        parents: ParentMap<ROWS, COLS>,
        stats: SearchStats,
    },
    Exhausted {
        stats: SearchStats,
    },
}

impl<const ROWS: usize, const COLS: usize> SearchOutcome<ROWS, COLS> {
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::Exhausted { stats } => *stats,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn route(&self, order: RouteOrder) -> Option<Route<ROWS, COLS>> {
        match self {
            SearchOutcome::Found {
                target, parents, ..
            } => Some(Route::reconstruct(*target, parents, order)),
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Breadth-first search from `initial` until a configuration satisfying
/// `is_target` is dequeued, or until the reachable component is used up.
///
/// `on_progress` is called every `options.progress_interval` expanded
/// configurations and once more when the search ends.
pub fn search<const ROWS: usize, const COLS: usize, P, F>(
    initial: Configuration<ROWS, COLS>,
    is_target: P,
    options: &SearchOptions,
    mut on_progress: F,
) -> SearchOutcome<ROWS, COLS>
where
    P: Fn(&Configuration<ROWS, COLS>) -> bool,
    F: FnMut(&SearchStats),
{
    debug!("searching a {}x{} grid from {}", ROWS, COLS, initial);

    let mut steps: u64 = 0;
    let mut parents: ParentMap<ROWS, COLS> = FxHashMap::default();
    parents.insert(initial, initial);
    let mut queue = VecDeque::from([initial]);

    while let Some(configuration) = queue.pop_front() {
        if is_target(&configuration) {
            let stats = SearchStats {
                steps,
                visited: parents.len(),
                queue: queue.len(),
            };
            on_progress(&stats);
            info!("reached {} ({})", configuration, stats);

            return SearchOutcome::Found {
                target: configuration,
                parents,
                stats,
            };
        }

        configuration.for_each_successor(|successor| {
            if let Entry::Vacant(slot) = parents.entry(successor) {
                slot.insert(configuration);
                queue.push_back(successor);
            }
        });

        steps += 1;
        if options.progress_interval != 0 && steps % options.progress_interval == 0 {
            on_progress(&SearchStats {
                steps,
                visited: parents.len(),
                queue: queue.len(),
            });
        }
    }

    let stats = SearchStats {
        steps,
        visited: parents.len(),
        queue: 0,
    };
    on_progress(&stats);
    info!("search space exhausted ({})", stats);

    SearchOutcome::Exhausted { stats }
}

/// Search for the canonical solved arrangement and reconstruct the route.
pub fn solve<const ROWS: usize, const COLS: usize>(
    initial: Configuration<ROWS, COLS>,
    order: RouteOrder,
) -> Option<Route<ROWS, COLS>> {
    search(
        initial,
        Configuration::<ROWS, COLS>::is_solved,
        &SearchOptions::default(),
        |_| {},
    )
    .route(order)
}
