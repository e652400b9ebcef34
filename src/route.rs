use std::fmt;

use log::warn;
use serde::Serialize;

use crate::configuration::Configuration;
use crate::moves::Direction;
use crate::search::ParentMap;

/// Which end of the route is printed first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteOrder {
    #[default]
    Forward,
    Reverse,
}

impl RouteOrder {
    pub fn header(&self) -> &'static str {
        match self {
            RouteOrder::Forward => "Winning strategy:",
            RouteOrder::Reverse => "Reverse winning strategy:",
        }
    }
}

/// One slide between two consecutive configurations of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step<const ROWS: usize, const COLS: usize> {
    Slide {
        tile: u8,
        direction: Direction,
    },
    /// Two configurations whose blanks are not neighbours.
    Jump {
        from: Configuration<ROWS, COLS>,
        to: Configuration<ROWS, COLS>,
    },
}

impl<const ROWS: usize, const COLS: usize> Step<ROWS, COLS> {
    /// Names the slide that turns `from` into `to` by how far the blank moved.
    /// A blank moving right means the tile on its right slid left, which is
    /// why that tile is read from `to` at the old blank offset.
    pub fn between(from: Configuration<ROWS, COLS>, to: Configuration<ROWS, COLS>) -> Self {
        let (Some(h1), Some(h2)) = (from.hole(), to.hole()) else {
            return Step::Jump { from, to };
        };

        if h2 == h1 + 1 {
            Step::Slide {
                tile: to.tile_at(h1),
                direction: Direction::Left,
            }
        } else if h1.checked_sub(1) == Some(h2) {
            Step::Slide {
                tile: from.tile_at(h2),
                direction: Direction::Right,
            }
        } else if h2 == h1 + COLS {
            Step::Slide {
                tile: to.tile_at(h1),
                direction: Direction::Up,
            }
        } else if h1.checked_sub(COLS) == Some(h2) {
            Step::Slide {
                tile: from.tile_at(h2),
                direction: Direction::Down,
            }
        } else {
            Step::Jump { from, to }
        }
    }

    pub fn is_slide(&self) -> bool {
        matches!(self, Step::Slide { .. })
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for Step<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Slide { tile, direction } => write!(f, "Move {} {}", tile, direction),
            Step::Jump { from, to } => write!(f, "{} --> {}", from, to),
        }
    }
}

/// The configurations of a shortest route, initial first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<const ROWS: usize, const COLS: usize> {
    configurations: Vec<Configuration<ROWS, COLS>>,
    order: RouteOrder,
}

impl<const ROWS: usize, const COLS: usize> Route<ROWS, COLS> {
    /// Follows `parents` from `target` back to the self-mapped root.
    pub fn reconstruct(
        target: Configuration<ROWS, COLS>,
        parents: &ParentMap<ROWS, COLS>,
        order: RouteOrder,
    ) -> Self {
        let mut configurations = vec![target];
        let mut last = target;

        loop {
            match parents.get(&last) {
                Some(&parent) if parent == last => break,
                Some(&parent) => {
                    configurations.push(parent);
                    last = parent;
                }
                None => {
                    warn!("no parent recorded for {}, route is truncated", last);
                    break;
                }
            }
        }

        configurations.reverse();
        Self {
            configurations,
            order,
        }
    }

    pub fn configurations(&self) -> &[Configuration<ROWS, COLS>] {
        &self.configurations
    }

    pub fn initial(&self) -> Configuration<ROWS, COLS> {
        self.configurations[0]
    }

    pub fn target(&self) -> Configuration<ROWS, COLS> {
        self.configurations[self.configurations.len() - 1]
    }

    pub fn order(&self) -> RouteOrder {
        self.order
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.configurations.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps in print order. In reverse order each step is still named from
    /// parent to child.
    pub fn steps(&self) -> Vec<Step<ROWS, COLS>> {
        let mut steps: Vec<Step<ROWS, COLS>> = self
            .configurations
            .windows(2)
            .map(|pair| Step::between(pair[0], pair[1]))
            .collect();

        for step in steps.iter().filter(|step| !step.is_slide()) {
            warn!("route contains a non-adjacent transition {}", step);
        }

        if self.order == RouteOrder::Reverse {
            steps.reverse();
        }
        steps
    }

    /// Compact `UDLR` form of the tile directions, initial to target.
    pub fn moves_str(&self) -> String {
        self.configurations
            .windows(2)
            .filter_map(|pair| match Step::between(pair[0], pair[1]) {
                Step::Slide { direction, .. } => Some(direction.to_char()),
                Step::Jump { .. } => None,
            })
            .collect()
    }
}
