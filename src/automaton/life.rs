use rayon::prelude::*;

use crate::{
    automaton::grid::Grid,
    automaton::rule::Rule,
    foundation::error::{GeomotionError, GeomotionResult},
    foundation::rng::Rng64,
};

/// How neighbours beyond the grid edge are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Cells outside the grid are permanently dead.
    #[default]
    Dead,
    /// Opposite edges are glued together (torus).
    Wrap,
}

/// Which cells a rule's birth counts apply to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthMode {
    /// Standard Life-like update: births only revive dead cells.
    #[default]
    DeadOnly,
    /// A birth count also keeps a live cell alive, as if the survival set included the birth
    /// set.
    AnyCell,
}

/// Upper bound on the population history reserved up front by [`GameOfLife::run`].
const HISTORY_PREALLOC: u64 = 4096;

/// One cell that flipped during a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CellChange {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// New state.
    pub alive: bool,
}

/// Life-like cellular automaton with synchronous updates.
#[derive(Clone, Debug)]
pub struct GameOfLife {
    rule: Rule,
    boundary: Boundary,
    birth_mode: BirthMode,
    state: Grid,
    generation: u64,
}

impl GameOfLife {
    /// Automaton on an all-dead `rows × cols` grid.
    pub fn new(rule: Rule, rows: usize, cols: usize) -> GeomotionResult<Self> {
        Ok(Self::with_grid(rule, Grid::new(rows, cols)?))
    }

    /// Automaton starting from an explicit grid.
    pub fn with_grid(rule: Rule, grid: Grid) -> Self {
        Self {
            rule,
            boundary: Boundary::Dead,
            birth_mode: BirthMode::DeadOnly,
            state: grid,
            generation: 0,
        }
    }

    /// Change the edge behaviour.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Change which cells birth counts apply to.
    pub fn with_birth_mode(mut self, birth_mode: BirthMode) -> Self {
        self.birth_mode = birth_mode;
        self
    }

    /// Active rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Edge behaviour.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn birth_mode(&self) -> BirthMode {
        self.birth_mode
    }

    /// Current grid.
    pub fn state(&self) -> &Grid {
        &self.state
    }

    /// Generations stepped so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the current grid. Dimensions must match.
    pub fn set_state(&mut self, grid: Grid) -> GeomotionResult<()> {
        if grid.rows() != self.state.rows() || grid.cols() != self.state.cols() {
            return Err(GeomotionError::automaton(format!(
                "grid {}x{} does not match automaton {}x{}",
                grid.rows(),
                grid.cols(),
                self.state.rows(),
                self.state.cols()
            )));
        }
        self.state = grid;
        Ok(())
    }

    /// Seed the small "V" of three cells around `m = n/2 - 1`: `(m, m)`, `(m-1, m-1)` and
    /// `(m-1, m+1)`. Other cells are cleared.
    pub fn seed_manual(&mut self) -> GeomotionResult<()> {
        let (rows, cols) = (self.state.rows(), self.state.cols());
        if rows < 4 || cols < 4 {
            return Err(GeomotionError::automaton(
                "manual seed needs a grid of at least 4x4",
            ));
        }
        let (mr, mc) = (rows / 2 - 1, cols / 2 - 1);
        let mut grid = Grid::new(rows, cols)?;
        grid.set(mr, mc, true)?;
        grid.set(mr - 1, mc - 1, true)?;
        grid.set(mr - 1, mc + 1, true)?;
        self.state = grid;
        Ok(())
    }

    /// Fill the grid at random: each cell is alive with probability `density`.
    pub fn seed_random(&mut self, seed: u64, density: f64) -> GeomotionResult<()> {
        if !(density.is_finite() && (0.0..=1.0).contains(&density)) {
            return Err(GeomotionError::automaton(format!(
                "density must be within [0, 1], got {density}"
            )));
        }
        let mut rng = Rng64::new(seed);
        for cell in self.state.cells_mut() {
            *cell = rng.chance(density);
        }
        Ok(())
    }

    /// Live Moore neighbours of a cell in the current grid.
    pub fn neighbours(&self, row: usize, col: usize) -> u8 {
        count_neighbours(&self.state, self.boundary, row, col)
    }

    /// Next generation computed from the current one; the current state is left untouched.
    pub fn evolve(&self) -> Grid {
        let mut next = self.state.clone();
        let cols = self.state.cols();
        let (rule, boundary, current) = (self.rule, self.boundary, &self.state);
        let births_keep_alive = self.birth_mode == BirthMode::AnyCell;
        next.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let n = count_neighbours(current, boundary, row, col);
                    *cell = if current.get(row, col) {
                        rule.survives(n) || (births_keep_alive && rule.births(n))
                    } else {
                        rule.births(n)
                    };
                }
            });
        next
    }

    /// Advance one generation and report which cells flipped.
    pub fn step(&mut self) -> Vec<CellChange> {
        let next = self.evolve();
        let cols = next.cols();
        let changes = self
            .state
            .cells()
            .iter()
            .zip(next.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, (_, &alive))| CellChange {
                row: i / cols,
                col: i % cols,
                alive,
            })
            .collect();
        self.state = next;
        self.generation += 1;
        changes
    }

    /// Step `generations` times, returning the population after each step.
    #[tracing::instrument(skip(self), fields(rule = %self.rule))]
    pub fn run(&mut self, generations: u64) -> Vec<usize> {
        let mut history = Vec::with_capacity(history_capacity(generations));
        for _ in 0..generations {
            let changed = self.step();
            if changed.is_empty() {
                tracing::debug!(generation = self.generation, "grid is stable");
            }
            history.push(self.state.population());
        }
        history
    }
}

/// Reservation for a history of `generations` entries; longer runs grow the vector as they go.
fn history_capacity(generations: u64) -> usize {
    usize::try_from(generations.min(HISTORY_PREALLOC)).unwrap_or(0)
}

fn count_neighbours(grid: &Grid, boundary: Boundary, row: usize, col: usize) -> u8 {
    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let mut n = 0u8;
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (mut r, mut c) = (row as isize + dr, col as isize + dc);
            match boundary {
                Boundary::Dead => {
                    if r < 0 || c < 0 || r >= rows || c >= cols {
                        continue;
                    }
                }
                Boundary::Wrap => {
                    r = r.rem_euclid(rows);
                    c = c.rem_euclid(cols);
                }
            }
            if grid.get(r as usize, c as usize) {
                n += 1;
            }
        }
    }
    n
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/life.rs"]
mod tests;
