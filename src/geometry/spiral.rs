use crate::foundation::error::{GeomotionError, GeomotionResult};

/// Visit order of an `n×n` block grid walked as a clockwise square spiral.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BlockSpiral {
    /// Grid side.
    pub n: usize,
    /// `order[row][col]` is the 1-based visit number of that cell.
    pub order: Vec<Vec<usize>>,
    /// Cells as `(row, col)` in visit order.
    pub sequence: Vec<(usize, usize)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    fn turn(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }
}

/// Run lengths (in cells, including the turning cell) for an `n×n` spiral: `2,2,3,3,…,n,n,n`.
fn run_lengths(n: usize) -> Vec<usize> {
    let mut runs: Vec<usize> = (2..=n).flat_map(|k| [k, k]).collect();
    runs.push(n);
    runs
}

/// Build the spiral for an even grid side `n`.
///
/// The walk starts at `(n/2 - 1, n/2 - 1)` heading right and turns clockwise after every run.
pub fn generate_spiral(n: usize) -> GeomotionResult<BlockSpiral> {
    if n == 0 || n % 2 != 0 {
        return Err(GeomotionError::validation(format!(
            "block spiral side must be even and > 0, got {n}"
        )));
    }

    let mut order = vec![vec![0usize; n]; n];
    let mut sequence = Vec::with_capacity(n * n);

    let mut cell = (n / 2 - 1, n / 2 - 1);
    let mut visit = 1;
    order[cell.0][cell.1] = visit;
    sequence.push(cell);

    let mut heading = Heading::Right;
    for run in run_lengths(n) {
        for _ in 1..run {
            let (dr, dc) = heading.delta();
            let row = cell.0.checked_add_signed(dr);
            let col = cell.1.checked_add_signed(dc);
            cell = match (row, col) {
                (Some(r), Some(c)) if r < n && c < n => (r, c),
                _ => {
                    return Err(GeomotionError::geometry(format!(
                        "spiral walked off a {n}x{n} grid"
                    )));
                }
            };
            visit += 1;
            order[cell.0][cell.1] = visit;
            sequence.push(cell);
        }
        heading = heading.turn();
    }

    Ok(BlockSpiral { n, order, sequence })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spiral.rs"]
mod tests;
