use crate::foundation::error::{GeomotionError, GeomotionResult};

/// Dense `rows × cols` grid of alive/dead cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(rows: usize, cols: usize) -> GeomotionResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GeomotionError::automaton(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            GeomotionError::automaton(format!("grid {rows}x{cols} is too large"))
        })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Parse rows of text where `#`, `O`, `*` or `1` mark live cells and anything else is dead.
    ///
    /// All rows must have the same length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> GeomotionResult<Self> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols)?;
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(GeomotionError::automaton(format!(
                    "row {r} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                grid.cells[r * cols + c] = matches!(ch, '#' | 'O' | '*' | '1');
            }
        }
        Ok(grid)
    }

    /// Render as rows of `#` (alive) and `.` (dead).
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks_exact(self.cols)
            .map(|row| row.iter().map(|&a| if a { '#' } else { '.' }).collect())
            .collect()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state; out-of-range coordinates read as dead.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Set a cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> GeomotionResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(GeomotionError::automaton(format!(
                "cell ({row}, {col}) is outside a {}x{} grid",
                self.rows, self.cols
            )));
        }
        self.cells[row * self.cols + col] = alive;
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&a| a).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/grid.rs"]
mod tests;
