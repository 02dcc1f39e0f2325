use unionfind::DisjointSet;

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Models an n-by-n grid of sites that starts fully blocked and is
/// opened one site at a time, answering connectivity queries against
/// the top and bottom boundaries.
///
/// Two virtual elements are appended to the disjoint-set universe: one
/// merged with every open site of the top row, the other with every
/// open site of the bottom row. The system percolates exactly when
/// those two elements end up in the same set, which turns the
/// "any top-row site reaches any bottom-row site" question into a
/// single pairwise query.
pub struct Percolation {
    size: usize,
    // row-major site states, true = open
    grid: Vec<bool>,
    open_sites: usize,
    connections: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates a grid with every site blocked.
    ///
    /// # Arguments
    ///
    /// * `n` - grid dimension, must be at least 1.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self {
            size: n,
            grid: vec![false; n * n],
            open_sites: 0,
            connections: DisjointSet::new(n * n + 2),
            virtual_top: n * n,
            virtual_bottom: n * n + 1,
        })
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site at (`row`, `col`) and merges it with its open
    /// neighbors. Opening an already open site changes nothing.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= grid dimension.
    /// * `col` - must be >= 1 and <= grid dimension.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;

        let site = self.site_index(row, col);
        if self.grid[site] {
            return Ok(());
        }
        self.grid[site] = true;
        self.open_sites += 1;

        if row > 1 {
            let up = self.site_index(row - 1, col);
            if self.grid[up] {
                self.connections.union(site, up);
            }
        }
        if row < self.size {
            let down = self.site_index(row + 1, col);
            if self.grid[down] {
                self.connections.union(site, down);
            }
        }
        if col > 1 {
            let left = self.site_index(row, col - 1);
            if self.grid[left] {
                self.connections.union(site, left);
            }
        }
        if col < self.size {
            let right = self.site_index(row, col + 1);
            if self.grid[right] {
                self.connections.union(site, right);
            }
        }

        if row == 1 {
            self.connections.union(site, self.virtual_top);
        }
        if row == self.size {
            self.connections.union(site, self.virtual_bottom);
        }

        Ok(())
    }

    /// Returns whether the site at (`row`, `col`) is open.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= grid dimension.
    /// * `col` - must be >= 1 and <= grid dimension.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.grid[self.site_index(row, col)])
    }

    /// Returns whether the site at (`row`, `col`) is connected to the
    /// top row through a chain of open neighbors. A blocked site is
    /// never full.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= grid dimension.
    /// * `col` - must be >= 1 and <= grid dimension.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;

        let site = self.site_index(row, col);
        if !self.grid[site] {
            return Ok(false);
        }
        Ok(self.connections.connected(site, self.virtual_top))
    }

    /// Returns the number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Returns whether some chain of open sites joins the top row to
    /// the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.connections
            .connected(self.virtual_top, self.virtual_bottom)
    }

    // (row, col) in [1, n]^2 maps to n * (row - 1) + (col - 1)
    fn site_index(&self, row: usize, col: usize) -> usize {
        self.size * (row - 1) + (col - 1)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.size || col < 1 || col > self.size {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }
}
