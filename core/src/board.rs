use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// The full game grid: cell states plus the edge topology chosen at
/// construction time.
///
/// `step` never mutates in place; it reads the whole current generation and
/// returns a brand-new board, so neighbor counts are always taken from a
/// consistent snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    topology: Topology,
}

impl Board {
    /// Creates an all-dead board. Both dimensions must be positive.
    pub fn new(height: Coord, width: Coord, topology: Topology) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Self {
            cells: Array2::default((height, width).to_nd_index()),
            topology,
        })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn alive_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    /// Panics when `coords` is out of range; run untrusted coordinates
    /// through [`Board::validate_coords`] first.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn set_alive(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = Cell::Alive;
        Ok(())
    }

    pub fn set_dead(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = Cell::Dead;
        Ok(())
    }

    /// Kills every cell in place.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of alive cells among the up-to-8 neighbors of `coords`,
    /// resolved through the board topology.
    pub fn alive_neighbor_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords, self.topology)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_alive())
            .count()
            .try_into()
            .unwrap()
    }

    /// Computes the next generation and returns it as a new board of the
    /// same size and topology, leaving `self` untouched.
    ///
    /// Rule B3/S23: exactly 3 alive neighbors births or keeps a cell alive,
    /// 2 alive neighbors keep an already-alive cell alive, everything else
    /// dies. Every decision reads the current generation only.
    pub fn step(&self) -> Board {
        let cells = Array2::from_shape_fn(self.cells.raw_dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            match (self.cells[[row, col]], self.alive_neighbor_count(coords)) {
                (_, 3) => Cell::Alive,
                (Cell::Alive, 2) => Cell::Alive,
                _ => Cell::Dead,
            }
        });
        Board {
            cells,
            topology: self.topology,
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
