use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for cell totals and alive-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// How neighbor positions behave at the board edges, fixed when a board is
/// created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Hard edges: positions outside the grid do not exist.
    Clipped,
    /// Toroidal wrap: row and column indices are taken modulo the board size,
    /// so edge cells see the opposite edge as their neighbor.
    Circular,
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2, topology: Topology) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2, topology: Topology) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size, topology)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`. Under `Clipped` a value is returned only when
/// it remains in bounds; under `Circular` the result is wrapped modulo
/// `bounds` and always exists.
fn apply_delta(
    coords: Coord2,
    delta: (isize, isize),
    bounds: Coord2,
    topology: Topology,
) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    match topology {
        Topology::Clipped => {
            let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
            if next_row >= rows {
                return None;
            }

            let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
            if next_col >= cols {
                return None;
            }

            Some((next_row, next_col))
        }
        Topology::Circular => {
            let next_row = (row as isize + dr).rem_euclid(rows as isize);
            let next_col = (col as isize + dc).rem_euclid(cols as isize);
            Some((next_row as Coord, next_col as Coord))
        }
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    topology: Topology,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, topology: Topology) -> Self {
        Self {
            center,
            bounds,
            topology,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[self.index as usize],
                self.bounds,
                self.topology,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(center: Coord2, bounds: Coord2, topology: Topology) -> Vec<Coord2> {
        NeighborIter::new(center, bounds, topology).collect()
    }

    #[test]
    fn clipped_neighbor_counts_depend_on_position() {
        let bounds = (5, 5);
        assert_eq!(neighbors((0, 0), bounds, Topology::Clipped).len(), 3);
        assert_eq!(neighbors((0, 2), bounds, Topology::Clipped).len(), 5);
        assert_eq!(neighbors((2, 2), bounds, Topology::Clipped).len(), 8);
        assert_eq!(neighbors((4, 4), bounds, Topology::Clipped).len(), 3);
    }

    #[test]
    fn circular_always_yields_eight_neighbors() {
        let bounds = (5, 5);
        for center in [(0, 0), (0, 2), (2, 2), (4, 4)] {
            assert_eq!(neighbors(center, bounds, Topology::Circular).len(), 8);
        }
    }

    #[test]
    fn circular_wraps_with_modular_arithmetic() {
        let found = neighbors((0, 0), (6, 4), Topology::Circular);

        // previous row/col of 0 resolve to the opposite edge
        assert!(found.contains(&(5, 3)));
        assert!(found.contains(&(5, 0)));
        assert!(found.contains(&(0, 3)));
        // next neighbors stay unwrapped
        assert!(found.contains(&(1, 1)));

        let found = neighbors((5, 3), (6, 4), Topology::Circular);
        assert!(found.contains(&(0, 0)));
        assert!(found.contains(&(4, 2)));
    }
}
