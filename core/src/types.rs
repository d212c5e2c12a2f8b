/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = u8;

/// Count type used for mine counts, flag counts and total-cell counts.
pub type CellCount = u16;

/// Flat position of a cell on the board, `row * width + col`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// `(row, col)` offsets in reading order: top-left, top, top-right, left,
/// right, bottom-left, bottom, bottom-right.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (height, width) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= height {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= width {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the flat indices of the in-bounds Moore neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    /// `bounds` is `(height, width)`.
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if let Some((row, col)) = next_item {
                return Some(usize::from(row) * usize::from(self.bounds.1) + usize::from(col));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<CellIndex> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(neighbors((0, 0), (3, 3)), [1, 3, 4]);
        assert_eq!(neighbors((2, 2), (3, 3)), [4, 5, 7]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(neighbors((0, 1), (3, 3)), [0, 2, 3, 4, 5]);
        assert_eq!(neighbors((1, 0), (3, 3)), [0, 1, 4, 6, 7]);
    }

    #[test]
    fn interior_neighbors_follow_reading_order() {
        assert_eq!(neighbors((1, 1), (3, 3)), [0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn single_row_board() {
        assert_eq!(neighbors((0, 0), (1, 3)), [1]);
        assert_eq!(neighbors((0, 1), (1, 3)), [0, 2]);
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(8, 8), 64);
        assert_eq!(mult(255, 255), 65025);
    }
}
