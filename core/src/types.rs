/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Maps `(x, y)` onto the `[row, column]` index of a row-major `Array2`, so the
/// flat offset of a cell is `y * width + x`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major flat offset of `coords` on a board that is `width` cells wide.
pub const fn flat_index((x, y): Coord2, width: Coord) -> usize {
    (y as usize) * (width as usize) + (x as usize)
}

/// Inverse of [`flat_index`].
pub const fn from_flat_index(index: usize, width: Coord) -> Coord2 {
    let width = width as usize;
    ((index % width) as Coord, (index / width) as Coord)
}

const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds neighbors of a cell, always yielded in the same order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    /// The up to 8 cells around `center`, diagonals included.
    pub fn moore(center: Coord2, bounds: Coord2) -> Self {
        Self::with_displacements(center, bounds, &MOORE)
    }

    /// The up to 4 cells sharing an edge with `center`.
    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::with_displacements(center, bounds, &ORTHOGONAL)
    }

    fn with_displacements(
        center: Coord2,
        bounds: Coord2,
        displacements: &'static [(isize, isize)],
    ) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            let next_item = apply_delta(self.center, delta, self.bounds);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
