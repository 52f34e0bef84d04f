use toruslife_common::{Cell, GridSize};

/// Row/column offsets of the Moore neighborhood, row-major.
pub const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True modulo: maps any `x` into `[0, size)`.
pub fn wrap(x: i64, size: i64) -> i64 {
    x.rem_euclid(size)
}

/// The 8 toroidally wrapped neighbors of `cell`, in `OFFSETS` order.
pub fn neighbors(cell: Cell, size: GridSize) -> [Cell; 8] {
    let n = size.get() as i64;
    let (row, column) = (cell.row as i64, cell.column as i64);
    OFFSETS.map(|(dr, dc)| {
        Cell::new(wrap(row + dr, n) as usize, wrap(column + dc, n) as usize)
    })
}
