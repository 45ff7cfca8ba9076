/// Board cell index, row-major from the top-left corner
pub type Cell = usize;

/// Three cell indices that end the game when held by one mark
pub type Line = [Cell; 3];

/// Total number of cells on the board
pub const CELL_COUNT: usize = 9;

/// The center cell
pub const CENTER: Cell = 4;

/// The four corner cells
pub const CORNERS: [Cell; 4] = [0, 2, 6, 8];

/// The four edge cells
pub const EDGES: [Cell; 4] = [1, 3, 5, 7];

/// Every winning line, scanned in fixed order: rows, then columns, then diagonals
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
