// Shared game UI/constants.
pub const GRID: usize = 3;
pub const CELLS: usize = GRID * GRID;
pub const CELL_W: usize = 7; // interior width of one cell
pub const CELL_H: usize = 3; // interior height of one cell
pub const GRID_W: usize = GRID * (CELL_W + 1) + 1; // interiors plus lattice columns
pub const GRID_H: usize = GRID * (CELL_H + 1) + 1; // interiors plus lattice rows
// Minimal pane width to fit the grid, sidebar, and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (GRID_W as u16) + 24 + 2;
pub const CLOCK_TICK_MS: u64 = 1000;
pub const INPUT_POLL_MS: u64 = 50;
