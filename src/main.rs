use anyhow::Result;

mod app;
mod config;
mod game;
mod logging;
mod ui;
pub use config::{
    CELLS, CELL_H, CELL_W, CLOCK_TICK_MS, GRID, GRID_H, GRID_W, INPUT_POLL_MS, MIN_PANE_WIDTH,
};
pub use game::{Board, Game, Mark, Outcome, Phase};

fn main() -> Result<()> {
    let _log_guard = logging::init();
    app::run()
}
