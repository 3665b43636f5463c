use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_game;
use crate::{Game, CLOCK_TICK_MS, INPUT_POLL_MS};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<()> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<()> {
    let mut game = Game::new();
    // Single clock cadence marker; re-armed whenever the game turns
    // active so the first displayed second is a whole one.
    let mut clock = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q')) {
                    break;
                }
                let was_active = game.is_active();
                handle_input(key.code, &mut game);
                if !was_active && game.is_active() {
                    clock = Instant::now();
                }
            }
        }

        if game.is_active() && clock.elapsed() >= Duration::from_millis(CLOCK_TICK_MS) {
            game.tick_second();
            clock = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Left => game.move_cursor(-1, 0),
        KeyCode::Right => game.move_cursor(1, 0),
        KeyCode::Up => game.move_cursor(0, -1),
        KeyCode::Down => game.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let _ = game.play_at_cursor();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let _ = game.play(c as usize - '1' as usize);
        }
        KeyCode::Char('s') => {
            let _ = game.start();
        }
        KeyCode::Char('r') => game.reset(),
        KeyCode::Char('g') => {
            let _ = game.surrender();
        }
        _ => {}
    }
}
