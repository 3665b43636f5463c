use crate::game::{check_draw, check_winner, Board, Mark};
use crate::{CELLS, GRID};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Win { winner: Mark, line: [usize; 3] },
    Draw,
    Surrender { winner: Mark },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    NotStarted,
    Active,
    Ended(Outcome),
}

pub struct Game {
    pub board: Board,
    pub current: Mark,
    pub phase: Phase,
    pub elapsed_secs: u64,
    pub cursor: usize,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            phase: Phase::NotStarted,
            elapsed_secs: 0,
            cursor: CELLS / 2,
        }
    }

    /// Begin play. Only valid before the first move of a session; the
    /// clock starts counting from zero.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Active;
        self.elapsed_secs = 0;
        tracing::info!("game started");
        true
    }

    /// Place the current player's mark at `index`. Rejected (returning
    /// `false`, board untouched) when the game is not active or the cell
    /// is taken. An accepted move flips the current player exactly once,
    /// then the board is scanned for an outcome, winner before draw.
    pub fn play(&mut self, index: usize) -> bool {
        if self.phase != Phase::Active || index >= CELLS {
            return false;
        }
        let Some(board) = self.board.with_move(index, self.current) else {
            return false;
        };
        let mover = self.current;
        self.board = board;
        self.current = self.current.opposite();
        tracing::debug!(index, mark = %mover, "move");

        if let Some((winner, line)) = check_winner(&self.board) {
            self.phase = Phase::Ended(Outcome::Win { winner, line });
            tracing::info!(%winner, ?line, "game won");
        } else if check_draw(&self.board) {
            self.phase = Phase::Ended(Outcome::Draw);
            tracing::info!("game drawn");
        }
        true
    }

    /// Forfeit on behalf of the player to move; the win goes to the
    /// opponent.
    pub fn surrender(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let winner = self.current.opposite();
        self.phase = Phase::Ended(Outcome::Surrender { winner });
        tracing::info!(%winner, "surrendered");
        true
    }

    /// Back to a fresh session: board cleared, X to move, clock at zero
    /// and stopped until the next start. Accepted from any phase.
    pub fn reset(&mut self) {
        *self = Game::new();
        tracing::info!("game reset");
    }

    /// One clock fire. Only counts while the game is active, so a fire
    /// that races a phase transition cannot add a stale second.
    pub fn tick_second(&mut self) {
        if self.phase == Phase::Active {
            self.elapsed_secs += 1;
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            Phase::Ended(Outcome::Win { winner, .. })
            | Phase::Ended(Outcome::Surrender { winner }) => Some(winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.phase {
            Phase::Ended(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let side = GRID as i32;
        let row = ((self.cursor / GRID) as i32 + dy).clamp(0, side - 1);
        let col = ((self.cursor % GRID) as i32 + dx).clamp(0, side - 1);
        self.cursor = (row * side + col) as usize;
    }

    pub fn play_at_cursor(&mut self) -> bool {
        self.play(self.cursor)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
