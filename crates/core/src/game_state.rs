//! Game state module - the board engine
//!
//! Owns the settled grid and the single falling piece. Every command is
//! validated through [`GameState::check_collision`] before it mutates anything.
//! Only a blocked downward move locks a piece; locking writes the piece into
//! the grid, clears full rows, and spawns the next piece.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::CoreError;
use crate::pieces::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{Command, LINE_CLEAR_POINTS};

/// Result of one lock, emitted once per locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The replacement piece collided at spawn
    pub game_over: bool,
}

/// What a single [`Command`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The move or rotation was committed
    pub applied: bool,
    /// Set when the command locked the active piece
    pub lock: Option<LockEvent>,
    pub game_over: bool,
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    active: Option<Piece>,
    source: S,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    game_over: bool,
    /// Lock produced by the command in flight; moved into its `CommandOutcome`.
    last_event: Option<LockEvent>,
}

impl GameState<RandomPieces> {
    /// Create a game on an empty `cols x rows` board with a seeded piece source
    pub fn new(cols: u16, rows: u16, seed: u32) -> Result<Self, CoreError> {
        Ok(Self::with_source(
            Board::new(cols, rows)?,
            RandomPieces::new(seed),
        ))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game on an existing board and spawn the first piece
    ///
    /// If the first piece already collides the game starts over.
    pub fn with_source(board: Board, source: S) -> Self {
        let mut state = Self {
            board,
            active: None,
            source,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
            last_event: None,
        };
        state.spawn_piece();
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Top-left corner where new pieces appear: horizontally centered for a
    /// four-wide piece, row 0
    pub fn spawn_anchor(&self) -> (i32, i32) {
        ((self.board.width().saturating_sub(4) / 2) as i32, 0)
    }

    /// Draw the next piece and place it at the spawn anchor
    ///
    /// Returns false (and ends the game) if the new piece collides immediately.
    fn spawn_piece(&mut self) -> bool {
        let (x, y) = self.spawn_anchor();
        let piece = Piece::random(&mut self.source, x, y);

        if self.collides(&piece, 0, 0) {
            self.active = None;
            self.game_over = true;
            info!(
                score = self.score,
                lines = self.lines,
                shape = piece.kind.as_str(),
                "spawn blocked, game over"
            );
            return false;
        }

        self.active = Some(piece);
        true
    }

    fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        let cols = self.board.width() as i32;
        let rows = self.board.height() as i32;
        piece.cells_offset(dx, dy).any(|(x, y)| {
            // Rows above the board are exempt from the occupancy check only.
            x < 0 || x >= cols || y >= rows || (y >= 0 && self.board.is_occupied(x, y))
        })
    }

    /// Would translating the active piece by (dx, dy) leave the board or
    /// overlap a settled cell? No active piece counts as a collision.
    pub fn check_collision(&self, dx: i32, dy: i32) -> bool {
        match &self.active {
            Some(piece) => self.collides(piece, dx, dy),
            None => true,
        }
    }

    /// Translate the active piece
    ///
    /// Returns true if the move was committed. A blocked move with `dy > 0`
    /// locks the piece; any other blocked move changes nothing.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }

        if !self.check_collision(dx, dy) {
            if let Some(piece) = self.active.as_mut() {
                piece.x = piece.x.saturating_add(dx);
                piece.y = piece.y.saturating_add(dy);
                return true;
            }
            return false;
        }

        if dy > 0 {
            self.lock();
        }
        false
    }

    /// Rotate the active piece clockwise in place
    ///
    /// No kicks: if the rotated geometry collides at the same anchor the
    /// piece keeps its previous geometry and false is returned.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        // Rotate a copy; the active piece keeps its original geometry
        // unless the rotated one fits.
        piece.rotate();
        if self.collides(&piece, 0, 0) {
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Write the active piece into the grid, clear rows, spawn the next piece
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        // Cells above the board (y < 0) are dropped.
        for (x, y) in piece.cells() {
            self.board.set(x, y, Some(piece.color));
        }
        self.pieces_locked += 1;

        let lines_cleared = self.clear_lines();
        let score_gained = lines_cleared * LINE_CLEAR_POINTS;
        debug!(
            x = piece.x,
            y = piece.y,
            shape = piece.kind.as_str(),
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained,
            game_over: !spawned,
        });
    }

    /// Remove every full row, 100 points each
    fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        self.lines += cleared;
        self.score += cleared * LINE_CLEAR_POINTS;
        cleared
    }

    /// Apply one command and report what happened
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        self.last_event = None;

        let applied = match command.delta() {
            Some((dx, dy)) => self.try_move(dx, dy),
            None => self.try_rotate(),
        };

        CommandOutcome {
            applied,
            lock: self.last_event.take(),
            game_over: self.game_over,
        }
    }

    /// Copy the current state into `out`, reusing its cell buffer
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.cols = self.board.width();
        out.rows = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut out = Snapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
