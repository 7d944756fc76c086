//! Game module - the orchestrating state machine
//!
//! This module ties together the board, the active and next pieces, the 7-bag
//! randomizer, gravity and lock delay timing, scoring and leveling. It is the
//! only surface drivers talk to: they feed discrete actions and a per-frame
//! millisecond delta, then read a [`GameSnapshot`].
//!
//! Time is never read from a clock here, so a seed plus a sequence of
//! (action, dt) pairs always replays to the same state.

use log::{debug, trace};

use crate::board::Board;
use crate::flash::LineFlash;
use crate::piece::Piece;
use crate::rng::PieceBag;
use crate::scoring::{
    calculate_hard_drop_score, calculate_line_score, gravity_interval_ms, level_for_lines,
};
use crate::snapshot::{FlashSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    status: GameStatus,
    board: Board,
    active: Piece,
    next: PieceKind,
    bag: PieceBag,
    score: u32,
    lines: u32,
    level: u32,
    soft_dropping: bool,
    /// Per-level gravity interval, refreshed on level change.
    gravity_interval_ms: f64,
    gravity_timer_ms: f64,
    lock_timer_ms: f64,
    locking: bool,
    flash: LineFlash,
}

impl Game {
    /// Create a game and run [`Game::init`] with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            status: GameStatus::Init,
            board: Board::new(),
            active: Piece::spawn(PieceKind::I),
            next: PieceKind::I,
            bag: PieceBag::new(seed),
            score: 0,
            lines: 0,
            level: 0,
            soft_dropping: false,
            gravity_interval_ms: gravity_interval_ms(0),
            gravity_timer_ms: 0.0,
            lock_timer_ms: 0.0,
            locking: false,
            flash: LineFlash::default(),
        };
        game.init(seed);
        game
    }

    /// Start a fresh session: empty board, reseeded bag, zeroed counters, first
    /// piece spawned.
    ///
    /// Ends in `Running`, or `GameOver` if the first spawn does not fit.
    pub fn init(&mut self, seed: u32) {
        self.status = GameStatus::Init;
        self.board.reset();
        self.bag = PieceBag::new(seed);
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.soft_dropping = false;
        self.gravity_interval_ms = gravity_interval_ms(0);
        self.gravity_timer_ms = 0.0;
        self.lock_timer_ms = 0.0;
        self.locking = false;
        self.flash = LineFlash::default();

        self.next = self.bag.draw();
        self.new_piece();

        if self.status == GameStatus::Init {
            self.set_status(GameStatus::Running);
        }
        debug!("session started with seed {}", seed);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn seed(&self) -> u32 {
        self.bag.seed()
    }

    pub fn soft_dropping(&self) -> bool {
        self.soft_dropping
    }

    /// The active piece is resting and counting down to lock.
    pub fn is_locking(&self) -> bool {
        self.locking
    }

    pub fn flash(&self) -> &LineFlash {
        &self.flash
    }

    /// Row the active piece would land on if hard dropped now.
    pub fn ghost_row(&self) -> i8 {
        self.active.ghost_row(&self.board)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);

        out.active = self.active.into();
        out.ghost_row = self.ghost_row();
        out.next = self.next;
        out.status = self.status;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.soft_dropping = self.soft_dropping;
        out.flash = FlashSnapshot {
            active: self.flash.is_active(),
            toggles_remaining: self.flash.toggles_remaining(),
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            debug!("state {} -> {}", self.status.as_str(), status.as_str());
            self.status = status;
        }
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// Resets the piece-local timers. A spawn that collides ends the game.
    pub fn new_piece(&mut self) {
        self.active = Piece::spawn(self.next);
        self.next = self.bag.draw();

        self.locking = false;
        self.lock_timer_ms = 0.0;
        self.gravity_timer_ms = 0.0;

        if !self.active.is_valid(&self.board) {
            debug!(
                "spawn of {} blocked at score {}",
                self.active.kind.as_str(),
                self.score
            );
            self.set_status(GameStatus::GameOver);
        }
    }

    /// Commit the active piece to the board, clear lines, score, and spawn the
    /// next piece.
    pub fn lock_piece(&mut self) {
        let cells = self.active.cells();
        self.board.lock(&cells, self.active.kind);

        let cleared = self.board.clear_lines();
        let awarded = self.apply_line_clear(cleared);
        trace!(
            "locked {} at ({}, {}): {} lines, +{}",
            self.active.kind.as_str(),
            self.active.row,
            self.active.col,
            cleared,
            awarded
        );

        self.new_piece();
    }

    /// Update score, line total and level for a clear; returns points awarded.
    fn apply_line_clear(&mut self, cleared: u32) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);

        if cleared == 4 {
            debug!("tetris at level {}", self.level);
            self.flash.start();
        }

        let level = level_for_lines(self.lines);
        if level > self.level {
            self.level = level;
            self.gravity_interval_ms = gravity_interval_ms(level);
            debug!(
                "level {} reached, gravity {:.2}ms",
                level, self.gravity_interval_ms
            );
        }

        points
    }

    /// Gravity interval in effect right now.
    pub fn effective_gravity_interval(&self) -> f64 {
        if self.soft_dropping {
            SOFT_DROP_GRAVITY_MS
        } else {
            self.gravity_interval_ms
        }
    }

    pub fn set_soft_drop(&mut self, on: bool) {
        self.soft_dropping = on;
    }

    /// Advance gravity or lock delay by `dt_ms`.
    ///
    /// A resting piece counts toward the lock delay and locks once it expires.
    /// Otherwise the gravity timer may move the piece several rows in one call;
    /// the first blocked step starts the lock delay and the rest of the
    /// accumulated time is left unconsumed.
    pub fn apply_gravity(&mut self, dt_ms: f64) {
        if self.status != GameStatus::Running {
            return;
        }
        let dt_ms = dt_ms.max(0.0);

        if self.locking {
            self.lock_timer_ms += dt_ms;
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.lock_piece();
            }
            return;
        }

        let interval = self.effective_gravity_interval();
        self.gravity_timer_ms += dt_ms;
        while self.gravity_timer_ms >= interval {
            self.gravity_timer_ms -= interval;

            let below = self.active.shifted(1, 0);
            if below.is_valid(&self.board) {
                self.active = below;
                if self.soft_dropping {
                    self.score = self.score.saturating_add(SOFT_DROP_POINTS);
                }
            } else {
                self.locking = true;
                self.lock_timer_ms = 0.0;
                break;
            }
        }
    }

    /// Advance the tetris flash animation by `dt_ms`.
    pub fn update_flash(&mut self, dt_ms: f64) {
        self.flash.update(dt_ms);
    }

    /// Route one frame's elapsed time: the flash animation, while it plays,
    /// holds gravity.
    pub fn tick(&mut self, dt_ms: f64) {
        if self.flash.is_active() {
            self.update_flash(dt_ms);
        } else {
            self.apply_gravity(dt_ms);
        }
    }

    /// Drop the active piece as far as it goes and lock it immediately.
    ///
    /// Scores 2 points per row and skips any lock delay. Returns rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.status != GameStatus::Running {
            return 0;
        }

        let mut rows: u32 = 0;
        while self.active.can_fall(&self.board) {
            self.active = self.active.shifted(1, 0);
            rows += 1;
        }

        self.score = self.score.saturating_add(calculate_hard_drop_score(rows));
        self.lock_piece();
        rows
    }

    /// Try to move the active piece by (d_row, d_col).
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let candidate = self.active.shifted(d_row, d_col);
        if !candidate.is_valid(&self.board) {
            return false;
        }

        self.active = candidate;
        self.refresh_lock_delay();
        true
    }

    /// Try to rotate the active piece one step, with kicks.
    pub fn try_rotate(&mut self, direction: RotationDirection) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        if !self.active.try_rotate(&self.board, direction) {
            return false;
        }

        self.refresh_lock_delay();
        true
    }

    /// After a successful move or rotation: restart the lock delay, or cancel it
    /// if the piece can fall again.
    ///
    /// Resets are not capped.
    fn refresh_lock_delay(&mut self) {
        if !self.locking {
            return;
        }
        self.lock_timer_ms = 0.0;
        if self.active.can_fall(&self.board) {
            self.locking = false;
        }
    }

    /// Running <-> Paused; ignored in every other state.
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.set_status(GameStatus::Paused),
            GameStatus::Paused => self.set_status(GameStatus::Running),
            GameStatus::Init | GameStatus::GameOver | GameStatus::Quit => {}
        }
    }

    /// Enter the terminal `Quit` state from anywhere.
    pub fn quit(&mut self) {
        self.set_status(GameStatus::Quit);
    }

    /// Apply a game action; returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::SoftDrop => {
                self.set_soft_drop(true);
                self.try_move(1, 0)
            }
            GameAction::SoftDropRelease => {
                self.set_soft_drop(false);
                true
            }
            GameAction::RotateCw => self.try_rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.try_rotate(RotationDirection::CounterClockwise),
            GameAction::HardDrop => {
                if self.status != GameStatus::Running {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Pause => {
                let before = self.status;
                self.toggle_pause();
                self.status != before
            }
            GameAction::Quit => {
                self.quit();
                true
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTTOM: i8 = BOARD_HEIGHT as i8 - 1;

    fn game_with_active(kind: PieceKind) -> Game {
        let mut game = Game::new(12345);
        game.active = Piece::spawn(kind);
        game
    }

    fn fill_row_except(board: &mut Board, row: i8, gap: i8) {
        for col in 0..BOARD_WIDTH as i8 {
            if col != gap {
                board.set(row, col, Some(PieceKind::J));
            }
        }
    }

    fn filled_cells(game: &Game) -> usize {
        game.board.cells().iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);

        assert_eq!(game.status, GameStatus::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.lines, 0);
        assert_eq!(game.level, 0);
        assert!(!game.locking);
        assert!(!game.soft_dropping);
        assert!(!game.flash.is_active());
        assert_eq!((game.active.row, game.active.col), (SPAWN_ROW, SPAWN_COL));
        assert_eq!(game.active.rotation, Rotation::North);
        assert_eq!(filled_cells(&game), 0);
        // One bag draw went to the active piece, one to next.
        assert_eq!(game.bag.remaining(), 5);
        assert_ne!(game.active.kind, game.next);
    }

    #[test]
    fn test_fourteen_pieces_are_two_bags() {
        let mut game = Game::new(2024);
        let mut kinds = Vec::new();
        for _ in 0..14 {
            kinds.push(game.active.kind);
            game.new_piece();
        }

        for window in kinds.chunks(7) {
            let mut window = window.to_vec();
            window.sort_by_key(|k| k.index());
            assert_eq!(window, PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = Game::new(77);
        let mut b = Game::new(77);
        for _ in 0..20 {
            assert_eq!(a.active.kind, b.active.kind);
            assert_eq!(a.next, b.next);
            a.new_piece();
            b.new_piece();
        }
    }

    #[test]
    fn test_gravity_moves_one_row_per_interval() {
        let mut game = game_with_active(PieceKind::T);

        game.apply_gravity(499.0);
        assert_eq!(game.active.row, SPAWN_ROW);

        game.apply_gravity(1.0);
        assert_eq!(game.active.row, SPAWN_ROW + 1);

        game.apply_gravity(1500.0);
        assert_eq!(game.active.row, SPAWN_ROW + 4);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_large_delta_stops_at_ground() {
        let mut game = game_with_active(PieceKind::O);

        game.apply_gravity(100_000.0);
        assert_eq!(game.active.row, BOTTOM - 1);
        assert!(game.locking);
        assert_eq!(game.lock_timer_ms, 0.0);
        assert_eq!(filled_cells(&game), 0);
    }

    #[test]
    fn test_lock_delay_then_lock() {
        let mut game = game_with_active(PieceKind::O);

        // 20 rows to fall at 500ms each, then one blocked step.
        game.apply_gravity(20.0 * 500.0);
        assert_eq!(game.active.row, BOTTOM - 1);
        assert!(!game.locking);
        game.apply_gravity(500.0);
        assert!(game.locking);

        game.apply_gravity(499.0);
        assert!(game.locking);
        assert_eq!(filled_cells(&game), 0);

        game.apply_gravity(1.0);
        assert_eq!(filled_cells(&game), 4);
        for (row, col) in [(BOTTOM - 1, 4), (BOTTOM - 1, 5), (BOTTOM, 4), (BOTTOM, 5)] {
            assert_eq!(game.board.get(row, col), Some(Some(PieceKind::O)));
        }
        assert!(!game.locking);
        assert_eq!(game.active.row, SPAWN_ROW);
    }

    #[test]
    fn test_soft_drop_speed_and_points() {
        let mut game = game_with_active(PieceKind::T);
        game.set_soft_drop(true);
        assert_eq!(game.effective_gravity_interval(), 50.0);

        game.apply_gravity(200.0);
        assert_eq!(game.active.row, SPAWN_ROW + 4);
        assert_eq!(game.score, 4);

        game.set_soft_drop(false);
        assert_eq!(game.effective_gravity_interval(), 500.0);
    }

    #[test]
    fn test_soft_drop_action_moves_without_points() {
        let mut game = game_with_active(PieceKind::T);
        assert!(game.apply_action(GameAction::SoftDrop));
        assert!(game.soft_dropping);
        assert_eq!(game.active.row, SPAWN_ROW + 1);
        assert_eq!(game.score, 0);

        assert!(game.apply_action(GameAction::SoftDropRelease));
        assert!(!game.soft_dropping);
    }

    #[test]
    fn test_hard_drop_scores_two_per_row_and_locks() {
        let mut game = game_with_active(PieceKind::O);
        let landing = game.ghost_row();
        let rows = (landing - game.active.row) as u32;
        assert_eq!(rows, 20);

        assert_eq!(game.hard_drop(), rows);
        assert_eq!(game.score, 2 * rows);
        assert_eq!(filled_cells(&game), 4);
        assert_eq!(game.board.get(BOTTOM, 4), Some(Some(PieceKind::O)));
        assert_eq!(game.active.row, SPAWN_ROW);
        assert!(!game.locking);
    }

    #[test]
    fn test_hard_drop_skips_pending_lock_delay() {
        let mut game = game_with_active(PieceKind::O);
        game.apply_gravity(100_000.0);
        assert!(game.locking);
        let score = game.score;

        assert_eq!(game.hard_drop(), 0);
        assert_eq!(game.score, score);
        assert_eq!(filled_cells(&game), 4);
    }

    #[test]
    fn test_tetris_scores_and_flashes() {
        let mut game = Game::new(5);
        for row in BOTTOM - 3..=BOTTOM {
            fill_row_except(&mut game.board, row, 9);
        }
        // Vertical I filling column 9.
        game.active = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: BOTTOM - 3,
            col: 7,
        };
        assert!(game.active.is_valid(&game.board));

        game.lock_piece();
        assert_eq!(game.score, 800);
        assert_eq!(game.lines, 4);
        assert_eq!(game.level, 0);
        assert_eq!(filled_cells(&game), 0);
        assert!(game.flash.is_active());
        assert_eq!(game.flash.toggles_remaining(), 4);

        for _ in 0..3 {
            game.update_flash(100.0);
            assert!(game.flash.is_active());
        }
        game.update_flash(100.0);
        assert!(!game.flash.is_active());
    }

    #[test]
    fn test_smaller_clears_do_not_flash() {
        let mut game = Game::new(5);
        fill_row_except(&mut game.board, BOTTOM, 9);
        game.active = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: BOTTOM - 3,
            col: 7,
        };
        game.lock_piece();
        assert_eq!(game.score, 100);
        assert_eq!(game.lines, 1);
        assert!(!game.flash.is_active());
    }

    #[test]
    fn test_score_multiplied_by_level() {
        let mut game = Game::new(5);
        game.level = 2;
        game.lines = 20;
        fill_row_except(&mut game.board, BOTTOM, 9);
        fill_row_except(&mut game.board, BOTTOM - 1, 9);
        game.active = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: BOTTOM - 3,
            col: 7,
        };
        game.lock_piece();
        assert_eq!(game.score, 300 * 3);
        assert_eq!(game.lines, 22);
    }

    #[test]
    fn test_level_up_refreshes_gravity() {
        let mut game = Game::new(5);
        game.lines = 8;
        fill_row_except(&mut game.board, BOTTOM, 9);
        fill_row_except(&mut game.board, BOTTOM - 1, 9);
        game.active = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: BOTTOM - 3,
            col: 7,
        };

        game.lock_piece();
        assert_eq!(game.lines, 10);
        assert_eq!(game.level, 1);
        // Scored at the level in force before the clear.
        assert_eq!(game.score, 300);
        assert!((game.effective_gravity_interval() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_gravity_interval() {
        let mut game = Game::new(1);
        assert_eq!(game.effective_gravity_interval(), 500.0);

        game.gravity_interval_ms = gravity_interval_ms(5);
        assert!((game.effective_gravity_interval() - 163.84).abs() < 1e-9);

        game.gravity_interval_ms = gravity_interval_ms(40);
        assert_eq!(game.effective_gravity_interval(), 50.0);

        game.gravity_interval_ms = gravity_interval_ms(0);
        game.set_soft_drop(true);
        assert_eq!(game.effective_gravity_interval(), 50.0);
    }

    #[test]
    fn test_move_and_collision() {
        let mut game = game_with_active(PieceKind::O);
        assert!(game.try_move(0, -1));
        assert_eq!(game.active.col, SPAWN_COL - 1);

        // O occupies box columns 1-2, so col -1 is the left wall.
        assert!(game.try_move(0, -3));
        assert!(!game.try_move(0, -1));
        assert_eq!(game.active.col, -1);
    }

    #[test]
    fn test_extreme_move_deltas_fail_cleanly() {
        let mut game = game_with_active(PieceKind::T);
        let before = game.active;
        let deltas = [
            (0, i8::MAX),
            (0, i8::MIN),
            (i8::MAX, 0),
            (i8::MIN, 0),
            (i8::MAX, i8::MIN),
        ];
        for (d_row, d_col) in deltas {
            assert!(!game.try_move(d_row, d_col));
            assert_eq!(game.active, before);
        }
        assert_eq!(game.status, GameStatus::Running);
    }

    #[test]
    fn test_move_resets_lock_timer_and_cancels_when_airborne() {
        let mut game = game_with_active(PieceKind::O);
        // Ledge under columns 4-5.
        game.board.set(30, 4, Some(PieceKind::Z));
        game.board.set(30, 5, Some(PieceKind::Z));

        game.apply_gravity(100_000.0);
        assert!(game.locking);
        assert_eq!(game.active.row, 28);

        game.apply_gravity(300.0);
        assert_eq!(game.lock_timer_ms, 300.0);

        // Still resting on column 4.
        assert!(game.try_move(0, -1));
        assert!(game.locking);
        assert_eq!(game.lock_timer_ms, 0.0);

        // Off the ledge entirely.
        assert!(game.try_move(0, -2));
        assert!(!game.locking);
    }

    #[test]
    fn test_rotate_resets_lock_timer() {
        let mut game = game_with_active(PieceKind::T);
        game.apply_gravity(100_000.0);
        assert!(game.locking);
        game.apply_gravity(400.0);

        assert!(game.try_rotate(RotationDirection::Clockwise));
        assert_eq!(game.lock_timer_ms, 0.0);

        // Rotation from North to East keeps it resting on the floor.
        assert!(game.locking);
        game.apply_gravity(499.0);
        assert_eq!(filled_cells(&game), 0);
    }

    #[test]
    fn test_failed_move_leaves_lock_timer() {
        let mut game = game_with_active(PieceKind::O);
        game.apply_gravity(100_000.0);
        game.apply_gravity(300.0);

        assert!(!game.try_move(1, 0));
        assert_eq!(game.lock_timer_ms, 300.0);
    }

    #[test]
    fn test_lock_delay_resets_are_unbounded() {
        // No cap on resets: sliding back and forth stalls a grounded piece
        // forever. This is accepted behavior and can be exploited.
        let mut game = game_with_active(PieceKind::O);
        game.apply_gravity(100_000.0);
        assert!(game.locking);

        for i in 0..1000 {
            game.apply_gravity(450.0);
            let d_col = if i % 2 == 0 { 1 } else { -1 };
            assert!(game.try_move(0, d_col));
        }
        assert_eq!(filled_cells(&game), 0);
        assert!(game.locking);
    }

    #[test]
    fn test_tick_routes_to_flash_first() {
        let mut game = game_with_active(PieceKind::T);
        game.flash.start();

        // Each frame spends at most one flash step, however long it was.
        for remaining in [3, 2, 1] {
            game.tick(500.0);
            assert_eq!(game.flash.toggles_remaining(), remaining);
            assert_eq!(game.active.row, SPAWN_ROW);
        }
        game.tick(500.0);
        assert!(!game.flash.is_active());
        assert_eq!(game.active.row, SPAWN_ROW);

        game.tick(500.0);
        assert_eq!(game.active.row, SPAWN_ROW + 1);
    }

    #[test]
    fn test_pause_blocks_gameplay() {
        let mut game = game_with_active(PieceKind::T);
        game.toggle_pause();
        assert_eq!(game.status, GameStatus::Paused);

        game.apply_gravity(5000.0);
        assert_eq!(game.active.row, SPAWN_ROW);
        assert!(!game.try_move(0, 1));
        assert!(!game.try_rotate(RotationDirection::Clockwise));
        assert_eq!(game.hard_drop(), 0);
        assert!(!game.apply_action(GameAction::HardDrop));
        assert_eq!(filled_cells(&game), 0);

        game.toggle_pause();
        assert_eq!(game.status, GameStatus::Running);
        game.apply_gravity(500.0);
        assert_eq!(game.active.row, SPAWN_ROW + 1);
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let mut game = Game::new(9);
        for col in 3..7 {
            game.board.set(SPAWN_ROW, col, Some(PieceKind::L));
            game.board.set(SPAWN_ROW + 1, col, Some(PieceKind::L));
        }

        game.new_piece();
        assert_eq!(game.status, GameStatus::GameOver);

        assert!(!game.try_move(0, -1));
        game.apply_gravity(10_000.0);
        game.toggle_pause();
        assert_eq!(game.status, GameStatus::GameOver);

        game.quit();
        assert_eq!(game.status, GameStatus::Quit);
    }

    #[test]
    fn test_topping_out_through_lock() {
        let mut game = Game::new(9);
        // Stack reaching into the spawn rows; two open columns so the drop
        // below cannot complete a line.
        for row in SPAWN_ROW..BOARD_HEIGHT as i8 {
            fill_row_except(&mut game.board, row, 0);
            game.board.set(row, 1, None);
        }
        game.active = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: 10,
            col: -2,
        };
        assert!(game.active.is_valid(&game.board));

        game.hard_drop();
        assert_eq!(game.status, GameStatus::GameOver);
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut game = Game::new(1);
        game.quit();
        assert_eq!(game.status, GameStatus::Quit);
        game.toggle_pause();
        assert_eq!(game.status, GameStatus::Quit);

        let mut game = Game::new(1);
        game.toggle_pause();
        assert!(game.apply_action(GameAction::Quit));
        assert_eq!(game.status, GameStatus::Quit);
    }

    #[test]
    fn test_init_restarts_session() {
        let mut game = Game::new(3);
        game.hard_drop();
        game.hard_drop();
        game.toggle_pause();
        assert!(game.score > 0);

        game.init(4);
        assert_eq!(game.status, GameStatus::Running);
        assert_eq!(game.score, 0);
        assert_eq!(filled_cells(&game), 0);
        assert_eq!(game.seed(), 4);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = game_with_active(PieceKind::O);
        game.hard_drop();

        let snap = game.snapshot();
        assert_eq!(snap.board[BOTTOM as usize][4], PieceKind::O.color_id());
        assert_eq!(snap.active.kind, game.active.kind);
        assert_eq!(snap.next, game.next);
        assert_eq!(snap.ghost_row, game.ghost_row());
        assert_eq!(snap.score, 40);
        assert_eq!(snap.status, GameStatus::Running);
        assert!(snap.playable());
        assert!(!snap.flash.active);
    }
}
