//! GameView: paints a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: stats panel, playfield box (visible rows only, two
//! columns per cell), then the next/status/theme/legend panel.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::theme::Theme;
use crate::types::{
    GameStatus, PieceKind, Rotation, BOARD_WIDTH, HIDDEN_HEIGHT, VISIBLE_HEIGHT,
};

const LEFT_PANEL_W: u16 = 14;
const RIGHT_PANEL_W: u16 = 16;
const PANEL_GAP: u16 = 2;

const LEGEND: [&str; 5] = [
    "Arrows:Move",
    "Z/Up:CW X:CCW",
    "Space:Drop",
    "P:Pause Q:Quit",
    "T:Theme",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What to draw in one visible board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Empty,
    Ghost,
    Filled(PieceKind),
}

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn field_w(&self) -> u16 {
        BOARD_WIDTH as u16 * self.cell_w
    }

    /// Total size of the drawn layout.
    pub fn layout_size(&self) -> (u16, u16) {
        let w = LEFT_PANEL_W + self.field_w() + 2 + PANEL_GAP + RIGHT_PANEL_W;
        let h = VISIBLE_HEIGHT as u16 + 2;
        (w, h)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path; the framebuffer is only
    /// reallocated when the viewport grows.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        theme: &Theme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (layout_w, layout_h) = self.layout_size();
        let origin_x = viewport.width.saturating_sub(layout_w) / 2;
        let origin_y = viewport.height.saturating_sub(layout_h) / 2;

        // Border sits just right of the stats panel; cells start one further in.
        let frame_x = origin_x + LEFT_PANEL_W;
        let field_x = frame_x + 1;
        let field_y = origin_y + 1;

        self.draw_border(
            fb,
            frame_x,
            origin_y,
            self.field_w() + 2,
            layout_h,
            CellStyle::fg(theme.border),
        );
        self.draw_playfield(fb, snap, theme, field_x, field_y);
        self.draw_stats(fb, snap, theme, origin_x, field_y);

        let panel_x = field_x + self.field_w() + 1 + PANEL_GAP;
        self.draw_right_panel(fb, snap, theme, panel_x, field_y);

        match snap.status {
            GameStatus::Paused => self.draw_overlay_text(fb, field_x, field_y, "PAUSED"),
            GameStatus::GameOver => self.draw_overlay_text(fb, field_x, field_y, "GAME OVER"),
            GameStatus::Init | GameStatus::Running | GameStatus::Quit => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, theme: &Theme, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, theme, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_playfield(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        theme: &Theme,
        field_x: u16,
        field_y: u16,
    ) {
        let mut display = [[CellKind::Empty; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize];

        for (r, row) in display.iter_mut().enumerate() {
            let board_row = &snap.board[HIDDEN_HEIGHT as usize + r];
            for (c, cell) in row.iter_mut().enumerate() {
                if let Some(kind) = PieceKind::from_color_id(board_row[c]) {
                    *cell = CellKind::Filled(kind);
                }
            }
        }

        if snap.playable() {
            for (row, col) in snap.ghost_cells() {
                if let Some(cell) = visible_cell(&mut display, row, col) {
                    if *cell == CellKind::Empty {
                        *cell = CellKind::Ghost;
                    }
                }
            }
            // Active piece overwrites the ghost where they overlap.
            for (row, col) in snap.active_cells() {
                if let Some(cell) = visible_cell(&mut display, row, col) {
                    *cell = CellKind::Filled(snap.active.kind);
                }
            }
        }

        let inverted = snap.flash.inverted();
        for (r, row) in display.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let x = field_x + c as u16 * self.cell_w;
                let y = field_y + r as u16;
                self.draw_cell(fb, x, y, *cell, theme, inverted);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        cell: CellKind,
        theme: &Theme,
        inverted: bool,
    ) {
        let (ch, style) = match cell {
            CellKind::Empty => (' ', CellStyle::default()),
            CellKind::Ghost => ('░', CellStyle::fg(theme.ghost).dim()),
            CellKind::Filled(kind) => {
                let style = CellStyle::fg(theme.piece(kind)).bold();
                ('█', if inverted { style.reversed() } else { style })
            }
        };
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, theme: &Theme, x: u16, y: u16) {
        let label = CellStyle::fg(theme.label).bold();
        let value = CellStyle::fg(theme.label);

        let x = x + 2;
        let rows = [("SCORE:", snap.score), ("LINES:", snap.lines), ("LEVEL:", snap.level)];
        for (i, (name, n)) in rows.into_iter().enumerate() {
            let row = y + i as u16 * 3;
            fb.put_str(x, row, name, label);
            fb.put_u32(x, row + 1, n, value);
        }
    }

    fn draw_right_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        theme: &Theme,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle::fg(theme.label).bold();
        let legend = CellStyle::fg(theme.legend).dim();

        fb.put_str(x, y, "NEXT:", label);
        let next_style = CellStyle::fg(theme.piece(snap.next)).bold();
        for (dr, dc) in get_shape(snap.next, Rotation::North) {
            let px = x + dc as u16 * self.cell_w;
            let py = y + 1 + dr as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', next_style);
        }

        let status_y = y + 6;
        match snap.status {
            GameStatus::Paused => {
                fb.put_str(x, status_y, "** PAUSED **", CellStyle::fg(Rgb::new(255, 255, 255)).bold());
                fb.put_str(x, status_y + 1, "P to resume", legend);
            }
            GameStatus::GameOver => {
                fb.put_str(x, status_y, "GAME OVER!", CellStyle::fg(Rgb::new(255, 255, 255)).bold());
                fb.put_str(x, status_y + 1, "Q to quit", legend);
            }
            GameStatus::Init | GameStatus::Running | GameStatus::Quit => {}
        }

        fb.put_str(x, y + 9, "THEME:", label);
        fb.put_str(x, y + 10, theme.name, legend);

        for (i, line) in LEGEND.iter().enumerate() {
            fb.put_str(x, y + 12 + i as u16, line, legend);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, field_x: u16, field_y: u16, text: &str) {
        let mid_y = field_y + VISIBLE_HEIGHT as u16 / 2;
        let text_w = text.chars().count() as u16;
        let x = field_x + self.field_w().saturating_sub(text_w) / 2;
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Map a board coordinate to its visible display slot, if it has one.
fn visible_cell(
    display: &mut [[CellKind; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize],
    row: i8,
    col: i8,
) -> Option<&mut CellKind> {
    let r = usize::try_from(row as i16 - HIDDEN_HEIGHT as i16).ok()?;
    let c = usize::try_from(col).ok()?;
    display.get_mut(r)?.get_mut(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::theme::{MATRIX, PASTEL};
    use crate::types::GameAction;

    const VIEW: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            let row = fb.row_text(y);
            row.find(needle).map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }

    fn count_char(fb: &FrameBuffer, ch: char) -> usize {
        fb.cells().iter().filter(|c| c.ch == ch).count()
    }

    #[test]
    fn test_layout_fits_standard_terminal() {
        let (w, h) = GameView::default().layout_size();
        assert!(w <= 80 && h <= 24);
    }

    #[test]
    fn test_renders_panels() {
        let snap = Game::new(1).snapshot();
        let fb = GameView::default().render(&snap, &PASTEL, VIEW);

        assert!(find_text(&fb, "SCORE:").is_some());
        assert!(find_text(&fb, "LINES:").is_some());
        assert!(find_text(&fb, "LEVEL:").is_some());
        assert!(find_text(&fb, "NEXT:").is_some());
        assert!(find_text(&fb, "PASTEL").is_some());
        assert!(find_text(&fb, "T:Theme").is_some());
        assert!(find_text(&fb, "PAUSED").is_none());
    }

    #[test]
    fn test_spawned_piece_is_above_visible_area() {
        // Spawn row 18 is hidden, so only the ghost and the next preview show.
        let snap = Game::new(1).snapshot();
        let fb = GameView::default().render(&snap, &PASTEL, VIEW);
        assert_eq!(count_char(&fb, '░'), 8);
        assert_eq!(count_char(&fb, '█'), 8);
    }

    #[test]
    fn test_active_piece_drawn_once_visible() {
        let mut game = Game::new(1);
        game.tick(1000.0);
        game.tick(1000.0);
        game.tick(1000.0);
        let snap = game.snapshot();
        assert!(snap.active.row >= HIDDEN_HEIGHT as i8);

        let fb = GameView::default().render(&snap, &PASTEL, VIEW);
        // 4 active cells + 4 preview cells, 2 columns each.
        assert_eq!(count_char(&fb, '█'), 16);
    }

    #[test]
    fn test_locked_cells_and_flash_inversion() {
        let mut snap = Game::new(1).snapshot();
        snap.status = GameStatus::GameOver;
        snap.next = PieceKind::I;
        snap.board[39][0] = PieceKind::Z.color_id();

        let view = GameView::default();
        let fb = view.render(&snap, &PASTEL, VIEW);
        let locked: Vec<_> = fb
            .cells()
            .iter()
            .filter(|c| c.ch == '█' && c.style.fg == PASTEL.piece(PieceKind::Z))
            .collect();
        assert_eq!(locked.len(), 2);
        assert!(locked.iter().all(|c| !c.style.reverse));

        snap.flash.active = true;
        snap.flash.toggles_remaining = 3;
        let fb = view.render(&snap, &PASTEL, VIEW);
        assert!(fb
            .cells()
            .iter()
            .filter(|c| c.style.fg == PASTEL.piece(PieceKind::Z))
            .any(|c| c.style.reverse));
    }

    #[test]
    fn test_pause_and_game_over_overlays() {
        let mut game = Game::new(1);
        game.apply_action(GameAction::Pause);
        let fb = GameView::default().render(&game.snapshot(), &PASTEL, VIEW);
        assert!(find_text(&fb, "** PAUSED **").is_some());
        assert!(find_text(&fb, "P to resume").is_some());
        // Pieces are hidden while paused.
        assert_eq!(count_char(&fb, '░'), 0);

        let mut snap = game.snapshot();
        snap.status = GameStatus::GameOver;
        let fb = GameView::default().render(&snap, &PASTEL, VIEW);
        assert!(find_text(&fb, "GAME OVER!").is_some());
    }

    #[test]
    fn test_theme_colours_applied() {
        let snap = Game::new(1).snapshot();
        let fb = GameView::default().render(&snap, &MATRIX, VIEW);
        assert!(find_text(&fb, "MATRIX").is_some());
        let (x, y) = find_text(&fb, "NEXT:").unwrap();
        assert_eq!(fb.get(x, y).unwrap().style.fg, MATRIX.label);
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let snap = Game::new(1).snapshot();
        let fb = GameView::default().render(&snap, &PASTEL, Viewport::new(10, 5));
        assert_eq!((fb.width(), fb.height()), (10, 5));
    }
}
