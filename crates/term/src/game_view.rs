//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{GameEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Lays out the playfield and side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// `notice` is the most recent event to show in the side panel.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        notice: Option<GameEvent>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            Style::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let empty = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.draw_block(fb, origin_x, origin_y, x, y, *kind),
                    None => self.fill_board_cell(fb, origin_x, origin_y, x, y, '·', empty),
                }
            }
        }

        let ghost = Style::new(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
        for (x, y) in visible_cells(&snap.ghost) {
            self.fill_board_cell(fb, origin_x, origin_y, x, y, '░', ghost);
        }
        for (x, y) in visible_cells(&snap.active) {
            self.draw_block(fb, origin_x, origin_y, x, y, snap.active.kind);
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, notice, viewport, panel_x, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        notice: Option<GameEvent>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, notice, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style::new(piece_color(kind), PLAYFIELD_BG).bold();
        self.fill_board_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        notice: Option<GameEvent>,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if viewport.width.saturating_sub(panel_x) < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        match snap.hold {
            Some(held) => {
                let style = if snap.can_hold { value } else { value.dim() };
                fb.put_str(panel_x + 5, y, held.kind.as_str(), style);
                self.draw_preview(fb, panel_x, y + 1, held.kind, snap.can_hold);
            }
            None => fb.put_str(panel_x + 5, y, "-", value),
        }
        y += 4;

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next.as_str(), value);
        self.draw_preview(fb, panel_x, y + 1, snap.next, true);
        y += 4;

        if snap.top_outs > 0 {
            fb.put_str(panel_x, y, "RESETS", label);
            fb.put_u32(panel_x + 7, y, snap.top_outs, value);
        }
        y += 2;

        if let Some(event) = notice {
            let style = if event.is_rejection() {
                Style::new(Rgb::new(220, 80, 80), PANEL_BG)
            } else {
                value.bold()
            };
            fb.put_str(panel_x, y, notice_text(event), style);
        }
    }

    /// Draw a piece in spawn orientation, one glyph pair per mino.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, lit: bool) {
        let mut style = Style::new(piece_color(kind), PANEL_BG);
        if !lit {
            style = style.dim();
        }
        let shape = Piece::new(kind).shape;
        // Skip blank leading rows so every preview starts on the same line.
        let first_row = shape.minos().map(|(_, row)| row).min().unwrap_or(0);
        for (col, row) in shape.minos() {
            let px = x.saturating_add(col as u16 * 2);
            let py = y.saturating_add((row - first_row) as u16);
            fb.put_str(px, py, "██", style);
        }
    }
}

/// Short panel label for an event.
pub fn notice_text(event: GameEvent) -> &'static str {
    match event {
        GameEvent::Rotated => "ROTATE",
        GameEvent::RotateRejected => "NO ROOM",
        GameEvent::HardDropped => "DROP",
        GameEvent::Held => "HOLD",
        GameEvent::HoldRejected => "HOLD USED",
        GameEvent::Locked { lines_cleared, .. } => match lines_cleared {
            0 => "LOCK",
            1 => "SINGLE",
            2 => "DOUBLE",
            3 => "TRIPLE",
            _ => "TETRIS",
        },
        GameEvent::ToppedOut => "TOP OUT",
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// On-board cells of a piece; rows above the top edge are not drawn.
fn visible_cells(piece: &Piece) -> impl Iterator<Item = (u16, u16)> + '_ {
    piece.cells().filter_map(|(x, y)| {
        let on_board = (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y);
        on_board.then_some((x as u16, y as u16))
    })
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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
