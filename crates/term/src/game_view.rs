//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, PREVIEW_SIZE};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Board, landing shadow, next-piece box, score and end-of-game banner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Screen origin of the board frame and of the cells inside it
#[derive(Debug, Clone, Copy)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 * self.cell_h + 2;
        let layout = Layout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::plain(WELL_BG, WELL_BG),
        );
        draw_border(fb, layout, Style::plain(Rgb::new(200, 200, 200), PANEL_BG));

        for row in 0..snap.height as usize {
            for col in 0..snap.width as usize {
                match snap.cell(row, col) {
                    Some(kind) => self.draw_block(fb, layout, col as i16, row as i16, kind),
                    None => {
                        let dot = Style {
                            dim: true,
                            ..Style::plain(Rgb::new(90, 90, 100), WELL_BG)
                        };
                        self.fill_cell(fb, layout, col as i16, row as i16, '·', dot);
                    }
                }
            }
        }

        if let (Some(active), Some(ghost_y)) = (&snap.active, snap.ghost_y) {
            let shadow = Style {
                dim: true,
                ..Style::plain(Rgb::new(140, 140, 140), WELL_BG)
            };
            for (dx, dy) in active.shape.cells() {
                let (x, y) = (active.x as i16 + dx as i16, ghost_y as i16 + dy as i16);
                self.fill_cell(fb, layout, x, y, '░', shadow);
            }
        }

        if let Some(active) = &snap.active {
            for (dx, dy) in active.shape.cells() {
                let (x, y) = (active.x as i16 + dx as i16, active.y as i16 + dy as i16);
                self.draw_block(fb, layout, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over() {
            draw_banner(fb, layout, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i16, y: i16, kind: PieceKind) {
        let style = Style {
            bold: true,
            ..Style::plain(piece_color(kind), WELL_BG)
        };
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    /// Paint one board cell; cells above the top edge or outside the well are
    /// skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: i16, y: i16, ch: char, style: Style) {
        let cols = (layout.frame_w - 2) / self.cell_w;
        let rows = (layout.frame_h - 2) / self.cell_h;
        if x < 0 || y < 0 || x as u16 >= cols || y as u16 >= rows {
            return;
        }
        let px = layout.frame_x + 1 + x as u16 * self.cell_w;
        let py = layout.frame_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: Layout) {
        let panel_x = layout.frame_x.saturating_add(layout.frame_w).saturating_add(2);
        let preview_w = PREVIEW_SIZE as u16 * self.cell_w;
        if panel_x.saturating_add(preview_w) > viewport.width {
            return;
        }

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let box_style = Style::plain(WELL_BG, WELL_BG);
        fb.fill_rect(panel_x, y, preview_w, PREVIEW_SIZE as u16 * self.cell_h, ' ', box_style);
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x, y, &next.shape, next.kind);
        }
        y = y.saturating_add(PREVIEW_SIZE as u16 * self.cell_h + 1);

        let hint = Style {
            dim: true,
            ..value
        };
        for line in ["←→ move", "↑ rotate", "↓ drop", "space slam", "n new  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Draw a shape in the preview box, anchored at its top-left corner.
    fn draw_preview(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, shape: &Shape, kind: PieceKind) {
        let style = Style {
            bold: true,
            ..Style::plain(piece_color(kind), WELL_BG)
        };
        for (dx, dy) in shape.cells() {
            let px = x0 + dx as u16 * self.cell_w;
            let py = y0 + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: Style) {
    let Layout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
    } = layout;

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
}

/// "GAME OVER" with the final score, centered on the well.
fn draw_banner(fb: &mut FrameBuffer, layout: Layout, score: u32) {
    let style = Style {
        bold: true,
        ..Style::plain(Rgb::new(255, 255, 255), PANEL_BG)
    };
    let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
    let center = |text_w: u16| layout.frame_x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);

    fb.put_str(center(9), mid_y.saturating_sub(1), "GAME OVER", style);

    let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
    let x = center(6 + digits);
    fb.put_str(x, mid_y, "SCORE ", style);
    fb.put_u32(x + 6, mid_y, score, style);
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
