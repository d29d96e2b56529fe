//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::notices::NoticeView;
use crate::types::{Cell, EMPTY};

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

/// Block colors by cell id; index 0 (empty) is never painted.
const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0xFF, 0x69, 0xB4),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0xFF, 0x00, 0x00),
];

const WELL_BG: Rgb = Rgb::new(0x11, 0x11, 0x11);

/// Color of a cell id, or `None` for empty and unknown ids.
pub fn cell_color(cell: Cell) -> Option<Rgb> {
    if cell == EMPTY {
        return None;
    }
    PALETTE.get(cell as usize).copied()
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
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

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        notices: &NoticeView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let well_w = (snap.width as u16).saturating_mul(self.cell_w);
        let well_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame_w = well_w.saturating_add(2);
        let frame_h = well_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            well_w,
            well_h,
            ' ',
            CellStyle::plain(WELL_BG, WELL_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells with the active piece painted over them.
        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(color) = cell_color(snap.cell_at(x, y)) {
                    self.draw_block(fb, start_x, start_y, x as u16, y as u16, color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(final_score) = notices.final_score {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
            self.draw_overlay_number(fb, start_x, start_y, frame_w, frame_h, 1, final_score);
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "ENTER: PLAY");
        } else if !snap.running {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "STOPPED");
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 1, "ENTER: PLAY");
        } else if notices.clear_banner {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, -3, "WELL DONE!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        notices: &NoticeView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, notices, viewport, &mut fb);
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

    /// One arena cell: the leftmost column lightened, like a lit edge.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: Rgb,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        let body = CellStyle::plain(color, WELL_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', body);
        let edge = CellStyle::plain(color.lighten(0.3), WELL_BG);
        fb.fill_rect(px, py, 1, self.cell_h, '█', edge);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        for line in ["←→ move", "↑ z rotate", "↓ drop", "enter start", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Centered text, `line` rows away from the middle of the frame.
    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: i16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add_signed(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_number(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: i16,
        value: u32,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add_signed(line);
        let digits = value.checked_ilog10().unwrap_or(0) as u16 + 1;
        let x = start_x.saturating_add(frame_w.saturating_sub(digits) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_u32(x, mid_y, value, style);
    }
}
