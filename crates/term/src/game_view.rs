//! GameView: rasterizes a frame's draw commands into a terminal framebuffer.
//!
//! Draw commands arrive in normalized coordinates (`-1.0..=1.0`, y up). The
//! view maps that square onto a bordered play area of `BOARD_WIDTH * cell_w`
//! columns by `BOARD_HEIGHT` rows, with normalized y=-1 on the bottom row.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{DrawCommand, DrawList};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

/// Vertical placement of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorY {
    #[default]
    Center,
    Top,
}

impl AnchorY {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Some(AnchorY::Center),
            "top" => Some(AnchorY::Top),
            _ => None,
        }
    }
}

/// Counters shown beside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub frame: u64,
    pub pieces: u32,
    pub spawn_overlaps: u32,
}

/// Screen placement of the play area for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    /// Play area size in terminal cells, border excluded
    pub inner_w: u16,
    pub inner_h: u16,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        self.inner_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.inner_h + 2
    }

    fn inner_x(&self) -> u16 {
        self.frame_x + 1
    }

    fn inner_y(&self) -> u16 {
        self.frame_y + 1
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_DOT: Rgb = Rgb::new(70, 70, 80);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Terminal view of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up typical terminal glyphs.
        Self::new(2)
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let inner_w = BOARD_WIDTH as u16 * self.cell_w;
        let inner_h = BOARD_HEIGHT as u16;
        let frame_x = viewport.width.saturating_sub(inner_w + 2) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(inner_h + 2) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            frame_x,
            frame_y,
            inner_w,
            inner_h,
        }
    }

    /// Rasterize one frame into an existing framebuffer.
    ///
    /// Commands are drawn in list order, so later commands paint over earlier
    /// ones. Nothing is drawn outside the play area.
    pub fn render_into(
        &self,
        frame: &DrawList,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        self.draw_play_area(fb, &layout);
        draw_border(fb, &layout);

        for cmd in frame {
            match *cmd {
                DrawCommand::Rect { x, y, w, h, color } => {
                    self.fill_normalized(fb, &layout, (x, y), (x + w, y + h), color.into())
                }
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    color,
                } => self.stroke_normalized(fb, &layout, (x0, y0), (x1, y1), color.into()),
            }
        }

        if let Some(status) = status {
            draw_side_panel(fb, &layout, status, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &DrawList, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, None, viewport, &mut fb);
        fb
    }

    fn draw_play_area(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let bg = CellStyle::solid(PLAY_BG);
        fb.fill_rect(layout.inner_x(), layout.inner_y(), layout.inner_w, layout.inner_h, ' ', bg);

        let dot = CellStyle::new(GRID_DOT, PLAY_BG);
        for row in 0..layout.inner_h {
            for col in 0..BOARD_WIDTH as u16 {
                fb.put_char(layout.inner_x() + col * self.cell_w, layout.inner_y() + row, '·', dot);
            }
        }
    }

    /// Fill the play-area cells covered by the normalized box `lo..hi`.
    fn fill_normalized(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        lo: (f32, f32),
        hi: (f32, f32),
        color: Rgb,
    ) {
        let cols = span(lo.0, hi.0, layout.inner_w);
        let rows = span(lo.1, hi.1, layout.inner_h);
        let style = CellStyle::solid(color);
        for row in rows.0..rows.1 {
            let sy = screen_row(layout, row);
            for col in cols.0..cols.1 {
                fb.put_char(layout.inner_x() + col, sy, '█', style);
            }
        }
    }

    /// Draw a line between two normalized points over what is already there.
    fn stroke_normalized(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
    ) {
        if layout.inner_w == 0 || layout.inner_h == 0 {
            return;
        }
        let (c0, r0) = (point(from.0, layout.inner_w), point(from.1, layout.inner_h));
        let (c1, r1) = (point(to.0, layout.inner_w), point(to.1, layout.inner_h));
        let glyph = if r0 == r1 {
            '─'
        } else if c0 == c1 {
            '│'
        } else {
            '•'
        };

        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        for i in 0..=steps {
            let (col, row) = if steps == 0 {
                (c0, r0)
            } else {
                (c0 + (c1 - c0) * i / steps, r0 + (r1 - r0) * i / steps)
            };
            fb.overlay_char(
                layout.inner_x() + col as u16,
                screen_row(layout, row as u16),
                glyph,
                color,
            );
        }
    }
}

/// Half-open cell range covered by normalized `lo..hi` on an axis of `cells`.
fn span(lo: f32, hi: f32, cells: u16) -> (u16, u16) {
    let to_cell = |n: f32| ((n + 1.0) * 0.5 * cells as f32).round().clamp(0.0, cells as f32) as u16;
    let (a, b) = (to_cell(lo), to_cell(hi));
    (a.min(b), a.max(b))
}

/// Cell containing a normalized coordinate; the upper edge maps to the last cell.
fn point(n: f32, cells: u16) -> i32 {
    let last = cells.saturating_sub(1) as f32;
    ((n + 1.0) * 0.5 * cells as f32).floor().clamp(0.0, last) as i32
}

/// Screen row for a play-area row counted from the bottom.
fn screen_row(layout: &BoardLayout, row_from_bottom: u16) -> u16 {
    layout.inner_y() + (layout.inner_h - 1 - row_from_bottom)
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w(), layout.frame_h());

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, layout: &BoardLayout, status: &StatusView, viewport: Viewport) {
    let panel_x = layout.frame_x.saturating_add(layout.frame_w()).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 12 {
        return;
    }

    let mut y = layout.frame_y;
    let mut row = |label: &str, value: u32| {
        fb.put_str(panel_x, y, label, LABEL);
        fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
        y = y.saturating_add(3);
    };
    row("FRAME", u32::try_from(status.frame).unwrap_or(u32::MAX));
    row("PIECES", status.pieces);
    row("OVERLAPS", status.spawn_overlaps);

    for line in ["<- ->  move", "^      rotate", "v      drop", "Esc    quit"] {
        fb.put_str(panel_x, y, line, VALUE);
        y = y.saturating_add(1);
    }
}
