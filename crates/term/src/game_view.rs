//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World pixels have y pointing up; terminal rows grow downward, so grid
//! column 0 is drawn at the bottom of the board.

use crate::core::{AvatarSnapshot, DecorationSnapshot, GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, Sprite, AREA_COLS, AREA_ROWS, TILE_SIZE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BACKDROP: Rgb = Rgb::new(0, 0, 0);

const KEY_LEGEND: [(&str, &str); 7] = [
    ("arrows", "move"),
    ("x", "fade"),
    ("b", "roses"),
    ("t", "tree"),
    ("w", "water"),
    ("d", "dirt"),
    ("q", "quit"),
];

/// How a sprite looks in a terminal: background fill, glyph, glyph color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Look {
    bg: Rgb,
    ch: char,
    fg: Rgb,
}

fn look(sprite: Sprite) -> Look {
    match sprite {
        Sprite::Dirt => Look {
            bg: Rgb::new(96, 70, 44),
            ch: '·',
            fg: Rgb::new(130, 100, 66),
        },
        Sprite::Stone => Look {
            bg: Rgb::new(88, 88, 96),
            ch: '▓',
            fg: Rgb::new(124, 124, 134),
        },
        Sprite::Water => Look {
            bg: Rgb::new(30, 80, 160),
            ch: '~',
            fg: Rgb::new(150, 200, 245),
        },
        Sprite::Roses => Look {
            bg: Rgb::new(96, 70, 44),
            ch: '*',
            fg: Rgb::new(225, 45, 80),
        },
        Sprite::Tree => Look {
            bg: Rgb::new(34, 84, 38),
            ch: '^',
            fg: Rgb::new(90, 200, 90),
        },
        Sprite::Walrus => Look {
            bg: Rgb::new(120, 90, 70),
            ch: '@',
            fg: Rgb::new(255, 255, 255),
        },
    }
}

/// A terminal renderer for the tile area and its side panel.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in terminal cells, without the border.
    pub fn board_size(&self) -> (u16, u16) {
        (
            AREA_ROWS as u16 * self.cell_w,
            AREA_COLS as u16 * self.cell_h,
        )
    }

    /// Top-left corner of the bordered frame within the viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (board_w, board_h) = self.board_size();
        let start_x = viewport.width.saturating_sub(board_w + 2) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h + 2) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Top-left screen position of a grid cell, given the frame origin.
    pub fn cell_origin(&self, frame: (u16, u16), cell: GridPos) -> Option<(u16, u16)> {
        if !cell.in_area() {
            return None;
        }
        let x = frame.0 + 1 + cell.row as u16 * self.cell_w;
        let y = frame.1 + 1 + (AREA_COLS - 1 - cell.col) as u16 * self.cell_h;
        Some((x, y))
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// Allocation-free once the framebuffer has its final size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame_origin(viewport);
        let (board_w, board_h) = self.board_size();

        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKDROP);
        self.draw_border(fb, frame.0, frame.1, board_w + 2, board_h + 2, border);

        for row in 0..AREA_ROWS {
            for col in 0..AREA_COLS {
                let cell = GridPos::new(row, col);
                if let (Some(tile), Some(origin)) = (snap.tile(row, col), self.cell_origin(frame, cell)) {
                    self.draw_tile(fb, origin, tile);
                }
            }
        }

        for deco in &snap.decorations {
            self.draw_decoration(fb, frame, deco);
        }

        self.draw_avatar(fb, frame, &snap.avatar);
        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
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

    fn draw_tile(&self, fb: &mut FrameBuffer, origin: (u16, u16), tile: TileSnapshot) {
        let look = look(tile.source);
        let faded = tile.opacity < 1.0;
        let style = CellStyle {
            fg: look.fg.over(BACKDROP, tile.opacity),
            bg: look.bg.over(BACKDROP, tile.opacity),
            bold: false,
            dim: faded,
        };
        fb.fill_rect(origin.0, origin.1, self.cell_w, self.cell_h, ' ', style);
        // One texture glyph per tile keeps the grid readable.
        fb.put_char(origin.0 + self.cell_w / 2, origin.1 + self.cell_h / 2, look.ch, style);
    }

    fn draw_decoration(&self, fb: &mut FrameBuffer, frame: (u16, u16), deco: &DecorationSnapshot) {
        let look = look(deco.source);
        let fg = look.fg.over(BACKDROP, deco.opacity);
        let size = TILE_SIZE as f32;
        let Some((x0, y0, x1, y1)) = self.project(frame, deco.x, deco.y, size, size) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                fb.overlay_char(x, y, look.ch, fg, true);
            }
        }
    }

    fn draw_avatar(&self, fb: &mut FrameBuffer, frame: (u16, u16), avatar: &AvatarSnapshot) {
        let look = look(avatar.source);
        let style = CellStyle::new(look.fg, look.bg).bold();
        if let Some((x0, y0, x1, y1)) = self.project(frame, avatar.x, avatar.y, avatar.w, avatar.h) {
            fb.fill_rect(x0, y0, x1 - x0, y1 - y0, look.ch, style);
        }
    }

    /// Project a pixel rectangle onto the board, clipped to its interior.
    ///
    /// Returns `(x0, y0, x1, y1)` with exclusive ends, or `None` when nothing
    /// is visible.
    fn project(&self, frame: (u16, u16), x: f32, y: f32, w: f32, h: f32) -> Option<(u16, u16, u16, u16)> {
        let (board_w, board_h) = self.board_size();
        let tile = TILE_SIZE as f32;
        let world_h = (AREA_COLS * TILE_SIZE) as f32;
        let sx = |px: f32| (px * self.cell_w as f32 / tile).round();
        let sy = |py: f32| ((world_h - py) * self.cell_h as f32 / tile).round();

        let x0 = sx(x).clamp(0.0, board_w as f32) as u16;
        let x1 = sx(x + w).clamp(0.0, board_w as f32) as u16;
        let y0 = sy(y + h).clamp(0.0, board_h as f32) as u16;
        let y1 = sy(y).clamp(0.0, board_h as f32) as u16;
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        let ox = frame.0 + 1;
        let oy = frame.1 + 1;
        Some((ox + x0, oy + y0, ox + x1, oy + y1))
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: (u16, u16)) {
        let (board_w, _) = self.board_size();
        let panel_x = frame.0.saturating_add(board_w + 2).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BACKDROP).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKDROP);
        let dim = CellStyle { dim: true, ..value };

        let avatar = &snap.avatar;
        let cell = GridPos::from_pixel(avatar.x, avatar.y);

        let mut y = frame.1;
        fb.put_str(panel_x, y, "GUFF", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "POS", label);
        y = y.saturating_add(1);
        fb.put_fmt(panel_x, y, format_args!("{:.1}, {:.1}", avatar.x, avatar.y), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CELL", label);
        y = y.saturating_add(1);
        fb.put_fmt(panel_x, y, format_args!("{}, {}", cell.row, cell.col), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_fmt(
            panel_x,
            y,
            format_args!("{}.{}s", snap.elapsed_ms / 1000, (snap.elapsed_ms % 1000) / 100),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HELD", label);
        y = y.saturating_add(1);
        if snap.held.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        } else {
            let mut x = panel_x;
            for action in &snap.held {
                let name = action.as_str();
                fb.put_str(x, y, name, value);
                x = x.saturating_add(name.len() as u16 + 1);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for (key, what) in KEY_LEGEND {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, value);
            fb.put_str(panel_x + 7, y, what, dim);
            y = y.saturating_add(1);
        }
    }
}
