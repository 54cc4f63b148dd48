use arrayvec::ArrayVec;

use crate::types::{Action, Sprite, AREA_COLS, AREA_ROWS, MAX_HELD_ACTIONS};

/// Decorations beyond this many are left out of snapshots.
pub const MAX_SNAPSHOT_DECORATIONS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSnapshot {
    pub source: Sprite,
    pub is_open: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationSnapshot {
    pub source: Sprite,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarSnapshot {
    pub source: Sprite,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for AvatarSnapshot {
    fn default() -> Self {
        Self {
            source: Sprite::Walrus,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
        }
    }
}

/// Render-facing copy of the game state.
///
/// `tiles` is indexed `[row][col]` and only covers the fixed area.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub tiles: [[Option<TileSnapshot>; AREA_COLS as usize]; AREA_ROWS as usize],
    pub decorations: ArrayVec<DecorationSnapshot, MAX_SNAPSHOT_DECORATIONS>,
    pub avatar: AvatarSnapshot,
    pub held: ArrayVec<Action, MAX_HELD_ACTIONS>,
    pub elapsed_ms: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [[None; AREA_COLS as usize]; AREA_ROWS as usize];
        self.decorations.clear();
        self.avatar = AvatarSnapshot::default();
        self.held.clear();
        self.elapsed_ms = 0;
    }

    pub fn tile(&self, row: i32, col: i32) -> Option<TileSnapshot> {
        if !(0..AREA_ROWS).contains(&row) || !(0..AREA_COLS).contains(&col) {
            return None;
        }
        self.tiles[row as usize][col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: [[None; AREA_COLS as usize]; AREA_ROWS as usize],
            decorations: ArrayVec::new(),
            avatar: AvatarSnapshot::default(),
            held: ArrayVec::new(),
            elapsed_ms: 0,
        }
    }
}
