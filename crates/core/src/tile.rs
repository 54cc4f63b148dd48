//! Tile module - a single grid cell
//!
//! A tile is either open (walkable) or closed, and carries the sprite and
//! opacity the host draws it with. Tiles are created when the area map is built
//! or when something is planted, and are never removed afterwards; debug
//! actions only relabel them.

use glam::Vec2;

use crate::types::Sprite;

/// A grid cell the avatar may or may not walk on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub is_open: bool,
    pub source: Sprite,
    pub opacity: f32,
    /// Pixel position of the bottom-left corner, set when the tile is placed
    pub position: Vec2,
}

impl Tile {
    /// Create an open tile with the given sprite
    pub fn new(source: Sprite) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Create a closed tile with the given sprite
    pub fn wall(source: Sprite) -> Self {
        Self {
            is_open: false,
            source,
            ..Self::default()
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            is_open: true,
            source: Sprite::Dirt,
            opacity: 1.0,
            position: Vec2::ZERO,
        }
    }
}
