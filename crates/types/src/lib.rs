//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Area Dimensions
//!
//! The walkable area is a fixed grid of square tiles:
//!
//! - **Rows**: 15 (indexed 0-14), laid out along the pixel x axis
//! - **Columns**: 10 (indexed 0-9), laid out along the pixel y axis
//! - **Tile size**: 64 pixels
//!
//! Every tile on the outer border is a closed stone wall.
//!
//! # Timing and Movement Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `AVATAR_SPEED` | 2.2 | Pixels moved per tick on each held axis |
//! | `DEFAULT_KEY_RELEASE_TIMEOUT_MS` | 150 | Stale-key timeout for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use guff_types::{Action, GridPos, Sprite, AREA_COLS, AREA_ROWS, TILE_SIZE};
//!
//! let action = Action::from_str("b").unwrap();
//! assert_eq!(action, Action::PlantRoses);
//! assert_eq!(Sprite::Roses.as_str(), "roses.png");
//!
//! // Pixel <-> grid conversion always goes through TILE_SIZE.
//! let cell = GridPos::from_pixel(130.0, 70.5);
//! assert_eq!(cell, GridPos::new(2, 1));
//! assert_eq!(cell.origin(), (128.0, 64.0));
//!
//! assert_eq!(AREA_ROWS, 15);
//! assert_eq!(AREA_COLS, 10);
//! ```

/// Number of tile rows in the area (along pixel x)
pub const AREA_ROWS: i32 = 15;

/// Number of tile columns in the area (along pixel y)
pub const AREA_COLS: i32 = 10;

/// Edge length of one square tile in pixels
pub const TILE_SIZE: i32 = 64;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Avatar speed in pixels per tick
pub const AVATAR_SPEED: f32 = 2.2;

/// Avatar edge length in pixels (one tile)
pub const AVATAR_SIZE: f32 = TILE_SIZE as f32;

/// Grid cell the avatar is placed on when a game starts
pub const AVATAR_START: GridPos = GridPos::new(2, 2);

/// Grid cell of the decorative rose patch placed at startup
pub const DECORATION_CELL: GridPos = GridPos::new(5, 5);

/// Opacity applied by the `x` debug action
pub const FADED_OPACITY: f32 = 0.5;

/// Held keys with no refresh for this long are released when the terminal
/// cannot report key-release events.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Upper bound on distinct actions held at once (one per [`Action`] variant).
pub const MAX_HELD_ACTIONS: usize = Action::ALL.len();


/// An integer (row, column) grid coordinate.
///
/// `row` runs along pixel x and `col` along pixel y; a cell's pixel origin is
/// `(row * TILE_SIZE, col * TILE_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Grid cell containing a pixel position.
    ///
    /// Each component is truncated toward zero and then floor-divided by
    /// [`TILE_SIZE`].
    pub fn from_pixel(x: f32, y: f32) -> Self {
        Self {
            row: (x as i32).div_euclid(TILE_SIZE),
            col: (y as i32).div_euclid(TILE_SIZE),
        }
    }

    /// Pixel position of this cell's bottom-left corner.
    pub fn origin(&self) -> (f32, f32) {
        (
            (self.row * TILE_SIZE) as f32,
            (self.col * TILE_SIZE) as f32,
        )
    }

    /// Check if the cell lies on the outer border of the fixed area
    pub fn is_border(&self) -> bool {
        self.row == 0 || self.row == AREA_ROWS - 1 || self.col == 0 || self.col == AREA_COLS - 1
    }

    /// Check if the cell lies within the fixed area
    pub fn in_area(&self) -> bool {
        (0..AREA_ROWS).contains(&self.row) && (0..AREA_COLS).contains(&self.col)
    }
}

/// Visual source of a tile, decoration or avatar.
///
/// The core only stores the identifier; hosts resolve it to something drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Walrus,
    Dirt,
    Stone,
    Roses,
    Tree,
    Water,
}

impl Sprite {
    /// Asset file name for this sprite
    ///
    /// # Examples
    ///
    /// ```
    /// use guff_types::Sprite;
    ///
    /// assert_eq!(Sprite::Stone.as_str(), "stone_64.png");
    /// assert_eq!(Sprite::Water.as_str(), "water1.jpg");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Sprite::Walrus => "walrus.png",
            Sprite::Dirt => "dirt_64.png",
            Sprite::Stone => "stone_64.png",
            Sprite::Roses => "roses.png",
            Sprite::Tree => "tree.png",
            Sprite::Water => "water1.jpg",
        }
    }

    /// Parse an asset file name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "walrus.png" => Some(Sprite::Walrus),
            "dirt_64.png" => Some(Sprite::Dirt),
            "stone_64.png" => Some(Sprite::Stone),
            "roses.png" => Some(Sprite::Roses),
            "tree.png" => Some(Sprite::Tree),
            "water1.jpg" => Some(Sprite::Water),
            _ => None,
        }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Sprite::Dirt
    }
}

/// Semantic actions bound to keys
///
/// Directions steer the avatar; the rest are debug actions that fire on every
/// tick their key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Make tiles under the avatar semi-transparent (`x`)
    Fade,
    /// Plant a rose tile at the avatar's cell (`b`)
    PlantRoses,
    /// Plant a tree tile at the avatar's cell (`t`)
    PlantTree,
    /// Repaint tiles under the avatar with water (`w`)
    PaintWater,
    /// Repaint tiles under the avatar with dirt (`d`)
    PaintDirt,
    /// End the session (`q`)
    Quit,
}

impl Action {
    /// Every action, in dispatch order.
    pub const ALL: [Action; 10] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Fade,
        Action::PlantRoses,
        Action::PlantTree,
        Action::PaintWater,
        Action::PaintDirt,
        Action::Quit,
    ];

    /// Parse an action label
    ///
    /// # Examples
    ///
    /// ```
    /// use guff_types::Action;
    ///
    /// assert_eq!(Action::from_str("up"), Some(Action::Up));
    /// assert_eq!(Action::from_str("q"), Some(Action::Quit));
    /// assert_eq!(Action::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Action::Up),
            "down" => Some(Action::Down),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "x" => Some(Action::Fade),
            "b" => Some(Action::PlantRoses),
            "t" => Some(Action::PlantTree),
            "w" => Some(Action::PaintWater),
            "d" => Some(Action::PaintDirt),
            "q" => Some(Action::Quit),
            _ => None,
        }
    }

    /// Action label (direction name, or the key letter for debug actions)
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Fade => "x",
            Action::PlantRoses => "b",
            Action::PlantTree => "t",
            Action::PaintWater => "w",
            Action::PaintDirt => "d",
            Action::Quit => "q",
        }
    }

    pub fn is_movement(&self) -> bool {
        matches!(self, Action::Up | Action::Down | Action::Left | Action::Right)
    }
}

/// Result of one game tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The quit action was held; the host should end the session.
    Quit,
}
