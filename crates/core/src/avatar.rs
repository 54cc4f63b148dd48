//! Avatar module - the player-controlled walker
//!
//! Movement is resolved one candidate step at a time against the area's
//! passability: first the full velocity, then its horizontal part alone, then
//! its vertical part alone. The first candidate whose bounding rectangle lands
//! only on open tiles wins; if none does the avatar stays put.

use glam::Vec2;

use crate::area::{Area, Placeable, Rect};
use crate::types::{GridPos, Sprite, AVATAR_SIZE, AVATAR_SPEED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    position: Vec2,
    size: Vec2,
    velocity: Vec2,
    speed: f32,
    user_controllable: bool,
    source: Sprite,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::splat(AVATAR_SIZE),
            velocity: Vec2::ZERO,
            speed: AVATAR_SPEED,
            user_controllable: true,
            source: Sprite::Walrus,
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn source(&self) -> Sprite {
        self.source
    }

    pub fn is_user_controllable(&self) -> bool {
        self.user_controllable
    }

    pub fn set_user_controllable(&mut self, controllable: bool) {
        self.user_controllable = controllable;
    }

    /// Bounding rectangle at the current position
    pub fn bounds(&self) -> Rect {
        self.bounds_at(self.position)
    }

    /// Bounding rectangle if the avatar stood at `pos`
    pub fn bounds_at(&self, pos: Vec2) -> Rect {
        Rect::new(pos, self.size)
    }

    /// Grid cell containing the avatar's bottom-left corner
    pub fn cell(&self) -> GridPos {
        GridPos::from_pixel(self.position.x, self.position.y)
    }

    /// Set the velocity used by the next [`Avatar::update_position`]
    pub fn move_intent(&mut self, vx: f32, vy: f32) {
        self.velocity = Vec2::new(vx, vy);
    }

    /// Step by the current velocity, sliding along one axis when blocked.
    ///
    /// Returns true if a candidate position was accepted. Does nothing when the
    /// avatar is not user-controllable.
    pub fn update_position(&mut self, area: &Area) -> bool {
        if !self.user_controllable {
            return false;
        }

        let candidates = [
            self.velocity,
            Vec2::new(self.velocity.x, 0.0),
            Vec2::new(0.0, self.velocity.y),
        ];
        for step in candidates {
            let next = self.position + step;
            if area.is_position_allowed(self.bounds_at(next)) {
                self.position = next;
                return true;
            }
        }

        log::trace!("avatar blocked at {:?} with velocity {:?}", self.position, self.velocity);
        false
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Placeable for Avatar {
    fn set_position(&mut self, pos: Vec2) {
        self.position = pos;
    }
}
