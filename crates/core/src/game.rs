//! Game module - builds the fixed map and runs one tick at a time
//!
//! The map is a `AREA_ROWS x AREA_COLS` grid of dirt tiles fenced by a ring of
//! closed stone walls. Each tick turns the held actions into an avatar velocity,
//! applies every debug action whose key is held, and then resolves movement.

use arrayvec::ArrayVec;

use crate::area::Area;
use crate::avatar::Avatar;
use crate::snapshot::{AvatarSnapshot, DecorationSnapshot, GameSnapshot, TileSnapshot};
use crate::tile::Tile;
use crate::types::{
    Action, Flow, GridPos, Sprite, AREA_COLS, AREA_ROWS, AVATAR_START, DECORATION_CELL,
    FADED_OPACITY, MAX_HELD_ACTIONS,
};

/// One play session: the area, the avatar, and a running clock
#[derive(Debug, Clone)]
pub struct Game {
    area: Area,
    avatar: Avatar,
    held: ArrayVec<Action, MAX_HELD_ACTIONS>,
    elapsed_ms: u64,
    ticks: u64,
}

impl Game {
    /// Build the fixed map with the avatar on its start cell
    pub fn new() -> Self {
        let mut area = Area::new();
        for row in 0..AREA_ROWS {
            for col in 0..AREA_COLS {
                let cell = GridPos::new(row, col);
                let tile = if cell.is_border() {
                    Tile::wall(Sprite::Stone)
                } else {
                    Tile::default()
                };
                area.place_tile(cell, tile);
            }
        }

        let mut avatar = Avatar::new();
        area.place_entity(AVATAR_START, &mut avatar);
        area.place_decoration(DECORATION_CELL, Tile::new(Sprite::Roses));

        log::info!(
            "built {}x{} area with {} tiles, avatar at {:?}",
            AREA_ROWS,
            AREA_COLS,
            area.len(),
            AVATAR_START
        );

        Self {
            area,
            avatar,
            held: ArrayVec::new(),
            elapsed_ms: 0,
            ticks: 0,
        }
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn area_mut(&mut self) -> &mut Area {
        &mut self.area
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Actions seen on the most recent tick
    pub fn held(&self) -> &[Action] {
        &self.held
    }

    /// Snap the avatar onto a grid cell
    pub fn place_avatar(&mut self, cell: GridPos) {
        self.area.place_entity(cell, &mut self.avatar);
    }

    /// Grid cell of the avatar's bottom-left corner
    pub fn avatar_cell(&self) -> GridPos {
        self.avatar.cell()
    }

    /// Cells of the mapped tiles under the avatar
    pub fn tiles_under_avatar(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.area.cells_overlapping(self.avatar.bounds())
    }

    /// Advance one tick.
    ///
    /// `held` is the point-in-time set of held actions. Opposing directions
    /// cancel. Returns [`Flow::Quit`] when the quit action is held, in which
    /// case the avatar is not moved.
    pub fn update(&mut self, elapsed_ms: u32, held: &[Action]) -> Flow {
        self.ticks += 1;
        self.elapsed_ms += u64::from(elapsed_ms);

        self.held.clear();
        for &action in held {
            if !self.held.contains(&action) {
                let _ = self.held.try_push(action);
            }
        }

        let speed = self.avatar.speed();
        let mut vx = 0.0;
        let mut vy = 0.0;
        if held.contains(&Action::Up) {
            vy += speed;
        }
        if held.contains(&Action::Down) {
            vy -= speed;
        }
        if held.contains(&Action::Left) {
            vx -= speed;
        }
        if held.contains(&Action::Right) {
            vx += speed;
        }

        if held.contains(&Action::Fade) {
            self.fade_under_avatar();
        }
        if held.contains(&Action::PlantRoses) {
            self.plant(Sprite::Roses);
        }
        if held.contains(&Action::PlantTree) {
            self.plant(Sprite::Tree);
        }
        if held.contains(&Action::PaintWater) {
            self.paint_under_avatar(Sprite::Water);
        }
        if held.contains(&Action::PaintDirt) {
            self.paint_under_avatar(Sprite::Dirt);
        }
        if held.contains(&Action::Quit) {
            log::info!("quit requested after {} ticks", self.ticks);
            return Flow::Quit;
        }

        self.avatar.move_intent(vx, vy);
        self.avatar.update_position(&self.area);
        Flow::Continue
    }

    /// Replace the tile at the avatar's cell with an open tile of `source`
    pub fn plant(&mut self, source: Sprite) {
        let cell = self.avatar_cell();
        let prev = self.area.place_tile(cell, Tile::new(source));
        log::debug!(
            "planted {} at {:?} (was {:?})",
            source.as_str(),
            cell,
            prev.map(|t| t.source)
        );
    }

    fn fade_under_avatar(&mut self) {
        let bounds = self.avatar.bounds();
        self.area
            .for_each_tile_overlapping_mut(bounds, |tile| tile.opacity = FADED_OPACITY);
    }

    fn paint_under_avatar(&mut self, source: Sprite) {
        let bounds = self.avatar.bounds();
        self.area
            .for_each_tile_overlapping_mut(bounds, |tile| tile.source = source);
        log::debug!("painted tiles under {:?} with {}", bounds.pos, source.as_str());
    }

    /// Fill a reusable snapshot without allocating
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();

        for (cell, tile) in self.area.tiles() {
            if cell.in_area() {
                snap.tiles[cell.row as usize][cell.col as usize] = Some(TileSnapshot {
                    source: tile.source,
                    is_open: tile.is_open,
                    opacity: tile.opacity,
                });
            }
        }

        for deco in self.area.decorations() {
            if snap.decorations.is_full() {
                break;
            }
            snap.decorations.push(DecorationSnapshot {
                source: deco.source,
                x: deco.position.x,
                y: deco.position.y,
                opacity: deco.opacity,
            });
        }

        let pos = self.avatar.position();
        let size = self.avatar.size();
        snap.avatar = AvatarSnapshot {
            source: self.avatar.source(),
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        };
        snap.held.extend(self.held.iter().copied());
        snap.elapsed_ms = self.elapsed_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Placeable;
    use glam::Vec2;

    #[test]
    fn new_game_layout() {
        let game = Game::new();
        assert_eq!(game.area().len(), (AREA_ROWS * AREA_COLS) as usize);
        assert_eq!(game.avatar().position(), Vec2::new(128.0, 128.0));
        assert_eq!(game.area().decorations().len(), 1);
        assert_eq!(game.area().decorations()[0].source, Sprite::Roses);
        assert_eq!(game.area().decorations()[0].position, Vec2::new(320.0, 320.0));
    }

    #[test]
    fn walls_use_stone_sprite() {
        let game = Game::new();
        let corner = game.area().tile_at(GridPos::new(0, 0)).unwrap();
        assert!(!corner.is_open);
        assert_eq!(corner.source, Sprite::Stone);

        let inner = game.area().tile_at(GridPos::new(1, 1)).unwrap();
        assert!(inner.is_open);
        assert_eq!(inner.source, Sprite::Dirt);
    }

    #[test]
    fn duplicate_held_actions_count_once() {
        let mut game = Game::new();
        game.update(16, &[Action::Right, Action::Right]);
        assert_eq!(game.held(), &[Action::Right]);
        assert!((game.avatar().position().x - 130.2).abs() < 1e-4);
    }

    #[test]
    fn fade_marks_tiles_under_avatar() {
        let mut game = Game::new();
        game.update(16, &[Action::Fade]);

        let cells: Vec<_> = game.tiles_under_avatar().collect();
        assert!(!cells.is_empty());
        for cell in cells {
            assert_eq!(game.area().tile_at(cell).unwrap().opacity, FADED_OPACITY);
        }
        assert_eq!(game.area().tile_at(GridPos::new(5, 5)).unwrap().opacity, 1.0);
    }

    #[test]
    fn paint_water_then_dirt() {
        let mut game = Game::new();
        game.update(16, &[Action::PaintWater]);
        assert_eq!(game.area().tile_at(GridPos::new(2, 2)).unwrap().source, Sprite::Water);

        game.update(16, &[Action::PaintDirt]);
        assert_eq!(game.area().tile_at(GridPos::new(2, 2)).unwrap().source, Sprite::Dirt);
    }

    #[test]
    fn plant_uses_grid_cell_not_pixels() {
        let mut game = Game::new();
        game.avatar_mut().set_position(Vec2::new(200.0, 330.0));
        game.plant(Sprite::Tree);

        let tile = game.area().tile_at(GridPos::new(3, 5)).unwrap();
        assert_eq!(tile.source, Sprite::Tree);
        assert!(tile.is_open);
        assert_eq!(tile.position, Vec2::new(192.0, 320.0));
    }

    #[test]
    fn quit_skips_movement() {
        let mut game = Game::new();
        let before = game.avatar().position();
        assert_eq!(game.update(16, &[Action::Right, Action::Quit]), Flow::Quit);
        assert_eq!(game.avatar().position(), before);
    }

    #[test]
    fn clock_accumulates() {
        let mut game = Game::new();
        game.update(16, &[]);
        game.update(17, &[]);
        assert_eq!(game.elapsed_ms(), 33);
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut game = Game::new();
        game.update(16, &[Action::Up, Action::PlantRoses]);
        let snap = game.snapshot();

        assert_eq!(snap.tile(0, 0).map(|t| t.is_open), Some(false));
        assert_eq!(snap.tile(2, 2).map(|t| t.source), Some(Sprite::Roses));
        assert_eq!(snap.tile(15, 0), None);
        assert_eq!(snap.decorations.len(), 1);
        assert_eq!(snap.held.as_slice(), &[Action::Up, Action::PlantRoses]);
        assert_eq!(snap.avatar.w, 64.0);
        assert_eq!(snap.elapsed_ms, 16);
    }
}
