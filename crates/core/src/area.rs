//! Area module - the tile grid and the things placed on it
//!
//! Tiles live in a sparse map keyed by grid coordinate. Coordinates convert to
//! pixels by multiplying by `TILE_SIZE`; row runs along x and column along y.
//! Decorations are tiles drawn on top of the grid that take no part in
//! collision.
//!
//! Collision works on axis-aligned pixel rectangles: a rectangle covers every
//! grid cell between the cells of its bottom-left and top-right corners,
//! inclusive, so a rectangle whose edge lies exactly on a tile boundary also
//! covers the tile beyond it.

use std::collections::HashMap;

use glam::Vec2;

use crate::tile::Tile;
use crate::types::GridPos;

/// Axis-aligned pixel rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive range of grid cells this rectangle touches
    pub fn cell_span(&self) -> (GridPos, GridPos) {
        (
            GridPos::from_pixel(self.pos.x, self.pos.y),
            GridPos::from_pixel(self.right(), self.top()),
        )
    }
}

/// Something with a pixel position that can be snapped onto a grid cell
pub trait Placeable {
    fn set_position(&mut self, pos: Vec2);
}

impl Placeable for Tile {
    fn set_position(&mut self, pos: Vec2) {
        self.position = pos;
    }
}

/// Pixel origin of a grid cell
pub fn cell_origin(cell: GridPos) -> Vec2 {
    let (x, y) = cell.origin();
    Vec2::new(x, y)
}

/// Every grid cell in the inclusive span of `rect`, ascending by row then column
pub fn cells_covered(rect: Rect) -> impl Iterator<Item = GridPos> + Clone {
    let (lo, hi) = rect.cell_span();
    (lo.row..=hi.row).flat_map(move |row| (lo.col..=hi.col).map(move |col| GridPos::new(row, col)))
}

/// The walkable area: a sparse tile grid plus decorations
#[derive(Debug, Clone, Default)]
pub struct Area {
    tiles: HashMap<GridPos, Tile>,
    decorations: Vec<Tile>,
}

impl Area {
    /// Create an empty area
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tile at a grid cell, if one was placed there
    pub fn tile_at(&self, cell: GridPos) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    pub fn tile_at_mut(&mut self, cell: GridPos) -> Option<&mut Tile> {
        self.tiles.get_mut(&cell)
    }

    /// Insert or overwrite the tile at a grid cell
    ///
    /// Returns the tile previously stored there.
    pub fn place_tile(&mut self, cell: GridPos, mut tile: Tile) -> Option<Tile> {
        tile.set_position(cell_origin(cell));
        self.tiles.insert(cell, tile)
    }

    /// Snap an entity onto a grid cell.
    ///
    /// Always uses `TILE_SIZE`, never the entity's own size.
    pub fn place_entity<E: Placeable + ?Sized>(&self, cell: GridPos, entity: &mut E) {
        entity.set_position(cell_origin(cell));
    }

    /// Add a decoration to the scene at a grid cell.
    ///
    /// Decorations are not part of the tile map and never block movement.
    pub fn place_decoration(&mut self, cell: GridPos, mut tile: Tile) -> usize {
        self.place_entity(cell, &mut tile);
        self.decorations.push(tile);
        self.decorations.len() - 1
    }

    pub fn decorations(&self) -> &[Tile] {
        &self.decorations
    }

    /// Number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate all mapped tiles with their grid cell (unordered)
    pub fn tiles(&self) -> impl Iterator<Item = (GridPos, &Tile)> {
        self.tiles.iter().map(|(cell, tile)| (*cell, tile))
    }

    /// Cells of the mapped tiles a rectangle overlaps
    pub fn cells_overlapping(&self, rect: Rect) -> impl Iterator<Item = GridPos> + '_ {
        cells_covered(rect).filter(move |cell| self.tiles.contains_key(cell))
    }

    /// Tiles a rectangle overlaps, ascending by row then column.
    ///
    /// Cells without a tile are skipped.
    pub fn tiles_overlapping(&self, rect: Rect) -> impl Iterator<Item = &Tile> + '_ {
        cells_covered(rect).filter_map(move |cell| self.tiles.get(&cell))
    }

    /// Apply `f` to every tile a rectangle overlaps
    pub fn for_each_tile_overlapping_mut(&mut self, rect: Rect, mut f: impl FnMut(&mut Tile)) {
        for cell in cells_covered(rect) {
            if let Some(tile) = self.tiles.get_mut(&cell) {
                f(tile);
            }
        }
    }

    /// Check if every tile under `rect` is open.
    ///
    /// True when nothing is under it at all.
    pub fn is_position_allowed(&self, rect: Rect) -> bool {
        self.tiles_overlapping(rect).all(|tile| tile.is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sprite, TILE_SIZE};

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn three_by_three() -> Area {
        let mut area = Area::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = GridPos::new(row, col);
                let tile = if row == 1 && col == 1 {
                    Tile::new(Sprite::Dirt)
                } else {
                    Tile::wall(Sprite::Stone)
                };
                area.place_tile(cell, tile);
            }
        }
        area
    }

    #[test]
    fn place_tile_positions_by_tile_size() {
        let mut area = Area::new();
        area.place_tile(GridPos::new(3, 2), Tile::default());

        let tile = area.tile_at(GridPos::new(3, 2)).unwrap();
        assert_eq!(tile.position, Vec2::new(3.0 * 64.0, 2.0 * 64.0));
        assert!(area.tile_at(GridPos::new(2, 3)).is_none());
    }

    #[test]
    fn place_tile_overwrites() {
        let mut area = Area::new();
        area.place_tile(GridPos::new(1, 1), Tile::wall(Sprite::Stone));
        let prev = area.place_tile(GridPos::new(1, 1), Tile::new(Sprite::Roses));

        assert_eq!(prev.map(|t| t.source), Some(Sprite::Stone));
        assert_eq!(area.len(), 1);
        assert_eq!(area.tile_at(GridPos::new(1, 1)).unwrap().source, Sprite::Roses);
    }

    #[test]
    fn rect_inside_one_tile_overlaps_only_that_tile() {
        let area = three_by_three();
        let hits: Vec<_> = area.cells_overlapping(rect(70.0, 70.0, 20.0, 20.0)).collect();
        assert_eq!(hits, vec![GridPos::new(1, 1)]);
        assert!(area.is_position_allowed(rect(70.0, 70.0, 20.0, 20.0)));
    }

    #[test]
    fn overlap_order_is_row_then_column() {
        let area = three_by_three();
        let hits: Vec<_> = area.cells_overlapping(rect(10.0, 10.0, 100.0, 100.0)).collect();
        assert_eq!(
            hits,
            vec![
                GridPos::new(0, 0),
                GridPos::new(0, 1),
                GridPos::new(1, 0),
                GridPos::new(1, 1),
            ]
        );
    }

    #[test]
    fn top_right_edge_on_boundary_is_inclusive() {
        let area = three_by_three();
        let t = TILE_SIZE as f32;
        // Exactly fills tile (1,1) but its top-right corner sits on (2,2).
        let r = rect(t, t, t, t);
        let hits: Vec<_> = area.cells_overlapping(r).collect();
        assert_eq!(hits.len(), 4);
        assert!(!area.is_position_allowed(r));
    }

    #[test]
    fn overlap_iterator_is_restartable() {
        let area = three_by_three();
        let r = rect(0.0, 0.0, 130.0, 10.0);
        let first = area.tiles_overlapping(r).count();
        let second = area.tiles_overlapping(r).count();
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn off_map_is_vacuously_allowed() {
        let area = three_by_three();
        assert!(area.is_position_allowed(rect(-500.0, -500.0, 64.0, 64.0)));
        assert!(area.is_position_allowed(rect(1000.0, 1000.0, 64.0, 64.0)));
        assert_eq!(area.tiles_overlapping(rect(1000.0, 0.0, 10.0, 10.0)).count(), 0);
    }

    #[test]
    fn decorations_do_not_block() {
        let mut area = Area::new();
        area.place_tile(GridPos::new(0, 0), Tile::default());
        area.place_decoration(GridPos::new(0, 0), Tile::wall(Sprite::Tree));

        assert_eq!(area.decorations().len(), 1);
        assert_eq!(area.decorations()[0].position, Vec2::ZERO);
        assert!(area.is_position_allowed(rect(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn mutate_overlapping_tiles() {
        let mut area = three_by_three();
        area.for_each_tile_overlapping_mut(rect(70.0, 70.0, 10.0, 10.0), |tile| {
            tile.source = Sprite::Water
        });
        assert_eq!(area.tile_at(GridPos::new(1, 1)).unwrap().source, Sprite::Water);
        assert_eq!(area.tile_at(GridPos::new(0, 0)).unwrap().source, Sprite::Stone);
    }
}
