//! Viewport culling of the draw list.

use crate::map::{DrawItem, TileMap};
use macroquad::prelude::*;

/// Tiles whose shifted bounding box overlaps `[view_min, view_max]`.
///
/// Corners may be given in any order. Output keeps draw order (rows top to
/// bottom).
pub fn visible_tiles(map: &TileMap, view_min: Vec2, view_max: Vec2) -> Vec<DrawItem> {
    let min = view_min.min(view_max);
    let max = view_min.max(view_max);
    let tile = map.tile_size();

    map.draw_list()
        .filter(|item| {
            let lo = item.position;
            let hi = item.position + tile;
            lo.x < max.x && hi.x > min.x && lo.y < max.y && hi.y > min.y
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Direction, PanTick};
    use crate::config::IsoConfig;

    fn map() -> TileMap {
        TileMap::from_text("000\n000\n000", IsoConfig::default()).unwrap()
    }

    #[test]
    fn keeps_tiles_overlapping_the_view_in_stable_order() {
        let map = map();
        let view = visible_tiles(&map, vec2(0.0, 0.0), vec2(640.0, 351.0));
        assert_eq!(view.len(), 9);
        assert!(view
            .windows(2)
            .all(|w| (w[0].cell.y, w[0].cell.x) <= (w[1].cell.y, w[1].cell.x)));
    }

    #[test]
    fn drops_tiles_outside_the_view() {
        let map = map();
        // (0, 0) spans [288, 352] x [144, 176]; its neighbours start at y = 160.
        let view = visible_tiles(&map, vec2(300.0, 145.0), vec2(310.0, 150.0));
        let cells: Vec<_> = view.iter().map(|i| i.cell).collect();
        assert_eq!(cells, vec![ivec2(0, 0)]);

        assert!(visible_tiles(&map, vec2(-500.0, -500.0), vec2(-400.0, -400.0)).is_empty());
    }

    #[test]
    fn follows_the_camera_offset() {
        let mut map = map();
        map.move_camera(Direction::Right);
        while map.tick() != PanTick::Idle {}
        // Everything slid 64 px left, out of the probe used above.
        assert!(visible_tiles(&map, vec2(300.0, 145.0), vec2(310.0, 150.0)).is_empty());
        let view = visible_tiles(&map, vec2(236.0, 145.0), vec2(246.0, 150.0));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].cell, ivec2(0, 0));
    }
}
