//! Isometric projection between grid cells and unshifted map pixels.
//!
//! Tiles are diamonds inscribed in a `W × H` bounding rectangle. The screen is
//! cut into a plain grid of such rectangles; each rectangle holds one whole
//! diamond plus four corner triangles that belong to its neighbours. The
//! inverse projection first finds the rectangle, then moves across a diamond
//! edge when the point sits in one of those corners.
//!
//! Nothing here knows about the camera. Callers subtract the offset first when
//! they need world-space answers (see [`crate::TileMap`]).

use crate::geom::{split_cell, Halve};
use macroquad::prelude::*;

/// Where an in-rectangle offset falls relative to the inscribed diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRegion {
    /// Inside the diamond, or on its edge.
    Inside,
    /// Top-left corner triangle.
    West,
    /// Top-right corner triangle.
    North,
    /// Bottom-right corner triangle.
    East,
    /// Bottom-left corner triangle.
    South,
}

impl CellRegion {
    /// Grid step from the rectangle's diamond to the cell owning this region.
    pub fn correction(self) -> IVec2 {
        match self {
            CellRegion::Inside => IVec2::ZERO,
            CellRegion::West => ivec2(-1, 0),
            CellRegion::North => ivec2(0, -1),
            CellRegion::East => ivec2(1, 0),
            CellRegion::South => ivec2(0, 1),
        }
    }
}

/// Pure isometric transform for one tile size and map origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    /// Bounding rectangle of one tile, in pixels.
    pub tile_size: Vec2,
    /// Fractional cell drawn at the screen centre with zero offset.
    pub origin: Vec2,
}

impl IsoProjection {
    /// Projection for `tile_size` tiles with `origin` at the screen centre.
    pub fn new(tile_size: Vec2, origin: Vec2) -> Self {
        Self { tile_size, origin }
    }

    /// Pixel anchor (bounding-box top-left) of `cell`, snapped to whole pixels.
    pub fn grid_to_pixel(&self, cell: IVec2) -> Vec2 {
        let half = self.tile_size.half();
        let c = cell.as_vec2();
        let px = self.origin.x * self.tile_size.x + (c.x - c.y) * half.x;
        let py = self.origin.y * self.tile_size.y + (c.x + c.y) * half.y;
        vec2(px.trunc(), py.trunc())
    }

    /// Cell whose diamond is inscribed in the rectangle containing `pixel`.
    ///
    /// Only correct inside that diamond; the corners belong to neighbours.
    pub fn rect_cell(&self, pixel: Vec2) -> IVec2 {
        let (rect, _) = split_cell(pixel, self.tile_size);
        rect_to_grid(rect, self.origin)
    }

    /// Classifies an offset inside a tile rectangle against the diamond edges.
    ///
    /// Checks run west, north, east, south; the first hit wins. In a
    /// well-formed tile at most one can hit.
    pub fn classify_offset(&self, offset: Vec2) -> CellRegion {
        let h = self.tile_size.half();
        let slope = offset.x * (h.y / h.x);
        if offset.y < h.y - slope {
            CellRegion::West
        } else if offset.y < slope - h.y {
            CellRegion::North
        } else if offset.y > 3.0 * h.y - slope {
            CellRegion::East
        } else if offset.y > slope + h.y {
            CellRegion::South
        } else {
            CellRegion::Inside
        }
    }

    /// Exact grid cell containing `pixel` (no camera offset applied).
    pub fn pixel_to_cell(&self, pixel: Vec2) -> IVec2 {
        let (rect, offset) = split_cell(pixel, self.tile_size);
        rect_to_grid(rect, self.origin) + self.classify_offset(offset).correction()
    }

    /// Anchor of the tile drawn under `pixel`.
    pub fn pixel_to_anchor(&self, pixel: Vec2) -> Vec2 {
        self.grid_to_pixel(self.pixel_to_cell(pixel))
    }

    /// Centre of the bounding box of the tile drawn under `pixel`.
    pub fn tile_center(&self, pixel: Vec2) -> Vec2 {
        self.pixel_to_anchor(pixel) + self.tile_size.half()
    }

    /// Pixel centre of the tile rendered at the middle of the viewport.
    ///
    /// The viewport centre lands on a tile corner shared by four cells, so the
    /// lookup is made half a tile up-left of it.
    pub fn viewport_center(&self, viewport_size: Vec2) -> Vec2 {
        self.tile_center(viewport_size.half() - self.tile_size.half())
    }

    /// Rectangle-only bounds test against a `map_size` grid.
    ///
    /// Skips the corner correction, so pixels near a diamond edge may be
    /// misreported. Kept approximate to match existing callers.
    pub fn rect_in_bounds(&self, pixel: Vec2, map_size: IVec2) -> bool {
        let cell = self.rect_cell(pixel);
        cell.cmpge(IVec2::ZERO).all() && cell.cmplt(map_size).all()
    }
}

// Inverse of the forward transform's linear part, on rectangle indices.
fn rect_to_grid(rect: Vec2, origin: Vec2) -> IVec2 {
    let d = rect - origin;
    vec2(d.y + d.x, d.y - d.x).floor().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> IsoProjection {
        IsoProjection::new(vec2(64.0, 32.0), vec2(4.5, 4.5))
    }

    #[test]
    fn forward_projection_of_origin_cells() {
        let p = reference();
        assert_eq!(p.grid_to_pixel(ivec2(0, 0)), vec2(288.0, 144.0));
        assert_eq!(p.grid_to_pixel(ivec2(1, 0)), vec2(320.0, 160.0));
        assert_eq!(p.grid_to_pixel(ivec2(0, 1)), vec2(256.0, 160.0));
        assert_eq!(p.grid_to_pixel(ivec2(2, 2)), vec2(288.0, 208.0));
    }

    #[test]
    fn corner_regions_partition_the_rectangle() {
        let p = reference();
        let h = p.tile_size.half();
        let mut counts = [0usize; 5];
        for oy in 0..32 {
            for ox in 0..64 {
                let (x, y) = (ox as f32, oy as f32);
                let hits = [
                    y < h.y - x / 2.0,
                    y < x / 2.0 - h.y,
                    y > 3.0 * h.y - x / 2.0,
                    y > x / 2.0 + h.y,
                ];
                assert!(hits.iter().filter(|&&b| b).count() <= 1, "({ox}, {oy})");

                let idx = match p.classify_offset(vec2(x, y)) {
                    CellRegion::Inside => 0,
                    CellRegion::West => 1,
                    CellRegion::North => 2,
                    CellRegion::East => 3,
                    CellRegion::South => 4,
                };
                counts[idx] += 1;
            }
        }
        assert_eq!(counts.iter().sum::<usize>(), 2048);
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn corner_samples_move_to_the_right_neighbour() {
        let p = reference();
        assert_eq!(p.classify_offset(vec2(1.0, 1.0)), CellRegion::West);
        assert_eq!(p.classify_offset(vec2(62.0, 1.0)), CellRegion::North);
        assert_eq!(p.classify_offset(vec2(62.0, 30.0)), CellRegion::East);
        assert_eq!(p.classify_offset(vec2(1.0, 30.0)), CellRegion::South);
        assert_eq!(p.classify_offset(vec2(32.0, 16.0)), CellRegion::Inside);
    }

    #[test]
    fn tile_centre_maps_back_to_its_cell() {
        let p = reference();
        for x in -4..8 {
            for y in -4..8 {
                let c = ivec2(x, y);
                let centre = p.grid_to_pixel(c) + p.tile_size.half();
                assert_eq!(p.pixel_to_cell(centre), c);
            }
        }
    }

    #[test]
    fn every_interior_pixel_of_a_diamond_maps_to_it() {
        let p = reference();
        let cell = ivec2(1, 2);
        let anchor = p.grid_to_pixel(cell);
        let centre = anchor + p.tile_size.half();
        // Sample strictly inside the diamond: |dx|/hw + |dy|/hh < 1.
        for dy in -15..=15 {
            for dx in -31..=31 {
                let (fx, fy) = (dx as f32, dy as f32);
                if fx.abs() / 32.0 + fy.abs() / 16.0 < 0.95 {
                    assert_eq!(p.pixel_to_cell(centre + vec2(fx, fy)), cell, "({dx}, {dy})");
                }
            }
        }
    }

    #[test]
    fn anchor_of_pixel_is_anchor_of_its_cell() {
        let p = reference();
        let pixel = vec2(330.0, 170.0);
        assert_eq!(p.pixel_to_anchor(pixel), p.grid_to_pixel(p.pixel_to_cell(pixel)));
        assert_eq!(p.pixel_to_anchor(vec2(320.0, 176.0)), vec2(320.0, 160.0));
    }

    #[test]
    fn negative_pixels_use_floor_division() {
        let p = reference();
        let c = ivec2(-8, 3);
        let centre = p.grid_to_pixel(c) + p.tile_size.half();
        assert!(centre.x < 0.0);
        assert_eq!(p.pixel_to_cell(centre), c);
    }

    #[test]
    fn tile_center_is_anchor_plus_half_tile() {
        let p = reference();
        // Anywhere inside the diamond of (0, 0) gives its centre.
        for pixel in [vec2(320.0, 160.0), vec2(300.0, 158.0), vec2(340.0, 165.0)] {
            assert_eq!(p.tile_center(pixel), vec2(320.0, 160.0));
        }
        // Top-left corner of rectangle (5, 5) belongs to (0, 0), not (1, 0).
        assert_eq!(p.tile_center(vec2(321.0, 161.0)), vec2(320.0, 160.0));
        let c = ivec2(3, -2);
        let centre = p.grid_to_pixel(c) + p.tile_size.half();
        assert_eq!(p.tile_center(centre), centre);
        assert_eq!(p.pixel_to_cell(p.tile_center(centre)), c);
    }

    #[test]
    fn viewport_center_of_reference_viewport() {
        let p = reference();
        assert_eq!(p.viewport_center(vec2(640.0, 351.0)), vec2(288.0, 144.0));
        assert_eq!(p.viewport_center(vec2(640.0, 480.0)), vec2(288.0, 240.0));
    }

    #[test]
    fn rect_bounds_ignore_diamond_edges() {
        let p = reference();
        let size = ivec2(3, 3);
        // Rectangle (5, 5) holds cell (1, 0) in its diamond.
        assert!(p.rect_in_bounds(vec2(352.0, 176.0), size));
        assert!(!p.rect_in_bounds(vec2(0.0, 0.0), size));
        // Top-left corner of rectangle (5, 5) really belongs to (0, 0), yet the
        // rectangle test answers for (1, 0).
        let corner = vec2(321.0, 161.0);
        assert_eq!(p.pixel_to_cell(corner), ivec2(0, 0));
        assert_eq!(p.rect_cell(corner), ivec2(1, 0));
    }
}
