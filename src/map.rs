use crate::camera::{Camera, Direction, PanTick};
use crate::config::IsoConfig;
use crate::error::Result;
use crate::grid::TileGrid;
use crate::loader::text_loader::{load_map_file, parse_map, LoadedMap};
use crate::projection::IsoProjection;
use crate::tile::{SpriteRole, Tile};
use macroquad::prelude::*;
use std::path::Path;

/// One tile ready to draw: its sprite and on-screen top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Sprite to draw.
    pub sprite: SpriteRole,
    /// Anchor with the camera offset applied.
    pub position: Vec2,
    /// Grid cell the item came from.
    pub cell: IVec2,
}

/// A loaded isometric map together with its camera and player location.
///
/// Pixel queries come in two flavours and the names say which:
/// `pixel_to_tile_anchor` works on raw screen pixels (what the mouse sees),
/// while `pixel_to_world_coordinate` first removes the camera offset.
pub struct TileMap {
    grid: TileGrid,
    projection: IsoProjection,
    camera: Camera,
    viewport_size: Vec2,
    player_start: IVec2,
    player_location: IVec2,
}

impl TileMap {
    /// Loads a text map file with `config`.
    pub fn load(path: impl AsRef<Path>, config: IsoConfig) -> Result<Self> {
        let config = config.sanitized();
        let projection = IsoProjection::new(config.tile_size, config.origin);
        let loaded = load_map_file(path, &projection)?;
        Ok(Self::from_loaded(loaded, projection, config))
    }

    /// Builds a map from in-memory text.
    pub fn from_text(text: &str, config: IsoConfig) -> Result<Self> {
        let config = config.sanitized();
        let projection = IsoProjection::new(config.tile_size, config.origin);
        let loaded = parse_map(text, "<inline>", &projection)?;
        Ok(Self::from_loaded(loaded, projection, config))
    }

    fn from_loaded(loaded: LoadedMap, projection: IsoProjection, config: IsoConfig) -> Self {
        let start = loaded.player_start.unwrap_or(IVec2::ZERO);
        Self {
            grid: loaded.grid,
            projection,
            camera: Camera::new(config.tile_size, config.pan_frames),
            viewport_size: config.viewport_size,
            player_start: start,
            player_location: start,
        }
    }

    /// Replaces the terrain layer with the one in `path`.
    ///
    /// On error the current grid stays untouched. The camera is kept; the
    /// recorded start and the player location move only if the new map has a
    /// `'P'` marker.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let loaded = load_map_file(path, &self.projection)?;
        self.swap_in(loaded);
        Ok(())
    }

    /// Like [`TileMap::reload`], from in-memory text.
    pub fn reload_from_text(&mut self, text: &str) -> Result<()> {
        let loaded = parse_map(text, "<inline>", &self.projection)?;
        self.swap_in(loaded);
        Ok(())
    }

    fn swap_in(&mut self, loaded: LoadedMap) {
        self.grid = loaded.grid;
        if let Some(start) = loaded.player_start {
            self.player_start = start;
            self.player_location = start;
        }
    }

    /// Terrain layer.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Projection built from the config's tile size and origin.
    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    /// `(width, height)` of the terrain layer in cells.
    pub fn map_size(&self) -> IVec2 {
        self.grid.size()
    }

    /// Tile bounding-box size in pixels.
    pub fn tile_size(&self) -> Vec2 {
        self.projection.tile_size
    }

    /// Map viewport size, HUD excluded.
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Current camera translation in pixels.
    pub fn camera_offset(&self) -> Vec2 {
        self.camera.offset()
    }

    /// True while a pan is animating.
    pub fn is_panning(&self) -> bool {
        self.camera.is_panning()
    }

    /// Cell of the last `'P'` marker loaded. Pans never change it.
    pub fn player_start(&self) -> IVec2 {
        self.player_start
    }

    /// Cell under the viewport centre as of the last finished pan.
    ///
    /// Equals [`TileMap::player_start`] until the first pan completes.
    pub fn player_location(&self) -> IVec2 {
        self.player_location
    }

    // --- coordinate queries -------------------------------------------------

    /// Unshifted pixel anchor of `cell`.
    pub fn grid_to_pixel(&self, cell: IVec2) -> Vec2 {
        self.projection.grid_to_pixel(cell)
    }

    /// Grid cell under `pixel` once the camera offset is removed.
    pub fn pixel_to_world_coordinate(&self, pixel: Vec2) -> IVec2 {
        self.projection.pixel_to_cell(pixel - self.camera.offset())
    }

    /// Anchor of the tile under a raw screen pixel. Ignores the camera offset.
    pub fn pixel_to_tile_anchor(&self, pixel: Vec2) -> Vec2 {
        self.projection.pixel_to_anchor(pixel)
    }

    /// Pixel centre of the tile drawn at the middle of the configured viewport.
    ///
    /// Computed on raw screen pixels; [`TileMap::tick`] removes the camera
    /// offset before turning it into a cell.
    pub fn viewport_center_cell(&self) -> Vec2 {
        self.projection.viewport_center(self.viewport_size)
    }

    /// Same as [`TileMap::viewport_center_cell`] for another viewport size.
    pub fn viewport_center_cell_for(&self, viewport_size: Vec2) -> Vec2 {
        self.projection.viewport_center(viewport_size)
    }

    /// Approximate rectangle-based bounds test on a raw screen pixel.
    pub fn inside_bounds(&self, pixel: Vec2) -> bool {
        self.projection.rect_in_bounds(pixel, self.grid.size())
    }

    /// Tile at `cell`, or [`crate::MapError::OutOfBounds`].
    pub fn tile_at(&self, cell: IVec2) -> Result<&Tile> {
        self.grid.tile_at(cell)
    }

    /// Stored (unshifted) anchor of the tile at `cell`.
    pub fn tile_anchor(&self, cell: IVec2) -> Result<Vec2> {
        self.grid.tile_at(cell).map(|t| t.anchor)
    }

    // --- mutation -----------------------------------------------------------

    /// Puts a fresh walkable tile with `sprite` at `cell`.
    pub fn draw_at_location(&mut self, sprite: SpriteRole, cell: IVec2) -> Result<DrawItem> {
        let anchor = self.projection.grid_to_pixel(cell);
        let tile = Tile {
            sprite,
            anchor,
            traversable: true,
            world_coordinate: cell,
        };
        self.grid.replace(cell, tile)?;
        Ok(DrawItem {
            sprite,
            position: anchor + self.camera.offset(),
            cell,
        })
    }

    /// Starts a camera pan; ignored while one is already running.
    pub fn move_camera(&mut self, direction: Direction) -> bool {
        self.camera.start_pan(direction)
    }

    /// Stops a running pan without recomputing the player location.
    pub fn cancel_move(&mut self) {
        self.camera.cancel();
    }

    /// Advances the camera one frame. Call once per rendered frame.
    ///
    /// When a pan completes, the player location is recomputed from the tile
    /// now under the viewport centre.
    pub fn tick(&mut self) -> PanTick {
        let step = self.camera.tick();
        if step == PanTick::Finished {
            let centre = self.viewport_center_cell();
            self.player_location = self.pixel_to_world_coordinate(centre);
            tracing::debug!(player = ?self.player_location, "player location updated");
        }
        step
    }

    // --- drawing ------------------------------------------------------------

    /// Every tile with the camera offset applied, rows top to bottom.
    pub fn draw_list(&self) -> impl Iterator<Item = DrawItem> + '_ {
        let offset = self.camera.offset();
        self.grid.iter().map(move |t| DrawItem {
            sprite: t.sprite,
            position: t.anchor + offset,
            cell: t.world_coordinate,
        })
    }
}
