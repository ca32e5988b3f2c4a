#![deny(missing_docs)]

//! Isometric tile grid for Macroquad: projection math, text map loading and
//! camera panning.

mod camera;
mod config;
mod error;
mod geom;
mod grid;
mod loader {
    pub mod text_loader;
}
mod map;
mod projection;
pub mod render;
mod tile;

pub use camera::{Camera, Direction, PanTick, ParseDirectionError};
pub use config::{IsoConfig, HUD_HEIGHT};
pub use error::{MapError, Result};
pub use geom::Halve;
pub use grid::TileGrid;
pub use loader::text_loader::{load_map_file, parse_map, LoadedMap, PLAYER_MARKER};
pub use map::{DrawItem, TileMap};
pub use projection::{CellRegion, IsoProjection};
pub use tile::{SpriteRole, Tile};
