//! Drawing side of the map: viewport culling and macroquad blitting.

pub mod cull;
pub mod draw;

pub use cull::visible_tiles;
pub use draw::{draw_diamond_outline, draw_tiles, TileTextures};
