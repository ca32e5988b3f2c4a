// src/loader/text_loader.rs
use crate::error::{MapError, Result};
use crate::grid::TileGrid;
use crate::projection::IsoProjection;
use crate::tile::Tile;
use macroquad::prelude::*;
use std::path::Path;

/// Map character marking where the player starts.
pub const PLAYER_MARKER: char = 'P';

/// A freshly built terrain layer plus what the loader found in it.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    /// Terrain layer, indexed `[x][y]`.
    pub grid: TileGrid,
    /// Cell of the last `'P'` marker, if any.
    pub player_start: Option<IVec2>,
}

/// Reads a text map file and builds its terrain layer.
pub fn load_map_file(path: impl AsRef<Path>, projection: &IsoProjection) -> Result<LoadedMap> {
    let p = path.as_ref();
    let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %p.display(), bytes = txt.len(), "read map file");
    parse_map(&txt, &p.display().to_string(), projection)
}

/// Builds a terrain layer from map text.
///
/// Rows are right-padded with spaces to the longest row, so ragged files load
/// as a rectangle. `source_name` only labels errors and logs.
pub fn parse_map(text: &str, source_name: &str, projection: &IsoProjection) -> Result<LoadedMap> {
    let rows = padded_rows(text);
    let columns = rows.first().map_or(0, |r| r.len());
    if columns == 0 {
        return Err(MapError::EmptyMap {
            source_name: source_name.to_owned(),
        });
    }

    let mut tiles = Vec::with_capacity(columns * rows.len());
    let mut player_start = None;

    for (y, row) in rows.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            let cell = ivec2(x as i32, y as i32);
            if ch == PLAYER_MARKER {
                if let Some(prev) = player_start.replace(cell) {
                    tracing::warn!(
                        map = source_name,
                        ?prev,
                        ?cell,
                        "multiple player markers, keeping the last one"
                    );
                }
            }
            tiles.push(Tile::from_map_char(ch, cell, projection.grid_to_pixel(cell)));
        }
    }

    let grid = TileGrid::from_row_major(tiles, columns)?;
    tracing::info!(
        map = source_name,
        width = grid.width(),
        height = grid.height(),
        ?player_start,
        "map loaded"
    );

    Ok(LoadedMap { grid, player_start })
}

// Lines without terminators, each padded to the longest line's char count.
fn padded_rows(text: &str) -> Vec<Vec<char>> {
    let mut rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, ' ');
    }
    rows
}
