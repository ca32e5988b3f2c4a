use crate::error::{MapError, Result};
use crate::tile::Tile;
use macroquad::prelude::*;

/// Rectangular terrain layer indexed `[x][y]`.
///
/// Tiles are stored column-major, so one column (fixed `x`) is contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Reshapes row-major tiles into rows of `columns` and transposes them.
    ///
    /// Fails with [`MapError::Shape`] when the tiles do not fill whole rows.
    pub fn from_row_major(tiles: Vec<Tile>, columns: usize) -> Result<Self> {
        if columns == 0 || tiles.len() % columns != 0 {
            return Err(MapError::Shape {
                tiles: tiles.len(),
                columns,
            });
        }
        let height = tiles.len() / columns;

        let mut rows: Vec<Vec<Tile>> = Vec::with_capacity(height);
        let mut it = tiles.into_iter();
        for _ in 0..height {
            rows.push(it.by_ref().take(columns).collect());
        }

        let mut transposed = Vec::with_capacity(columns * height);
        let mut row_iters: Vec<_> = rows.into_iter().map(Vec::into_iter).collect();
        for _ in 0..columns {
            for row in row_iters.iter_mut() {
                if let Some(t) = row.next() {
                    transposed.push(t);
                }
            }
        }

        Ok(Self {
            width: columns,
            height,
            tiles: transposed,
        })
    }

    /// Columns (the longest text row).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in cells.
    pub fn size(&self) -> IVec2 {
        ivec2(self.width as i32, self.height as i32)
    }

    /// True when `cell` lies in `[0, size)` on both axes.
    pub fn contains(&self, cell: IVec2) -> bool {
        self.index_of(cell).is_some()
    }

    #[inline]
    fn index_of(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// Tile at `cell`, or [`MapError::OutOfBounds`].
    pub fn tile_at(&self, cell: IVec2) -> Result<&Tile> {
        self.index_of(cell)
            .map(|i| &self.tiles[i])
            .ok_or_else(|| MapError::OutOfBounds {
                cell,
                size: self.size(),
            })
    }

    /// Overwrites the slot at `cell`, returning the previous tile.
    pub fn replace(&mut self, cell: IVec2, tile: Tile) -> Result<Tile> {
        let size = self.size();
        let i = self
            .index_of(cell)
            .ok_or(MapError::OutOfBounds { cell, size })?;
        Ok(std::mem::replace(&mut self.tiles[i], tile))
    }

    /// One column of tiles (`[x][..]`).
    pub fn column(&self, x: usize) -> Option<&[Tile]> {
        (x < self.width).then(|| &self.tiles[x * self.height..(x + 1) * self.height])
    }

    /// All tiles in draw order: rows top to bottom, cells left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| &self.tiles[x * self.height + y])
        })
    }
}
