use macroquad::prelude::*;

/// Which terrain sprite a tile shows. The renderer maps roles to images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteRole {
    /// Outlined diamond, used for walkable terrain.
    Default,
    /// Blank diamond for non-walkable or unknown cells.
    Empty,
    /// Solid diamond, used for highlights.
    Filled,
    /// Diamond with tinted exterior corners (debug overlay).
    Corners,
}

impl SpriteRole {
    /// Every role, in texture-loading order.
    pub const ALL: [SpriteRole; 4] = [
        SpriteRole::Default,
        SpriteRole::Empty,
        SpriteRole::Filled,
        SpriteRole::Corners,
    ];
}

/// One cell of the terrain layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Sprite the renderer draws for this cell.
    pub sprite: SpriteRole,
    /// Top-left of the tile's bounding rectangle, without camera offset.
    pub anchor: Vec2,
    /// Whether the player may stand here.
    pub traversable: bool,
    /// The tile's own grid index, kept for identification.
    pub world_coordinate: IVec2,
}

impl Tile {
    /// Builds the tile for a map character at `cell`.
    ///
    /// `'0'` is walkable terrain; `'P'` and everything else become empty,
    /// non-walkable tiles.
    pub fn from_map_char(ch: char, cell: IVec2, anchor: Vec2) -> Self {
        let (sprite, traversable) = match ch {
            '0' => (SpriteRole::Default, true),
            _ => (SpriteRole::Empty, false),
        };
        Self {
            sprite,
            anchor,
            traversable,
            world_coordinate: cell,
        }
    }
}
