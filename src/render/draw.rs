//! Macroquad drawing of tiles, with a flat-colour fallback when textures are missing.

use crate::map::DrawItem;
use crate::tile::SpriteRole;
use anyhow::Context;
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Texture file expected in the sprite directory for each role.
pub fn sprite_file(role: SpriteRole) -> &'static str {
    match role {
        SpriteRole::Default => "isotile-outline.png",
        SpriteRole::Empty => "isotile-empty.png",
        SpriteRole::Filled => "isotile-filled.png",
        SpriteRole::Corners => "isotile-colored-corners.png",
    }
}

/// Loaded terrain sprites, one per [`SpriteRole`].
pub struct TileTextures {
    textures: HashMap<SpriteRole, Texture2D>,
}

impl TileTextures {
    /// Loads every role's texture from `dir`.
    pub async fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut textures = HashMap::with_capacity(SpriteRole::ALL.len());
        for role in SpriteRole::ALL {
            let path = dir.join(sprite_file(role));
            let path_str = path
                .to_str()
                .with_context(|| format!("Non UTF-8 sprite path {}", path.display()))?;
            let tex = load_texture(path_str)
                .await
                .with_context(|| format!("Loading texture {}", path.display()))?;
            tex.set_filter(FilterMode::Nearest);
            textures.insert(role, tex);
        }
        Ok(Self { textures })
    }

    /// Texture for `role`, if it loaded.
    pub fn get(&self, role: SpriteRole) -> Option<&Texture2D> {
        self.textures.get(&role)
    }
}

fn fill_color(role: SpriteRole) -> Option<Color> {
    match role {
        SpriteRole::Default => None,
        SpriteRole::Empty => Some(Color::new(0.85, 0.85, 0.85, 1.0)),
        SpriteRole::Filled => Some(Color::new(0.35, 0.55, 0.9, 1.0)),
        SpriteRole::Corners => Some(Color::new(0.9, 0.8, 0.3, 1.0)),
    }
}

/// Diamond corners (top, right, bottom, left) for a tile at `pos`.
fn diamond(pos: Vec2, tile_size: Vec2) -> [Vec2; 4] {
    let h = tile_size * 0.5;
    [
        pos + vec2(h.x, 0.0),
        pos + vec2(tile_size.x, h.y),
        pos + vec2(h.x, tile_size.y),
        pos + vec2(0.0, h.y),
    ]
}

/// Outlines the diamond of a tile whose bounding box starts at `pos`.
pub fn draw_diamond_outline(pos: Vec2, tile_size: Vec2, thickness: f32, color: Color) {
    let d = diamond(pos, tile_size);
    for i in 0..4 {
        let (a, b) = (d[i], d[(i + 1) % 4]);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

fn draw_flat(item: &DrawItem, tile_size: Vec2) {
    let [top, right, bottom, left] = diamond(item.position, tile_size);
    if let Some(color) = fill_color(item.sprite) {
        draw_triangle(top, right, bottom, color);
        draw_triangle(top, bottom, left, color);
    }
    draw_diamond_outline(item.position, tile_size, 1.0, DARKGRAY);
}

/// Draws tiles in the given order, with textures when available.
pub fn draw_tiles<'a>(
    items: impl IntoIterator<Item = &'a DrawItem>,
    tile_size: Vec2,
    textures: Option<&TileTextures>,
) {
    for item in items {
        match textures.and_then(|t| t.get(item.sprite)) {
            Some(tex) => draw_texture_ex(
                tex,
                item.position.x,
                item.position.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(tile_size),
                    ..Default::default()
                },
            ),
            None => draw_flat(item, tile_size),
        }
    }
}
