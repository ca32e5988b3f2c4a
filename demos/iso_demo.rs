use anyhow::Context;
use macroquad::prelude::*;
use macroquad_iso_tilemap::render::{draw_diamond_outline, draw_tiles, visible_tiles, TileTextures};
use macroquad_iso_tilemap::{Direction, IsoConfig, SpriteRole, TileMap, HUD_HEIGHT};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Tilemap Test".into(),
        window_width: 640,
        window_height: 480,
        ..Default::default()
    }
}

const KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::W, Direction::West),
    (KeyCode::E, Direction::North),
    (KeyCode::S, Direction::South),
    (KeyCode::D, Direction::East),
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

fn load_config() -> anyhow::Result<IsoConfig> {
    let path = Path::new("levels/iso.json");
    if path.exists() {
        IsoConfig::from_json_file(path).with_context(|| format!("Loading config {}", path.display()))
    } else {
        Ok(IsoConfig::default())
    }
}

#[macroquad::main(window_conf)]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let mut map = TileMap::load("levels/lvl.txt", config).context("Failed to load map")?;

    let textures = match TileTextures::load(Path::new("res")).await {
        Ok(t) => Some(t),
        Err(err) => {
            tracing::warn!("falling back to flat tiles: {err:#}");
            None
        }
    };

    loop {
        clear_background(WHITE);

        for (key, dir) in KEYS {
            if is_key_pressed(key) {
                map.move_camera(dir);
            }
        }
        map.tick();

        let viewport = map.viewport_size();
        let tiles = visible_tiles(&map, Vec2::ZERO, viewport);
        draw_tiles(&tiles, map.tile_size(), textures.as_ref());

        let (mx, my) = mouse_position();
        let mouse = vec2(mx, my);
        if mouse.y < viewport.y {
            // Highlight the same cell a click fills, wherever the camera is.
            let cell = map.pixel_to_world_coordinate(mouse);
            let hover = map.grid_to_pixel(cell) + map.camera_offset();
            draw_diamond_outline(hover, map.tile_size(), 2.0, RED);
            if is_mouse_button_pressed(MouseButton::Left) {
                if let Err(err) = map.draw_at_location(SpriteRole::Filled, cell) {
                    tracing::debug!("click ignored: {err}");
                }
            }
        }

        let centre = map.viewport_center_cell();
        draw_circle(centre.x, centre.y, 3.0, RED);

        let hud_y = screen_height() - HUD_HEIGHT;
        draw_rectangle(0.0, hud_y, screen_width(), HUD_HEIGHT, BLACK);
        let world = map.pixel_to_world_coordinate(mouse);
        let lines = [
            format!("mouse: ({mx:.0}, {my:.0}) -> world {}, {}", world.x, world.y),
            format!("in bounds: {}", map.inside_bounds(mouse)),
            format!(
                "player: {}, {} (start {}, {})  offset: {:.0}, {:.0}",
                map.player_location().x,
                map.player_location().y,
                map.player_start().x,
                map.player_start().y,
                map.camera_offset().x,
                map.camera_offset().y
            ),
            "W/E/S/D diagonals, arrows for screen axes".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            draw_text(line, 10.0, hud_y + 24.0 + i as f32 * 24.0, 24.0, WHITE);
        }

        next_frame().await;
    }
}
