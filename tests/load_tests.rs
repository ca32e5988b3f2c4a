// tests/load_tests.rs

use macroquad::prelude::ivec2;
use macroquad_iso_tilemap::{IsoConfig, MapError, SpriteRole, TileMap};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("iso_load_tests_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn loads_ragged_level_file() {
    let dir = temp_dir();
    let path = dir.join("lvl.txt");
    fs::write(&path, "000\n00000\n0000\n").unwrap();

    let map = TileMap::load(&path, IsoConfig::default()).expect("should load");
    assert_eq!(map.map_size(), ivec2(5, 3));
    let tail = map.tile_at(ivec2(4, 0)).unwrap();
    assert!(!tail.traversable);
    assert_eq!(tail.sprite, SpriteRole::Empty);
    assert_eq!(tail.world_coordinate, ivec2(4, 0));
    // No marker: default start.
    assert_eq!(map.player_location(), ivec2(0, 0));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_or_empty_files_are_format_errors() {
    let dir = temp_dir();
    let err = TileMap::load(dir.join("nope.txt"), IsoConfig::default())
        .err()
        .expect("missing file");
    assert!(matches!(err, MapError::Io { .. }));
    assert!(err.is_format_error());

    let empty = dir.join("empty.txt");
    fs::write(&empty, "").unwrap();
    let err = TileMap::load(&empty, IsoConfig::default())
        .err()
        .expect("empty file");
    assert!(matches!(err, MapError::EmptyMap { .. }));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn reload_swaps_grid_and_keeps_it_on_failure() {
    let dir = temp_dir();
    let first = dir.join("first.txt");
    let second = dir.join("second.txt");
    fs::write(&first, "00\n0P\n").unwrap();
    fs::write(&second, "P000\n").unwrap();

    let mut map = TileMap::load(&first, IsoConfig::default()).unwrap();
    assert_eq!(map.player_location(), ivec2(1, 1));

    assert!(map.reload(dir.join("gone.txt")).is_err());
    assert_eq!(map.map_size(), ivec2(2, 2));

    map.reload(&second).unwrap();
    assert_eq!(map.map_size(), ivec2(4, 1));
    assert_eq!(map.player_location(), ivec2(0, 0));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn config_file_drives_projection() {
    let dir = temp_dir();
    let cfg = dir.join("iso.json");
    fs::write(
        &cfg,
        r#"{ "tile_size": [32, 16], "origin": [2.5, 2.5], "pan_frames": 2 }"#,
    )
    .unwrap();

    let config = IsoConfig::from_json_file(&cfg).expect("config");
    let map = TileMap::from_text("00\n00", config).unwrap();
    assert_eq!(map.grid_to_pixel(ivec2(0, 0)).to_array(), [80.0, 40.0]);
    assert_eq!(map.tile_size().to_array(), [32.0, 16.0]);

    fs::remove_dir_all(&dir).ok();
}
