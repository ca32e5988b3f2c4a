use crate::error::{MapError, Result};
use macroquad::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Height of the HUD strip below the viewport in the reference layout.
pub const HUD_HEIGHT: f32 = 129.0;

/// Tile geometry, map origin, viewport and pan timing for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoConfig {
    /// Bounding rectangle of one diamond tile, in pixels.
    pub tile_size: Vec2,
    /// Fractional grid cell sitting at the screen centre before any pan.
    pub origin: Vec2,
    /// Visible map area in pixels (screen minus HUD).
    pub viewport_size: Vec2,
    /// Frames a single camera pan takes. Never zero.
    pub pan_frames: u32,
}

impl Default for IsoConfig {
    fn default() -> Self {
        Self {
            tile_size: vec2(64.0, 32.0),
            origin: vec2(4.5, 4.5),
            viewport_size: vec2(640.0, 480.0 - HUD_HEIGHT),
            pan_frames: 4,
        }
    }
}

#[derive(Deserialize)]
struct JsonConfig {
    #[serde(default = "default_tile_size")]
    tile_size: [f32; 2],
    #[serde(default = "default_origin")]
    origin: [f32; 2],
    #[serde(default = "default_viewport")]
    viewport_size: [f32; 2],
    #[serde(default = "default_pan_frames")]
    pan_frames: u32,
}

fn default_tile_size() -> [f32; 2] {
    IsoConfig::default().tile_size.to_array()
}
fn default_origin() -> [f32; 2] {
    IsoConfig::default().origin.to_array()
}
fn default_viewport() -> [f32; 2] {
    IsoConfig::default().viewport_size.to_array()
}
fn default_pan_frames() -> u32 {
    IsoConfig::default().pan_frames
}

impl From<JsonConfig> for IsoConfig {
    fn from(j: JsonConfig) -> Self {
        Self {
            tile_size: Vec2::from_array(j.tile_size),
            origin: Vec2::from_array(j.origin),
            viewport_size: Vec2::from_array(j.viewport_size),
            pan_frames: j.pan_frames,
        }
        .sanitized()
    }
}

impl IsoConfig {
    /// Parses a JSON config; missing fields take the reference defaults.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let j: JsonConfig = serde_json::from_str(json)?;
        Ok(j.into())
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let p = path.as_ref();
        let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
            path: p.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&txt).map_err(|source| MapError::Json {
            path: p.to_path_buf(),
            source,
        })
    }

    /// Clamps values the animator and projector cannot work with.
    pub fn sanitized(mut self) -> Self {
        if self.pan_frames == 0 {
            tracing::warn!("pan_frames of 0 clamped to 1");
            self.pan_frames = 1;
        }
        self.tile_size = self.tile_size.max(Vec2::ONE);
        self
    }
}
