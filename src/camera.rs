use crate::geom::Halve;
use macroquad::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pan command. Diagonals step one tile; screen axes step two.
///
/// Names describe where the view travels. The camera offset moves the other
/// way, since panning shifts the map under a fixed viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top-right corner of the screen.
    North,
    /// Toward the bottom-left.
    South,
    /// Toward the bottom-right.
    East,
    /// Toward the top-left.
    West,
    /// Two half-tiles straight up.
    Up,
    /// Two half-tiles straight down.
    Down,
    /// One tile width to the left.
    Left,
    /// One tile width to the right.
    Right,
}

impl Direction {
    /// Every direction, diagonals first.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Full change of the camera offset for one pan.
    pub fn offset_delta(self, tile_size: Vec2) -> Vec2 {
        let h = tile_size.half();
        match self {
            Direction::North => vec2(-h.x, h.y),
            Direction::South => vec2(h.x, -h.y),
            Direction::East => vec2(-h.x, -h.y),
            Direction::West => vec2(h.x, h.y),
            Direction::Up => vec2(0.0, tile_size.y),
            Direction::Down => vec2(0.0, -tile_size.y),
            Direction::Left => vec2(tile_size.x, 0.0),
            Direction::Right => vec2(-tile_size.x, 0.0),
        }
    }

    /// Lower-case name, as accepted by [`Direction::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown direction name passed to [`Direction::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PanState {
    Idle,
    Animating {
        frames_remaining: u32,
        start: Vec2,
        target_delta: Vec2,
        increment: Vec2,
    },
}

/// Outcome of one [`Camera::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanTick {
    /// No pan was running.
    Idle,
    /// The offset advanced one step.
    Moving,
    /// The pan reached its target on this frame.
    Finished,
}

/// Camera offset plus the fixed-length linear pan driving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    offset: Vec2,
    tile_size: Vec2,
    pan_frames: u32,
    state: PanState,
}

impl Camera {
    /// Idle camera at zero offset. `pan_frames` is clamped to at least one.
    pub fn new(tile_size: Vec2, pan_frames: u32) -> Self {
        Self {
            offset: Vec2::ZERO,
            tile_size,
            pan_frames: pan_frames.max(1),
            state: PanState::Idle,
        }
    }

    /// Accumulated pixel translation applied to every tile anchor.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// True while a pan is animating.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, PanState::Animating { .. })
    }

    /// Frames left in the current pan, zero when idle.
    pub fn frames_remaining(&self) -> u32 {
        match self.state {
            PanState::Idle => 0,
            PanState::Animating {
                frames_remaining, ..
            } => frames_remaining,
        }
    }

    /// Starts a pan. Returns `false` (and changes nothing) if one is running.
    pub fn start_pan(&mut self, direction: Direction) -> bool {
        if self.is_panning() {
            tracing::trace!(%direction, "pan ignored, camera busy");
            return false;
        }
        let target_delta = direction.offset_delta(self.tile_size);
        self.state = PanState::Animating {
            frames_remaining: self.pan_frames,
            start: self.offset,
            target_delta,
            increment: target_delta / self.pan_frames as f32,
        };
        tracing::debug!(%direction, ?target_delta, frames = self.pan_frames, "pan started");
        true
    }

    /// Advances the pan by one frame.
    pub fn tick(&mut self) -> PanTick {
        let PanState::Animating {
            frames_remaining,
            start,
            target_delta,
            increment,
        } = self.state
        else {
            return PanTick::Idle;
        };

        let left = frames_remaining - 1;
        if left == 0 {
            // Snap so rounding never leaves the map off the tile grid.
            self.offset = start + target_delta;
            self.state = PanState::Idle;
            tracing::debug!(offset = ?self.offset, "pan finished");
            return PanTick::Finished;
        }

        self.offset += increment;
        self.state = PanState::Animating {
            frames_remaining: left,
            start,
            target_delta,
            increment,
        };
        tracing::trace!(offset = ?self.offset, frames_remaining = left, "pan step");
        PanTick::Moving
    }

    /// Stops a running pan where it is.
    pub fn cancel(&mut self) {
        if self.is_panning() {
            tracing::debug!(offset = ?self.offset, "pan cancelled");
        }
        self.state = PanState::Idle;
    }
}
