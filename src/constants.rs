//! Constants - camera tuning and fixed visual rules for the hex view.

use bevy::prelude::*;

/// Hex size (center → corner) in world pixels. Every projection and
/// glyph dimension derives from this.
pub const HEX_SIZE: f32 = 24.0;

// ============================================================================
// CAMERA
// ============================================================================

/// Key-pan speed in screen pixels per second (divided by zoom so the
/// on-screen speed is constant at every zoom level).
pub const CAMERA_PAN_SPEED: f32 = 400.0;

/// Multiplicative zoom step per wheel notch.
pub const CAMERA_ZOOM_SPEED: f32 = 0.1;

pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 4.0;

// ============================================================================
// TILE VISUALS
// ============================================================================

/// Grid line color for hex outlines.
pub const GRID_COLOR: Color = Color::srgb(0.25, 0.27, 0.30);
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Fill color for a recognized terrain tag; unrecognized tags get only
/// the outline.
pub fn terrain_color(terrain: &str) -> Option<Color> {
    match terrain {
        "grass" => Some(Color::srgb(0.28, 0.48, 0.22)),
        "forest" => Some(Color::srgb(0.16, 0.36, 0.18)),
        "water" => Some(Color::srgb(0.16, 0.30, 0.52)),
        "sand" => Some(Color::srgb(0.76, 0.68, 0.42)),
        "dirt" => Some(Color::srgb(0.45, 0.35, 0.22)),
        "rock" => Some(Color::srgb(0.42, 0.42, 0.44)),
        _ => None,
    }
}

// Resource glyphs (drawn above the terrain fill, below structures)
pub const TREE_COLOR: Color = Color::srgb(0.10, 0.28, 0.12);
pub const TREE_RADIUS: f32 = HEX_SIZE * 0.45;
pub const GRAIN_COLOR: Color = Color::srgb(0.80, 0.70, 0.25);
pub const GRAIN_RADIUS: f32 = HEX_SIZE * 0.28;
pub const ROCK_COLOR: Color = Color::srgb(0.55, 0.55, 0.58);
pub const ROCK_SIZE: f32 = HEX_SIZE * 0.55;

// Structure glyphs
pub const WALL_COLOR: Color = Color::srgb(0.60, 0.58, 0.54);
pub const WALL_GHOST_COLOR: Color = Color::srgba(0.75, 0.75, 0.78, 0.8);
pub const WALL_GHOST_WIDTH: f32 = 2.0;

// ============================================================================
// MARKERS
// ============================================================================

pub const SHRINE_COLOR: Color = Color::srgb(0.85, 0.72, 0.20);
pub const SHRINE_RADIUS: f32 = HEX_SIZE * 0.6;

pub const STOCKPILE_FILL: Color = Color::srgb(0.35, 0.27, 0.16);
pub const STOCKPILE_BORDER: Color = Color::srgb(0.80, 0.66, 0.35);
pub const STOCKPILE_SIZE: f32 = HEX_SIZE * 0.9;
pub const STOCKPILE_BORDER_WIDTH: f32 = 1.5;
pub const STOCKPILE_TEXT_COLOR: Color = Color::srgb(0.95, 0.92, 0.85);
pub const STOCKPILE_TEXT_SIZE: f32 = 10.0;

/// Selection outline: stroked hex slightly inset from the cell border.
pub const SELECTION_COLOR: Color = Color::srgb(0.95, 0.85, 0.20);
pub const SELECTION_INSET: f32 = 0.85;
pub const SELECTION_WIDTH: f32 = 2.0;

// ============================================================================
// AGENT VISUALS
// ============================================================================

pub const AGENT_RADIUS: f32 = HEX_SIZE * 0.42;
pub const AGENT_RING_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const AGENT_RING_RADIUS: f32 = HEX_SIZE * 0.58;
pub const AGENT_RING_WIDTH: f32 = 2.0;

/// Fixed role → color mapping; unrecognized roles get the default.
pub fn role_color(role: &str) -> Color {
    match role {
        "farmer" => Color::srgb(0.30, 0.75, 0.30),
        "guard" => Color::srgb(0.25, 0.45, 0.90),
        "raider" => Color::srgb(0.90, 0.20, 0.20),
        "miner" => Color::srgb(0.70, 0.50, 0.25),
        "builder" => Color::srgb(0.85, 0.60, 0.15),
        _ => Color::srgb(0.75, 0.75, 0.75),
    }
}
