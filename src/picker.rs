//! Picker - pointer event + camera state → axial cell + agent hit.
//!
//! The pick is emitted unconditionally: an out-of-map click still yields
//! a cell, and whether to accept it is host-UI policy (see `ui.rs`),
//! not a picker concern.

use bevy::prelude::*;

use crate::camera::{self, CameraState};
use crate::constants::HEX_SIZE;
use crate::hex::{self, Axial};
use crate::snapshot::{Agent, WorldSnapshot};

/// A proposed selection from one pointer press. The host applies it to
/// the `Selection` resource (or rejects the cell) as it sees fit.
#[derive(Message, Clone, Copy, Debug)]
pub struct PickedMsg {
    pub cell: Axial,
    pub agent: Option<u32>,
}

/// Resolve a pointer position to the cell under it and the first agent
/// occupying that cell. Pure; the click system and tests share it.
pub fn pick(
    cursor: Vec2,
    viewport: Vec2,
    cam: &CameraState,
    agents: &[Agent],
    hex_size: f32,
) -> (Axial, Option<u32>) {
    let world = camera::screen_to_world(cam, viewport, cursor);
    let cell = hex::pixel_to_axial(world, hex_size);
    let agent = agents
        .iter()
        .find(|a| a.pos == Some(cell))
        .map(|a| a.id);
    (cell, agent)
}

/// Left click → pick message. No bounds filtering here.
pub fn click_pick_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cam: Res<CameraState>,
    snap: Res<WorldSnapshot>,
    mut picks: MessageWriter<PickedMsg>,
) {
    if !mouse.just_pressed(MouseButton::Left) { return; }

    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else { return };

    let viewport = Vec2::new(window.width(), window.height());
    let (cell, agent) = pick(cursor, viewport, &cam, &snap.agents, HEX_SIZE);
    debug!("pick at {:?} -> cell ({}, {}), agent {:?}", cursor, cell.q, cell.r, agent);
    picks.write(PickedMsg { cell, agent });
}
