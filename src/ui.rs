//! UI - host-side selection owner and inspector panel.
//!
//! The picker only proposes `(cell, agent)` pairs; this module owns the
//! `Selection` resource and applies host policy: clicks outside the map
//! bounds clear the selected cell instead of selecting it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::CameraState;
use crate::picker::PickedMsg;
use crate::snapshot::{Selection, WorldSnapshot};

/// Apply pick proposals to the selection. Bounds enforcement lives
/// here, not in the picker.
pub fn apply_picks(
    mut picks: MessageReader<PickedMsg>,
    snap: Res<WorldSnapshot>,
    mut sel: ResMut<Selection>,
) {
    for pick in picks.read() {
        if snap.bounds.contains(pick.cell) {
            sel.cell = Some(pick.cell);
        } else {
            sel.cell = None;
        }
        sel.agent = pick.agent;
        info!("selection: cell {:?}, agent {:?}", sel.cell, sel.agent);
    }
}

/// Escape clears the selection.
pub fn clear_selection_system(keys: Res<ButtonInput<KeyCode>>, mut sel: ResMut<Selection>) {
    if keys.just_pressed(KeyCode::Escape) {
        *sel = Selection::default();
    }
}

/// Inspector window: current selection, tile tags, agent info, camera
/// readout.
pub fn inspector_panel_system(
    mut contexts: EguiContexts,
    snap: Res<WorldSnapshot>,
    sel: Res<Selection>,
    cam: Res<CameraState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::Window::new("Inspector")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            match sel.cell {
                Some(cell) => {
                    ui.label(egui::RichText::new(format!("Cell ({}, {})", cell.q, cell.r)).strong());
                    match snap.tiles.get(&cell.key()) {
                        Some(tile) => {
                            ui.label(format!("terrain: {}", tile.terrain.as_deref().unwrap_or("-")));
                            ui.label(format!("resource: {}", tile.resource.as_deref().unwrap_or("-")));
                            ui.label(format!("structure: {}", tile.structure.as_deref().unwrap_or("-")));
                        }
                        None => { ui.label("empty cell"); }
                    }
                    if let Some(pile) = snap.stockpiles.get(&cell.key()) {
                        ui.label(format!("stockpile: {} {}/{}", pile.resource, pile.amount, pile.max));
                    }
                }
                None => { ui.label("no cell selected"); }
            }

            ui.separator();
            match sel.agent.and_then(|id| snap.agents.iter().find(|a| a.id == id)) {
                Some(agent) => {
                    ui.label(format!("agent #{} ({})", agent.id, agent.role));
                    if let Some(pos) = agent.pos {
                        ui.label(format!("at ({}, {})", pos.q, pos.r));
                    }
                }
                None => { ui.label("no agent selected"); }
            }

            ui.separator();
            ui.label(format!(
                "camera: offset ({:.0}, {:.0}), zoom {:.2}",
                cam.offset.x, cam.offset.y, cam.zoom
            ));
            ui.label("LMB select · MMB drag · wheel zoom · WASD pan");
        });
    Ok(())
}
