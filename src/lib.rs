//! Hexvale - hex-tiled world view: renderer, camera, picker.
//!
//! The view consumes read-only `WorldSnapshot`s from a feed, renders
//! them through a camera transform, and turns pointer input back into
//! axial-cell selections for the host UI.

// ============================================================================
// MODULES
// ============================================================================

pub mod camera;
pub mod constants;
pub mod demo;
pub mod draw;
pub mod feed;
pub mod hex;
pub mod picker;
pub mod render;
pub mod settings;
pub mod snapshot;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Build the view application: resources, snapshot feed, input systems
/// and the reactive presenter. Called once at startup.
pub fn build_app(app: &mut App) {
    let user_settings = settings::UserSettings::load_or_default();
    let (sender, inbox) = feed::snapshot_channel();
    let sim = demo::DemoSim::new(sender, &user_settings);

    app.insert_resource(user_settings)
        .insert_resource(inbox)
        .insert_resource(sim)
        .init_resource::<snapshot::WorldSnapshot>()
        .init_resource::<snapshot::Selection>()
        .init_resource::<camera::CameraState>()
        .init_resource::<camera::DragState>()
        .add_message::<picker::PickedMsg>()
        .add_systems(Startup, (camera::setup_camera, demo::demo_startup))
        // One frame: sim tick → feed drain → camera updates → pick →
        // host selection → present. Chained so each stage sees the
        // stage before it, and the presenter re-runs only on change.
        .add_systems(Update, (
            demo::demo_tick,
            feed::drain_snapshots,
            (
                camera::camera_pan_system,
                camera::camera_drag_system,
                camera::camera_zoom_system,
            ),
            camera::camera_transform_sync,
            picker::click_pick_system,
            ui::apply_picks,
            ui::clear_selection_system,
            render::present_pass.run_if(
                resource_changed::<snapshot::WorldSnapshot>
                    .or(resource_changed::<snapshot::Selection>),
            ),
        ).chain())
        .add_systems(EguiPrimaryContextPass, ui::inspector_panel_system);
}
