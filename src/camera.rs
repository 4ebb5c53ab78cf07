//! Camera - pan/zoom state and the three update paths that mutate it.
//!
//! The forward transform (canvas convention, y-down) is
//! `screen = viewport/2 + zoom·(world + offset)`; the picker uses the
//! algebraic inverse. A sync system mirrors the state onto the Bevy
//! `Camera2d` so the transform is applied once, uniformly, to every
//! drawn entity. Nothing outside this module writes `CameraState`.

use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

use crate::constants::{CAMERA_PAN_SPEED, CAMERA_ZOOM_SPEED, ZOOM_MAX, ZOOM_MIN};
use crate::settings::UserSettings;

/// Marker component for the main view camera.
#[derive(Component)]
pub struct MainCamera;

/// Pan offset (world pixels, canvas y-down) and zoom factor.
/// Created once per view session; read-only outside this module.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraState {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self { offset: Vec2::ZERO, zoom: 1.0 }
    }
}

/// Active drag capture: pointer position and offset at press time.
/// `None` whenever no drag is in progress.
#[derive(Resource, Default)]
pub struct DragState(pub Option<DragStart>);

#[derive(Clone, Copy)]
pub struct DragStart {
    pub cursor: Vec2,
    pub offset: Vec2,
}

// ============================================================================
// PURE TRANSFORMS
// ============================================================================

/// World-pixel point → screen point for a given viewport size.
pub fn world_to_screen(cam: &CameraState, viewport: Vec2, world: Vec2) -> Vec2 {
    viewport / 2.0 + (world + cam.offset) * cam.zoom
}

/// Screen point → world-pixel point (inverse of `world_to_screen`).
pub fn screen_to_world(cam: &CameraState, viewport: Vec2, screen: Vec2) -> Vec2 {
    (screen - viewport / 2.0) / cam.zoom - cam.offset
}

/// Apply one pan tick. `dir` is the screen-space pan direction; offset
/// moves opposite so the view travels with the keys, and the step is
/// divided by zoom to keep on-screen speed constant.
pub fn pan(cam: &mut CameraState, dir: Vec2, speed: f32, dt: f32) {
    cam.offset -= dir * speed * dt / cam.zoom;
}

/// Cursor-anchored zoom: scale zoom by `factor` (clamped), then solve
/// the offset so the world point under `cursor` maps back to the same
/// screen pixel. Exact, not iterative — the anchor constraint fully
/// determines the new offset.
pub fn zoom_at(cam: &mut CameraState, viewport: Vec2, cursor: Vec2, factor: f32) {
    let anchor = screen_to_world(cam, viewport, cursor);
    cam.zoom = (cam.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    cam.offset = (cursor - viewport / 2.0) / cam.zoom - anchor;
}

/// Continue a drag: the grabbed world point follows the pointer, so the
/// offset is the press-time snapshot plus the pointer delta over zoom.
pub fn drag_to(cam: &mut CameraState, start: DragStart, cursor: Vec2) {
    cam.offset = start.offset + (cursor - start.cursor) / cam.zoom;
}

// ============================================================================
// SYSTEMS
// ============================================================================

/// WASD/arrow key-pan. Polled every frame: the pan intent is recomputed
/// from current key state, so releasing all keys stops the motion the
/// same tick with no residual velocity.
pub fn camera_pan_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<UserSettings>,
    mut cam: ResMut<CameraState>,
) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) { dir.y -= 1.0; }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) { dir.y += 1.0; }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) { dir.x -= 1.0; }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) { dir.x += 1.0; }

    if dir != Vec2::ZERO {
        let speed = CAMERA_PAN_SPEED * settings.scroll_speed;
        pan(&mut cam, dir.normalize(), speed, time.delta_secs());
    }
}

/// Middle-button drag-pan. Press captures cursor + offset; release or a
/// cursor leaving the window ends the drag. No momentum.
pub fn camera_drag_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<DragState>,
    mut cam: ResMut<CameraState>,
) {
    let Ok(window) = windows.single() else { return };
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Middle) {
        if let Some(cursor) = cursor {
            drag.0 = Some(DragStart { cursor, offset: cam.offset });
        }
        return;
    }

    if !mouse.pressed(MouseButton::Middle) {
        drag.0 = None;
        return;
    }

    match (drag.0, cursor) {
        (Some(start), Some(cursor)) => drag_to(&mut cam, start, cursor),
        // Cursor left the capture area: terminate the drag.
        (Some(_), None) => drag.0 = None,
        _ => {}
    }
}

/// Scroll wheel zoom toward the cursor. The world point under the
/// pointer stays fixed on screen across the zoom change.
pub fn camera_zoom_system(
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window>,
    mut cam: ResMut<CameraState>,
) {
    let delta = scroll.delta.y;
    if delta == 0.0 { return; }

    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else { return };

    let viewport = Vec2::new(window.width(), window.height());
    let factor = if delta > 0.0 { 1.0 + CAMERA_ZOOM_SPEED } else { 1.0 - CAMERA_ZOOM_SPEED };
    zoom_at(&mut cam, viewport, cursor, factor);
}

/// Mirror `CameraState` onto the `Camera2d` transform. Canvas space is
/// y-down and Bevy world is y-up, so y flips; scale is inverse zoom.
pub fn camera_transform_sync(
    cam: Res<CameraState>,
    mut query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = query.single_mut() else { return };
    transform.translation.x = -cam.offset.x;
    transform.translation.y = cam.offset.y;
    transform.scale = Vec3::new(1.0 / cam.zoom, 1.0 / cam.zoom, 1.0);
}

/// Spawn the 2D camera at the session origin.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera, Transform::default()));
    info!("view camera spawned");
}
