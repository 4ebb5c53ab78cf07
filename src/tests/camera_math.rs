//! Camera transform invariants: projection inverse, pan, drag, and the
//! anchored-zoom fixed point.

use bevy::prelude::*;

use crate::camera::{self, CameraState, DragStart};
use crate::constants::{ZOOM_MAX, ZOOM_MIN};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const EPS: f32 = 1e-3;

fn cam(offset: Vec2, zoom: f32) -> CameraState {
    CameraState { offset, zoom }
}

#[test]
fn screen_and_world_are_inverse() {
    let cams = [
        CameraState::default(),
        cam(Vec2::new(120.0, -45.0), 2.5),
        cam(Vec2::new(-300.0, 90.0), 0.25),
    ];
    let points = [Vec2::ZERO, Vec2::new(640.0, 360.0), Vec2::new(-17.0, 913.0)];
    for c in cams {
        for p in points {
            let round = camera::screen_to_world(&c, VIEWPORT, camera::world_to_screen(&c, VIEWPORT, p));
            assert!(round.distance(p) < EPS, "{p:?} round-tripped to {round:?}");
        }
    }
}

#[test]
fn default_camera_centers_the_origin() {
    let c = CameraState::default();
    let screen = camera::world_to_screen(&c, VIEWPORT, Vec2::ZERO);
    assert!(screen.distance(VIEWPORT / 2.0) < EPS);
}

#[test]
fn pan_moves_view_with_keys() {
    // Panning right means the world slides left: offset decreases in x.
    let mut c = CameraState::default();
    camera::pan(&mut c, Vec2::X, 400.0, 0.1);
    assert!((c.offset.x - -40.0).abs() < EPS);
    assert!(c.offset.y.abs() < EPS);
}

#[test]
fn pan_step_is_zoom_compensated() {
    // Same keypress covers the same on-screen distance at any zoom, so
    // the world-space step shrinks as zoom grows.
    let mut near = cam(Vec2::ZERO, 2.0);
    let mut far = cam(Vec2::ZERO, 0.5);
    camera::pan(&mut near, Vec2::X, 400.0, 0.1);
    camera::pan(&mut far, Vec2::X, 400.0, 0.1);
    assert!((near.offset.x * 2.0 - 0.5 * far.offset.x).abs() < EPS * 100.0);
    assert!((near.offset.x - -20.0).abs() < EPS);
    assert!((far.offset.x - -80.0).abs() < EPS);
}

#[test]
fn zoom_anchors_the_point_under_the_cursor() {
    let cursor = Vec2::new(900.0, 200.0);
    for (offset, zoom, factor) in [
        (Vec2::ZERO, 1.0, 1.1),
        (Vec2::new(55.0, -210.0), 1.0, 0.9),
        (Vec2::new(-80.0, 40.0), 2.0, 1.1),
        (Vec2::new(300.0, 300.0), 0.3, 0.9),
    ] {
        let mut c = cam(offset, zoom);
        let anchor = camera::screen_to_world(&c, VIEWPORT, cursor);
        camera::zoom_at(&mut c, VIEWPORT, cursor, factor);
        let after = camera::world_to_screen(&c, VIEWPORT, anchor);
        assert!(
            after.distance(cursor) < EPS,
            "anchor drifted from {cursor:?} to {after:?} (offset {offset:?}, zoom {zoom}, factor {factor})"
        );
    }
}

#[test]
fn zoom_is_clamped_and_anchor_still_holds() {
    let cursor = Vec2::new(100.0, 600.0);

    let mut c = cam(Vec2::ZERO, ZOOM_MAX);
    let anchor = camera::screen_to_world(&c, VIEWPORT, cursor);
    camera::zoom_at(&mut c, VIEWPORT, cursor, 1.1);
    assert_eq!(c.zoom, ZOOM_MAX);
    assert!(camera::world_to_screen(&c, VIEWPORT, anchor).distance(cursor) < EPS);

    let mut c = cam(Vec2::new(40.0, -7.0), ZOOM_MIN);
    camera::zoom_at(&mut c, VIEWPORT, cursor, 0.9);
    assert_eq!(c.zoom, ZOOM_MIN);
}

#[test]
fn repeated_zoom_stays_in_range() {
    let mut c = CameraState::default();
    for _ in 0..100 {
        camera::zoom_at(&mut c, VIEWPORT, Vec2::new(10.0, 10.0), 1.1);
    }
    assert_eq!(c.zoom, ZOOM_MAX);
    for _ in 0..200 {
        camera::zoom_at(&mut c, VIEWPORT, Vec2::new(10.0, 10.0), 0.9);
    }
    assert_eq!(c.zoom, ZOOM_MIN);
}

#[test]
fn drag_keeps_grabbed_world_point_under_pointer() {
    let mut c = cam(Vec2::new(12.0, 34.0), 1.6);
    let press = Vec2::new(500.0, 400.0);
    let grabbed = camera::screen_to_world(&c, VIEWPORT, press);
    let start = DragStart { cursor: press, offset: c.offset };

    for cursor in [Vec2::new(520.0, 380.0), Vec2::new(300.0, 650.0), press] {
        camera::drag_to(&mut c, start, cursor);
        let now = camera::world_to_screen(&c, VIEWPORT, grabbed);
        assert!(now.distance(cursor) < EPS, "grabbed point at {now:?}, pointer at {cursor:?}");
    }
}

#[test]
fn drag_back_to_press_point_restores_offset() {
    let mut c = cam(Vec2::new(-5.0, 77.0), 0.8);
    let start = DragStart { cursor: Vec2::new(640.0, 360.0), offset: c.offset };
    camera::drag_to(&mut c, start, Vec2::new(100.0, 100.0));
    camera::drag_to(&mut c, start, start.cursor);
    assert!(c.offset.distance(start.offset) < EPS);
}
