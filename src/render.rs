//! Render - one full draw pass per snapshot/selection change.
//!
//! `draw_pass` is backend-agnostic: it walks every cell inside the map
//! bounds, resolves the cell's visual state, and issues world-space
//! primitives through a `DrawSurface`. The Bevy presenter replays the
//! recorded pass into sprite/mesh/text entities, replacing the previous
//! pass wholesale; the camera sync applies pan/zoom uniformly on top.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::constants::*;
use crate::draw::{CallLog, DrawCall, DrawSurface, LineStyle};
use crate::hex::{self, Axial};
use crate::snapshot::{Selection, WorldSnapshot};

// ============================================================================
// DRAW PASS
// ============================================================================

/// Emit the complete pass for one snapshot + selection. Draw order is
/// load-bearing: base hex, resource glyph, structure glyph per cell,
/// then shrine, stockpiles, selection outline, agents — later calls
/// occlude earlier ones.
pub fn draw_pass(snap: &WorldSnapshot, sel: &Selection, surface: &mut impl DrawSurface) {
    for cell in snap.bounds.cells() {
        let center = hex::axial_to_pixel(cell, HEX_SIZE);
        let corners = hex::hex_corners(center, HEX_SIZE);
        let tile = snap.tiles.get(&cell.key());

        // Base hex: terrain fill (recognized tags only), then outline.
        if let Some(color) = tile
            .and_then(|t| t.terrain.as_deref())
            .and_then(terrain_color)
        {
            surface.fill_polygon(&corners, color);
        }
        surface.stroke_polygon(&corners, GRID_COLOR, GRID_LINE_WIDTH, LineStyle::Solid);

        let Some(tile) = tile else { continue };

        // Resource glyph.
        match tile.resource.as_deref() {
            Some("tree") => surface.fill_circle(center, TREE_RADIUS, TREE_COLOR),
            Some("grain") => surface.fill_circle(center, GRAIN_RADIUS, GRAIN_COLOR),
            Some("rock") => surface.fill_rect(center, Vec2::splat(ROCK_SIZE), ROCK_COLOR),
            _ => {}
        }

        // Structure glyph, on top of the resource.
        match tile.structure.as_deref() {
            Some("wall") => surface.fill_polygon(&corners, WALL_COLOR),
            Some("wall_ghost") => surface.stroke_polygon(
                &corners,
                WALL_GHOST_COLOR,
                WALL_GHOST_WIDTH,
                LineStyle::Dashed,
            ),
            _ => {}
        }
    }

    if let Some(shrine) = snap.shrine {
        let center = hex::axial_to_pixel(shrine, HEX_SIZE);
        surface.fill_circle(center, SHRINE_RADIUS, SHRINE_COLOR);
    }

    // Stockpiles iterate their own key set; malformed keys are skipped
    // without aborting the pass.
    for (key, pile) in &snap.stockpiles {
        let Some(cell) = Axial::parse_key(key) else {
            debug!("skipping stockpile with malformed key {key:?}");
            continue;
        };
        let center = hex::axial_to_pixel(cell, HEX_SIZE);
        let size = Vec2::splat(STOCKPILE_SIZE);
        surface.fill_rect(center, size, STOCKPILE_FILL);
        let half = STOCKPILE_SIZE / 2.0;
        let frame = [
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ];
        surface.stroke_polygon(&frame, STOCKPILE_BORDER, STOCKPILE_BORDER_WIDTH, LineStyle::Solid);
        surface.text(
            center,
            &format!("{}/{}", pile.amount, pile.max),
            STOCKPILE_TEXT_SIZE,
            STOCKPILE_TEXT_COLOR,
        );
    }

    if let Some(cell) = sel.cell {
        let center = hex::axial_to_pixel(cell, HEX_SIZE);
        let inset = hex::hex_corners(center, HEX_SIZE * SELECTION_INSET);
        surface.stroke_polygon(&inset, SELECTION_COLOR, SELECTION_WIDTH, LineStyle::Solid);
    }

    // Agents last, so they sit above everything at their cell.
    for agent in &snap.agents {
        let Some(pos) = agent.pos else { continue };
        let center = hex::axial_to_pixel(pos, HEX_SIZE);
        surface.fill_circle(center, AGENT_RADIUS, role_color(&agent.role));
        if sel.agent == Some(agent.id) {
            surface.stroke_circle(center, AGENT_RING_RADIUS, AGENT_RING_COLOR, AGENT_RING_WIDTH);
        }
    }
}

// ============================================================================
// BEVY PRESENTER
// ============================================================================

/// Marker for entities belonging to the current pass; the presenter
/// despawns them all before replaying the next pass.
#[derive(Component)]
pub struct PassGlyph;

/// Replay a recorded pass into entities. Runs only when the snapshot or
/// selection changed — one full pass per trigger, no partial renders.
pub fn present_pass(
    mut commands: Commands,
    snap: Res<WorldSnapshot>,
    sel: Res<Selection>,
    previous: Query<Entity, With<PassGlyph>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in &previous {
        commands.entity(entity).despawn();
    }

    let mut log = CallLog::default();
    draw_pass(&snap, &sel, &mut log);

    // Call order becomes z order so occlusion matches the pass.
    for (i, call) in log.calls.iter().enumerate() {
        let z = i as f32 * 0.01;
        match call {
            DrawCall::FillPolygon { points, color } => {
                let mesh = convex_polygon_mesh(points);
                commands.spawn((
                    PassGlyph,
                    Mesh2d(meshes.add(mesh)),
                    MeshMaterial2d(materials.add(ColorMaterial::from(*color))),
                    Transform::from_xyz(0.0, 0.0, z),
                ));
            }
            DrawCall::StrokePolygon { points, color, width, style } => {
                spawn_stroke(&mut commands, points, *color, *width, *style, z);
            }
            DrawCall::FillCircle { center, radius, color } => {
                commands.spawn((
                    PassGlyph,
                    Mesh2d(meshes.add(Circle::new(*radius))),
                    MeshMaterial2d(materials.add(ColorMaterial::from(*color))),
                    Transform::from_xyz(center.x, -center.y, z),
                ));
            }
            DrawCall::StrokeCircle { center, radius, color, width } => {
                let inner = (radius - width / 2.0).max(0.0);
                commands.spawn((
                    PassGlyph,
                    Mesh2d(meshes.add(Annulus::new(inner, radius + width / 2.0))),
                    MeshMaterial2d(materials.add(ColorMaterial::from(*color))),
                    Transform::from_xyz(center.x, -center.y, z),
                ));
            }
            DrawCall::FillRect { center, size, color } => {
                commands.spawn((
                    PassGlyph,
                    Sprite::from_color(*color, *size),
                    Transform::from_xyz(center.x, -center.y, z),
                ));
            }
            DrawCall::Text { center, text, font_size, color } => {
                commands.spawn((
                    PassGlyph,
                    Text2d::new(text.clone()),
                    TextFont::from_font_size(*font_size),
                    TextColor(*color),
                    Transform::from_xyz(center.x, -center.y, z),
                ));
            }
        }
    }
}

/// Triangle-fan mesh for a convex polygon (hexes are always convex).
/// Canvas y-down flips to Bevy y-up here, once.
fn convex_polygon_mesh(points: &[Vec2]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, -p.y, 0.0]).collect();
    let normals = vec![[0.0, 0.0, 1.0]; points.len()];
    let uvs = vec![[0.0, 0.0]; points.len()];
    let mut indices = Vec::with_capacity((points.len().saturating_sub(2)) * 3);
    for i in 1..points.len().saturating_sub(1) as u32 {
        // Winding flips with the y axis, so fan CCW in Bevy space.
        indices.extend_from_slice(&[0, i + 1, i]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Stroke a closed polygon with thin rotated sprites, one per segment
/// (or per dash for `LineStyle::Dashed`).
fn spawn_stroke(
    commands: &mut Commands,
    points: &[Vec2],
    color: Color,
    width: f32,
    style: LineStyle,
    z: f32,
) {
    const DASH_LEN: f32 = 5.0;

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        match style {
            LineStyle::Solid => spawn_segment(commands, a, b, color, width, z),
            LineStyle::Dashed => {
                let len = a.distance(b);
                let dashes = (len / (DASH_LEN * 2.0)).ceil() as usize;
                for d in 0..dashes {
                    let t0 = (d as f32 * 2.0 * DASH_LEN / len).min(1.0);
                    let t1 = ((d as f32 * 2.0 + 1.0) * DASH_LEN / len).min(1.0);
                    spawn_segment(commands, a.lerp(b, t0), a.lerp(b, t1), color, width, z);
                }
            }
        }
    }
}

/// One line segment as a rotated sprite, converting canvas y-down to
/// Bevy y-up at the transform.
fn spawn_segment(commands: &mut Commands, a: Vec2, b: Vec2, color: Color, width: f32, z: f32) {
    let a = Vec2::new(a.x, -a.y);
    let b = Vec2::new(b.x, -b.y);
    let mid = (a + b) / 2.0;
    let delta = b - a;
    let len = delta.length();
    if len <= f32::EPSILON {
        return;
    }
    commands.spawn((
        PassGlyph,
        Sprite::from_color(color, Vec2::new(len, width)),
        Transform {
            translation: mid.extend(z),
            rotation: Quat::from_rotation_z(delta.y.atan2(delta.x)),
            ..default()
        },
    ));
}
