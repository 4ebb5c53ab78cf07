//! Demo world - procedural snapshot source standing in for the
//! simulation + transport collaborators.
//!
//! Builds a radius-bounded hex world with simplex-noise terrain,
//! scattered resources, a partial wall ring, stockpiles, a shrine and a
//! handful of wandering agents, then pushes a fresh snapshot through the
//! feed at a fixed cadence. The view itself never reads this module.

use bevy::prelude::*;
use noise::{NoiseFn, Simplex};
use rand::Rng;

use crate::feed::SnapshotSender;
use crate::hex::{self, Axial, Lcg, MapBounds};
use crate::settings::UserSettings;
use crate::snapshot::{Agent, Stockpile, Tile, WorldSnapshot};

const AGENT_ROLES: [&str; 5] = ["farmer", "guard", "raider", "miner", "builder"];

/// Seconds between demo snapshot deliveries.
const TICK_SECONDS: f32 = 0.5;

/// The demo simulation's authoritative state. The view only ever sees
/// the snapshots it emits.
#[derive(Resource)]
pub struct DemoSim {
    sender: SnapshotSender,
    world: WorldSnapshot,
    rng: Lcg,
    timer: Timer,
}

impl DemoSim {
    pub fn new(sender: SnapshotSender, settings: &UserSettings) -> Self {
        let seed = if settings.world_seed != 0 {
            settings.world_seed
        } else {
            rand::rng().random::<u64>()
        };
        let world = generate_world(settings.world_radius, settings.agents, seed);
        info!(
            "demo world: radius {}, {} tiles, {} agents (seed {seed})",
            settings.world_radius,
            world.tiles.len(),
            world.agents.len(),
        );
        Self {
            sender,
            world,
            rng: Lcg::new(seed ^ 0x9e3779b97f4a7c15),
            timer: Timer::from_seconds(TICK_SECONDS, TimerMode::Repeating),
        }
    }
}

/// Push the initial snapshot so the first frame has something to draw.
pub fn demo_startup(sim: Res<DemoSim>) {
    sim.sender.send(sim.world.clone());
}

/// Advance the demo sim: wander agents, drift stockpile levels, deliver
/// a fresh snapshot.
pub fn demo_tick(time: Res<Time>, mut sim: ResMut<DemoSim>) {
    if !sim.timer.tick(time.delta()).just_finished() {
        return;
    }

    let DemoSim { world, rng, .. } = &mut *sim;
    let bounds = world.bounds;

    for agent in &mut world.agents {
        let Some(pos) = agent.pos else { continue };
        // One random neighbor step, staying in bounds and off water.
        let step = pos.neighbors()[rng.range_i32(0, 5) as usize];
        let walkable = bounds.contains(step)
            && world
                .tiles
                .get(&step.key())
                .and_then(|t| t.terrain.as_deref())
                != Some("water");
        if walkable {
            agent.pos = Some(step);
        }
    }

    for pile in world.stockpiles.values_mut() {
        let delta = rng.range_i32(-2, 3);
        pile.amount = pile.amount.saturating_add_signed(delta).min(pile.max);
    }

    sim.sender.send(sim.world.clone());
}

// ============================================================================
// GENERATION
// ============================================================================

/// Build the full demo world. Deterministic for a given seed.
pub fn generate_world(radius: i32, agent_count: usize, seed: u64) -> WorldSnapshot {
    let bounds = MapBounds::Radius { r: radius, origin: Axial::ZERO };
    let noise = Simplex::new(seed as u32);
    let mut rng = Lcg::new(seed);
    let mut snap = WorldSnapshot { bounds, ..Default::default() };

    // Terrain from low-frequency simplex noise.
    for cell in bounds.cells() {
        let p = hex::axial_to_pixel(cell, 1.0);
        let n = noise.get([p.x as f64 * 0.13, p.y as f64 * 0.13]);
        let terrain = if n < -0.35 {
            "water"
        } else if n < -0.1 {
            "sand"
        } else if n < 0.35 {
            "grass"
        } else {
            "forest"
        };

        let mut tile = Tile { terrain: Some(terrain.to_string()), ..Default::default() };
        // Sparse resources tied to terrain.
        match terrain {
            "forest" if rng.range_i32(0, 2) == 0 => tile.resource = Some("tree".into()),
            "grass" if rng.range_i32(0, 7) == 0 => tile.resource = Some("grain".into()),
            "sand" | "grass" if rng.range_i32(0, 11) == 0 => tile.resource = Some("rock".into()),
            _ => {}
        }
        snap.tiles.insert(cell.key(), tile);
    }

    // A partial wall ring around the center: built on the east half,
    // ghost preview on the west.
    let ring_r = (radius / 2).max(2);
    for cell in bounds.cells() {
        if cell.distance(Axial::ZERO) != ring_r {
            continue;
        }
        let tile = snap.tiles.entry(cell.key()).or_default();
        if tile.terrain.as_deref() == Some("water") {
            continue;
        }
        tile.structure = Some(if cell.q >= 0 { "wall" } else { "wall_ghost" }.to_string());
    }

    snap.shrine = Some(Axial::ZERO);

    // Stockpiles on the first land cells adjacent to the shrine.
    for step in Axial::ZERO.neighbors().into_iter().take(2) {
        snap.stockpiles.insert(
            step.key(),
            Stockpile {
                resource: "grain".into(),
                amount: rng.range_i32(5, 40) as u32,
                max: 50,
            },
        );
    }

    // Agents on random land cells, roles cycling through the palette.
    let mut placed = 0;
    while placed < agent_count {
        let cell = hex::rand_axial_with(&bounds, &mut rng);
        let land = snap
            .tiles
            .get(&cell.key())
            .and_then(|t| t.terrain.as_deref())
            != Some("water");
        if !land {
            continue;
        }
        snap.agents.push(Agent {
            id: placed as u32 + 1,
            pos: Some(cell),
            role: AGENT_ROLES[placed % AGENT_ROLES.len()].to_string(),
        });
        placed += 1;
    }

    snap
}
