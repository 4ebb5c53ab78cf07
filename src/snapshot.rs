//! Snapshot - read-only world state delivered by the simulation.
//!
//! The view never mutates a snapshot; each one replaces the previous
//! wholesale when the feed drains it. Tiles and stockpiles are keyed by
//! the canonical `"q,r"` string (see `hex::Axial::key`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::hex::{Axial, MapBounds};

/// One cell's visual tags. All open string enumerations — the renderer
/// recognizes a fixed set and ignores the rest.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tile {
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
}

/// An agent as the simulation reports it. Agents without a position are
/// neither drawn nor pickable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    #[serde(default)]
    pub pos: Option<Axial>,
    #[serde(default)]
    pub role: String,
}

/// A stockpile marker: resource tag plus fill level for the label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stockpile {
    pub resource: String,
    pub amount: u32,
    pub max: u32,
}

/// Complete world state for one frame of the view.
#[derive(Resource, Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub tiles: HashMap<String, Tile>,
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub stockpiles: HashMap<String, Stockpile>,
    #[serde(default)]
    pub shrine: Option<Axial>,
    #[serde(default)]
    pub bounds: MapBounds,
}

impl WorldSnapshot {
    /// Decode a snapshot from the transport's JSON form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// First agent occupying `cell`, if any.
    pub fn agent_at(&self, cell: Axial) -> Option<&Agent> {
        self.agents.iter().find(|a| a.pos == Some(cell))
    }
}

/// Current selection, owned by the host UI. The picker proposes new
/// values via `PickedMsg`; only the host writes this resource.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Selection {
    pub cell: Option<Axial>,
    pub agent: Option<u32>,
}
