//! User settings persistence — save/load config to JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted user settings. Saved to `hexvale-settings.json` next to the
/// executable's working directory.
#[derive(Resource, Serialize, Deserialize, Clone)]
pub struct UserSettings {
    // Camera
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f32,
    // Demo world (stands in for the simulation collaborator)
    #[serde(default = "default_world_radius")]
    pub world_radius: i32,
    #[serde(default = "default_agents")]
    pub agents: usize,
    #[serde(default)]
    pub world_seed: u64,
}

fn default_scroll_speed() -> f32 { 1.0 }
fn default_world_radius() -> i32 { 12 }
fn default_agents() -> usize { 10 }

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            scroll_speed: default_scroll_speed(),
            world_radius: default_world_radius(),
            agents: default_agents(),
            world_seed: 0,
        }
    }
}

fn settings_path() -> PathBuf {
    PathBuf::from("hexvale-settings.json")
}

impl UserSettings {
    /// Load settings, falling back to defaults on any read/parse error.
    pub fn load_or_default() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => {
                    info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    warn!("settings file unreadable ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist current settings; failures are logged, never fatal.
    pub fn save(&self) {
        let path = settings_path();
        match serde_json::to_string_pretty(self) {
            Ok(raw) => {
                if let Err(err) = std::fs::write(&path, raw) {
                    warn!("could not write {}: {err}", path.display());
                }
            }
            Err(err) => warn!("could not serialize settings: {err}"),
        }
    }
}
