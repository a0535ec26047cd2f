//! Simulation balance knobs
//!
//! Defaults reproduce the shipped game. These are code-level switches, not a content
//! pipeline; nothing loads them from disk.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemies spawned at startup and per restart batch
    pub initial_population: usize,
    /// Restart spawns a second batch after resetting the mob
    pub double_seed_on_restart: bool,
    /// Decay birth rate every frame, even without contact
    pub passive_decay: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_population: 10,
            double_seed_on_restart: true,
            passive_decay: false,
        }
    }
}
