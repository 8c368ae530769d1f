// Configuration module for reading Pilot.toml
// Tunable knobs for the decision engine: the fallback tie-break order and
// the optional parallel evaluation of fallback candidates.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use log::warn;

use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub fallback: FallbackConfig,
    pub parallelism: ParallelismConfig,
}

/// Fallback policy constants
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Order in which equally-scored fallback candidates win ties.
    /// Must name each of "up", "down", "left", "right" exactly once.
    pub direction_priority: Vec<String>,
}

impl FallbackConfig {
    /// Resolves the configured tie-break order. A list that does not name
    /// all four directions exactly once falls back to the default order
    /// (up, down, left, right) with a warning, so a bad config file can
    /// never make the engine non-deterministic.
    pub fn resolved_priority(&self) -> [Direction; 4] {
        let mut resolved = Vec::with_capacity(4);
        for name in &self.direction_priority {
            match Direction::from_name(name) {
                Some(dir) if !resolved.contains(&dir) => resolved.push(dir),
                Some(dir) => {
                    warn!("duplicate direction '{}' in direction_priority", dir.as_str());
                    return Direction::all();
                }
                None => {
                    warn!("unknown direction '{}' in direction_priority", name);
                    return Direction::all();
                }
            }
        }
        if resolved.len() != 4 {
            warn!(
                "direction_priority names {} directions, expected 4; using default order",
                resolved.len()
            );
            return Direction::all();
        }
        [resolved[0], resolved[1], resolved[2], resolved[3]]
    }
}

/// Parallel candidate evaluation constants
#[derive(Debug, Deserialize, Clone)]
pub struct ParallelismConfig {
    /// Evaluate fallback candidates on the rayon thread pool
    pub parallel_candidates: bool,
    /// Minimum number of surviving candidates before fanning out
    pub min_candidates_for_parallel: usize,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Pilot.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Pilot.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Pilot.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Pilot.toml
    pub fn default_hardcoded() -> Self {
        Config {
            fallback: FallbackConfig {
                direction_priority: vec![
                    "up".to_string(),
                    "down".to_string(),
                    "left".to_string(),
                    "right".to_string(),
                ],
            },
            parallelism: ParallelismConfig {
                parallel_candidates: false,
                min_candidates_for_parallel: 2,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Pilot.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
