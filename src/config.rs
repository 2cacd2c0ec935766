//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ROGUE_SEED` | 1 | Terrain noise seed |
//! | `ROGUE_WORLD_WIDTH` | 240 | World width in cells |
//! | `ROGUE_WORLD_HEIGHT` | 200 | World height in cells |
//! | `ROGUE_WALL_THRESHOLD` | 0.2 | Noise level at which walls appear |
//! | `ROGUE_NOISE_FREQUENCY` | 15.0 | Base noise frequency |
//! | `ROGUE_START_DAY` | true | Start in day mode |
//! | `ROGUE_LOG_PATH` | unset | Write logs to this file |
//!
//! Values that fail to parse fall back to their defaults.

use std::env;
use std::str::FromStr;

use crate::core::WorldConfig;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub log_path: Option<String>,
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = WorldConfig::default();

        let mut world = WorldConfig {
            width: parse_var(&lookup, "ROGUE_WORLD_WIDTH")
                .filter(|&w: &u16| w > 0)
                .unwrap_or(defaults.width),
            height: parse_var(&lookup, "ROGUE_WORLD_HEIGHT")
                .filter(|&h: &u16| h > 0)
                .unwrap_or(defaults.height),
            wall_threshold: parse_var(&lookup, "ROGUE_WALL_THRESHOLD")
                .unwrap_or(defaults.wall_threshold),
            start_day: lookup("ROGUE_START_DAY")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.start_day),
            ..defaults
        };
        world.noise.seed = parse_var(&lookup, "ROGUE_SEED").unwrap_or(world.noise.seed);
        world.noise.frequency = parse_var(&lookup, "ROGUE_NOISE_FREQUENCY")
            .filter(|&f: &f64| f > 0.0)
            .unwrap_or(world.noise.frequency);

        let log_path = lookup("ROGUE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { world, log_path }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "day" => Some(true),
        "0" | "false" | "no" | "night" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("ROGUE_SEED", "42"),
            ("ROGUE_WORLD_WIDTH", "80"),
            ("ROGUE_START_DAY", "night"),
            ("ROGUE_LOG_PATH", " /tmp/rogue.log "),
        ]));
        assert_eq!(cfg.world.noise.seed, 42);
        assert_eq!(cfg.world.width, 80);
        assert!(!cfg.world.start_day);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/rogue.log"));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("ROGUE_WORLD_HEIGHT", "0"),
            ("ROGUE_WALL_THRESHOLD", "lots"),
            ("ROGUE_LOG_PATH", "  "),
        ]));
        assert_eq!(cfg.world.height, WorldConfig::default().height);
        assert_eq!(cfg.world.wall_threshold, WorldConfig::default().wall_threshold);
        assert_eq!(cfg.log_path, None);
    }
}
