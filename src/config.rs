use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::planner::constants::{DEFAULT_GENERATION_DELAY_MS, DEFAULT_PLAN_DAYS};

/// Runtime settings passed explicitly to whatever needs them.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// JSON file backing the key-value store that holds the draft.
    pub store_path: PathBuf,
    pub generation_delay: Duration,
    /// Days in a generated plan, 1 to 7.
    pub plan_days: usize,
    /// Seed for random dish picks; rotation is used when absent.
    pub seed: Option<u64>,
    pub export_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("meal_planner_store.json"),
            generation_delay: Duration::from_millis(DEFAULT_GENERATION_DELAY_MS),
            plan_days: DEFAULT_PLAN_DAYS,
            seed: None,
            export_path: None,
        }
    }
}

impl From<&Cli> for PlannerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            store_path: cli.store.clone(),
            generation_delay: Duration::from_millis(cli.delay_ms),
            plan_days: cli.days.clamp(1, DEFAULT_PLAN_DAYS),
            seed: cli.seed,
            export_path: cli.export.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let cli = Cli::parse_from(["meal_wizard"]);
        let config = PlannerConfig::from(&cli);
        let defaults = PlannerConfig::default();

        assert_eq!(config.store_path, defaults.store_path);
        assert_eq!(config.generation_delay, defaults.generation_delay);
        assert_eq!(config.plan_days, defaults.plan_days);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_days_are_clamped() {
        let cli = Cli::parse_from(["meal_wizard", "--days", "30"]);
        assert_eq!(PlannerConfig::from(&cli).plan_days, 7);

        let cli = Cli::parse_from(["meal_wizard", "--days", "0"]);
        assert_eq!(PlannerConfig::from(&cli).plan_days, 1);
    }
}
