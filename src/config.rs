//! Scenario-selection configuration.
//!
//! The test scenarios that used to be chosen at compile time are plain data
//! here: a mapping from scenario name to enabled/disabled, loaded and saved
//! as JSON. The mapping is consumed by an external test harness; nothing in
//! the core reads it.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Scenario names recognized by the stock configuration.
pub const SCENARIOS: [&str; 12] = [
    "tensor-constructor",
    "tensor-multiplication",
    "tensor-copy",
    "tensor-transpose",
    "tensor-swap-rows",
    "tensor-augment-width",
    "tensor-augment-height",
    "tensor-eye",
    "tensor-invert",
    "tensor-norm",
    "particle-print",
    "particle-update",
];

/// Mapping from scenario name to enabled/disabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub scenarios: BTreeMap<String, bool>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let mut scenarios = BTreeMap::new();
        for name in SCENARIOS {
            let enabled = matches!(name, "tensor-invert" | "tensor-norm");
            scenarios.insert(name.to_string(), enabled);
        }
        ScenarioConfig { scenarios }
    }
}

impl ScenarioConfig {
    /// Whether a scenario is enabled. Unknown names read as disabled.
    pub fn enabled(&self, name: &str) -> bool {
        self.scenarios.get(name).copied().unwrap_or(false)
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        self.scenarios.insert(name.to_string(), enabled);
    }

    /// The names of every enabled scenario, in sorted order.
    pub fn enabled_scenarios(&self) -> Vec<&str> {
        self.scenarios
            .iter()
            .filter(|(_, &enabled)| enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Load a scenario configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: ScenarioConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Write the configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.as_ref().display()))?;
        Ok(())
    }
}
