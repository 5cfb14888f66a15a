use std::fs;
use std::path::Path;

use anyhow::Context;
use isv_protocol::{CaseOrder, Flavor, Script};
use serde::Deserialize;
use tracing::{debug, warn};

/// Display settings, read from an optional JSON file. CLI flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub flavor: Flavor,
    pub alphabets: Vec<Script>,
    pub case_order: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flavor: Flavor::Standard,
            alphabets: Script::ALL.to_vec(),
            case_order: CaseOrder::default()
                .cases()
                .iter()
                .map(|case| case.abbreviation().to_string())
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(?settings, "loaded config");
        Ok(settings)
    }

    /// An invalid order falls back to the default rather than failing the run.
    pub fn case_order(&self) -> CaseOrder {
        CaseOrder::parse(&self.case_order).unwrap_or_else(|err| {
            warn!(%err, order = ?self.case_order, "ignoring case order");
            CaseOrder::default()
        })
    }

    pub fn alphabets(&self) -> Vec<Script> {
        if self.alphabets.is_empty() {
            vec![Script::Latin]
        } else {
            self.alphabets.clone()
        }
    }
}
