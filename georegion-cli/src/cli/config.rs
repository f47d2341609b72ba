//! YAML settings.
//!
//! ```yaml
//! boundaries: countries.geojson   # relative to this file
//! classifier:
//!   nearest_fallback: false
//! grid:
//!   rows: 36
//!   cols: 72
//!   cell_height: 5.0
//!   cell_width: 5.0
//! country_codes:
//!   GRL: 2001                     # Greenland as Eastern Canada
//! ```
//!
//! Every section is optional; a missing section takes its defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use georegion::countries::rule_for_country;
use georegion::{load_boundaries_with, BoundaryTable, ClassifierConfig, CodeRule, GridSpec, RegionCode};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// GeoJSON country boundaries. Without it only the region boxes are used.
    pub boundaries: Option<PathBuf>,

    /// Which fallback stages run.
    pub classifier: ClassifierConfig,

    /// Grid used by the `grid` command.
    pub grid: GridSpec,

    /// Feature id -> fixed region code, overriding the built-in mapping.
    pub country_codes: BTreeMap<String, u32>,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A relative `boundaries` path is taken relative to the file itself.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        if let (Some(boundaries), Some(dir)) = (settings.boundaries.as_mut(), path.parent()) {
            if boundaries.is_relative() {
                *boundaries = dir.join(&*boundaries);
            }
        }

        for (id, &code) in &settings.country_codes {
            RegionCode::lookup(code).with_context(|| {
                format!(
                    "country code override {} = {} is outside the region namespace in {}",
                    id,
                    code,
                    path.display()
                )
            })?;
        }

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Settings from `path`, or defaults when none was given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Code rule for a boundary feature: an override if configured, else
    /// the built-in country mapping.
    pub fn rule_for(&self, id: &str) -> CodeRule {
        match self.country_codes.get(id) {
            Some(&code) => CodeRule::Fixed(RegionCode(code)),
            None => rule_for_country(id),
        }
    }

    /// Built-in region boxes plus the boundary features, if any.
    ///
    /// `boundaries` from the command line wins over the config file.
    pub fn build_table(&self, boundaries: Option<&Path>) -> Result<BoundaryTable> {
        let table = BoundaryTable::builtin();

        let Some(path) = boundaries.or(self.boundaries.as_deref()) else {
            return Ok(table);
        };

        let features = load_boundaries_with(path, |id| self.rule_for(id))
            .with_context(|| format!("failed to load boundaries from {}", path.display()))?;
        Ok(table.with_features(features))
    }
}

// ============================================================================
// TESTS
// ============================================================================
