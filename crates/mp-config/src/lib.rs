//! Model Pricing analysis configuration.
//!
//! This crate provides:
//! - Typed accuracy/cost knobs for curve discretization and the
//!   critical-AUC search
//! - JSON loading with semantic validation
//!
//! Defaults reproduce the reference analysis: 500-point curves, a 200-point
//! candidate grid, and 1e-6 boundary/improvement epsilons.

use mp_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of operating points per synthesized curve.
pub const DEFAULT_CURVE_SAMPLES: usize = 500;

/// Default number of candidate AUCs scanned by the critical-AUC search.
pub const DEFAULT_SEARCH_SAMPLES: usize = 200;

/// Default nudge applied to AUC values sitting exactly on 0 or 1.
pub const DEFAULT_BOUNDARY_EPSILON: f64 = 1e-6;

/// Default minimum profit gain for a candidate to count as an improvement.
pub const DEFAULT_IMPROVEMENT_TOLERANCE: f64 = 1e-6;

/// Accuracy/cost tradeoffs for curve synthesis and the critical-AUC search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of evenly spaced false-positive-rate samples per curve.
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,

    /// Number of evenly spaced candidate AUCs in the critical-AUC scan.
    #[serde(default = "default_search_samples")]
    pub search_samples: usize,

    /// Epsilon used to nudge degenerate AUC inputs (0 or 1) off the boundary.
    #[serde(default = "default_boundary_epsilon")]
    pub boundary_epsilon: f64,

    /// Profit gain a candidate must exceed to beat the baseline.
    #[serde(default = "default_improvement_tolerance")]
    pub improvement_tolerance: f64,
}

fn default_curve_samples() -> usize {
    DEFAULT_CURVE_SAMPLES
}

fn default_search_samples() -> usize {
    DEFAULT_SEARCH_SAMPLES
}

fn default_boundary_epsilon() -> f64 {
    DEFAULT_BOUNDARY_EPSILON
}

fn default_improvement_tolerance() -> f64 {
    DEFAULT_IMPROVEMENT_TOLERANCE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            curve_samples: DEFAULT_CURVE_SAMPLES,
            search_samples: DEFAULT_SEARCH_SAMPLES,
            boundary_epsilon: DEFAULT_BOUNDARY_EPSILON,
            improvement_tolerance: DEFAULT_IMPROVEMENT_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from a JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation beyond what the type system enforces.
    pub fn validate(&self) -> Result<()> {
        if self.curve_samples < 2 {
            return Err(Error::Config(format!(
                "curve_samples must be at least 2, got {}",
                self.curve_samples
            )));
        }
        if self.search_samples < 2 {
            return Err(Error::Config(format!(
                "search_samples must be at least 2, got {}",
                self.search_samples
            )));
        }
        if !(self.boundary_epsilon > 0.0 && self.boundary_epsilon < 0.5) {
            return Err(Error::Config(format!(
                "boundary_epsilon must be in (0, 0.5), got {}",
                self.boundary_epsilon
            )));
        }
        if !(self.improvement_tolerance >= 0.0 && self.improvement_tolerance.is_finite()) {
            return Err(Error::Config(format!(
                "improvement_tolerance must be finite and non-negative, got {}",
                self.improvement_tolerance
            )));
        }
        Ok(())
    }
}
