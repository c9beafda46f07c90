//! Deployment scenario economics.

use mp_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bit-pattern key used to index per-curve memo maps by scenario value.
pub(crate) type ScenarioKey = (u64, u64);

/// The economic context a classifier operates in: what fraction of the
/// population is a bad event, and what fee each correctly cleared decision
/// earns.
///
/// Immutable value type; equality and hashing are by the bit patterns of both
/// fields so a `Scenario` can key a memo map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scenario {
    /// Fraction of the population that is a bad event, in `[0, 1]`.
    pub badrate: f64,
    /// Unit revenue per correctly cleared decision, non-negative.
    pub fee: f64,
}

impl Scenario {
    /// Build a scenario, validating both fields' domains.
    pub fn new(badrate: f64, fee: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&badrate) {
            return Err(Error::InvalidInput(format!(
                "badrate={badrate} outside [0, 1]"
            )));
        }
        if !(fee >= 0.0 && fee.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "fee={fee} must be finite and non-negative"
            )));
        }
        Ok(Self { badrate, fee })
    }

    pub(crate) fn key(&self) -> ScenarioKey {
        (self.badrate.to_bits(), self.fee.to_bits())
    }
}

impl PartialEq for Scenario {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Scenario {}

impl std::hash::Hash for Scenario {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
