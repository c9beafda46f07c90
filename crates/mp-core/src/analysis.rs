//! Analysis entry points: profit pricing and the critical-AUC search.
//!
//! Every public function funnels its AUC arguments through
//! [`normalize_auc_with`] before any curve is built, so validation failures
//! surface at the boundary and no partial results escape.

use mp_common::{Auc, Error, Result};
use mp_config::AnalysisConfig;
use mp_math::linspace;
use tracing::{debug, trace};

use crate::curve::RocCurve;
use crate::scenario::Scenario;

/// Validate an AUC argument and nudge boundary values into the open interval.
///
/// Uses the default boundary epsilon of 1e-6.
pub fn normalize_auc(auc: Auc) -> Result<Auc> {
    normalize_auc_with(auc, mp_config::DEFAULT_BOUNDARY_EPSILON)
}

/// Validate an AUC argument, nudging exact 0 to `epsilon` and exact 1 to
/// `1 - epsilon`. Values outside `[0, 1]` (including NaN) fail with
/// [`Error::InvalidInput`].
pub fn normalize_auc_with(auc: Auc, epsilon: f64) -> Result<Auc> {
    if !(0.0..=1.0).contains(&auc) {
        return Err(Error::InvalidInput(format!("auc={auc} outside [0, 1]")));
    }
    if auc == 0.0 {
        Ok(epsilon)
    } else if auc == 1.0 {
        Ok(1.0 - epsilon)
    } else {
        Ok(auc)
    }
}

/// Optimal expected relative profit achievable with a classifier of the given
/// AUC under `scenario`.
pub fn expected_profit(auc: Auc, scenario: &Scenario) -> Result<f64> {
    expected_profit_with(auc, scenario, &AnalysisConfig::default())
}

/// [`expected_profit`] with explicit discretization settings.
pub fn expected_profit_with(
    auc: Auc,
    scenario: &Scenario,
    config: &AnalysisConfig,
) -> Result<f64> {
    let auc = normalize_auc_with(auc, config.boundary_epsilon)?;
    let curve = RocCurve::from_auc_with(auc, config)?;
    Ok(curve.optimal_profit(scenario))
}

/// Marginal profit gain of replacing a `base_auc` model with a `new_auc`
/// model under `scenario`. Negative when the replacement is worse.
pub fn expected_profit_increase(base_auc: Auc, new_auc: Auc, scenario: &Scenario) -> Result<f64> {
    expected_profit_increase_with(base_auc, new_auc, scenario, &AnalysisConfig::default())
}

/// [`expected_profit_increase`] with explicit discretization settings.
pub fn expected_profit_increase_with(
    base_auc: Auc,
    new_auc: Auc,
    scenario: &Scenario,
    config: &AnalysisConfig,
) -> Result<f64> {
    let base_auc = normalize_auc_with(base_auc, config.boundary_epsilon)?;
    let new_auc = normalize_auc_with(new_auc, config.boundary_epsilon)?;
    let base = RocCurve::from_auc_with(base_auc, config)?;
    let new = RocCurve::from_auc_with(new_auc, config)?;
    Ok(new.compare_profits(&base, scenario))
}

/// The minimal AUC a replacement model must reach to beat the baseline's
/// optimal profit by more than the improvement tolerance.
pub fn critical_auc(scenario: &Scenario, base_auc: Auc) -> Result<Auc> {
    critical_auc_with(scenario, base_auc, &AnalysisConfig::default())
}

/// [`critical_auc`] with explicit discretization settings.
///
/// Scans `config.search_samples` evenly spaced candidates over
/// `[base_auc, 1 - epsilon]`. The grid is ascending, so the first candidate
/// whose profit gain over the baseline exceeds the tolerance is the smallest
/// qualifying AUC. Fails with [`Error::NoCriticalAucFound`] when the whole
/// grid is exhausted; this legitimately happens when the scenario makes even
/// near-perfect curves indistinguishable from the baseline, or when
/// `base_auc` already sits at the top of the range.
pub fn critical_auc_with(
    scenario: &Scenario,
    base_auc: Auc,
    config: &AnalysisConfig,
) -> Result<Auc> {
    let base_auc = normalize_auc_with(base_auc, config.boundary_epsilon)?;
    let baseline = RocCurve::from_auc_with(base_auc, config)?;

    let top = 1.0 - config.boundary_epsilon;
    for candidate in linspace(base_auc, top, config.search_samples) {
        let gain = RocCurve::from_auc_with(candidate, config)?.compare_profits(&baseline, scenario);
        trace!(candidate, gain, "critical-AUC candidate evaluated");
        if gain > config.improvement_tolerance {
            debug!(
                critical_auc = candidate,
                gain, base_auc, "critical AUC found"
            );
            return Ok(candidate);
        }
    }

    debug!(
        base_auc,
        tolerance = config.improvement_tolerance,
        "critical-AUC search exhausted without improvement"
    );
    Err(Error::NoCriticalAucFound {
        base_auc,
        tolerance: config.improvement_tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(badrate: f64, fee: f64) -> Scenario {
        Scenario::new(badrate, fee).unwrap()
    }

    #[test]
    fn normalize_rejects_out_of_range() {
        assert!(matches!(
            normalize_auc(-0.1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(normalize_auc(1.1), Err(Error::InvalidInput(_))));
        assert!(normalize_auc(f64::NAN).is_err());
    }

    #[test]
    fn normalize_nudges_boundaries_symmetrically() {
        let low = normalize_auc(0.0).unwrap();
        let high = normalize_auc(1.0).unwrap();
        assert_eq!(low, 1e-6);
        assert_eq!(high, 1.0 - 1e-6);
        assert!(low > 0.0 && low < 1.0);
        assert!(high > 0.0 && high < 1.0);
    }

    #[test]
    fn normalize_passes_interior_values_through() {
        assert_eq!(normalize_auc(0.37).unwrap(), 0.37);
    }

    #[test]
    fn expected_profit_is_non_decreasing_in_auc() {
        let s = scenario(0.1, 0.2);
        let mut prev = f64::NEG_INFINITY;
        for auc in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let profit = expected_profit(auc, &s).unwrap();
            assert!(
                profit >= prev - 1e-12,
                "profit dropped at auc={auc}: {profit} < {prev}"
            );
            prev = profit;
        }
    }

    #[test]
    fn expected_profit_increase_is_antisymmetric() {
        let s = scenario(0.2, 0.5);
        let forward = expected_profit_increase(0.6, 0.8, &s).unwrap();
        let backward = expected_profit_increase(0.8, 0.6, &s).unwrap();
        assert!((forward + backward).abs() < 1e-15);
        assert!(forward > 0.0);
    }

    #[test]
    fn critical_auc_concrete_scenario() {
        let s = scenario(0.1, 0.2);
        let base = 0.6;
        let config = AnalysisConfig::default();

        let critical = critical_auc(&s, base).unwrap();
        assert!(critical > base && critical < 1.0);

        let gain = expected_profit_increase(base, critical, &s).unwrap();
        assert!(gain > config.improvement_tolerance);

        // One grid step below the result must not qualify.
        let top = 1.0 - config.boundary_epsilon;
        let step = (top - base) / (config.search_samples - 1) as f64;
        let below = expected_profit_increase(base, critical - step, &s).unwrap();
        assert!(below <= config.improvement_tolerance);
    }

    #[test]
    fn critical_auc_fails_when_profit_is_flat() {
        // fee = 0, badrate = 0: every operating point earns exactly zero, so
        // no candidate can beat the baseline.
        let s = scenario(0.0, 0.0);
        let result = critical_auc(&s, 0.5);
        assert!(matches!(result, Err(Error::NoCriticalAucFound { .. })));
    }

    #[test]
    fn critical_auc_validates_base_auc_first() {
        let s = scenario(0.1, 0.2);
        assert!(matches!(
            critical_auc(&s, 1.5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn critical_auc_respects_configured_tolerance() {
        // An enormous tolerance makes every candidate fail.
        let s = scenario(0.1, 0.2);
        let config = AnalysisConfig {
            improvement_tolerance: 10.0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            critical_auc_with(&s, 0.6, &config),
            Err(Error::NoCriticalAucFound { .. })
        ));
    }
}
