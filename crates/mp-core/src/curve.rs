//! Synthetic ROC curves and per-point profit.
//!
//! Curves belong to the one-parameter family `tpr = I_fpr(1, b)` where `I` is
//! the regularized incomplete Beta function. The shape parameter is set in
//! closed form as `b = auc / (1 - auc)`, so the stored `auc` is the nominal
//! construction target, not necessarily the curve's exact geometric area
//! (the exact relationship is available as `mp_math::curve_fit_error`).

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use mp_common::{Auc, Error, Result};
use mp_config::AnalysisConfig;
use mp_math::{betainc, linspace};
use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, ScenarioKey};

/// A single (false-positive-rate, true-positive-rate) threshold outcome.
///
/// Created only as part of curve synthesis; both rates lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

impl OperatingPoint {
    /// Expected relative profit of operating at this point under `scenario`.
    ///
    /// The population splits into good (`1 - badrate`) and bad (`badrate`)
    /// fractions. Flagging a good customer forgoes the fee, letting a bad one
    /// through loses one full unit, and correctly clearing a good customer
    /// earns the fee:
    ///
    /// `profit = -fee·fp - fn + fee·tn`
    pub fn expected_relative_profit(&self, scenario: &Scenario) -> f64 {
        let frac_false_positive = self.false_positive_rate * (1.0 - scenario.badrate);
        let frac_false_negative = (1.0 - self.true_positive_rate) * scenario.badrate;
        let frac_true_negative = (1.0 - self.false_positive_rate) * (1.0 - scenario.badrate);
        -scenario.fee * frac_false_positive - frac_false_negative
            + scenario.fee * frac_true_negative
    }
}

/// A discretized ROC curve approximating a target AUC.
///
/// Points are ordered by strictly increasing false-positive rate spanning
/// `[0, 1]`, with non-decreasing true-positive rate and endpoints at `(0, 0)`
/// and `(1, 1)`. Immutable once constructed; the per-scenario optimum memo is
/// populated lazily behind a lock, so a curve may be shared across threads.
#[derive(Debug, Serialize, Deserialize)]
pub struct RocCurve {
    points: Vec<OperatingPoint>,
    auc: Auc,
    #[serde(skip)]
    memo: Mutex<HashMap<ScenarioKey, (OperatingPoint, f64)>>,
}

impl RocCurve {
    /// Synthesize a curve for `auc` at the default 500-point discretization.
    pub fn from_auc(auc: Auc) -> Result<Self> {
        Self::from_auc_with(auc, &AnalysisConfig::default())
    }

    /// Synthesize a curve for `auc` at `config.curve_samples` points.
    ///
    /// Requires `0 < auc < 1` strictly; the boundary values make the shape
    /// parameter zero or infinite and fail with
    /// [`Error::DegenerateCurve`]. Callers going through the analysis
    /// functions have AUC inputs nudged off the boundary first.
    pub fn from_auc_with(auc: Auc, config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        if !(auc > 0.0 && auc < 1.0) {
            return Err(Error::DegenerateCurve { auc });
        }

        let b = auc / (1.0 - auc);
        let mut points = Vec::with_capacity(config.curve_samples);
        for fpr in linspace(0.0, 1.0, config.curve_samples) {
            // The grid endpoint can overshoot 1.0 by one ulp.
            let fpr = fpr.clamp(0.0, 1.0);
            let tpr = betainc(1.0, b, fpr)?;
            points.push(OperatingPoint {
                false_positive_rate: fpr,
                true_positive_rate: tpr,
            });
        }

        Ok(Self {
            points,
            auc,
            memo: Mutex::new(HashMap::new()),
        })
    }

    /// The discretized point sequence, in ascending false-positive-rate order.
    pub fn points(&self) -> &[OperatingPoint] {
        &self.points
    }

    /// The nominal AUC this curve was constructed to approximate.
    pub fn auc(&self) -> Auc {
        self.auc
    }

    /// The operating point maximizing expected relative profit under
    /// `scenario`.
    ///
    /// Exact only up to the discretization grid; ties resolve to the first
    /// maximal point in ascending-fpr order. Memoized per scenario value, so
    /// repeated queries return bit-identical results.
    pub fn optimal_operation_point(&self, scenario: &Scenario) -> OperatingPoint {
        self.optimum(scenario).0
    }

    /// The expected relative profit at the optimal operating point.
    pub fn optimal_profit(&self, scenario: &Scenario) -> f64 {
        self.optimum(scenario).1
    }

    /// Marginal expected-profit gain of operating on this curve instead of
    /// `other`, under the same scenario. Antisymmetric:
    /// `a.compare_profits(b, s) == -b.compare_profits(a, s)`.
    pub fn compare_profits(&self, other: &RocCurve, scenario: &Scenario) -> f64 {
        self.optimal_profit(scenario) - other.optimal_profit(scenario)
    }

    fn optimum(&self, scenario: &Scenario) -> (OperatingPoint, f64) {
        let mut memo = self.memo.lock().unwrap_or_else(|e| e.into_inner());
        *memo
            .entry(scenario.key())
            .or_insert_with(|| Self::search_optimum(&self.points, scenario))
    }

    fn search_optimum(points: &[OperatingPoint], scenario: &Scenario) -> (OperatingPoint, f64) {
        // Points are non-empty: curve_samples >= 2 is validated at synthesis.
        let mut best = points[0];
        let mut best_profit = best.expected_relative_profit(scenario);
        for point in &points[1..] {
            let profit = point.expected_relative_profit(scenario);
            if profit > best_profit {
                best = *point;
                best_profit = profit;
            }
        }
        (best, best_profit)
    }
}

// Identity is the materialized point sequence plus the nominal AUC; the memo
// is derived state and never participates.
impl PartialEq for RocCurve {
    fn eq(&self, other: &Self) -> bool {
        self.auc.to_bits() == other.auc.to_bits()
            && self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| {
                    a.false_positive_rate.to_bits() == b.false_positive_rate.to_bits()
                        && a.true_positive_rate.to_bits() == b.true_positive_rate.to_bits()
                })
    }
}

impl Hash for RocCurve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.auc.to_bits().hash(state);
        for point in &self.points {
            point.false_positive_rate.to_bits().hash(state);
            point.true_positive_rate.to_bits().hash(state);
        }
    }
}
