//! Model Pricing core engine.
//!
//! Estimates the economic value of a binary classifier's discrimination power
//! (ROC AUC) under a parametric cost/benefit model:
//! - [`RocCurve::from_auc`] synthesizes a representative ROC curve from a
//!   single scalar AUC
//! - [`OperatingPoint::expected_relative_profit`] prices an operating point
//!   under a deployment [`Scenario`]
//! - [`analysis::critical_auc`] finds the minimal AUC a replacement model
//!   needs to beat a baseline's optimal profit
//!
//! Rendering of curves and profit surfaces is a downstream consumer of the
//! point sequences and profit values exposed here; the core performs no I/O.

pub mod analysis;
pub mod curve;
pub mod scenario;

pub use analysis::{
    critical_auc, critical_auc_with, expected_profit, expected_profit_increase,
    expected_profit_increase_with, expected_profit_with, normalize_auc, normalize_auc_with,
};
pub use curve::{OperatingPoint, RocCurve};
pub use mp_common::{Auc, Error, Result};
pub use scenario::Scenario;
