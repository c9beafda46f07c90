//! Model Pricing common types and errors.
//!
//! This crate provides the foundational pieces shared across mp-* crates:
//! - The unified error taxonomy and `Result` alias
//! - The `Auc` scalar alias used throughout the public API

pub mod error;

pub use error::{Error, Result};

/// Area under the ROC curve, a scalar in `[0, 1]`.
pub type Auc = f64;
