//! Error types for Model Pricing.

use thiserror::Error;

/// Result type alias for Model Pricing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Model Pricing.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Input validation errors (20-29)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate curve: shape parameter is undefined for auc={auc}")]
    DegenerateCurve { auc: f64 },

    // Search errors (30-39)
    #[error(
        "no critical AUC found: no candidate above base_auc={base_auc} \
         improves profit by more than {tolerance}"
    )]
    NoCriticalAucFound { base_auc: f64, tolerance: f64 },
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting by downstream consumers.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::Json(_) => 11,
            Error::InvalidInput(_) => 20,
            Error::DegenerateCurve { .. } => 21,
            Error::NoCriticalAucFound { .. } => 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_category() {
        assert_eq!(Error::Config("x".into()).code(), 10);
        assert_eq!(Error::InvalidInput("x".into()).code(), 20);
        assert_eq!(Error::DegenerateCurve { auc: 1.0 }.code(), 21);
        assert_eq!(
            Error::NoCriticalAucFound {
                base_auc: 0.9,
                tolerance: 1e-6
            }
            .code(),
            30
        );
    }

    #[test]
    fn display_names_offending_argument() {
        let err = Error::InvalidInput("auc=1.5 outside [0, 1]".into());
        assert!(err.to_string().contains("auc=1.5"));
    }
}
