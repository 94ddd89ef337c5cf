use serde::{Deserialize, Serialize};

/// Debt-to-income value used when an applicant reports no income.
pub const INCOME_SENTINEL_DTI: f64 = 1e9;

/// Tunable constants for the risk score and the naive Bayes predictor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub risk: RiskSettings,
    #[serde(default)]
    pub bayes: BayesSettings,
}

/// Weights applied by the risk scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub default_penalty: f64,
    pub no_income_dti: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            default_penalty: 0.5,
            no_income_dti: INCOME_SENTINEL_DTI,
        }
    }
}

/// Bucketing and decision thresholds for the naive Bayes predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesSettings {
    /// Credit scores at or above this value fall into the upper bucket.
    pub bucket_cutoff: i32,
    /// Added to the denominator of the approval probability.
    pub smoothing: u32,
    /// Approval requires a probability strictly above this value.
    pub approval_cutoff: f64,
}

impl Default for BayesSettings {
    fn default() -> Self {
        Self {
            bucket_cutoff: 600,
            smoothing: 1,
            approval_cutoff: 0.5,
        }
    }
}
