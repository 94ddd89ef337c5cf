use serde::{Deserialize, Serialize};

use super::risk::{self, RiskMetrics};
use super::settings::RiskSettings;

/// Raw applicant fields as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub name: String,
    pub credit_score: i32,
    pub income: f64,
    pub loan_amount: f64,
    pub existing_debt: f64,
    pub defaults: u32,
}

impl ApplicantInput {
    pub fn new(
        name: impl Into<String>,
        credit_score: i32,
        income: f64,
        loan_amount: f64,
        existing_debt: f64,
        defaults: u32,
    ) -> Self {
        Self {
            name: name.into(),
            credit_score,
            income,
            loan_amount,
            existing_debt,
            defaults,
        }
    }
}

/// Validated applicant with its derived risk metrics.
///
/// Raw fields are only reachable through accessors, so `dti` and `risk_score` always match
/// the values they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applicant {
    name: String,
    credit_score: i32,
    income: f64,
    loan_amount: f64,
    existing_debt: f64,
    defaults: u32,
    metrics: RiskMetrics,
}

impl Applicant {
    pub fn new(input: ApplicantInput) -> Result<Self, ApplicantError> {
        Self::with_settings(input, &RiskSettings::default())
    }

    pub fn with_settings(
        input: ApplicantInput,
        settings: &RiskSettings,
    ) -> Result<Self, ApplicantError> {
        let ApplicantInput {
            name,
            credit_score,
            income,
            loan_amount,
            existing_debt,
            defaults,
        } = input;

        if credit_score <= 0 {
            return Err(ApplicantError::NonPositiveCreditScore { name, credit_score });
        }

        for (field, value) in [
            ("income", income),
            ("loan_amount", loan_amount),
            ("existing_debt", existing_debt),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ApplicantError::InvalidAmount { name, field, value });
            }
        }

        let metrics = risk::assess(credit_score, income, existing_debt, defaults, settings);

        Ok(Self {
            name,
            credit_score,
            income,
            loan_amount,
            existing_debt,
            defaults,
            metrics,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit_score(&self) -> i32 {
        self.credit_score
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn existing_debt(&self) -> f64 {
        self.existing_debt
    }

    pub fn defaults(&self) -> u32 {
        self.defaults
    }

    pub fn dti(&self) -> f64 {
        self.metrics.dti
    }

    pub fn risk_score(&self) -> f64 {
        self.metrics.risk_score
    }

    pub fn metrics(&self) -> RiskMetrics {
        self.metrics
    }
}

/// Raised when raw applicant fields violate a construction precondition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplicantError {
    #[error("applicant '{name}' has credit score {credit_score}; a positive score is required")]
    NonPositiveCreditScore { name: String, credit_score: i32 },
    #[error("applicant '{name}' has {field} {value}; a finite, non-negative amount is required")]
    InvalidAmount {
        name: String,
        field: &'static str,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_income_keeps_the_sentinel() {
        let applicant = Applicant::new(ApplicantInput::new("idle", 650, 0.0, 500.0, 200.0, 0))
            .expect("zero income is allowed");
        assert_eq!(applicant.dti(), 1e9);
    }

    #[test]
    fn rejects_each_invalid_amount_by_field() {
        let cases = [
            ("income", ApplicantInput::new("a", 700, -1.0, 100.0, 10.0, 0)),
            ("loan_amount", ApplicantInput::new("b", 700, 100.0, f64::NAN, 10.0, 0)),
            ("existing_debt", ApplicantInput::new("c", 700, 100.0, 100.0, -90000.0, 0)),
            ("existing_debt", ApplicantInput::new("d", 700, 100.0, 100.0, f64::INFINITY, 0)),
        ];

        for (field, input) in cases {
            match Applicant::new(input) {
                Err(ApplicantError::InvalidAmount { field: rejected, .. }) => {
                    assert_eq!(rejected, field)
                }
                other => panic!("expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn credit_score_is_checked_before_amounts() {
        let err = Applicant::new(ApplicantInput::new("e", 0, -1.0, 0.0, 0.0, 0))
            .expect_err("invalid applicant");
        assert!(matches!(err, ApplicantError::NonPositiveCreditScore { .. }));
    }
}
