use serde::{Deserialize, Serialize};

use super::settings::RiskSettings;

/// Metrics derived from an applicant's raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub dti: f64,
    pub risk_score: f64,
}

/// Debt-to-income ratio, or the configured sentinel when income is not positive.
pub fn debt_to_income(existing_debt: f64, income: f64, settings: &RiskSettings) -> f64 {
    if income > 0.0 {
        existing_debt / income
    } else {
        settings.no_income_dti
    }
}

/// Computes `dti` and `risk_score` for the given raw fields.
///
/// `credit_score` must be positive; [`super::Applicant::new`] rejects anything else before
/// this is reached.
pub fn assess(
    credit_score: i32,
    income: f64,
    existing_debt: f64,
    defaults: u32,
    settings: &RiskSettings,
) -> RiskMetrics {
    let dti = debt_to_income(existing_debt, income, settings);
    let risk_score =
        1.0 / f64::from(credit_score) + dti + settings.default_penalty * f64::from(defaults);

    RiskMetrics { dti, risk_score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn dti_divides_debt_by_income() {
        let settings = RiskSettings::default();
        assert!(close(debt_to_income(1000.0, 5000.0, &settings), 0.2));
    }

    #[test]
    fn dti_uses_sentinel_without_income() {
        let settings = RiskSettings::default();
        assert_eq!(debt_to_income(1000.0, 0.0, &settings), 1e9);
        assert_eq!(debt_to_income(1000.0, -250.0, &settings), 1e9);
    }

    #[test]
    fn risk_score_combines_credit_dti_and_defaults() {
        let metrics = assess(400, 1800.0, 3000.0, 1, &RiskSettings::default());
        assert!(close(metrics.dti, 3000.0 / 1800.0));
        assert!(close(metrics.risk_score, 1.0 / 400.0 + 3000.0 / 1800.0 + 0.5));
    }

    #[test]
    fn default_penalty_is_configurable() {
        let settings = RiskSettings {
            default_penalty: 2.0,
            ..RiskSettings::default()
        };
        let metrics = assess(500, 1000.0, 0.0, 3, &settings);
        assert!(close(metrics.risk_score, 1.0 / 500.0 + 6.0));
    }
}
