use crate::screening::applicant::{Applicant, ApplicantInput};
use crate::screening::sample::reference_applicants;

pub(super) fn applicant(name: &str, credit_score: i32, defaults: u32) -> Applicant {
    Applicant::new(ApplicantInput::new(
        name,
        credit_score,
        4000.0,
        10000.0,
        1000.0,
        defaults,
    ))
    .expect("valid applicant")
}

pub(super) fn applicant_with_debt(name: &str, income: f64, existing_debt: f64) -> Applicant {
    Applicant::new(ApplicantInput::new(
        name,
        700,
        income,
        5000.0,
        existing_debt,
        0,
    ))
    .expect("valid applicant")
}

pub(super) fn reference_batch() -> Vec<Applicant> {
    reference_applicants()
        .into_iter()
        .map(|input| Applicant::new(input).expect("reference applicant is valid"))
        .collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
