use super::applicant::ApplicantInput;

/// Five-applicant demo batch used by the CLI when no CSV is supplied.
pub fn reference_applicants() -> Vec<ApplicantInput> {
    vec![
        ApplicantInput::new("Amar", 750, 5000.0, 10000.0, 1000.0, 0),
        ApplicantInput::new("Snehal", 550, 2000.0, 7000.0, 4000.0, 1),
        ApplicantInput::new("Nikita", 620, 4500.0, 12000.0, 2000.0, 0),
        ApplicantInput::new("sudhanshu", 400, 1800.0, 5000.0, 3000.0, 1),
        ApplicantInput::new("kajal", 680, 6000.0, 15000.0, 2500.0, 0),
    ]
}
