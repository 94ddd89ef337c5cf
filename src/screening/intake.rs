use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::applicant::{Applicant, ApplicantError, ApplicantInput};
use super::settings::RiskSettings;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidApplicant { row: usize, source: ApplicantError },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read applicant file: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
            IntakeError::InvalidApplicant { row, source } => {
                write!(f, "applicant row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::InvalidApplicant { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads applicants from CSV with the header
/// `name,credit_score,income,loan_amount,existing_debt,defaults`.
pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        settings: &RiskSettings,
    ) -> Result<Vec<Applicant>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, settings)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        settings: &RiskSettings,
    ) -> Result<Vec<Applicant>, IntakeError> {
        parse_inputs(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                Applicant::with_settings(input, settings).map_err(|source| {
                    IntakeError::InvalidApplicant {
                        row: index + 1,
                        source,
                    }
                })
            })
            .collect()
    }
}

pub(crate) fn parse_inputs<R: Read>(reader: R) -> Result<Vec<ApplicantInput>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut inputs = Vec::new();

    for record in csv_reader.deserialize::<ApplicantRow>() {
        inputs.push(record?.into());
    }

    Ok(inputs)
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    name: String,
    credit_score: i32,
    income: f64,
    loan_amount: f64,
    existing_debt: f64,
    defaults: u32,
}

impl From<ApplicantRow> for ApplicantInput {
    fn from(row: ApplicantRow) -> Self {
        ApplicantInput {
            name: row.name,
            credit_score: row.credit_score,
            income: row.income,
            loan_amount: row.loan_amount,
            existing_debt: row.existing_debt,
            defaults: row.defaults,
        }
    }
}
