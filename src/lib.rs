//! Loan applicant screening: risk ordering, a threshold decision tree and a smoothed
//! naive Bayes predictor combined into one verdict per applicant.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
