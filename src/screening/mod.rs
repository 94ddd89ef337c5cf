//! Risk-ordered screening of loan applicants.
//!
//! Applicants are admitted with their debt-to-income ratio and risk score derived once,
//! queued by ascending risk, and each is judged by a credit-score decision tree and a naive
//! Bayes predictor trained over the whole batch. Both must approve for a final approval.

pub mod applicant;
pub mod bayes;
pub mod intake;
pub mod pipeline;
pub mod queue;
pub mod risk;
pub mod sample;
pub mod settings;
pub mod tree;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use applicant::{Applicant, ApplicantError, ApplicantInput};
pub use bayes::{Bucket, BucketCounts, NaiveBayesModel, NaiveBayesTrainer};
pub use intake::{ApplicantImporter, IntakeError};
pub use pipeline::{ScreeningOutcome, ScreeningPipeline, ScreeningReport, ScreeningSummary};
pub use queue::{QueueError, RiskQueue};
pub use risk::RiskMetrics;
pub use settings::{BayesSettings, RiskSettings, ScoringSettings, INCOME_SENTINEL_DTI};
pub use tree::{classify, DecisionTree, TreeLoadError, TreeNode};
pub use verdict::{combine, Classification, FinalDecision};
