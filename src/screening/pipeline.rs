use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::applicant::{Applicant, ApplicantError, ApplicantInput};
use super::bayes::NaiveBayesModel;
use super::queue::RiskQueue;
use super::settings::ScoringSettings;
use super::tree::DecisionTree;
use super::verdict::{combine, Classification, FinalDecision};

/// Screening pass over a batch of applicants using a caller-owned tree and settings.
#[derive(Debug, Clone)]
pub struct ScreeningPipeline {
    tree: DecisionTree,
    settings: ScoringSettings,
}

impl ScreeningPipeline {
    pub fn new(tree: DecisionTree, settings: ScoringSettings) -> Self {
        Self { tree, settings }
    }

    /// Pipeline over the reference tree with default settings.
    pub fn reference() -> Self {
        Self::new(DecisionTree::reference(), ScoringSettings::default())
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Validates raw inputs and derives their risk metrics with this pipeline's settings.
    pub fn admit<I>(&self, inputs: I) -> Result<Vec<Applicant>, ApplicantError>
    where
        I: IntoIterator<Item = ApplicantInput>,
    {
        inputs
            .into_iter()
            .map(|input| Applicant::with_settings(input, &self.settings.risk))
            .collect()
    }

    /// Trains a predictor over the whole batch, then emits one outcome per applicant in
    /// ascending risk order.
    pub fn screen(&self, applicants: Vec<Applicant>) -> ScreeningReport {
        if self.tree.root.is_none() {
            warn!("decision tree has no root; every tree result will be undecided");
        }

        let model = NaiveBayesModel::fit(self.settings.bayes, &applicants);
        let mut queue: RiskQueue = applicants.into_iter().collect();

        let outcomes: Vec<ScreeningOutcome> = queue
            .drain_ordered()
            .map(|applicant| self.evaluate(&applicant, &model))
            .collect();

        let report = ScreeningReport { outcomes, model };
        let summary = report.summary();
        info!(
            total = summary.total,
            approved = summary.approved,
            rejected = summary.rejected,
            "screening run complete"
        );

        report
    }

    /// Runs a single applicant through the tree, the predictor and the combiner.
    pub fn evaluate(&self, applicant: &Applicant, model: &NaiveBayesModel) -> ScreeningOutcome {
        let tree_result = self.tree.classify(applicant.credit_score());
        let bayes_result = model.predict(applicant);
        let final_decision = combine(tree_result, bayes_result);

        debug!(
            applicant = applicant.name(),
            risk_score = applicant.risk_score(),
            %tree_result,
            %bayes_result,
            %final_decision,
            "applicant screened"
        );

        ScreeningOutcome {
            name: applicant.name().to_string(),
            credit_score: applicant.credit_score(),
            dti: applicant.dti(),
            risk_score: applicant.risk_score(),
            tree_result,
            bayes_result,
            final_decision,
        }
    }
}

/// Per-applicant verdict record handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub name: String,
    pub credit_score: i32,
    pub dti: f64,
    pub risk_score: f64,
    pub tree_result: Classification,
    pub bayes_result: Classification,
    pub final_decision: FinalDecision,
}

/// Outcomes of a screening run, ordered by ascending risk.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub outcomes: Vec<ScreeningOutcome>,
    #[serde(skip)]
    pub model: NaiveBayesModel,
}

impl ScreeningReport {
    pub fn summary(&self) -> ScreeningSummary {
        let approved = self
            .outcomes
            .iter()
            .filter(|outcome| outcome.final_decision == FinalDecision::Approved)
            .count();

        ScreeningSummary {
            total: self.outcomes.len(),
            approved,
            rejected: self.outcomes.len() - approved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreeningSummary {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
}
