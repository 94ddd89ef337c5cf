use super::common::*;
use crate::screening::bayes::{Bucket, BucketCounts};
use crate::screening::pipeline::ScreeningPipeline;
use crate::screening::settings::ScoringSettings;
use crate::screening::tree::DecisionTree;
use crate::screening::verdict::{Classification, FinalDecision};

#[test]
fn reference_batch_matches_golden_outcomes() {
    use Classification::{Approved, Rejected};

    let report = ScreeningPipeline::reference().screen(reference_batch());

    let expected = [
        ("Amar", 0.2, 0.201333, (Approved, Approved), FinalDecision::Approved),
        ("kajal", 0.416667, 0.418137, (Approved, Approved), FinalDecision::Approved),
        ("Nikita", 0.444444, 0.446057, (Rejected, Approved), FinalDecision::Rejected),
        ("sudhanshu", 1.666667, 2.169167, (Rejected, Rejected), FinalDecision::Rejected),
        ("Snehal", 2.0, 2.501818, (Approved, Rejected), FinalDecision::Rejected),
    ];

    assert_eq!(report.outcomes.len(), expected.len());
    for (outcome, (name, dti, risk, (tree, bayes), decision)) in
        report.outcomes.iter().zip(expected)
    {
        assert_eq!(outcome.name, name);
        assert_close(outcome.dti, dti);
        assert_close(outcome.risk_score, risk);
        assert_eq!(outcome.tree_result, tree, "{name} tree");
        assert_eq!(outcome.bayes_result, bayes, "{name} bayes");
        assert_eq!(outcome.final_decision, decision, "{name} final");
    }

    let summary = report.summary();
    assert_eq!((summary.total, summary.approved, summary.rejected), (5, 2, 3));
}

#[test]
fn model_is_trained_over_the_whole_batch() {
    let report = ScreeningPipeline::reference().screen(reference_batch());

    assert_eq!(
        report.model.counts(Bucket::AtOrAboveCutoff),
        BucketCounts {
            approved: 3,
            rejected: 0
        }
    );
    assert_eq!(
        report.model.counts(Bucket::BelowCutoff),
        BucketCounts {
            approved: 0,
            rejected: 2
        }
    );
}

#[test]
fn empty_tree_rejects_everyone() {
    let pipeline = ScreeningPipeline::new(DecisionTree::empty(), ScoringSettings::default());
    let report = pipeline.screen(reference_batch());

    assert!(report
        .outcomes
        .iter()
        .all(|outcome| outcome.tree_result == Classification::Undecided
            && outcome.final_decision == FinalDecision::Rejected));
}

#[test]
fn empty_batch_produces_empty_report() {
    let report = ScreeningPipeline::reference().screen(Vec::new());
    assert!(report.outcomes.is_empty());
    assert_eq!(report.summary().total, 0);
}

#[test]
fn admit_applies_configured_risk_weights() {
    let mut settings = ScoringSettings::default();
    settings.risk.default_penalty = 1.0;
    let pipeline = ScreeningPipeline::new(DecisionTree::reference(), settings);

    let applicants = pipeline
        .admit(crate::screening::sample::reference_applicants())
        .expect("reference inputs are valid");
    let snehal = applicants
        .iter()
        .find(|applicant| applicant.name() == "Snehal")
        .expect("Snehal present");

    assert_close(snehal.risk_score(), 1.0 / 550.0 + 2.0 + 1.0);
}

#[test]
fn outcome_serializes_with_upper_case_final_decision() {
    let report = ScreeningPipeline::reference().screen(reference_batch());
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["outcomes"][0]["name"], "Amar");
    assert_eq!(json["outcomes"][0]["tree_result"], "approved");
    assert_eq!(json["outcomes"][0]["final_decision"], "APPROVED");
    assert!(json.get("model").is_none());
}
