//! Naive Bayes approval predictor over coarse credit-score buckets.
//!
//! Training and prediction live on different types: [`NaiveBayesTrainer`] accumulates
//! counts and is consumed by [`NaiveBayesTrainer::finish`], producing an immutable
//! [`NaiveBayesModel`] that is the only thing able to predict.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::applicant::Applicant;
use super::settings::BayesSettings;
use super::verdict::Classification;

/// Coarse credit-score category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    BelowCutoff,
    AtOrAboveCutoff,
}

impl Bucket {
    pub fn for_score(credit_score: i32, settings: &BayesSettings) -> Self {
        if credit_score >= settings.bucket_cutoff {
            Self::AtOrAboveCutoff
        } else {
            Self::BelowCutoff
        }
    }

    pub const fn key(self) -> u8 {
        match self {
            Self::BelowCutoff => 0,
            Self::AtOrAboveCutoff => 1,
        }
    }
}

/// Approved and rejected observations for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketCounts {
    pub approved: u64,
    pub rejected: u64,
}

/// Mutable accumulation phase of the predictor.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesTrainer {
    settings: BayesSettings,
    counts: BTreeMap<Bucket, BucketCounts>,
}

impl NaiveBayesTrainer {
    pub fn new(settings: BayesSettings) -> Self {
        Self {
            settings,
            counts: BTreeMap::new(),
        }
    }

    /// Adds the applicants to the running counts; repeated calls accumulate.
    ///
    /// Zero defaults counts as an approval and exactly one default as a rejection.
    /// Applicants with two or more defaults contribute to neither count.
    pub fn train<'a, I>(&mut self, applicants: I)
    where
        I: IntoIterator<Item = &'a Applicant>,
    {
        for applicant in applicants {
            let bucket = Bucket::for_score(applicant.credit_score(), &self.settings);
            let counts = self.counts.entry(bucket).or_default();
            match applicant.defaults() {
                0 => counts.approved += 1,
                1 => counts.rejected += 1,
                _ => {}
            }
        }
    }

    pub fn counts(&self, bucket: Bucket) -> BucketCounts {
        self.counts.get(&bucket).copied().unwrap_or_default()
    }

    pub fn finish(self) -> NaiveBayesModel {
        NaiveBayesModel {
            settings: self.settings,
            counts: self.counts,
        }
    }
}

/// Frozen predictor. The default value has never seen training data and rejects everyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NaiveBayesModel {
    settings: BayesSettings,
    counts: BTreeMap<Bucket, BucketCounts>,
}

impl NaiveBayesModel {
    /// Trains a fresh model over `applicants` in a single pass.
    pub fn fit<'a, I>(settings: BayesSettings, applicants: I) -> Self
    where
        I: IntoIterator<Item = &'a Applicant>,
    {
        let mut trainer = NaiveBayesTrainer::new(settings);
        trainer.train(applicants);
        trainer.finish()
    }

    pub fn settings(&self) -> &BayesSettings {
        &self.settings
    }

    pub fn counts(&self, bucket: Bucket) -> BucketCounts {
        self.counts.get(&bucket).copied().unwrap_or_default()
    }

    pub fn bucket_for(&self, applicant: &Applicant) -> Bucket {
        Bucket::for_score(applicant.credit_score(), &self.settings)
    }

    /// `approved / (approved + rejected + smoothing)` for the applicant's bucket.
    pub fn approve_probability(&self, applicant: &Applicant) -> f64 {
        let BucketCounts { approved, rejected } = self.counts(self.bucket_for(applicant));
        let denominator = approved + rejected + u64::from(self.settings.smoothing);
        if denominator == 0 {
            return 0.0;
        }
        approved as f64 / denominator as f64
    }

    pub fn predict(&self, applicant: &Applicant) -> Classification {
        if self.approve_probability(applicant) > self.settings.approval_cutoff {
            Classification::Approved
        } else {
            Classification::Rejected
        }
    }
}
