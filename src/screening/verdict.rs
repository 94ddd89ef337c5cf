use std::fmt;

use serde::{Deserialize, Serialize};

/// Result reported by an individual classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Approved,
    Rejected,
    Undecided,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Undecided => "Undecided",
        }
    }

    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final verdict after both classifiers have been consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalDecision {
    Approved,
    Rejected,
}

impl FinalDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Approves only when the tree and the Bayes predictor both approve.
pub fn combine(tree_result: Classification, bayes_result: Classification) -> FinalDecision {
    if tree_result.is_approved() && bayes_result.is_approved() {
        FinalDecision::Approved
    } else {
        FinalDecision::Rejected
    }
}
