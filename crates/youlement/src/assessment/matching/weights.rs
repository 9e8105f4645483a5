use serde::{Deserialize, Serialize};

/// Fixed contribution of each factor to the composite score.
pub const STANDARD_WEIGHTS: ScoringWeights = ScoringWeights {
    values: 0.25,
    tasks: 0.20,
    strengths: 0.20,
    requirements: 0.15,
    balance: 0.10,
    self_selected: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub values: f64,
    pub tasks: f64,
    pub strengths: f64,
    pub requirements: f64,
    pub balance: f64,
    pub self_selected: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.values
            + self.tasks
            + self.strengths
            + self.requirements
            + self.balance
            + self.self_selected
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        STANDARD_WEIGHTS
    }
}
