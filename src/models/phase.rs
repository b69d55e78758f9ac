use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Active,
    Done,
}

/// A budgeted subdivision of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub project_id: String,
    pub code: String,
    pub description: String,
    pub status: PhaseStatus,
    pub budget_fees: Option<f64>,
}
