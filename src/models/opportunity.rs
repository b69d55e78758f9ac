use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    Lead,
    Contact,
    Offer,
    Won,
    Lost,
}

impl OpportunityStage {
    /// Funnel order, as laid out on the pipeline board.
    pub const ALL: [OpportunityStage; 5] = [
        OpportunityStage::Lead,
        OpportunityStage::Contact,
        OpportunityStage::Offer,
        OpportunityStage::Won,
        OpportunityStage::Lost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityStage::Lead => "Lead",
            OpportunityStage::Contact => "Contact",
            OpportunityStage::Offer => "Offer",
            OpportunityStage::Won => "Won",
            OpportunityStage::Lost => "Lost",
        }
    }
}

/// A prospective deal in the sales funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub client_id: String,
    pub owner_id: String,
    pub stage: OpportunityStage,
    /// Chance of closing, 0-100.
    pub probability: u8,
    pub expected_volume: f64,
    pub close_date: NaiveDate,
}
