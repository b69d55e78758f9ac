use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    pub standard_rate: f64,
}

/// A tracked block of working time. Stays unbilled until attached to an
/// invoice, at which point `billed` flips and `invoice_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: String,
    pub project_id: String,
    pub phase_id: String,
    pub user_id: String,
    pub service_type_id: String,
    pub date: NaiveDate,
    pub minutes: u32,
    pub description: String,
    pub billed: bool,
    pub invoice_id: Option<String>,
}
