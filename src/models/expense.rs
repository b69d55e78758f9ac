use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub project_id: String,
    pub phase_id: String,
    pub user_id: String,
    pub expense_type_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub billed: bool,
    pub invoice_id: Option<String>,
}
