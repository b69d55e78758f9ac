use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A percentage-of-capacity assignment of a user to a project over a date
/// range. The sum across overlapping allocations is not capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub phase_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Share of the user's capacity, 0-100 per record.
    pub percentage: u8,
}
