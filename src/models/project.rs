use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    FixedPrice,
    TimeMaterial,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::FixedPrice, ProjectKind::TimeMaterial];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::FixedPrice => "fixed price",
            ProjectKind::TimeMaterial => "time & material",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Inactive,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub client_id: String,
    pub leader_id: String,
    pub kind: ProjectKind,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub budget_fees: f64,
    pub budget_expenses: f64,
}

/// Partial update for a project. Unset fields keep their current value;
/// optional project fields cannot be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<String>,
    pub leader_id: Option<String>,
    pub kind: Option<ProjectKind>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_fees: Option<f64>,
    pub budget_expenses: Option<f64>,
}

impl Project {
    /// Merge a patch into the project in place.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(leader_id) = patch.leader_id {
            self.leader_id = leader_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(budget_fees) = patch.budget_fees {
            self.budget_fees = budget_fees;
        }
        if let Some(budget_expenses) = patch.budget_expenses {
            self.budget_expenses = budget_expenses;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p9".into(),
            code: "P-2024-009".into(),
            title: "Intranet Revamp".into(),
            description: None,
            client_id: "c1".into(),
            leader_id: "u1".into(),
            kind: ProjectKind::TimeMaterial,
            status: ProjectStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            budget_fees: 20000.0,
            budget_expenses: 1000.0,
        }
    }

    #[test]
    fn patch_merges_set_fields_only() {
        let mut p = project();
        p.apply(ProjectPatch {
            status: Some(ProjectStatus::Archived),
            budget_fees: Some(25000.0),
            ..Default::default()
        });

        assert_eq!(p.status, ProjectStatus::Archived);
        assert_eq!(p.budget_fees, 25000.0);
        // Everything else untouched
        assert_eq!(p.code, "P-2024-009");
        assert_eq!(p.kind, ProjectKind::TimeMaterial);
        assert_eq!(p.end_date, None);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut p = project();
        let before = p.clone();
        p.apply(ProjectPatch::default());
        assert_eq!(p, before);
    }
}
