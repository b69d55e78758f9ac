//! Derived business figures. Every function here is a pure fold over a
//! snapshot of store collections: no mutation, no failure — empty input
//! yields zero or empty output.

use crate::models::{
    Allocation, ExpenseEntry, Invoice, InvoiceStatus, Opportunity, OpportunityStage, Phase,
    Project, ProjectKind, ServiceEntry,
};

/// Weighting applied to the raw pipeline volume for the report page's
/// rough forecast figure.
pub const PIPELINE_WEIGHT: f64 = 0.4;

/// Minutes tracked against a project that are not yet on an invoice.
pub fn unbilled_minutes(entries: &[ServiceEntry], project_id: &str) -> u32 {
    entries
        .iter()
        .filter(|e| e.project_id == project_id && !e.billed)
        .map(|e| e.minutes)
        .sum()
}

/// Unbilled expense amount for a project.
pub fn unbilled_expenses(entries: &[ExpenseEntry], project_id: &str) -> f64 {
    entries
        .iter()
        .filter(|e| e.project_id == project_id && !e.billed)
        .map(|e| e.amount)
        .sum()
}

/// Total tracked minutes for one user, billed or not.
pub fn user_minutes(entries: &[ServiceEntry], user_id: &str) -> u32 {
    entries
        .iter()
        .filter(|e| e.user_id == user_id)
        .map(|e| e.minutes)
        .sum()
}

/// Allocation load for a user: the plain sum of percentages across all of
/// the user's allocations. Date ranges are not consulted, so allocations
/// outside the displayed period still count.
pub fn user_load(allocations: &[Allocation], user_id: &str) -> u32 {
    allocations
        .iter()
        .filter(|a| a.user_id == user_id)
        .map(|a| u32::from(a.percentage))
        .sum()
}

/// Allocations belonging to one user, in insertion order.
pub fn user_allocations<'a>(allocations: &'a [Allocation], user_id: &str) -> Vec<&'a Allocation> {
    allocations.iter().filter(|a| a.user_id == user_id).collect()
}

/// Expected volume per pipeline stage, in funnel order. Stages with no
/// opportunities report zero.
pub fn pipeline_volume_by_stage(opportunities: &[Opportunity]) -> Vec<(OpportunityStage, f64)> {
    OpportunityStage::ALL
        .iter()
        .map(|&stage| {
            let volume = opportunities
                .iter()
                .filter(|o| o.stage == stage)
                .map(|o| o.expected_volume)
                .sum();
            (stage, volume)
        })
        .collect()
}

/// Number of opportunities currently in a stage.
pub fn stage_count(opportunities: &[Opportunity], stage: OpportunityStage) -> usize {
    opportunities.iter().filter(|o| o.stage == stage).count()
}

/// Expected volume across the whole funnel.
pub fn pipeline_total(opportunities: &[Opportunity]) -> f64 {
    opportunities.iter().map(|o| o.expected_volume).sum()
}

/// Flat-weighted pipeline estimate.
pub fn weighted_pipeline(opportunities: &[Opportunity]) -> f64 {
    pipeline_total(opportunities) * PIPELINE_WEIGHT
}

/// Sum of all invoice totals, regardless of status.
pub fn total_invoiced(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|inv| inv.total_amount).sum()
}

/// Sum of invoice totals still open.
pub fn outstanding(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Open)
        .map(|inv| inv.total_amount)
        .sum()
}

/// Number of invoices still open.
pub fn open_invoice_count(invoices: &[Invoice]) -> usize {
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Open)
        .count()
}

/// Project count per kind. Kinds with no projects are omitted.
pub fn portfolio_mix(projects: &[Project]) -> Vec<(ProjectKind, usize)> {
    ProjectKind::ALL
        .iter()
        .map(|&kind| (kind, projects.iter().filter(|p| p.kind == kind).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Phases belonging to a project, in insertion order.
pub fn project_phases<'a>(phases: &'a [Phase], project_id: &str) -> Vec<&'a Phase> {
    phases.iter().filter(|ph| ph.project_id == project_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, project_id: &str, minutes: u32, billed: bool) -> ServiceEntry {
        ServiceEntry {
            id: id.into(),
            project_id: project_id.into(),
            phase_id: "ph2".into(),
            user_id: "u1".into(),
            service_type_id: "st1".into(),
            date: date(2024, 2, 5),
            minutes,
            description: String::new(),
            billed,
            invoice_id: billed.then(|| "inv1".to_string()),
        }
    }

    #[test]
    fn unbilled_minutes_ignores_billed_and_foreign_entries() {
        let entries = vec![
            entry("se1", "p1", 60, false),
            entry("se2", "p1", 90, false),
            entry("se3", "p1", 45, true),
            entry("se4", "p2", 30, false),
        ];

        assert_eq!(unbilled_minutes(&entries, "p1"), 150);

        // A further unbilled entry raises the total by exactly its minutes.
        let mut more = entries.clone();
        more.push(entry("se5", "p1", 15, false));
        assert_eq!(unbilled_minutes(&more, "p1"), 165);

        // A further billed entry changes nothing.
        let mut billed = entries.clone();
        billed.push(entry("se6", "p1", 500, true));
        assert_eq!(unbilled_minutes(&billed, "p1"), 150);
    }

    #[test]
    fn unbilled_minutes_over_empty_input_is_zero() {
        assert_eq!(unbilled_minutes(&[], "p1"), 0);
    }

    #[test]
    fn user_load_sums_without_date_overlap_filtering() {
        // One allocation at 50% and one at 100% on different projects and
        // disjoint ranges still add up to 150.
        let allocations = vec![
            Allocation {
                id: "al1".into(),
                user_id: "u1".into(),
                project_id: "p1".into(),
                phase_id: None,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 3, 31),
                percentage: 50,
            },
            Allocation {
                id: "al2".into(),
                user_id: "u1".into(),
                project_id: "p2".into(),
                phase_id: None,
                start_date: date(2024, 6, 1),
                end_date: date(2024, 6, 30),
                percentage: 100,
            },
        ];

        assert_eq!(user_load(&allocations, "u1"), 150);
        assert_eq!(user_load(&allocations, "u2"), 0);
    }

    #[test]
    fn pipeline_volume_moves_with_the_opportunity() {
        let mut store = Store::seeded();
        let total_before = pipeline_total(store.opportunities());

        let by_stage = pipeline_volume_by_stage(store.opportunities());
        let volume_of = |stages: &[(OpportunityStage, f64)], stage| {
            stages.iter().find(|(s, _)| *s == stage).unwrap().1
        };
        assert_eq!(volume_of(&by_stage, OpportunityStage::Lead), 5000.0);
        assert_eq!(volume_of(&by_stage, OpportunityStage::Offer), 25000.0);

        // Moving opp1 from offer to won shifts its volume between the two
        // stage totals and conserves the funnel total.
        store.update_opportunity_stage("opp1", OpportunityStage::Won);
        let by_stage = pipeline_volume_by_stage(store.opportunities());
        assert_eq!(volume_of(&by_stage, OpportunityStage::Offer), 0.0);
        assert_eq!(volume_of(&by_stage, OpportunityStage::Won), 37000.0);
        assert_eq!(pipeline_total(store.opportunities()), total_before);
    }

    #[test]
    fn weighted_pipeline_is_the_flat_fraction_of_the_total() {
        let store = Store::seeded();
        assert_eq!(
            weighted_pipeline(store.opportunities()),
            pipeline_total(store.opportunities()) * 0.4
        );
    }

    #[test]
    fn invoice_totals_split_by_status() {
        let store = Store::seeded();

        // inv1 (paid, 12500) + inv2 (open, 8400)
        assert_eq!(total_invoiced(store.invoices()), 20900.0);
        assert_eq!(outstanding(store.invoices()), 8400.0);
        assert_eq!(open_invoice_count(store.invoices()), 1);
    }

    #[test]
    fn portfolio_mix_counts_projects_per_kind() {
        let store = Store::seeded();
        assert_eq!(
            portfolio_mix(store.projects()),
            vec![(ProjectKind::FixedPrice, 1)]
        );
        assert!(portfolio_mix(&[]).is_empty());
    }

    #[test]
    fn unbilled_expenses_mirrors_the_service_fold() {
        let mut store = Store::seeded();
        store.add_expense_entry(ExpenseEntry {
            id: "ex1".into(),
            project_id: "p1".into(),
            phase_id: "ph2".into(),
            user_id: "u2".into(),
            expense_type_id: "et1".into(),
            date: date(2024, 2, 12),
            amount: 320.50,
            currency: "CHF".into(),
            description: "Client workshop travel".into(),
            billed: false,
            invoice_id: None,
        });

        assert_eq!(unbilled_expenses(store.expense_entries(), "p1"), 320.50);
        assert_eq!(unbilled_expenses(store.expense_entries(), "p2"), 0.0);
    }

    #[test]
    fn user_minutes_counts_billed_and_unbilled() {
        let entries = vec![entry("se1", "p1", 60, false), entry("se2", "p1", 45, true)];
        assert_eq!(user_minutes(&entries, "u1"), 105);
    }

    #[test]
    fn project_phases_filters_by_project() {
        let store = Store::seeded();
        let phases = project_phases(store.phases(), "p1");
        assert_eq!(phases.len(), 2);
        assert!(project_phases(store.phases(), "p2").is_empty());
    }
}
