//! Demo fixture data, ported from the prototype's initial state.

use chrono::NaiveDate;

use super::Store;
use crate::models::{
    Allocation, ExpenseType, Invoice, InvoiceStatus, Opportunity, OpportunityStage, Phase,
    PhaseStatus, Project, ProjectKind, ProjectStatus, ServiceType, User, UserRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

pub(super) fn seeded() -> Store {
    Store {
        users: vec![
            User {
                id: "u1".into(),
                name: "Anna Smith".into(),
                email: "anna@example.com".into(),
                role: UserRole::ProjectManager,
                hourly_rate: 150.0,
            },
            User {
                id: "u2".into(),
                name: "Bob Jones".into(),
                email: "bob@example.com".into(),
                role: UserRole::Employee,
                hourly_rate: 100.0,
            },
        ],
        projects: vec![Project {
            id: "p1".into(),
            code: "P-2024-001".into(),
            title: "Website Relaunch".into(),
            description: None,
            client_id: "c1".into(),
            leader_id: "u1".into(),
            kind: ProjectKind::FixedPrice,
            status: ProjectStatus::Active,
            start_date: date(2024, 1, 1),
            end_date: None,
            budget_fees: 50000.0,
            budget_expenses: 5000.0,
        }],
        phases: vec![
            Phase {
                id: "ph1".into(),
                project_id: "p1".into(),
                code: "10".into(),
                description: "Concept".into(),
                status: PhaseStatus::Done,
                budget_fees: Some(10000.0),
            },
            Phase {
                id: "ph2".into(),
                project_id: "p1".into(),
                code: "20".into(),
                description: "Development".into(),
                status: PhaseStatus::Active,
                budget_fees: Some(30000.0),
            },
        ],
        service_types: vec![
            ServiceType {
                id: "st1".into(),
                name: "Consulting".into(),
                standard_rate: 150.0,
            },
            ServiceType {
                id: "st2".into(),
                name: "Development".into(),
                standard_rate: 120.0,
            },
        ],
        service_entries: Vec::new(),
        expense_types: vec![
            ExpenseType {
                id: "et1".into(),
                name: "Travel".into(),
            },
            ExpenseType {
                id: "et2".into(),
                name: "Accommodation".into(),
            },
        ],
        expense_entries: Vec::new(),
        opportunities: vec![
            Opportunity {
                id: "opp1".into(),
                title: "New CRM Implementation".into(),
                client_id: "c2".into(),
                owner_id: "u1".into(),
                stage: OpportunityStage::Offer,
                probability: 60,
                expected_volume: 25000.0,
                close_date: date(2024, 3, 1),
            },
            Opportunity {
                id: "opp2".into(),
                title: "Data Migration Audit".into(),
                client_id: "c3".into(),
                owner_id: "u2".into(),
                stage: OpportunityStage::Lead,
                probability: 20,
                expected_volume: 5000.0,
                close_date: date(2024, 4, 15),
            },
            Opportunity {
                id: "opp3".into(),
                title: "Mobile App Concept".into(),
                client_id: "c1".into(),
                owner_id: "u1".into(),
                stage: OpportunityStage::Won,
                probability: 100,
                expected_volume: 12000.0,
                close_date: date(2024, 2, 10),
            },
        ],
        invoices: vec![
            Invoice {
                id: "inv1".into(),
                number: "INV-2024-001".into(),
                project_id: "p1".into(),
                date: date(2024, 1, 20),
                due_date: date(2024, 2, 19),
                total_amount: 12500.0,
                status: InvoiceStatus::Paid,
                items: Vec::new(),
            },
            Invoice {
                id: "inv2".into(),
                number: "INV-2024-002".into(),
                project_id: "p1".into(),
                date: date(2024, 2, 20),
                due_date: date(2024, 3, 21),
                total_amount: 8400.0,
                status: InvoiceStatus::Open,
                items: Vec::new(),
            },
        ],
        allocations: vec![
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
                user_id: "u2".into(),
                project_id: "p1".into(),
                phase_id: None,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 28),
                percentage: 100,
            },
        ],
    }
}
