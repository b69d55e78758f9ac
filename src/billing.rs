use chrono::{Datelike, Days, NaiveDate};
use tracing::info;
use uuid::Uuid;

use crate::models::{Invoice, InvoiceStatus, Project};
use crate::reports;
use crate::store::Store;

/// Flat rate applied to unbilled hours when estimating a draft amount.
/// Per-entry service-type rates are deliberately not consulted.
pub const FLAT_HOURLY_RATE: f64 = 150.0;

#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("unknown project: {0}")]
    UnknownProject(String),

    #[error("project {0} has no unbilled services")]
    NothingToBill(String),
}

/// Estimated invoice amount for a number of unbilled minutes.
pub fn draft_amount(minutes: u32) -> f64 {
    (f64::from(minutes) / 60.0) * FLAT_HOURLY_RATE
}

/// Build a draft invoice from a project's unbilled services.
///
/// The draft is dated `on`, due `terms_days` later, numbered sequentially
/// after the invoices already in the store, and carries no line items yet.
/// The store is not touched: the caller decides whether to `add_invoice`
/// the result. Source entries stay unbilled.
pub fn generate_draft(
    store: &Store,
    project_id: &str,
    on: NaiveDate,
    terms_days: u32,
) -> Result<Invoice, BillingError> {
    let project = store
        .project(project_id)
        .ok_or_else(|| BillingError::UnknownProject(project_id.to_string()))?;

    let minutes = reports::unbilled_minutes(store.service_entries(), project_id);
    if minutes == 0 {
        return Err(BillingError::NothingToBill(project.code.clone()));
    }

    let number = format!("INV-{}-{:03}", on.year(), store.invoices().len() + 1);
    let invoice = Invoice {
        id: Uuid::new_v4().to_string(),
        number,
        project_id: project.id.clone(),
        date: on,
        due_date: on + Days::new(u64::from(terms_days)),
        total_amount: draft_amount(minutes),
        status: InvoiceStatus::Draft,
        items: Vec::new(),
    };

    info!(
        number = %invoice.number,
        project = %project.code,
        minutes,
        amount = invoice.total_amount,
        "generated draft invoice"
    );

    Ok(invoice)
}

/// Render an invoice as printable Markdown. An unresolved project degrades
/// to a placeholder name rather than an error.
pub fn render_markdown(invoice: &Invoice, project: Option<&Project>, currency: &str) -> String {
    let project_line = match project {
        Some(p) => format!("{} - {}", p.code, p.title),
        None => "Unknown Project".to_string(),
    };

    let mut content = String::new();

    content.push_str(&format!("# Invoice {}\n\n", invoice.number));
    content.push_str(&format!("Status: **{}**\n\n", invoice.status.label()));
    content.push_str(&format!("Project: {project_line}\n"));
    content.push_str(&format!("Invoice date: {}\n", invoice.date.format("%Y-%m-%d")));
    content.push_str(&format!("Due date: {}\n\n", invoice.due_date.format("%Y-%m-%d")));

    content.push_str("| Description | Amount |\n");
    content.push_str("| --- | ---: |\n");
    if invoice.items.is_empty() {
        // Drafts carry a single summary position until items are attached
        content.push_str(&format!(
            "| Professional services | {} {:.2} |\n",
            currency, invoice.total_amount
        ));
    } else {
        for item in &invoice.items {
            content.push_str(&format!(
                "| {} | {} {:.2} |\n",
                item.description, currency, item.amount
            ));
        }
    }
    content.push_str(&format!(
        "\n**Total: {} {:.2}**\n",
        currency, invoice.total_amount
    ));

    content
}
