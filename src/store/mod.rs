mod seed;

use tracing::debug;

use crate::models::{
    Allocation, ExpenseEntry, ExpenseType, Invoice, InvoiceStatus, Opportunity, OpportunityStage,
    Phase, Project, ProjectPatch, ServiceEntry, ServiceType, User,
};

/// Authoritative in-memory state for all entity collections.
///
/// Collections preserve insertion order. The store performs no id-uniqueness
/// checks and no field validation; callers generate ids, and updates against
/// an unmatched id leave the collection unchanged. All mutation goes through
/// the methods below — reads hand out slices that must not be modified in
/// place.
pub struct Store {
    users: Vec<User>,
    projects: Vec<Project>,
    phases: Vec<Phase>,
    service_types: Vec<ServiceType>,
    service_entries: Vec<ServiceEntry>,
    expense_types: Vec<ExpenseType>,
    expense_entries: Vec<ExpenseEntry>,
    opportunities: Vec<Opportunity>,
    invoices: Vec<Invoice>,
    allocations: Vec<Allocation>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            projects: Vec::new(),
            phases: Vec::new(),
            service_types: Vec::new(),
            service_entries: Vec::new(),
            expense_types: Vec::new(),
            expense_entries: Vec::new(),
            opportunities: Vec::new(),
            invoices: Vec::new(),
            allocations: Vec::new(),
        }
    }

    /// Create a store preloaded with the demo fixtures.
    pub fn seeded() -> Self {
        seed::seeded()
    }

    // Read access

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn service_types(&self) -> &[ServiceType] {
        &self.service_types
    }

    pub fn service_entries(&self) -> &[ServiceEntry] {
        &self.service_entries
    }

    pub fn expense_types(&self) -> &[ExpenseType] {
        &self.expense_types
    }

    pub fn expense_entries(&self) -> &[ExpenseEntry] {
        &self.expense_entries
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    // Lookups. Absence is None, never an error.

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_by_code(&self, code: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.code == code)
    }

    pub fn service_type(&self, id: &str) -> Option<&ServiceType> {
        self.service_types.iter().find(|st| st.id == id)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    pub fn invoice_by_number(&self, number: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.number == number)
    }

    // Service entry operations

    pub fn add_service_entry(&mut self, entry: ServiceEntry) {
        debug!(id = %entry.id, project = %entry.project_id, minutes = entry.minutes, "add service entry");
        self.service_entries.push(entry);
    }

    // Expense entry operations

    pub fn add_expense_entry(&mut self, entry: ExpenseEntry) {
        debug!(id = %entry.id, project = %entry.project_id, amount = entry.amount, "add expense entry");
        self.expense_entries.push(entry);
    }

    // Project operations

    pub fn add_project(&mut self, project: Project) {
        debug!(id = %project.id, code = %project.code, "add project");
        self.projects.push(project);
    }

    /// Merge a partial update into the project with the given id. Unmatched
    /// ids are a silent no-op.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.apply(patch);
            debug!(%id, "update project");
        }
    }

    // Invoice operations

    pub fn add_invoice(&mut self, invoice: Invoice) {
        debug!(id = %invoice.id, number = %invoice.number, "add invoice");
        self.invoices.push(invoice);
    }

    /// Set an invoice's status. Any target status is accepted from any
    /// current one; unmatched ids are a silent no-op.
    pub fn update_invoice_status(&mut self, id: &str, status: InvoiceStatus) {
        if let Some(invoice) = self.invoices.iter_mut().find(|inv| inv.id == id) {
            invoice.status = status;
            debug!(%id, status = status.label(), "update invoice status");
        }
    }

    // Allocation operations

    pub fn add_allocation(&mut self, allocation: Allocation) {
        debug!(id = %allocation.id, user = %allocation.user_id, "add allocation");
        self.allocations.push(allocation);
    }

    // Opportunity operations

    pub fn add_opportunity(&mut self, opportunity: Opportunity) {
        debug!(id = %opportunity.id, title = %opportunity.title, "add opportunity");
        self.opportunities.push(opportunity);
    }

    /// Move an opportunity to a stage. Stages are freely reassignable;
    /// unmatched ids are a silent no-op.
    pub fn update_opportunity_stage(&mut self, id: &str, stage: OpportunityStage) {
        if let Some(opportunity) = self.opportunities.iter_mut().find(|o| o.id == id) {
            opportunity.stage = stage;
            debug!(%id, stage = stage.label(), "update opportunity stage");
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the store with the demo fixtures.
pub fn init() -> Store {
    Store::seeded()
}
