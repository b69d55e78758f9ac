mod allocation;
mod expense;
mod invoice;
mod opportunity;
mod phase;
mod project;
mod service;
mod user;

pub use allocation::Allocation;
pub use expense::{ExpenseEntry, ExpenseType};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use opportunity::{Opportunity, OpportunityStage};
pub use phase::{Phase, PhaseStatus};
pub use project::{Project, ProjectKind, ProjectPatch, ProjectStatus};
pub use service::{ServiceEntry, ServiceType};
pub use user::{User, UserRole};
