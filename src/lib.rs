//! In-memory core of a professional-services manager: entity store,
//! derived business figures, and invoice drafting. The binary in
//! `main.rs` is a thin console front-end over this API.

pub mod billing;
pub mod config;
pub mod models;
pub mod reports;
pub mod store;
