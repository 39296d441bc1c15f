//! Form data carried by action messages
//!
//! These are the shapes the form screens collect. Field names serialize in
//! camelCase to match the reducer's state tree.

mod employer;
mod income;
mod person;
mod taxpayer;

pub use employer::Employer;
pub use income::{AccountType, IncomeW2, Refund};
pub use person::{Address, Person};
pub use taxpayer::{FilingStatus, TaxPayer};

/// Unmodeled form keys, kept so a save never drops what the caller sent
pub type Extra = serde_json::Map<String, serde_json::Value>;
