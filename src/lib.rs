//! Taxform State - state-mutation messages for tax-filing forms
//!
//! Typed action messages and their constructors, consumed by a reducer that
//! lives elsewhere. Constructors normalize user-entered punctuation out of
//! SSNs, EINs, currency amounts, and phone numbers.

pub mod actions;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod error;

pub use actions::{Action, ActionName, REMOVE_SPOUSE};
pub use dispatch::dispatch;
pub use error::{ActionError, Result};
