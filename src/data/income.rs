//! Wage income and refund destination

use super::Extra;
use serde::{Deserialize, Serialize};

/// Wages reported on a W-2
///
/// Amounts are kept as the user typed them until an action normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeW2 {
    pub occupation: String,
    pub income: String,
    pub fed_withholding: String,
    /// Cleaned copy of the withholding amount, written by `save_w2_data`
    /// under the key the reducer reads. `fed_withholding` keeps the
    /// amount as typed.
    #[serde(
        rename = "fedWitholding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fed_witholding: Option<String>,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}

/// Bank account kind for direct deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
}

/// Direct deposit details for a refund
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub routing_number: String,
    pub account_number: String,
    pub account_type: AccountType,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}
