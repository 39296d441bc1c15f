//! Taxpayer household information

use super::{Address, Extra, Person};
use serde::{Deserialize, Serialize};

/// Filing status as abbreviated on Form 1040
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    /// Single
    S,
    /// Married filing jointly
    #[serde(rename = "MFJ")]
    Mfj,
    /// Married filing separately
    #[serde(rename = "MFS")]
    Mfs,
    /// Head of household
    #[serde(rename = "HOH")]
    Hoh,
    /// Qualifying widow(er)
    W,
}

/// Everything the taxpayer screen collects about the household
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<FilingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<Person>,
    #[serde(default)]
    pub dependents: Vec<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}
