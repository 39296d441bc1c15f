use super::{Address, Extra};
use serde::{Deserialize, Serialize};

/// Employer as listed on a W-2
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    /// Employer identification number, possibly with a dash
    #[serde(rename = "EIN")]
    pub ein: String,
    pub employer_name: String,
    pub address: Address,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}
