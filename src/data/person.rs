//! People and addresses

use super::Extra;
use serde::{Deserialize, Serialize};

/// A filer, spouse, or dependent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// Social security number as typed, possibly with dashes
    pub ssid: String,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}

/// Mailing address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apt_no: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Keys the form sent that are not modeled here, passed through as-is
    #[serde(flatten)]
    pub extra: Extra,
}
