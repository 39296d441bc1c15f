//! Action tag literals

use crate::error::ActionError;
use std::fmt;
use std::str::FromStr;

/// Tag identifying which state mutation a message requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    SaveEmployerData,
    SaveEmployeeData,
    SaveRefundInfo,
    SaveW2Info,
    SaveTaxpayerInfo,
    AddDependent,
    RemoveDependent,
    AddSpouse,
    RemoveSpouse,
}

impl ActionName {
    pub const ALL: [ActionName; 9] = [
        Self::SaveEmployerData,
        Self::SaveEmployeeData,
        Self::SaveRefundInfo,
        Self::SaveW2Info,
        Self::SaveTaxpayerInfo,
        Self::AddDependent,
        Self::RemoveDependent,
        Self::AddSpouse,
        Self::RemoveSpouse,
    ];

    /// The literal the reducer matches on
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaveEmployerData => "SAVE_EMPLOYER_DATA",
            Self::SaveEmployeeData => "SAVE_EMPLOYEE_DATA",
            Self::SaveRefundInfo => "SAVE_REFUND_INFO",
            Self::SaveW2Info => "SAVE_W2_INFO",
            Self::SaveTaxpayerInfo => "SAVE_TAXPAYER_INFO",
            Self::AddDependent => "TAXPAYER/ADD_DEPENDENT",
            Self::RemoveDependent => "TAXPAYER/REMOVE_DEPENDENT",
            Self::AddSpouse => "TAXPAYER/ADD_SPOUSE",
            Self::RemoveSpouse => "TAXPAYER/REMOVE_SPOUSE",
        }
    }

    /// Signal actions carry an empty payload
    pub fn is_signal(&self) -> bool {
        matches!(self, Self::RemoveSpouse)
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ActionError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_literal() {
        for name in ActionName::ALL {
            assert_eq!(name.as_str().parse::<ActionName>().unwrap(), name);
        }
    }

    #[test]
    fn test_taxpayer_tags_are_namespaced() {
        assert_eq!(ActionName::AddDependent.as_str(), "TAXPAYER/ADD_DEPENDENT");
        assert_eq!(ActionName::RemoveSpouse.to_string(), "TAXPAYER/REMOVE_SPOUSE");
        assert_eq!(ActionName::SaveEmployerData.as_str(), "SAVE_EMPLOYER_DATA");
    }

    #[test]
    fn test_parse_is_exact() {
        // Tags are literal: no case folding, no missing namespace
        assert!("save_employer_data".parse::<ActionName>().is_err());
        assert!("ADD_DEPENDENT".parse::<ActionName>().is_err());
    }

    #[test]
    fn test_unknown_tag_error_names_the_tag() {
        let err = "RESET".parse::<ActionName>().unwrap_err();
        assert!(matches!(err, ActionError::UnknownAction(ref tag) if tag == "RESET"));
        assert!(err.to_string().contains("RESET"));
    }

    #[test]
    fn test_only_remove_spouse_is_signal() {
        let signals: Vec<_> = ActionName::ALL.into_iter().filter(|n| n.is_signal()).collect();
        assert_eq!(signals, vec![ActionName::RemoveSpouse]);
    }
}
