//! The action message type and its JSON codec

use super::ActionName;
use crate::data::{Employer, IncomeW2, Person, Refund, TaxPayer};
use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};

/// Payload of a signal action, serialized as `{}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyPayload {}

/// A state-mutation request for the reducer
///
/// Each variant pairs one tag with one payload type, so a message can never
/// carry a payload that disagrees with its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "formData")]
pub enum Action {
    #[serde(rename = "SAVE_EMPLOYEE_DATA")]
    SaveEmployeeData(Person),
    #[serde(rename = "SAVE_EMPLOYER_DATA")]
    SaveEmployerData(Employer),
    #[serde(rename = "SAVE_REFUND_INFO")]
    SaveRefundInfo(Refund),
    #[serde(rename = "SAVE_W2_INFO")]
    SaveW2Info(IncomeW2),
    #[serde(rename = "SAVE_TAXPAYER_INFO")]
    SaveTaxpayerInfo(TaxPayer),
    #[serde(rename = "TAXPAYER/ADD_DEPENDENT")]
    AddDependent(Person),
    /// Index into the taxpayer's dependents
    #[serde(rename = "TAXPAYER/REMOVE_DEPENDENT")]
    RemoveDependent(usize),
    #[serde(rename = "TAXPAYER/ADD_SPOUSE")]
    AddSpouse(Person),
    #[serde(rename = "TAXPAYER/REMOVE_SPOUSE")]
    RemoveSpouse(EmptyPayload),
}

impl Action {
    pub fn name(&self) -> ActionName {
        match self {
            Self::SaveEmployeeData(_) => ActionName::SaveEmployeeData,
            Self::SaveEmployerData(_) => ActionName::SaveEmployerData,
            Self::SaveRefundInfo(_) => ActionName::SaveRefundInfo,
            Self::SaveW2Info(_) => ActionName::SaveW2Info,
            Self::SaveTaxpayerInfo(_) => ActionName::SaveTaxpayerInfo,
            Self::AddDependent(_) => ActionName::AddDependent,
            Self::RemoveDependent(_) => ActionName::RemoveDependent,
            Self::AddSpouse(_) => ActionName::AddSpouse,
            Self::RemoveSpouse(_) => ActionName::RemoveSpouse,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ActionError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ActionError::Encode)
    }

    /// Decode a message that was already built.
    ///
    /// Payloads are taken as-is; normalization only happens in the
    /// constructors.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ActionError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AccountType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_remove_dependent_wire_shape() {
        let value = serde_json::to_value(Action::RemoveDependent(3)).unwrap();
        assert_eq!(
            value,
            json!({"type": "TAXPAYER/REMOVE_DEPENDENT", "formData": 3})
        );
    }

    #[test]
    fn test_remove_spouse_wire_shape() {
        let value = serde_json::to_value(Action::RemoveSpouse(EmptyPayload {})).unwrap();
        assert_eq!(value, json!({"type": "TAXPAYER/REMOVE_SPOUSE", "formData": {}}));
    }

    #[test]
    fn test_refund_wire_shape() {
        let action = Action::SaveRefundInfo(Refund {
            routing_number: "011000015".to_string(),
            account_number: "123456".to_string(),
            account_type: AccountType::Checking,
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "type": "SAVE_REFUND_INFO",
                "formData": {
                    "routingNumber": "011000015",
                    "accountNumber": "123456",
                    "accountType": "checking"
                }
            })
        );
    }

    #[test]
    fn test_name_matches_serialized_type() {
        let actions = [
            Action::AddSpouse(Person::default()),
            Action::RemoveDependent(0),
            Action::SaveTaxpayerInfo(TaxPayer::default()),
            Action::RemoveSpouse(EmptyPayload::default()),
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.name().as_str());
        }
    }

    #[test]
    fn test_from_json_decodes_message() {
        let json = r#"{"type": "TAXPAYER/ADD_DEPENDENT",
                       "formData": {"firstName": "Kid", "lastName": "Doe", "ssid": "111-22-3333"}}"#;
        let action = Action::from_json(json).unwrap();
        // Decoding does not normalize
        assert_eq!(
            action,
            Action::AddDependent(Person {
                first_name: "Kid".to_string(),
                last_name: "Doe".to_string(),
                ssid: "111-22-3333".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_from_json_rejects_mismatched_payload() {
        let json = r#"{"type": "TAXPAYER/REMOVE_DEPENDENT", "formData": {"firstName": "Kid"}}"#;
        let err = Action::from_json(json).unwrap_err();
        assert!(matches!(err, ActionError::Decode(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let json = r#"{"type": "TAXPAYER/RESET", "formData": {}}"#;
        assert!(Action::from_json(json).is_err());
    }

    #[test]
    fn test_to_json_pretty_decodes_back() {
        let action = Action::RemoveDependent(7);
        let pretty = action.to_json_pretty().unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(Action::from_json(&pretty).unwrap(), action);
    }
}
