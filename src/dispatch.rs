//! Build messages from raw form data
//!
//! Used when the payload arrives as untyped JSON (for example from the
//! command line). The payload is decoded into the tag's payload type and
//! routed through the matching constructor, so normalization always applies.

use crate::actions::{self, Action, ActionName};
use crate::error::{ActionError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode<T: DeserializeOwned>(name: ActionName, form_data: Value) -> Result<T> {
    serde_json::from_value(form_data).map_err(|source| ActionError::InvalidPayload {
        action: name,
        source,
    })
}

/// Turn a tag and its raw form data into a normalized message.
///
/// Signal actions ignore `form_data`.
pub fn dispatch(name: ActionName, form_data: Value) -> Result<Action> {
    let action = match name {
        ActionName::SaveEmployeeData => actions::save_employee_data(decode(name, form_data)?),
        ActionName::SaveEmployerData => actions::save_employer_data(decode(name, form_data)?),
        ActionName::SaveRefundInfo => actions::save_refund_info(decode(name, form_data)?),
        ActionName::SaveW2Info => actions::save_w2_data(decode(name, form_data)?),
        ActionName::SaveTaxpayerInfo => actions::save_taxpayer_info(decode(name, form_data)?),
        ActionName::AddDependent => actions::add_dependent(decode(name, form_data)?),
        ActionName::RemoveDependent => actions::remove_dependent(decode(name, form_data)?),
        ActionName::AddSpouse => actions::add_spouse(decode(name, form_data)?),
        ActionName::RemoveSpouse => actions::REMOVE_SPOUSE,
    };
    tracing::debug!("Dispatched {name}");
    Ok(action)
}
