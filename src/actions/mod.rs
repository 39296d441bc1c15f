//! Action messages and their constructors
//!
//! Every message has the wire shape `{ "type": <tag>, "formData": <payload> }`.
//! Build messages with the constructor functions so payloads are normalized
//! before they reach the reducer.

mod creators;
mod message;
mod name;
mod normalize;

pub use creators::{
    add_dependent, add_spouse, remove_dependent, remove_spouse, save_employee_data,
    save_employer_data, save_refund_info, save_taxpayer_info, save_w2_data, REMOVE_SPOUSE,
};
pub use message::{Action, EmptyPayload};
pub use name::ActionName;
pub use normalize::{strip_dashes, strip_dollars};
