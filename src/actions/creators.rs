//! Message constructors
//!
//! Each constructor is pure and total over its payload type. Fields that
//! need cleaning are replaced; everything else passes through untouched.

use super::normalize::{strip_dashes, strip_dollars};
use super::{Action, EmptyPayload};
use crate::data::{Employer, IncomeW2, Person, Refund, TaxPayer};

/// The spouse-removal signal. It carries no data.
pub const REMOVE_SPOUSE: Action = Action::RemoveSpouse(EmptyPayload {});

/// Apply an in-place cleaning step to a payload before it is wrapped.
fn normalized<A>(mut form_data: A, clean: impl FnOnce(&mut A)) -> A {
    clean(&mut form_data);
    form_data
}

pub fn save_employee_data(person: Person) -> Action {
    Action::SaveEmployeeData(normalized(person, |p| p.ssid = strip_dashes(&p.ssid)))
}

pub fn save_employer_data(employer: Employer) -> Action {
    Action::SaveEmployerData(normalized(employer, |e| e.ein = strip_dashes(&e.ein)))
}

/// The cleaned withholding lands in `fedWitholding`, the key the reducer
/// reads; `fedWithholding` is left as typed.
pub fn save_w2_data(w2: IncomeW2) -> Action {
    Action::SaveW2Info(normalized(w2, |t| {
        t.income = strip_dollars(&t.income);
        t.fed_witholding = Some(strip_dollars(&t.fed_withholding));
    }))
}

pub fn save_refund_info(refund: Refund) -> Action {
    Action::SaveRefundInfo(refund)
}

/// Phone number is optional; when absent nothing is cleaned.
pub fn save_taxpayer_info(taxpayer: TaxPayer) -> Action {
    Action::SaveTaxpayerInfo(normalized(taxpayer, |t| {
        if let Some(phone) = t.contact_phone_number.as_mut() {
            *phone = strip_dashes(phone);
        }
    }))
}

pub fn add_dependent(person: Person) -> Action {
    Action::AddDependent(person)
}

pub fn remove_dependent(index: usize) -> Action {
    Action::RemoveDependent(index)
}

pub fn add_spouse(person: Person) -> Action {
    Action::AddSpouse(person)
}

pub fn remove_spouse() -> Action {
    REMOVE_SPOUSE
}
