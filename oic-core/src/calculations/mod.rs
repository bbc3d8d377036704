//! Offer-in-Compromise calculation modules.
//!
//! Reasonable collection potential is derived from the asset, income and
//! expense sections of Form 433-A (OIC) or Form 433-B (OIC); the offer
//! terms of Form 656 are derived from and cross-checked against it.

pub mod common;
pub mod worksheets;

pub use worksheets::{
    OfferWorksheet, OfferWorksheetError, OfferWorksheetInput, PaymentTermsError,
};
