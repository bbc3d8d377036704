//! Offer-in-Compromise worksheet implementations.
//!
//! This module contains the box ladder for Forms 433-A (OIC) and 433-B (OIC)
//! and the offer terms derivation for Form 656.

pub mod asset_equity;
pub mod offer;
pub mod payment_terms;
pub mod remaining_income;

pub use asset_equity::{asset_contribution, compute_asset_equity};
pub use offer::{
    OfferWorksheet, OfferWorksheetError, OfferWorksheetInput, compute_minimum_offer,
    project_future_income,
};
pub use payment_terms::{
    PaymentTermsError, application_fee, check_lump_sum_terms, check_offer_amount,
    check_periodic_terms, derive_lump_sum_schedule, derive_periodic_schedule,
};
pub use remaining_income::{
    compute_remaining_monthly_income, total_monthly_expenses, total_monthly_income,
};
