//! Offer terms for Form 656: the lump-sum initial payment, the periodic
//! final payment, and cross-checks of the terms a taxpayer enters.
//!
//! The engine never balances a schedule itself. It reports what the
//! taxpayer still has to allocate and verifies what they entered.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use oic_core::{PaymentTermsConfig, PeriodicTerms};
//! use oic_core::calculations::worksheets::{derive_lump_sum_schedule, derive_periodic_schedule};
//!
//! let config = PaymentTermsConfig::default();
//!
//! let lump_sum = derive_lump_sum_schedule(dec!(10000), false, &config);
//! assert_eq!(lump_sum.initial_payment, dec!(2000));
//! assert_eq!(lump_sum.remaining_balance, dec!(8000));
//!
//! let terms = PeriodicTerms {
//!     first_payment: dec!(500),
//!     subsequent_payment: dec!(500),
//!     months_to_pay: 12,
//! };
//! let periodic = derive_periodic_schedule(dec!(12000), &terms, &config);
//! assert_eq!(periodic.number_of_subsequent_payments, 10);
//! assert_eq!(periodic.final_payment_amount, dec!(6500));
//! assert_eq!(periodic.final_payment_month, 12);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{max, non_negative, saturating_sum};
use crate::models::{
    LumpSumSchedule, LumpSumTerms, PaymentTermsConfig, PeriodicSchedule, PeriodicTerms,
};

/// Reasons entered offer terms cannot be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentTermsError {
    #[error("offer of {offered} is below the minimum offer of {minimum}")]
    OfferBelowMinimum { offered: Decimal, minimum: Decimal },

    #[error("initial payment of {entered} is below the required {required}")]
    InitialPaymentTooLow { entered: Decimal, required: Decimal },

    #[error("{count} additional payments entered; at most {max} are allowed")]
    TooManyAdditionalPayments { count: usize, max: u32 },

    #[error("payment due in month {month} is outside months 1 to {max}")]
    PaymentMonthOutOfRange { month: u32, max: u32 },

    #[error("payment amounts must be non-negative, got {0}")]
    NegativePayment(Decimal),

    #[error("payments total {scheduled} but the offer is {offer}")]
    LumpSumImbalance { offer: Decimal, scheduled: Decimal },

    #[error("{months} months is outside the allowed range of {min} to {max}")]
    MonthsOutOfRange { months: u32, min: u32, max: u32 },

    #[error("first and subsequent payments total {scheduled}, more than the offer of {offer}")]
    PeriodicOverpayment { offer: Decimal, scheduled: Decimal },
}

/// Derives the payment due with a lump-sum application.
///
/// `offer_amount` is the amount offered on Form 656, which may exceed the
/// minimum offer; pass the minimum offer when none was entered. The initial
/// payment is the configured share of that amount, rounded down to whole
/// dollars, or nothing when the taxpayer is low-income certified.
pub fn derive_lump_sum_schedule(
    offer_amount: Decimal,
    low_income: bool,
    config: &PaymentTermsConfig,
) -> LumpSumSchedule {
    let offer = non_negative("offer_amount", offer_amount);
    let initial_payment = if low_income {
        Decimal::ZERO
    } else {
        offer.saturating_mul(config.initial_payment_rate).floor()
    };

    LumpSumSchedule {
        initial_payment,
        remaining_balance: offer.saturating_sub(initial_payment),
    }
}

/// Derives the final payment of a periodic schedule.
///
/// The first and final payments are accounted separately, so a term of `n`
/// months has `n - 2` subsequent payments. Out-of-range terms report a zero
/// final payment instead of computing one.
pub fn derive_periodic_schedule(
    offer_amount: Decimal,
    terms: &PeriodicTerms,
    config: &PaymentTermsConfig,
) -> PeriodicSchedule {
    let months = terms.months_to_pay;

    if !config.periodic_months_in_range(months) {
        warn!(
            months,
            min = config.min_periodic_months,
            max = config.max_periodic_months,
            "Periodic term out of range; final payment not computed"
        );
        return PeriodicSchedule {
            number_of_subsequent_payments: 0,
            final_payment_amount: Decimal::ZERO,
            final_payment_month: months,
            within_term_limits: false,
        };
    }

    let number_of_subsequent_payments = months.saturating_sub(2);
    let unpaid = periodic_balance(offer_amount, terms);
    let final_payment_amount = max(unpaid, Decimal::ZERO);

    debug!(
        months,
        subsequent = number_of_subsequent_payments,
        final_payment = %final_payment_amount,
        "periodic schedule derived"
    );

    PeriodicSchedule {
        number_of_subsequent_payments,
        final_payment_amount,
        final_payment_month: months,
        within_term_limits: true,
    }
}

/// Offer minus the first and all subsequent payments, before clamping.
fn periodic_balance(
    offer_amount: Decimal,
    terms: &PeriodicTerms,
) -> Decimal {
    let offer = non_negative("offer_amount", offer_amount);
    let first = non_negative("first_payment", terms.first_payment);
    let subsequent = non_negative("subsequent_payment", terms.subsequent_payment);
    let count = Decimal::from(terms.months_to_pay.saturating_sub(2));

    offer
        .saturating_sub(first)
        .saturating_sub(subsequent.saturating_mul(count))
}

/// Fee due with the application.
pub fn application_fee(
    low_income: bool,
    config: &PaymentTermsConfig,
) -> Decimal {
    if low_income {
        Decimal::ZERO
    } else {
        config.application_fee
    }
}

/// Checks that the offered amount is at least the minimum offer.
pub fn check_offer_amount(
    offered: Decimal,
    minimum_offer: Decimal,
) -> Result<(), PaymentTermsError> {
    if offered < minimum_offer {
        return Err(PaymentTermsError::OfferBelowMinimum {
            offered,
            minimum: minimum_offer,
        });
    }
    Ok(())
}

/// Checks entered lump-sum terms against the offer amount.
///
/// # Errors
///
/// Returns [`PaymentTermsError`] if the initial payment is short, there are
/// too many additional payments, a payment is negative or falls outside the
/// lump-sum window, or the payments do not add up to the offer exactly.
pub fn check_lump_sum_terms(
    offer_amount: Decimal,
    terms: &LumpSumTerms,
    low_income: bool,
    config: &PaymentTermsConfig,
) -> Result<(), PaymentTermsError> {
    if terms.initial_payment < Decimal::ZERO {
        return Err(PaymentTermsError::NegativePayment(terms.initial_payment));
    }

    let required = derive_lump_sum_schedule(offer_amount, low_income, config).initial_payment;
    if terms.initial_payment < required {
        return Err(PaymentTermsError::InitialPaymentTooLow {
            entered: terms.initial_payment,
            required,
        });
    }

    let count = terms.additional_payments.len();
    if count > config.max_additional_payments as usize {
        return Err(PaymentTermsError::TooManyAdditionalPayments {
            count,
            max: config.max_additional_payments,
        });
    }

    for payment in &terms.additional_payments {
        if payment.amount < Decimal::ZERO {
            return Err(PaymentTermsError::NegativePayment(payment.amount));
        }
        if payment.month == 0 || payment.month > config.lump_sum_max_months {
            return Err(PaymentTermsError::PaymentMonthOutOfRange {
                month: payment.month,
                max: config.lump_sum_max_months,
            });
        }
    }

    let scheduled = saturating_sum(
        std::iter::once(terms.initial_payment)
            .chain(terms.additional_payments.iter().map(|p| p.amount)),
    );

    if scheduled != offer_amount {
        return Err(PaymentTermsError::LumpSumImbalance {
            offer: offer_amount,
            scheduled,
        });
    }

    Ok(())
}

/// Checks entered periodic terms against the offer amount.
///
/// # Errors
///
/// Returns [`PaymentTermsError`] if the term is outside the allowed month
/// range, a payment is negative, or the first and subsequent payments
/// already exceed the offer.
pub fn check_periodic_terms(
    offer_amount: Decimal,
    terms: &PeriodicTerms,
    config: &PaymentTermsConfig,
) -> Result<(), PaymentTermsError> {
    if !config.periodic_months_in_range(terms.months_to_pay) {
        return Err(PaymentTermsError::MonthsOutOfRange {
            months: terms.months_to_pay,
            min: config.min_periodic_months,
            max: config.max_periodic_months,
        });
    }

    for amount in [terms.first_payment, terms.subsequent_payment] {
        if amount < Decimal::ZERO {
            return Err(PaymentTermsError::NegativePayment(amount));
        }
    }

    let unpaid = periodic_balance(offer_amount, terms);
    if unpaid < Decimal::ZERO {
        return Err(PaymentTermsError::PeriodicOverpayment {
            offer: offer_amount,
            scheduled: offer_amount.saturating_sub(unpaid),
        });
    }

    Ok(())
}
