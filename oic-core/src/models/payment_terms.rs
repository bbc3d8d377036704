use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentTermsConfigError {
    #[error("initial payment rate must be between 0 and 1, got {0}")]
    InvalidInitialPaymentRate(Decimal),

    #[error("at least one additional lump-sum payment must be allowed")]
    NoAdditionalPaymentsAllowed,

    #[error("lump-sum payments must be due within at least one month, got {0}")]
    InvalidLumpSumMonths(u32),

    /// A periodic term needs room for a first and a final payment.
    #[error("periodic terms must span at least 2 months, got {0}")]
    InvalidMinPeriodicMonths(u32),

    #[error("periodic month range {min}..={max} is empty")]
    InvalidPeriodicRange { min: u32, max: u32 },

    #[error("application fee must be non-negative, got {0}")]
    InvalidApplicationFee(Decimal),
}

/// Limits applied to the offer terms section of Form 656.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentTermsConfig {
    /// Share of a lump-sum offer paid with the application.
    pub initial_payment_rate: Decimal,

    /// Maximum number of lump-sum payments after the initial one.
    pub max_additional_payments: u32,

    /// Lump-sum payments must all fall within this many months of acceptance.
    pub lump_sum_max_months: u32,

    pub min_periodic_months: u32,
    pub max_periodic_months: u32,

    /// Fee submitted with Form 656 unless low-income certified.
    pub application_fee: Decimal,
}

impl Default for PaymentTermsConfig {
    fn default() -> Self {
        Self {
            initial_payment_rate: Decimal::new(20, 2),
            max_additional_payments: 5,
            lump_sum_max_months: 5,
            min_periodic_months: 6,
            max_periodic_months: 24,
            application_fee: Decimal::from(205),
        }
    }
}

impl PaymentTermsConfig {
    pub fn validate(&self) -> Result<(), PaymentTermsConfigError> {
        if self.initial_payment_rate < Decimal::ZERO || self.initial_payment_rate > Decimal::ONE {
            return Err(PaymentTermsConfigError::InvalidInitialPaymentRate(
                self.initial_payment_rate,
            ));
        }
        if self.max_additional_payments == 0 {
            return Err(PaymentTermsConfigError::NoAdditionalPaymentsAllowed);
        }
        if self.lump_sum_max_months == 0 {
            return Err(PaymentTermsConfigError::InvalidLumpSumMonths(
                self.lump_sum_max_months,
            ));
        }
        if self.min_periodic_months < 2 {
            return Err(PaymentTermsConfigError::InvalidMinPeriodicMonths(
                self.min_periodic_months,
            ));
        }
        if self.min_periodic_months > self.max_periodic_months {
            return Err(PaymentTermsConfigError::InvalidPeriodicRange {
                min: self.min_periodic_months,
                max: self.max_periodic_months,
            });
        }
        if self.application_fee < Decimal::ZERO {
            return Err(PaymentTermsConfigError::InvalidApplicationFee(
                self.application_fee,
            ));
        }
        Ok(())
    }

    pub fn periodic_months_in_range(
        &self,
        months: u32,
    ) -> bool {
        (self.min_periodic_months..=self.max_periodic_months).contains(&months)
    }
}

/// A user-entered payment due in a given month after acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub month: u32,
    pub amount: Decimal,
}

/// Lump-sum terms as entered on the offer terms section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LumpSumTerms {
    pub initial_payment: Decimal,
    #[serde(default)]
    pub additional_payments: Vec<ScheduledPayment>,
}

/// Periodic terms as entered on the offer terms section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTerms {
    pub first_payment: Decimal,
    pub subsequent_payment: Decimal,
    pub months_to_pay: u32,
}

/// Engine-derived part of a lump-sum schedule.
///
/// The additional payments are entered by the taxpayer; only their required
/// total is reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpSumSchedule {
    pub initial_payment: Decimal,
    pub remaining_balance: Decimal,
}

/// Engine-derived part of a periodic schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicSchedule {
    pub number_of_subsequent_payments: u32,
    pub final_payment_amount: Decimal,
    pub final_payment_month: u32,

    /// False when the term is outside the allowed month range. The final
    /// payment is then reported as zero and the offer must not be submitted.
    pub within_term_limits: bool,
}
