mod assets;
mod expenses;
mod form_variant;
mod income;
mod offer_box;
mod payment_terms;
mod payment_timeline;
mod variant_config;

pub use assets::{AssetEquitySummary, AssetKind, AssetLine, AssetOwner};
pub use expenses::{ExpenseCategory, ExpenseLine, ExpenseSummary};
pub use form_variant::FormVariant;
pub use income::{IncomeLine, IncomeSource, IncomeSummary};
pub use offer_box::{BoxLabel, OfferBox, OfferLadder};
pub use payment_terms::{
    LumpSumSchedule, LumpSumTerms, PaymentTermsConfig, PaymentTermsConfigError, PeriodicSchedule,
    PeriodicTerms, ScheduledPayment,
};
pub use payment_timeline::{PaymentTimeline, TimelineState, TimelineTransition};
pub use variant_config::{VariantConfig, VariantConfigError};
