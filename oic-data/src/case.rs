//! TOML case files describing one taxpayer's offer.
//!
//! ```toml
//! variant = "individual"
//! timeline = "periodic"
//! low_income = false
//! offer_amount = 37000
//!
//! [[assets]]
//! owner = "personal"
//! kind = "real_estate"
//! market_value = 100000
//! loan_balance = 60000
//!
//! [[income]]
//! source = "wages"
//! monthly_amount = 3500
//!
//! [[expenses]]
//! category = "housing"
//! monthly_amount = 3000
//!
//! [terms.periodic]
//! first_payment = 500
//! subsequent_payment = 500
//! months_to_pay = 12
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use oic_core::{
    ExpenseLine, ExpenseSummary, FormVariant, IncomeLine, IncomeSummary, LumpSumTerms,
    OfferWorksheetInput, PaymentTimeline, PeriodicTerms, TimelineState,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AssetRecord;

#[derive(Debug, Error)]
pub enum CaseLoadError {
    #[error("cannot read case file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The entered terms were made for the other payment timeline.
    #[error("terms were entered for a {terms} offer but the timeline is {timeline}")]
    StaleTerms {
        terms: &'static str,
        timeline: &'static str,
    },
}

/// Offer terms entered on Form 656, keyed by timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferTerms {
    LumpSum(LumpSumTerms),
    Periodic(PeriodicTerms),
}

impl OfferTerms {
    pub fn timeline(&self) -> PaymentTimeline {
        match self {
            Self::LumpSum(_) => PaymentTimeline::LumpSum,
            Self::Periodic(_) => PaymentTimeline::Periodic,
        }
    }
}

/// One taxpayer's offer as collected by the form sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub variant: FormVariant,
    pub timeline: PaymentTimeline,

    /// Low-income certification waives the initial payment and the fee.
    #[serde(default)]
    pub low_income: bool,

    /// Amount offered on Form 656; defaults to the minimum offer.
    pub offer_amount: Option<Decimal>,

    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub income: Vec<IncomeLine>,
    #[serde(default)]
    pub expenses: Vec<ExpenseLine>,

    pub terms: Option<OfferTerms>,
}

impl CaseFile {
    /// Builds the engine input, splitting assets by owner.
    pub fn worksheet_input(&self) -> OfferWorksheetInput {
        let (personal_assets, business_assets) = AssetRecord::partition(&self.assets);

        OfferWorksheetInput {
            personal_assets,
            business_assets,
            income: IncomeSummary::new(self.income.clone()),
            expenses: ExpenseSummary::new(self.expenses.clone()),
            timeline: self.timeline,
        }
    }

    pub fn append_assets(
        &mut self,
        records: impl IntoIterator<Item = AssetRecord>,
    ) {
        self.assets.extend(records);
    }

    /// Rejects terms left over from a different timeline selection.
    fn check_terms_timeline(&self) -> Result<(), CaseLoadError> {
        let Some(terms) = &self.terms else {
            return Ok(());
        };

        let entered = TimelineState::Selected(terms.timeline());
        if entered.select(self.timeline).invalidates_entered_payments {
            return Err(CaseLoadError::StaleTerms {
                terms: terms.timeline().description(),
                timeline: self.timeline.description(),
            });
        }
        Ok(())
    }
}

/// Loader for TOML case files.
pub struct CaseLoader;

impl CaseLoader {
    pub fn parse_str(source: &str) -> Result<CaseFile, CaseLoadError> {
        let case: CaseFile = toml::from_str(source)?;
        case.check_terms_timeline()?;

        tracing::debug!(
            form = case.variant.as_str(),
            assets = case.assets.len(),
            income_lines = case.income.len(),
            expense_lines = case.expenses.len(),
            "case file parsed"
        );
        Ok(case)
    }

    pub fn parse<R: Read>(mut reader: R) -> Result<CaseFile, CaseLoadError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse_str(&source)
    }

    pub fn load_from_file(path: &Path) -> Result<CaseFile, CaseLoadError> {
        let source = fs::read_to_string(path).map_err(|source| CaseLoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_str(&source)
    }
}
