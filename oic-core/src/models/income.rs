use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FormVariant;

/// Monthly income sources from the household (433-A) or business (433-B)
/// income section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    // Form 433-A
    Wages,
    SelfEmployment,
    Rental,
    DividendsAndInterest,
    Pensions,
    SupportAndAlimony,
    OtherHousehold,

    // Form 433-B
    GrossReceipts,
    BusinessRental,
    BusinessInterest,
    BusinessDividends,
    OtherBusiness,
}

impl IncomeSource {
    pub fn variant(&self) -> FormVariant {
        match self {
            Self::Wages
            | Self::SelfEmployment
            | Self::Rental
            | Self::DividendsAndInterest
            | Self::Pensions
            | Self::SupportAndAlimony
            | Self::OtherHousehold => FormVariant::Individual,
            Self::GrossReceipts
            | Self::BusinessRental
            | Self::BusinessInterest
            | Self::BusinessDividends
            | Self::OtherBusiness => FormVariant::Business,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeLine {
    pub source: IncomeSource,
    pub monthly_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomeSummary {
    pub lines: Vec<IncomeLine>,
}

impl IncomeSummary {
    pub fn new(lines: Vec<IncomeLine>) -> Self {
        Self { lines }
    }

    pub fn with(
        mut self,
        source: IncomeSource,
        monthly_amount: Decimal,
    ) -> Self {
        self.lines.push(IncomeLine {
            source,
            monthly_amount,
        });
        self
    }
}
