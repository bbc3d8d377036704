use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FormVariant;

/// Monthly allowable expense categories.
///
/// Any allowance caps are applied before the amounts reach the engine; the
/// engine only sums them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    // Form 433-A
    FoodClothingMisc,
    Housing,
    Transportation,
    HealthCare,
    Taxes,
    CourtOrderedPayments,
    ChildCare,
    LifeInsurance,
    SecuredDebts,
    OtherHousehold,

    // Form 433-B
    Materials,
    BusinessWages,
    Rent,
    Supplies,
    Utilities,
    VehicleCosts,
    BusinessInsurance,
    CurrentTaxes,
    OtherBusiness,
}

impl ExpenseCategory {
    pub fn variant(&self) -> FormVariant {
        match self {
            Self::FoodClothingMisc
            | Self::Housing
            | Self::Transportation
            | Self::HealthCare
            | Self::Taxes
            | Self::CourtOrderedPayments
            | Self::ChildCare
            | Self::LifeInsurance
            | Self::SecuredDebts
            | Self::OtherHousehold => FormVariant::Individual,
            Self::Materials
            | Self::BusinessWages
            | Self::Rent
            | Self::Supplies
            | Self::Utilities
            | Self::VehicleCosts
            | Self::BusinessInsurance
            | Self::CurrentTaxes
            | Self::OtherBusiness => FormVariant::Business,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub category: ExpenseCategory,
    pub monthly_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseSummary {
    pub lines: Vec<ExpenseLine>,
}

impl ExpenseSummary {
    pub fn new(lines: Vec<ExpenseLine>) -> Self {
        Self { lines }
    }

    pub fn with(
        mut self,
        category: ExpenseCategory,
        monthly_amount: Decimal,
    ) -> Self {
        self.lines.push(ExpenseLine {
            category,
            monthly_amount,
        });
        self
    }
}
