use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categories of assets listed on the collection information statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    CashOnHand,
    BankAccount,
    Investment,
    DigitalAsset,
    RetirementAccount,
    LifeInsuranceCashValue,
    AccountsReceivable,
    RealEstate,
    Vehicle,
    BusinessEquipment,
    OtherProperty,
}

impl AssetKind {
    /// Liquid assets count at face value; everything else is discounted to
    /// its quick-sale value.
    pub fn is_liquid(&self) -> bool {
        matches!(
            self,
            Self::CashOnHand
                | Self::BankAccount
                | Self::Investment
                | Self::DigitalAsset
                | Self::RetirementAccount
                | Self::LifeInsuranceCashValue
                | Self::AccountsReceivable
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnHand => "cash_on_hand",
            Self::BankAccount => "bank_account",
            Self::Investment => "investment",
            Self::DigitalAsset => "digital_asset",
            Self::RetirementAccount => "retirement_account",
            Self::LifeInsuranceCashValue => "life_insurance_cash_value",
            Self::AccountsReceivable => "accounts_receivable",
            Self::RealEstate => "real_estate",
            Self::Vehicle => "vehicle",
            Self::BusinessEquipment => "business_equipment",
            Self::OtherProperty => "other_property",
        }
    }
}

/// Whose balance sheet an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOwner {
    #[default]
    Personal,
    Business,
}

/// A single asset with its encumbering loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLine {
    pub kind: AssetKind,
    #[serde(default)]
    pub description: String,
    /// Current market value (face value for liquid assets).
    pub market_value: Decimal,
    /// Balance of any loan secured by the asset.
    #[serde(default)]
    pub loan_balance: Decimal,
}

impl AssetLine {
    pub fn new(
        kind: AssetKind,
        market_value: Decimal,
        loan_balance: Decimal,
    ) -> Self {
        Self {
            kind,
            description: String::new(),
            market_value,
            loan_balance,
        }
    }

    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self
    }
}

/// The asset section of one balance sheet (personal or business).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetEquitySummary {
    pub lines: Vec<AssetLine>,
}

impl AssetEquitySummary {
    pub fn new(lines: Vec<AssetLine>) -> Self {
        Self { lines }
    }

    pub fn push(
        &mut self,
        line: AssetLine,
    ) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<AssetLine> for AssetEquitySummary {
    fn from_iter<I: IntoIterator<Item = AssetLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
