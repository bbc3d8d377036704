use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FormVariant, PaymentTimeline};

/// Letter of a worksheet box, as printed on the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoxLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl BoxLabel {
    pub fn as_char(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
        }
    }
}

impl std::fmt::Display for BoxLabel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "Box {}", self.as_char())
    }
}

/// A labelled subtotal of the offer worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferBox {
    pub label: BoxLabel,
    pub description: String,
    pub amount: Decimal,
}

impl OfferBox {
    pub fn new(
        label: BoxLabel,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            label,
            description: description.into(),
            amount,
        }
    }
}

/// The complete box ladder for one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferLadder {
    pub variant: FormVariant,
    pub timeline: PaymentTimeline,

    /// Every box in letter order, including the final minimum-offer box.
    pub boxes: Vec<OfferBox>,

    /// Sum of the asset-equity boxes.
    pub asset_equity: Decimal,

    /// Monthly income left after allowable expenses, never negative.
    pub remaining_monthly_income: Decimal,

    /// The future-income box selected by the payment timeline.
    pub future_income: Decimal,

    /// Reasonable collection potential: the lowest offer that will be
    /// considered.
    pub minimum_offer: Decimal,
}

impl OfferLadder {
    pub fn get(
        &self,
        label: BoxLabel,
    ) -> Option<&OfferBox> {
        self.boxes.iter().find(|b| b.label == label)
    }

    pub fn amount(
        &self,
        label: BoxLabel,
    ) -> Option<Decimal> {
        self.get(label).map(|b| b.amount)
    }
}
