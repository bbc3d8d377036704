use serde::{Deserialize, Serialize};

/// How the taxpayer intends to pay the offered amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTimeline {
    /// Paid in 5 or fewer installments within 5 months of acceptance.
    LumpSum,
    /// Paid monthly over 6 to 24 months.
    Periodic,
}

impl PaymentTimeline {
    pub fn description(&self) -> &'static str {
        match self {
            Self::LumpSum => "5 months or fewer",
            Self::Periodic => "6-24 months",
        }
    }
}

/// Selection state of the payment-timeline choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    #[default]
    Unselected,
    Selected(PaymentTimeline),
}

/// Outcome of a timeline selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineTransition {
    pub state: TimelineState,

    /// Set when a different timeline was already selected. Any additional or
    /// subsequent payment figures entered against the old timeline no longer
    /// sum to the offer and must be cleared by the caller.
    pub invalidates_entered_payments: bool,
}

impl TimelineState {
    pub fn timeline(&self) -> Option<PaymentTimeline> {
        match self {
            Self::Unselected => None,
            Self::Selected(timeline) => Some(*timeline),
        }
    }

    pub fn select(
        self,
        timeline: PaymentTimeline,
    ) -> TimelineTransition {
        let invalidates_entered_payments = match self {
            Self::Selected(previous) => previous != timeline,
            Self::Unselected => false,
        };

        TimelineTransition {
            state: Self::Selected(timeline),
            invalidates_entered_payments,
        }
    }
}
