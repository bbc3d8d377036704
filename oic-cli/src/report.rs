//! Read-only calculation summary, as a text table or TOML.

use std::fmt::{self, Write};

use oic_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::app::{OfferAssessment, ScheduleSummary};

/// Formats an amount as dollars with thousands separators.
///
/// Cents are shown only when the amount is not a whole dollar.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let abs = rounded.abs();

    let digits = abs.trunc().normalize().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let cents = (abs.fract() * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or(0);
    if cents == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{cents:02}")
    }
}

/// Renders the calculation summary as an aligned text table.
pub fn render_text(assessment: &OfferAssessment) -> Result<String, fmt::Error> {
    let ladder = &assessment.ladder;
    let mut out = String::new();

    writeln!(
        out,
        "Offer in Compromise - {} ({})",
        ladder.variant,
        ladder.timeline.description()
    )?;
    writeln!(out)?;

    let width = ladder
        .boxes
        .iter()
        .map(|b| b.description.len())
        .max()
        .unwrap_or(0);
    for offer_box in &ladder.boxes {
        writeln!(
            out,
            "  {}  {:<width$}  {:>14}",
            offer_box.label,
            offer_box.description,
            format_currency(offer_box.amount),
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Offer amount:      {}", format_currency(assessment.offer_amount))?;
    writeln!(
        out,
        "Application fee:   {}{}",
        format_currency(assessment.application_fee),
        if assessment.low_income { " (low-income waiver)" } else { "" }
    )?;

    match &assessment.schedule {
        Some(ScheduleSummary::LumpSum(schedule)) => {
            writeln!(
                out,
                "Initial payment:   {}",
                format_currency(schedule.initial_payment)
            )?;
            writeln!(
                out,
                "Still to schedule: {} in up to 5 additional payments",
                format_currency(schedule.remaining_balance)
            )?;
        }
        Some(ScheduleSummary::Periodic(schedule)) if schedule.within_term_limits => {
            writeln!(
                out,
                "Final payment:     {} in month {} after {} subsequent payments",
                format_currency(schedule.final_payment_amount),
                schedule.final_payment_month,
                schedule.number_of_subsequent_payments
            )?;
        }
        Some(ScheduleSummary::Periodic(schedule)) => {
            writeln!(
                out,
                "Final payment:     not computed, {} months is outside the allowed term",
                schedule.final_payment_month
            )?;
        }
        None => {
            writeln!(out, "Final payment:     enter periodic terms to compute")?;
        }
    }

    if !assessment.terms_checked {
        writeln!(out, "Terms:             not entered")?;
    } else if assessment.terms_accepted() {
        writeln!(out, "Terms:             OK")?;
    } else {
        writeln!(out, "Terms:             cannot be submitted")?;
        for issue in &assessment.terms_issues {
            writeln!(out, "  - {issue}")?;
        }
    }

    Ok(out)
}

pub fn render_toml(assessment: &OfferAssessment) -> Result<String, toml::ser::Error> {
    toml::to_string(assessment)
}
