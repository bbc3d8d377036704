//! Monthly income and expense totals and the income left over each month.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{
    max, non_negative, round_half_up, round_whole_dollar, saturating_sum,
};
use crate::models::{ExpenseSummary, FormVariant, IncomeSummary};

/// Exact sum of every monthly income line.
pub fn total_monthly_income(income: &IncomeSummary) -> Decimal {
    saturating_sum(
        income
            .lines
            .iter()
            .map(|line| non_negative("monthly_income", line.monthly_amount)),
    )
}

/// Exact sum of every monthly expense line.
pub fn total_monthly_expenses(expenses: &ExpenseSummary) -> Decimal {
    saturating_sum(
        expenses
            .lines
            .iter()
            .map(|line| non_negative("monthly_expense", line.monthly_amount)),
    )
}

/// Income left after allowable expenses, in whole dollars and never negative.
///
/// Both totals are summed exactly and the difference is rounded once.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use oic_core::{ExpenseCategory, ExpenseSummary, IncomeSource, IncomeSummary};
/// use oic_core::calculations::worksheets::compute_remaining_monthly_income;
///
/// let income = IncomeSummary::default().with(IncomeSource::Wages, dec!(4000));
/// let expenses = ExpenseSummary::default().with(ExpenseCategory::Housing, dec!(4500));
///
/// assert_eq!(compute_remaining_monthly_income(&income, &expenses), dec!(0));
/// ```
pub fn compute_remaining_monthly_income(
    income: &IncomeSummary,
    expenses: &ExpenseSummary,
) -> Decimal {
    let total_income = total_monthly_income(income);
    let total_expenses = total_monthly_expenses(expenses);
    let difference = total_income.saturating_sub(total_expenses);

    if difference < Decimal::ZERO {
        debug!(
            total_income = %total_income,
            total_expenses = %total_expenses,
            "Expenses exceed income; no remaining monthly income"
        );
    }

    round_whole_dollar(max(difference, Decimal::ZERO))
}

/// Display totals for the income and expense boxes, to the cent.
pub(crate) fn display_totals(
    income: &IncomeSummary,
    expenses: &ExpenseSummary,
) -> (Decimal, Decimal) {
    (
        round_half_up(total_monthly_income(income)),
        round_half_up(total_monthly_expenses(expenses)),
    )
}

/// Logs income and expense lines whose category belongs to the other form.
///
/// Such lines are still summed.
pub(crate) fn warn_on_foreign_categories(
    variant: FormVariant,
    income: &IncomeSummary,
    expenses: &ExpenseSummary,
) {
    for line in income.lines.iter().filter(|l| l.source.variant() != variant) {
        warn!(
            form = variant.as_str(),
            source = ?line.source,
            "Income source belongs to the other form"
        );
    }
    for line in expenses
        .lines
        .iter()
        .filter(|l| l.category.variant() != variant)
    {
        warn!(
            form = variant.as_str(),
            category = ?line.category,
            "Expense category belongs to the other form"
        );
    }
}
