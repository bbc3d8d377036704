//! Reasonable collection potential worksheets for Forms 433-A (OIC) and
//! 433-B (OIC).
//!
//! # Worksheet Structure
//!
//! Form 433-A (individuals):
//!
//! | Box | Description |
//! |-----|-------------|
//! | A   | Available individual equity in assets |
//! | B   | Available business equity in assets |
//! | C   | Total monthly household income |
//! | D   | Total monthly household expenses |
//! | E   | Remaining monthly income (C - D, minimum 0) |
//! | F   | Future remaining income, lump-sum (E × 12) |
//! | G   | Future remaining income, periodic (E × 24) |
//! | H   | Minimum offer amount (A + B + F or G) |
//!
//! Form 433-B (businesses):
//!
//! | Box | Description |
//! |-----|-------------|
//! | A   | Available business equity in assets |
//! | B   | Total monthly business income |
//! | C   | Total monthly business expenses |
//! | D   | Remaining monthly income (B - C, minimum 0) |
//! | E   | Future remaining income (D × 12 or D × 24 by timeline) |
//! | F   | Minimum offer amount (A + E) |
//!
//! The individual form shows both projections and lets the timeline pick
//! one; the business form only ever shows the selected projection.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use oic_core::{
//!     AssetEquitySummary, AssetKind, AssetLine, ExpenseCategory, ExpenseSummary, FormVariant,
//!     IncomeSource, IncomeSummary, OfferWorksheet, OfferWorksheetInput, PaymentTimeline,
//!     VariantConfig,
//! };
//!
//! let worksheet = OfferWorksheet::new(VariantConfig::for_variant(FormVariant::Individual));
//! let input = OfferWorksheetInput {
//!     personal_assets: AssetEquitySummary::new(vec![
//!         AssetLine::new(AssetKind::BankAccount, dec!(5000), dec!(0)),
//!         AssetLine::new(AssetKind::RealEstate, dec!(100000), dec!(60000)),
//!     ]),
//!     business_assets: AssetEquitySummary::default(),
//!     income: IncomeSummary::default().with(IncomeSource::Wages, dec!(3500)),
//!     expenses: ExpenseSummary::default().with(ExpenseCategory::Housing, dec!(3000)),
//!     timeline: PaymentTimeline::Periodic,
//! };
//!
//! let ladder = worksheet.calculate(&input).unwrap();
//!
//! assert_eq!(ladder.asset_equity, dec!(25000));
//! assert_eq!(ladder.future_income, dec!(12000));
//! assert_eq!(ladder.minimum_offer, dec!(37000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::asset_equity::compute_asset_equity;
use super::remaining_income::{
    compute_remaining_monthly_income, display_totals, warn_on_foreign_categories,
};
use crate::calculations::common::{non_negative, round_whole_dollar, saturating_sum};
use crate::models::{
    AssetEquitySummary, BoxLabel, ExpenseSummary, FormVariant, IncomeSummary, OfferBox,
    OfferLadder, PaymentTimeline, VariantConfig, VariantConfigError,
};

/// Errors that can occur during offer worksheet calculations.
///
/// Numeric inputs never produce errors; only the configuration is checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferWorksheetError {
    #[error("invalid {variant} configuration: {source}")]
    InvalidConfig {
        variant: FormVariant,
        #[source]
        source: VariantConfigError,
    },
}

/// Validated financial inputs collected by the form sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferWorksheetInput {
    /// Individual assets. Ignored for the business form.
    pub personal_assets: AssetEquitySummary,

    /// Business assets; for an individual these are the assets of a
    /// sole proprietorship.
    pub business_assets: AssetEquitySummary,

    pub income: IncomeSummary,
    pub expenses: ExpenseSummary,
    pub timeline: PaymentTimeline,
}

/// Projects remaining monthly income over the months the timeline counts.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use oic_core::{FormVariant, PaymentTimeline, VariantConfig};
/// use oic_core::calculations::worksheets::project_future_income;
///
/// let config = VariantConfig::for_variant(FormVariant::Individual);
///
/// assert_eq!(project_future_income(dec!(500), PaymentTimeline::LumpSum, &config), dec!(6000));
/// assert_eq!(project_future_income(dec!(500), PaymentTimeline::Periodic, &config), dec!(12000));
/// ```
pub fn project_future_income(
    remaining_monthly_income: Decimal,
    timeline: PaymentTimeline,
    config: &VariantConfig,
) -> Decimal {
    scale_remaining_income(
        remaining_monthly_income,
        config.multiplier_for(timeline),
    )
}

fn scale_remaining_income(
    remaining_monthly_income: Decimal,
    months: u32,
) -> Decimal {
    let remaining = non_negative("remaining_monthly_income", remaining_monthly_income);
    round_whole_dollar(remaining.saturating_mul(Decimal::from(months)))
}

/// Sums the asset-equity boxes and the selected future income.
pub fn compute_minimum_offer(
    asset_equity_boxes: &[Decimal],
    future_income: Decimal,
) -> Decimal {
    let equity = saturating_sum(
        asset_equity_boxes
            .iter()
            .map(|amount| non_negative("asset_equity", *amount)),
    );

    round_whole_dollar(equity.saturating_add(non_negative("future_income", future_income)))
}

/// Calculator for the offer box ladder.
#[derive(Debug, Clone)]
pub struct OfferWorksheet {
    config: VariantConfig,
}

impl OfferWorksheet {
    pub fn new(config: VariantConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Calculates every box for the configured form.
    ///
    /// # Errors
    ///
    /// Returns [`OfferWorksheetError`] if the variant configuration is invalid.
    pub fn calculate(
        &self,
        input: &OfferWorksheetInput,
    ) -> Result<OfferLadder, OfferWorksheetError> {
        self.config
            .validate()
            .map_err(|source| OfferWorksheetError::InvalidConfig {
                variant: self.config.variant,
                source,
            })?;

        warn_on_foreign_categories(self.config.variant, &input.income, &input.expenses);

        let ladder = match self.config.variant {
            FormVariant::Individual => self.individual_ladder(input),
            FormVariant::Business => self.business_ladder(input),
        };

        debug!(
            form = ladder.variant.as_str(),
            timeline = ladder.timeline.description(),
            minimum_offer = %ladder.minimum_offer,
            "offer ladder calculated"
        );

        Ok(ladder)
    }

    fn individual_ladder(
        &self,
        input: &OfferWorksheetInput,
    ) -> OfferLadder {
        let factor = self.config.quick_sale_factor;

        // Boxes A and B
        let personal_equity = compute_asset_equity(&input.personal_assets, factor);
        let business_equity = compute_asset_equity(&input.business_assets, factor);

        // Boxes C, D and E
        let (total_income, total_expenses) = display_totals(&input.income, &input.expenses);
        let remaining = compute_remaining_monthly_income(&input.income, &input.expenses);

        // Boxes F and G; the timeline picks which one counts
        let lump_sum_income = scale_remaining_income(remaining, self.config.lump_sum_multiplier);
        let periodic_income = scale_remaining_income(remaining, self.config.periodic_multiplier);
        let future_income = match input.timeline {
            PaymentTimeline::LumpSum => lump_sum_income,
            PaymentTimeline::Periodic => periodic_income,
        };

        // Box H
        let minimum_offer = compute_minimum_offer(&[personal_equity, business_equity], future_income);

        let boxes = vec![
            OfferBox::new(BoxLabel::A, "Available individual equity in assets", personal_equity),
            OfferBox::new(BoxLabel::B, "Available business equity in assets", business_equity),
            OfferBox::new(BoxLabel::C, "Total monthly household income", total_income),
            OfferBox::new(BoxLabel::D, "Total monthly household expenses", total_expenses),
            OfferBox::new(BoxLabel::E, "Remaining monthly income", remaining),
            OfferBox::new(
                BoxLabel::F,
                future_income_description(self.config.lump_sum_multiplier),
                lump_sum_income,
            ),
            OfferBox::new(
                BoxLabel::G,
                future_income_description(self.config.periodic_multiplier),
                periodic_income,
            ),
            OfferBox::new(BoxLabel::H, "Minimum offer amount", minimum_offer),
        ];

        OfferLadder {
            variant: FormVariant::Individual,
            timeline: input.timeline,
            boxes,
            asset_equity: personal_equity.saturating_add(business_equity),
            remaining_monthly_income: remaining,
            future_income,
            minimum_offer,
        }
    }

    fn business_ladder(
        &self,
        input: &OfferWorksheetInput,
    ) -> OfferLadder {
        if !input.personal_assets.is_empty() {
            warn!(
                lines = input.personal_assets.lines.len(),
                "Personal assets are not part of Form 433-B and were ignored"
            );
        }

        // Box A
        let equity = compute_asset_equity(&input.business_assets, self.config.quick_sale_factor);

        // Boxes B, C and D
        let (total_income, total_expenses) = display_totals(&input.income, &input.expenses);
        let remaining = compute_remaining_monthly_income(&input.income, &input.expenses);

        // Box E
        let months = self.config.multiplier_for(input.timeline);
        let future_income = scale_remaining_income(remaining, months);

        // Box F
        let minimum_offer = compute_minimum_offer(&[equity], future_income);

        let boxes = vec![
            OfferBox::new(BoxLabel::A, "Available business equity in assets", equity),
            OfferBox::new(BoxLabel::B, "Total monthly business income", total_income),
            OfferBox::new(BoxLabel::C, "Total monthly business expenses", total_expenses),
            OfferBox::new(BoxLabel::D, "Remaining monthly income", remaining),
            OfferBox::new(BoxLabel::E, future_income_description(months), future_income),
            OfferBox::new(BoxLabel::F, "Minimum offer amount", minimum_offer),
        ];

        OfferLadder {
            variant: FormVariant::Business,
            timeline: input.timeline,
            boxes,
            asset_equity: equity,
            remaining_monthly_income: remaining,
            future_income,
            minimum_offer,
        }
    }
}

fn future_income_description(months: u32) -> String {
    format!("Future remaining income ({months} months)")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::models::{AssetKind, AssetLine, ExpenseCategory, IncomeSource};

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn individual() -> OfferWorksheet {
        OfferWorksheet::new(VariantConfig::for_variant(FormVariant::Individual))
    }

    fn business() -> OfferWorksheet {
        OfferWorksheet::new(VariantConfig::for_variant(FormVariant::Business))
    }

    fn home_and_savings() -> AssetEquitySummary {
        AssetEquitySummary::new(vec![
            AssetLine::new(AssetKind::BankAccount, dec!(5000), dec!(0)),
            AssetLine::new(AssetKind::RealEstate, dec!(100000), dec!(60000)),
        ])
    }

    fn input(
        income: Decimal,
        expenses: Decimal,
        timeline: PaymentTimeline,
    ) -> OfferWorksheetInput {
        OfferWorksheetInput {
            personal_assets: home_and_savings(),
            business_assets: AssetEquitySummary::default(),
            income: IncomeSummary::default().with(IncomeSource::Wages, income),
            expenses: ExpenseSummary::default().with(ExpenseCategory::Housing, expenses),
            timeline,
        }
    }

    // =========================================================================
    // project_future_income tests
    // =========================================================================

    #[test]
    fn project_future_income_is_zero_without_remaining_income() {
        let config = VariantConfig::for_variant(FormVariant::Business);

        for timeline in [PaymentTimeline::LumpSum, PaymentTimeline::Periodic] {
            assert_eq!(
                project_future_income(Decimal::ZERO, timeline, &config),
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn project_future_income_scales_linearly() {
        let config = VariantConfig::for_variant(FormVariant::Individual);

        let single = project_future_income(dec!(750), PaymentTimeline::Periodic, &config);
        let double = project_future_income(dec!(1500), PaymentTimeline::Periodic, &config);

        assert_eq!(double, single * dec!(2));
    }

    #[test]
    fn project_future_income_uses_configured_multipliers() {
        let config = VariantConfig {
            lump_sum_multiplier: 6,
            periodic_multiplier: 18,
            ..VariantConfig::for_variant(FormVariant::Business)
        };

        assert_eq!(
            project_future_income(dec!(100), PaymentTimeline::LumpSum, &config),
            dec!(600)
        );
        assert_eq!(
            project_future_income(dec!(100), PaymentTimeline::Periodic, &config),
            dec!(1800)
        );
    }

    // =========================================================================
    // compute_minimum_offer tests
    // =========================================================================

    #[test]
    fn minimum_offer_is_equity_plus_future_income() {
        let result = compute_minimum_offer(&[dec!(25000), dec!(3000)], dec!(12000));

        assert_eq!(result, dec!(40000));
    }

    #[test]
    fn minimum_offer_with_no_boxes_is_future_income() {
        assert_eq!(compute_minimum_offer(&[], dec!(600)), dec!(600));
    }

    #[test]
    fn minimum_offer_clamps_negative_boxes() {
        let result = compute_minimum_offer(&[dec!(-100), dec!(500)], dec!(-50));

        assert_eq!(result, dec!(500));
    }

    // =========================================================================
    // individual ladder tests
    // =========================================================================

    #[test]
    fn individual_periodic_offer_uses_24_month_box() {
        let ladder = individual()
            .calculate(&input(dec!(3500), dec!(3000), PaymentTimeline::Periodic))
            .unwrap();

        assert_eq!(ladder.amount(BoxLabel::E), Some(dec!(500)));
        assert_eq!(ladder.amount(BoxLabel::F), Some(dec!(6000)));
        assert_eq!(ladder.amount(BoxLabel::G), Some(dec!(12000)));
        assert_eq!(ladder.future_income, dec!(12000));
        assert_eq!(ladder.minimum_offer, dec!(37000));
        assert_eq!(ladder.amount(BoxLabel::H), Some(dec!(37000)));
    }

    #[test]
    fn individual_lump_sum_offer_uses_12_month_box() {
        let ladder = individual()
            .calculate(&input(dec!(3500), dec!(3000), PaymentTimeline::LumpSum))
            .unwrap();

        assert_eq!(ladder.future_income, dec!(6000));
        assert_eq!(ladder.minimum_offer, dec!(31000));
    }

    #[test]
    fn expenses_above_income_leave_offer_at_asset_equity() {
        let ladder = individual()
            .calculate(&input(dec!(4000), dec!(4500), PaymentTimeline::LumpSum))
            .unwrap();

        assert_eq!(ladder.remaining_monthly_income, Decimal::ZERO);
        assert_eq!(ladder.future_income, Decimal::ZERO);
        assert_eq!(ladder.minimum_offer, ladder.asset_equity);
        assert_eq!(ladder.minimum_offer, dec!(25000));
    }

    #[test]
    fn individual_includes_sole_proprietorship_equity() {
        let mut data = input(dec!(3500), dec!(3000), PaymentTimeline::LumpSum);
        data.business_assets = AssetEquitySummary::new(vec![AssetLine::new(
            AssetKind::BusinessEquipment,
            dec!(10000),
            dec!(2000),
        )]);

        let ladder = individual().calculate(&data).unwrap();

        assert_eq!(ladder.amount(BoxLabel::B), Some(dec!(6000)));
        assert_eq!(ladder.asset_equity, dec!(31000));
        assert_eq!(ladder.minimum_offer, dec!(37000));
    }

    #[test]
    fn individual_ladder_has_boxes_a_through_h() {
        let ladder = individual()
            .calculate(&input(dec!(1), dec!(0), PaymentTimeline::LumpSum))
            .unwrap();

        let labels: Vec<BoxLabel> = ladder.boxes.iter().map(|b| b.label).collect();

        assert_eq!(
            labels,
            vec![
                BoxLabel::A,
                BoxLabel::B,
                BoxLabel::C,
                BoxLabel::D,
                BoxLabel::E,
                BoxLabel::F,
                BoxLabel::G,
                BoxLabel::H
            ]
        );
    }

    // =========================================================================
    // business ladder tests
    // =========================================================================

    fn business_input(timeline: PaymentTimeline) -> OfferWorksheetInput {
        OfferWorksheetInput {
            personal_assets: AssetEquitySummary::default(),
            business_assets: AssetEquitySummary::new(vec![
                AssetLine::new(AssetKind::BankAccount, dec!(8000), dec!(0)),
                AssetLine::new(AssetKind::BusinessEquipment, dec!(50000), dec!(30000)),
            ]),
            income: IncomeSummary::default().with(IncomeSource::GrossReceipts, dec!(20000)),
            expenses: ExpenseSummary::default()
                .with(ExpenseCategory::BusinessWages, dec!(12000))
                .with(ExpenseCategory::Rent, dec!(7000)),
            timeline,
        }
    }

    #[test]
    fn business_lump_sum_uses_12_months() {
        let ladder = business()
            .calculate(&business_input(PaymentTimeline::LumpSum))
            .unwrap();

        assert_eq!(ladder.amount(BoxLabel::A), Some(dec!(18000)));
        assert_eq!(ladder.amount(BoxLabel::D), Some(dec!(1000)));
        assert_eq!(ladder.amount(BoxLabel::E), Some(dec!(12000)));
        assert_eq!(ladder.amount(BoxLabel::F), Some(dec!(30000)));
        assert_eq!(ladder.minimum_offer, dec!(30000));
    }

    #[test]
    fn business_periodic_uses_24_months() {
        let ladder = business()
            .calculate(&business_input(PaymentTimeline::Periodic))
            .unwrap();

        assert_eq!(ladder.future_income, dec!(24000));
        assert_eq!(ladder.minimum_offer, dec!(42000));
    }

    #[test]
    fn business_ladder_exposes_single_projection() {
        let ladder = business()
            .calculate(&business_input(PaymentTimeline::Periodic))
            .unwrap();

        assert_eq!(ladder.boxes.len(), 6);
        assert_eq!(ladder.get(BoxLabel::G), None);
        assert_eq!(ladder.get(BoxLabel::H), None);
    }

    #[test]
    fn business_ignores_personal_assets() {
        let _guard = init_test_tracing();
        let mut data = business_input(PaymentTimeline::LumpSum);
        data.personal_assets = home_and_savings();

        let ladder = business().calculate(&data).unwrap();

        assert_eq!(ladder.asset_equity, dec!(18000));
    }

    #[test]
    fn foreign_categories_are_still_summed() {
        let _guard = init_test_tracing();
        let mut data = business_input(PaymentTimeline::LumpSum);
        data.income = data.income.with(IncomeSource::Wages, dec!(500));

        let ladder = business().calculate(&data).unwrap();

        assert_eq!(ladder.remaining_monthly_income, dec!(1500));
    }

    // =========================================================================
    // configuration and purity tests
    // =========================================================================

    #[test]
    fn calculate_rejects_invalid_config() {
        let worksheet = OfferWorksheet::new(VariantConfig {
            quick_sale_factor: dec!(0),
            ..VariantConfig::for_variant(FormVariant::Business)
        });

        let result = worksheet.calculate(&business_input(PaymentTimeline::LumpSum));

        assert_eq!(
            result,
            Err(OfferWorksheetError::InvalidConfig {
                variant: FormVariant::Business,
                source: VariantConfigError::InvalidQuickSaleFactor(dec!(0)),
            })
        );
    }

    #[test]
    fn calculate_is_idempotent() {
        let worksheet = individual();
        let data = input(dec!(5123.45), dec!(2750.10), PaymentTimeline::Periodic);

        assert_eq!(worksheet.calculate(&data), worksheet.calculate(&data));
    }

    #[test]
    fn minimum_offer_matches_box_sum_for_both_forms() {
        for timeline in [PaymentTimeline::LumpSum, PaymentTimeline::Periodic] {
            let ladder = individual()
                .calculate(&input(dec!(6100), dec!(2200.40), timeline))
                .unwrap();
            assert_eq!(ladder.minimum_offer, ladder.asset_equity + ladder.future_income);

            let ladder = business().calculate(&business_input(timeline)).unwrap();
            assert_eq!(ladder.minimum_offer, ladder.asset_equity + ladder.future_income);
        }
    }

    // =========================================================================
    // Decimal limit tests
    // =========================================================================

    #[test]
    fn project_future_income_saturates_at_decimal_max() {
        let config = VariantConfig::for_variant(FormVariant::Individual);

        let result =
            project_future_income(Decimal::MAX / dec!(12), PaymentTimeline::Periodic, &config);

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn minimum_offer_saturates_at_decimal_max() {
        let result = compute_minimum_offer(&[Decimal::MAX, dec!(1)], dec!(1));

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn ladder_at_decimal_limits_does_not_overflow() {
        let mut data = input(Decimal::MAX, dec!(0), PaymentTimeline::Periodic);
        data.business_assets = AssetEquitySummary::new(vec![AssetLine::new(
            AssetKind::BankAccount,
            Decimal::MAX,
            dec!(0),
        )]);

        let ladder = individual().calculate(&data).unwrap();

        assert_eq!(ladder.amount(BoxLabel::G), Some(Decimal::MAX));
        assert_eq!(ladder.asset_equity, Decimal::MAX);
        assert_eq!(ladder.minimum_offer, Decimal::MAX);
    }
}
