//! Net realizable equity in assets.
//!
//! Each asset contributes `max(0, value × multiplier − loan balance)`, where
//! the multiplier is 1 for liquid assets and the quick-sale factor for
//! everything else. The discounted value is rounded to whole dollars before
//! the loan is subtracted; the total is rounded once more after summation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use oic_core::{AssetEquitySummary, AssetKind, AssetLine};
//! use oic_core::calculations::worksheets::compute_asset_equity;
//!
//! let assets = AssetEquitySummary::new(vec![
//!     AssetLine::new(AssetKind::BankAccount, dec!(5000), dec!(0)),
//!     AssetLine::new(AssetKind::RealEstate, dec!(100000), dec!(60000)),
//! ]);
//!
//! assert_eq!(compute_asset_equity(&assets, dec!(0.8)), dec!(25000));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{non_negative, round_whole_dollar, saturating_sum};
use crate::models::{AssetEquitySummary, AssetLine};

/// Equity a single asset contributes to the total, floored at zero.
pub fn asset_contribution(
    line: &AssetLine,
    quick_sale_factor: Decimal,
) -> Decimal {
    let market_value = non_negative("market_value", line.market_value);
    let loan_balance = non_negative("loan_balance", line.loan_balance);

    let realizable = if line.kind.is_liquid() {
        market_value
    } else {
        round_whole_dollar(market_value.saturating_mul(quick_sale_factor))
    };

    let equity = realizable.saturating_sub(loan_balance);
    if equity < Decimal::ZERO {
        warn!(
            kind = line.kind.as_str(),
            description = %line.description,
            realizable = %realizable,
            loan_balance = %loan_balance,
            "Loan exceeds realizable value; asset contributes no equity"
        );
        return Decimal::ZERO;
    }

    equity
}

/// Total equity across every asset line, in whole dollars.
pub fn compute_asset_equity(
    assets: &AssetEquitySummary,
    quick_sale_factor: Decimal,
) -> Decimal {
    let total = saturating_sum(
        assets
            .lines
            .iter()
            .map(|line| asset_contribution(line, quick_sale_factor)),
    );

    let rounded = round_whole_dollar(total);
    debug!(lines = assets.lines.len(), equity = %rounded, "asset equity computed");
    rounded
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::AssetKind;

    const QUICK_SALE: Decimal = dec!(0.8);

    fn summary(lines: Vec<AssetLine>) -> AssetEquitySummary {
        AssetEquitySummary::new(lines)
    }

    // =========================================================================
    // asset_contribution tests
    // =========================================================================

    #[test]
    fn liquid_asset_counts_at_face_value() {
        let line = AssetLine::new(AssetKind::BankAccount, dec!(5000.25), dec!(0));

        assert_eq!(asset_contribution(&line, QUICK_SALE), dec!(5000.25));
    }

    #[test]
    fn fixed_asset_is_discounted_then_reduced_by_loan() {
        let line = AssetLine::new(AssetKind::Vehicle, dec!(20000), dec!(5000));

        // 20000 × 0.8 = 16000, minus 5000
        assert_eq!(asset_contribution(&line, QUICK_SALE), dec!(11000));
    }

    #[test]
    fn discounted_value_is_rounded_before_loan_subtraction() {
        let line = AssetLine::new(AssetKind::BusinessEquipment, dec!(1000.63), dec!(0.40));

        // round(800.504) = 801, minus 0.40
        assert_eq!(asset_contribution(&line, QUICK_SALE), dec!(800.60));
    }

    #[test]
    fn underwater_asset_contributes_zero() {
        let line = AssetLine::new(AssetKind::RealEstate, dec!(200000), dec!(250000));

        assert_eq!(asset_contribution(&line, QUICK_SALE), Decimal::ZERO);
    }

    #[test]
    fn negative_inputs_are_treated_as_zero() {
        let line = AssetLine::new(AssetKind::Investment, dec!(-100), dec!(-50));

        assert_eq!(asset_contribution(&line, QUICK_SALE), Decimal::ZERO);
    }

    // =========================================================================
    // compute_asset_equity tests
    // =========================================================================

    #[test]
    fn bank_and_real_estate_scenario() {
        let assets = summary(vec![
            AssetLine::new(AssetKind::BankAccount, dec!(5000), dec!(0)),
            AssetLine::new(AssetKind::RealEstate, dec!(100000), dec!(60000)),
        ]);

        assert_eq!(compute_asset_equity(&assets, QUICK_SALE), dec!(25000));
    }

    #[test]
    fn underwater_asset_does_not_offset_other_equity() {
        let assets = summary(vec![
            AssetLine::new(AssetKind::BankAccount, dec!(3000), dec!(0)),
            AssetLine::new(AssetKind::Vehicle, dec!(10000), dec!(15000)),
        ]);

        assert_eq!(compute_asset_equity(&assets, QUICK_SALE), dec!(3000));
    }

    #[test]
    fn empty_summary_has_zero_equity() {
        assert_eq!(
            compute_asset_equity(&AssetEquitySummary::default(), QUICK_SALE),
            Decimal::ZERO
        );
    }

    #[test]
    fn total_is_rounded_once_after_summation() {
        let assets = summary(vec![
            AssetLine::new(AssetKind::BankAccount, dec!(100.30), dec!(0)),
            AssetLine::new(AssetKind::CashOnHand, dec!(100.30), dec!(0)),
        ]);

        // 200.60 rounds to 201; rounding each line first would give 200
        assert_eq!(compute_asset_equity(&assets, QUICK_SALE), dec!(201));
    }

    #[test]
    fn equity_never_decreases_as_market_value_rises() {
        let mut previous = Decimal::ZERO;
        for value in [0, 25000, 50000, 75000, 100000, 125000] {
            let assets = summary(vec![AssetLine::new(
                AssetKind::RealEstate,
                Decimal::from(value),
                dec!(60000),
            )]);

            let equity = compute_asset_equity(&assets, QUICK_SALE);

            assert!(equity >= previous, "{equity} < {previous} at {value}");
            assert!(equity >= Decimal::ZERO);
            previous = equity;
        }
    }

    #[test]
    fn equity_never_increases_as_loan_balance_rises() {
        let mut previous = Decimal::MAX;
        for loan in [0, 20000, 40000, 80000, 120000] {
            let assets = summary(vec![AssetLine::new(
                AssetKind::RealEstate,
                dec!(100000),
                Decimal::from(loan),
            )]);

            let equity = compute_asset_equity(&assets, QUICK_SALE);

            assert!(equity <= previous, "{equity} > {previous} at {loan}");
            previous = equity;
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let assets = summary(vec![
            AssetLine::new(AssetKind::DigitalAsset, dec!(1234.56), dec!(0)),
            AssetLine::new(AssetKind::OtherProperty, dec!(9999), dec!(100)),
        ]);

        assert_eq!(
            compute_asset_equity(&assets, QUICK_SALE),
            compute_asset_equity(&assets, QUICK_SALE)
        );
    }

    #[test]
    fn equity_saturates_instead_of_overflowing() {
        let assets = summary(vec![
            AssetLine::new(AssetKind::BankAccount, Decimal::MAX, dec!(0)),
            AssetLine::new(AssetKind::BankAccount, dec!(1), dec!(0)),
            AssetLine::new(AssetKind::RealEstate, Decimal::MAX, dec!(0)),
        ]);

        assert_eq!(compute_asset_equity(&assets, QUICK_SALE), Decimal::MAX);
    }
}
