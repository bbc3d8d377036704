//! Per-form multiplier tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FormVariant, PaymentTimeline};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantConfigError {
    /// The quick-sale factor must be in (0, 1].
    #[error("quick-sale factor must be greater than 0 and at most 1, got {0}")]
    InvalidQuickSaleFactor(Decimal),

    #[error("lump-sum multiplier must be positive, got {0}")]
    InvalidLumpSumMultiplier(u32),

    #[error("periodic multiplier must be positive, got {0}")]
    InvalidPeriodicMultiplier(u32),

    #[error("lump-sum multiplier {lump_sum} exceeds periodic multiplier {periodic}")]
    MultipliersOutOfOrder { lump_sum: u32, periodic: u32 },
}

/// Strategy record selecting the box composition and multipliers for a form.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use oic_core::{FormVariant, VariantConfig};
///
/// let config = VariantConfig::for_variant(FormVariant::Business);
///
/// assert_eq!(config.quick_sale_factor, dec!(0.8));
/// assert_eq!(config.lump_sum_multiplier, 12);
/// assert_eq!(config.periodic_multiplier, 24);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub variant: FormVariant,

    /// Discount applied to the market value of non-liquid assets.
    pub quick_sale_factor: Decimal,

    /// Months of remaining income counted for a lump-sum offer.
    pub lump_sum_multiplier: u32,

    /// Months of remaining income counted for a periodic offer.
    pub periodic_multiplier: u32,
}

impl VariantConfig {
    pub fn for_variant(variant: FormVariant) -> Self {
        Self {
            variant,
            quick_sale_factor: Decimal::new(8, 1),
            lump_sum_multiplier: 12,
            periodic_multiplier: 24,
        }
    }

    /// Months of remaining income projected for the chosen timeline.
    pub fn multiplier_for(
        &self,
        timeline: PaymentTimeline,
    ) -> u32 {
        match timeline {
            PaymentTimeline::LumpSum => self.lump_sum_multiplier,
            PaymentTimeline::Periodic => self.periodic_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), VariantConfigError> {
        if self.quick_sale_factor <= Decimal::ZERO || self.quick_sale_factor > Decimal::ONE {
            return Err(VariantConfigError::InvalidQuickSaleFactor(
                self.quick_sale_factor,
            ));
        }
        if self.lump_sum_multiplier == 0 {
            return Err(VariantConfigError::InvalidLumpSumMultiplier(
                self.lump_sum_multiplier,
            ));
        }
        if self.periodic_multiplier == 0 {
            return Err(VariantConfigError::InvalidPeriodicMultiplier(
                self.periodic_multiplier,
            ));
        }
        if self.lump_sum_multiplier > self.periodic_multiplier {
            return Err(VariantConfigError::MultipliersOutOfOrder {
                lump_sum: self.lump_sum_multiplier,
                periodic: self.periodic_multiplier,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_are_valid_for_both_forms() {
        for variant in [FormVariant::Individual, FormVariant::Business] {
            assert_eq!(VariantConfig::for_variant(variant).validate(), Ok(()));
        }
    }

    #[test]
    fn multiplier_follows_timeline() {
        let config = VariantConfig::for_variant(FormVariant::Individual);

        assert_eq!(config.multiplier_for(PaymentTimeline::LumpSum), 12);
        assert_eq!(config.multiplier_for(PaymentTimeline::Periodic), 24);
    }

    #[test]
    fn validate_rejects_zero_quick_sale_factor() {
        let config = VariantConfig {
            quick_sale_factor: dec!(0),
            ..VariantConfig::for_variant(FormVariant::Individual)
        };

        assert_eq!(
            config.validate(),
            Err(VariantConfigError::InvalidQuickSaleFactor(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_quick_sale_factor_above_one() {
        let config = VariantConfig {
            quick_sale_factor: dec!(1.2),
            ..VariantConfig::for_variant(FormVariant::Individual)
        };

        assert_eq!(
            config.validate(),
            Err(VariantConfigError::InvalidQuickSaleFactor(dec!(1.2)))
        );
    }

    #[test]
    fn validate_accepts_full_market_value() {
        let config = VariantConfig {
            quick_sale_factor: dec!(1),
            ..VariantConfig::for_variant(FormVariant::Business)
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_multipliers() {
        let lump = VariantConfig {
            lump_sum_multiplier: 0,
            ..VariantConfig::for_variant(FormVariant::Business)
        };
        let periodic = VariantConfig {
            periodic_multiplier: 0,
            ..VariantConfig::for_variant(FormVariant::Business)
        };

        assert_eq!(
            lump.validate(),
            Err(VariantConfigError::InvalidLumpSumMultiplier(0))
        );
        assert_eq!(
            periodic.validate(),
            Err(VariantConfigError::InvalidPeriodicMultiplier(0))
        );
    }

    #[test]
    fn validate_rejects_inverted_multipliers() {
        let config = VariantConfig {
            lump_sum_multiplier: 24,
            periodic_multiplier: 12,
            ..VariantConfig::for_variant(FormVariant::Individual)
        };

        assert_eq!(
            config.validate(),
            Err(VariantConfigError::MultipliersOutOfOrder {
                lump_sum: 24,
                periodic: 12
            })
        );
    }
}
