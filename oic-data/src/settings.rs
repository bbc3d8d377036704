//! Engine settings: overrides for the per-form multiplier tables and the
//! offer terms limits.
//!
//! Every key is optional; anything left out keeps its built-in default.
//!
//! ```toml
//! [individual]
//! quick_sale_factor = 0.8
//!
//! [business]
//! periodic_multiplier = 24
//!
//! [payment_terms]
//! application_fee = 205
//! ```

use std::fs;
use std::path::Path;

use oic_core::{
    FormVariant, PaymentTermsConfig, PaymentTermsConfigError, VariantConfig, VariantConfigError,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {variant} settings: {source}")]
    Variant {
        variant: FormVariant,
        #[source]
        source: VariantConfigError,
    },

    #[error("invalid payment terms settings: {0}")]
    PaymentTerms(#[from] PaymentTermsConfigError),
}

/// Optional replacements for a form's default multiplier table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOverrides {
    pub quick_sale_factor: Option<Decimal>,
    pub lump_sum_multiplier: Option<u32>,
    pub periodic_multiplier: Option<u32>,
}

impl VariantOverrides {
    fn apply(
        &self,
        variant: FormVariant,
    ) -> VariantConfig {
        let defaults = VariantConfig::for_variant(variant);
        VariantConfig {
            variant,
            quick_sale_factor: self.quick_sale_factor.unwrap_or(defaults.quick_sale_factor),
            lump_sum_multiplier: self
                .lump_sum_multiplier
                .unwrap_or(defaults.lump_sum_multiplier),
            periodic_multiplier: self
                .periodic_multiplier
                .unwrap_or(defaults.periodic_multiplier),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub individual: VariantOverrides,
    pub business: VariantOverrides,
    pub payment_terms: PaymentTermsConfig,
}

impl EngineSettings {
    pub fn parse_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let source = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_str(&source)
    }

    pub fn variant_config(
        &self,
        variant: FormVariant,
    ) -> VariantConfig {
        match variant {
            FormVariant::Individual => self.individual.apply(variant),
            FormVariant::Business => self.business.apply(variant),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for variant in [FormVariant::Individual, FormVariant::Business] {
            self.variant_config(variant)
                .validate()
                .map_err(|source| SettingsError::Variant { variant, source })?;
        }
        self.payment_terms.validate()?;
        Ok(())
    }
}
