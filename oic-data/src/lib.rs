mod asset_schedule;
mod case;
mod settings;

pub use asset_schedule::{AssetRecord, AssetScheduleError, AssetScheduleLoader};
pub use case::{CaseFile, CaseLoadError, CaseLoader, OfferTerms};
pub use settings::{EngineSettings, SettingsError, VariantOverrides};
