//! Runs a case through the engine and gathers everything the summary view
//! shows.

use std::path::Path;

use anyhow::{Context, Result};
use oic_core::calculations::worksheets::{
    application_fee, check_lump_sum_terms, check_offer_amount, check_periodic_terms,
    derive_lump_sum_schedule, derive_periodic_schedule,
};
use oic_core::{
    LumpSumSchedule, OfferLadder, OfferWorksheet, PaymentTimeline, PaymentTermsError,
    PeriodicSchedule,
};
use oic_data::{AssetScheduleLoader, CaseFile, CaseLoader, EngineSettings, OfferTerms};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

/// The engine-derived part of the chosen payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSummary {
    LumpSum(LumpSumSchedule),
    Periodic(PeriodicSchedule),
}

/// Everything the calculation summary displays for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferAssessment {
    pub offer_amount: Decimal,
    pub application_fee: Decimal,
    pub low_income: bool,

    /// Whether offer terms were entered and cross-checked.
    pub terms_checked: bool,
    pub terms_issues: Vec<String>,

    pub ladder: OfferLadder,

    /// Absent for a periodic offer whose terms have not been entered yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleSummary>,
}

impl OfferAssessment {
    pub fn terms_accepted(&self) -> bool {
        self.terms_issues.is_empty()
    }
}

/// Loads the case file and any extra asset schedule.
pub fn load_case(
    case_path: &Path,
    assets_path: Option<&Path>,
) -> Result<CaseFile> {
    let mut case = CaseLoader::load_from_file(case_path)
        .with_context(|| format!("Failed to load case: {}", case_path.display()))?;

    if let Some(path) = assets_path {
        let records = AssetScheduleLoader::load_from_file(path)
            .with_context(|| format!("Failed to load asset schedule: {}", path.display()))?;
        info!(count = records.len(), path = %path.display(), "appending asset schedule");
        case.append_assets(records);
    }

    Ok(case)
}

pub fn load_settings(path: Option<&Path>) -> Result<EngineSettings> {
    match path {
        Some(path) => EngineSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings: {}", path.display())),
        None => Ok(EngineSettings::default()),
    }
}

/// Computes the box ladder and derives and checks the offer terms.
pub fn assess(
    case: &CaseFile,
    settings: &EngineSettings,
) -> Result<OfferAssessment> {
    let worksheet = OfferWorksheet::new(settings.variant_config(case.variant));
    let ladder = worksheet
        .calculate(&case.worksheet_input())
        .context("Failed to calculate offer worksheet")?;

    let terms_config = &settings.payment_terms;
    let offer_amount = case.offer_amount.unwrap_or(ladder.minimum_offer);

    let schedule = match (&case.terms, case.timeline) {
        (Some(OfferTerms::Periodic(terms)), _) => Some(ScheduleSummary::Periodic(
            derive_periodic_schedule(offer_amount, terms, terms_config),
        )),
        (_, PaymentTimeline::LumpSum) => Some(ScheduleSummary::LumpSum(
            derive_lump_sum_schedule(offer_amount, case.low_income, terms_config),
        )),
        (_, PaymentTimeline::Periodic) => None,
    };

    let mut issues: Vec<PaymentTermsError> = Vec::new();
    if let Err(e) = check_offer_amount(offer_amount, ladder.minimum_offer) {
        issues.push(e);
    }
    let terms_result = match &case.terms {
        Some(OfferTerms::LumpSum(terms)) => Some(check_lump_sum_terms(
            offer_amount,
            terms,
            case.low_income,
            terms_config,
        )),
        Some(OfferTerms::Periodic(terms)) => {
            Some(check_periodic_terms(offer_amount, terms, terms_config))
        }
        None => None,
    };
    let terms_checked = terms_result.is_some();
    if let Some(Err(e)) = terms_result {
        issues.push(e);
    }

    for issue in &issues {
        warn!(%issue, "offer terms cannot be submitted");
    }

    Ok(OfferAssessment {
        offer_amount,
        application_fee: application_fee(case.low_income, terms_config),
        low_income: case.low_income,
        terms_checked,
        terms_issues: issues.iter().map(ToString::to_string).collect(),
        ladder,
        schedule,
    })
}
