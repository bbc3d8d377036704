use std::fs::File;
use std::io::Read;
use std::path::Path;

use oic_core::{AssetEquitySummary, AssetKind, AssetLine, AssetOwner};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading an asset schedule.
#[derive(Debug, Error)]
pub enum AssetScheduleError {
    #[error("cannot open asset schedule '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for AssetScheduleError {
    fn from(err: csv::Error) -> Self {
        AssetScheduleError::CsvParse(err.to_string())
    }
}

/// A single asset row, shared by the CSV schedule and the case file.
///
/// - `owner`: `personal` or `business` (defaults to `personal`)
/// - `kind`: asset kind, e.g. `bank_account` or `real_estate`
/// - `description`: free text
/// - `market_value`: current market or face value
/// - `loan_balance`: encumbering loan (empty for none)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(default)]
    pub owner: AssetOwner,
    pub kind: AssetKind,
    #[serde(default)]
    pub description: String,
    pub market_value: Decimal,
    pub loan_balance: Option<Decimal>,
}

impl AssetRecord {
    pub fn to_line(&self) -> AssetLine {
        AssetLine::new(
            self.kind,
            self.market_value,
            self.loan_balance.unwrap_or(Decimal::ZERO),
        )
        .with_description(self.description.clone())
    }

    /// Splits records into personal and business summaries.
    pub fn partition(records: &[AssetRecord]) -> (AssetEquitySummary, AssetEquitySummary) {
        let personal = records
            .iter()
            .filter(|r| r.owner == AssetOwner::Personal)
            .map(AssetRecord::to_line)
            .collect();
        let business = records
            .iter()
            .filter(|r| r.owner == AssetOwner::Business)
            .map(AssetRecord::to_line)
            .collect();
        (personal, business)
    }
}

/// Loader for asset schedules kept as CSV.
///
/// ```csv
/// owner,kind,description,market_value,loan_balance
/// personal,bank_account,Checking,5000,
/// personal,real_estate,Residence,100000,60000
/// ```
pub struct AssetScheduleLoader;

impl AssetScheduleLoader {
    /// Parse asset records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<AssetRecord>, AssetScheduleError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: AssetRecord = result?;
            records.push(record);
        }

        tracing::debug!(count = records.len(), "asset schedule parsed");
        Ok(records)
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<AssetRecord>, AssetScheduleError> {
        let file = File::open(path).map_err(|source| AssetScheduleError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}
