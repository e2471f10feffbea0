//! Analysis form input and the validated request built from it

use crate::enums::Timeframe;
use crate::error::{FormField, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw text state of the analysis form
///
/// Fields are kept as entered; [`AnalysisForm::validate`] turns them into an
/// [`AnalysisRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisForm {
    pub ticker: String,
    pub timeframe: Timeframe,
    pub quantity: String,
    pub start_date: String,
    pub end_date: String,
}

impl AnalysisForm {
    /// Create a form with every field filled in
    pub fn new(
        ticker: impl Into<String>,
        timeframe: Timeframe,
        quantity: u32,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            timeframe,
            quantity: quantity.to_string(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Validate the form and build a request
    ///
    /// Ticker, start and end are required. The ticker is trimmed and
    /// uppercased. A blank quantity defaults to 1.
    pub fn validate(&self) -> Result<AnalysisRequest, ValidationError> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(ValidationError::MissingField(FormField::Ticker));
        }
        let start_raw = self.start_date.trim();
        if start_raw.is_empty() {
            return Err(ValidationError::MissingField(FormField::StartDate));
        }
        let end_raw = self.end_date.trim();
        if end_raw.is_empty() {
            return Err(ValidationError::MissingField(FormField::EndDate));
        }

        let start_date = parse_form_date(FormField::StartDate, start_raw)?;
        let end_date = parse_form_date(FormField::EndDate, end_raw)?;
        if end_date < start_date {
            return Err(ValidationError::EndBeforeStart);
        }

        let quantity_raw = self.quantity.trim();
        let quantity = if quantity_raw.is_empty() {
            1
        } else {
            match quantity_raw.parse::<u32>() {
                Ok(q) if q > 0 => q,
                _ => return Err(ValidationError::InvalidQuantity(quantity_raw.to_string())),
            }
        };

        Ok(AnalysisRequest {
            ticker: ticker.to_ascii_uppercase(),
            timeframe: self.timeframe,
            quantity,
            start_date,
            end_date,
        })
    }
}

fn parse_form_date(field: FormField, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// A validated analysis request, serialized as the backtest request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Uppercased ticker symbol
    pub ticker: String,
    pub timeframe: Timeframe,
    /// Shares bought per buy signal
    pub quantity: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
