//! Error types shared across the dashboard crates

use std::fmt;
use thiserror::Error;

/// Input field of the analysis form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Ticker,
    Timeframe,
    Quantity,
    StartDate,
    EndDate,
}

impl FormField {
    /// Human-readable field name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ticker => "Ticker",
            Self::Timeframe => "Timeframe",
            Self::Quantity => "Quantity",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form input rejected before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank
    #[error("Please provide all required fields ({0} is missing)")]
    MissingField(FormField),

    /// A date field is not `YYYY-MM-DD`
    #[error("{field} must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidDate { field: FormField, value: String },

    /// The date range is inverted
    #[error("End Date must not be before Start Date")]
    EndBeforeStart,

    /// Quantity is zero or not a number
    #[error("Quantity must be a positive whole number, got {0:?}")]
    InvalidQuantity(String),
}

impl ValidationError {
    /// The field the error refers to, if any
    pub fn field(&self) -> Option<FormField> {
        match self {
            Self::MissingField(field) | Self::InvalidDate { field, .. } => Some(*field),
            Self::EndBeforeStart => Some(FormField::EndDate),
            Self::InvalidQuantity(_) => Some(FormField::Quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::MissingField(FormField::Ticker);
        assert_eq!(
            err.to_string(),
            "Please provide all required fields (Ticker is missing)"
        );
        assert_eq!(err.field(), Some(FormField::Ticker));

        assert_eq!(ValidationError::EndBeforeStart.field(), Some(FormField::EndDate));
    }
}
