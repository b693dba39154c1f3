//! Type coercion of raw form fields.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// Field must be present and parse as an integer.
    pub fn required_int(field: &str, raw: Option<&str>) -> Result<i64, AppError> {
        raw.unwrap_or("")
            .parse()
            .map_err(|_| AppError::invalid_format(field))
    }

    /// Absent or empty is `None`; anything else must parse as an integer.
    pub fn optional_int(field: &str, raw: Option<&str>) -> Result<Option<i64>, AppError> {
        match raw {
            None | Some("") => Ok(None),
            Some(s) => Self::required_int(field, Some(s)).map(Some),
        }
    }

    /// Empty strings count as not supplied.
    pub fn optional_text(raw: Option<String>) -> Option<String> {
        raw.filter(|s| !s.is_empty())
    }
}
