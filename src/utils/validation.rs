// file: src/utils/validation.rs
// description: input validation for configuration and search parameters
// reference: input validation patterns

use crate::error::{CorpusError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"^-?\d{1,4}$").expect("YEAR regex is valid");
}

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CorpusError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Year bounds end up verbatim inside the filter clause, so only plain
    /// integers are accepted.
    pub fn validate_year(year: &str) -> Result<()> {
        if !YEAR.is_match(year) {
            return Err(CorpusError::Validation(format!(
                "Year must be an integer, got {:?}",
                year
            )));
        }
        Ok(())
    }

    pub fn validate_context(window: usize, include_match: bool) -> Result<()> {
        if window == 0 && !include_match {
            return Err(CorpusError::Validation(
                "Window must be at least 1 when the match is excluded".to_string(),
            ));
        }
        Ok(())
    }
}
