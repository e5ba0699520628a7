use std::str::FromStr;

use crate::error::{CollegeHubError, Result};

/// Treat a missing or empty query value as absent.
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/**
 * Parse an optional query parameter
 *
 * # Arguments
 * @param name: &str - Parameter name, used in the error message
 * @param raw: Option<&str> - The raw value; empty counts as absent
 *
 * # Returns
 * @return Result<Option<T>> - The parsed value, or a validation error if it is malformed
 */
pub fn parse_param<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| CollegeHubError::Validation(format!("Invalid {} provided", name))),
    }
}

/// Like [`parse_param`] for decimals, also rejecting `NaN` and infinities.
pub fn parse_number(name: &str, raw: Option<&str>) -> Result<Option<f64>> {
    match parse_param::<f64>(name, raw)? {
        Some(value) if !value.is_finite() => Err(CollegeHubError::Validation(format!(
            "Invalid {} provided",
            name
        ))),
        parsed => Ok(parsed),
    }
}

/// A required, finite score.
pub fn parse_score(raw: Option<&str>) -> Result<f64> {
    parse_number("score", raw)?
        .ok_or_else(|| CollegeHubError::Validation("Invalid score provided".to_string()))
}

/**
 * Parse a comma separated list of identifiers, e.g. `1,2,5`
 *
 * # Arguments
 * @param raw: &str - The raw list
 *
 * # Returns
 * @return Result<Vec<i32>> - The identifiers in the given order
 */
pub fn parse_id_list(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>().map_err(|_| {
                CollegeHubError::Validation(format!("Invalid college id provided: {}", part))
            })
        })
        .collect()
}
