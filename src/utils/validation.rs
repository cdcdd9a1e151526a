use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a whole, non-negative number of cents
///
/// # Errors
///
/// Returns an error if the string is empty, negative, fractional, not a number,
/// or does not fit in a `u32`.
pub fn parse_amount(amount: &str) -> Result<u32, UtilsError> {
    debug!("Parsing amount: '{}'", amount);

    let trimmed = amount.trim();
    if trimmed.is_empty() {
        warn!("Amount is empty");
        return Err(UtilsError::EmptyAmount);
    }

    if let Some(rest) = trimmed.strip_prefix('-')
        && !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit())
    {
        warn!("Amount is negative: '{}'", trimmed);
        return Err(UtilsError::NegativeAmount(trimmed.to_string()));
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        warn!("Amount contains non-digit characters: '{}'", trimmed);
        return Err(UtilsError::InvalidAmount(trimmed.to_string()));
    }

    let cents = trimmed
        .parse::<u32>()
        .map_err(|_| UtilsError::InvalidAmount(trimmed.to_string()))?;
    debug!("Parsed '{}' as {} cents", trimmed, cents);
    Ok(cents)
}

/// # Errors
///
/// Returns an error if the amount is negative or does not fit in a `u32`.
pub fn validate_amount(cents: i64) -> Result<u32, UtilsError> {
    if cents < 0 {
        warn!("Amount is negative: {}", cents);
        return Err(UtilsError::NegativeAmount(cents.to_string()));
    }

    u32::try_from(cents).map_err(|_| {
        warn!("Amount does not fit in u32: {}", cents);
        UtilsError::AmountOverflow(cents)
    })
}
