use crate::form::error::FormError;
use crate::form::error::FormError::InvalidNumericInput;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a number typed by the user.
/// Blank, non-numeric and negative inputs are rejected rather than read as zero.
pub fn parse_non_negative(input: &str) -> Result<Decimal, FormError> {
    let value = Decimal::from_str(input.trim()).map_err(|_| {
        debug!("Rejected non-numeric input [{input}]");
        InvalidNumericInput(input.to_owned())
    })?;

    if value.is_sign_negative() && !value.is_zero() {
        debug!("Rejected negative input [{input}]");
        return Err(InvalidNumericInput(input.to_owned()));
    }

    Ok(value)
}
