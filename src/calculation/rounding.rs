//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places currency amounts are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half away from zero.
///
/// The result always carries exactly two decimal places, so `52700` becomes
/// `52700.00`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("5.005").unwrap()).to_string(), "5.01");
/// assert_eq!(round_currency(Decimal::from_str("-5.005").unwrap()).to_string(), "-5.01");
/// assert_eq!(round_currency(Decimal::new(52700, 0)).to_string(), "52700.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
