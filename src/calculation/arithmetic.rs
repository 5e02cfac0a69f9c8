//! Overflow-aware decimal arithmetic.
//!
//! The `Decimal` operators panic once a result leaves the representable
//! range (about ±7.9e28). The calculator clamps to `Decimal::MAX` or
//! `Decimal::MIN` instead and remembers that it had to.

use rust_decimal::Decimal;

/// Clamping arithmetic that records whether any operation overflowed.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ClampedArithmetic {
    overflowed: bool,
}

impl ClampedArithmetic {
    pub(crate) fn add(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_add(b).unwrap_or_else(|| self.clamp(a.saturating_add(b)))
    }

    pub(crate) fn sub(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_sub(b).unwrap_or_else(|| self.clamp(a.saturating_sub(b)))
    }

    pub(crate) fn mul(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_mul(b).unwrap_or_else(|| self.clamp(a.saturating_mul(b)))
    }

    /// Division by zero clamps like an overflow, with zero over zero giving zero.
    pub(crate) fn div(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_div(b).unwrap_or_else(|| {
            let bound = if a.is_zero() {
                Decimal::ZERO
            } else if a.is_sign_negative() == b.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            };
            self.clamp(bound)
        })
    }

    /// True once any operation has been clamped.
    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }

    fn clamp(&mut self, bound: Decimal) -> Decimal {
        self.overflowed = true;
        bound
    }
}
