//! Net pay calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::arithmetic::ClampedArithmetic;
use super::rounding::round_currency;

/// The result of a net pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// Take-home pay, rounded to cents.
    pub net_pay: Decimal,
    /// Whether the result exceeded `Decimal`'s range and was clamped.
    pub overflowed: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes net pay: gross pay less taxes less deductions, rounded to cents.
///
/// Deductions are taken after tax. The result may be negative when
/// deductions exceed what is left after tax, and is clamped to `Decimal`'s
/// bounds when it falls outside them.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_net_pay;
/// use rust_decimal::Decimal;
///
/// let net = compute_net_pay(
///     Decimal::new(52700, 0),
///     Decimal::new(377000, 2),
///     Decimal::new(100, 0),
/// );
/// assert_eq!(net, Decimal::new(4883000, 2));
/// ```
pub fn compute_net_pay(gross_pay: Decimal, taxes: Decimal, deductions: Decimal) -> Decimal {
    subtract_tax_and_deductions(gross_pay, taxes, deductions, &mut ClampedArithmetic::default())
}

fn subtract_tax_and_deductions(
    gross_pay: Decimal,
    taxes: Decimal,
    deductions: Decimal,
    arithmetic: &mut ClampedArithmetic,
) -> Decimal {
    let after_tax = arithmetic.sub(gross_pay, taxes);
    round_currency(arithmetic.sub(after_tax, deductions))
}

/// Calculates net pay and records an audit step.
pub fn calculate_net_pay(
    gross_pay: Decimal,
    taxes: Decimal,
    deductions: Decimal,
    step_number: u32,
) -> NetPayResult {
    let mut arithmetic = ClampedArithmetic::default();
    let net_pay = subtract_tax_and_deductions(gross_pay, taxes, deductions, &mut arithmetic);

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "taxes": taxes.to_string(),
            "deductions": deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!(
            "${} - ${} tax - ${} deductions = ${}",
            gross_pay.normalize(),
            taxes,
            deductions.normalize(),
            net_pay
        ),
    };

    NetPayResult {
        net_pay,
        overflowed: arithmetic.overflowed(),
        audit_step,
    }
}
