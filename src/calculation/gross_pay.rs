//! Gross pay calculation.
//!
//! Gross pay is regular pay for up to the standard period hours, plus
//! overtime at a multiple of the hourly rate, plus allowances. The hourly
//! rate is the monthly salary divided by the standard period hours.
//!
//! Hours worked beyond the standard period are not paid unless they are
//! booked separately as overtime.
//!
//! Amounts that would leave `Decimal`'s range are clamped to its bounds. The
//! audited calculation reports when that happened.

use rust_decimal::Decimal;

use crate::config::PayrollSettings;
use crate::models::{AuditStep, CompensationInput};

use super::arithmetic::ClampedArithmetic;

/// Returns the standard period length in hours (160).
pub fn standard_period_hours() -> Decimal {
    Decimal::new(160, 0)
}

/// Returns the overtime multiplier (1.5).
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// The components of a gross pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Monthly salary divided by the standard period hours.
    pub hourly_rate: Decimal,
    /// Hours paid at the regular rate (hours worked, capped at the standard period).
    pub regular_hours: Decimal,
    /// Hours worked beyond the standard period that earn nothing.
    pub forfeited_hours: Decimal,
    /// Pay for the regular hours.
    pub regular_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Regular pay plus overtime pay plus allowances, unrounded.
    pub gross_pay: Decimal,
    /// Whether any amount exceeded `Decimal`'s range and was clamped.
    pub overflowed: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

struct GrossComponents {
    hourly_rate: Decimal,
    regular_hours: Decimal,
    regular_pay: Decimal,
    overtime_pay: Decimal,
    gross_pay: Decimal,
}

fn gross_components(
    base_monthly_salary: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
    allowances: Decimal,
    settings: &PayrollSettings,
    arithmetic: &mut ClampedArithmetic,
) -> GrossComponents {
    let hourly_rate = arithmetic.div(base_monthly_salary, settings.standard_period_hours);
    let regular_hours = hours_worked.min(settings.standard_period_hours);
    let regular_pay = arithmetic.mul(hourly_rate, regular_hours);
    let overtime_rate = arithmetic.mul(hourly_rate, settings.overtime_multiplier);
    let overtime_pay = arithmetic.mul(overtime_rate, overtime_hours);
    let earned = arithmetic.add(regular_pay, overtime_pay);

    GrossComponents {
        hourly_rate,
        regular_hours,
        regular_pay,
        overtime_pay,
        gross_pay: arithmetic.add(earned, allowances),
    }
}

/// Computes unrounded gross pay with the standard 160-hour period and 1.5x
/// overtime.
///
/// Total over every `Decimal` input. A result beyond the representable range
/// is clamped to `Decimal::MAX` or `Decimal::MIN`; inputs no larger than
/// [`max_input_magnitude`](crate::models::max_input_magnitude) never clamp.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_gross_pay;
/// use rust_decimal::Decimal;
///
/// // $48,000/month -> $300/hour; 160h regular + 10h overtime at $450 + $200 allowances
/// let gross = compute_gross_pay(
///     Decimal::new(48000, 0),
///     Decimal::new(160, 0),
///     Decimal::new(10, 0),
///     Decimal::new(200, 0),
/// );
/// assert_eq!(gross, Decimal::new(52700, 0));
/// ```
pub fn compute_gross_pay(
    base_monthly_salary: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
    allowances: Decimal,
) -> Decimal {
    gross_components(
        base_monthly_salary,
        hours_worked,
        overtime_hours,
        allowances,
        &PayrollSettings::default(),
        &mut ClampedArithmetic::default(),
    )
    .gross_pay
}

/// Calculates gross pay under the given settings and records an audit step.
///
/// Produces the same `gross_pay` as [`compute_gross_pay`] when `settings`
/// is the default.
pub fn calculate_gross_pay(
    input: &CompensationInput,
    settings: &PayrollSettings,
    step_number: u32,
) -> GrossPayResult {
    let mut arithmetic = ClampedArithmetic::default();
    let components = gross_components(
        input.base_monthly_salary,
        input.hours_worked,
        input.overtime_hours,
        input.allowances,
        settings,
        &mut arithmetic,
    );
    let forfeited_hours = arithmetic
        .sub(input.hours_worked, settings.standard_period_hours)
        .max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "base_monthly_salary": input.base_monthly_salary.normalize().to_string(),
            "hours_worked": input.hours_worked.normalize().to_string(),
            "overtime_hours": input.overtime_hours.normalize().to_string(),
            "allowances": input.allowances.normalize().to_string(),
            "standard_period_hours": settings.standard_period_hours.normalize().to_string(),
            "overtime_multiplier": settings.overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": components.hourly_rate.normalize().to_string(),
            "regular_hours": components.regular_hours.normalize().to_string(),
            "forfeited_hours": forfeited_hours.normalize().to_string(),
            "regular_pay": components.regular_pay.normalize().to_string(),
            "overtime_pay": components.overtime_pay.normalize().to_string(),
            "gross_pay": components.gross_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ${} + {}h x ${} x {} + ${} allowances = ${}",
            components.regular_hours.normalize(),
            components.hourly_rate.normalize(),
            input.overtime_hours.normalize(),
            components.hourly_rate.normalize(),
            settings.overtime_multiplier.normalize(),
            input.allowances.normalize(),
            components.gross_pay.normalize()
        ),
    };

    GrossPayResult {
        hourly_rate: components.hourly_rate,
        regular_hours: components.regular_hours,
        forfeited_hours,
        regular_pay: components.regular_pay,
        overtime_pay: components.overtime_pay,
        gross_pay: components.gross_pay,
        overflowed: arithmetic.overflowed(),
        audit_step,
    }
}
