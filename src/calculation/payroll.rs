//! Full payroll calculation: gross pay, then tax, then net pay.
//!
//! Tax and net pay are computed from the *unrounded* gross pay. Only the
//! gross pay reported back to the caller is rounded, after the other two
//! figures have been derived from it.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::models::{AuditTrace, AuditWarning, CompensationInput, PayrollBreakdown};

use super::gross_pay::{calculate_gross_pay, compute_gross_pay};
use super::net_pay::{calculate_net_pay, compute_net_pay};
use super::rounding::round_currency;
use super::tax::{calculate_tax, compute_tax};

/// Warning raised when hours worked exceed the standard period and the excess is unpaid.
pub const WARNING_HOURS_FORFEITED: &str = "HOURS_FORFEITED";
/// Warning raised for each negative input field.
pub const WARNING_NEGATIVE_INPUT: &str = "NEGATIVE_INPUT";
/// Warning raised when net pay comes out below zero.
pub const WARNING_NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";
/// Warning raised when an amount exceeded `Decimal`'s range and was clamped.
pub const WARNING_AMOUNT_OUT_OF_RANGE: &str = "AMOUNT_OUT_OF_RANGE";

/// A payroll breakdown together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct PayrollCalculation {
    /// The gross/tax/net figures.
    pub breakdown: PayrollBreakdown,
    /// Every rule applied, plus any warnings.
    pub audit_trace: AuditTrace,
}

/// Computes gross pay, tax and net pay for one period under the standard
/// configuration.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll_breakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_payroll_breakdown(
///     Decimal::new(48000, 0),
///     Decimal::new(160, 0),
///     Decimal::new(10, 0),
///     Decimal::new(200, 0),
///     Decimal::new(100, 0),
/// );
/// assert_eq!(breakdown.gross_pay.to_string(), "52700.00");
/// assert_eq!(breakdown.taxes.to_string(), "3770.00");
/// assert_eq!(breakdown.net_pay.to_string(), "48830.00");
/// ```
pub fn compute_payroll_breakdown(
    base_monthly_salary: Decimal,
    hours_worked: Decimal,
    overtime_hours: Decimal,
    allowances: Decimal,
    deductions: Decimal,
) -> PayrollBreakdown {
    let gross_pay =
        compute_gross_pay(base_monthly_salary, hours_worked, overtime_hours, allowances);
    let taxes = compute_tax(gross_pay);
    let net_pay = compute_net_pay(gross_pay, taxes, deductions);

    PayrollBreakdown {
        gross_pay: round_currency(gross_pay),
        taxes,
        net_pay,
    }
}

/// Calculates a payroll breakdown under `config`, recording an audit trace.
///
/// Never fails or panics. Suspicious input (negative values, unpaid hours
/// beyond the standard period, negative net pay, amounts clamped to
/// `Decimal`'s bounds) is reported as warnings on the trace.
pub fn calculate_payroll(input: &CompensationInput, config: &PayrollConfig) -> PayrollCalculation {
    let start_time = Instant::now();
    let mut warnings = Vec::new();

    for field in input.negative_fields() {
        warnings.push(AuditWarning::new(
            WARNING_NEGATIVE_INPUT,
            format!("Input '{}' is negative", field),
            "high",
        ));
    }

    let gross = calculate_gross_pay(input, config.settings(), 1);
    if gross.forfeited_hours > Decimal::ZERO {
        warnings.push(AuditWarning::new(
            WARNING_HOURS_FORFEITED,
            format!(
                "{} hours beyond the {}-hour standard period are unpaid unless booked as overtime",
                gross.forfeited_hours.normalize(),
                config.settings().standard_period_hours.normalize()
            ),
            "medium",
        ));
    }

    let tax = calculate_tax(gross.gross_pay, config.tax(), 2);
    let net = calculate_net_pay(gross.gross_pay, tax.taxes, input.deductions, 3);
    if net.net_pay < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            WARNING_NEGATIVE_NET_PAY,
            format!("Net pay is negative (${})", net.net_pay),
            "high",
        ));
    }
    if gross.overflowed || tax.overflowed || net.overflowed {
        warnings.push(AuditWarning::new(
            WARNING_AMOUNT_OUT_OF_RANGE,
            "An amount exceeded the representable range and was clamped",
            "high",
        ));
    }

    let breakdown = PayrollBreakdown {
        gross_pay: round_currency(gross.gross_pay),
        taxes: tax.taxes,
        net_pay: net.net_pay,
    };

    PayrollCalculation {
        breakdown,
        audit_trace: AuditTrace {
            steps: vec![gross.audit_step, tax.audit_step, net.audit_step],
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineMetadata, PayrollSettings, TaxSchedule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(
        salary: &str,
        hours: &str,
        overtime: &str,
        allowances: &str,
        deductions: &str,
    ) -> CompensationInput {
        CompensationInput {
            base_monthly_salary: dec(salary),
            hours_worked: dec(hours),
            overtime_hours: dec(overtime),
            allowances: dec(allowances),
            deductions: dec(deductions),
        }
    }

    #[test]
    fn test_worked_example() {
        let breakdown = compute_payroll_breakdown(
            dec("48000"),
            dec("160"),
            dec("10"),
            dec("200"),
            dec("100"),
        );

        assert_eq!(breakdown.gross_pay, dec("52700.00"));
        assert_eq!(breakdown.taxes, dec("3770.00"));
        assert_eq!(breakdown.net_pay, dec("48830.00"));
    }

    #[test]
    fn test_tax_uses_unrounded_gross_pay() {
        // 100.096 * 0.05 = 5.0048 -> 5.00; taxing the rounded 100.10 would give 5.01
        let breakdown =
            compute_payroll_breakdown(dec("0"), dec("0"), dec("0"), dec("100.096"), dec("0"));

        assert_eq!(breakdown.gross_pay, dec("100.10"));
        assert_eq!(breakdown.taxes, dec("5.00"));
        // 100.096 - 5.00 = 95.096
        assert_eq!(breakdown.net_pay, dec("95.10"));
    }

    #[test]
    fn test_net_pay_uses_unrounded_gross_pay() {
        // 1000.004 - 50.00 - 0.009 = 949.995 -> 950.00; from the rounded
        // gross it would be 1000.00 - 50.00 - 0.009 = 949.991 -> 949.99
        let breakdown =
            compute_payroll_breakdown(dec("0"), dec("0"), dec("0"), dec("1000.004"), dec("0.009"));

        assert_eq!(breakdown.gross_pay, dec("1000.00"));
        assert_eq!(breakdown.taxes, dec("50.00"));
        assert_eq!(breakdown.net_pay, dec("950.00"));
    }

    #[test]
    fn test_breakdown_is_idempotent() {
        let first = compute_payroll_breakdown(
            dec("61234.56"),
            dec("171.5"),
            dec("7.25"),
            dec("410.10"),
            dec("88.88"),
        );
        let second = compute_payroll_breakdown(
            dec("61234.56"),
            dec("171.5"),
            dec("7.25"),
            dec("410.10"),
            dec("88.88"),
        );
        assert_eq!(first, second);
        assert_eq!(first.gross_pay.to_string(), second.gross_pay.to_string());
    }

    #[test]
    fn test_calculate_payroll_matches_compute_with_default_config() {
        let input = create_input("61234.56", "171.5", "7.25", "410.10", "88.88");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        let expected = compute_payroll_breakdown(
            input.base_monthly_salary,
            input.hours_worked,
            input.overtime_hours,
            input.allowances,
            input.deductions,
        );
        assert_eq!(calculation.breakdown, expected);
    }

    #[test]
    fn test_calculate_payroll_records_three_steps_in_order() {
        let input = create_input("48000", "160", "10", "200", "100");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        let rule_ids: Vec<&str> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(rule_ids, vec!["gross_pay", "progressive_tax", "net_pay"]);

        let step_numbers: Vec<u32> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
        assert!(calculation.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_forfeited_hours_warns_without_changing_pay() {
        let input = create_input("48000", "170", "0", "0", "0");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        assert!(calculation.audit_trace.has_warning(WARNING_HOURS_FORFEITED));
        assert_eq!(calculation.breakdown.gross_pay, dec("48000.00"));
    }

    #[test]
    fn test_negative_inputs_warn_but_still_calculate() {
        let input = create_input("-16000", "160", "0", "0", "-5");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        let negative_warnings = calculation
            .audit_trace
            .warnings
            .iter()
            .filter(|w| w.code == WARNING_NEGATIVE_INPUT)
            .count();
        assert_eq!(negative_warnings, 2);
        assert_eq!(calculation.breakdown.gross_pay, dec("-16000.00"));
        assert_eq!(calculation.breakdown.taxes, dec("-800.00"));
    }

    #[test]
    fn test_negative_net_pay_warns() {
        let input = create_input("1600", "160", "0", "0", "5000");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        assert!(calculation.audit_trace.has_warning(WARNING_NEGATIVE_NET_PAY));
        // 1600 - 80 - 5000
        assert_eq!(calculation.breakdown.net_pay, dec("-3480.00"));
    }

    #[test]
    fn test_overflowing_inputs_do_not_panic() {
        let breakdown = compute_payroll_breakdown(
            dec("1000000000000000000000"),
            dec("160"),
            dec("100000000000"),
            dec("0"),
            dec("0"),
        );

        assert_eq!(breakdown.gross_pay, Decimal::MAX);
        assert_eq!(breakdown.taxes, compute_tax(Decimal::MAX));
        assert_eq!(breakdown.net_pay, compute_net_pay(Decimal::MAX, breakdown.taxes, dec("0")));
    }

    #[test]
    fn test_clamped_amounts_are_warned() {
        let input = create_input("1000000000000000000000", "160", "100000000000", "0", "0");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        assert!(calculation.audit_trace.has_warning(WARNING_AMOUNT_OUT_OF_RANGE));
        assert_eq!(calculation.audit_trace.steps.len(), 3);
        assert_eq!(
            calculation.breakdown,
            compute_payroll_breakdown(
                input.base_monthly_salary,
                input.hours_worked,
                input.overtime_hours,
                input.allowances,
                input.deductions,
            )
        );
    }

    #[test]
    fn test_extreme_deductions_are_warned() {
        let input = create_input("48000", "160", "0", "0", "-79228162514264337593543950335");
        let calculation = calculate_payroll(&input, &PayrollConfig::default());

        assert!(calculation.audit_trace.has_warning(WARNING_AMOUNT_OUT_OF_RANGE));
        assert_eq!(calculation.breakdown.net_pay, Decimal::MAX);
    }

    #[test]
    fn test_calculate_payroll_with_custom_config() {
        let config = PayrollConfig::new(
            EngineMetadata::default(),
            PayrollSettings {
                standard_period_hours: dec("100"),
                overtime_multiplier: dec("2"),
            },
            TaxSchedule::standard(),
        );
        let input = create_input("10000", "100", "5", "0", "0");
        let calculation = calculate_payroll(&input, &config);

        // 100/h; 10000 + 5 * 200 = 11000; tax 550
        assert_eq!(calculation.breakdown.gross_pay, dec("11000.00"));
        assert_eq!(calculation.breakdown.taxes, dec("550.00"));
        assert_eq!(calculation.breakdown.net_pay, dec("10450.00"));
    }
}
