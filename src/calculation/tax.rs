//! Progressive tax calculation.
//!
//! Each bracket's marginal rate applies only to the part of gross pay that
//! falls inside that bracket. The sum is rounded to cents once, at the end.
//!
//! Gross pay below zero is taxed at the first bracket's rate, which yields a
//! negative tax figure. The calculator does not reject such input.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::AuditStep;

use super::arithmetic::ClampedArithmetic;
use super::rounding::round_currency;

/// The result of a tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// Tax liability, rounded to cents.
    pub taxes: Decimal,
    /// Tax liability before rounding.
    pub unrounded_taxes: Decimal,
    /// Index of the bracket the gross pay falls in.
    pub bracket_index: usize,
    /// Marginal rate of that bracket.
    pub marginal_rate: Decimal,
    /// Whether any amount exceeded `Decimal`'s range and was clamped.
    pub overflowed: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn progressive_tax(
    gross_pay: Decimal,
    schedule: &TaxSchedule,
    arithmetic: &mut ClampedArithmetic,
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for (index, bracket) in schedule.brackets().iter().enumerate() {
        if index > 0 && gross_pay <= bracket.lower {
            break;
        }
        let top = bracket.upper.map_or(gross_pay, |upper| gross_pay.min(upper));
        let taxable = arithmetic.sub(top, bracket.lower);
        let bracket_tax = arithmetic.mul(taxable, bracket.rate);
        tax = arithmetic.add(tax, bracket_tax);
    }
    tax
}

/// Computes tax on `gross_pay` under the standard schedule, rounded to cents
/// half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_tax(Decimal::new(30000, 0)), Decimal::new(150000, 2));
/// assert_eq!(compute_tax(Decimal::new(52700, 0)), Decimal::new(377000, 2));
/// ```
pub fn compute_tax(gross_pay: Decimal) -> Decimal {
    compute_tax_with_schedule(gross_pay, &TaxSchedule::standard())
}

/// Computes tax on `gross_pay` under `schedule`, rounded to cents.
///
/// Rates above 100% can push the tax past `Decimal`'s range; it is then
/// clamped to the nearest bound.
pub fn compute_tax_with_schedule(gross_pay: Decimal, schedule: &TaxSchedule) -> Decimal {
    round_currency(progressive_tax(
        gross_pay,
        schedule,
        &mut ClampedArithmetic::default(),
    ))
}

/// Calculates tax under `schedule` and records an audit step.
pub fn calculate_tax(gross_pay: Decimal, schedule: &TaxSchedule, step_number: u32) -> TaxResult {
    let mut arithmetic = ClampedArithmetic::default();
    let unrounded_taxes = progressive_tax(gross_pay, schedule, &mut arithmetic);
    let taxes = round_currency(unrounded_taxes);
    let bracket_index = schedule.bracket_index(gross_pay);
    let bracket = &schedule.brackets()[bracket_index];
    let marginal_rate = bracket.rate;
    let rate_percent = marginal_rate.saturating_mul(Decimal::ONE_HUNDRED).normalize();

    let reasoning = if bracket_index == 0 {
        format!(
            "{}% of ${} = ${}",
            rate_percent,
            gross_pay.normalize(),
            taxes
        )
    } else {
        let lower_brackets_tax = progressive_tax(bracket.lower, schedule, &mut arithmetic);
        format!(
            "${} on the first ${} + {}% of ${} = ${}",
            lower_brackets_tax.normalize(),
            bracket.lower.normalize(),
            rate_percent,
            gross_pay.saturating_sub(bracket.lower).normalize(),
            taxes
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "progressive_tax".to_string(),
        rule_name: "Progressive Tax".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket": bracket_index + 1,
            "marginal_rate": marginal_rate.normalize().to_string(),
            "unrounded_taxes": unrounded_taxes.normalize().to_string(),
            "taxes": taxes.to_string()
        }),
        reasoning,
    };

    TaxResult {
        taxes,
        unrounded_taxes,
        bracket_index,
        marginal_rate,
        overflowed: arithmetic.overflowed(),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bracket_boundaries_are_exact() {
        assert_eq!(compute_tax(dec("30000")), dec("1500.00"));
        assert_eq!(compute_tax(dec("60000")), dec("4500.00"));
        assert_eq!(compute_tax(dec("100000")), dec("10500.00"));
    }

    #[test]
    fn test_zero_gross_pay_has_zero_tax() {
        assert_eq!(compute_tax(Decimal::ZERO), dec("0.00"));
    }

    #[test]
    fn test_first_bracket_is_flat_five_percent() {
        assert_eq!(compute_tax(dec("20000")), dec("1000.00"));
    }

    #[test]
    fn test_second_bracket_only_taxes_the_excess_at_ten_percent() {
        // 1500 + 22700 * 0.10
        assert_eq!(compute_tax(dec("52700")), dec("3770.00"));
    }

    #[test]
    fn test_third_bracket() {
        // 4500 + 20000 * 0.15
        assert_eq!(compute_tax(dec("80000")), dec("7500.00"));
    }

    #[test]
    fn test_top_bracket() {
        // 10500 + 50000 * 0.20
        assert_eq!(compute_tax(dec("150000")), dec("20500.00"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 100.10 * 0.05 = 5.005
        assert_eq!(compute_tax(dec("100.10")), dec("5.01"));
        // 100.30 * 0.05 = 5.015
        assert_eq!(compute_tax(dec("100.30")), dec("5.02"));
    }

    #[test]
    fn test_negative_gross_pay_taxed_at_first_rate() {
        assert_eq!(compute_tax(dec("-1000")), dec("-50.00"));
    }

    #[test]
    fn test_result_has_two_decimal_places() {
        assert_eq!(compute_tax(dec("30000")).to_string(), "1500.00");
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = TaxSchedule::new(vec![
            TaxBracket {
                lower: dec("0"),
                upper: Some(dec("1000")),
                rate: dec("0"),
            },
            TaxBracket {
                lower: dec("1000"),
                upper: None,
                rate: dec("0.5"),
            },
        ])
        .unwrap();

        assert_eq!(compute_tax_with_schedule(dec("999"), &schedule), dec("0.00"));
        assert_eq!(compute_tax_with_schedule(dec("3000"), &schedule), dec("1000.00"));
    }

    #[test]
    fn test_extreme_gross_pay_does_not_overflow_standard_schedule() {
        // 1500 + 3000 + 6000 + (MAX - 100000) * 0.20
        let expected = dec("10500") + (Decimal::MAX - dec("100000")) * dec("0.20");
        assert_eq!(compute_tax(Decimal::MAX), round_currency(expected));
        assert_eq!(compute_tax(Decimal::MIN), round_currency(Decimal::MIN * dec("0.05")));

        let result = calculate_tax(Decimal::MAX, &TaxSchedule::standard(), 2);
        assert!(!result.overflowed);
        assert_eq!(result.bracket_index, 3);
    }

    #[test]
    fn test_rate_above_one_clamps_instead_of_panicking() {
        let schedule = TaxSchedule::new(vec![TaxBracket {
            lower: dec("0"),
            upper: None,
            rate: dec("3"),
        }])
        .unwrap();

        assert_eq!(compute_tax_with_schedule(Decimal::MAX, &schedule), Decimal::MAX);

        let result = calculate_tax(Decimal::MAX, &schedule, 2);
        assert!(result.overflowed);
        assert_eq!(result.taxes, Decimal::MAX);
        assert_eq!(
            result.audit_step.reasoning,
            format!("300% of ${} = ${}", Decimal::MAX, Decimal::MAX)
        );
    }

    #[test]
    fn test_calculate_tax_matches_compute_tax() {
        for gross in ["0", "12345.678", "30000", "45000.5", "99999.99", "250000"] {
            let result = calculate_tax(dec(gross), &TaxSchedule::standard(), 1);
            assert_eq!(result.taxes, compute_tax(dec(gross)), "gross {}", gross);
        }
    }

    #[test]
    fn test_calculate_tax_reports_bracket() {
        let result = calculate_tax(dec("52700"), &TaxSchedule::standard(), 2);

        assert_eq!(result.bracket_index, 1);
        assert_eq!(result.marginal_rate, dec("0.10"));
        assert_eq!(result.unrounded_taxes, dec("3770"));
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "progressive_tax");
        assert_eq!(result.audit_step.output["bracket"], 2);
        assert_eq!(result.audit_step.output["taxes"], "3770.00");
        assert_eq!(
            result.audit_step.reasoning,
            "$1500 on the first $30000 + 10% of $22700 = $3770.00"
        );
    }

    #[test]
    fn test_calculate_tax_first_bracket_reasoning() {
        let result = calculate_tax(dec("20000"), &TaxSchedule::standard(), 1);
        assert_eq!(result.audit_step.reasoning, "5% of $20000 = $1000.00");
    }
}
