//! The ordered charge stack
//!
//! Each charge is a pure step from running total to running total. Order
//! is semantic: the service-charge threshold reads the VAT-exclusive
//! total left by the steps before it, and the payment-processing fee is
//! a percentage of the full running payable including all prior VAT.

use planpass_core::Passport;
use rust_decimal::Decimal;

use crate::keys;
use crate::options::{FeeConfig, FeeOptions};

/// One recorded fee line: the amount and the VAT charged on it
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Passport key of the line item (`application.fee.*`)
    pub key: &'static str,
    /// VAT-exclusive amount
    pub amount: Decimal,
    /// VAT charged on the amount
    pub vat: Decimal,
}

/// The accumulating totals threaded through the charge stack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningTotal {
    /// Total owed so far, VAT-inclusive
    pub payable: Decimal,
    /// VAT portion of `payable`
    pub payable_vat: Decimal,
    /// Line items recorded by the steps that applied
    pub lines: Vec<LineItem>,
}

impl RunningTotal {
    /// Seed the stack from the calculated base fee
    pub fn seed(calculated: Decimal) -> Self {
        Self {
            payable: calculated,
            payable_vat: Decimal::ZERO,
            lines: Vec::new(),
        }
    }

    /// The running total net of all VAT added so far
    pub fn vat_exclusive(&self) -> Decimal {
        self.payable - self.payable_vat
    }
}

/// Shared inputs read by every charge step
#[derive(Debug, Clone, Copy)]
pub struct ChargeContext<'a> {
    pub passport: &'a Passport,
    pub options: &'a FeeOptions,
    pub config: &'a FeeConfig,
    /// The seeded base fee (VAT on it is charged by the first step)
    pub calculated: Decimal,
}

/// A charge descriptor in the fee stack.
///
/// Every unmet precondition is a silent no-op for that step: absence of
/// a precondition is a valid steady state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// VAT on the calculated base fee
    CalculatedVat,
    /// Fast-track surcharge, gated on the user's opt-in
    FastTrack,
    /// Service charge, gated on the VAT-exclusive running total
    ServiceCharge,
    /// Percentage processing fee over the whole running payable
    PaymentProcessing,
}

/// The fixed stacking order
pub const CHARGE_ORDER: [Charge; 4] = [
    Charge::CalculatedVat,
    Charge::FastTrack,
    Charge::ServiceCharge,
    Charge::PaymentProcessing,
];

impl Charge {
    /// Apply this charge to the running total, returning the new total
    pub fn apply(&self, ctx: &ChargeContext<'_>, mut total: RunningTotal) -> RunningTotal {
        match self {
            Charge::CalculatedVat => {
                if !ctx.options.apply_calculated_vat || ctx.calculated <= Decimal::ZERO {
                    return total;
                }
                let vat = ctx.config.vat_of(ctx.calculated);
                total.payable += vat;
                total.payable_vat += vat;
                total.lines.push(LineItem {
                    key: keys::CALCULATED,
                    amount: ctx.calculated,
                    vat,
                });
                total
            }

            Charge::FastTrack => {
                let amount = match ctx.options.fast_track_fee_amount {
                    Some(a) if a > Decimal::ZERO => a,
                    _ => return total,
                };
                if !fast_track_opted_in(ctx.passport) {
                    return total;
                }
                let vat = ctx.config.vat_of(amount);
                total.payable += amount + vat;
                total.payable_vat += vat;
                total.lines.push(LineItem {
                    key: keys::FAST_TRACK,
                    amount,
                    vat,
                });
                total
            }

            Charge::ServiceCharge => {
                if !ctx.options.apply_service_charge {
                    return total;
                }
                let amount = match ctx.options.service_charge_amount {
                    Some(a) if a > Decimal::ZERO => a,
                    _ => return total,
                };
                if total.vat_exclusive() < ctx.config.service_charge_threshold {
                    return total;
                }
                let vat = ctx.config.vat_of(amount);
                total.payable += amount + vat;
                total.payable_vat += vat;
                total.lines.push(LineItem {
                    key: keys::SERVICE_CHARGE,
                    amount,
                    vat,
                });
                total
            }

            Charge::PaymentProcessing => {
                if !ctx.options.apply_payment_processing_fee {
                    return total;
                }
                // No payable base: a valid steady state, not an error
                if total.payable <= Decimal::ZERO {
                    return total;
                }
                let fee = total.payable * ctx.config.payment_processing_rate;
                let vat = ctx.config.vat_of(fee);
                total.payable += fee + vat;
                total.payable_vat += vat;
                total.lines.push(LineItem {
                    key: keys::PAYMENT_PROCESSING,
                    amount: fee,
                    vat,
                });
                total
            }
        }
    }
}

/// Whether the passport records the user's fast-track opt-in.
///
/// The flow stores the answer either as the scalar `"true"` or as a
/// single-element granular array.
fn fast_track_opted_in(passport: &Passport) -> bool {
    passport
        .get(keys::FAST_TRACK_OPT_IN)
        .map(|value| {
            value.matches_scalar("true")
                || value
                    .as_array()
                    .map(|elements| elements.iter().any(|e| e == "true"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planpass_core::Value;
    use rust_decimal_macros::dec;

    fn ctx<'a>(
        passport: &'a Passport,
        options: &'a FeeOptions,
        config: &'a FeeConfig,
        calculated: Decimal,
    ) -> ChargeContext<'a> {
        ChargeContext {
            passport,
            options,
            config,
            calculated,
        }
    }

    #[test]
    fn test_calculated_vat_adds_to_both_totals() {
        let passport = Passport::new();
        let options = FeeOptions {
            apply_calculated_vat: true,
            ..Default::default()
        };
        let config = FeeConfig::default();

        let total = Charge::CalculatedVat.apply(
            &ctx(&passport, &options, &config, dec!(200)),
            RunningTotal::seed(dec!(200)),
        );

        assert_eq!(total.payable, dec!(240));
        assert_eq!(total.payable_vat, dec!(40));
        assert_eq!(total.lines.len(), 1);
        assert_eq!(total.lines[0].amount, dec!(200));
        assert_eq!(total.lines[0].vat, dec!(40));
    }

    #[test]
    fn test_fast_track_requires_opt_in() {
        let options = FeeOptions {
            fast_track_fee_amount: Some(dec!(150)),
            ..Default::default()
        };
        let config = FeeConfig::default();

        let no_opt_in = Passport::new();
        let total = Charge::FastTrack.apply(
            &ctx(&no_opt_in, &options, &config, dec!(200)),
            RunningTotal::seed(dec!(200)),
        );
        assert_eq!(total, RunningTotal::seed(dec!(200)));

        let mut opted_in = Passport::new();
        opted_in.insert(keys::FAST_TRACK_OPT_IN, vec!["true".to_string()]);
        let total = Charge::FastTrack.apply(
            &ctx(&opted_in, &options, &config, dec!(200)),
            RunningTotal::seed(dec!(200)),
        );
        assert_eq!(total.payable, dec!(380));
        assert_eq!(total.payable_vat, dec!(30));
    }

    #[test]
    fn test_fast_track_requires_positive_amount() {
        let mut passport = Passport::new();
        passport.insert(keys::FAST_TRACK_OPT_IN, Value::from("true"));
        let config = FeeConfig::default();

        for amount in [None, Some(Decimal::ZERO)] {
            let options = FeeOptions {
                fast_track_fee_amount: amount,
                ..Default::default()
            };
            let total = Charge::FastTrack.apply(
                &ctx(&passport, &options, &config, dec!(200)),
                RunningTotal::seed(dec!(200)),
            );
            assert!(total.lines.is_empty());
        }
    }

    #[test]
    fn test_service_charge_gated_on_vat_exclusive_total() {
        let passport = Passport::new();
        let options = FeeOptions {
            apply_service_charge: true,
            service_charge_amount: Some(dec!(40)),
            ..Default::default()
        };
        let config = FeeConfig::default();

        // Below the threshold: no-op even though requested
        let total = Charge::ServiceCharge.apply(
            &ctx(&passport, &options, &config, dec!(99)),
            RunningTotal::seed(dec!(99)),
        );
        assert!(total.lines.is_empty());

        // At the threshold: applies
        let total = Charge::ServiceCharge.apply(
            &ctx(&passport, &options, &config, dec!(100)),
            RunningTotal::seed(dec!(100)),
        );
        assert_eq!(total.payable, dec!(148));
        assert_eq!(total.payable_vat, dec!(8));
    }

    #[test]
    fn test_service_charge_threshold_ignores_prior_vat() {
        // Payable 112 of which 22 is VAT: exclusive total 90 < 100
        let passport = Passport::new();
        let options = FeeOptions {
            apply_service_charge: true,
            service_charge_amount: Some(dec!(40)),
            ..Default::default()
        };
        let config = FeeConfig::default();

        let seeded = RunningTotal {
            payable: dec!(112),
            payable_vat: dec!(22),
            lines: Vec::new(),
        };
        let total = Charge::ServiceCharge.apply(
            &ctx(&passport, &options, &config, dec!(90)),
            seeded.clone(),
        );
        assert_eq!(total, seeded);
    }

    #[test]
    fn test_payment_processing_reads_running_payable() {
        let passport = Passport::new();
        let options = FeeOptions {
            apply_payment_processing_fee: true,
            ..Default::default()
        };
        let config = FeeConfig::default();

        let seeded = RunningTotal {
            payable: dec!(468),
            payable_vat: dec!(78),
            lines: Vec::new(),
        };
        let total =
            Charge::PaymentProcessing.apply(&ctx(&passport, &options, &config, dec!(200)), seeded);

        assert_eq!(total.payable, dec!(473.616));
        assert_eq!(total.payable_vat, dec!(78.936));
        assert_eq!(total.lines[0].amount, dec!(4.68));
        assert_eq!(total.lines[0].vat, dec!(0.936));
    }

    #[test]
    fn test_payment_processing_skips_zero_base() {
        let passport = Passport::new();
        let options = FeeOptions {
            apply_payment_processing_fee: true,
            ..Default::default()
        };
        let config = FeeConfig::default();

        let total = Charge::PaymentProcessing.apply(
            &ctx(&passport, &options, &config, Decimal::ZERO),
            RunningTotal::seed(Decimal::ZERO),
        );
        assert_eq!(total, RunningTotal::seed(Decimal::ZERO));
    }

    #[test]
    fn test_opt_in_scalar_and_array_forms() {
        let mut scalar = Passport::new();
        scalar.insert(keys::FAST_TRACK_OPT_IN, Value::from("true"));
        assert!(fast_track_opted_in(&scalar));

        let mut array = Passport::new();
        array.insert(keys::FAST_TRACK_OPT_IN, vec!["true".to_string()]);
        assert!(fast_track_opted_in(&array));

        let mut declined = Passport::new();
        declined.insert(keys::FAST_TRACK_OPT_IN, Value::from("false"));
        assert!(!fast_track_opted_in(&declined));

        assert!(!fast_track_opted_in(&Passport::new()));
    }
}
