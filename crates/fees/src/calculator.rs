//! Fee calculator - folds the charge stack and writes the fee patch

use planpass_core::{Passport, Patch, Value};
use rust_decimal::Decimal;

use crate::keys;
use crate::options::{FeeConfig, FeeOptions};
use crate::stack::{ChargeContext, RunningTotal, CHARGE_ORDER};

/// Computes the final payable amount and VAT breakdown for one
/// monetary flow step.
pub struct FeeCalculator {
    config: FeeConfig,
}

impl FeeCalculator {
    /// Create a calculator with the default (statutory) rates
    pub fn new() -> Self {
        Self {
            config: FeeConfig::default(),
        }
    }

    /// Create with custom rates
    pub fn with_config(config: FeeConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Stack all applicable charges over the calculated base fee.
    ///
    /// Seeds the running total from `application.fee.calculated`
    /// (absent means 0), folds the fixed charge order, and returns the
    /// fee patch: `payable` and `payable.VAT` always, plus a line item
    /// and its `.VAT` companion for every charge that applied. Amounts
    /// are never rounded mid-chain; rounding belongs to presentation.
    pub fn compute(&self, passport: &Passport, options: &FeeOptions) -> Patch {
        let calculated = passport
            .get(keys::CALCULATED)
            .and_then(Value::as_decimal)
            .unwrap_or(Decimal::ZERO);

        let ctx = ChargeContext {
            passport,
            options,
            config: &self.config,
            calculated,
        };
        let total = CHARGE_ORDER
            .iter()
            .fold(RunningTotal::seed(calculated), |running, charge| {
                charge.apply(&ctx, running)
            });

        let mut patch = Patch::new();
        for line in &total.lines {
            patch.insert(line.key, line.amount);
            patch.insert(keys::vat_key(line.key), line.vat);
        }
        patch.insert(keys::PAYABLE, total.payable);
        patch.insert(keys::vat_key(keys::PAYABLE), total.payable_vat);
        patch
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
