//! Fee options and configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-invocation fee-stacking options, supplied by the flow step.
///
/// Each toggle gates one charge in the stack; an absent amount means the
/// corresponding charge cannot apply regardless of its toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeOptions {
    /// Charge VAT on the calculated base fee
    #[serde(rename = "applyCalculatedVAT", default)]
    pub apply_calculated_vat: bool,

    /// Fast-track surcharge amount (applies only with user opt-in)
    #[serde(default)]
    pub fast_track_fee_amount: Option<Decimal>,

    /// Add the service charge (applies only above the threshold)
    #[serde(default)]
    pub apply_service_charge: bool,

    /// Service charge amount
    #[serde(default)]
    pub service_charge_amount: Option<Decimal>,

    /// Add the payment-processing percentage fee
    #[serde(default)]
    pub apply_payment_processing_fee: bool,
}

/// Configuration for the fee stack
///
/// Rates can be overridden via config file; the defaults reproduce the
/// statutory values (20% VAT, 100 service-charge threshold, 1% payment
/// processing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// VAT rate applied to every VAT-bearing line item
    #[serde(default = "default_vat_rate")]
    pub vat_rate: Decimal,

    /// Minimum running VAT-exclusive total for the service charge
    #[serde(default = "default_service_charge_threshold")]
    pub service_charge_threshold: Decimal,

    /// Payment-processing fee as a fraction of the running payable
    #[serde(default = "default_payment_processing_rate")]
    pub payment_processing_rate: Decimal,
}

// Default value functions for serde
fn default_vat_rate() -> Decimal {
    Decimal::new(20, 2) // 0.20
}

fn default_service_charge_threshold() -> Decimal {
    Decimal::new(100, 0)
}

fn default_payment_processing_rate() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            vat_rate: default_vat_rate(),
            service_charge_threshold: default_service_charge_threshold(),
            payment_processing_rate: default_payment_processing_rate(),
        }
    }
}

impl FeeConfig {
    /// VAT owed on a base amount, with no rounding
    pub fn vat_of(&self, base: Decimal) -> Decimal {
        base * self.vat_rate
    }
}
