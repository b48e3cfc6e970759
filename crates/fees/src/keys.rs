//! Fee passport keys
//!
//! All fee line items live under the `application.fee.*` namespace.
//! These names are a downstream compatibility contract and must be
//! preserved bit-for-bit.

/// Incoming base fee, computed by an earlier flow step
pub const CALCULATED: &str = "application.fee.calculated";

/// Final total owed
pub const PAYABLE: &str = "application.fee.payable";

/// Fast-track surcharge line item
pub const FAST_TRACK: &str = "application.fee.fastTrack";

/// Service-charge line item
pub const SERVICE_CHARGE: &str = "application.fee.serviceCharge";

/// Payment-processing line item
pub const PAYMENT_PROCESSING: &str = "application.fee.paymentProcessing";

/// Where the flow records the user's fast-track opt-in
pub const FAST_TRACK_OPT_IN: &str = "fastTrack.optIn";

/// The VAT companion key of a line item
pub fn vat_key(key: &str) -> String {
    format!("{}.VAT", key)
}
