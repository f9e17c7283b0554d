/// Rate a fresh invoice form opens with for IVA (general rate).
pub const DEFAULT_IVA_PERCENT: f64 = 21.0;

/// Rate a fresh sale-invoice form opens with for IIBB.
pub const DEFAULT_IIBB_PERCENT: f64 = 3.0;
