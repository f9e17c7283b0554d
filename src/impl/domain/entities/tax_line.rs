/// Whether the amount field is derived from the rate, or frozen to a value
/// the user typed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxLineMode {
    Derived,
    Manual,
}

/// One tax line of an invoice-entry form (IVA, or IIBB on sale invoices).
///
/// Invariant: in `Derived` mode the amount always equals
/// `base × percent / 100`; in `Manual` mode the amount is frozen and
/// `implied_percent` tracks `amount / base × 100` (0 when the base is 0).
#[derive(Debug, Clone, PartialEq)]
pub struct TaxLine {
    /// Last rate explicitly entered (or the default the form opened with).
    /// Survives manual mode, so clearing the amount field can fall back to
    /// it.
    pub percent: f64,
    pub amount: f64,
    pub mode: TaxLineMode,
    /// Rate implied by the frozen amount while in manual mode. Kept in sync
    /// for display but never overwrites the user's amount.
    pub implied_percent: f64,
    /// Disabled lines ignore input events and resolve to zero (ex. IIBB on
    /// purchase invoices).
    pub enabled: bool,
}

// --

impl TaxLine {
    pub fn with_rate(percent: f64) -> Self {
        Self {
            percent,
            amount: 0.0,
            mode: TaxLineMode::Derived,
            implied_percent: 0.0,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::with_rate(0.0)
        }
    }

    pub fn is_manual(&self) -> bool {
        self.mode == TaxLineMode::Manual
    }

    /// Rate currently backing the line: the implied rate while manual,
    /// otherwise the entered rate.
    pub fn effective_percent(&self) -> f64 {
        match self.mode {
            TaxLineMode::Manual => self.implied_percent,
            TaxLineMode::Derived => self.percent,
        }
    }
}
