use crate::data::models::decimal_input_model::{sanitize, DecimalInputModel};
use crate::entities::{InvoiceDraft, InvoiceType, ResolvedTax, TaxKind, TaxLineMode};

use super::utils::{derived_amount, implied_percent, round_to_two};

impl InvoiceDraft {
    /// Sets the pre-tax invoice amount and recomputes both tax lines. Sign
    /// is not meaningful for a tax base, so the value is clamped to its
    /// absolute value. Never fails.
    pub fn set_base(&mut self, new_base: f64) {
        self.base_amount = if new_base.is_finite() {
            new_base.abs()
        } else {
            0.0
        };
        self.recalc();
    }

    /// Rate field edited. Exits manual mode (the typed rate wins over any
    /// frozen amount), stores the rate and recomputes the amount. Empty or
    /// unparseable input counts as a rate of 0. Ignored on a disabled line.
    pub fn set_percent(&mut self, kind: TaxKind, raw: &str) {
        if !self.line(kind).enabled {
            return;
        }
        let percent = f64::from(DecimalInputModel::from(raw));
        let line = self.line_mut(kind);
        line.mode = TaxLineMode::Derived;
        line.percent = percent;
        self.recalc();
    }

    /// Amount field edited. Non-empty input freezes the amount (manual
    /// mode) and back-computes the implied rate for display. Clearing the
    /// field exits manual mode and falls back to the last explicitly
    /// entered rate. Ignored on a disabled line.
    pub fn set_amount(&mut self, kind: TaxKind, raw: &str) {
        if !self.line(kind).enabled {
            return;
        }
        if sanitize(raw).trim().is_empty() {
            let line = self.line_mut(kind);
            if line.is_manual() {
                line.mode = TaxLineMode::Derived;
                line.implied_percent = 0.0;
            }
        } else {
            let amount = f64::from(DecimalInputModel::from(raw)).abs();
            let line = self.line_mut(kind);
            line.mode = TaxLineMode::Manual;
            line.amount = amount;
        }
        self.recalc();
    }

    /// Flat retained-tax amount. Only meaningful on purchase invoices; sign
    /// is stripped and empty input resets to 0.
    pub fn set_retenciones(&mut self, raw: &str) {
        if self.invoice_type != InvoiceType::Purchase {
            return;
        }
        self.retenciones = f64::from(DecimalInputModel::from(raw)).abs();
    }

    /// Switches between sale and purchase, toggling which secondary field is
    /// active. The inactive side is zeroed and disabled, but the stored IIBB
    /// rate survives a round trip through purchase mode.
    pub fn switch_invoice_type(&mut self, invoice_type: InvoiceType) {
        self.invoice_type = invoice_type;
        match invoice_type {
            InvoiceType::Sale => {
                self.iibb.enabled = true;
                self.retenciones = 0.0;
            }
            InvoiceType::Purchase => {
                self.iibb.enabled = false;
                self.iibb.mode = TaxLineMode::Derived;
                self.iibb.implied_percent = 0.0;
                self.iibb.amount = 0.0;
            }
        }
        self.recalc();
    }

    /// Final values for one line, rounded to 2 places with sign stripped.
    /// Idempotent: repeated calls without intervening edits return identical
    /// values. A disabled line resolves to zero regardless of stored state.
    pub fn resolve(&self, kind: TaxKind) -> ResolvedTax {
        let line = self.line(kind);
        if !line.enabled {
            return ResolvedTax {
                percent: 0.0,
                amount: 0.0,
                manual: false,
            };
        }
        ResolvedTax {
            percent: round_to_two(line.effective_percent().abs()),
            amount: round_to_two(line.amount.abs()),
            manual: line.is_manual(),
        }
    }

    /// Invoice total as the ledger table lists it: base plus IVA plus
    /// retained taxes.
    pub fn total_with_taxes(&self) -> f64 {
        (self.base_amount + self.iva.amount + self.retenciones).abs()
    }

    /// Base the secondary line is computed over. IIBB compounds on top of
    /// the IVA amount (tax on tax), not the bare invoice base.
    pub fn iibb_base(&self) -> f64 {
        self.base_amount + self.iva.amount
    }

    fn recalc(&mut self) {
        let base = self.base_amount;
        match self.iva.mode {
            TaxLineMode::Derived => self.iva.amount = derived_amount(base, self.iva.percent),
            TaxLineMode::Manual => {
                self.iva.implied_percent = implied_percent(self.iva.amount, base)
            }
        }
        if !self.iibb.enabled {
            self.iibb.amount = 0.0;
            return;
        }
        let iibb_base = self.iibb_base();
        match self.iibb.mode {
            TaxLineMode::Derived => {
                self.iibb.amount = derived_amount(iibb_base, self.iibb.percent)
            }
            TaxLineMode::Manual => {
                self.iibb.implied_percent = implied_percent(self.iibb.amount, iibb_base)
            }
        }
    }
}
