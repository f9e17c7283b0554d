use serde_derive::{Deserialize, Serialize};

use super::tax_line::TaxLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    Sale,
    Purchase,
}

/// Selects which tax line an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxKind {
    Iva,
    Iibb,
}

/// Transient state of one invoice-entry form. Owned exclusively by a single
/// form session, mutated on every keystroke, discarded on close or submit.
/// Nothing here is persisted; the backend only receives the resolved
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_type: InvoiceType,
    /// Invoice amount excluding taxes. Always >= 0.
    pub base_amount: f64,
    pub iva: TaxLine,
    /// Secondary line, active on sale invoices. Its base compounds the IVA
    /// amount on top of the invoice base.
    pub iibb: TaxLine,
    /// Flat retained-tax amount, active on purchase invoices.
    pub retenciones: f64,
}

// --

impl InvoiceDraft {
    pub fn new(invoice_type: InvoiceType, iva_percent: f64, iibb_percent: f64) -> Self {
        let iibb = match invoice_type {
            InvoiceType::Sale => TaxLine::with_rate(iibb_percent),
            InvoiceType::Purchase => TaxLine::disabled(),
        };
        Self {
            invoice_type,
            base_amount: 0.0,
            iva: TaxLine::with_rate(iva_percent),
            iibb,
            retenciones: 0.0,
        }
    }

    pub fn line(&self, kind: TaxKind) -> &TaxLine {
        match kind {
            TaxKind::Iva => &self.iva,
            TaxKind::Iibb => &self.iibb,
        }
    }

    pub(crate) fn line_mut(&mut self, kind: TaxKind) -> &mut TaxLine {
        match kind {
            TaxKind::Iva => &mut self.iva,
            TaxKind::Iibb => &mut self.iibb,
        }
    }
}
