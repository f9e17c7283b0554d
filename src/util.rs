use chrono::NaiveDate;

use crate::{
    data::models::decimal_input_model::DecimalInputModel,
    domain::usecases::submit_usecase::{SubmitUsecase as _, SubmitUsecaseImpl},
    entities::{Currency, InvoiceDraft, InvoicePayload, InvoiceType, SubmitMeta, TaxKind},
    errors::SubmitError,
    ext::standard_rates::{DEFAULT_IIBB_PERCENT, DEFAULT_IVA_PERCENT},
    presentation::{amount_fmt, percent_field_fmt},
    PercentFieldView,
};

/// One open invoice-entry form.
///
/// Owns its draft exclusively and translates raw input-event strings from
/// the UI into engine operations, handing back display-ready strings. The
/// UI layer stays a thin adapter: no tax state lives in widgets.
pub struct InvoiceForm {
    draft: InvoiceDraft,
    usecase: SubmitUsecaseImpl,
}

impl InvoiceForm {
    /// Fresh form with the standard rates.
    pub fn open(invoice_type: InvoiceType) -> Self {
        Self::with_rates(invoice_type, DEFAULT_IVA_PERCENT, DEFAULT_IIBB_PERCENT)
    }

    pub fn with_rates(invoice_type: InvoiceType, iva_percent: f64, iibb_percent: f64) -> Self {
        Self {
            draft: InvoiceDraft::new(invoice_type, iva_percent, iibb_percent),
            usecase: SubmitUsecaseImpl::new(),
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    /// Base-amount field edited.
    pub fn base_input(&mut self, raw: &str) {
        self.draft.set_base(f64::from(DecimalInputModel::from(raw)));
    }

    /// Rate field edited for the given line.
    pub fn percent_input(&mut self, kind: TaxKind, raw: &str) {
        self.draft.set_percent(kind, raw);
    }

    /// Amount field edited for the given line.
    pub fn amount_input(&mut self, kind: TaxKind, raw: &str) {
        self.draft.set_amount(kind, raw);
    }

    /// Retained-taxes field edited (purchase invoices only).
    pub fn retenciones_input(&mut self, raw: &str) {
        self.draft.set_retenciones(raw);
    }

    pub fn switch_type(&mut self, invoice_type: InvoiceType) {
        self.draft.switch_invoice_type(invoice_type);
    }

    /// Display value for a tax-amount field, es-AR formatted.
    pub fn amount_display(&self, kind: TaxKind) -> String {
        amount_fmt::format_amount(self.draft.line(kind).amount)
    }

    /// Display state for a rate field: live value, or the manual
    /// placeholder.
    pub fn percent_display(&self, kind: TaxKind) -> PercentFieldView {
        percent_field_fmt::percent_field(self.draft.line(kind))
    }

    /// Rate-field text while focused for editing.
    pub fn percent_display_focused(&self, kind: TaxKind) -> String {
        percent_field_fmt::percent_field_focused(self.draft.line(kind))
    }

    /// Invoice total (base + IVA + retained) with the currency symbol, as
    /// the ledger table shows it.
    pub fn total_display(&self, currency: Currency) -> String {
        amount_fmt::format_with_symbol(self.draft.total_with_taxes(), currency)
    }

    /// Validates and resolves the form into the payload fragment for the
    /// invoice endpoint.
    pub fn submit(
        &self,
        meta: &SubmitMeta,
        today: NaiveDate,
    ) -> Result<InvoicePayload, SubmitError> {
        self.usecase.build_payload(&self.draft, meta, today)
    }
}
