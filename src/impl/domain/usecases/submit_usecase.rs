use chrono::NaiveDate;

use crate::domain::logic::utils::round_to_two;
use crate::entities::{InvoiceDraft, InvoicePayload, InvoiceType, SubmitMeta, TaxKind};
use crate::errors::SubmitError;

pub trait SubmitUsecase {
    /// Validates the form and assembles the payload fragment for the
    /// invoice create/update endpoint. `today` is injected so the
    /// future-date check stays deterministic.
    fn build_payload(
        &self,
        draft: &InvoiceDraft,
        meta: &SubmitMeta,
        today: NaiveDate,
    ) -> Result<InvoicePayload, SubmitError>;
}

pub(crate) struct SubmitUsecaseImpl;

impl SubmitUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SubmitUsecase for SubmitUsecaseImpl {
    fn build_payload(
        &self,
        draft: &InvoiceDraft,
        meta: &SubmitMeta,
        today: NaiveDate,
    ) -> Result<InvoicePayload, SubmitError> {
        if meta.number.trim().is_empty() {
            return Err(SubmitError::MissingField { field: "number" });
        }
        if meta.description.trim().is_empty() {
            return Err(SubmitError::MissingField {
                field: "description",
            });
        }
        let date = NaiveDate::parse_from_str(meta.date.trim(), "%Y-%m-%d").map_err(|_| {
            SubmitError::InvalidDate {
                raw: meta.date.clone(),
            }
        })?;
        if date > today {
            return Err(SubmitError::FutureDate { date });
        }
        if draft.base_amount <= 0.0 {
            return Err(SubmitError::NonPositiveAmount);
        }

        let is_purchase = draft.invoice_type == InvoiceType::Purchase;
        let iva = draft.resolve(TaxKind::Iva);
        let iibb = draft.resolve(TaxKind::Iibb);
        Ok(InvoicePayload {
            date,
            number: meta.number.clone(),
            description: meta.description.clone(),
            amount: draft.base_amount,
            account_id: meta.account_id,
            invoice_type: draft.invoice_type,
            iva_percent: iva.percent,
            iva_amount: iva.manual.then_some(iva.amount),
            iibb_percent: if is_purchase { 0.0 } else { iibb.percent },
            iibb_amount: if is_purchase {
                // Purchases always submit an explicit zero, regardless of
                // whatever the line held before it was disabled.
                Some(0.0)
            } else {
                iibb.manual.then_some(iibb.amount)
            },
            retenciones: if is_purchase {
                round_to_two(draft.retenciones)
            } else {
                0.0
            },
        })
    }
}
