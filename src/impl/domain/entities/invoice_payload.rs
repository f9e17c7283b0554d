use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

use super::invoice_draft::InvoiceType;

/// Final values for one tax line, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTax {
    pub percent: f64,
    pub amount: f64,
    /// True when the amount was typed directly rather than derived from the
    /// rate.
    pub manual: bool,
}

/// Submit-time fields owned by the form glue outside the tax engine.
#[derive(Debug, Clone)]
pub struct SubmitMeta {
    /// Raw `YYYY-MM-DD` value from the date input.
    pub date: String,
    pub number: String,
    pub description: String,
    pub account_id: i64,
}

/// Fragment sent to the invoice create/update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub date: NaiveDate,
    pub number: String,
    pub description: String,
    pub amount: f64,
    pub account_id: i64,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    pub iva_percent: f64,
    /// Only present when the IVA amount was entered manually; otherwise the
    /// backend derives it from the rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iva_amount: Option<f64>,
    pub iibb_percent: f64,
    /// Manual IIBB amount on sales; always an explicit 0 on purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iibb_amount: Option<f64>,
    /// Retained taxes on purchases; always 0 on sales.
    pub retenciones: f64,
}
