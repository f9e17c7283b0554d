use crate::entities::TaxLine;

/// Placeholder token shown in a rate field whose amount was entered
/// manually.
pub(crate) const MANUAL_PLACEHOLDER: &str = "MOD";

/// What a rate input should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercentFieldView {
    /// Live numeric value.
    Value(String),
    /// The line is latched to a manually entered amount; the token is
    /// rendered as placeholder text instead of a number.
    ManualPlaceholder(&'static str),
}

/// Resting view of a rate field.
pub(crate) fn percent_field(line: &TaxLine) -> PercentFieldView {
    if line.is_manual() {
        PercentFieldView::ManualPlaceholder(MANUAL_PLACEHOLDER)
    } else {
        PercentFieldView::Value(trim_percent(line.percent))
    }
}

/// View while the field has focus: a manual line temporarily shows its
/// implied rate with two decimals, ready to be overtyped.
pub(crate) fn percent_field_focused(line: &TaxLine) -> String {
    if line.is_manual() {
        if line.implied_percent != 0.0 {
            format!("{:.2}", line.implied_percent)
        } else {
            "0.00".to_string()
        }
    } else {
        trim_percent(line.percent)
    }
}

// "21" rather than "21.0" for whole rates, like a user would have typed.
fn trim_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}", percent as i64)
    } else {
        format!("{}", percent)
    }
}
