use std::sync::LazyLock;

use regex::Regex;

static NON_DECIMAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,.\-]").expect("static pattern is valid"));

/// Strips every character that cannot belong to a locale-formatted decimal
/// (digits, comma, dot, minus). The result may still be empty; an empty
/// sanitized string is how amount fields signal "cleared".
pub fn sanitize(raw: &str) -> String {
    NON_DECIMAL_CHARS.replace_all(raw, "").into_owned()
}

/// A decimal typed into a form field, in locale-ish format: digits, `,` or
/// `.` as decimal separator, optional thousands grouping, optional leading
/// minus.
///
/// Conversion is total. Anything unparseable degrades to 0 so typing is
/// never blocked; validation happens at submit time, not per keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalInputModel(pub f64);

impl From<&str> for DecimalInputModel {
    fn from(raw: &str) -> Self {
        let sanitized = sanitize(raw);
        if sanitized.is_empty() {
            return Self(0.0);
        }
        let comma = sanitized.rfind(',');
        let dot = sanitized.rfind('.');
        let mut normalized = match (comma, dot) {
            // Both present: whichever occurs last is the decimal mark, the
            // other is thousands grouping.
            (Some(c), Some(d)) if c > d => {
                sanitized.replace('.', "").replacen(',', ".", 1)
            }
            (Some(_), Some(_)) => sanitized.replace(',', ""),
            (Some(_), None) => sanitized.replacen(',', ".", 1),
            (None, Some(_)) => {
                let segments: Vec<&str> = sanitized.split('.').collect();
                if segments.len() > 2 {
                    // All but the last dot are thousands grouping.
                    let (decimal_part, grouping) =
                        segments.split_last().expect("split always yields a segment");
                    format!("{}.{}", grouping.concat(), decimal_part)
                } else {
                    sanitized
                }
            }
            (None, None) => sanitized,
        };
        if normalized.contains('-') {
            let negative = normalized.starts_with('-');
            normalized = normalized.replace('-', "");
            if negative {
                normalized = format!("-{}", normalized);
            }
        }
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Self(value),
            _ => Self(0.0),
        }
    }
}

impl From<DecimalInputModel> for f64 {
    fn from(model: DecimalInputModel) -> f64 {
        model.0
    }
}
