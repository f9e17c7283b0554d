use serde_derive::{Deserialize, Serialize};

/// Currencies the bookkeeping accounts can be denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ars,
    Usd,
}

impl Currency {
    /// Display symbol. USD uses the local `u$s` convention, not the ISO
    /// symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ars => "$",
            Currency::Usd => "u$s",
        }
    }
}
