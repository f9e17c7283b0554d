// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod decimal_input_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod currency;
        pub(crate) mod invoice_draft;
        pub(crate) mod invoice_payload;
        pub(crate) mod tax_line;
    }
    pub(crate) mod logic {
        pub(crate) mod reconcile;
        pub(crate) mod utils;
    }
    pub(crate) mod usecases {
        pub(crate) mod submit_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod percent_field_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::currency::*;
        pub use crate::domain::entities::invoice_draft::*;
        pub use crate::domain::entities::invoice_payload::*;
        pub use crate::domain::entities::tax_line::*;
    }

    pub use crate::data::models::decimal_input_model::{sanitize, DecimalInputModel};
    pub use crate::domain::usecases::submit_usecase::SubmitUsecase;
    pub use crate::presentation::percent_field_fmt::PercentFieldView;
}
