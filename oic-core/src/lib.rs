pub mod calculations;
pub mod models;

pub use calculations::worksheets::{
    OfferWorksheet, OfferWorksheetError, OfferWorksheetInput, PaymentTermsError,
};
pub use models::*;
