pub mod check_address;

pub use check_address::{CheckAddressUseCase, CheckOutcome};
