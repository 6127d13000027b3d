mod errors;
mod identity_code;
pub mod limits;

pub use errors::IdentityCodeError;
pub use identity_code::{EstonianPersonalCodeValidator, IdentityCodeValidator};

pub type ApplicationId = u32;
pub type LoanAmount = i64;
pub type LoanPeriod = i32;
pub type Age = i32;
pub type CreditModifier = i64;
