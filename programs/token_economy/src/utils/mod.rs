pub mod issuance;
pub mod merkle;
pub mod signature;
pub mod token;

pub use issuance::*;
pub use merkle::*;
pub use signature::*;
pub use token::*;
