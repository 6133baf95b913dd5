pub mod shares;

pub use shares::{ShareCreatedResponse, SharePayload};
