//! Request and response DTOs. Wire names are camelCase to match the
//! web client.

pub mod request;
pub mod response;
