//! Share lifecycle: policy-gated toggling and public resolution.

pub mod access;
pub mod service;
pub mod token;

pub use access::ShareAccessService;
pub use service::{SharePolicyService, ShareStatus, ShareTarget};
pub use token::TokenGenerator;
