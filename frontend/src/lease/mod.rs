//! Analysis-and-entitlement workflow: identity, the three request flows and
//! the gate deciding what a visitor sees.

pub mod checkout;
pub mod client;
pub mod entitlement;
pub mod error;
pub mod flow;
pub mod identity;
pub mod models;
pub mod session;
pub mod workflow;
