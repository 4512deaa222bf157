//! Ownership registry and authorization gate
//!
//! The registry holds the fund's one or two owner identities and supports
//! self-service slot rotation: either seat can be handed over by its
//! current holder without touching the other. The gate resolves the
//! `manager` and `fund` roles on top of it and answers every "may this
//! caller do that" question the ledgers ask.

#![deny(unsafe_code)]

pub mod gate;
pub mod ownership;

pub use gate::AuthorizationGate;
pub use ownership::{OwnershipRegistry, MAX_OWNERS};
