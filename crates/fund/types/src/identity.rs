//! Actor identities and call context
//!
//! Identities are opaque strings. The null identity (the empty string)
//! plays the role the zero address played on chain: it is never a valid
//! owner, fund binding, or investor.

use crate::{FundError, FundResult};
use serde::{Deserialize, Serialize};

/// Identity of any actor touching the fund: owners, the bound fund
/// address, investors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    /// Generate a fresh random identity
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create an ActorId from a known string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The null identity
    pub fn null() -> Self {
        Self(String::new())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Short display form (first 8 chars)
    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message context for a single call into the store.
///
/// Every operation, read or write, is non-payable: a context carrying a
/// nonzero attached value is rejected before any other validation runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Who is making the call.
    pub caller: ActorId,
    /// Value attached to the call. Always rejected when nonzero.
    pub attached_value: u64,
}

impl CallContext {
    pub fn new(caller: ActorId) -> Self {
        Self {
            caller,
            attached_value: 0,
        }
    }

    pub fn with_value(mut self, attached_value: u64) -> Self {
        self.attached_value = attached_value;
        self
    }

    /// Reject the call if it arrived with value attached.
    pub fn ensure_non_payable(&self) -> FundResult<()> {
        if self.attached_value > 0 {
            return Err(FundError::ValueNotAccepted {
                attached: self.attached_value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_id_generate() {
        let id = ActorId::generate();
        assert!(!id.is_null());
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn actor_id_display() {
        let id = ActorId::new("manager-1");
        assert_eq!(format!("{}", id), "manager-1");
    }

    #[test]
    fn null_identity() {
        assert!(ActorId::null().is_null());
        assert!(!ActorId::new("x").is_null());
    }

    #[test]
    fn call_context_rejects_attached_value() {
        let call = CallContext::new(ActorId::new("caller"));
        assert!(call.ensure_non_payable().is_ok());

        let paid = call.with_value(1);
        assert_eq!(
            paid.ensure_non_payable().unwrap_err(),
            FundError::ValueNotAccepted { attached: 1 }
        );
    }
}
