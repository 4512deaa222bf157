//! Error model
//!
//! Two disjoint failure classes flow out of the core: recoverable
//! rejections (bad input, unauthorized caller, missing entity) and fatal
//! invariant violations (the owner cap). Callers branch on `severity()`;
//! monitoring treats violations as bug signals, not routine rejections.

use crate::{ActorId, Operation};
use thiserror::Error;

/// Convenience alias used across the registry and ledger crates.
pub type FundResult<T> = Result<T, FundError>;

/// Every failure the record-keeping core can produce.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FundError {
    #[error("call is non-payable but carried value {attached}")]
    ValueNotAccepted { attached: u64 },

    #[error("caller {caller} is not authorized for {operation}")]
    Unauthorized {
        caller: ActorId,
        operation: Operation,
    },

    #[error("caller {0} is not a current owner")]
    NotAnOwner(ActorId),

    #[error("the null identity is not a valid target")]
    NullIdentity,

    #[error("transfer to {0} would not change ownership")]
    NoChange(ActorId),

    #[error("{0} already holds an owner slot")]
    DuplicateOwner(ActorId),

    #[error("fund address is already bound")]
    FundAlreadyBound,

    #[error("investor type must be set")]
    UnsetInvestorType,

    #[error("investor already exists: {0}")]
    InvestorAlreadyExists(ActorId),

    #[error("investor not found: {0}")]
    InvestorNotFound(ActorId),

    #[error("unknown share class index: {0}")]
    UnknownShareClass(u32),

    #[error("{field} of {bps} bps exceeds the {max} bps ceiling", max = crate::MAX_FEE_BPS)]
    FeeOutOfRange { field: &'static str, bps: u16 },

    #[error("owner capacity exceeded")]
    OwnerCapExceeded,
}

/// The two failure classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Recoverable rejection; the caller may retry with corrected input.
    Rejection,
    /// Fatal invariant violation; the operation halts and the failure is
    /// reported as a bug signal.
    Violation,
}

impl FundError {
    pub fn severity(&self) -> Severity {
        match self {
            FundError::OwnerCapExceeded => Severity::Violation,
            _ => Severity::Rejection,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.severity() == Severity::Rejection
    }

    pub fn is_violation(&self) -> bool {
        self.severity() == Severity::Violation
    }
}
