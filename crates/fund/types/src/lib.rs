//! Fund record-keeping domain types
//!
//! The persistent core of a pooled-investment vehicle reduces to a handful
//! of value types: actor identities, investor records, share classes, the
//! event journal, and a two-class error model. This crate holds those
//! types; `fund-registry` and `fund-ledger` hold the behavior.

#![deny(unsafe_code)]

pub mod error;
pub mod events;
pub mod identity;
pub mod investor;
pub mod share_class;

pub use error::{FundError, FundResult, Severity};
pub use events::{EventJournal, FundEvent, RecordedEvent};
pub use identity::{ActorId, CallContext};
pub use investor::{InvestorRecord, InvestorType};
pub use share_class::{FeeSchedule, ShareClass, INITIAL_SHARE_NAV, MAX_FEE_BPS};

use serde::{Deserialize, Serialize};

/// Mutating operations recognized by the authorization gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Add, remove, or modify an investor record.
    InvestorWrite,
    /// Add a share class or replace its fee terms.
    ShareClassWrite,
    /// Replace a class supply and the fund-wide total.
    ShareCountWrite,
    /// Bind the fund address (one-time).
    FundBind,
    /// Write back a recomputed per-share NAV.
    NavWrite,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::InvestorWrite => "investor write",
            Operation::ShareClassWrite => "share class write",
            Operation::ShareCountWrite => "share count write",
            Operation::FundBind => "fund binding",
            Operation::NavWrite => "nav write",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display() {
        assert_eq!(Operation::InvestorWrite.to_string(), "investor write");
        assert_eq!(Operation::FundBind.to_string(), "fund binding");
    }
}
