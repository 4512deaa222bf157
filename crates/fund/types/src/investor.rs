//! Investor records
//!
//! A record whose type is `Unset` is observably identical to an investor
//! that was never added; removal resets a record to that state.

use serde::{Deserialize, Serialize};

/// Whitelisted investor categories. `Unset` doubles as "absent".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorType {
    #[default]
    Unset,
    Eth,
    Usd,
}

impl InvestorType {
    pub fn is_set(&self) -> bool {
        !matches!(self, InvestorType::Unset)
    }
}

/// Full investor record.
///
/// Update semantics are whole-record replacement, so callers re-supply
/// every field on modify; an omitted-in-intent field really does reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorRecord {
    pub investor_type: InvestorType,
    /// Subscribed amount pending allocation.
    pub subscribe_amount: u64,
    /// Allocated share units.
    pub shares: u64,
    /// Index into the share-class ledger; meaningful only while the type
    /// is set.
    pub share_class: u32,
    /// Redemption amount pending payout.
    pub redeem_amount: u64,
    /// Shares pending redemption.
    pub redeem_shares: u64,
}

impl InvestorRecord {
    /// A fresh whitelist entry: type set, everything else zero.
    pub fn whitelisted(investor_type: InvestorType) -> Self {
        Self {
            investor_type,
            ..Self::default()
        }
    }

    /// True when the record denotes a live investor.
    pub fn is_present(&self) -> bool {
        self.investor_type.is_set()
    }
}
