//! Share-class records
//!
//! A share class is a bucket of fund units sharing one fee schedule and
//! one NAV. Classes are indexed densely in creation order and are never
//! removed, so indexes are stable for the life of the fund.

use crate::{FundError, FundResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Basis-point ceiling for every fee field (100%).
pub const MAX_FEE_BPS: u16 = 10_000;

/// Initial per-share NAV, scaled by 10^4 (1.0000).
pub const INITIAL_SHARE_NAV: u64 = 10_000;

/// Fee terms for one share class, in basis points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub admin_bps: u16,
    pub mgmt_bps: u16,
    pub perform_bps: u16,
}

impl FeeSchedule {
    pub fn new(admin_bps: u16, mgmt_bps: u16, perform_bps: u16) -> Self {
        Self {
            admin_bps,
            mgmt_bps,
            perform_bps,
        }
    }

    /// Every field must stay within [0, 10000].
    pub fn validate(&self) -> FundResult<()> {
        let fields = [
            ("admin_bps", self.admin_bps),
            ("mgmt_bps", self.mgmt_bps),
            ("perform_bps", self.perform_bps),
        ];
        for (field, bps) in fields {
            if bps > MAX_FEE_BPS {
                return Err(FundError::FeeOutOfRange { field, bps });
            }
        }
        Ok(())
    }
}

/// One share class record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareClass {
    /// Dense index assigned at creation; never reused.
    pub index: u32,
    pub fees: FeeSchedule,
    /// Units currently issued in this class.
    pub share_supply: u64,
    /// Per-unit value scaled by 10^4.
    pub share_nav: u64,
    /// When the NAV was last computed.
    pub last_calc: DateTime<Utc>,
}

impl ShareClass {
    /// A newly opened class: no supply, NAV at par.
    pub fn open(index: u32, fees: FeeSchedule) -> Self {
        Self {
            index,
            fees,
            share_supply: 0,
            share_nav: INITIAL_SHARE_NAV,
            last_calc: Utc::now(),
        }
    }
}
