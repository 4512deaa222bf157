//! Share-class ledger
//!
//! Append-only indexed share classes plus the fund-wide supply total.
//! Indexes are dense, assigned as "current count" at creation, and never
//! reused; removal is not supported.

use chrono::{DateTime, Utc};
use fund_registry::AuthorizationGate;
use fund_types::{
    CallContext, EventJournal, FeeSchedule, FundError, FundEvent, FundResult, Operation,
    ShareClass,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Append-only collection of share classes and the supply aggregates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShareClassLedger {
    classes: Vec<ShareClass>,
    total_share_supply: u64,
}

impl ShareClassLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_share_classes(&self) -> u32 {
        self.classes.len() as u32
    }

    /// Fund-wide unit total. Maintained by `modify_share_count`, not
    /// derived from the per-class supplies.
    pub fn total_share_supply(&self) -> u64 {
        self.total_share_supply
    }

    /// The class at `index`, or an unknown-index rejection.
    pub fn get_share_class(&self, index: u32) -> FundResult<&ShareClass> {
        self.classes
            .get(index as usize)
            .ok_or(FundError::UnknownShareClass(index))
    }

    /// Open a new class with the given fee terms. Manager-only.
    pub fn add_share_class(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        fees: FeeSchedule,
        journal: &mut EventJournal,
    ) -> FundResult<u32> {
        gate.authorize(call, Operation::ShareClassWrite)?;
        fees.validate()?;

        let index = self.number_of_share_classes();
        self.classes.push(ShareClass::open(index, fees));

        info!(index, ?fees, "share class added");

        journal.record(FundEvent::ShareClassAdded { index, fees });
        Ok(index)
    }

    /// Replace the fee terms wholesale; supply, NAV, and the calc
    /// timestamp stay untouched. Manager-only.
    pub fn modify_share_class_terms(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        index: u32,
        fees: FeeSchedule,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::ShareClassWrite)?;
        fees.validate()?;
        let class = self
            .classes
            .get_mut(index as usize)
            .ok_or(FundError::UnknownShareClass(index))?;

        let previous_fees = std::mem::replace(&mut class.fees, fees);

        info!(index, ?fees, "share class terms modified");

        journal.record(FundEvent::ShareClassTermsModified {
            index,
            previous_fees,
            fees,
        });
        Ok(())
    }

    /// Replace one class supply and the fund-wide total in a single
    /// call. Fund-only.
    ///
    /// Both numbers come from the caller and are applied independently;
    /// the ledger does not check that the class delta matches the total
    /// delta. The orchestration layer owns that consistency.
    pub fn modify_share_count(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        index: u32,
        class_supply: u64,
        total_supply: u64,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::ShareCountWrite)?;
        let class = self
            .classes
            .get_mut(index as usize)
            .ok_or(FundError::UnknownShareClass(index))?;

        let previous_class_supply = std::mem::replace(&mut class.share_supply, class_supply);
        let previous_total_supply = std::mem::replace(&mut self.total_share_supply, total_supply);

        info!(index, class_supply, total_supply, "share count modified");

        journal.record(FundEvent::ShareCountModified {
            index,
            previous_class_supply,
            class_supply,
            previous_total_supply,
            total_supply,
        });
        Ok(())
    }

    /// NAV write-back for the external NAV engine. Fund-only; replaces
    /// only the per-share NAV and its calc timestamp.
    pub fn update_nav(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        index: u32,
        share_nav: u64,
        calculated_at: DateTime<Utc>,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::NavWrite)?;
        let class = self
            .classes
            .get_mut(index as usize)
            .ok_or(FundError::UnknownShareClass(index))?;

        let previous_nav = std::mem::replace(&mut class.share_nav, share_nav);
        class.last_calc = calculated_at;

        info!(index, share_nav, "share class nav updated");

        journal.record(FundEvent::NavUpdated {
            index,
            previous_nav,
            share_nav,
        });
        Ok(())
    }
}
