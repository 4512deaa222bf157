//! Owner slots and self-service rotation
//!
//! Owners occupy fixed slots, at most two. Each slot is rotated only by
//! the identity currently holding it; the set never shrinks and never
//! holds duplicates or the null identity. Exceeding the cap is not an
//! input problem, it is an invariant breach, and it fails on the fatal
//! channel.

use fund_types::{ActorId, CallContext, EventJournal, FundError, FundEvent, FundResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Hard cap on the owner set.
pub const MAX_OWNERS: usize = 2;

/// Ordered owner slots for the fund.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnershipRegistry {
    owners: Vec<ActorId>,
}

impl OwnershipRegistry {
    /// Deploy with the deployer as sole owner.
    pub fn new(deployer: ActorId) -> Self {
        Self {
            owners: vec![deployer],
        }
    }

    /// Current owners in slot order.
    pub fn owners(&self) -> &[ActorId] {
        &self.owners
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn is_owner(&self, actor: &ActorId) -> bool {
        self.owners.contains(actor)
    }

    /// Context-checked read of the owner slots.
    ///
    /// Open to any caller, owner or not, but non-payable like every other
    /// entry point. Mutates nothing and records no events.
    pub fn get_owners(&self, call: &CallContext) -> FundResult<Vec<ActorId>> {
        call.ensure_non_payable()?;
        Ok(self.owners.clone())
    }

    /// Append a second owner. Legal only while one slot is filled.
    pub fn add_owner(
        &mut self,
        call: &CallContext,
        candidate: ActorId,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        call.ensure_non_payable()?;
        if !self.is_owner(&call.caller) {
            return Err(FundError::NotAnOwner(call.caller.clone()));
        }
        if self.owners.len() >= MAX_OWNERS {
            return Err(FundError::OwnerCapExceeded);
        }
        if candidate.is_null() {
            return Err(FundError::NullIdentity);
        }
        if self.is_owner(&candidate) {
            return Err(FundError::DuplicateOwner(candidate));
        }

        self.owners.push(candidate.clone());

        info!(owner = %candidate, "owner added");

        journal.record(FundEvent::OwnerAdded { owner: candidate });
        Ok(())
    }

    /// Replace the caller's own slot with `new_owner`, leaving the other
    /// slot untouched.
    pub fn transfer_ownership(
        &mut self,
        call: &CallContext,
        new_owner: ActorId,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        let slot = self.validate_transfer(call, &new_owner)?;

        let previous_owner = std::mem::replace(&mut self.owners[slot], new_owner.clone());

        info!(previous_owner = %previous_owner, new_owner = %new_owner, "ownership transferred");

        journal.record(FundEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }

    /// Side-effect-free feasibility probe for `transfer_ownership`, with
    /// identical validation.
    pub fn can_transfer_ownership(&self, call: &CallContext, new_owner: &ActorId) -> bool {
        self.validate_transfer(call, new_owner).is_ok()
    }

    fn validate_transfer(&self, call: &CallContext, new_owner: &ActorId) -> FundResult<usize> {
        call.ensure_non_payable()?;
        let slot = self
            .owners
            .iter()
            .position(|owner| owner == &call.caller)
            .ok_or_else(|| FundError::NotAnOwner(call.caller.clone()))?;
        if new_owner.is_null() {
            return Err(FundError::NullIdentity);
        }
        if *new_owner == call.caller {
            return Err(FundError::NoChange(new_owner.clone()));
        }
        if self.is_owner(new_owner) {
            return Err(FundError::DuplicateOwner(new_owner.clone()));
        }
        Ok(slot)
    }
}
