//! Investor ledger
//!
//! Keyed investor records with whitelist, whole-record modify, and
//! remove. Every mutation passes the authorization gate first; reads are
//! open to any caller and an absent investor reads as the all-zero
//! record.

use fund_registry::AuthorizationGate;
use fund_types::{
    ActorId, CallContext, EventJournal, FundError, FundEvent, FundResult, InvestorRecord,
    InvestorType, Operation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Keyed collection of investor records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InvestorLedger {
    records: HashMap<ActorId, InvestorRecord>,
    /// Every identity ever whitelisted, removals included.
    addresses: Vec<ActorId>,
}

impl InvestorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the investor currently has a set type.
    pub fn contains_investor(&self, investor: &ActorId) -> bool {
        self.records
            .get(investor)
            .map(InvestorRecord::is_present)
            .unwrap_or(false)
    }

    /// The investor's record, or the all-zero record when absent. A
    /// removed investor and one never added are indistinguishable here.
    pub fn get_investor(&self, investor: &ActorId) -> InvestorRecord {
        self.records.get(investor).copied().unwrap_or_default()
    }

    /// Every identity ever added, in whitelist order.
    pub fn investor_addresses(&self) -> &[ActorId] {
        &self.addresses
    }

    /// Whitelist a new investor with the given type and a zeroed record.
    pub fn add_investor(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        investor: ActorId,
        investor_type: InvestorType,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::InvestorWrite)?;
        if !investor_type.is_set() {
            return Err(FundError::UnsetInvestorType);
        }
        if self.contains_investor(&investor) {
            return Err(FundError::InvestorAlreadyExists(investor));
        }

        self.records
            .insert(investor.clone(), InvestorRecord::whitelisted(investor_type));
        self.addresses.push(investor.clone());

        info!(investor = %investor, investor_type = ?investor_type, "investor added");

        journal.record(FundEvent::InvestorAdded {
            investor,
            investor_type,
        });
        Ok(())
    }

    /// Replace the whole record. There is no existence precondition; a
    /// modify may create the record it writes. `reason` travels into the
    /// event for audit and is not stored as queryable state.
    pub fn modify_investor(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        investor: ActorId,
        record: InvestorRecord,
        reason: &str,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::InvestorWrite)?;

        let previous = self.get_investor(&investor);
        self.records.insert(investor.clone(), record);

        info!(investor = %investor, reason, "investor modified");

        journal.record(FundEvent::InvestorModified {
            investor,
            previous,
            current: record,
            reason: reason.to_string(),
        });
        Ok(())
    }

    /// Drop an investor back to the all-zero state. Removing one that is
    /// not present is a recoverable rejection, not a silent no-op.
    pub fn remove_investor(
        &mut self,
        gate: &AuthorizationGate,
        call: &CallContext,
        investor: &ActorId,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        gate.authorize(call, Operation::InvestorWrite)?;
        if !self.contains_investor(investor) {
            return Err(FundError::InvestorNotFound(investor.clone()));
        }

        let previous = self.records.remove(investor).unwrap_or_default();

        info!(investor = %investor, "investor removed");

        journal.record(FundEvent::InvestorRemoved {
            investor: investor.clone(),
            previous,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fund_registry::OwnershipRegistry;

    fn setup() -> (InvestorLedger, AuthorizationGate, EventJournal, CallContext) {
        let manager = ActorId::new("manager");
        let registry = OwnershipRegistry::new(manager.clone());
        let mut gate = AuthorizationGate::for_registry(&registry);
        let mut journal = EventJournal::new();
        gate.set_fund(
            &CallContext::new(manager),
            ActorId::new("fund"),
            &mut journal,
        )
        .unwrap();
        let fund_call = CallContext::new(ActorId::new("fund"));
        (InvestorLedger::new(), gate, EventJournal::new(), fund_call)
    }

    #[test]
    fn absent_investor_reads_as_zero() {
        let (ledger, _, _, _) = setup();
        let ghost = ActorId::new("ghost");
        assert!(!ledger.contains_investor(&ghost));
        assert_eq!(ledger.get_investor(&ghost), InvestorRecord::default());
    }

    #[test]
    fn adds_eth_and_usd_investors() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let eth = ActorId::new("investor-eth");
        let usd = ActorId::new("investor-usd");

        ledger
            .add_investor(&gate, &fund_call, eth.clone(), InvestorType::Eth, &mut journal)
            .unwrap();
        ledger
            .add_investor(&gate, &fund_call, usd.clone(), InvestorType::Usd, &mut journal)
            .unwrap();

        assert!(ledger.contains_investor(&eth));
        assert_eq!(ledger.get_investor(&eth).investor_type, InvestorType::Eth);
        assert_eq!(ledger.get_investor(&usd).investor_type, InvestorType::Usd);
        assert_eq!(ledger.investor_addresses(), &[eth, usd]);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn rejects_unset_type_and_duplicates() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let investor = ActorId::new("investor-1");

        let err = ledger
            .add_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorType::Unset,
                &mut journal,
            )
            .unwrap_err();
        assert_eq!(err, FundError::UnsetInvestorType);

        ledger
            .add_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorType::Eth,
                &mut journal,
            )
            .unwrap();
        let err = ledger
            .add_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorType::Usd,
                &mut journal,
            )
            .unwrap_err();
        assert_eq!(err, FundError::InvestorAlreadyExists(investor));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn unauthorized_callers_are_rejected() {
        let (mut ledger, gate, mut journal, _) = setup();
        let stranger_call = CallContext::new(ActorId::new("stranger"));
        let investor = ActorId::new("investor-1");

        let err = ledger
            .add_investor(
                &gate,
                &stranger_call,
                investor.clone(),
                InvestorType::Eth,
                &mut journal,
            )
            .unwrap_err();
        assert!(matches!(err, FundError::Unauthorized { .. }));

        let err = ledger
            .remove_investor(&gate, &stranger_call, &investor, &mut journal)
            .unwrap_err();
        assert!(matches!(err, FundError::Unauthorized { .. }));
        assert!(journal.is_empty());
    }

    #[test]
    fn manager_may_also_write() {
        let (mut ledger, gate, mut journal, _) = setup();
        let manager_call = CallContext::new(ActorId::new("manager"));
        let investor = ActorId::new("investor-1");

        ledger
            .add_investor(
                &gate,
                &manager_call,
                investor.clone(),
                InvestorType::Eth,
                &mut journal,
            )
            .unwrap();
        ledger
            .remove_investor(&gate, &manager_call, &investor, &mut journal)
            .unwrap();
        assert!(!ledger.contains_investor(&investor));
    }

    #[test]
    fn modify_is_full_replace() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let investor = ActorId::new("investor-1");
        ledger
            .add_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorType::Eth,
                &mut journal,
            )
            .unwrap();

        let subscribed = InvestorRecord {
            investor_type: InvestorType::Eth,
            subscribe_amount: 1_000_000,
            shares: 0,
            share_class: 1,
            redeem_amount: 0,
            redeem_shares: 0,
        };
        ledger
            .modify_investor(
                &gate,
                &fund_call,
                investor.clone(),
                subscribed,
                "request subscription",
                &mut journal,
            )
            .unwrap();
        assert_eq!(ledger.get_investor(&investor), subscribed);

        // Allocation re-supplies every field; subscribe_amount resets.
        let allocated = InvestorRecord {
            investor_type: InvestorType::Eth,
            subscribe_amount: 0,
            shares: 100_000,
            share_class: 1,
            redeem_amount: 0,
            redeem_shares: 0,
        };
        ledger
            .modify_investor(
                &gate,
                &fund_call,
                investor.clone(),
                allocated,
                "allocate shares",
                &mut journal,
            )
            .unwrap();

        let record = ledger.get_investor(&investor);
        assert_eq!(record.subscribe_amount, 0);
        assert_eq!(record.shares, 100_000);

        assert_eq!(
            journal.last().map(|entry| &entry.event),
            Some(&FundEvent::InvestorModified {
                investor,
                previous: subscribed,
                current: allocated,
                reason: "allocate shares".to_string(),
            })
        );
    }

    #[test]
    fn modify_may_create_on_write() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let investor = ActorId::new("investor-1");

        ledger
            .modify_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorRecord::whitelisted(InvestorType::Usd),
                "direct write",
                &mut journal,
            )
            .unwrap();

        assert!(ledger.contains_investor(&investor));
        // Only add_investor grows the roster.
        assert!(ledger.investor_addresses().is_empty());
    }

    #[test]
    fn remove_rejects_absent_investor() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let ghost = ActorId::new("ghost");

        let err = ledger
            .remove_investor(&gate, &fund_call, &ghost, &mut journal)
            .unwrap_err();
        assert_eq!(err, FundError::InvestorNotFound(ghost));
        assert!(err.is_rejection());
        assert!(journal.is_empty());
    }

    #[test]
    fn removed_investor_stays_on_roster_but_not_live() {
        let (mut ledger, gate, mut journal, fund_call) = setup();
        let investor = ActorId::new("investor-1");

        ledger
            .add_investor(
                &gate,
                &fund_call,
                investor.clone(),
                InvestorType::Eth,
                &mut journal,
            )
            .unwrap();
        ledger
            .remove_investor(&gate, &fund_call, &investor, &mut journal)
            .unwrap();

        assert!(!ledger.contains_investor(&investor));
        assert_eq!(ledger.get_investor(&investor), InvestorRecord::default());
        assert_eq!(ledger.investor_addresses(), &[investor]);
        assert_eq!(journal.len(), 2);
    }
}
