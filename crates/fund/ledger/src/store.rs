//! Fund storage facade
//!
//! Wires the ownership registry, authorization gate, both ledgers, and
//! the event journal into the single deployable surface the fund
//! orchestrator talks to. Each call is one atomic operation: validation
//! runs before the first write, so a failed call leaves no partial
//! state behind and records nothing.

use crate::{InvestorLedger, ShareClassLedger};
use chrono::{DateTime, Utc};
use fund_registry::{AuthorizationGate, OwnershipRegistry};
use fund_types::{
    ActorId, CallContext, EventJournal, FeeSchedule, FundResult, InvestorRecord, InvestorType,
    RecordedEvent, ShareClass,
};
use serde::{Deserialize, Serialize};

/// The deployed record-keeping core.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FundStore {
    registry: OwnershipRegistry,
    gate: AuthorizationGate,
    investors: InvestorLedger,
    share_classes: ShareClassLedger,
    journal: EventJournal,
}

impl FundStore {
    /// Deploy with `deployer` as sole owner; the manager role is fixed
    /// to that identity for the life of the store.
    pub fn new(deployer: ActorId) -> Self {
        let registry = OwnershipRegistry::new(deployer);
        let gate = AuthorizationGate::for_registry(&registry);
        Self {
            registry,
            gate,
            investors: InvestorLedger::new(),
            share_classes: ShareClassLedger::new(),
            journal: EventJournal::new(),
        }
    }

    // --- Ownership ---

    pub fn get_owners(&self, call: &CallContext) -> FundResult<Vec<ActorId>> {
        self.registry.get_owners(call)
    }

    pub fn owners(&self) -> &[ActorId] {
        self.registry.owners()
    }

    pub fn owner_count(&self) -> usize {
        self.registry.owner_count()
    }

    pub fn add_owner(&mut self, call: &CallContext, candidate: ActorId) -> FundResult<()> {
        self.registry.add_owner(call, candidate, &mut self.journal)
    }

    pub fn transfer_ownership(&mut self, call: &CallContext, new_owner: ActorId) -> FundResult<()> {
        self.registry
            .transfer_ownership(call, new_owner, &mut self.journal)
    }

    pub fn can_transfer_ownership(&self, call: &CallContext, new_owner: &ActorId) -> bool {
        self.registry.can_transfer_ownership(call, new_owner)
    }

    // --- Roles ---

    pub fn manager(&self) -> &ActorId {
        self.gate.manager()
    }

    pub fn fund(&self) -> Option<&ActorId> {
        self.gate.fund()
    }

    pub fn set_fund(&mut self, call: &CallContext, fund: ActorId) -> FundResult<()> {
        self.gate.set_fund(call, fund, &mut self.journal)
    }

    // --- Investors ---

    pub fn contains_investor(&self, investor: &ActorId) -> bool {
        self.investors.contains_investor(investor)
    }

    pub fn get_investor(&self, investor: &ActorId) -> InvestorRecord {
        self.investors.get_investor(investor)
    }

    pub fn investor_addresses(&self) -> &[ActorId] {
        self.investors.investor_addresses()
    }

    pub fn add_investor(
        &mut self,
        call: &CallContext,
        investor: ActorId,
        investor_type: InvestorType,
    ) -> FundResult<()> {
        self.investors
            .add_investor(&self.gate, call, investor, investor_type, &mut self.journal)
    }

    pub fn modify_investor(
        &mut self,
        call: &CallContext,
        investor: ActorId,
        record: InvestorRecord,
        reason: &str,
    ) -> FundResult<()> {
        self.investors
            .modify_investor(&self.gate, call, investor, record, reason, &mut self.journal)
    }

    pub fn remove_investor(&mut self, call: &CallContext, investor: &ActorId) -> FundResult<()> {
        self.investors
            .remove_investor(&self.gate, call, investor, &mut self.journal)
    }

    // --- Share classes ---

    pub fn number_of_share_classes(&self) -> u32 {
        self.share_classes.number_of_share_classes()
    }

    pub fn total_share_supply(&self) -> u64 {
        self.share_classes.total_share_supply()
    }

    pub fn get_share_class(&self, index: u32) -> FundResult<&ShareClass> {
        self.share_classes.get_share_class(index)
    }

    pub fn add_share_class(&mut self, call: &CallContext, fees: FeeSchedule) -> FundResult<u32> {
        self.share_classes
            .add_share_class(&self.gate, call, fees, &mut self.journal)
    }

    pub fn modify_share_class_terms(
        &mut self,
        call: &CallContext,
        index: u32,
        fees: FeeSchedule,
    ) -> FundResult<()> {
        self.share_classes
            .modify_share_class_terms(&self.gate, call, index, fees, &mut self.journal)
    }

    pub fn modify_share_count(
        &mut self,
        call: &CallContext,
        index: u32,
        class_supply: u64,
        total_supply: u64,
    ) -> FundResult<()> {
        self.share_classes.modify_share_count(
            &self.gate,
            call,
            index,
            class_supply,
            total_supply,
            &mut self.journal,
        )
    }

    pub fn update_nav(
        &mut self,
        call: &CallContext,
        index: u32,
        share_nav: u64,
        calculated_at: DateTime<Utc>,
    ) -> FundResult<()> {
        self.share_classes.update_nav(
            &self.gate,
            call,
            index,
            share_nav,
            calculated_at,
            &mut self.journal,
        )
    }

    // --- Observability ---

    /// The full event history, one entry per successful mutation.
    pub fn events(&self) -> &[RecordedEvent] {
        self.journal.events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fund_types::{FundError, FundEvent};

    fn setup() -> (FundStore, CallContext, CallContext) {
        let manager = ActorId::new("manager");
        let fund = ActorId::new("fund");
        let mut store = FundStore::new(manager.clone());
        let manager_call = CallContext::new(manager);
        store.set_fund(&manager_call, fund.clone()).unwrap();
        (store, manager_call, CallContext::new(fund))
    }

    #[test]
    fn deployment_binds_roles() {
        let (store, _, _) = setup();
        assert_eq!(store.manager(), &ActorId::new("manager"));
        assert_eq!(store.fund(), Some(&ActorId::new("fund")));
        assert_eq!(store.owner_count(), 1);
        assert_eq!(store.events().len(), 1);
        assert!(matches!(
            store.events()[0].event,
            FundEvent::FundBound { .. }
        ));
    }

    #[test]
    fn every_successful_mutation_records_one_event() {
        let (mut store, manager_call, fund_call) = setup();
        let baseline = store.events().len();

        store
            .add_share_class(&manager_call, FeeSchedule::new(100, 100, 2000))
            .unwrap();
        assert_eq!(store.events().len(), baseline + 1);

        store
            .add_investor(&fund_call, ActorId::new("investor-1"), InvestorType::Eth)
            .unwrap();
        assert_eq!(store.events().len(), baseline + 2);

        store
            .modify_share_count(&fund_call, 0, 10, 10)
            .unwrap();
        assert_eq!(store.events().len(), baseline + 3);
    }

    #[test]
    fn failed_calls_record_nothing_and_change_nothing() {
        let (mut store, manager_call, fund_call) = setup();
        let baseline = store.events().len();

        // Unknown index: the total must stay untouched too.
        let err = store
            .modify_share_count(&fund_call, 3, 500, 500)
            .unwrap_err();
        assert_eq!(err, FundError::UnknownShareClass(3));
        assert_eq!(store.total_share_supply(), 0);

        let err = store
            .remove_investor(&manager_call, &ActorId::new("ghost"))
            .unwrap_err();
        assert_eq!(err, FundError::InvestorNotFound(ActorId::new("ghost")));

        assert_eq!(store.events().len(), baseline);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let (mut store, manager_call, fund_call) = setup();
        store
            .add_share_class(&manager_call, FeeSchedule::new(100, 50, 1500))
            .unwrap();
        store
            .add_investor(&fund_call, ActorId::new("investor-1"), InvestorType::Usd)
            .unwrap();

        let investor = ActorId::new("investor-1");
        assert_eq!(store.get_investor(&investor), store.get_investor(&investor));
        assert_eq!(
            store.get_share_class(0).unwrap(),
            store.get_share_class(0).unwrap()
        );
        assert_eq!(
            store.get_owners(&manager_call).unwrap(),
            store.get_owners(&manager_call).unwrap()
        );
    }
}
