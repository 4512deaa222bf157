//! Role resolution and admission control
//!
//! The gate is the only admission-control discipline in the core: every
//! ledger mutator calls `authorize` before touching state. It knows two
//! privileged identities. `manager` is the registry's sole owner at
//! deployment and stays that identity even after the owner slots rotate;
//! `fund` is a delegated operational identity bound exactly once.

use crate::OwnershipRegistry;
use fund_types::{
    ActorId, CallContext, EventJournal, FundError, FundEvent, FundResult, Operation,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Resolves the `manager` and `fund` roles and gates every mutation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorizationGate {
    manager: ActorId,
    fund: Option<ActorId>,
}

impl AuthorizationGate {
    /// Capture the manager role from a freshly deployed registry.
    pub fn for_registry(registry: &OwnershipRegistry) -> Self {
        Self {
            manager: registry.owners()[0].clone(),
            fund: None,
        }
    }

    pub fn manager(&self) -> &ActorId {
        &self.manager
    }

    pub fn fund(&self) -> Option<&ActorId> {
        self.fund.as_ref()
    }

    /// Bind the fund address. Manager-only, exactly once; a second
    /// attempt fails without disturbing the first binding.
    pub fn set_fund(
        &mut self,
        call: &CallContext,
        fund: ActorId,
        journal: &mut EventJournal,
    ) -> FundResult<()> {
        self.authorize(call, Operation::FundBind)?;
        if fund.is_null() {
            return Err(FundError::NullIdentity);
        }
        if self.fund.is_some() {
            return Err(FundError::FundAlreadyBound);
        }

        self.fund = Some(fund.clone());

        info!(fund = %fund, "fund address bound");

        journal.record(FundEvent::FundBound { fund });
        Ok(())
    }

    /// Role table: investor writes are shared by manager and fund,
    /// structural writes are manager-only, supply and NAV writes belong
    /// to the fund.
    pub fn is_authorized(&self, caller: &ActorId, operation: Operation) -> bool {
        let is_manager = *caller == self.manager;
        let is_fund = self.fund.as_ref() == Some(caller);
        match operation {
            Operation::InvestorWrite => is_manager || is_fund,
            Operation::ShareClassWrite | Operation::FundBind => is_manager,
            Operation::ShareCountWrite | Operation::NavWrite => is_fund,
        }
    }

    /// Admission check run at the top of every mutator: non-payable
    /// first, then role membership. Failing either way is an ordinary
    /// rejection, never a fatal one.
    pub fn authorize(&self, call: &CallContext, operation: Operation) -> FundResult<()> {
        call.ensure_non_payable()?;
        if !self.is_authorized(&call.caller, operation) {
            warn!(caller = %call.caller, operation = %operation, "unauthorized call rejected");
            return Err(FundError::Unauthorized {
                caller: call.caller.clone(),
                operation,
            });
        }
        Ok(())
    }
}
