//! Event journal
//!
//! Every successful mutating operation records exactly one event; failed
//! operations and reads record nothing. The journal is the observability
//! side channel collaborators and tests inspect.

use crate::{ActorId, FeeSchedule, InvestorRecord, InvestorType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured record of one successful mutation, carrying the affected
/// identity or index and the before/after values relevant to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundEvent {
    OwnerAdded {
        owner: ActorId,
    },
    OwnershipTransferred {
        previous_owner: ActorId,
        new_owner: ActorId,
    },
    FundBound {
        fund: ActorId,
    },
    InvestorAdded {
        investor: ActorId,
        investor_type: InvestorType,
    },
    InvestorModified {
        investor: ActorId,
        previous: InvestorRecord,
        current: InvestorRecord,
        /// Free-text audit note supplied by the caller; not queryable state.
        reason: String,
    },
    InvestorRemoved {
        investor: ActorId,
        previous: InvestorRecord,
    },
    ShareClassAdded {
        index: u32,
        fees: FeeSchedule,
    },
    ShareClassTermsModified {
        index: u32,
        previous_fees: FeeSchedule,
        fees: FeeSchedule,
    },
    ShareCountModified {
        index: u32,
        previous_class_supply: u64,
        class_supply: u64,
        previous_total_supply: u64,
        total_supply: u64,
    },
    NavUpdated {
        index: u32,
        previous_nav: u64,
        share_nav: u64,
    },
}

/// A journal entry: the event plus its id and timestamp.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub event_id: String,
    pub event: FundEvent,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only in-memory event log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventJournal {
    events: Vec<RecordedEvent>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event. Mutators call this exactly once, after every
    /// check has passed and every write has landed.
    pub fn record(&mut self, event: FundEvent) {
        self.events.push(RecordedEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            event,
            recorded_at: Utc::now(),
        });
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RecordedEvent> {
        self.events.last()
    }
}
