//! Investor and share-class ledgers
//!
//! Two keyed collections behind one authorization gate: the investor
//! ledger (whitelist, full-replace modify, remove) and the share-class
//! ledger (append-only classes, fee terms, supply aggregates, NAV
//! write-back). `FundStore` wires both together with the ownership
//! registry and the event journal into the deployable storage surface.

#![deny(unsafe_code)]

pub mod investors;
pub mod share_classes;
pub mod store;

pub use investors::InvestorLedger;
pub use share_classes::ShareClassLedger;
pub use store::FundStore;
