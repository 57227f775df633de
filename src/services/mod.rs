//! Service layer for the expense ledger
//!
//! The service layer provides the ledger operations on top of the storage
//! layer, handling validation and the write-after-every-change contract.

pub mod ledger;

pub use ledger::LedgerStore;
