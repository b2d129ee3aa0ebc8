//! HTTP handlers for the Ledger domain

pub mod cash_outs;
pub mod deposits;
