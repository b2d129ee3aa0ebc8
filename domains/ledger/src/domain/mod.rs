//! Domain layer for the Ledger domain

pub mod entities;
