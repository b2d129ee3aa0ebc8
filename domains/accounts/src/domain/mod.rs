//! Domain layer for the Accounts domain

pub mod capability;
pub mod entities;
