//! Domain layer for the Support domain

pub mod entities;
