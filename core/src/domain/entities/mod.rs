//! Domain entities

pub mod account;
pub mod challenge;
