//! # VeriGate API
//!
//! actix-web HTTP surface for registration, verification, login and
//! password recovery.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
