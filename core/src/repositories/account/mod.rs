//! Account repository

pub mod mock;
pub mod repository;
