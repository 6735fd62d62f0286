//! Tests for the verification code lifecycle

pub(crate) mod mocks;

mod manager_tests;
