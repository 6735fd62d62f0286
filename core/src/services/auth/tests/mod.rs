//! Tests for the auth orchestration service
