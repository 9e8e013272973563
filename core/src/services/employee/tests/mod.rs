//! Tests for the employee service
