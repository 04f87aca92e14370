//! Tests for the booking service

mod service_tests;
