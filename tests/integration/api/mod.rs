//! API integration tests
//!
//! Integration tests for all API endpoints, driven through the router

mod posts_test;
