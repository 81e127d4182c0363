//! HTTP integration tests.
//!
//! Starts an axum server on port 0 and exercises it with reqwest.

#![cfg(feature = "http")]

mod support;
