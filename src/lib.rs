//! Authgate Library
//!
//! Exposes the auth core and HTTP surface for the binary and for
//! integration tests.

pub mod auth;
pub mod config;
pub mod middleware;
